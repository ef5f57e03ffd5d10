//! PFX Editor - interactive particle effects playground
//!
//! This crate provides:
//! - The windowed editor application on top of the `pfx` core
//! - JSON configuration
//! - Documentation lookups with a per-query cooldown
//! - On-screen toast notifications

pub mod app;
pub mod config;
pub mod docs;
pub mod error;
pub mod notify;

pub use app::run;
pub use config::{DocsConfig, EditorConfig};
pub use docs::{DocService, DocsError, Launcher, SystemLauncher};
pub use error::EditorError;
pub use notify::{Notice, NoticeKind, Notifications};
