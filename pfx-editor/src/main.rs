//! PFX Editor
//!
//! Usage: `pfx-editor [config.json]`
//!
//! Mouse: hold left on the canvas to spawn, drag panel title bars and
//! sliders, hold right to use the pointer pull force.
//! Keys: `Esc` quit, `C` clear particles, `Space` pause, `F1` documentation.

use std::env;
use std::process::ExitCode;

use pfx_editor::EditorConfig;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match env::args().nth(1) {
        Some(path) => match EditorConfig::load(&path) {
            Ok(config) => {
                info!(%path, "loaded config");
                config
            }
            Err(e) => {
                error!(%path, "{}", e);
                return ExitCode::FAILURE;
            }
        },
        None => EditorConfig::default(),
    };

    match pfx_editor::run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
