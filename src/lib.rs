//! # PFX - Particle Effects Editor core
//!
//! A 2D particle playground: particles are spawned under the pointer,
//! pushed around by simple force fields, and tuned live through sliders
//! sitting in draggable panels.
//!
//! Everything is rasterized on the CPU into a [`Canvas`]; the GPU is only
//! used by [`Presenter`] to put the finished frame on screen.
//!
//! ## Quick Start
//!
//! ```ignore
//! use pfx::prelude::*;
//!
//! let mut editor = Editor::new(EditorSettings::default());
//! let mut canvas = Canvas::new(1100, 700);
//!
//! // Each frame:
//! let report = editor.frame(&input.drain_events(), &input.pointer());
//! editor.draw(&mut canvas);
//! presenter.present(&canvas)?;
//! ```
//!
//! ## Core Concepts
//!
//! ### Particles
//!
//! A [`Particle`] carries a position, a velocity, a lifetime counted in
//! ticks and a two-stop color gradient. Each tick applies gravity, then
//! friction, then moves the particle and burns one tick of life. Color
//! runs from start to end over the lifetime while alpha fades out.
//!
//! ### Forces
//!
//! Forces are stateless velocity perturbations:
//!
//! | Force | Effect |
//! |-------|--------|
//! | [`Force::Gravity`] | Constant vertical acceleration |
//! | [`Force::Wind`] | Constant horizontal acceleration |
//! | [`Force::Attract`] | Unit pull toward a point |
//! | [`Force::Repel`] | Push away from a point, fading to zero at a radius |
//! | [`Force::Vortex`] | Swirl around a point, stronger further out |
//! | [`Force::Friction`] | Multiplicative damping |
//!
//! ### Panels
//!
//! The UI is a stack of [`Window`]s holding [`Slider`]s. Pressing a
//! window's title bar raises it and starts a drag. The topmost window
//! under the pointer swallows events, and the spawner stays idle while
//! the pointer is over any window.
//!
//! Sliders are the single source of truth for simulation parameters; the
//! [`Editor`] reads them by [`Param`] every frame.
//!
//! ## Frame Order
//!
//! 1. Route pointer events to the panels (topmost first)
//! 2. Spawn at the pointer if the primary button is held over bare canvas
//! 3. Integrate every particle and drop the dead ones
//! 4. Draw grid, particles, panels, counter overlay and quit target

pub mod canvas;
pub mod editor;
pub mod error;
pub mod font;
pub mod force;
mod gpu;
pub mod input;
pub mod param;
pub mod particle;
pub mod spawn;
pub mod time;
pub mod ui;

pub use canvas::{Canvas, Rgba};
pub use editor::{Editor, EditorSettings, FrameReport};
pub use error::GpuError;
pub use force::Force;
pub use glam::{Vec2, Vec3};
pub use gpu::Presenter;
pub use param::Param;
pub use particle::Particle;
pub use spawn::{SpawnParams, Spawner};
pub use ui::{Rect, Slider, Widget, Window, WindowStack};

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use pfx::prelude::*;
/// ```
pub mod prelude {
    pub use crate::canvas::{Canvas, Rgba};
    pub use crate::editor::{Editor, EditorSettings, FrameReport};
    pub use crate::force::Force;
    pub use crate::gpu::Presenter;
    pub use crate::input::{Input, KeyCode, MouseButton, PointerEvent, PointerState};
    pub use crate::param::Param;
    pub use crate::particle::Particle;
    pub use crate::spawn::{SpawnParams, Spawner};
    pub use crate::time::FrameClock;
    pub use crate::ui::{Rect, Response, Slider, Widget, Window, WindowStack};
    pub use crate::{Vec2, Vec3};
}
