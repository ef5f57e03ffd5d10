//! The editor loop: input routing, spawning, integration and drawing.
//!
//! One call to [`Editor::frame`] is one simulation tick. Sliders are the
//! only store of simulation parameters; the editor reads them by [`Param`]
//! every frame, so a slider drag takes effect on the very next tick.

use glam::{Vec2, Vec3};
use tracing::{debug, warn};

use crate::canvas::Canvas;
use crate::force::Force;
use crate::input::{PointerEvent, PointerKind, PointerState};
use crate::param::Param;
use crate::particle::Particle;
use crate::spawn::{SpawnParams, Spawner, DEFAULT_LIFETIME};
use crate::ui::{theme, Rect, Slider, Window, WindowStack};

/// Spacing of the background grid in pixels.
pub const GRID_SPACING: usize = 25;

/// Side of the square quit target in the top-right corner.
pub const QUIT_SIZE: f32 = 30.0;

/// Gap between the quit target and the canvas edges.
pub const QUIT_MARGIN: f32 = 10.0;

/// Radius around the pointer inside which a negative pull repels.
pub const POINTER_PULL_RADIUS: f32 = 120.0;

/// Blue channel of the start and end colors; only red and green have sliders.
pub const START_BLUE: f32 = 200.0;
pub const END_BLUE: f32 = 100.0;

const SLIDER_WIDTH: f32 = 200.0;
const PANEL_WIDTH: f32 = 250.0;

/// Construction-time settings of an [`Editor`].
#[derive(Debug, Clone, PartialEq)]
pub struct EditorSettings {
    pub width: u32,
    pub height: u32,
    /// Lifetime of every spawned particle, in ticks.
    pub particle_lifetime: f32,
    /// Upper bound on the live particle count.
    pub max_particles: usize,
    /// Seed for the spawner; `None` seeds from the clock.
    pub seed: Option<u64>,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            width: 1100,
            height: 700,
            particle_lifetime: DEFAULT_LIFETIME,
            max_particles: 50_000,
            seed: None,
        }
    }
}

/// What happened during one [`Editor::frame`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Particles created this frame.
    pub spawned: usize,
    /// Particles that died and were removed this frame.
    pub removed: usize,
    /// Particles alive after the frame.
    pub live: usize,
    /// The quit target was pressed.
    pub quit: bool,
}

/// Owns the panels and the particle set.
pub struct Editor {
    settings: EditorSettings,
    size: Vec2,
    stack: WindowStack,
    particles: Vec<Particle>,
    spawner: Spawner,
    paused: bool,
    at_cap: bool,
}

impl Editor {
    /// Editor with the default panel layout.
    pub fn new(settings: EditorSettings) -> Self {
        Self::with_windows(settings, default_windows())
    }

    /// Editor with a custom panel stack.
    pub fn with_windows(settings: EditorSettings, stack: WindowStack) -> Self {
        let spawner = match settings.seed {
            Some(seed) => Spawner::seeded(seed),
            None => Spawner::new(),
        };
        Self {
            size: Vec2::new(settings.width as f32, settings.height as f32),
            settings,
            stack,
            particles: Vec::new(),
            spawner,
            paused: false,
            at_cap: false,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn stack(&self) -> &WindowStack {
        &self.stack
    }

    /// Canvas size the editor lays out against.
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Track a new canvas size. Windows keep their positions.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.size = Vec2::new(width as f32, height as f32);
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Freeze or resume spawning and integration. Panels stay interactive.
    pub fn set_paused(&mut self, paused: bool) {
        if self.paused != paused {
            debug!(paused, "simulation pause toggled");
        }
        self.paused = paused;
    }

    pub fn toggle_pause(&mut self) {
        self.set_paused(!self.paused);
    }

    /// Drop every live particle. Returns how many were removed.
    pub fn clear_particles(&mut self) -> usize {
        let n = self.particles.len();
        self.particles.clear();
        self.at_cap = false;
        debug!(removed = n, "particles cleared");
        n
    }

    /// Square quit target in the top-right corner.
    pub fn quit_rect(&self) -> Rect {
        Rect::new(
            self.size.x - QUIT_SIZE - QUIT_MARGIN,
            QUIT_MARGIN,
            QUIT_SIZE,
            QUIT_SIZE,
        )
    }

    /// Box behind the particle counter in the bottom-right corner.
    pub fn overlay_rect(&self) -> Rect {
        Rect::new(self.size.x - 150.0, self.size.y - 40.0, 140.0, 30.0)
    }

    /// Current value of `param`, or its default if no slider drives it.
    pub fn param(&self, param: Param) -> f32 {
        self.stack
            .value(param)
            .unwrap_or_else(|| param.default_value())
    }

    /// Snapshot of the spawn sliders.
    pub fn spawn_params(&self) -> SpawnParams {
        SpawnParams {
            rate: self.param(Param::SpawnRate),
            spread: self.param(Param::AngleSpread),
            speed: self.param(Param::InitialSpeed),
            size: self.param(Param::StartSize),
            lifetime: self.settings.particle_lifetime,
            color_start: Vec3::new(
                self.param(Param::StartRed),
                self.param(Param::StartGreen),
                START_BLUE,
            ),
            color_end: Vec3::new(
                self.param(Param::EndRed),
                self.param(Param::EndGreen),
                END_BLUE,
            ),
        }
    }

    /// Forces beyond gravity and friction active this frame.
    ///
    /// With every force slider at zero this is empty.
    pub fn forces(&self, pointer: &PointerState) -> Vec<Force> {
        let mut forces = vec![
            Force::Wind(self.param(Param::Wind)),
            Force::Vortex {
                center: self.size * 0.5,
                strength: self.param(Param::Vortex),
            },
        ];

        let pull = self.param(Param::PointerPull);
        if pointer.secondary_held {
            if pull > 0.0 {
                forces.push(Force::Attract {
                    target: pointer.pos,
                    strength: pull,
                });
            } else if pull < 0.0 {
                forces.push(Force::Repel {
                    target: pointer.pos,
                    strength: -pull,
                    radius: POINTER_PULL_RADIUS,
                });
            }
        }

        forces.retain(|f| !f.is_noop());
        forces
    }

    /// Run one tick.
    ///
    /// Events are routed to the panels first, so spawning and physics see
    /// the slider values those events produced. A press on the quit target
    /// ends the frame right there: later events are dropped and nothing is
    /// spawned or moved.
    pub fn frame(&mut self, events: &[PointerEvent], pointer: &PointerState) -> FrameReport {
        let mut report = FrameReport::default();

        for event in events {
            self.stack.dispatch(event);
            if event.kind == PointerKind::Down && self.quit_rect().contains(event.pos) {
                report.quit = true;
                report.live = self.particles.len();
                return report;
            }
        }

        if !self.paused {
            if pointer.primary_held && !self.stack.contains(pointer.pos) {
                report.spawned = self.spawn(pointer.pos);
            }
            report.removed = self.integrate(pointer);
        }

        report.live = self.particles.len();
        report
    }

    fn spawn(&mut self, at: Vec2) -> usize {
        let params = self.spawn_params();
        let limit = self.settings.max_particles;
        let spawned = self
            .spawner
            .spawn_into(at, &params, &mut self.particles, limit);

        if spawned < params.count() {
            if !self.at_cap {
                warn!(limit, "particle limit reached, spawning paused");
                self.at_cap = true;
            }
        } else {
            self.at_cap = false;
        }
        spawned
    }

    /// Step every particle and drop the dead ones. Returns the number dropped.
    fn integrate(&mut self, pointer: &PointerState) -> usize {
        let gravity = self.param(Param::Gravity);
        let friction = self.param(Param::Friction);
        let forces = self.forces(pointer);

        for p in &mut self.particles {
            p.apply_forces(&forces);
            p.update(gravity, friction);
        }

        let before = self.particles.len();
        self.particles.retain(|p| !p.is_dead());
        before - self.particles.len()
    }

    /// Paint the full frame: background, grid, particles, panels, overlay.
    pub fn draw(&self, canvas: &mut Canvas) {
        canvas.clear(theme::BACKGROUND);

        let w = canvas.width() as i32;
        let h = canvas.height() as i32;
        for x in (0..w).step_by(GRID_SPACING) {
            canvas.vline(x, 0, h, theme::GRID);
        }
        for y in (0..h).step_by(GRID_SPACING) {
            canvas.hline(y, 0, w, theme::GRID);
        }

        for p in &self.particles {
            let rs = p.render_state();
            let [r, g, b] = rs.color;
            canvas.fill_circle(rs.center, rs.radius, [r, g, b, rs.alpha]);
        }

        self.stack.draw(canvas);

        let overlay = self.overlay_rect();
        canvas.fill_rect(overlay, theme::OVERLAY_BOX);
        canvas.text(
            Vec2::new(overlay.x + 10.0, overlay.y + 11.0),
            &format!("Particles: {}", self.particles.len()),
            1,
            theme::OVERLAY_TEXT,
        );

        canvas.fill_circle(self.quit_rect().center(), 5.0, theme::QUIT);
    }
}

impl std::fmt::Debug for Editor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Editor")
            .field("size", &self.size)
            .field("windows", &self.stack.titles())
            .field("particles", &self.particles.len())
            .field("paused", &self.paused)
            .finish()
    }
}

/// The stock panels: spawn, init, update and color in a column, forces
/// beside them.
pub fn default_windows() -> WindowStack {
    let slider = |param, y| Slider::for_param(param, Vec2::new(20.0, y), SLIDER_WIDTH);

    let mut stack = WindowStack::new();
    stack.push(
        Window::new("EMITTER: SPAWN", Rect::new(20.0, 20.0, PANEL_WIDTH, 150.0))
            .with(slider(Param::SpawnRate, 50.0))
            .with(slider(Param::AngleSpread, 100.0)),
    );
    stack.push(
        Window::new("PARTICLE: INIT", Rect::new(20.0, 180.0, PANEL_WIDTH, 150.0))
            .with(slider(Param::InitialSpeed, 50.0))
            .with(slider(Param::StartSize, 100.0)),
    );
    stack.push(
        Window::new("PARTICLE: UPDATE", Rect::new(20.0, 340.0, PANEL_WIDTH, 150.0))
            .with(slider(Param::Gravity, 50.0))
            .with(slider(Param::Friction, 100.0)),
    );
    stack.push(
        Window::new("PARTICLE: COLOR", Rect::new(20.0, 500.0, PANEL_WIDTH, 180.0))
            .with(slider(Param::StartRed, 50.0))
            .with(slider(Param::StartGreen, 80.0))
            .with(slider(Param::EndRed, 130.0))
            .with(slider(Param::EndGreen, 160.0)),
    );
    stack.push(
        Window::new("FORCES", Rect::new(290.0, 20.0, PANEL_WIDTH, 180.0))
            .with(slider(Param::Wind, 50.0))
            .with(slider(Param::Vortex, 100.0))
            .with(slider(Param::PointerPull, 150.0)),
    );
    stack
}
