//! The windowed editor: winit event handling, pacing and presentation.

use std::sync::Arc;
use std::time::Instant;

use pfx::prelude::*;
use tracing::{debug, error, info};
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window as OsWindow, WindowId},
};

use crate::config::EditorConfig;
use crate::docs::{DocService, DocsError, SystemLauncher};
use crate::error::EditorError;
use crate::notify::{NoticeKind, Notifications, DEFAULT_DURATION};

/// Frames between FPS log lines.
const FPS_LOG_EVERY: u64 = 600;

/// Open the editor window and run until it is closed.
pub fn run(config: EditorConfig) -> Result<(), EditorError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = EditorApp::new(config);
    event_loop.run_app(&mut app)?;

    match app.fatal.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

struct EditorApp {
    config: EditorConfig,
    window: Option<Arc<OsWindow>>,
    presenter: Option<Presenter>,
    editor: Editor,
    canvas: Canvas,
    input: Input,
    clock: FrameClock,
    docs: DocService<SystemLauncher>,
    notices: Notifications,
    /// Setup failure that ended the event loop.
    fatal: Option<EditorError>,
}

impl EditorApp {
    fn new(config: EditorConfig) -> Self {
        let docs = DocService::new(
            config.docs.base_url.clone(),
            config.docs.cooldown(),
            SystemLauncher,
        );
        Self {
            editor: Editor::new(config.editor_settings()),
            canvas: Canvas::new(config.width, config.height),
            input: Input::new(),
            clock: FrameClock::new(config.target_fps),
            docs,
            notices: Notifications::new(),
            window: None,
            presenter: None,
            fatal: None,
            config,
        }
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<(), EditorError> {
        let attrs = OsWindow::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height));
        let window = Arc::new(event_loop.create_window(attrs)?);

        let presenter = pollster::block_on(Presenter::new(window.clone()))?;
        let (width, height) = presenter.size();
        self.resize(width, height);
        info!(width, height, "editor window ready");

        window.request_redraw();
        self.window = Some(window);
        self.presenter = Some(presenter);
        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if let Some(presenter) = &mut self.presenter {
            presenter.resize(width, height);
        }
        self.canvas.resize(width, height);
        self.editor.resize(width, height);
    }

    /// Keyboard shortcuts. Returns `true` when the editor should quit.
    fn handle_keys(&mut self) -> bool {
        if self.input.key_pressed(KeyCode::Escape) {
            return true;
        }
        if self.input.key_pressed(KeyCode::C) {
            self.editor.clear_particles();
        }
        if self.input.key_pressed(KeyCode::Space) {
            self.editor.toggle_pause();
        }
        if self.input.key_pressed(KeyCode::F1) {
            self.show_docs();
        }
        false
    }

    /// Look up the panel under the pointer, or open the index over bare canvas.
    fn show_docs(&mut self) {
        let topic = self
            .editor
            .stack()
            .window_at(self.input.mouse_position())
            .map(|w| w.title().to_string());

        let result = match topic {
            Some(title) => self.docs.lookup(&title),
            None => self.docs.open(),
        };
        if let Err(e) = result {
            self.report_docs_error(&e);
        }
    }

    fn report_docs_error(&mut self, e: &DocsError) {
        self.notices
            .notify(NoticeKind::Error, e.title(), e.to_string(), DEFAULT_DURATION);
    }

    /// Advance one tick if due, then draw and present.
    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        if self.clock.tick(now) {
            if self.handle_keys() {
                event_loop.exit();
                return;
            }

            let events = self.input.drain_events();
            let report = self.editor.frame(&events, &self.input.pointer());
            self.input.begin_frame();
            if report.quit {
                info!("quit target pressed");
                event_loop.exit();
                return;
            }

            if self.clock.frame() % FPS_LOG_EVERY == 0 {
                debug!(fps = self.clock.fps(), live = report.live, "frame stats");
            }
        }

        self.editor.draw(&mut self.canvas);
        self.notices.prune(now);
        self.notices.draw(&mut self.canvas, now);

        let Some(presenter) = &mut self.presenter else {
            return;
        };
        match presenter.present(&self.canvas) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => presenter.reconfigure(),
            Err(wgpu::SurfaceError::OutOfMemory) => {
                error!("GPU out of memory, exiting");
                event_loop.exit();
            }
            Err(e) => error!("Render error: {:?}", e),
        }
    }
}

impl ApplicationHandler for EditorApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init_window(event_loop) {
            error!("{}", e);
            self.fatal = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        self.input.handle_event(&event);
        if self.input.close_requested() {
            info!("close requested");
            event_loop.exit();
            return;
        }

        match event {
            WindowEvent::Resized(size) => {
                self.resize(size.width, size.height);
            }
            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.clock.is_due(Instant::now()) {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.clock.next_deadline()));
    }
}
