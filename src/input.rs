//! Input handling for the editor.
//!
//! `Input` turns raw winit window events into two things:
//! - a queue of discrete [`PointerEvent`]s (down / up / move) that the
//!   editor drains once per frame and dispatches to the window stack;
//! - continuous state (button held, pointer position, keys pressed this
//!   frame) queried by the spawner and the shell.
//!
//! # Usage
//!
//! ```ignore
//! // In the winit handler:
//! input.handle_event(&event);
//!
//! // Once per frame:
//! let events = input.drain_events();
//! let report = editor.frame(&events, &input.pointer());
//! input.begin_frame();
//! ```

use glam::Vec2;
use std::collections::HashSet;
use winit::event::{ElementState, MouseButton as WinitMouseButton, WindowEvent};
use winit::keyboard::{KeyCode as WinitKeyCode, PhysicalKey};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl From<WinitMouseButton> for MouseButton {
    fn from(btn: WinitMouseButton) -> Self {
        match btn {
            WinitMouseButton::Left => MouseButton::Left,
            WinitMouseButton::Right => MouseButton::Right,
            WinitMouseButton::Middle => MouseButton::Middle,
            _ => MouseButton::Middle, // Back/forward/extra buttons never act as primary
        }
    }
}

/// Keys the editor reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Escape,
    F1,
    C,
    Space,
    Other(u32),
}

impl From<WinitKeyCode> for KeyCode {
    fn from(key: WinitKeyCode) -> Self {
        match key {
            WinitKeyCode::Escape => KeyCode::Escape,
            WinitKeyCode::F1 => KeyCode::F1,
            WinitKeyCode::KeyC => KeyCode::C,
            WinitKeyCode::Space => KeyCode::Space,
            _ => KeyCode::Other(key as u32),
        }
    }
}

/// What happened to the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Down,
    Up,
    Move,
}

/// A discrete pointer event in screen coordinates.
///
/// Move events carry the button that was most recently pressed; widgets
/// only look at `button` for `Down`/`Up`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub pos: Vec2,
    pub button: MouseButton,
}

impl PointerEvent {
    pub fn down(pos: Vec2) -> Self {
        Self::with_button(PointerKind::Down, pos, MouseButton::Left)
    }

    pub fn up(pos: Vec2) -> Self {
        Self::with_button(PointerKind::Up, pos, MouseButton::Left)
    }

    pub fn moved(pos: Vec2) -> Self {
        Self::with_button(PointerKind::Move, pos, MouseButton::Left)
    }

    pub fn with_button(kind: PointerKind, pos: Vec2, button: MouseButton) -> Self {
        Self { kind, pos, button }
    }

    /// Primary-button press.
    #[inline]
    pub fn is_primary_down(&self) -> bool {
        self.kind == PointerKind::Down && self.button == MouseButton::Left
    }

    /// Primary-button release.
    #[inline]
    pub fn is_primary_up(&self) -> bool {
        self.kind == PointerKind::Up && self.button == MouseButton::Left
    }
}

/// Continuous pointer state sampled at frame time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerState {
    pub pos: Vec2,
    pub primary_held: bool,
    pub secondary_held: bool,
}

/// Input state tracking for keyboard and mouse.
#[derive(Debug, Default)]
pub struct Input {
    keys_held: HashSet<KeyCode>,
    keys_pressed: HashSet<KeyCode>,

    mouse_held: HashSet<MouseButton>,
    mouse_position: Vec2,
    last_button: Option<MouseButton>,

    events: Vec<PointerEvent>,
    close_requested: bool,
}

impl Input {
    /// Create a new input tracker.
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Key Queries ==========

    /// Check if a key was pressed this frame (just went down).
    pub fn key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// Check if a key is currently held down.
    pub fn key_held(&self, key: KeyCode) -> bool {
        self.keys_held.contains(&key)
    }

    // ========== Mouse Queries ==========

    /// Check if a mouse button is currently held down.
    pub fn mouse_held(&self, button: MouseButton) -> bool {
        self.mouse_held.contains(&button)
    }

    /// Get the mouse position in screen pixels.
    pub fn mouse_position(&self) -> Vec2 {
        self.mouse_position
    }

    /// Snapshot of the continuous pointer state.
    pub fn pointer(&self) -> PointerState {
        PointerState {
            pos: self.mouse_position,
            primary_held: self.mouse_held(MouseButton::Left),
            secondary_held: self.mouse_held(MouseButton::Right),
        }
    }

    /// Whether the OS asked to close the window.
    pub fn close_requested(&self) -> bool {
        self.close_requested
    }

    // ========== Frame Lifecycle ==========

    /// Take the pointer events queued since the last drain, oldest first.
    pub fn drain_events(&mut self) -> Vec<PointerEvent> {
        std::mem::take(&mut self.events)
    }

    /// Called at the end of each frame to clear per-frame state.
    pub fn begin_frame(&mut self) {
        self.keys_pressed.clear();
    }

    /// Queue a synthetic pointer event, updating held state like a real one.
    pub fn push_pointer(&mut self, event: PointerEvent) {
        self.mouse_position = event.pos;
        match event.kind {
            PointerKind::Down => {
                self.mouse_held.insert(event.button);
                self.last_button = Some(event.button);
            }
            PointerKind::Up => {
                self.mouse_held.remove(&event.button);
            }
            PointerKind::Move => {}
        }
        self.events.push(event);
    }

    /// Process a winit window event.
    pub fn handle_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                self.close_requested = true;
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(keycode) = event.physical_key {
                    let key = KeyCode::from(keycode);
                    match event.state {
                        ElementState::Pressed => {
                            // Only fire pressed event if not already held (no repeat)
                            if !self.keys_held.contains(&key) {
                                self.keys_pressed.insert(key);
                            }
                            self.keys_held.insert(key);
                        }
                        ElementState::Released => {
                            self.keys_held.remove(&key);
                        }
                    }
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let button = MouseButton::from(*button);
                let kind = match state {
                    ElementState::Pressed => PointerKind::Down,
                    ElementState::Released => PointerKind::Up,
                };
                self.push_pointer(PointerEvent::with_button(kind, self.mouse_position, button));
            }

            WindowEvent::CursorMoved { position, .. } => {
                let pos = Vec2::new(position.x as f32, position.y as f32);
                let button = self.last_button.unwrap_or(MouseButton::Left);
                self.push_pointer(PointerEvent::with_button(PointerKind::Move, pos, button));
            }

            _ => {}
        }
    }
}
