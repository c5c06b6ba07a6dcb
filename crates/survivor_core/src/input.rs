use std::collections::HashSet;

use winit::event::{ElementState, WindowEvent};
use winit::keyboard::PhysicalKey;

/// Re-exported key and mouse enums from `winit` for convenience.
pub use winit::event::MouseButton;
pub use winit::keyboard::KeyCode;

/// Discrete input event, queued in arrival order until the frame loop drains
/// it.  Held-key state is tracked separately by [`InputState`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    CloseRequested,
    KeyPressed(KeyCode),
    KeyReleased(KeyCode),
    MousePressed(MouseButton),
    MouseReleased(MouseButton),
    /// Cursor position in window pixels.
    CursorMoved { x: f64, y: f64 },
    /// New window size in physical pixels.
    Resized { width: u32, height: u32 },
}

/// State of the keyboard and mouse at a given moment, plus the queue of
/// events not yet consumed.
///
/// The runner drives this structure by feeding it `winit` events through
/// [`InputState::handle_window_event`]; game code queries held keys and the
/// cursor position, and drains the event queue once per frame.
#[derive(Default)]
pub struct InputState {
    keys_down: HashSet<KeyCode>,
    mouse_buttons: HashSet<MouseButton>,
    mouse_pos: (f64, f64),
    events: Vec<InputEvent>,
}

impl InputState {
    /// Creates a fresh, empty input state.
    pub fn new() -> Self {
        Default::default()
    }

    /// Translate a raw window event.  Returns `true` if it was relevant to
    /// input.
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::CloseRequested => {
                self.events.push(InputEvent::CloseRequested);
                true
            }
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return false;
                };
                self.record_key(code, event.state == ElementState::Pressed, event.repeat);
                true
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.record_mouse_button(*button, *state == ElementState::Pressed);
                true
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.set_mouse_position(position.x, position.y);
                true
            }
            WindowEvent::Resized(size) => {
                self.events.push(InputEvent::Resized {
                    width: size.width,
                    height: size.height,
                });
                true
            }
            WindowEvent::Focused(false) => {
                // release events are not delivered to an unfocused window
                self.release_all();
                true
            }
            _ => false,
        }
    }

    /// Update held state for `key` and queue a press/release event.  OS
    /// auto-repeat presses do not queue anything.
    pub fn record_key(&mut self, key: KeyCode, pressed: bool, repeat: bool) {
        if pressed {
            self.keys_down.insert(key);
            if !repeat {
                self.events.push(InputEvent::KeyPressed(key));
            }
        } else {
            self.keys_down.remove(&key);
            self.events.push(InputEvent::KeyReleased(key));
        }
    }

    /// Update held state for `button` and queue a press/release event.
    pub fn record_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        if pressed {
            self.mouse_buttons.insert(button);
            self.events.push(InputEvent::MousePressed(button));
        } else {
            self.mouse_buttons.remove(&button);
            self.events.push(InputEvent::MouseReleased(button));
        }
    }

    /// Returns true if the given key is currently held down.
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    /// Returns true if the given mouse button is currently held.
    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.mouse_buttons.contains(&button)
    }

    /// Update the current mouse cursor position (window coordinates).
    pub fn set_mouse_position(&mut self, x: f64, y: f64) {
        self.mouse_pos = (x, y);
        self.events.push(InputEvent::CursorMoved { x, y });
    }

    /// Retrieve the last recorded mouse position.
    pub fn mouse_position(&self) -> (f64, f64) {
        self.mouse_pos
    }

    /// Forget every held key and button, queueing release events for them.
    pub fn release_all(&mut self) {
        let keys: Vec<KeyCode> = self.keys_down.drain().collect();
        for key in keys {
            self.events.push(InputEvent::KeyReleased(key));
        }
        let buttons: Vec<MouseButton> = self.mouse_buttons.drain().collect();
        for button in buttons {
            self.events.push(InputEvent::MouseReleased(button));
        }
    }

    /// Take every queued event, oldest first.
    pub fn drain_events(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Number of queued events.
    pub fn pending_events(&self) -> usize {
        self.events.len()
    }
}
