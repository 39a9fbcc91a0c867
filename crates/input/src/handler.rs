//! Held-key tracking for terminal environments.
//!
//! The game needs two kinds of input each frame: whether a movement key is
//! currently held, and which keys were pressed since the last frame.
//! Terminals that do not emit key release events are supported by treating a
//! key as released once no press/repeat for it has arrived within a timeout.
//!
//! Jump is edge-triggered: auto-repeat of a held jump key only refreshes its
//! held state and never queues another `Jump`.

use std::time::Instant;

use arrayvec::ArrayVec;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::map::map_key_code;
use crate::types::{GameAction, Horizontal};

/// Max discrete actions buffered between two frames.
pub const PRESSED_CAPACITY: usize = 16;

// In terminals without key-release events, a short timeout prevents a single tap
// from turning into a sustained "held" state.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

#[derive(Debug, Clone, Copy)]
struct HeldKey {
    held: bool,
    last_seen: Instant,
}

impl HeldKey {
    fn new() -> Self {
        Self {
            held: false,
            last_seen: Instant::now(),
        }
    }

    fn press(&mut self) -> bool {
        self.last_seen = Instant::now();
        let was_held = self.held;
        self.held = true;
        !was_held
    }

    fn release(&mut self) {
        self.held = false;
    }

    fn expire(&mut self, timeout_ms: Option<u32>) {
        if let Some(timeout) = timeout_ms {
            if self.held && self.last_seen.elapsed().as_millis() > timeout as u128 {
                self.held = false;
            }
        }
    }
}

/// Tracks held movement keys and buffers pressed actions between frames.
#[derive(Debug, Clone)]
pub struct InputHandler {
    left: HeldKey,
    right: HeldKey,
    jump: HeldKey,
    pressed: ArrayVec<GameAction, PRESSED_CAPACITY>,
    /// `None` when the terminal reports key releases.
    key_release_timeout_ms: Option<u32>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            left: HeldKey::new(),
            right: HeldKey::new(),
            jump: HeldKey::new(),
            pressed: ArrayVec::new(),
            key_release_timeout_ms: Some(DEFAULT_KEY_RELEASE_TIMEOUT_MS),
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: Option<u32>) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> Option<u32> {
        self.key_release_timeout_ms
    }

    /// Feed a terminal key event.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.kind {
            KeyEventKind::Press => {
                let _ = self.handle_key_press(key.code);
            }
            KeyEventKind::Repeat => {
                // Keep the key held; repeats never count as new presses.
                if let Some(action) = map_key_code(key.code) {
                    if let Some(held) = self.held_mut(action) {
                        held.last_seen = Instant::now();
                    }
                }
            }
            KeyEventKind::Release => self.handle_key_release(key.code),
        }
    }

    /// Record a key press. Returns the mapped action when one was queued.
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<GameAction> {
        let action = map_key_code(code)?;
        let timeout = self.key_release_timeout_ms;
        let fresh = match self.held_mut(action) {
            Some(held) => {
                held.expire(timeout);
                held.press()
            }
            None => true,
        };
        if !fresh {
            return None;
        }
        self.pressed.try_push(action).ok().map(|_| action)
    }

    pub fn handle_key_release(&mut self, code: KeyCode) {
        if let Some(action) = map_key_code(code) {
            if let Some(held) = self.held_mut(action) {
                held.release();
            }
        }
    }

    /// Held-state slot for actions that are tracked while the key is down.
    fn held_mut(&mut self, action: GameAction) -> Option<&mut HeldKey> {
        match action {
            GameAction::MoveLeft => Some(&mut self.left),
            GameAction::MoveRight => Some(&mut self.right),
            GameAction::Jump => Some(&mut self.jump),
            _ => None,
        }
    }

    /// Currently held horizontal direction. Left wins when both are held.
    pub fn horizontal(&mut self) -> Horizontal {
        self.left.expire(self.key_release_timeout_ms);
        self.right.expire(self.key_release_timeout_ms);
        Horizontal::from_held(self.left.held, self.right.held)
    }

    /// Take every action pressed since the previous call, in arrival order.
    pub fn drain_pressed(&mut self) -> ArrayVec<GameAction, PRESSED_CAPACITY> {
        std::mem::take(&mut self.pressed)
    }

    pub fn reset(&mut self) {
        self.left = HeldKey::new();
        self.right = HeldKey::new();
        self.jump = HeldKey::new();
        self.pressed.clear();
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
