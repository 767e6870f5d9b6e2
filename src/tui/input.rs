//! Input handling for the story viewer.
//!
//! Maps crossterm keyboard and mouse events to viewer actions. A mouse
//! press holds the story; the matching release resumes it and, when the
//! press was short, also counts as a tap on the left (previous) or right
//! (next) zone of the card.

use std::time::{Duration, Instant};

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::player::TapZone;

/// Viewer action decoded from an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    None,
    /// Pointer down: hold the story
    Press,
    /// Pointer up after a hold
    Release,
    /// Pointer up after a short press: resume, then navigate
    Tap(TapZone),
    /// Keyboard hold toggle
    ToggleHold,
    PrevUser,
    NextUser,
    Close,
}

/// Tracks the pointer between press and release.
#[derive(Debug, Clone)]
pub struct PointerTracker {
    hold_threshold: Duration,
    pressed_at: Option<Instant>,
}

impl PointerTracker {
    pub fn new(hold_threshold: Duration) -> Self {
        Self {
            hold_threshold,
            pressed_at: None,
        }
    }

    /// Handle a mouse event over a card `width` columns wide.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, width: u16, now: Instant) -> InputAction {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.pressed_at = Some(now);
                InputAction::Press
            }
            MouseEventKind::Up(MouseButton::Left) => match self.pressed_at.take() {
                Some(at) if now.saturating_duration_since(at) < self.hold_threshold => {
                    InputAction::Tap(tap_zone(mouse.column, width))
                }
                Some(_) => InputAction::Release,
                None => InputAction::None,
            },
            _ => InputAction::None,
        }
    }
}

/// Left third of the card goes back, the rest goes forward.
pub fn tap_zone(column: u16, width: u16) -> TapZone {
    if u32::from(column) * 3 < u32::from(width) {
        TapZone::Left
    } else {
        TapZone::Right
    }
}

/// Map a key press to an action.
pub fn handle_key_event(key: KeyEvent) -> InputAction {
    if key.kind == KeyEventKind::Release {
        return InputAction::None;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => InputAction::Close,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputAction::Close,
        KeyCode::Left | KeyCode::Char('h') => InputAction::Tap(TapZone::Left),
        KeyCode::Right | KeyCode::Char('l') => InputAction::Tap(TapZone::Right),
        KeyCode::Char(' ') => InputAction::ToggleHold,
        KeyCode::Up | KeyCode::Char('k') => InputAction::PrevUser,
        KeyCode::Down | KeyCode::Char('j') => InputAction::NextUser,
        _ => InputAction::None,
    }
}

/// Handle any input event.
pub fn handle_event(
    event: Event,
    pointer: &mut PointerTracker,
    width: u16,
    now: Instant,
) -> InputAction {
    match event {
        Event::Key(key) => handle_key_event(key),
        Event::Mouse(mouse) => pointer.handle_mouse(mouse, width, now),
        _ => InputAction::None,
    }
}
