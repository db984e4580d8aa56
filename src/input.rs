use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::{Duration, Instant};

use crate::entities::GameState;

/// How long a key counts as held after its last press when the terminal
/// never reports releases
pub const HOLD_WITHOUT_RELEASE: Duration = Duration::from_millis(150);

/// Held-key snapshot consumed by one simulation step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

/// One-shot actions raised by key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Restart,
    Quit,
}

/// A key that can be held down for continuous input
#[derive(Debug, Default, Clone, Copy)]
struct HeldKey {
    pressed: bool,
    last_seen: Option<Instant>,
}

impl HeldKey {
    fn press(&mut self, now: Instant) {
        self.pressed = true;
        self.last_seen = Some(now);
    }

    fn release(&mut self) {
        self.pressed = false;
        self.last_seen = None;
    }

    fn is_held(&self, now: Instant, reports_release: bool) -> bool {
        if reports_release {
            return self.pressed;
        }
        self.last_seen
            .is_some_and(|seen| now.saturating_duration_since(seen) < HOLD_WITHOUT_RELEASE)
    }
}

/// Tracks the state of keys that can be held down for continuous input
#[derive(Debug, Default)]
struct KeyState {
    left: HeldKey,
    right: HeldKey,
    fire: HeldKey,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Binding {
    Left,
    Right,
    Fire,
}

fn binding_for(code: KeyCode) -> Option<Binding> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Binding::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Binding::Right),
        KeyCode::Char(' ') | KeyCode::Up => Some(Binding::Fire),
        _ => None,
    }
}

/// Manages input polling and translates raw key events into held controls and actions
pub struct InputManager {
    key_state: KeyState,
    oneshot_actions: Vec<InputAction>,
    /// Whether the terminal sends key release events
    reports_release: bool,
}

impl InputManager {
    pub fn new(reports_release: bool) -> Self {
        Self {
            key_state: KeyState::default(),
            oneshot_actions: Vec::new(),
            reports_release,
        }
    }

    /// Drains all pending terminal events without blocking
    pub fn poll_events(&mut self, game_state: GameState) -> color_eyre::Result<()> {
        while event::poll(Duration::from_millis(0))? {
            if let Event::Key(key_event) = event::read()? {
                self.handle_key_event(key_event, game_state, Instant::now());
            }
        }
        Ok(())
    }

    /// Processes a key event and updates key state and one-shot actions
    pub fn handle_key_event(&mut self, key_event: KeyEvent, game_state: GameState, now: Instant) {
        match key_event.kind {
            KeyEventKind::Press => self.handle_key_press(key_event, game_state, now),
            KeyEventKind::Repeat => {
                if let Some(binding) = binding_for(key_event.code) {
                    self.key_mut(binding).press(now);
                }
            }
            KeyEventKind::Release => {
                if let Some(binding) = binding_for(key_event.code) {
                    self.key_mut(binding).release();
                }
            }
        }
    }

    fn handle_key_press(&mut self, key_event: KeyEvent, game_state: GameState, now: Instant) {
        // Quit works in any state
        if matches!(
            key_event.code,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
        ) || (key_event.code == KeyCode::Char('c')
            && key_event.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.oneshot_actions.push(InputAction::Quit);
            return;
        }

        if game_state == GameState::GameOver
            && matches!(
                key_event.code,
                KeyCode::Char(' ') | KeyCode::Char('r') | KeyCode::Char('R')
            )
        {
            self.oneshot_actions.push(InputAction::Restart);
        }

        if let Some(binding) = binding_for(key_event.code) {
            self.key_mut(binding).press(now);
        }
    }

    fn key_mut(&mut self, binding: Binding) -> &mut HeldKey {
        match binding {
            Binding::Left => &mut self.key_state.left,
            Binding::Right => &mut self.key_state.right,
            Binding::Fire => &mut self.key_state.fire,
        }
    }

    /// One-shot actions since the last call
    pub fn take_actions(&mut self) -> Vec<InputAction> {
        std::mem::take(&mut self.oneshot_actions)
    }

    /// Snapshot of held keys as of `now`
    pub fn controls(&self, now: Instant) -> Controls {
        let held = |key: &HeldKey| key.is_held(now, self.reports_release);
        Controls {
            left: held(&self.key_state.left),
            right: held(&self.key_state.right),
            fire: held(&self.key_state.fire),
        }
    }
}
