use chrono::{DateTime, Utc};
use std::time::Instant;

use super::modes::{GameMode, MatchState, MenuState};

/// Copyable view of the tracker for the act loop. Taken under the lock,
/// used after it is released.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateSnapshot {
    pub mode: GameMode,
    pub menu_state: Option<MenuState>,
    pub match_state: Option<MatchState>,
    pub last_transition: Instant,
    pub last_frame_at: Option<DateTime<Utc>>,
}

/// The game-state machine written by the inference steps and read by the act
/// loop. Only one sub-state may be populated at a time; a mode change clears
/// the sub-state belonging to the other mode, which keeps e.g. a stale
/// squad-selection flag from surviving into a live match.
#[derive(Debug)]
pub struct GameStateTracker {
    mode: GameMode,
    menu_state: Option<MenuState>,
    match_state: Option<MatchState>,
    last_transition: Instant,
    last_frame_at: Option<DateTime<Utc>>,
}

impl GameStateTracker {
    pub fn new() -> Self {
        Self {
            mode: GameMode::InMenu,
            menu_state: Some(MenuState::Unknown),
            match_state: None,
            last_transition: Instant::now(),
            last_frame_at: None,
        }
    }

    pub fn set_game_mode(&mut self, mode: GameMode) {
        if self.mode != mode {
            self.last_transition = Instant::now();
        }
        self.mode = mode;
        match mode {
            GameMode::InMatch => self.menu_state = None,
            GameMode::InMenu => {
                self.match_state = None;
                if self.menu_state.is_none() {
                    self.menu_state = Some(MenuState::Unknown);
                }
            }
        }
    }

    /// No-op unless currently in a menu.
    pub fn set_menu_state(&mut self, state: MenuState) {
        if self.mode == GameMode::InMenu {
            self.menu_state = Some(state);
        }
    }

    /// No-op unless currently in a match.
    pub fn set_match_state(&mut self, state: MatchState) {
        if self.mode == GameMode::InMatch {
            self.match_state = Some(state);
        }
    }

    /// Records the capture timestamp of the most recently inferred frame, so
    /// decisions can carry their originating frame time.
    pub fn record_frame(&mut self, captured_at: DateTime<Utc>) {
        self.last_frame_at = Some(captured_at);
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn menu_state(&self) -> Option<MenuState> {
        self.menu_state
    }

    pub fn match_state(&self) -> Option<MatchState> {
        self.match_state
    }

    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            mode: self.mode,
            menu_state: self.menu_state,
            match_state: self.match_state,
            last_transition: self.last_transition,
            last_frame_at: self.last_frame_at,
        }
    }
}

impl Default for GameStateTracker {
    fn default() -> Self {
        Self::new()
    }
}
