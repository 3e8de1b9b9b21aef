use serde::{Deserialize, Serialize};

/// Top level of the game-state taxonomy: either a match is being played or
/// the game is somewhere in its menus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    InMatch,
    InMenu,
}

impl GameMode {
    /// Label set handed to the menu-vs-match classifier, index-aligned with
    /// its confidence vector.
    pub fn labels() -> &'static [&'static str] {
        &["IN_MATCH", "IN_MENU"]
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "IN_MATCH" => Some(GameMode::InMatch),
            "IN_MENU" => Some(GameMode::InMenu),
            _ => None,
        }
    }
}

/// Menu sub-state, valid only while `GameMode::InMenu`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MenuState {
    FullTime,
    HalfTime,
    PostMatchSummary,
    SquadSelection,
    Unknown,
}

impl MenuState {
    pub fn labels() -> &'static [&'static str] {
        &[
            "FULL_TIME_MENU",
            "HALF_TIME_MENU",
            "MENU_POST_MATCH_SUMMARY",
            "SQUAD_BATTLES_OPPONENT_SELECTION",
            "UNKNOWN",
        ]
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "FULL_TIME_MENU" => Some(MenuState::FullTime),
            "HALF_TIME_MENU" => Some(MenuState::HalfTime),
            "MENU_POST_MATCH_SUMMARY" => Some(MenuState::PostMatchSummary),
            "SQUAD_BATTLES_OPPONENT_SELECTION" => Some(MenuState::SquadSelection),
            "UNKNOWN" => Some(MenuState::Unknown),
            _ => None,
        }
    }
}

/// Match sub-state, valid only while `GameMode::InMatch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchState {
    Live,
    InstantReplay,
}

impl MatchState {
    pub fn labels() -> &'static [&'static str] {
        &["LIVE_MATCH", "INSTANT_REPLAY"]
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "LIVE_MATCH" => Some(MatchState::Live),
            "INSTANT_REPLAY" => Some(MatchState::InstantReplay),
            _ => None,
        }
    }
}
