use enigo::{Direction, Enigo, Key, Keyboard, Settings};
use std::sync::Mutex;

use crate::action::Button;
use crate::error::BotError;
use crate::ports::InputDriver;

/// Keyboard-backed PlayStation controller. The streaming client binds each
/// pad input to a key; this table mirrors that binding, so pressing a
/// `Button` here lands as the matching pad input in the game.
pub struct PlaystationKeyboard {
    // enigo is Send but not Sync
    enigo: Mutex<Enigo>,
}

impl PlaystationKeyboard {
    pub fn new() -> Result<Self, BotError> {
        let enigo = Enigo::new(&Settings::default())
            .map_err(|e| BotError::Input(format!("failed to initialize input driver: {e}")))?;
        Ok(Self {
            enigo: Mutex::new(enigo),
        })
    }

    pub(crate) fn key_for(button: Button) -> Key {
        match button {
            Button::Cross => Key::Return,
            Button::Moon => Key::Backspace,
            Button::Pyramid => Key::Unicode('c'),
            Button::Box => Key::Unicode('\\'),
            Button::DPadUp => Key::UpArrow,
            Button::DPadDown => Key::DownArrow,
            Button::DPadLeft => Key::LeftArrow,
            Button::DPadRight => Key::RightArrow,
            Button::L1 => Key::Unicode('2'),
            Button::L2 => Key::Unicode('1'),
            Button::L3 => Key::Unicode('5'),
            Button::R1 => Key::Unicode('3'),
            Button::R2 => Key::Unicode('4'),
            Button::R3 => Key::Unicode('6'),
            Button::Options => Key::Unicode('o'),
            Button::Share => Key::Unicode('f'),
            Button::Touchpad => Key::Unicode('t'),
            Button::Ps => Key::Escape,
            Button::LStickUp => Key::Unicode('w'),
            Button::LStickDown => Key::Unicode('s'),
            Button::LStickLeft => Key::Unicode('['),
            Button::LStickRight => Key::Unicode(']'),
            Button::RStickUp => Key::PageUp,
            Button::RStickDown => Key::PageDown,
            Button::RStickLeft => Key::Unicode('-'),
            Button::RStickRight => Key::Unicode('='),
        }
    }

    fn apply(&self, button: Button, direction: Direction) -> Result<(), BotError> {
        let mut enigo = self
            .enigo
            .lock()
            .map_err(|_| BotError::Input("input driver mutex poisoned".to_string()))?;
        enigo
            .key(Self::key_for(button), direction)
            .map_err(|e| BotError::Input(e.to_string()))
    }
}

impl InputDriver for PlaystationKeyboard {
    fn press(&self, button: Button) -> Result<(), BotError> {
        self.apply(button, Direction::Press)
    }

    fn release(&self, button: Button) -> Result<(), BotError> {
        self.apply(button, Direction::Release)
    }

    fn tap(&self, button: Button) -> Result<(), BotError> {
        self.apply(button, Direction::Click)
    }
}
