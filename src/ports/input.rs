use crate::action::Button;
use crate::error::BotError;

/// Key-injection collaborator. Synchronous on purpose: presses and releases
/// must happen immediately and in order, with no suspension point between a
/// press and the bookkeeping that remembers it. Injection is assumed reliable
/// but not idempotent-safe against double release, so the sequencer tracks
/// exactly what it pressed.
pub trait InputDriver: Send + Sync {
    fn press(&self, button: Button) -> Result<(), BotError>;
    fn release(&self, button: Button) -> Result<(), BotError>;

    fn tap(&self, button: Button) -> Result<(), BotError> {
        self.press(button)?;
        self.release(button)
    }
}
