use super::modes::GameMode;

/// Smooths mode classifications across frames: a mode only commits after N
/// consecutive equal observations, so one misclassified frame cannot flap the
/// state machine mid-match.
#[derive(Debug)]
pub struct ModeDebouncer {
    required: usize,
    last: Option<GameMode>,
    run: usize,
}

impl ModeDebouncer {
    pub fn new(required: usize) -> Self {
        Self {
            required: required.max(1),
            last: None,
            run: 0,
        }
    }

    /// Feeds one raw classification; returns the mode once its run length
    /// reaches the required count, `None` while still unstable.
    pub fn observe(&mut self, mode: GameMode) -> Option<GameMode> {
        if self.last == Some(mode) {
            self.run += 1;
        } else {
            self.last = Some(mode);
            self.run = 1;
        }
        (self.run >= self.required).then_some(mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commits_after_required_run_length() {
        let mut debouncer = ModeDebouncer::new(3);
        assert_eq!(debouncer.observe(GameMode::InMatch), None);
        assert_eq!(debouncer.observe(GameMode::InMatch), None);
        assert_eq!(debouncer.observe(GameMode::InMatch), Some(GameMode::InMatch));
        // A stable run keeps committing.
        assert_eq!(debouncer.observe(GameMode::InMatch), Some(GameMode::InMatch));
    }

    #[test]
    fn a_disagreeing_frame_resets_the_run() {
        let mut debouncer = ModeDebouncer::new(2);
        assert_eq!(debouncer.observe(GameMode::InMatch), None);
        assert_eq!(debouncer.observe(GameMode::InMenu), None);
        assert_eq!(debouncer.observe(GameMode::InMatch), None);
        assert_eq!(debouncer.observe(GameMode::InMatch), Some(GameMode::InMatch));
    }

    #[test]
    fn run_length_of_one_commits_immediately() {
        let mut debouncer = ModeDebouncer::new(1);
        assert_eq!(debouncer.observe(GameMode::InMenu), Some(GameMode::InMenu));
    }

    #[test]
    fn zero_is_treated_as_one() {
        let mut debouncer = ModeDebouncer::new(0);
        assert_eq!(debouncer.observe(GameMode::InMenu), Some(GameMode::InMenu));
    }
}
