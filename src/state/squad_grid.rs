use crate::action::Button;

/// Played/selected flags observed by one squad-selection detection pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct GridObservation {
    /// Detected cursor position. The detector reports -1 for the decorative
    /// top row, which callers normalize before navigation runs.
    pub cursor: Option<(i8, i8)>,
    pub played: [[bool; 2]; 2],
}

/// The 2x2 squad-selection menu, tracked as played flags plus a cursor.
///
/// Traversal is clockwise from the top left:
/// (0,0) -> (0,1) -> (1,1) -> (1,0) -> wrap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionGrid {
    grid: [[bool; 2]; 2],
    row: i8,
    col: i8,
}

impl SelectionGrid {
    pub fn new() -> Self {
        Self {
            grid: [[false; 2]; 2],
            row: 0,
            col: 0,
        }
    }

    pub fn grid(&self) -> [[bool; 2]; 2] {
        self.grid
    }

    pub fn cursor(&self) -> (i8, i8) {
        (self.row, self.col)
    }

    pub fn is_full(&self) -> bool {
        self.grid.iter().all(|row| row.iter().all(|&cell| cell))
    }

    /// Replaces the grid; `None` resets every cell to unplayed.
    pub fn set_grid(&mut self, grid: Option<[[bool; 2]; 2]>) {
        self.grid = grid.unwrap_or_default();
    }

    fn reset(&mut self) {
        self.grid = [[false; 2]; 2];
        self.row = 0;
        self.col = 0;
    }

    /// Clamps the cursor back into {0,1}x{0,1}. The detection step produces a
    /// -1 row sentinel when the selection sits on the decorative top row;
    /// callers must normalize before play/navigate logic runs.
    pub fn normalize(&mut self) {
        self.row = self.row.clamp(0, 1);
        self.col = self.col.clamp(0, 1);
    }

    /// Folds one detection pass into the tracked state. Played flags only
    /// accumulate; a marker missed for a single frame does not un-play a cell.
    pub fn merge_observation(&mut self, observation: &GridObservation) {
        if let Some((row, col)) = observation.cursor {
            self.row = row;
            self.col = col;
        }
        for row in 0..2 {
            for col in 0..2 {
                if observation.played[row][col] {
                    self.grid[row][col] = true;
                }
            }
        }
    }

    /// Advances the cursor one clockwise step and returns the d-pad input
    /// that performs it on screen.
    pub fn navigate_to_next(&mut self) -> Button {
        let (row, col, button) = match (self.row, self.col) {
            (0, 0) => (0, 1, Button::DPadRight),
            (0, 1) => (1, 1, Button::DPadDown),
            (1, 1) => (1, 0, Button::DPadLeft),
            _ => (0, 0, Button::DPadUp),
        };
        self.row = row;
        self.col = col;
        button
    }

    /// Plays the next match and returns the inputs that do it: a full grid
    /// resets for a fresh rotation, an unplayed current cell is confirmed in
    /// place, anything else advances clockwise first. Requires an in-range
    /// cursor; see [`SelectionGrid::normalize`].
    pub fn play_current(&mut self) -> Vec<Button> {
        if self.is_full() {
            self.reset();
        }
        let (row, col) = (self.row as usize, self.col as usize);
        if !self.grid[row][col] {
            self.grid[row][col] = true;
            return vec![Button::Cross];
        }
        let direction = self.navigate_to_next();
        self.grid[self.row as usize][self.col as usize] = true;
        vec![direction, Button::Cross]
    }
}

impl Default for SelectionGrid {
    fn default() -> Self {
        Self::new()
    }
}
