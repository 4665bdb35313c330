use rand::Rng;

use crate::simulation::cell::Cell;
use crate::simulation::grid::Grid;

/// Discrete commands issued from the keyboard
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    TogglePause,
    ResetRandom,
    ResetBlank,
    ToggleOverlay,
}

/// Grid plus the flags the driver loop needs alongside it.
///
/// Operations take the state by value and hand back the successor, so the
/// previous generation is dropped as soon as the next one exists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationState {
    pub grid: Grid,
    pub paused: bool,
    /// Presentation-only; never read by the automaton
    pub show_overlay: bool,
    /// Generations computed since the last reset
    pub generation: u64,
}

impl SimulationState {
    /// Starts paused with the overlay hidden
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            paused: true,
            show_overlay: false,
            generation: 0,
        }
    }

    /// One tick of the driver loop: step the grid unless paused.
    pub fn advance(self) -> Self {
        if self.paused {
            return self;
        }

        Self {
            grid: self.grid.step(),
            generation: self.generation + 1,
            ..self
        }
    }

    /// Apply a keyboard command. Resets keep the grid's dimensions.
    pub fn apply<R: Rng + ?Sized>(self, command: Command, rng: &mut R) -> Self {
        let (width, height) = (self.grid.width(), self.grid.height());

        match command {
            Command::TogglePause => Self {
                paused: !self.paused,
                ..self
            },
            Command::ResetRandom => Self {
                grid: Grid::random(width, height, rng),
                generation: 0,
                ..self
            },
            Command::ResetBlank => Self {
                grid: Grid::blank(width, height),
                generation: 0,
                ..self
            },
            Command::ToggleOverlay => Self {
                show_overlay: !self.show_overlay,
                ..self
            },
        }
    }

    /// Manual edit from the pointer. Only takes effect while paused and when
    /// the cell is not already `desired`; returns whether anything changed.
    pub fn paint_cell(&mut self, col: usize, row: usize, desired: Cell) -> bool {
        if !self.paused || self.grid.get(col, row) == desired {
            return false;
        }
        self.grid.set(col, row, desired);
        true
    }
}
