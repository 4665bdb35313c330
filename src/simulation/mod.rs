mod cell;
mod grid;
mod state;

pub use cell::Cell;
pub use grid::Grid;
pub use state::{Command, SimulationState};
