use std::time::Duration;

/// Window inner size in logical pixels
pub const WINDOW_WIDTH: u32 = 700;
pub const WINDOW_HEIGHT: u32 = 700;

/// Side length of one cell in logical pixels at the initial window size
pub const CELL_SIZE: u32 = 70;

/// Grid dimensions in cells (10x10 at the default window size)
pub const GRID_WIDTH: usize = (WINDOW_WIDTH / CELL_SIZE) as usize;
pub const GRID_HEIGHT: usize = (WINDOW_HEIGHT / CELL_SIZE) as usize;

/// Simulation ticks per second
pub const TICKS_PER_SECOND: u64 = 10;

/// Time between two ticks of the driver loop
pub const TICK_INTERVAL: Duration = Duration::from_millis(1000 / TICKS_PER_SECOND);

/// Probability that a cell starts alive in a randomized grid
pub const ALIVE_PROBABILITY: f64 = 0.5;

// ============================================
// Colors (linear RGB, 0.0-1.0)
// ============================================

pub const ALIVE_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
pub const DEAD_COLOR: [f32; 3] = [0.0, 0.0, 0.0];

/// Overlay grid lines, blue (0, 0, 200)
pub const OVERLAY_COLOR: [f32; 3] = [0.0, 0.0, 200.0 / 255.0];

/// Overlay line thickness in physical pixels
pub const OVERLAY_LINE_WIDTH: f32 = 1.0;
