//! Translation of raw window input into simulation operations.
//!
//! Everything here is pure so the pointer-to-cell mapping can be tested
//! without a window. This is also the layer that keeps out-of-range
//! coordinates away from the grid.

use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, MouseButton};
use winit::keyboard::KeyCode;

use crate::simulation::{Cell, Command};

/// Keyboard binding for each simulation command
pub fn command_for_key(key_code: KeyCode) -> Option<Command> {
    match key_code {
        KeyCode::Space => Some(Command::TogglePause),
        KeyCode::KeyR => Some(Command::ResetRandom),
        KeyCode::KeyB => Some(Command::ResetBlank),
        KeyCode::KeyG => Some(Command::ToggleOverlay),
        _ => None,
    }
}

/// Map a cursor position on the surface to the grid cell under it.
///
/// Cells are scaled to fill the surface, so this stays correct after the
/// window is resized. Returns `None` outside the surface.
pub fn cell_at(
    position: PhysicalPosition<f64>,
    surface: PhysicalSize<u32>,
    grid_width: usize,
    grid_height: usize,
) -> Option<(usize, usize)> {
    if surface.width == 0 || surface.height == 0 {
        return None;
    }
    if position.x < 0.0 || position.y < 0.0 {
        return None;
    }

    let col = (position.x * grid_width as f64 / surface.width as f64).floor() as usize;
    let row = (position.y * grid_height as f64 / surface.height as f64).floor() as usize;

    if col < grid_width && row < grid_height {
        Some((col, row))
    } else {
        None
    }
}

/// Pointer position and held buttons
#[derive(Debug, Default)]
pub struct PointerState {
    cursor: Option<PhysicalPosition<f64>>,
    left_down: bool,
    right_down: bool,
}

impl PointerState {
    pub fn moved(&mut self, position: PhysicalPosition<f64>) {
        self.cursor = Some(position);
    }

    pub fn cursor_left(&mut self) {
        self.cursor = None;
    }

    pub fn button(&mut self, button: MouseButton, state: ElementState) {
        let down = state == ElementState::Pressed;
        match button {
            MouseButton::Left => self.left_down = down,
            MouseButton::Right => self.right_down = down,
            _ => {}
        }
    }

    /// State a held button paints: left paints alive, right paints dead.
    /// Left takes priority when both are held.
    pub fn desired_cell(&self) -> Option<Cell> {
        if self.left_down {
            Some(Cell::Alive)
        } else if self.right_down {
            Some(Cell::Dead)
        } else {
            None
        }
    }

    /// Cell and state to paint this tick, if a button is held over the grid
    pub fn paint_target(
        &self,
        surface: PhysicalSize<u32>,
        grid_width: usize,
        grid_height: usize,
    ) -> Option<(usize, usize, Cell)> {
        let desired = self.desired_cell()?;
        let (col, row) = cell_at(self.cursor?, surface, grid_width, grid_height)?;
        Some((col, row, desired))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface() -> PhysicalSize<u32> {
        PhysicalSize::new(700, 700)
    }

    #[test]
    fn test_key_bindings() {
        assert_eq!(command_for_key(KeyCode::Space), Some(Command::TogglePause));
        assert_eq!(command_for_key(KeyCode::KeyR), Some(Command::ResetRandom));
        assert_eq!(command_for_key(KeyCode::KeyB), Some(Command::ResetBlank));
        assert_eq!(command_for_key(KeyCode::KeyG), Some(Command::ToggleOverlay));
        assert_eq!(command_for_key(KeyCode::KeyX), None);
        assert_eq!(command_for_key(KeyCode::Escape), None);
    }

    #[test]
    fn test_cell_at_corners() {
        assert_eq!(cell_at(PhysicalPosition::new(0.0, 0.0), surface(), 10, 10), Some((0, 0)));
        assert_eq!(cell_at(PhysicalPosition::new(69.9, 70.0), surface(), 10, 10), Some((0, 1)));
        assert_eq!(cell_at(PhysicalPosition::new(699.0, 699.0), surface(), 10, 10), Some((9, 9)));
    }

    #[test]
    fn test_cell_at_outside_surface() {
        assert_eq!(cell_at(PhysicalPosition::new(700.0, 10.0), surface(), 10, 10), None);
        assert_eq!(cell_at(PhysicalPosition::new(10.0, -1.0), surface(), 10, 10), None);
        assert_eq!(cell_at(PhysicalPosition::new(10.0, 10.0), PhysicalSize::new(0, 0), 10, 10), None);
    }

    #[test]
    fn test_cell_at_scales_with_surface() {
        // Doubled window, same 10x10 grid
        let surface = PhysicalSize::new(1400, 1400);
        assert_eq!(cell_at(PhysicalPosition::new(150.0, 290.0), surface, 10, 10), Some((1, 2)));
    }

    #[test]
    fn test_paint_target_requires_button_and_cursor() {
        let mut pointer = PointerState::default();
        assert_eq!(pointer.paint_target(surface(), 10, 10), None);

        pointer.button(MouseButton::Left, ElementState::Pressed);
        assert_eq!(pointer.paint_target(surface(), 10, 10), None);

        pointer.moved(PhysicalPosition::new(245.0, 245.0));
        assert_eq!(pointer.paint_target(surface(), 10, 10), Some((3, 3, Cell::Alive)));

        pointer.cursor_left();
        assert_eq!(pointer.paint_target(surface(), 10, 10), None);
    }

    #[test]
    fn test_right_button_paints_dead() {
        let mut pointer = PointerState::default();
        pointer.moved(PhysicalPosition::new(10.0, 10.0));
        pointer.button(MouseButton::Right, ElementState::Pressed);
        assert_eq!(pointer.desired_cell(), Some(Cell::Dead));

        pointer.button(MouseButton::Left, ElementState::Pressed);
        assert_eq!(pointer.desired_cell(), Some(Cell::Alive));

        pointer.button(MouseButton::Left, ElementState::Released);
        pointer.button(MouseButton::Right, ElementState::Released);
        assert_eq!(pointer.desired_cell(), None);
    }
}
