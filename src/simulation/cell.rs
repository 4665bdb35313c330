/// State of a single grid position.
///
/// The discriminants double as the neighbor-sum weight and as the value
/// uploaded to the GPU (one `u32` per cell).
#[repr(u32)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    /// Weight of this cell in a neighbor count (ALIVE=1, DEAD=0)
    pub fn weight(self) -> u8 {
        self as u8
    }

    /// Encoding used in the GPU cell buffer
    pub fn to_gpu(self) -> u32 {
        self as u32
    }

    /// Next state under the B3/S23 rule given the number of live neighbors
    pub fn next(self, live_neighbors: u8) -> Cell {
        match (self, live_neighbors) {
            // Birth
            (Cell::Dead, 3) => Cell::Alive,
            // Isolation or overcrowding
            (Cell::Alive, n) if !(2..=3).contains(&n) => Cell::Dead,
            (state, _) => state,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gpu_encoding() {
        assert_eq!(Cell::Dead.to_gpu(), 0);
        assert_eq!(Cell::Alive.to_gpu(), 1);
        assert_eq!(std::mem::size_of::<Cell>(), 4);
    }

    #[test]
    fn test_birth_only_on_three() {
        for n in 0..=8 {
            let expected = if n == 3 { Cell::Alive } else { Cell::Dead };
            assert_eq!(Cell::Dead.next(n), expected, "dead cell with {} neighbors", n);
        }
    }

    #[test]
    fn test_survival_on_two_or_three() {
        for n in 0..=8 {
            let expected = if n == 2 || n == 3 { Cell::Alive } else { Cell::Dead };
            assert_eq!(Cell::Alive.next(n), expected, "live cell with {} neighbors", n);
        }
    }

    #[test]
    fn test_from_bool() {
        assert_eq!(Cell::from(true), Cell::Alive);
        assert_eq!(Cell::from(false), Cell::Dead);
        assert!(!Cell::default().is_alive());
    }
}
