use rand::Rng;

use crate::config::ALIVE_PROBABILITY;
use crate::simulation::cell::Cell;

/// Fixed-size toroidal grid of cells, stored row-major.
///
/// Coordinates are `(x, y)` = (column, row). Neighbor lookups wrap on both
/// axes; direct access with `get`/`set` requires in-range coordinates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a `width` x `height` grid, either all dead or with every cell
    /// independently alive with probability [`ALIVE_PROBABILITY`].
    pub fn create<R: Rng + ?Sized>(width: usize, height: usize, randomize: bool, rng: &mut R) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be positive, got {}x{}", width, height);

        let cells = if randomize {
            (0..width * height)
                .map(|_| Cell::from(rng.gen_bool(ALIVE_PROBABILITY)))
                .collect()
        } else {
            vec![Cell::Dead; width * height]
        };

        Self { width, height, cells }
    }

    /// All-dead grid
    pub fn blank(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be positive, got {}x{}", width, height);
        Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        }
    }

    /// Randomized grid drawn from `rng`
    pub fn random<R: Rng + ?Sized>(width: usize, height: usize, rng: &mut R) -> Self {
        Self::create(width, height, true, rng)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major cell slice
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        // A column past the edge would otherwise alias into the next row.
        assert!(
            x < self.width && y < self.height,
            "cell ({}, {}) out of bounds for {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );
        y * self.width + x
    }

    /// Index of `(x + dx, y + dy)` with both axes wrapped
    #[inline]
    fn wrapped_index(&self, x: usize, y: usize, dx: isize, dy: isize) -> usize {
        let col = (x as isize + dx).rem_euclid(self.width as isize) as usize;
        let row = (y as isize + dy).rem_euclid(self.height as isize) as usize;
        row * self.width + col
    }

    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.cells[self.index(x, y)]
    }

    /// Overwrite one cell. Panics if `(x, y)` is outside the grid.
    pub fn set(&mut self, x: usize, y: usize, state: Cell) {
        let idx = self.index(x, y);
        self.cells[idx] = state;
    }

    /// Number of live cells among the 8 surrounding `(x, y)` on the torus
    pub fn live_neighbors(&self, x: usize, y: usize) -> u8 {
        let mut count = 0;

        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                count += self.cells[self.wrapped_index(x, y, dx, dy)].weight();
            }
        }

        count
    }

    /// Compute the next generation. `self` is left untouched.
    pub fn step(&self) -> Grid {
        let mut cells = Vec::with_capacity(self.cells.len());

        for y in 0..self.height {
            for x in 0..self.width {
                let current = self.cells[y * self.width + x];
                cells.push(current.next(self.live_neighbors(x, y)));
            }
        }

        Grid {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Row-major `u32` words (0 = dead, 1 = alive) for the GPU cell buffer
    pub fn to_gpu_words(&self) -> Vec<u32> {
        self.cells.iter().map(|c| c.to_gpu()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn with_alive(width: usize, height: usize, alive: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::blank(width, height);
        for &(x, y) in alive {
            grid.set(x, y, Cell::Alive);
        }
        grid
    }

    fn alive_cells(grid: &Grid) -> Vec<(usize, usize)> {
        let mut alive = Vec::new();
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                if grid.get(x, y).is_alive() {
                    alive.push((x, y));
                }
            }
        }
        alive
    }

    #[test]
    fn test_create_blank_is_all_dead() {
        let mut rng = StdRng::seed_from_u64(1);
        let a = Grid::create(7, 4, false, &mut rng);
        let b = Grid::create(7, 4, false, &mut rng);

        assert_eq!(a.width(), 7);
        assert_eq!(a.height(), 4);
        assert_eq!(a.cells().len(), 28);
        assert_eq!(a.population(), 0);
        assert_eq!(a, b);
        assert_eq!(a, Grid::blank(7, 4));
    }

    #[test]
    fn test_create_random_is_seeded() {
        let a = Grid::random(20, 20, &mut StdRng::seed_from_u64(42));
        let b = Grid::random(20, 20, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);

        // 400 fair coin flips land well inside this band
        let population = a.population();
        assert!(population > 120 && population < 280, "population {}", population);
    }

    #[test]
    #[should_panic]
    fn test_zero_width_panics() {
        let _ = Grid::blank(0, 5);
    }

    #[test]
    #[should_panic]
    fn test_set_out_of_bounds_panics() {
        let mut grid = Grid::blank(5, 5);
        grid.set(5, 0, Cell::Alive);
    }

    #[test]
    fn test_live_neighbors_excludes_self() {
        let mut grid = Grid::blank(5, 5);
        for y in 1..=3 {
            for x in 1..=3 {
                grid.set(x, y, Cell::Alive);
            }
        }
        assert_eq!(grid.live_neighbors(2, 2), 8);
        assert_eq!(grid.live_neighbors(1, 1), 3);
        assert_eq!(grid.live_neighbors(0, 0), 1);
    }

    #[test]
    fn test_live_neighbors_wraps_corners() {
        let grid = with_alive(5, 4, &[(4, 3)]);
        assert_eq!(grid.live_neighbors(0, 0), 1);
        assert_eq!(grid.live_neighbors(3, 2), 1);
        assert_eq!(grid.live_neighbors(2, 1), 0);
    }

    #[test]
    fn test_live_neighbors_wraps_edges() {
        // Left and right edges touch, as do top and bottom
        let grid = with_alive(6, 6, &[(0, 2), (2, 0)]);
        assert_eq!(grid.live_neighbors(5, 2), 1);
        assert_eq!(grid.live_neighbors(2, 5), 1);
    }

    #[test]
    fn test_step_does_not_mutate_input() {
        let grid = Grid::random(12, 9, &mut StdRng::seed_from_u64(7));
        let before = grid.clone();
        let _next = grid.step();
        assert_eq!(grid, before);
    }

    #[test]
    fn test_step_applies_rule_to_every_cell() {
        let grid = Grid::random(16, 16, &mut StdRng::seed_from_u64(99));
        let next = grid.step();

        for y in 0..grid.height() {
            for x in 0..grid.width() {
                let n = grid.live_neighbors(x, y);
                let expected = match (grid.get(x, y), n) {
                    (Cell::Dead, 3) => Cell::Alive,
                    (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive,
                    _ => Cell::Dead,
                };
                assert_eq!(next.get(x, y), expected, "cell ({}, {}) with {} neighbors", x, y, n);
            }
        }
    }

    #[test]
    fn test_blinker_oscillates() {
        let horizontal = with_alive(5, 5, &[(1, 2), (2, 2), (3, 2)]);
        let vertical = horizontal.step();

        assert_eq!(alive_cells(&vertical), vec![(2, 1), (2, 2), (2, 3)]);
        assert_eq!(vertical.step(), horizontal);
    }

    #[test]
    fn test_block_is_still_life() {
        let block = with_alive(5, 5, &[(1, 1), (1, 2), (2, 1), (2, 2)]);
        let mut grid = block.clone();
        for _ in 0..10 {
            grid = grid.step();
            assert_eq!(grid, block);
        }
    }

    #[test]
    fn test_block_across_corner_is_still_life() {
        // A block split over all four corners of the torus
        let block = with_alive(5, 5, &[(0, 0), (4, 0), (0, 4), (4, 4)]);
        assert_eq!(block.step(), block);
    }

    #[test]
    fn test_glider_translates_and_wraps() {
        let glider = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];
        let start = with_alive(6, 6, &glider);

        let mut grid = start.clone();
        for _ in 0..4 {
            grid = grid.step();
        }
        let shifted: Vec<_> = glider.iter().map(|&(x, y)| (x + 1, y + 1)).collect();
        assert_eq!(grid, with_alive(6, 6, &shifted));

        // Six diagonal shifts bring it all the way around the torus
        for _ in 0..20 {
            grid = grid.step();
        }
        assert_eq!(grid, start);
    }

    #[test]
    fn test_empty_grid_stays_empty() {
        let grid = Grid::blank(4, 4);
        assert_eq!(grid.step(), grid);
    }

    #[test]
    fn test_gpu_words_row_major() {
        let grid = with_alive(3, 2, &[(2, 0), (0, 1)]);
        assert_eq!(grid.to_gpu_words(), vec![0, 0, 1, 1, 0, 0]);
    }
}
