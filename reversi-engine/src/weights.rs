//! Static positional weight grid, generated once per board dimensions

use crate::config::WeightConfig;

/// R×C grid of positional scores: corners highest, X/C-squares negative,
/// edges scaled with board size, interior neutral. Immutable after
/// creation; dimensions always match the board it was built for.
#[derive(Clone, Debug)]
pub struct WeightGrid {
    values: Vec<f32>,
    rows: usize,
    cols: usize,
}

impl WeightGrid {
    pub fn new(rows: usize, cols: usize, config: &WeightConfig) -> Self {
        let scale = config.scale(rows.max(cols));
        let edge_value = (config.edge_base_value
            + config.edge_growth * (rows.max(cols) as f32 - config.scale_reference).max(0.0))
        .round();

        let mut grid = Self {
            values: vec![0.0; rows * cols],
            rows,
            cols,
        };

        let corners = [
            (0, 0),
            (0, cols - 1),
            (rows - 1, 0),
            (rows - 1, cols - 1),
        ];

        for &(r, c) in &corners {
            grid.set(r, c, config.corner_value + config.corner_scale_bonus * scale);
        }

        // X-squares: diagonal neighbors of corners
        let x_value = -config.x_square_penalty - config.penalty_scale * scale;
        for &(r, c) in &corners {
            if r > 0 && c > 0 {
                grid.set(r - 1, c - 1, x_value);
            }
            if r > 0 && c + 1 < cols {
                grid.set(r - 1, c + 1, x_value);
            }
            if r + 1 < rows && c > 0 {
                grid.set(r + 1, c - 1, x_value);
            }
            if r + 1 < rows && c + 1 < cols {
                grid.set(r + 1, c + 1, x_value);
            }
        }

        // C-squares: orthogonal neighbors of corners
        let c_value = -config.c_square_penalty - config.penalty_scale * scale;
        for &(r, c) in &corners {
            if r > 0 {
                grid.set(r - 1, c, c_value);
            }
            if r + 1 < rows {
                grid.set(r + 1, c, c_value);
            }
            if c > 0 {
                grid.set(r, c - 1, c_value);
            }
            if c + 1 < cols {
                grid.set(r, c + 1, c_value);
            }
        }

        // Remaining border cells become edges
        for r in 0..rows {
            for c in 0..cols {
                let on_border = r == 0 || r == rows - 1 || c == 0 || c == cols - 1;
                if on_border && grid.value(r, c) == 0.0 {
                    grid.set(r, c, edge_value);
                }
            }
        }

        grid
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn value(&self, row: usize, col: usize) -> f32 {
        self.values[row * self.cols + col]
    }

    fn set(&mut self, row: usize, col: usize, value: f32) {
        self.values[row * self.cols + col] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: usize, cols: usize) -> WeightGrid {
        WeightGrid::new(rows, cols, &WeightConfig::default())
    }

    #[test]
    fn test_corners_are_highest() {
        let g = grid(8, 8);
        let corner = g.value(0, 0);
        assert_eq!(corner, 55.0);
        assert_eq!(g.value(0, 7), corner);
        assert_eq!(g.value(7, 0), corner);
        assert_eq!(g.value(7, 7), corner);
        for r in 0..8 {
            for c in 0..8 {
                assert!(g.value(r, c) <= corner);
            }
        }
    }

    #[test]
    fn test_x_and_c_squares_negative() {
        let g = grid(8, 8);
        assert!(g.value(1, 1) < 0.0);
        assert!(g.value(0, 1) < 0.0);
        assert!(g.value(1, 0) < 0.0);
        assert!(g.value(6, 6) < 0.0);
    }

    #[test]
    fn test_edges_positive_interior_neutral() {
        let g = grid(8, 8);
        assert!(g.value(0, 3) > 0.0);
        assert!(g.value(4, 7) > 0.0);
        assert_eq!(g.value(3, 3), 0.0);
        assert_eq!(g.value(4, 5), 0.0);
    }

    #[test]
    fn test_edge_value_grows_with_board() {
        let small = grid(8, 8);
        let large = grid(20, 20);
        assert!(large.value(0, 9) > small.value(0, 3));
        assert!(large.value(0, 0) > small.value(0, 0));
    }

    #[test]
    fn test_rectangular_corners() {
        let g = grid(6, 12);
        assert!(g.value(0, 11) > 0.0);
        assert!(g.value(5, 11) > 0.0);
        assert!(g.value(1, 10) < 0.0);
    }
}
