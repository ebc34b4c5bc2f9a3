//! Match matrix construction and optimal one-to-one assignment.
//!
//! The assignment itself is delegated to the Kuhn-Munkres (Hungarian)
//! implementation in `pathfinding`, which is globally optimal in O(N^3).

use pathfinding::kuhn_munkres::kuhn_munkres_min;
use pathfinding::matrix::Matrix;

use crate::matching::matcher::LabelMatcher;

/// Square boolean matrix of label matches.
///
/// The matrix is `N x N` with `N = max(NR, NH)`. Cells outside the bounds
/// of either input are padding and never match.
#[derive(Debug, Clone)]
pub struct MatchMatrix {
    n_reference: usize,
    n_hypothesis: usize,
    size: usize,
    // Row-major, only the NR x NH block is stored
    cells: Vec<bool>,
}

impl MatchMatrix {
    /// Build the matrix, calling the matcher exactly once per real pair
    pub fn build<L, M>(reference: &[L], hypothesis: &[L], matcher: &M) -> Self
    where
        M: LabelMatcher<L> + ?Sized,
    {
        let n_reference = reference.len();
        let n_hypothesis = hypothesis.len();

        let mut cells = Vec::with_capacity(n_reference * n_hypothesis);
        for rlabel in reference {
            for hlabel in hypothesis {
                cells.push(matcher.matches(rlabel, hlabel));
            }
        }

        Self {
            n_reference,
            n_hypothesis,
            size: n_reference.max(n_hypothesis),
            cells,
        }
    }

    /// Padded dimension `N`
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn n_reference(&self) -> usize {
        self.n_reference
    }

    #[must_use]
    pub fn n_hypothesis(&self) -> usize {
        self.n_hypothesis
    }

    /// Whether cell (r, h) is a match. Padding cells are never matches.
    #[must_use]
    pub fn is_match(&self, r: usize, h: usize) -> bool {
        if r >= self.n_reference || h >= self.n_hypothesis {
            return false;
        }
        self.cells[r * self.n_hypothesis + h]
    }

    /// Cost matrix for the assignment: 0 where labels match, 1 elsewhere.
    /// The total cost never exceeds `N`, so `i32` is wide enough.
    #[must_use]
    pub fn cost_matrix(&self) -> Matrix<i32> {
        let mut costs = Matrix::new(self.size, self.size, 1i32);
        for r in 0..self.n_reference {
            for h in 0..self.n_hypothesis {
                if self.is_match(r, h) {
                    costs[(r, h)] = 0;
                }
            }
        }
        costs
    }
}

/// Find the bijection over `[0, N)` that maximizes the number of matched
/// pairs. Returns `(row, column)` pairs in row order.
///
/// Among equally good assignments the choice is left to the solver.
#[must_use]
pub fn solve(matrix: &MatchMatrix) -> Vec<(usize, usize)> {
    if matrix.size() == 0 {
        return Vec::new();
    }

    let (_cost, columns) = kuhn_munkres_min(&matrix.cost_matrix());
    columns.into_iter().enumerate().collect()
}
