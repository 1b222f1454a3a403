//! Two-row rolling store of quantization residuals.

/// Rolling pair of error rows for the two-row diffusion kernel.
///
/// Holds two rows of `width` residuals: `current_row_errors`, filled while
/// the previous image row was processed, and `next_row_errors`, filled while
/// processing the current image row. The rows never move in memory; an index
/// selects which physical row plays which role.
///
/// # Usage Pattern
///
/// 1. Create with `new(width)` (both rows zeroed)
/// 2. For each image row:
///    a. Read [`current_row_errors`](Self::current_row_errors) and
///       [`next_row_errors`](Self::next_row_errors) while quantizing
///    b. Store each residual with [`deposit`](Self::deposit)
///    c. Call [`advance_row`](Self::advance_row)
#[derive(Debug)]
pub struct ErrorRows {
    rows: [Vec<f32>; 2],
    /// Index of the row holding `current_row_errors`.
    current: usize,
}

impl ErrorRows {
    /// Create zeroed rows for an image `width` pixels wide.
    pub fn new(width: usize) -> Self {
        Self {
            rows: [vec![0.0; width], vec![0.0; width]],
            current: 0,
        }
    }

    /// Residuals deposited while processing the previous image row.
    #[inline]
    pub fn current_row_errors(&self) -> &[f32] {
        &self.rows[self.current]
    }

    /// Residuals deposited so far in the current image row.
    #[inline]
    pub fn next_row_errors(&self) -> &[f32] {
        &self.rows[self.current ^ 1]
    }

    /// Record the residual of the pixel at column `x`.
    #[inline]
    pub fn deposit(&mut self, x: usize, residual: f32) {
        self.rows[self.current ^ 1][x] = residual;
    }

    /// Swap row roles and clear the row that becomes `next_row_errors`.
    pub fn advance_row(&mut self) {
        self.current ^= 1;
        self.rows[self.current ^ 1].fill(0.0);
    }
}
