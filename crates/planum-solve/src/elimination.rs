//! Triangularization and reduction to canonical row-echelon form.
//!
//! Both transforms are non-destructive: they clone the input system and
//! return the derived form, so callers can keep the original for display
//! while working with the reduced one.

use crate::system::LinearSystem;

impl LinearSystem {
    /// Computes an upper-triangular form of the system.
    ///
    /// A single forward pass walks the rows while one column cursor is
    /// shared across the entire pass: once a column has been processed it
    /// is never revisited by a later row. When a row lacks a usable
    /// coefficient in the current column, the first row below with one is
    /// swapped up; when no row below has one either, the cursor advances
    /// and the row may end up entirely zero, encoding a redundant or
    /// contradictory equation for the classifier to interpret.
    ///
    /// The routine never fails; malformed input simply surfaces as
    /// all-zero rows.
    #[must_use]
    pub fn triangular_form(&self) -> Self {
        let mut system = self.clone();
        let num_equations = system.len();
        let num_variables = system.dimension();

        let mut j = 0;
        for i in 0..num_equations {
            while j < num_variables {
                if system[i].coefficient(j).is_near_zero()
                    && !system.swap_with_row_below(i, j)
                {
                    j += 1;
                    continue;
                }
                system.clear_coefficients_below(i, j);
                j += 1;
                break;
            }
        }
        system
    }

    /// Computes the canonical reduced row-echelon form.
    ///
    /// Triangularizes first, then walks the rows from last to first:
    /// each pivot is scaled to exactly one and cleared from every row
    /// above it. Rows without a pivot are left wherever they ended up.
    #[must_use]
    pub fn rref(&self) -> Self {
        let mut system = self.triangular_form();

        // Pivot columns cannot move during the backward pass: clearing
        // above a pivot only touches columns to the right of the upper
        // rows' own pivots.
        let pivot_columns = system.pivot_columns();
        for i in (0..system.len()).rev() {
            if let Some(j) = pivot_columns[i] {
                system.scale_row_to_unit_pivot(i, j);
                system.clear_coefficients_above(i, j);
            }
        }
        system
    }

    /// Swaps row `row` with the first row below it holding a usable
    /// coefficient in column `col`. Returns false if no such row exists.
    fn swap_with_row_below(&mut self, row: usize, col: usize) -> bool {
        for k in (row + 1)..self.len() {
            if !self[k].coefficient(col).is_near_zero() {
                self.swap_rows(row, k);
                return true;
            }
        }
        false
    }

    /// Eliminates column `col` from every row below `row`.
    fn clear_coefficients_below(&mut self, row: usize, col: usize) {
        let beta = self[row].coefficient(col).clone();
        for k in (row + 1)..self.len() {
            let gamma = self[k].coefficient(col).clone();
            if gamma.is_near_zero() {
                continue;
            }
            let alpha = -(gamma / &beta);
            self.add_multiple_of_row_to_row(&alpha, row, k);
        }
    }

    /// Scales row `row` so its coefficient in column `col` becomes one.
    fn scale_row_to_unit_pivot(&mut self, row: usize, col: usize) {
        let factor = self[row].coefficient(col).recip();
        self.multiply_row(&factor, row);
    }

    /// Eliminates column `col` from every row above `row`.
    fn clear_coefficients_above(&mut self, row: usize, col: usize) {
        for k in (0..row).rev() {
            let coefficient = self[k].coefficient(col).clone();
            if coefficient.is_near_zero() {
                continue;
            }
            let alpha = -coefficient;
            self.add_multiple_of_row_to_row(&alpha, row, k);
        }
    }
}
