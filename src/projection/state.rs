//! Capital carried from one processed snapshot to the next

/// Running capital basis for the month-by-month comparison
///
/// Only rows that resolve a catalog and a non-zero held rate update the basis,
/// so a skipped month leaves the previous capital in place.
#[derive(Debug, Clone, Default)]
pub struct CarryForward {
    /// Capital implied by the most recent successfully processed snapshot
    previous_capital: Option<f64>,
}

impl CarryForward {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record this row's capital and return the basis it replaces
    pub fn advance(&mut self, capital: f64) -> Option<f64> {
        self.previous_capital.replace(capital)
    }
}
