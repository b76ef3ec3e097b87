#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportOptions {
    /// Decimal places for metrics derived from π.
    pub decimal_places: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        ReportOptions { decimal_places: 2 }
    }
}
