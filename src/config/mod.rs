//! Analysis configuration
//!
//! Only preprocessing and reporting are configurable. The classification
//! thresholds are fixed constants in [`crate::detection`].

/// Options controlling how one clip is analyzed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Subtract the mean before the classifying estimators run
    pub remove_dc: bool,
    /// Also report the zero-crossing estimate (never used for the label)
    pub zero_crossing: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            remove_dc: false,
            zero_crossing: true,
        }
    }
}
