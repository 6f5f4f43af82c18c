//! Status icons for CLI output

/// Status icons for different states
pub struct StatusIcon;

impl StatusIcon {
    /// Success icon (change applied)
    pub const SUCCESS: &'static str = "✓";

    /// Warning icon (deployment skipped)
    pub const WARNING: &'static str = "⚠";

    /// Error icon
    pub const ERROR: &'static str = "✗";

    /// Restart icon (pod deleted for recreation)
    pub const RESTART: &'static str = "↻";

    /// Get status icon for a scale outcome
    pub fn get_outcome_icon(applied: bool) -> &'static str {
        if applied {
            Self::SUCCESS
        } else {
            Self::WARNING
        }
    }

    /// Get status text for a scale outcome
    pub fn get_outcome_text(applied: bool) -> &'static str {
        if applied {
            "Scaled"
        } else {
            "Skipped (at zero)"
        }
    }
}
