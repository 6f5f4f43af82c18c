//! Color theme for CLI output

use comfy_table::Color as TableColor;

/// Color theme for terminal output
#[derive(Debug, Clone)]
pub struct ColorTheme {
    pub success: TableColor,
    pub warning: TableColor,
    pub error: TableColor,
    pub info: TableColor,
    pub muted: TableColor,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            success: TableColor::Green,
            warning: TableColor::Yellow,
            error: TableColor::Red,
            info: TableColor::Cyan,
            muted: TableColor::DarkGrey,
        }
    }
}

impl ColorTheme {
    /// Color for a scale outcome: green when the change was applied,
    /// yellow when the deployment was skipped.
    pub fn get_outcome_color(&self, applied: bool) -> TableColor {
        if applied {
            self.success
        } else {
            self.warning
        }
    }

    /// Color for a pod age relative to the restart threshold.
    pub fn get_age_color(&self, age_hours: i64, threshold_hours: i64) -> TableColor {
        if age_hours > threshold_hours {
            self.error
        } else {
            self.muted
        }
    }
}
