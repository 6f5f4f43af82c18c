//! Table rendering for CLI output

use super::{ColorTheme, StatusIcon};
use crate::domain::workloads::{RestartReport, ScaleDirection, ScaleOutcome};
use crate::infrastructure::constants::HOURS_PER_DAY;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Color, ContentArrangement, Table};

/// Format an age in hours as a compact day/hour string, e.g. "3d 4h".
pub fn format_age(hours: i64) -> String {
    if hours >= HOURS_PER_DAY {
        format!("{}d {}h", hours / HOURS_PER_DAY, hours % HOURS_PER_DAY)
    } else {
        format!("{}h", hours)
    }
}

/// Table renderer for formatted output
pub struct TableRenderer {
    theme: ColorTheme,
}

impl Default for TableRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TableRenderer {
    /// Create a new table renderer with default theme
    pub fn new() -> Self {
        Self {
            theme: ColorTheme::default(),
        }
    }

    /// Render the per-deployment scale transitions as a formatted table
    pub fn render_scale_report(
        &self,
        namespace: &str,
        direction: ScaleDirection,
        outcomes: &[ScaleOutcome],
    ) -> String {
        if outcomes.is_empty() {
            return format!("No deployments found on {} namespace", namespace);
        }

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                Cell::new("DEPLOYMENT").set_alignment(CellAlignment::Left),
                Cell::new("REPLICAS").set_alignment(CellAlignment::Center),
                Cell::new("STATUS").set_alignment(CellAlignment::Left),
            ]);

        for outcome in outcomes {
            let color = self.theme.get_outcome_color(outcome.applied);
            let replicas = if outcome.applied {
                format!("{} -> {}", outcome.previous, outcome.desired)
            } else {
                format!("{}", outcome.previous)
            };

            table.add_row(vec![
                Cell::new(&outcome.name),
                Cell::new(replicas)
                    .fg(color)
                    .set_alignment(CellAlignment::Center),
                Cell::new(format!(
                    "{} {}",
                    StatusIcon::get_outcome_icon(outcome.applied),
                    StatusIcon::get_outcome_text(outcome.applied)
                ))
                .fg(color),
            ]);
        }

        let title = match direction {
            ScaleDirection::Up => "Scaling up pods",
            ScaleDirection::Down => "Scaling down pods",
        };
        format!(
            "{} on {} namespace\n{}",
            title,
            namespace.bold(),
            table
        )
    }

    /// Render the restarted pods as a formatted table
    pub fn render_restart_report(&self, namespace: &str, report: &RestartReport) -> String {
        if report.restarted.is_empty() {
            return format!(
                "None of the pods on {} namespace are older than {} days",
                namespace, report.threshold_days
            );
        }

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                Cell::new("POD").set_alignment(CellAlignment::Left),
                Cell::new("AGE").set_alignment(CellAlignment::Center),
                Cell::new("STATUS").set_alignment(CellAlignment::Left),
            ]);

        let threshold_hours = report.threshold_days as i64 * HOURS_PER_DAY;
        for pod in &report.restarted {
            table.add_row(vec![
                Cell::new(&pod.name),
                Cell::new(format_age(pod.age_hours))
                    .fg(self.theme.get_age_color(pod.age_hours, threshold_hours))
                    .set_alignment(CellAlignment::Center),
                Cell::new(format!("{} Restarted", StatusIcon::RESTART)).fg(Color::Green),
            ]);
        }

        format!(
            "Restarting pods on {} namespace older than {} days\n{}",
            namespace.bold(),
            report.threshold_days,
            table
        )
    }
}
