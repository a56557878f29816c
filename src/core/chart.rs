//! Pie-chart series built from a [`Breakdown`]: what any front-end needs to
//! draw a slice and its hover text.

use crate::core::aggregate::Breakdown;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub hours: f64,
    pub percent: f64,
    pub count: usize,
}

impl PieSlice {
    pub fn hover_text(&self) -> String {
        format!(
            "{} | Hours: {:.2} | Percent: {:.1}% | Count: {}",
            self.label, self.hours, self.percent, self.count
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
    /// Set when there is nothing to draw.
    pub empty_message: Option<String>,
}

impl PieChart {
    pub fn from_breakdown(title: impl Into<String>, breakdown: &Breakdown, no_data: &str) -> Self {
        // shares are taken on magnitudes so negative corrections do not break the pie
        let total: f64 = breakdown.groups.iter().map(|g| g.hours.abs()).sum();

        let slices = breakdown
            .groups
            .iter()
            .map(|g| PieSlice {
                label: g.key.clone(),
                hours: g.hours,
                percent: if total > 0.0 {
                    g.hours.abs() / total * 100.0
                } else {
                    0.0
                },
                count: g.count,
            })
            .collect::<Vec<_>>();

        let empty_message = slices.is_empty().then(|| no_data.to_string());

        Self {
            title: title.into(),
            slices,
            empty_message,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

pub fn project_pie(breakdown: &Breakdown) -> PieChart {
    PieChart::from_breakdown("Project Distribution", breakdown, "No project data")
}

pub fn tags_pie(breakdown: &Breakdown, project: &str) -> PieChart {
    PieChart::from_breakdown(
        format!("Tags Distribution for Project: {project}"),
        breakdown,
        &format!("No tag data for project '{project}'"),
    )
}

pub fn tag_distribution_pie(breakdown: &Breakdown) -> PieChart {
    PieChart::from_breakdown("Tags Distribution", breakdown, "No tag data")
}

pub fn projects_for_tag_pie(breakdown: &Breakdown, tag: &str) -> PieChart {
    PieChart::from_breakdown(
        format!("Project Distribution for Tag: {tag}"),
        breakdown,
        &format!("No project data for tag '{tag}'"),
    )
}
