//! One dashboard refresh: filter the loaded records, then build every pie.

use crate::core::aggregate::{
    self, Breakdown, date_bounds, filter_by_date_range, filter_by_day_type, total_days,
    total_hours,
};
use crate::core::chart::{self, PieChart};
use crate::models::day_type::{DayType, GroupBy};
use crate::models::record::Record;
use chrono::NaiveDate;
use serde::Serialize;

/// What the user selected.
#[derive(Debug, Clone)]
pub struct SummaryRequest {
    /// `None` disables date filtering.
    pub range: Option<(NaiveDate, NaiveDate)>,
    pub by: GroupBy,
    /// Project for the tags pie; first project of the selection when `None`.
    pub project: Option<String>,
    pub tag: Option<String>,
    pub day_type: DayType,
    pub average: bool,
}

impl Default for SummaryRequest {
    fn default() -> Self {
        Self {
            range: None,
            by: GroupBy::Project,
            project: None,
            tag: None,
            day_type: DayType::Both,
            average: false,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub range: Option<(NaiveDate, NaiveDate)>,
    pub day_type: DayType,
    pub rows: usize,
    pub total_hours: f64,
    pub total_days: usize,
    /// True when values are hours/day instead of hours.
    pub average: bool,
    pub main: PieChart,
    pub tags: Option<PieChart>,
    pub projects_for_tag: Option<PieChart>,
}

pub struct SummaryLogic;

impl SummaryLogic {
    /// Full span of the loaded records, the dashboard's default range.
    pub fn default_range(records: &[Record]) -> Option<(NaiveDate, NaiveDate)> {
        date_bounds(records)
    }

    pub fn build(records: &[Record], req: &SummaryRequest) -> Summary {
        let selected = match req.range {
            Some((start, end)) => filter_by_date_range(records, start, end),
            None => records.to_vec(),
        };
        let selected = filter_by_day_type(&selected, req.day_type);

        let days = total_days(&selected);
        let breakdown = |rows: &[Record], by: GroupBy| -> Breakdown {
            if req.average {
                aggregate::daily_average(rows, by, days)
            } else {
                match by {
                    GroupBy::Project => aggregate::totals_by_project(rows),
                    GroupBy::Tags => aggregate::totals_by_tag(rows, None),
                }
            }
        };

        let main = match req.by {
            GroupBy::Project => chart::project_pie(&breakdown(&selected, GroupBy::Project)),
            GroupBy::Tags => chart::tag_distribution_pie(&breakdown(&selected, GroupBy::Tags)),
        };

        let project = req
            .project
            .clone()
            .or_else(|| aggregate::projects(&selected).into_iter().next());

        let tags = project.map(|p| {
            let b = if req.average {
                breakdown(&only(&selected, |r| r.project == p), GroupBy::Tags)
            } else {
                aggregate::totals_by_tag(&selected, Some(p.as_str()))
            };
            chart::tags_pie(&b, &p)
        });

        let projects_for_tag = req.tag.as_ref().map(|t| {
            let b = if req.average {
                breakdown(&only(&selected, |r| &r.tags == t), GroupBy::Project)
            } else {
                aggregate::totals_by_project_for_tag(&selected, t)
            };
            chart::projects_for_tag_pie(&b, t)
        });

        Summary {
            range: req.range,
            day_type: req.day_type,
            rows: selected.len(),
            total_hours: total_hours(&selected),
            total_days: days,
            average: req.average,
            main,
            tags,
            projects_for_tag,
        }
    }
}

fn only(records: &[Record], keep: impl Fn(&Record) -> bool) -> Vec<Record> {
    records.iter().filter(|r| keep(r)).cloned().collect()
}
