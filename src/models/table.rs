use serde::Serialize;

/// Plain grid of text cells, as read from a sheet or assembled from PDF tables.
pub type Grid = Vec<Vec<String>>;

/// One table detected on a PDF page: first row is its header.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    pub fn header(&self) -> Option<&[String]> {
        self.rows.first().map(|r| r.as_slice())
    }

    pub fn records(&self) -> &[Vec<String>] {
        if self.rows.len() > 1 {
            &self.rows[1..]
        } else {
            &[]
        }
    }
}

/// Column names of the flat table handed to the normalizer.
pub const FLAT_HEADERS: [&str; 8] = [
    "Description",
    "Duration",
    "Member",
    "Project",
    "Tags",
    "Start date",
    "Start time",
    "Stop time",
];

/// Row of the fixed 8-column flat table.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct FlatRow {
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Duration")]
    pub duration: String,
    #[serde(rename = "Member")]
    pub member: String,
    #[serde(rename = "Project")]
    pub project: String,
    #[serde(rename = "Tags")]
    pub tags: String,
    #[serde(rename = "Start date")]
    pub start_date: String,
    #[serde(rename = "Start time")]
    pub start_time: String,
    #[serde(rename = "Stop time")]
    pub stop_time: String,
}

impl FlatRow {
    pub fn to_cells(&self) -> Vec<String> {
        vec![
            self.description.clone(),
            self.duration.clone(),
            self.member.clone(),
            self.project.clone(),
            self.tags.clone(),
            self.start_date.clone(),
            self.start_time.clone(),
            self.stop_time.clone(),
        ]
    }
}

/// Header row followed by every flat row, ready for the normalizer.
pub fn flat_rows_to_grid(rows: &[FlatRow]) -> Grid {
    let mut grid: Grid = Vec::with_capacity(rows.len() + 1);
    grid.push(FLAT_HEADERS.iter().map(|h| h.to_string()).collect());
    grid.extend(rows.iter().map(FlatRow::to_cells));
    grid
}
