use serde::{Deserialize, Serialize};

/// Column positions of one `qstat` output shape.
///
/// Indices count whitespace-separated tokens of a data line, starting at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnLayout {
    /// Lines preceding the first job row.
    pub header_lines: usize,
    pub id: usize,
    pub name: usize,
    pub elapsed_time: usize,
    pub state: usize,
    #[serde(default)]
    pub owner: Option<usize>,
    /// Output shorter than this is malformed.
    #[serde(default)]
    pub min_lines: usize,
    /// Output shorter than this means "no jobs".
    #[serde(default)]
    pub empty_below: Option<usize>,
}

impl ColumnLayout {
    /// `qstat <id>`
    pub const DEFAULT: Self = Self {
        header_lines: 2,
        id: 0,
        name: 1,
        elapsed_time: 3,
        state: 4,
        owner: None,
        min_lines: 3,
        empty_below: None,
    };

    /// `qstat -a`
    pub const ALL_JOBS: Self = Self {
        header_lines: 5,
        id: 0,
        name: 3,
        elapsed_time: 10,
        state: 9,
        owner: Some(1),
        min_lines: 1,
        empty_below: None,
    };

    /// `qstat -u <user>`
    pub const PER_USER: Self = Self {
        header_lines: 5,
        id: 0,
        name: 3,
        elapsed_time: 10,
        state: 9,
        owner: None,
        min_lines: 0,
        empty_below: Some(4),
    };

    /// Least number of tokens a data line must have.
    pub fn width(&self) -> usize {
        [self.id, self.name, self.elapsed_time, self.state]
            .into_iter()
            .chain(self.owner)
            .max()
            .unwrap_or_default()
            + 1
    }

    /// Whether output of `line_count` lines is long enough to carry a job row.
    pub fn has_rows(&self, line_count: usize) -> bool {
        line_count > self.header_lines && line_count >= self.min_lines
    }
}

/// The layouts of every query shape, configurable per scheduler install.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnLayouts {
    #[serde(default = "ColumnLayouts::default_single")]
    pub single: ColumnLayout,
    #[serde(default = "ColumnLayouts::default_all_jobs")]
    pub all_jobs: ColumnLayout,
    #[serde(default = "ColumnLayouts::default_per_user")]
    pub per_user: ColumnLayout,
}

impl Default for ColumnLayouts {
    fn default() -> Self {
        Self {
            single: Self::default_single(),
            all_jobs: Self::default_all_jobs(),
            per_user: Self::default_per_user(),
        }
    }
}

impl ColumnLayouts {
    pub fn default_single() -> ColumnLayout {
        ColumnLayout::DEFAULT
    }
    pub fn default_all_jobs() -> ColumnLayout {
        ColumnLayout::ALL_JOBS
    }
    pub fn default_per_user() -> ColumnLayout {
        ColumnLayout::PER_USER
    }
}
