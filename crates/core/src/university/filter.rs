use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// Selects the single record a read or `update_one` targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "by", content = "value", rename_all = "snake_case")]
pub enum UniversityFilter {
    Id(String),
    Slug(String),
    Name(String),
}

impl UniversityFilter {
    /// Column the filter matches on.
    #[must_use]
    pub const fn column(&self) -> &'static str {
        match *self {
            Self::Id(_) => "id",
            Self::Slug(_) => "slug",
            Self::Name(_) => "name",
        }
    }

    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Id(v) | Self::Slug(v) | Self::Name(v) => v,
        }
    }
}

impl Display for UniversityFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}={}", self.column(), self.value())
    }
}
