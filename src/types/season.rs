use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Hiking season of a date. November through April counts as winter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Season {
    Summer,
    Winter,
}

impl Season {
    pub fn of(date: NaiveDate) -> Self {
        let month = date.month();
        if month >= 11 || month <= 4 {
            Season::Winter
        } else {
            Season::Summer
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Season::Summer => write!(f, "Summer"),
            Season::Winter => write!(f, "Winter"),
        }
    }
}
