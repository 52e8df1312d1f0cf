use chrono::{DateTime, FixedOffset, NaiveDate};
use derive_more::{AsRef, Display, From};
use getset::{CopyGetters, Getters};
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Category label the federation assigns to reserve-tier matches.
pub const SATELLITE_CATEGORY: &str = "サテライト";

/// One normalized match entry.
///
/// Built exclusively by the row normalizer and immutable afterwards.
/// `kickoff_time` always falls on `match_date`, and when the match month is
/// January through March the stored year is the season-start year plus one
/// (the season runs April through March).
#[derive(Clone, PartialEq, Eq, Debug, TypedBuilder, Getters, CopyGetters, Serialize, Deserialize)]
pub struct ScheduleRecord {
    #[getset(get = "pub")]
    serial_number: SerialNumber,
    #[getset(get = "pub")]
    category: Category,
    #[getset(get = "pub")]
    match_number: MatchNumber,
    #[getset(get_copy = "pub")]
    match_date: NaiveDate,
    #[getset(get_copy = "pub")]
    kickoff_time: DateTime<FixedOffset>,
    #[getset(get = "pub")]
    home_team: TeamName,
    #[getset(get = "pub")]
    away_team: TeamName,
    #[getset(get = "pub")]
    studium: Studium,
}

/// Source-assigned sequence identifier; the storage key.
#[derive(Clone, PartialEq, Eq, Hash, Debug, From, AsRef, Display, Serialize, Deserialize)]
#[as_ref(forward)]
pub struct SerialNumber(String);

/// Competition tier label.  The empty string means "no category".
#[derive(Clone, PartialEq, Eq, Hash, Debug, From, AsRef, Display, Serialize, Deserialize)]
#[as_ref(forward)]
pub struct Category(String);

impl Category {
    pub fn is_satellite(&self) -> bool {
        self.0 == SATELLITE_CATEGORY
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Category-scoped match identifier ("M.No." column).
#[derive(Clone, PartialEq, Eq, Hash, Debug, From, AsRef, Display, Serialize, Deserialize)]
#[as_ref(forward)]
pub struct MatchNumber(String);

#[derive(Clone, PartialEq, Eq, Hash, Debug, From, AsRef, Display, Serialize, Deserialize)]
#[as_ref(forward)]
pub struct TeamName(String);

impl TeamName {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Venue name, kept raw.  The column spelling comes from the source system.
#[derive(Clone, PartialEq, Eq, Hash, Debug, From, AsRef, Display, Serialize, Deserialize)]
#[as_ref(forward)]
pub struct Studium(String);
