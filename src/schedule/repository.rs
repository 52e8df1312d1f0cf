use chrono::{DateTime, FixedOffset, NaiveDate};
use indexmap::{IndexMap, IndexSet};

use crate::chrono_util::jst_now;
use crate::schedule::schema::{Category, ScheduleRecord, SerialNumber, TeamName};
use crate::schedule::search::trim_team_name;

/// Lookup condition mirroring the search form: every field optional.
#[derive(Clone, Debug, Default)]
pub struct ScheduleCondition {
    pub team_name: Option<String>,
    pub category: Option<String>,
    pub match_date: Option<NaiveDate>,
}

/// Storage seam for scraped schedules.
///
/// The pipeline only ever upserts whole scrape results keyed by serial
/// number and reads them back; how a backend persists them is its own
/// business.
pub trait ScheduleRepository {
    fn upsert_all(&mut self, records: &[ScheduleRecord]);

    /// Matching records, ordered by kickoff time ascending.
    fn find(&self, condition: &ScheduleCondition) -> Vec<ScheduleRecord>;

    /// Every team name with at least one match, first-seen order, empties
    /// dropped.
    fn all_teams(&self) -> Vec<TeamName>;

    /// Distinct non-empty category labels, first-seen order.
    fn all_categories(&self) -> Vec<Category>;

    fn last_updated(&self) -> Option<DateTime<FixedOffset>>;
}

/// In-memory backend used by the bin and the tests.
#[derive(Default)]
pub struct InMemoryScheduleRepository {
    records: IndexMap<SerialNumber, ScheduleRecord>,
    last_updated: Option<DateTime<FixedOffset>>,
}

impl ScheduleRepository for InMemoryScheduleRepository {
    fn upsert_all(&mut self, records: &[ScheduleRecord]) {
        for record in records {
            self.records
                .insert(record.serial_number().clone(), record.clone());
        }
        if !records.is_empty() {
            self.last_updated = Some(jst_now());
        }
    }

    fn find(&self, condition: &ScheduleCondition) -> Vec<ScheduleRecord> {
        let team = condition.team_name.as_deref().map(trim_team_name);
        let mut result: Vec<ScheduleRecord> = self
            .records
            .values()
            .filter(|record| matches(record, team.as_deref(), condition))
            .cloned()
            .collect();
        result.sort_by_key(|record| record.kickoff_time());
        result
    }

    fn all_teams(&self) -> Vec<TeamName> {
        let mut teams = IndexSet::new();
        for record in self.records.values() {
            teams.insert(record.home_team().clone());
        }
        for record in self.records.values() {
            teams.insert(record.away_team().clone());
        }
        teams.into_iter().filter(|team| !team.is_empty()).collect()
    }

    fn all_categories(&self) -> Vec<Category> {
        let mut categories = IndexSet::new();
        for record in self.records.values() {
            categories.insert(record.category().clone());
        }
        categories
            .into_iter()
            .filter(|category| !category.is_empty())
            .collect()
    }

    fn last_updated(&self) -> Option<DateTime<FixedOffset>> {
        self.last_updated
    }
}

fn matches(record: &ScheduleRecord, team: Option<&str>, condition: &ScheduleCondition) -> bool {
    if let Some(team) = team {
        let home: &str = record.home_team().as_ref();
        let away: &str = record.away_team().as_ref();
        if !home.contains(team) && !away.contains(team) {
            return false;
        }
    }
    if let Some(category) = condition.category.as_deref() {
        let label: &str = record.category().as_ref();
        if !label.contains(category) {
            return false;
        }
    }
    if let Some(match_date) = condition.match_date {
        if record.match_date() != match_date {
            return false;
        }
    }
    true
}
