use anyhow::Context;
use log::{debug, info};

use crate::schedule::coerce::{CoercionPolicy, Lenient};
use crate::schedule::extract::TabularExtract;
use crate::schedule::normalize::normalize;
use crate::schedule::schema::ScheduleRecord;

/// Drives an extractor and the row normalizer over one source document.
///
/// Records come out in source row order; kickoff-time ordering is applied
/// by the repository, not here.  Any extraction or normalization failure
/// aborts the run with zero records, never a partial list.
pub struct ScheduleBuilder<P = Lenient> {
    configured_year: i32,
    policy: P,
}

impl ScheduleBuilder {
    /// Builder with the production clamp-to-default coercion policy.
    pub fn new(configured_year: i32) -> Self {
        Self {
            configured_year,
            policy: Lenient,
        }
    }
}

impl<P: CoercionPolicy> ScheduleBuilder<P> {
    pub fn with_policy(configured_year: i32, policy: P) -> Self {
        Self {
            configured_year,
            policy,
        }
    }

    pub fn build<E: TabularExtract>(&self, extractor: E) -> anyhow::Result<Vec<ScheduleRecord>> {
        let layout = extractor.layout();
        let rows = extractor
            .rows()
            .context("Failed to extract rows from the source document")?;
        debug!("Extracted {} raw rows", rows.len());

        let mut records = Vec::new();
        for row in &rows {
            if let Some(record) = normalize(row, layout, self.configured_year, &self.policy)? {
                records.push(record);
            }
        }
        info!(
            "Normalized {} of {} rows into schedule records",
            records.len(),
            rows.len()
        );
        Ok(records)
    }
}
