use chrono::{DateTime, FixedOffset, Utc};

/// The federation publishes every kickoff in Japan Standard Time.
pub fn jst() -> FixedOffset {
    FixedOffset::east_opt(9 * 60 * 60).unwrap()
}

pub fn jst_now() -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&jst())
}
