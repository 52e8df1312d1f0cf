use chrono::{Duration, Utc};

use crate::schedule::schema::ScheduleRecord;

const EVENT_URL: &str = "https://www.google.com/calendar/event";
const TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Builds an "add to Google Calendar" deep link for one match.
///
/// Times are converted to UTC.  Reserve-tier ("satellite") matches are
/// played over 60 minutes, everything else gets the standard 90.
pub fn google_calendar_link(record: &ScheduleRecord) -> String {
    let title = format!(
        "{} ({} vs {})",
        record.category(),
        record.home_team(),
        record.away_team()
    );
    let minutes = if record.category().is_satellite() { 60 } else { 90 };
    let start = record.kickoff_time().with_timezone(&Utc);
    let end = start + Duration::minutes(minutes);
    format!(
        "{}?action=TEMPLATE&text={}&location={}&dates={}/{}",
        EVENT_URL,
        urlencoding::encode(&title),
        urlencoding::encode(record.studium().as_ref()),
        start.format(TIMESTAMP_FORMAT),
        end.format(TIMESTAMP_FORMAT),
    )
}
