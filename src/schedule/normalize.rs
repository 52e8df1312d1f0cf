use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

use crate::chrono_util::jst;
use crate::schedule::coerce::{resolve_fiscal_year, CoercionError, CoercionPolicy};
use crate::schedule::extract::RawRow;
use crate::schedule::layout::{RowLayout, SourceVariant, HEADER_ROW};
use crate::schedule::schema::ScheduleRecord;

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error(transparent)]
    Coercion(#[from] CoercionError),
    #[error("Row {serial:?} does not name a real calendar date: {year}-{month:02}-{day:02}")]
    InvalidDate {
        serial: String,
        year: i32,
        month: u32,
        day: u32,
    },
    #[error("Row {serial:?} does not name a real kickoff time: {hour}:{minute:02}")]
    InvalidTime {
        serial: String,
        hour: u32,
        minute: u32,
    },
}

/// Maps one raw row to a schedule record.
///
/// `Ok(None)` is the skip signal for the source's known non-data rows:
/// the repeated heading, section separators with an empty leading cell,
/// page rows of the wrong width, and workbook rows lacking a date.  Those
/// are policy, not errors; the document is third-party maintained and full
/// of irregular legacy rows, and partial data beats none.
///
/// Coerced values that still fail timestamp construction (an hour of 24,
/// or a clamped month/day pair like February 30th) do error out: such a
/// row would otherwise turn into a record for a match that cannot exist.
pub fn normalize<P: CoercionPolicy>(
    row: &RawRow,
    layout: &RowLayout,
    configured_year: i32,
    policy: &P,
) -> Result<Option<ScheduleRecord>, NormalizeError> {
    if is_header(row) {
        return Ok(None);
    }
    if row.cell(layout.serial_number).is_empty() {
        return Ok(None);
    }
    match layout.variant {
        SourceVariant::Html { expected_columns } => {
            if row.len() != expected_columns {
                return Ok(None);
            }
        }
        SourceVariant::Sheet => {
            if row.cell(layout.month).is_empty() || row.cell(layout.day).is_empty() {
                return Ok(None);
            }
        }
    }

    let serial = row.cell(layout.serial_number);
    let month = policy.month(row.cell(layout.month))?;
    let day = policy.day(row.cell(layout.day))?;
    let (hour, minute) = policy.time(row.cell(layout.kickoff))?;
    let year = resolve_fiscal_year(month, configured_year);

    let match_date =
        NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| NormalizeError::InvalidDate {
            serial: serial.to_owned(),
            year,
            month,
            day,
        })?;
    let kickoff_time = NaiveTime::from_hms_opt(hour, minute, 0)
        .and_then(|time| match_date.and_time(time).and_local_timezone(jst()).single())
        .ok_or_else(|| NormalizeError::InvalidTime {
            serial: serial.to_owned(),
            hour,
            minute,
        })?;

    Ok(Some(
        ScheduleRecord::builder()
            .serial_number(serial.to_owned().into())
            .category(row.cell(layout.category).to_owned().into())
            .match_number(row.cell(layout.match_number).to_owned().into())
            .match_date(match_date)
            .kickoff_time(kickoff_time)
            .home_team(strip_ideographic_spaces(row.cell(layout.home_team)).into())
            .away_team(strip_ideographic_spaces(row.cell(layout.away_team)).into())
            .studium(row.cell(layout.studium).to_owned().into())
            .build(),
    ))
}

fn is_header(row: &RawRow) -> bool {
    row.cells().iter().map(String::as_str).eq(HEADER_ROW)
}

// Team cells pad short names with U+3000 for visual alignment.
fn strip_ideographic_spaces(name: &str) -> String {
    name.replace('\u{3000}', "")
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::schedule::coerce::{Lenient, Strict};
    use crate::schedule::layout::{HTML_LAYOUT, SHEET_LAYOUT};

    fn raw(cells: &[&str]) -> RawRow {
        RawRow::from(cells.iter().map(|c| c.to_string()).collect::<Vec<_>>())
    }

    fn html_row() -> RawRow {
        raw(&[
            "480",
            "ST61",
            "",
            "6",
            "2",
            "サテライト",
            "",
            "花咲球技場",
            "14:00",
            "六　合",
            "vs",
            "中富良野",
            "82",
        ])
    }

    #[test]
    fn normalizes_a_page_row() {
        let record = normalize(&html_row(), &HTML_LAYOUT, 2020, &Lenient)
            .unwrap()
            .unwrap();
        assert_eq!(record.serial_number().to_string(), "480");
        assert_eq!(record.category().to_string(), "サテライト");
        assert_eq!(record.match_number().to_string(), "ST61");
        assert_eq!(record.match_date(), NaiveDate::from_ymd_opt(2020, 6, 2).unwrap());
        assert_eq!(
            record.kickoff_time().to_rfc3339(),
            "2020-06-02T14:00:00+09:00"
        );
        assert_eq!(record.home_team().to_string(), "六合");
        assert_eq!(record.away_team().to_string(), "中富良野");
        assert_eq!(record.studium().to_string(), "花咲球技場");
    }

    #[test]
    fn kickoff_always_falls_on_the_match_date() {
        let record = normalize(&html_row(), &HTML_LAYOUT, 2020, &Lenient)
            .unwrap()
            .unwrap();
        assert_eq!(record.kickoff_time().date_naive(), record.match_date());
    }

    #[test]
    fn skips_the_heading_row() {
        let header = raw(&[
            "", "M.No.", "節", "月", "日", "C", "G", "会場", "KO", "HOME", "", "AWAY",
        ]);
        assert!(normalize(&header, &HTML_LAYOUT, 2020, &Lenient)
            .unwrap()
            .is_none());
    }

    #[test]
    fn skips_rows_without_a_serial_number() {
        let row = raw(&[
            "", "", "", "", "", "", "", "", "", "", "", "", "",
        ]);
        assert!(normalize(&row, &HTML_LAYOUT, 2020, &Lenient)
            .unwrap()
            .is_none());
    }

    #[test]
    fn skips_short_page_rows() {
        // Archived tables used a narrower shape; misaligning the columns
        // would produce garbage records.
        let row = raw(&["480", "ST61", "6", "2", "サテライト", "花咲球技場"]);
        assert!(normalize(&row, &HTML_LAYOUT, 2020, &Lenient)
            .unwrap()
            .is_none());
    }

    #[test]
    fn skips_workbook_rows_lacking_a_date() {
        let row = raw(&[
            "M84",
            "AC56",
            "7",
            "10",
            "",
            "D1",
            "B",
            "東光スポーツ公園A",
            "15:30:00",
            "六　合",
            "vs",
            "TRAUM2nd",
            "104",
        ]);
        assert!(normalize(&row, &SHEET_LAYOUT, 2020, &Lenient)
            .unwrap()
            .is_none());
    }

    #[test]
    fn normalizes_a_workbook_row_with_seconds_in_the_time() {
        let row = raw(&[
            "M66",
            "AC38",
            "3",
            "8",
            "9",
            "D1",
            "B",
            "東光スポーツ公園A",
            "15:30:00",
            "六　合",
            "vs",
            "留　萌",
            "82",
        ]);
        let record = normalize(&row, &SHEET_LAYOUT, 2020, &Lenient)
            .unwrap()
            .unwrap();
        assert_eq!(record.match_date(), NaiveDate::from_ymd_opt(2020, 8, 9).unwrap());
        assert_eq!(
            record.kickoff_time().to_rfc3339(),
            "2020-08-09T15:30:00+09:00"
        );
        assert_eq!(record.away_team().to_string(), "留萌");
    }

    fn with_cell(row: RawRow, index: usize, value: &str) -> RawRow {
        let mut cells: Vec<String> = row.into();
        cells[index] = value.to_owned();
        RawRow::from(cells)
    }

    #[test]
    fn january_rows_land_in_the_following_calendar_year() {
        let row = with_cell(html_row(), 3, "1");
        let record = normalize(&row, &HTML_LAYOUT, 2019, &Lenient)
            .unwrap()
            .unwrap();
        assert_eq!(record.match_date(), NaiveDate::from_ymd_opt(2020, 1, 2).unwrap());
    }

    #[test]
    fn hour_24_survives_coercion_but_fails_timestamp_construction() {
        let row = with_cell(html_row(), 8, "24:00");
        let err = normalize(&row, &HTML_LAYOUT, 2020, &Lenient).unwrap_err();
        assert!(matches!(
            err,
            NormalizeError::InvalidTime { hour: 24, minute: 0, .. }
        ));
    }

    #[test]
    fn clamped_date_pairs_can_still_be_impossible() {
        let row = with_cell(with_cell(html_row(), 3, "2"), 4, "30");
        let err = normalize(&row, &HTML_LAYOUT, 2020, &Lenient).unwrap_err();
        assert!(matches!(err, NormalizeError::InvalidDate { month: 2, day: 30, .. }));
    }

    #[test]
    fn strict_policy_surfaces_coercion_errors() {
        let row = with_cell(html_row(), 3, "13");
        let err = normalize(&row, &HTML_LAYOUT, 2020, &Strict).unwrap_err();
        assert!(matches!(err, NormalizeError::Coercion(_)));
    }
}
