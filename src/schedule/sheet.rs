use std::io::Cursor;

use calamine::{Data, DataType, Reader, Xlsx};
use log::debug;

use crate::schedule::extract::{ExtractError, RawRow, TabularExtract};
use crate::schedule::layout::{RowLayout, SHEET_LAYOUT};

/// Name of the sheet holding the kickoff-ordered schedule.
pub const SCHEDULE_SHEET: &str = "日程順";

/// The workbook the federation publishes alongside the page.  Used as a
/// fallback source when the page cannot be fetched.
pub struct ScheduleWorkbook {
    bytes: Vec<u8>,
}

impl ScheduleWorkbook {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

impl TabularExtract for ScheduleWorkbook {
    fn layout(&self) -> &'static RowLayout {
        &SHEET_LAYOUT
    }

    /// Skips the first (banner) row and keeps everything else, blank rows
    /// included; filtering is the normalizer's job.
    fn rows(self) -> Result<Vec<RawRow>, ExtractError> {
        let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(self.bytes))?;
        let range = match workbook.worksheet_range(SCHEDULE_SHEET) {
            Ok(range) => range,
            Err(calamine::XlsxError::WorksheetNotFound(name)) => {
                return Err(ExtractError::SheetNotFound(name))
            }
            Err(e) => return Err(e.into()),
        };
        debug!("Workbook sheet {:?}: {} rows", SCHEDULE_SHEET, range.height());
        Ok(range
            .rows()
            .skip(1)
            .map(|row| RawRow::from(row.iter().map(cell_to_string).collect::<Vec<_>>()))
            .collect())
    }
}

// Missing and error cells read as the empty string, everything else as its
// textual form, matching how the page cells come through.
fn cell_to_string(cell: &Data) -> String {
    cell.as_string().unwrap_or_default()
}
