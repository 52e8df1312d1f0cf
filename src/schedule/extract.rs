use derive_more::{From, Into};
use scraper::Html;
use thiserror::Error;

use crate::schedule::layout::{RowLayout, HTML_LAYOUT};

/// Unvalidated string cells of one source row, prior to normalization.
/// No length invariant holds until the normalizer checks it.
#[derive(Clone, PartialEq, Eq, Debug, From, Into)]
pub struct RawRow(Vec<String>);

impl RawRow {
    pub fn cells(&self) -> &[String] {
        &self.0
    }

    /// Cell at `index`, or the empty string when the row is too short.
    pub fn cell(&self, index: usize) -> &str {
        self.0.get(index).map(String::as_str).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("The workbook could not be read: {0}")]
    Workbook(#[from] calamine::XlsxError),
    #[error("The workbook has no sheet named {0:?}")]
    SheetNotFound(String),
}

/// A source document that can be broken into raw rows.
///
/// `rows` consumes the document and yields every row once, in source order.
/// The layout tells the normalizer where each field sits in those rows.
pub trait TabularExtract {
    fn layout(&self) -> &'static RowLayout;
    fn rows(self) -> Result<Vec<RawRow>, ExtractError>;
}

/// Schedule tables on the federation page.
///
/// The site marks data tables with `border="1"`, which is what tells them
/// apart from the layout tables around them.
pub struct HtmlScheduleTable {
    document: Html,
}

impl HtmlScheduleTable {
    pub fn parse(content: &str) -> Self {
        Self {
            document: Html::parse_document(content),
        }
    }
}

impl TabularExtract for HtmlScheduleTable {
    fn layout(&self) -> &'static RowLayout {
        &HTML_LAYOUT
    }

    /// A document with no matching table yields no rows; that is "no data
    /// this run", not an error.
    fn rows(self) -> Result<Vec<RawRow>, ExtractError> {
        let mut rows = Vec::new();
        for table in self.document.select(selector!(r#"table[border="1"]"#)) {
            for tr in table.select(selector!("tr")) {
                let cells = tr
                    .select(selector!("td"))
                    .map(|td| td.text().collect::<String>().trim().to_owned())
                    .collect::<Vec<_>>();
                rows.push(RawRow::from(cells));
            }
        }
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_rows_from_bordered_tables_only() {
        let content = r#"
            <table><tr><td>layout table, ignored</td></tr></table>
            <table border="1">
            <tr><td>480</td><td>ST61</td><td></td></tr>
            <tr><td>469</td><td>ST50</td><td>x</td></tr>
            </table>
        "#;
        let rows = HtmlScheduleTable::parse(content).rows().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].cells(), ["480", "ST61", ""]);
        assert_eq!(rows[1].cells(), ["469", "ST50", "x"]);
    }

    #[test]
    fn empty_and_nested_cells_become_plain_strings() {
        let content = r#"
            <table border="1">
            <tr><td></td><td align="right"> 6 </td><td><b>六　合</b></td></tr>
            </table>
        "#;
        let rows = HtmlScheduleTable::parse(content).rows().unwrap();
        assert_eq!(rows[0].cells(), ["", "6", "六　合"]);
    }

    #[test]
    fn no_matching_table_yields_no_rows() {
        let rows = HtmlScheduleTable::parse("<p>nothing here</p>").rows().unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn out_of_range_cell_reads_as_empty() {
        let row = RawRow::from(vec!["480".to_owned()]);
        assert_eq!(row.cell(0), "480");
        assert_eq!(row.cell(5), "");
    }
}
