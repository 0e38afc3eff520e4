use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::product::value_text;

/// Cell type tag as reported by the spreadsheet backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum CellKind {
    Numeric,
    #[default]
    Text,
    Other(String),
}

impl From<String> for CellKind {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "n" => CellKind::Numeric,
            "s" => CellKind::Text,
            _ => CellKind::Other(raw),
        }
    }
}

impl From<CellKind> for String {
    fn from(kind: CellKind) -> Self {
        match kind {
            CellKind::Numeric => "n".to_string(),
            CellKind::Text => "s".to_string(),
            CellKind::Other(raw) => raw,
        }
    }
}

/// One cell of the server-rendered grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Cell {
    pub address: String,
    #[serde(rename = "type", default, deserialize_with = "super::null_as_default")]
    pub kind: CellKind,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub value: Value,
    #[serde(default)]
    pub display: Option<String>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub editable: bool,
}

impl Cell {
    /// The baseline text an edit is compared against. `null` reads as empty.
    pub fn baseline(&self) -> String {
        value_text(&self.value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CellPosition {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub r: u32,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub c: u32,
}

/// Start and end positions of the rendered area within the worksheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SheetRange {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub s: CellPosition,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub e: CellPosition,
}

/// A named worksheet as returned by `GET /formulas` and `PUT /formulas`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FormulaSheet {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub sheet_name: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub available_sheets: Vec<String>,
    #[serde(default)]
    pub range: Option<SheetRange>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub grid: Vec<Vec<Cell>>,
    #[serde(default)]
    pub message: Option<String>,
}

impl FormulaSheet {
    pub fn cell(&self, address: &str) -> Option<&Cell> {
        self.grid.iter().flatten().find(|cell| cell.address == address)
    }

    /// First worksheet row number shown, 1-based.
    pub fn first_row_number(&self) -> u32 {
        self.range.map(|range| range.s.r).unwrap_or(0) + 1
    }

    pub fn column_count(&self) -> usize {
        self.grid.first().map(Vec::len).unwrap_or(0)
    }
}

/// A single cell change sent on save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellUpdate {
    pub address: String,
    pub value: Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_grid_and_range() {
        let sheet: FormulaSheet = serde_json::from_str(
            r#"{"sheetName":"Preços","availableSheets":["Preços","Metais"],
                "range":{"s":{"r":3,"c":0},"e":{"r":4,"c":1}},
                "grid":[[{"address":"A4","type":"n","value":12.5,"display":"12,50","editable":true},
                         {"address":"B4","type":"s","value":null,"display":"","editable":false}]]}"#,
        )
        .unwrap();
        assert_eq!(sheet.first_row_number(), 4);
        assert_eq!(sheet.column_count(), 2);
        let a4 = sheet.cell("A4").unwrap();
        assert_eq!(a4.kind, CellKind::Numeric);
        assert_eq!(a4.baseline(), "12.5");
        assert_eq!(sheet.cell("B4").unwrap().baseline(), "");
        assert!(sheet.cell("C9").is_none());
    }
}
