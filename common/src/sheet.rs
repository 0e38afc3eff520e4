//! Unsaved edits of the formula sheet.
//!
//! The grid itself is owned by the server; the client only keeps a sparse
//! map of addresses whose text differs from what the server last sent.

use std::collections::BTreeMap;

use serde_json::{Number, Value};

use crate::model::formula::{Cell, CellKind, CellUpdate, FormulaSheet};

/// Spreadsheet column name for a zero-based index: 0 is `A`, 26 is `AA`.
pub fn column_letter(index: usize) -> String {
    let mut n = index + 1;
    let mut letters = Vec::new();
    while n > 0 {
        let remainder = (n - 1) % 26;
        letters.push(b'A' + remainder as u8);
        n = (n - 1) / 26;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}

/// Reads `1.234,56` style numbers: whitespace and `.` separators are
/// dropped and the first `,` becomes the decimal point. Blank input reads
/// as zero.
pub fn parse_locale_number(raw: &str) -> Option<f64> {
    let compact: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '.')
        .collect();
    if compact.is_empty() {
        return Some(0.0);
    }
    compact
        .replacen(',', ".", 1)
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetEditor {
    sheet: FormulaSheet,
    drafts: BTreeMap<String, String>,
}

impl SheetEditor {
    pub fn new(sheet: FormulaSheet) -> Self {
        Self { sheet, drafts: BTreeMap::new() }
    }

    pub fn sheet(&self) -> &FormulaSheet {
        &self.sheet
    }

    /// Swaps in a grid fresh from the server and drops every draft.
    pub fn replace(&mut self, sheet: FormulaSheet) {
        self.sheet = sheet;
        self.drafts.clear();
    }

    /// Records the text typed into a cell. Typing the server value back
    /// removes the draft. Read-only and unknown cells are ignored.
    pub fn edit(&mut self, address: &str, raw: &str) {
        let Some(cell) = self.sheet.cell(address) else {
            return;
        };
        if !cell.editable {
            return;
        }
        if raw == cell.baseline() {
            self.drafts.remove(address);
        } else {
            self.drafts.insert(address.to_string(), raw.to_string());
        }
    }

    pub fn has_drafts(&self) -> bool {
        !self.drafts.is_empty()
    }

    pub fn draft_count(&self) -> usize {
        self.drafts.len()
    }

    pub fn is_dirty(&self, address: &str) -> bool {
        self.drafts.contains_key(address)
    }

    /// Text shown in the input: the draft if any, else the server value.
    pub fn shown_value(&self, cell: &Cell) -> String {
        self.drafts
            .get(&cell.address)
            .cloned()
            .unwrap_or_else(|| cell.baseline())
    }

    /// The payload for `PUT /formulas`, one entry per draft in address order.
    pub fn build_updates(&self) -> Vec<CellUpdate> {
        self.drafts
            .iter()
            .map(|(address, raw)| CellUpdate {
                address: address.clone(),
                value: self.update_value(address, raw),
            })
            .collect()
    }

    fn update_value(&self, address: &str, raw: &str) -> Value {
        let Some(cell) = self.sheet.cell(address) else {
            return Value::String(raw.to_string());
        };
        if raw.is_empty() {
            return Value::Null;
        }
        if cell.kind == CellKind::Numeric {
            return parse_locale_number(raw)
                .and_then(Number::from_f64)
                .map(Value::Number)
                .unwrap_or_else(|| Value::String(raw.to_string()));
        }
        Value::String(raw.to_string())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn cell(address: &str, kind: CellKind, value: Value, editable: bool) -> Cell {
        Cell {
            address: address.into(),
            kind,
            value,
            display: None,
            editable,
        }
    }

    fn sheet() -> FormulaSheet {
        FormulaSheet {
            sheet_name: "Preços".into(),
            grid: vec![vec![
                cell("A1", CellKind::Numeric, json!(1500), true),
                cell("B1", CellKind::Text, json!("Platina"), true),
                cell("C1", CellKind::Text, Value::Null, true),
                cell("D1", CellKind::Numeric, json!(3), false),
            ]],
            ..FormulaSheet::default()
        }
    }

    #[test]
    fn column_letters() {
        assert_eq!(column_letter(0), "A");
        assert_eq!(column_letter(25), "Z");
        assert_eq!(column_letter(26), "AA");
        assert_eq!(column_letter(51), "AZ");
        assert_eq!(column_letter(702), "AAA");
    }

    #[test]
    fn locale_numbers() {
        assert_eq!(parse_locale_number("1.234,56"), Some(1234.56));
        assert_eq!(parse_locale_number(" 12,5 "), Some(12.5));
        assert_eq!(parse_locale_number("1,2,3"), None);
        assert_eq!(parse_locale_number("abc"), None);
    }

    #[test]
    fn edit_equal_to_baseline_is_not_a_draft() {
        let mut editor = SheetEditor::new(sheet());
        editor.edit("A1", "1500");
        assert!(!editor.has_drafts());

        editor.edit("B1", "Paládio");
        assert!(editor.is_dirty("B1"));
        editor.edit("B1", "Platina");
        assert!(!editor.has_drafts());

        editor.edit("C1", "");
        assert!(!editor.has_drafts());
    }

    #[test]
    fn read_only_cells_ignore_edits() {
        let mut editor = SheetEditor::new(sheet());
        editor.edit("D1", "9");
        editor.edit("Z9", "9");
        assert!(!editor.has_drafts());
    }

    #[test]
    fn updates_follow_cell_types() {
        let mut editor = SheetEditor::new(sheet());
        editor.edit("A1", "1.600,25");
        editor.edit("B1", "");
        editor.edit("C1", "obs");
        let updates = editor.build_updates();
        assert_eq!(
            updates,
            vec![
                CellUpdate { address: "A1".into(), value: json!(1600.25) },
                CellUpdate { address: "B1".into(), value: Value::Null },
                CellUpdate { address: "C1".into(), value: json!("obs") },
            ]
        );

        editor.edit("A1", "mil");
        assert_eq!(editor.build_updates()[0].value, json!("mil"));
    }

    #[test]
    fn shown_value_prefers_draft_and_replace_clears() {
        let mut editor = SheetEditor::new(sheet());
        editor.edit("B1", "Ródio");
        let b1 = editor.sheet().cell("B1").cloned().unwrap();
        assert_eq!(editor.shown_value(&b1), "Ródio");

        editor.replace(sheet());
        assert!(!editor.has_drafts());
        assert_eq!(editor.shown_value(&b1), "Platina");
    }
}
