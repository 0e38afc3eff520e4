use common::sheet::SheetEditor;

pub struct FormulaWorkbook {
    /// `None` until the first sheet arrives.
    pub editor: Option<SheetEditor>,
    pub loading: bool,
    pub saving: bool,
    pub error: Option<String>,
    pub success: Option<String>,
    pub loaded: bool,
}

impl FormulaWorkbook {
    pub fn new() -> Self {
        Self {
            editor: None,
            loading: false,
            saving: false,
            error: None,
            success: None,
            loaded: false,
        }
    }

    pub fn sheet_name(&self) -> Option<String> {
        self.editor
            .as_ref()
            .map(|editor| editor.sheet().sheet_name.clone())
            .filter(|name| !name.is_empty())
    }

    pub fn can_save(&self) -> bool {
        !self.saving && self.editor.as_ref().is_some_and(|editor| editor.has_drafts())
    }
}
