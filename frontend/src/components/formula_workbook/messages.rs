use common::model::formula::FormulaSheet;

pub enum Msg {
    /// Fetch a sheet by name, or the default one.
    Load(Option<String>),
    Loaded(FormulaSheet),
    LoadFailed(String),
    SelectSheet(String),
    Edit { address: String, value: String },
    Reload,
    Save,
    Saved(FormulaSheet),
    SaveFailed(String),
}
