pub mod confirm_dialog;
pub mod formula_workbook;
pub mod mobile_tab_bar;
pub mod navbar;
pub mod order_items;
pub mod sidebar;
pub mod toast;
pub mod top_banner;
pub mod top_search_bar;
pub mod top_sheet;
pub mod turnstile;
