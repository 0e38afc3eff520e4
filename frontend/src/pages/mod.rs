pub mod admin_dashboard;
pub mod admin_messages;
pub mod admin_orders;
pub mod admin_products;
pub mod admin_promos;
pub mod admin_users;
pub mod cart;
pub mod catalog;
pub mod favorites;
pub mod home;
pub mod login;
pub mod orders;
pub mod product_detail;
pub mod profile;
