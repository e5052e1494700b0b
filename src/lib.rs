pub mod config;
pub mod inventory;
pub mod logging;
pub mod ui;
