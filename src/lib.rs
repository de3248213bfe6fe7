pub mod advisor;
pub mod finance;
pub mod gui;
pub mod i18n;
pub mod models;
pub mod roster;
pub mod settings;
pub mod state;
pub mod theme;
