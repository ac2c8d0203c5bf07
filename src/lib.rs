pub mod app;
pub mod assistant;
pub mod code_utils;
pub mod config;
pub mod data;
pub mod markup;
pub mod model;
pub mod quiz;
pub mod shell;
pub mod ui;

pub use app::AuraApp;
