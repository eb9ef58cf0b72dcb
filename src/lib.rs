pub mod app;
pub mod config;
pub mod data;
pub mod model;
pub mod pipeline;
pub mod source;
pub mod theme;
pub mod ui;
pub mod view_models;
#[cfg(target_arch = "wasm32")]
mod web;

pub use app::DashboardApp;
