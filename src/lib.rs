pub mod models;
pub mod config;
pub mod api;
pub mod relations;
pub mod state;
pub mod table;
pub mod pages;
pub mod app;
