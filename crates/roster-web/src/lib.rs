pub mod api;
pub mod app;
pub mod config;
pub mod query;
pub mod store;
pub mod util;
