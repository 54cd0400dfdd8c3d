pub mod api_doc;
pub mod app;
pub mod config;
pub mod cors;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;
pub mod upstream;
