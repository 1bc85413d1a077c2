pub mod audit;
pub mod auth;
pub mod config;
pub mod error;
pub mod extract;
pub mod models;
pub mod routes;
pub mod settings;
pub mod state;
pub mod storage;
pub mod users;
pub mod validation;
