pub mod cache;
pub mod client;
pub mod commands;
pub mod competitions;
pub mod config;
pub mod data_provider;
pub mod error;
pub mod formatting;
pub mod tui;
pub mod types;

#[cfg(any(test, feature = "development"))]
pub mod fixtures;

#[cfg(any(test, feature = "development"))]
pub mod dev;
