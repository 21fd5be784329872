//! Users and classes over HTTP, backed by a swappable record store.

pub mod api;
pub mod config;
pub mod db;
pub mod telemetry;
