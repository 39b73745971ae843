pub mod api;
pub mod config;
pub mod loadtest;
pub mod telemetry;
