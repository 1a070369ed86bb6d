pub mod banner;
pub mod configuration;
pub mod models;
pub mod routes;
pub mod services;
pub mod startup;
pub mod telemetry;
