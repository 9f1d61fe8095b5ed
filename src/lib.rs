pub mod configuration;
pub mod domain;
pub mod guard;
pub mod routes;
pub mod startup;
pub mod telemetry;
pub mod waitlist_client;
