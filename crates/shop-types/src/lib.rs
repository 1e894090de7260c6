//! shop-types: domain entities, repository ports and the JSON wire envelopes
//! shared by the HTTP server and client.

pub mod api;
pub mod domain;
pub mod ports;
