//! shop-hex: hexagonal users/products API library (core + inbound HTTP)

pub mod config;
pub mod errors;

pub mod application;

pub use shop_types::{api, domain, ports};

pub mod inbound; // HTTP adapter (routers + server)
