mod payload;
pub mod products;
mod server;
pub mod users;

pub use payload::Payload;
pub use server::{HttpServer, HttpServerConfig};
