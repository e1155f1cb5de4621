pub mod client;
pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod logging;
pub mod responses;
pub mod router;
pub mod server;
pub mod templates;

pub use config::{CliArgs, Command, ServerConfig};
pub use db::{init_db, Database};
pub use logging::init_logging;
pub use router::{handle, respond};
pub use server::run_server;

#[cfg(test)]
mod tests;
