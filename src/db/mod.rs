pub mod connection;
pub mod properties;

pub use connection::{init_db, Database};
