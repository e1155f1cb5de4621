pub mod property;

pub use property::{NewProperty, Property};
