pub mod error;
pub mod ports;
pub mod widget;

pub use error::{ApplicationError, ApplicationResult};
