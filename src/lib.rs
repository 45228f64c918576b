pub mod api;
pub mod batch;
pub mod config;
pub mod error;

pub use error::{Error, Result};
