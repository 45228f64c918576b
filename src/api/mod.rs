mod client;
mod types;

pub use client::{HttpOcrApi, OcrApi};
pub use types::*;
