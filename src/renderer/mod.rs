//! Output rendering

pub mod markdown;

pub use markdown::{escape_text, render};
