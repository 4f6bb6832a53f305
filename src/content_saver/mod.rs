//! Output writers for the generated document

mod atomic_write;
mod json_saver;
mod markdown_saver;

pub use atomic_write::write_atomic;
pub use json_saver::save_json;
pub use markdown_saver::save_markdown;
