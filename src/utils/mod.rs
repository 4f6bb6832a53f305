pub mod constants;
pub mod string_utils;
pub mod url_utils;

pub use constants::*;
pub use string_utils::{normalize_whitespace, slugify};
pub use url_utils::{ResolvedTarget, resolve_target};
