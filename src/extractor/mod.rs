//! HTML extraction: layout detection, navigation and class pages

pub mod format;
pub mod layouts;
pub(crate) mod members;
pub mod navigation;
pub mod signature;
pub mod text;

pub use format::{JavadocFormat, detect_format, frame_target};
pub use layouts::{JavadocLayout, LegacyLayout, ModernLayout};
pub use navigation::{ClassLink, PackageLink, package_name_from_href};
