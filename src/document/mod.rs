//! Document model and assembly

pub mod anchors;
pub mod assembler;
pub mod model;

pub use anchors::{AnchorRegistry, TOC_ANCHOR};
pub use assembler::{assemble, package_heading};
pub use model::{
    ClassDoc, ClassKind, Document, FieldDoc, MemberDoc, MemberKind, MemberRef, Package,
    Parameter, SkippedClass, TableOfContents, TocEntry,
};
