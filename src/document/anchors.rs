//! Unique anchor allocation for document headings.

use std::collections::HashSet;

use crate::utils::slugify;

/// Anchor of the table of contents heading, reserved before any other
pub const TOC_ANCHOR: &str = "table-of-contents";

/// Hands out slugs that never repeat within one document
///
/// The first claim of a slug gets it unchanged; later claims get `-1`,
/// `-2`, ... in claim order, so allocation is deterministic for a given
/// sequence of headings.
#[derive(Debug, Clone)]
pub struct AnchorRegistry {
    taken: HashSet<String>,
}

impl Default for AnchorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl AnchorRegistry {
    #[must_use]
    pub fn new() -> Self {
        let mut taken = HashSet::new();
        taken.insert(TOC_ANCHOR.to_string());
        Self { taken }
    }

    /// Slugify `text` and claim the first free variant of it
    pub fn claim(&mut self, text: &str) -> String {
        let base = slugify(text);
        if self.taken.insert(base.clone()) {
            return base;
        }

        let mut suffix = 1usize;
        loop {
            let candidate = format!("{base}-{suffix}");
            if self.taken.insert(candidate.clone()) {
                return candidate;
            }
            suffix += 1;
        }
    }

    #[must_use]
    pub fn contains(&self, anchor: &str) -> bool {
        self.taken.contains(anchor)
    }
}
