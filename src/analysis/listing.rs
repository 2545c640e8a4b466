//! Accumulation and rendering of per-address output fragments

use crate::memory::LinkerAddress;
use std::collections::BTreeMap;

/// The output buffer of a disassembly run: one text fragment per decoded
/// location.
///
/// Fragments are created on first visit and mutated in place afterwards
/// (label insertion prepends, the block-boundary comment appends, and a
/// re-decode replaces). Rendering always iterates in ascending
/// `LinkerAddress` order, so control flow reads top to bottom within a
/// bank regardless of discovery order.
#[derive(Default)]
pub struct Listing {
    fragments: BTreeMap<LinkerAddress, String>,
}

impl Listing {
    pub fn new() -> Listing {
        Listing {
            fragments: BTreeMap::new(),
        }
    }

    /// Insert or replace the fragment at `at`.
    pub fn put(&mut self, at: LinkerAddress, text: String) {
        self.fragments.insert(at, text);
    }

    /// Append to the fragment at `at`, creating it if absent.
    pub fn append(&mut self, at: LinkerAddress, text: &str) {
        self.fragments.entry(at).or_default().push_str(text);
    }

    /// Prepend to the fragment at `at`, creating it if absent.
    pub fn prepend(&mut self, at: LinkerAddress, text: &str) {
        let fragment = self.fragments.entry(at).or_default();
        fragment.insert_str(0, text);
    }

    pub fn contains(&self, at: LinkerAddress) -> bool {
        self.fragments.contains_key(&at)
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn clear(&mut self) {
        self.fragments.clear();
    }

    /// Iterate fragments in address order.
    pub fn iter(&self) -> impl Iterator<Item = (&LinkerAddress, &str)> {
        self.fragments.iter().map(|(k, v)| (k, v.as_str()))
    }

    /// Concatenate every fragment in address order into the final listing
    /// text.
    pub fn render(&self) -> String {
        let mut out = String::new();

        for (_, text) in self.iter() {
            out.push_str(text);
        }

        out
    }
}
