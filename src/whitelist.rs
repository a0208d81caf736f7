use crate::compression::{open_ro, ReadMode};
use crate::error::Result;
use rustc_hash::FxHashSet;
use std::io::BufRead;
use std::path::Path;

/// Gene names as loaded from the gene list file, lower-cased
///
/// This is the snapshot used for the final "not found" report; it is never
/// mutated once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneList {
    names: FxHashSet<String>,
}

impl GeneList {
    /// Read gene names (one per line, supports comments with #)
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut names = FxHashSet::default();

        for line in reader.lines() {
            let line = line?;
            let name = line.trim();
            // Skip empty lines and comments
            if !name.is_empty() && !name.starts_with('#') {
                names.insert(name.to_lowercase());
            }
        }

        Ok(GeneList { names })
    }

    /// Read a plain, gzip or bzip2 gene list
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_reader(open_ro(path, ReadMode::Text)?)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for GeneList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        GeneList {
            names: iter
                .into_iter()
                .map(|name| name.as_ref().to_lowercase())
                .collect(),
        }
    }
}

/// Identifiers allowed into the output
///
/// Starts as a copy of the gene list and grows as matched records register
/// their own IDs, so later records sharing that ID (as `ID` or `gene`) match
/// too. Entries are never removed.
#[derive(Debug, Clone, Default)]
pub struct Whitelist {
    ids: FxHashSet<String>,
}

impl Whitelist {
    pub fn new(genes: &GeneList) -> Self {
        Whitelist {
            ids: genes.names.clone(),
        }
    }

    /// Membership test; the empty string never matches
    #[inline]
    pub fn contains(&self, id: &str) -> bool {
        !id.is_empty() && self.ids.contains(id)
    }

    /// Returns true if the ID was not already whitelisted
    pub fn insert(&mut self, id: &str) -> bool {
        if self.ids.contains(id) {
            false
        } else {
            self.ids.insert(id.to_string())
        }
    }
}
