use std::collections::BTreeMap;
use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Sentinel reported for a section whose header never appears in the text.
pub const NOT_FOUND: &str = "Not found";

/// The resume sections the segmenter knows about.
///
/// Adding a section means adding a variant here and a row to the header
/// table in `vitae-parsing`; nothing else changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SectionKind {
    Skills,
    Projects,
    Experience,
}

impl SectionKind {
    /// All known sections, in display order.
    pub const ALL: [SectionKind; 3] = [
        SectionKind::Skills,
        SectionKind::Projects,
        SectionKind::Experience,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SectionKind::Skills => "Skills",
            SectionKind::Projects => "Projects",
            SectionKind::Experience => "Experience",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Extracted content of a single section, or the not-found marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionContent {
    Found(String),
    NotFound,
}

impl SectionContent {
    /// The content as reported at the output boundary: the extracted text,
    /// or the literal `"Not found"` sentinel.
    pub fn as_text(&self) -> &str {
        match self {
            SectionContent::Found(text) => text,
            SectionContent::NotFound => NOT_FOUND,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, SectionContent::Found(_))
    }
}

/// Result of segmenting a resume: exactly one entry per known section,
/// in [`SectionKind::ALL`] order, never partial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionMap {
    sections: BTreeMap<SectionKind, SectionContent>,
}

impl SectionMap {
    /// A map with every known section marked not found.
    pub fn all_not_found() -> Self {
        Self {
            sections: SectionKind::ALL
                .iter()
                .map(|kind| (*kind, SectionContent::NotFound))
                .collect(),
        }
    }

    pub fn insert(&mut self, kind: SectionKind, content: String) {
        self.sections.insert(kind, SectionContent::Found(content));
    }

    pub fn get(&self, kind: SectionKind) -> &SectionContent {
        // Every known kind is seeded at construction
        &self.sections[&kind]
    }

    pub fn iter(&self) -> impl Iterator<Item = (SectionKind, &SectionContent)> {
        self.sections.iter().map(|(kind, content)| (*kind, content))
    }
}

impl Default for SectionMap {
    fn default() -> Self {
        Self::all_not_found()
    }
}

impl Serialize for SectionMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for (kind, content) in &self.sections {
            map.serialize_entry(kind.name(), content.as_text())?;
        }
        map.end()
    }
}
