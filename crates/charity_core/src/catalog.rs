//! The fixed table of collections offered by the menu.

/// A menu label and the store collection it maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionEntry {
    /// Name shown in the collection menu.
    pub label: String,
    /// Name of the collection in the store.
    pub name: String,
}

impl CollectionEntry {
    /// Creates an entry.
    pub fn new(label: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            name: name.into(),
        }
    }
}

/// Ordered list of selectable collections, numbered from 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CollectionEntry>,
}

impl Catalog {
    /// Creates a catalog from entries in menu order.
    pub fn new(entries: Vec<CollectionEntry>) -> Self {
        Self { entries }
    }

    /// Entries in menu order.
    pub fn entries(&self) -> &[CollectionEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolves a 1-based menu choice.
    pub fn select(&self, choice: &str) -> Option<&CollectionEntry> {
        let index: usize = choice.parse().ok()?;
        index.checked_sub(1).and_then(|i| self.entries.get(i))
    }

    /// The menu number that exits, one past the last entry.
    pub fn exit_choice(&self) -> String {
        (self.entries.len() + 1).to_string()
    }

    /// The menu number that lists every collection, one past exit.
    pub fn show_all_choice(&self) -> String {
        (self.entries.len() + 2).to_string()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(vec![
            CollectionEntry::new("Donors", "Donors"),
            CollectionEntry::new("Donations", "Donations"),
            CollectionEntry::new("Projects", "Projects"),
            CollectionEntry::new("Volunteers", "Volunteers2"),
            CollectionEntry::new("VolunteerProjects", "VolunteerProjects"),
        ])
    }
}
