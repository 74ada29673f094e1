//! Raw package entries of a `.docx` container.

/// Path of the main document part.
pub const DOCUMENT_PART: &str = "word/document.xml";

/// Path of the style definitions part.
pub const STYLES_PART: &str = "word/styles.xml";

/// Compression used for a package entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Compression {
    /// Stored without compression
    Stored,
    /// Deflate compressed
    #[default]
    Deflated,
}

/// A single file inside the package.
#[derive(Debug, Clone)]
pub struct PackageEntry {
    /// Path inside the archive (e.g. `word/styles.xml`)
    pub name: String,

    /// Raw bytes
    pub data: Vec<u8>,

    /// Compression method to use when writing
    pub compression: Compression,
}

impl PackageEntry {
    /// Create a deflated entry.
    pub fn new(name: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            data,
            compression: Compression::Deflated,
        }
    }
}

/// The ordered set of files in a `.docx` archive.
#[derive(Debug, Clone, Default)]
pub struct Package {
    entries: Vec<PackageEntry>,
}

impl Package {
    /// Create an empty package.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn push(&mut self, entry: PackageEntry) {
        self.entries.push(entry);
    }

    /// Get an entry by name.
    pub fn get(&self, name: &str) -> Option<&PackageEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Check if an entry exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Entries in archive order.
    pub fn entries(&self) -> &[PackageEntry] {
        &self.entries
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the package has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_lookup() {
        let mut package = Package::new();
        package.push(PackageEntry::new("[Content_Types].xml", b"<Types/>".to_vec()));
        package.push(PackageEntry::new(DOCUMENT_PART, Vec::new()));

        assert_eq!(package.len(), 2);
        assert!(package.contains(DOCUMENT_PART));
        assert!(!package.contains(STYLES_PART));
        assert_eq!(package.entries()[0].name, "[Content_Types].xml");
    }
}
