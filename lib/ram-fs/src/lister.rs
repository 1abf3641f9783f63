use crate::filesystem::FileSystemInner;
use crate::node::{Handle, NodeKind};
use crate::Result;

/// One line of a directory listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub kind: NodeKind,
    /// Byte length for files, 0 for directories.
    pub size: u64,
    /// Distance from the listed directory, offset by the starting depth.
    pub depth: usize,
}

/// The entries produced by a listing, in pre-order.
///
/// The listing is a snapshot taken under the read lock; later mutations
/// don't show up in it.
#[derive(Debug)]
pub struct Listing {
    entries: std::vec::IntoIter<DirEntry>,
}

impl Listing {
    fn new(entries: Vec<DirEntry>) -> Self {
        Self {
            entries: entries.into_iter(),
        }
    }
}

impl Iterator for Listing {
    type Item = DirEntry;

    fn next(&mut self) -> Option<DirEntry> {
        self.entries.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl ExactSizeIterator for Listing {}

impl FileSystemInner {
    pub(crate) fn list(&self, directory: Handle, depth: usize, recurse: bool) -> Result<Listing> {
        let mut entries = Vec::new();
        self.collect_entries(directory, depth, recurse, &mut entries)?;

        Ok(Listing::new(entries))
    }

    fn collect_entries(
        &self,
        directory: Handle,
        depth: usize,
        recurse: bool,
        entries: &mut Vec<DirEntry>,
    ) -> Result<()> {
        for child in self.directory(directory)?.children() {
            let node = self.node(child)?;
            entries.push(DirEntry {
                name: node.name().to_owned(),
                kind: node.kind(),
                size: node.size(),
                depth,
            });

            if recurse && node.kind().is_dir() {
                self.collect_entries(child, depth + 1, recurse, entries)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FileSystem, FsConfig, FsError};
    use pretty_assertions::assert_eq;

    fn entry(name: &str, kind: NodeKind, size: u64, depth: usize) -> DirEntry {
        DirEntry {
            name: name.to_owned(),
            kind,
            size,
            depth,
        }
    }

    /// ```text
    /// RAM_ROOT
    /// ├── SYSTEM
    /// │   ├── LOG.TXT (128)
    /// │   └── DRIVERS
    /// │       └── VGA.SYS (4)
    /// └── README (5)
    /// ```
    fn sample() -> FileSystem {
        let fs = FileSystem::new(FsConfig::default()).unwrap();
        let root = fs.root();
        let system = fs.insert_directory(root, "SYSTEM").unwrap();
        fs.insert_file(system, "LOG.TXT", &[0; 128]).unwrap();
        let drivers = fs.insert_directory(system, "DRIVERS").unwrap();
        fs.insert_file(drivers, "VGA.SYS", b"vga!").unwrap();
        fs.insert_file(root, "README", b"hello").unwrap();

        fs
    }

    #[test]
    fn flat_listing_has_only_direct_children() {
        let fs = sample();
        let entries: Vec<_> = fs.list(fs.root(), 0, false).unwrap().collect();

        assert_eq!(
            entries,
            vec![
                entry("SYSTEM", NodeKind::Directory, 0, 0),
                entry("README", NodeKind::File, 5, 0),
            ],
        );
    }

    #[test]
    fn recursive_listing_visits_every_descendant_once() {
        let fs = sample();
        let entries: Vec<_> = fs.list(fs.root(), 0, true).unwrap().collect();

        assert_eq!(
            entries,
            vec![
                entry("SYSTEM", NodeKind::Directory, 0, 0),
                entry("LOG.TXT", NodeKind::File, 128, 1),
                entry("DRIVERS", NodeKind::Directory, 0, 1),
                entry("VGA.SYS", NodeKind::File, 4, 2),
                entry("README", NodeKind::File, 5, 0),
            ],
        );
        assert_eq!(
            entries.len(),
            fs.occupancy().unwrap() - 1,
            "every node but the root is listed",
        );
    }

    #[test]
    fn starting_depth_offsets_every_entry() {
        let fs = sample();
        let system = fs.find(fs.root(), "SYSTEM").unwrap().unwrap();
        let depths: Vec<_> = fs.list(system, 3, true).unwrap().map(|e| e.depth).collect();

        assert_eq!(depths, vec![3, 3, 4]);
    }

    #[test]
    fn empty_directory_and_files() {
        let fs = FileSystem::new(FsConfig::default()).unwrap();
        assert_eq!(fs.list(fs.root(), 0, true).unwrap().len(), 0);

        let file = fs.insert_file(fs.root(), "A", b"").unwrap();
        assert!(matches!(
            fs.list(file, 0, false),
            Err(FsError::NotADirectory)
        ));
    }
}
