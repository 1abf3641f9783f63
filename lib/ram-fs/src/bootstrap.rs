//! Creating the root and the demonstration content.

use crate::arena::NodeArena;
use crate::config::FsConfig;
use crate::filesystem::{FileSystem, FileSystemInner};
use crate::node::{DirectoryNode, Handle, Node};
use crate::Result;
use tracing::debug;

pub const ROOT_NAME: &str = "RAM_ROOT";
pub const DEMO_DIRECTORY: &str = "SYSTEM";
pub const DEMO_FILE: &str = "LOG.TXT";
pub const DEMO_FILE_SIZE: usize = 128;

impl FileSystemInner {
    pub(crate) fn with_root(config: FsConfig) -> Result<Self> {
        config.validate()?;

        let mut arena = NodeArena::with_capacity(config.capacity);
        let max_children = config.max_children;
        // The root name is fixed and does not go through the name bound.
        let root = arena.allocate(|handle| {
            Node::Directory(DirectoryNode::new(
                handle,
                ROOT_NAME.to_owned(),
                None,
                max_children,
            ))
        })?;

        Ok(Self {
            arena,
            config,
            root,
        })
    }
}

impl FileSystem {
    /// Create a filesystem and seed it with the demonstration tree.
    pub fn bootstrap(config: FsConfig) -> Result<Self> {
        let fs = Self::new(config)?;
        fs.seed_demo_content()?;

        Ok(fs)
    }

    /// Add `SYSTEM\LOG.TXT` under the root. Returns the `SYSTEM` directory.
    pub fn seed_demo_content(&self) -> Result<Handle> {
        let system = self.insert_directory(self.root(), DEMO_DIRECTORY)?;
        self.insert_file(system, DEMO_FILE, &demo_log())?;
        debug!(occupancy = self.occupancy()?, "demo content seeded");

        Ok(system)
    }
}

fn demo_log() -> Vec<u8> {
    b"RAM disk initialized.\n"
        .iter()
        .copied()
        .cycle()
        .take(DEMO_FILE_SIZE)
        .collect()
}
