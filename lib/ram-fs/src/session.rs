use crate::filesystem::FileSystem;
use crate::lister::Listing;
use crate::node::Handle;
use crate::Result;
use tracing::debug;

/// A command session over a [`FileSystem`].
///
/// The session owns its current directory; several sessions can share the
/// same filesystem without seeing each other's navigation.
#[derive(Clone, Debug)]
pub struct Session {
    fs: FileSystem,
    cwd: Handle,
}

impl Session {
    /// Open a session positioned at the root directory.
    pub fn new(fs: FileSystem) -> Self {
        let cwd = fs.root();

        Self { fs, cwd }
    }

    pub fn filesystem(&self) -> &FileSystem {
        &self.fs
    }

    pub fn current_dir(&self) -> Handle {
        self.cwd
    }

    pub fn current_dir_name(&self) -> Result<String> {
        Ok(self.fs.info(self.cwd)?.name)
    }

    pub fn current_path(&self) -> Result<String> {
        self.fs.path_of(self.cwd)
    }

    /// List the current directory, descending into subdirectories when
    /// `recurse` is set.
    pub fn list(&self, recurse: bool) -> Result<Listing> {
        self.fs.list(self.cwd, 0, recurse)
    }

    /// `COPY <source> <destination>` within the current directory. Returns
    /// the handle of the new file.
    pub fn copy(&mut self, arguments: &str) -> Result<Handle> {
        self.fs.write_inner()?.copy(self.cwd, arguments)
    }

    /// `CD <name>` or `CD ..`. On failure the current directory is left
    /// unchanged.
    pub fn cd(&mut self, arguments: &str) -> Result<Handle> {
        let target = self.fs.read_inner()?.change_dir(self.cwd, arguments)?;

        if target != self.cwd {
            debug!(from = self.cwd.index(), to = target.index(), "current directory changed");
        }
        self.cwd = target;

        Ok(target)
    }
}
