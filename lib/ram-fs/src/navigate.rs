use crate::filesystem::FileSystemInner;
use crate::node::Handle;
use crate::{FsError, Result};

impl FileSystemInner {
    /// Work out where `CD <arguments>` leads from `current`.
    ///
    /// Returns the new current directory. Asking for the parent of the root
    /// returns the root itself.
    pub(crate) fn change_dir(&self, current: Handle, arguments: &str) -> Result<Handle> {
        let mode = self.config.match_mode;

        if mode.is_parent_request(arguments) {
            return Ok(self.node(current)?.parent().unwrap_or(current));
        }

        match self.find(current, arguments, mode)? {
            Some(target) if self.node(target)?.kind().is_dir() => Ok(target),
            _ => Err(FsError::DirectoryNotFound),
        }
    }
}
