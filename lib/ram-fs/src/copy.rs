use crate::filesystem::FileSystemInner;
use crate::node::{FileNode, Handle, Node, validate_name};
use crate::{FsError, Result};
use tracing::debug;

const COPY_USAGE: &str = "COPY <source> <destination>";

/// Split `"<source> <destination>"` at the first space. Everything after
/// that space, further spaces included, is the destination.
pub(crate) fn split_copy_arguments(arguments: &str) -> Result<(&str, &str)> {
    arguments.split_once(' ').ok_or(FsError::Usage(COPY_USAGE))
}

impl FileSystemInner {
    /// Duplicate a file of `directory` under a new name in the same
    /// directory.
    ///
    /// Both names are checked against the configured bound before anything
    /// is allocated. The allocation and the link into `directory` happen
    /// under the caller's write guard and are undone together.
    pub(crate) fn copy(&mut self, directory: Handle, arguments: &str) -> Result<Handle> {
        let (source_name, destination_name) = split_copy_arguments(arguments)?;
        let max_name_len = self.config.max_name_len;

        validate_name(source_name, max_name_len)?;
        let source = self
            .find(directory, source_name, self.config.match_mode)?
            .ok_or(FsError::SourceNotFound)?;
        let data = match self.node(source)? {
            Node::File(FileNode { data, .. }) => data.clone(),
            Node::Directory(_) => return Err(FsError::SourceNotFound),
        };

        validate_name(destination_name, max_name_len)?;

        let size = data.len();
        let copied = self.insert(directory, |handle| {
            Node::File(FileNode {
                handle,
                name: destination_name.to_owned(),
                parent: directory,
                data,
            })
        })?;

        debug!(
            source = source.index(),
            destination = copied.index(),
            size,
            "file copied",
        );

        Ok(copied)
    }
}
