//! This module contains the [`FileSystem`] type itself.

use crate::arena::{NodeArena, SlotState};
use crate::config::{FsConfig, MatchMode};
use crate::lister::Listing;
use crate::node::{DirectoryNode, FileNode, Handle, Node, NodeInfo, validate_name};
use crate::{FsError, Result};
use std::fmt;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, warn};

/// The in-memory file system!
///
/// This `FileSystem` type can be cloned, it's a light copy of the
/// `FileSystemInner` (which is behind a `Arc` + `RwLock`). Every mutation
/// happens under a single write guard, so clones can be handed to
/// independent sessions or threads.
#[derive(Clone)]
pub struct FileSystem {
    pub(crate) inner: Arc<RwLock<FileSystemInner>>,
    root: Handle,
}

impl FileSystem {
    /// Create an empty filesystem holding only the root directory.
    pub fn new(config: FsConfig) -> Result<Self> {
        let inner = FileSystemInner::with_root(config)?;
        let root = inner.root;

        Ok(Self {
            inner: Arc::new(RwLock::new(inner)),
            root,
        })
    }

    pub fn root(&self) -> Handle {
        self.root
    }

    pub(crate) fn read_inner(&self) -> Result<RwLockReadGuard<'_, FileSystemInner>> {
        self.inner.read().map_err(|_| FsError::Lock)
    }

    pub(crate) fn write_inner(&self) -> Result<RwLockWriteGuard<'_, FileSystemInner>> {
        self.inner.write().map_err(|_| FsError::Lock)
    }

    pub fn config(&self) -> Result<FsConfig> {
        Ok(self.read_inner()?.config.clone())
    }

    pub fn capacity(&self) -> Result<usize> {
        Ok(self.read_inner()?.arena.capacity())
    }

    /// Number of occupied arena slots, the root included.
    pub fn occupancy(&self) -> Result<usize> {
        Ok(self.read_inner()?.arena.occupancy())
    }

    /// The state of the arena slot at `index`, or `None` past the capacity.
    pub fn slot_state(&self, index: usize) -> Result<Option<SlotState>> {
        Ok(self.read_inner()?.arena.state(index))
    }

    pub fn info(&self, handle: Handle) -> Result<NodeInfo> {
        Ok(self.read_inner()?.node(handle)?.info())
    }

    /// Copy out the content of a file.
    pub fn read_file(&self, handle: Handle) -> Result<Vec<u8>> {
        match self.read_inner()?.node(handle)? {
            Node::File(FileNode { data, .. }) => Ok(data.clone()),
            Node::Directory(_) => Err(FsError::NotAFile),
        }
    }

    /// Absolute path of a node, `\` separated, the root being `\`.
    pub fn path_of(&self, handle: Handle) -> Result<String> {
        self.read_inner()?.path_of(handle)
    }

    /// Find a child of `directory` using the configured [`MatchMode`].
    pub fn find(&self, directory: Handle, fragment: &str) -> Result<Option<Handle>> {
        let guard = self.read_inner()?;
        let mode = guard.config.match_mode;

        guard.find(directory, fragment, mode)
    }

    pub fn find_with(
        &self,
        directory: Handle,
        fragment: &str,
        mode: MatchMode,
    ) -> Result<Option<Handle>> {
        self.read_inner()?.find(directory, fragment, mode)
    }

    /// List `directory`, tagging its direct children with `depth`.
    pub fn list(&self, directory: Handle, depth: usize, recurse: bool) -> Result<Listing> {
        self.read_inner()?.list(directory, depth, recurse)
    }

    /// Create an empty directory under `parent`.
    pub fn insert_directory(&self, parent: Handle, name: &str) -> Result<Handle> {
        let mut guard = self.write_inner()?;
        validate_name(name, guard.config.max_name_len)?;
        let max_children = guard.config.max_children;

        guard.insert(parent, |handle| {
            Node::Directory(DirectoryNode::new(
                handle,
                name.to_owned(),
                Some(parent),
                max_children,
            ))
        })
    }

    /// Create a file under `parent` holding `contents`.
    pub fn insert_file(&self, parent: Handle, name: &str, contents: &[u8]) -> Result<Handle> {
        let mut guard = self.write_inner()?;
        validate_name(name, guard.config.max_name_len)?;
        let max = guard.config.max_file_size;
        if contents.len() > max {
            return Err(FsError::FileTooLarge { max });
        }

        guard.insert(parent, |handle| {
            Node::File(FileNode {
                handle,
                name: name.to_owned(),
                parent,
                data: contents.to_vec(),
            })
        })
    }
}

impl fmt::Debug for FileSystem {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.read() {
            Ok(fs) => fmt::Debug::fmt(&*fs, formatter),
            Err(_) => formatter.write_str("FileSystem { <poisoned> }"),
        }
    }
}

/// The core of the file system. It contains the arena of `Node`s, indexed
/// by their respective `Handle`.
pub(crate) struct FileSystemInner {
    pub(crate) arena: NodeArena,
    pub(crate) config: FsConfig,
    pub(crate) root: Handle,
}

impl FileSystemInner {
    pub(crate) fn node(&self, handle: Handle) -> Result<&Node> {
        self.arena.get(handle).ok_or(FsError::InvalidHandle)
    }

    pub(crate) fn directory(&self, handle: Handle) -> Result<&DirectoryNode> {
        self.node(handle)?.as_directory()
    }

    /// Allocate a node and link it under `parent` as one unit.
    ///
    /// When the parent's children table is full the fresh slot is handed
    /// back to the arena before the error is returned, so nothing is
    /// orphaned.
    pub(crate) fn insert(
        &mut self,
        parent: Handle,
        build: impl FnOnce(Handle) -> Node,
    ) -> Result<Handle> {
        self.directory(parent)?;

        let handle = self.arena.allocate(build)?;
        let linked = self
            .arena
            .get_mut(parent)
            .ok_or(FsError::InvalidHandle)
            .and_then(Node::as_directory_mut)
            .and_then(|directory| directory.link(handle));

        match linked {
            Ok(position) => {
                debug!(
                    index = handle.index(),
                    parent = parent.index(),
                    position,
                    "node linked",
                );

                Ok(handle)
            }
            Err(error) => {
                warn!(
                    index = handle.index(),
                    parent = parent.index(),
                    %error,
                    "linking failed, rolling the allocation back",
                );
                self.arena.rollback(handle);

                Err(error)
            }
        }
    }

    pub(crate) fn path_of(&self, handle: Handle) -> Result<String> {
        let mut names = Vec::new();
        let mut node = self.node(handle)?;

        while let Some(parent) = node.parent() {
            names.push(node.name());
            node = self.node(parent)?;
        }

        if names.is_empty() {
            return Ok("\\".to_owned());
        }

        Ok(names
            .into_iter()
            .rev()
            .fold(String::new(), |path, name| path + "\\" + name))
    }
}

impl fmt::Debug for FileSystemInner {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            formatter,
            "\n{slot:<8}    {ty:<4}    name",
            slot = "slot",
            ty = "type",
        )?;

        fn debug(
            handles: Vec<Handle>,
            slf: &FileSystemInner,
            formatter: &mut fmt::Formatter<'_>,
            indentation: usize,
        ) -> fmt::Result {
            for node in handles.into_iter().filter_map(|handle| slf.arena.get(handle)) {
                writeln!(
                    formatter,
                    "{slot:<8}    {ty:<4}   {indentation_symbol:indentation_width$}{name}",
                    slot = node.handle().index(),
                    ty = match node {
                        Node::File { .. } => "file",
                        Node::Directory { .. } => "dir",
                    },
                    name = node.name(),
                    indentation_symbol = " ",
                    indentation_width = indentation * 2 + 1,
                )?;

                if let Node::Directory(directory) = node {
                    debug(
                        directory.children().collect(),
                        slf,
                        formatter,
                        indentation + 1,
                    )?;
                }
            }

            Ok(())
        }

        debug(vec![self.root], self, formatter, 0)
    }
}
