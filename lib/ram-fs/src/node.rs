use crate::{FsError, Result};

/// Identifies a node slot in the arena.
///
/// The generation is bumped whenever a slot is handed back to the arena, so
/// a handle kept across such a release no longer resolves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Handle {
    index: usize,
    generation: u32,
}

impl Handle {
    pub(crate) fn new(index: usize, generation: u32) -> Self {
        Self { index, generation }
    }

    #[inline]
    pub fn index(self) -> usize {
        self.index
    }

    #[inline]
    pub fn generation(self) -> u32 {
        self.generation
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    File,
    Directory,
}

impl NodeKind {
    pub fn is_dir(self) -> bool {
        matches!(self, Self::Directory)
    }

    pub fn is_file(self) -> bool {
        matches!(self, Self::File)
    }
}

/// A detached snapshot of a node's metadata.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeInfo {
    pub handle: Handle,
    pub name: String,
    pub kind: NodeKind,
    pub size: u64,
    pub parent: Option<Handle>,
}

#[derive(Debug)]
pub(crate) struct FileNode {
    pub(crate) handle: Handle,
    pub(crate) name: String,
    pub(crate) parent: Handle,
    pub(crate) data: Vec<u8>,
}

#[derive(Debug)]
pub(crate) struct DirectoryNode {
    pub(crate) handle: Handle,
    pub(crate) name: String,
    pub(crate) parent: Option<Handle>,
    pub(crate) children: Box<[Option<Handle>]>,
}

#[derive(Debug)]
pub(crate) enum Node {
    File(FileNode),
    Directory(DirectoryNode),
}

impl Node {
    pub(crate) fn handle(&self) -> Handle {
        match self {
            Self::File(FileNode { handle, .. }) => *handle,
            Self::Directory(DirectoryNode { handle, .. }) => *handle,
        }
    }

    pub(crate) fn name(&self) -> &str {
        match self {
            Self::File(FileNode { name, .. }) => name,
            Self::Directory(DirectoryNode { name, .. }) => name,
        }
    }

    pub(crate) fn kind(&self) -> NodeKind {
        match self {
            Self::File(_) => NodeKind::File,
            Self::Directory(_) => NodeKind::Directory,
        }
    }

    pub(crate) fn size(&self) -> u64 {
        match self {
            Self::File(FileNode { data, .. }) => data.len() as u64,
            Self::Directory(_) => 0,
        }
    }

    pub(crate) fn parent(&self) -> Option<Handle> {
        match self {
            Self::File(FileNode { parent, .. }) => Some(*parent),
            Self::Directory(DirectoryNode { parent, .. }) => *parent,
        }
    }

    pub(crate) fn info(&self) -> NodeInfo {
        NodeInfo {
            handle: self.handle(),
            name: self.name().to_owned(),
            kind: self.kind(),
            size: self.size(),
            parent: self.parent(),
        }
    }

    pub(crate) fn as_directory(&self) -> Result<&DirectoryNode> {
        match self {
            Self::Directory(dir) => Ok(dir),
            Self::File(_) => Err(FsError::NotADirectory),
        }
    }

    pub(crate) fn as_directory_mut(&mut self) -> Result<&mut DirectoryNode> {
        match self {
            Self::Directory(dir) => Ok(dir),
            Self::File(_) => Err(FsError::NotADirectory),
        }
    }
}

impl DirectoryNode {
    pub(crate) fn new(
        handle: Handle,
        name: String,
        parent: Option<Handle>,
        max_children: usize,
    ) -> Self {
        Self {
            handle,
            name,
            parent,
            children: vec![None; max_children].into_boxed_slice(),
        }
    }

    /// Occupied child slots, in slot order.
    pub(crate) fn children(&self) -> impl Iterator<Item = Handle> + '_ {
        self.children.iter().flatten().copied()
    }

    /// Put `child` in the first free slot of the children table and return
    /// the slot position.
    pub(crate) fn link(&mut self, child: Handle) -> Result<usize> {
        let position = self
            .children
            .iter()
            .position(Option::is_none)
            .ok_or(FsError::LinkSlotExhausted)?;
        self.children[position] = Some(child);

        Ok(position)
    }
}

/// Check a node name against the configured bound.
pub(crate) fn validate_name(name: &str, max_len: usize) -> Result<()> {
    if name.is_empty() {
        return Err(FsError::InvalidName);
    }
    if name.chars().count() > max_len {
        return Err(FsError::NameTooLong { max: max_len });
    }

    Ok(())
}
