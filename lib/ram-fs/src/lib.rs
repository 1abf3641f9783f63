//! A volatile, fixed-capacity filesystem that lives entirely in memory.
//!
//! Nodes are stored in a fixed-capacity arena and linked into a directory tree by
//! [`Handle`]s. A [`FileSystem`] is a cheap, clonable view over that tree;
//! each [`Session`] carries its own current directory and exposes the
//! `DIR`/`COPY`/`CD` style operations on top of it.

#![deny(unused_imports, unused_variables, unused_mut, unreachable_patterns)]

use thiserror::Error;

mod arena;
mod bootstrap;
mod config;
mod copy;
mod filesystem;
mod lister;
mod lookup;
mod navigate;
mod node;
mod session;

pub use arena::SlotState;
pub use bootstrap::{DEMO_DIRECTORY, DEMO_FILE, DEMO_FILE_SIZE, ROOT_NAME};
pub use config::{FsConfig, MAX_CAPACITY, MatchMode};
pub use filesystem::FileSystem;
pub use lister::{DirEntry, Listing};
pub use node::{Handle, NodeInfo, NodeKind};
pub use session::Session;

pub type Result<T> = std::result::Result<T, FsError>;

/// Error type for external users
#[derive(Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum FsError {
    /// The arguments of an operation did not have the expected shape.
    #[error("usage: {0}")]
    Usage(&'static str),
    /// The file to copy does not exist, or names a directory.
    #[error("source file not found or is a directory")]
    SourceNotFound,
    /// The target of a directory change does not exist, or names a file.
    #[error("directory not found")]
    DirectoryNotFound,
    /// Expected a directory but found a file
    #[error("not a directory")]
    NotADirectory,
    /// Expected a file but found a directory
    #[error("not a file")]
    NotAFile,
    /// Every slot of the node arena is in use.
    #[error("RAM disk full")]
    PoolExhausted,
    /// The children table of the target directory has no free slot left.
    #[error("directory table full")]
    LinkSlotExhausted,
    /// A name exceeded the configured bound.
    #[error("name too long (at most {max} characters)")]
    NameTooLong { max: usize },
    /// A name was empty.
    #[error("invalid name")]
    InvalidName,
    /// File content exceeded the per-file capacity.
    #[error("file too large (at most {max} bytes)")]
    FileTooLarge { max: usize },
    /// The handle does not designate a live node (wrong index or stale generation).
    #[error("invalid node handle")]
    InvalidHandle,
    /// The configuration cannot describe a usable filesystem.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
    /// The filesystem lock was poisoned by a panicking writer.
    #[error("failed to acquire the filesystem lock")]
    Lock,
}
