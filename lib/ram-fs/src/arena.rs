//! The fixed-capacity node storage.

use crate::node::{Handle, Node, NodeInfo};
use crate::{FsError, Result};
use slab::Slab;
use tracing::{trace, warn};

/// State of a single arena slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SlotState {
    Free,
    Occupied(NodeInfo),
}

/// Preallocated storage for every node of a filesystem.
///
/// Slots are claimed lowest index first. The only way to give a slot back
/// is [`NodeArena::rollback`], which undoes the most recent claim, so the
/// slab's free list never holds anything but the lowest free index.
#[derive(Debug)]
pub(crate) struct NodeArena {
    slots: Slab<Node>,
    generations: Vec<u32>,
    capacity: usize,
}

impl NodeArena {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Slab::with_capacity(capacity),
            generations: vec![0; capacity],
            capacity,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of occupied slots.
    pub(crate) fn occupancy(&self) -> usize {
        self.slots.len()
    }

    /// Claim the first free slot and fill it with the node built by `build`,
    /// which receives the handle the node will live under.
    pub(crate) fn allocate(&mut self, build: impl FnOnce(Handle) -> Node) -> Result<Handle> {
        if self.slots.len() >= self.capacity {
            warn!(capacity = self.capacity, "node arena exhausted");
            return Err(FsError::PoolExhausted);
        }

        let entry = self.slots.vacant_entry();
        let index = entry.key();
        let handle = Handle::new(index, self.generations[index]);
        let node = build(handle);

        debug_assert_eq!(
            node.handle(),
            handle,
            "a node must be stored under the handle it was built with",
        );
        entry.insert(node);
        trace!(index, generation = handle.generation(), "slot claimed");

        Ok(handle)
    }

    /// Give back a slot claimed by the last allocation. Outstanding handles
    /// to it become stale.
    pub(crate) fn rollback(&mut self, handle: Handle) -> Option<Node> {
        self.get(handle)?;

        let node = self.slots.remove(handle.index());
        let generation = &mut self.generations[handle.index()];
        *generation = generation.wrapping_add(1);
        trace!(index = handle.index(), "slot released by rollback");

        Some(node)
    }

    pub(crate) fn get(&self, handle: Handle) -> Option<&Node> {
        self.slots
            .get(handle.index())
            .filter(|node| node.handle() == handle)
    }

    pub(crate) fn get_mut(&mut self, handle: Handle) -> Option<&mut Node> {
        self.slots
            .get_mut(handle.index())
            .filter(|node| node.handle() == handle)
    }

    pub(crate) fn state(&self, index: usize) -> Option<SlotState> {
        if index >= self.capacity {
            return None;
        }

        Some(match self.slots.get(index) {
            Some(node) => SlotState::Occupied(node.info()),
            None => SlotState::Free,
        })
    }
}
