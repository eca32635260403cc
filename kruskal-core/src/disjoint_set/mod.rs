//! Union-find (disjoint set union) forest used by the Kruskal stepper.
//!
//! Node ids are mapped to compact slots on registration, so memory follows
//! the number of ids rather than their magnitude. Entries store their parent
//! as a slot index and the forest can be snapshotted with a plain clone.
//! Roots are resolved by following parent links without compression; union
//! by size keeps every path at most `log2(n)` links long.

use std::collections::{HashMap, hash_map};

use crate::{
    edge::NodeId,
    error::{KruskalError, Result},
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Entry {
    id: NodeId,
    parent: usize,
    size: usize,
}

/// Result of a [`DisjointSetForest::union`] call.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum UnionOutcome {
    /// Both ids already shared a root; nothing changed.
    AlreadyJoined {
        /// The shared root.
        root: NodeId,
    },
    /// Two components were merged.
    Merged {
        /// The surviving root.
        root: NodeId,
        /// The root that was attached beneath `root`.
        absorbed: NodeId,
    },
}

impl UnionOutcome {
    /// Returns the root of the (possibly merged) component.
    #[must_use]
    pub const fn root(self) -> NodeId {
        match self {
            Self::AlreadyJoined { root } | Self::Merged { root, .. } => root,
        }
    }

    /// Returns `true` when two components were merged.
    #[must_use]
    pub const fn merged(self) -> bool {
        matches!(self, Self::Merged { .. })
    }
}

/// Disjoint-set forest with union by size.
///
/// # Examples
/// ```
/// use kruskal_core::DisjointSetForest;
///
/// let mut forest = DisjointSetForest::new(0..4);
/// forest.union(0, 1)?;
/// forest.union(2, 3)?;
/// assert_eq!(forest.component_count(), 2);
/// assert!(forest.same_component(1, 0)?);
/// assert!(!forest.same_component(1, 2)?);
/// # Ok::<(), kruskal_core::KruskalError>(())
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DisjointSetForest {
    slots: HashMap<NodeId, usize>,
    entries: Vec<Entry>,
    components: usize,
}

impl DisjointSetForest {
    /// Builds a forest with one singleton component per id.
    #[must_use]
    pub fn new(node_ids: impl IntoIterator<Item = NodeId>) -> Self {
        let mut forest = Self::default();
        forest.initialize(node_ids);
        forest
    }

    /// Discards any previous state and registers `node_ids`, each as its own
    /// root with size 1. Duplicate ids are registered once. Any `usize` is a
    /// valid id.
    pub fn initialize(&mut self, node_ids: impl IntoIterator<Item = NodeId>) {
        self.slots.clear();
        self.entries.clear();
        for id in node_ids {
            let slot = self.entries.len();
            if let hash_map::Entry::Vacant(vacant) = self.slots.entry(id) {
                vacant.insert(slot);
                self.entries.push(Entry {
                    id,
                    parent: slot,
                    size: 1,
                });
            }
        }
        self.components = self.entries.len();
    }

    /// Returns the number of registered nodes.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.entries.len() }

    /// Returns `true` when no nodes are registered.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Returns the number of disjoint components.
    #[must_use]
    #[rustfmt::skip]
    pub const fn component_count(&self) -> usize { self.components }

    /// Returns `true` if `id` was registered.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.slots.contains_key(&id)
    }

    /// Resolves the root of the component containing `id`.
    ///
    /// # Errors
    /// Returns [`KruskalError::UnknownNode`] if `id` was never registered.
    pub fn find_root(&self, id: NodeId) -> Result<NodeId> {
        let (root, _) = self.walk(id)?;
        Ok(self.entry(root, id)?.id)
    }

    /// Returns `true` when `left` and `right` share a root.
    ///
    /// # Errors
    /// Returns [`KruskalError::UnknownNode`] for unregistered ids.
    pub fn same_component(&self, left: NodeId, right: NodeId) -> Result<bool> {
        Ok(self.walk(left)?.0 == self.walk(right)?.0)
    }

    /// Returns the size of the component containing `id`.
    ///
    /// # Errors
    /// Returns [`KruskalError::UnknownNode`] if `id` was never registered.
    pub fn size_of(&self, id: NodeId) -> Result<usize> {
        let (root, _) = self.walk(id)?;
        Ok(self.entry(root, id)?.size)
    }

    /// Merges the components containing `left` and `right`.
    ///
    /// The root of the strictly smaller component is attached beneath the
    /// other root. On equal sizes the root of `right` goes beneath the root of
    /// `left`.
    ///
    /// # Errors
    /// Returns [`KruskalError::UnknownNode`] for unregistered ids.
    pub fn union(&mut self, left: NodeId, right: NodeId) -> Result<UnionOutcome> {
        let (left_root, _) = self.walk(left)?;
        let (right_root, _) = self.walk(right)?;
        let left_entry = self.entry(left_root, left)?;
        if left_root == right_root {
            return Ok(UnionOutcome::AlreadyJoined { root: left_entry.id });
        }
        let right_entry = self.entry(right_root, right)?;

        let (root, absorbed, root_id, absorbed_id) = if left_entry.size < right_entry.size {
            (right_root, left_root, right_entry.id, left_entry.id)
        } else {
            (left_root, right_root, left_entry.id, right_entry.id)
        };

        self.entry_mut(absorbed, absorbed_id)?.parent = root;
        self.entry_mut(root, root_id)?.size = left_entry.size.saturating_add(right_entry.size);
        self.components = self.components.saturating_sub(1);

        Ok(UnionOutcome::Merged {
            root: root_id,
            absorbed: absorbed_id,
        })
    }

    /// Returns the number of parent links between `id` and its root.
    ///
    /// # Errors
    /// Returns [`KruskalError::UnknownNode`] if `id` was never registered.
    pub fn depth(&self, id: NodeId) -> Result<usize> {
        Ok(self.walk(id)?.1)
    }

    /// Follows parent links from `id` and returns the root slot and the
    /// number of links taken.
    fn walk(&self, id: NodeId) -> Result<(usize, usize)> {
        let mut slot = self
            .slots
            .get(&id)
            .copied()
            .ok_or(KruskalError::UnknownNode { node: id })?;
        let mut depth = 0_usize;
        loop {
            let parent = self.entry(slot, id)?.parent;
            if parent == slot {
                return Ok((slot, depth));
            }
            slot = parent;
            depth = depth.saturating_add(1);
        }
    }

    fn entry(&self, slot: usize, id: NodeId) -> Result<Entry> {
        self.entries
            .get(slot)
            .copied()
            .ok_or(KruskalError::UnknownNode { node: id })
    }

    fn entry_mut(&mut self, slot: usize, id: NodeId) -> Result<&mut Entry> {
        self.entries
            .get_mut(slot)
            .ok_or(KruskalError::UnknownNode { node: id })
    }
}
