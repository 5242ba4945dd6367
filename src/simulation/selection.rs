//! Selection bookkeeping for sandbox objects
//!
//! `SelectionSet` is an order-preserving set of object ids, owned by
//! the host UI. The engine touches it in exactly one place: a culled
//! object is dropped from the selection so stale ids never outlive
//! their object.

use super::states::ObjectId;

/// Order-preserving set of selected object ids
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    ids: Vec<ObjectId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `id` to the selection, keeping earlier entries in place
    /// Returns false when it was already selected
    pub fn add(&mut self, id: ObjectId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Remove `id` from the selection
    /// Returns true when it was present
    pub fn remove(&mut self, id: ObjectId) -> bool {
        match self.ids.iter().position(|&s| s == id) {
            Some(i) => {
                self.ids.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.ids.contains(&id)
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected ids in selection order
    pub fn iter(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.ids.iter().copied()
    }
}
