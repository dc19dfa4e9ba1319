use std::fmt;

use indexmap::IndexMap;
use log::debug;

use crate::model::ContextTag;

/// Host callback receiving the full tag list after every change
pub type TagListener = Box<dyn FnMut(&[ContextTag])>;

/// Committed tags, unique by id, kept in insertion order
#[derive(Default)]
pub struct ContextTagSet {
    tags: IndexMap<String, ContextTag>,
    listener: Option<TagListener>,
}

impl fmt::Debug for ContextTagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContextTagSet")
            .field("tags", &self.tags)
            .field("listener", &self.listener.is_some())
            .finish()
    }
}

impl ContextTagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the change listener, replacing any previous one
    pub fn set_listener(&mut self, listener: TagListener) {
        self.listener = Some(listener);
    }

    /// Add a tag. Returns false (and notifies nobody) if the id is already present.
    pub fn insert(&mut self, tag: ContextTag) -> bool {
        if self.tags.contains_key(&tag.id) {
            debug!("tag {} already present", tag.id);
            return false;
        }
        debug!("tag added: {} ({})", tag.id, tag.kind);
        self.tags.insert(tag.id.clone(), tag);
        self.notify();
        true
    }

    /// Remove a tag by id, keeping the order of the rest. Absent ids are a no-op.
    pub fn remove(&mut self, id: &str) -> bool {
        if self.tags.shift_remove(id).is_none() {
            return false;
        }
        debug!("tag removed: {}", id);
        self.notify();
        true
    }

    /// Remove the most recently added tag
    pub fn pop(&mut self) -> Option<ContextTag> {
        let (_, tag) = self.tags.pop()?;
        debug!("tag removed: {}", tag.id);
        self.notify();
        Some(tag)
    }

    /// Drop every tag. Always notifies, even if the set was already empty.
    pub fn clear(&mut self) {
        if !self.tags.is_empty() {
            debug!("cleared {} tags", self.tags.len());
        }
        self.tags.clear();
        self.notify();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.tags.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ContextTag> {
        self.tags.values()
    }

    /// Snapshot of the tags in insertion order
    pub fn to_vec(&self) -> Vec<ContextTag> {
        self.tags.values().cloned().collect()
    }

    fn notify(&mut self) {
        if self.listener.is_none() {
            return;
        }
        let snapshot = self.to_vec();
        if let Some(listener) = &mut self.listener {
            listener(&snapshot);
        }
    }
}
