//! Insertion-ordered, ID-keyed record collection.

use std::collections::HashMap;

/// Records keyed by generated UUID, iterated in insertion order.
#[derive(Debug)]
pub struct Collection<T> {
    records: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T> Collection<T> {
    /// Generate a fresh ID, build the record from it and store it.
    pub fn insert_with(&mut self, build: impl FnOnce(String) -> T) -> &T {
        let mut id = uuid::Uuid::new_v4().to_string();
        while self.index.contains_key(&id) {
            id = uuid::Uuid::new_v4().to_string();
        }

        let position = self.records.len();
        self.index.insert(id.clone(), position);
        self.records.push(build(id));
        &self.records[position]
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.index.get(id).map(|&position| &self.records[position])
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
