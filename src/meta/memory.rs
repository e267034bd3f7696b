//! In-memory type metadata provider
//!
//! The reference implementation of [`TypeProvider`]: a plain map from
//! qualified name to [`ClassMeta`], with the subtype relation computed by a
//! breadth-first walk over declared supertypes.

use std::collections::HashMap;

use super::provider::{ClassMeta, TypeProvider};

/// Metadata registry backed by a `HashMap`.
#[derive(Debug, Default)]
pub struct MemoryTypeProvider {
    classes: HashMap<String, ClassMeta>,
}

impl MemoryTypeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register metadata for one type, replacing any previous entry with the
    /// same name.
    pub fn insert(&mut self, class: ClassMeta) -> &mut Self {
        self.classes.insert(class.name.clone(), class);
        self
    }
}

impl TypeProvider for MemoryTypeProvider {
    fn class(&self, name: &str) -> Option<&ClassMeta> {
        self.classes.get(name)
    }

    fn is_subtype(&self, candidate: &str, target: &str) -> bool {
        if candidate == target {
            return true;
        }
        // BFS over declared supertypes; metadata graphs are small.
        let mut queue: Vec<&str> = vec![candidate];
        let mut seen: Vec<&str> = Vec::new();
        while let Some(current) = queue.pop() {
            if seen.contains(&current) {
                continue;
            }
            seen.push(current);
            let Some(meta) = self.classes.get(current) else {
                continue;
            };
            for supertype in &meta.supertypes {
                if supertype == target {
                    return true;
                }
                queue.push(supertype);
            }
        }
        false
    }
}
