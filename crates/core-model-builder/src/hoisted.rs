// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Deferred (hoisted) template content.
//!
//! The upstream generator defers some request-template content (identifier
//! seeding, timestamp injection) to its own finalize phase, registering a thunk
//! here keyed by the owning resolver's id. A builder that rewrites such a
//! resolver earlier must pull the content through [`HoistedContentRegistry::materialize`]
//! before the finalize phase runs; content can be produced at most once.

use std::fmt::{Debug, Formatter};

use indexmap::IndexMap;

use crate::error::ModelBuildingError;

type HoistedThunk = Box<dyn FnOnce() -> String>;

enum HoistedContent {
    Pending(HoistedThunk),
    Consumed,
}

impl Debug for HoistedContent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            HoistedContent::Pending(_) => f.write_str("Pending"),
            HoistedContent::Consumed => f.write_str("Consumed"),
        }
    }
}

#[derive(Debug, Default)]
pub struct HoistedContentRegistry {
    entries: IndexMap<String, HoistedContent>,
}

impl HoistedContentRegistry {
    /// Register a content generator for a resolver id. Registering twice for
    /// the same id is a contract violation.
    pub fn register(
        &mut self,
        resolver_id: impl Into<String>,
        thunk: impl FnOnce() -> String + 'static,
    ) -> Result<(), ModelBuildingError> {
        let resolver_id = resolver_id.into();
        if self.entries.contains_key(&resolver_id) {
            return Err(ModelBuildingError::InternalInvariant(format!(
                "Hoisted content registered twice for resolver '{resolver_id}'"
            )));
        }
        self.entries
            .insert(resolver_id, HoistedContent::Pending(Box::new(thunk)));
        Ok(())
    }

    /// Produce the content for a resolver id, if a pending generator exists.
    /// The entry flips to `Consumed`; a second call returns `None`.
    pub fn materialize(&mut self, resolver_id: &str) -> Option<String> {
        let entry = self.entries.get_mut(resolver_id)?;
        match std::mem::replace(entry, HoistedContent::Consumed) {
            HoistedContent::Pending(thunk) => Some(thunk()),
            HoistedContent::Consumed => None,
        }
    }

    /// Drop the entry entirely, consumed or not.
    pub fn remove(&mut self, resolver_id: &str) {
        self.entries.shift_remove(resolver_id);
    }

    pub fn contains(&self, resolver_id: &str) -> bool {
        self.entries.contains_key(resolver_id)
    }

    /// Ids with still-pending generators, in registration order.
    pub fn pending_ids(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|(_, content)| matches!(content, HoistedContent::Pending(_)))
            .map(|(id, _)| id.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn materialize_at_most_once() {
        let mut registry = HoistedContentRegistry::default();
        registry
            .register("CreateTodoResolver", || "$util.autoId()".to_string())
            .unwrap();

        assert_eq!(
            Some("$util.autoId()".to_string()),
            registry.materialize("CreateTodoResolver")
        );
        assert_eq!(None, registry.materialize("CreateTodoResolver"));
        // Consumed entries are no longer pending
        assert!(registry.pending_ids().is_empty());
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut registry = HoistedContentRegistry::default();
        registry.register("id", || String::new()).unwrap();
        assert!(registry.register("id", || String::new()).is_err());
    }

    #[test]
    fn remove_deletes_the_entry() {
        let mut registry = HoistedContentRegistry::default();
        registry.register("id", || String::new()).unwrap();
        registry.remove("id");
        assert!(!registry.contains("id"));
        assert_eq!(None, registry.materialize("id"));
    }
}
