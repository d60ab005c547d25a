// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! The mutable resource graph threaded through one transform run.
//!
//! Insertion order is preserved (and serialized) so that repeated runs over the
//! same schema produce byte-identical artifacts.

use indexmap::IndexMap;
use serde::Serialize;

use crate::resource::{Resource, ResolverResource};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DependencyEdge {
    pub dependent: String,
    pub dependency: String,
}

#[derive(Debug, Default, Clone, Serialize)]
pub struct ResourceGraph {
    resources: IndexMap<String, Resource>,
    dependencies: Vec<DependencyEdge>,
}

impl ResourceGraph {
    pub fn insert(&mut self, id: impl Into<String>, resource: Resource) {
        self.resources.insert(id.into(), resource);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.resources.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&Resource> {
        self.resources.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Resource> {
        self.resources.get_mut(id)
    }

    /// Remove a resource along with every dependency edge that references it,
    /// so no dangling edges survive.
    pub fn remove(&mut self, id: &str) -> Option<Resource> {
        let removed = self.resources.shift_remove(id);
        if removed.is_some() {
            self.dependencies
                .retain(|edge| edge.dependent != id && edge.dependency != id);
        }
        removed
    }

    pub fn resolver(&self, id: &str) -> Option<&ResolverResource> {
        match self.get(id)? {
            Resource::Resolver(resolver) => Some(resolver),
            _ => None,
        }
    }

    pub fn resolver_mut(&mut self, id: &str) -> Option<&mut ResolverResource> {
        match self.get_mut(id)? {
            Resource::Resolver(resolver) => Some(resolver),
            _ => None,
        }
    }

    pub fn add_dependency(&mut self, dependent: impl Into<String>, dependency: impl Into<String>) {
        self.dependencies.push(DependencyEdge {
            dependent: dependent.into(),
            dependency: dependency.into(),
        });
    }

    pub fn depends_on(&self, dependent: &str, dependency: &str) -> bool {
        self.dependencies
            .iter()
            .any(|edge| edge.dependent == dependent && edge.dependency == dependency)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.resources.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Resource)> {
        self.resources.iter().map(|(id, r)| (id.as_str(), r))
    }

    pub fn dependencies(&self) -> &[DependencyEdge] {
        &self.dependencies
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::DeployExpr;
    use crate::resource::{DataSourceResource, RoleResource};

    fn role() -> Resource {
        Resource::Role(RoleResource {
            trust_principal: "appsync.amazonaws.com".to_string(),
            actions: vec!["lambda:InvokeFunction".to_string()],
            target: DeployExpr::lit("arn"),
        })
    }

    #[test]
    fn remove_drops_touching_edges() {
        let mut graph = ResourceGraph::default();
        graph.insert("Role", role());
        graph.insert(
            "Source",
            Resource::DataSource(DataSourceResource {
                role_id: "Role".to_string(),
                target: DeployExpr::lit("arn"),
            }),
        );
        graph.add_dependency("Source", "Role");
        assert!(graph.depends_on("Source", "Role"));

        graph.remove("Source");
        assert!(!graph.contains("Source"));
        assert!(graph.dependencies().is_empty());
        assert!(graph.contains("Role"));
    }
}
