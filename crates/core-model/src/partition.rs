// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Deployment partitions.
//!
//! Each resource is assigned to a deployment unit. Resources created by
//! different builders go into different partitions so that no circular
//! dependency can arise between the units at provisioning time.

use indexmap::IndexMap;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Partition(String);

impl Partition {
    pub fn new(name: impl Into<String>) -> Self {
        Partition(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Default, Clone, Serialize)]
pub struct PartitionMap {
    assignments: IndexMap<String, Partition>,
}

impl PartitionMap {
    pub fn assign(&mut self, resource_id: impl Into<String>, partition: Partition) {
        self.assignments.insert(resource_id.into(), partition);
    }

    pub fn remove(&mut self, resource_id: &str) -> Option<Partition> {
        self.assignments.shift_remove(resource_id)
    }

    pub fn partition_of(&self, resource_id: &str) -> Option<&Partition> {
        self.assignments.get(resource_id)
    }

    pub fn resources_in<'a>(&'a self, partition_name: &'a str) -> impl Iterator<Item = &'a str> {
        self.assignments
            .iter()
            .filter(move |(_, partition)| partition.name() == partition_name)
            .map(|(id, _)| id.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Partition)> {
        self.assignments.iter().map(|(id, p)| (id.as_str(), p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assignment_lifecycle() {
        let mut partitions = PartitionMap::default();
        partitions.assign("GetTodoResolver", Partition::new("Todo"));
        partitions.assign("AuditlogLambdaRole", Partition::new("FunctionDirectiveStack"));

        assert_eq!(
            Some("Todo"),
            partitions.partition_of("GetTodoResolver").map(Partition::name)
        );

        assert_eq!(
            vec!["AuditlogLambdaRole"],
            partitions
                .resources_in("FunctionDirectiveStack")
                .collect::<Vec<_>>()
        );

        partitions.remove("GetTodoResolver");
        assert!(partitions.partition_of("GetTodoResolver").is_none());
    }
}
