// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde::Serialize;

use crate::naming::ToPlural;

/// The standard operations generated for every modeled type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OperationKind {
    Get,
    List,
    Create,
    Update,
    Delete,
}

impl OperationKind {
    pub const ALL: [OperationKind; 5] = [
        OperationKind::Get,
        OperationKind::List,
        OperationKind::Create,
        OperationKind::Update,
        OperationKind::Delete,
    ];

    /// The schema type the operation field is attached to.
    pub fn parent_type_name(&self) -> &'static str {
        match self {
            OperationKind::Get | OperationKind::List => "Query",
            OperationKind::Create | OperationKind::Update | OperationKind::Delete => "Mutation",
        }
    }

    pub fn field_name(&self, type_name: &str) -> String {
        match self {
            OperationKind::Get => format!("get{type_name}"),
            OperationKind::List => format!("list{}", type_name.to_plural()),
            OperationKind::Create => format!("create{type_name}"),
            OperationKind::Update => format!("update{type_name}"),
            OperationKind::Delete => format!("delete{type_name}"),
        }
    }

    /// The documented deterministic id under which the upstream generator
    /// registers the operation's resolver.
    pub fn resolver_id(&self, type_name: &str) -> String {
        let verb = match self {
            OperationKind::Get => "Get",
            OperationKind::List => "List",
            OperationKind::Create => "Create",
            OperationKind::Update => "Update",
            OperationKind::Delete => "Delete",
        };
        format!("{verb}{type_name}Resolver")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names() {
        assert_eq!("getTodo", OperationKind::Get.field_name("Todo"));
        assert_eq!("listTodos", OperationKind::List.field_name("Todo"));
        assert_eq!("createTodo", OperationKind::Create.field_name("Todo"));
    }

    #[test]
    fn resolver_ids() {
        assert_eq!("GetTodoResolver", OperationKind::Get.resolver_id("Todo"));
        assert_eq!(
            "DeleteTodoResolver",
            OperationKind::Delete.resolver_id("Todo")
        );
    }

    #[test]
    fn parent_types() {
        assert_eq!("Query", OperationKind::List.parent_type_name());
        assert_eq!("Mutation", OperationKind::Update.parent_type_name());
    }
}
