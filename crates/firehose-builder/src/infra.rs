// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Shared-infrastructure deduplication.
//!
//! Every annotated type that resolves to the same `(name, region)` reuses one
//! role, one data source, and one invocation function. The cache lives for one
//! transform run and is consulted before every creation; existing resources
//! are returned as-is, never mutated.

use indexmap::IndexMap;
use tracing::debug;

use core_model::{
    expr::DeployExpr,
    naming::{function_data_source_id, function_role_id, invocation_function_id},
    partition::Partition,
    resource::{DataSourceResource, FunctionResource, Resource, RoleResource},
};
use core_model_builder::{building::SystemContextBuilding, error::ModelBuildingError};

use crate::{FUNCTION_DIRECTIVE_PARTITION, arn, validate::FunctionReference};

const INVOKE_ACTION: &str = "lambda:InvokeFunction";
const API_SERVICE_PRINCIPAL: &str = "appsync.amazonaws.com";

/// The request template of the shared invocation function. The payload field
/// set and ordering are a wire contract; functions are written against it.
const INVOCATION_REQUEST_TEMPLATE: &str = r#"{
  "version": "2018-05-29",
  "operation": "Invoke",
  "payload": {
    "typeName": $util.toJson($ctx.stash.get("typeName")),
    "fieldName": $util.toJson($ctx.stash.get("fieldName")),
    "arguments": $util.toJson($ctx.arguments),
    "identity": $util.toJson($ctx.identity),
    "source": $util.toJson($ctx.source),
    "request": $util.toJson($ctx.request),
    "prev": $util.toJson($ctx.prev.result)
  }
}"#;

/// On a failed invocation, surface the function's own message and
/// classification and abort the remaining stages; otherwise forward the
/// result unchanged.
const INVOCATION_RESPONSE_TEMPLATE: &str = r#"#if($ctx.error)
  $util.error($ctx.error.message, $ctx.error.type)
#end
$util.toJson($ctx.result)"#;

/// Logical ids of one deduplicated infrastructure triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfraIds {
    pub role_id: String,
    pub data_source_id: String,
    pub function_id: String,
}

/// Per-run deduplication cache, keyed by `(name, region)`. Constructed fresh
/// for each run and passed by reference; never global state.
#[derive(Debug, Default)]
pub struct SharedInfra {
    cache: IndexMap<(String, Option<String>), InfraIds>,
}

impl SharedInfra {
    /// Ensure the role, data source, and invocation function for a reference
    /// exist, creating each at most once per run, in dependency order.
    ///
    /// The logical-id projection folds case and punctuation, so two distinct
    /// references can land on the same ids; a cache miss that finds them
    /// already in the graph means they are bound to a different reference,
    /// and reusing them would silently invoke the wrong function.
    pub fn ensure(
        &mut self,
        reference: &FunctionReference,
        building: &mut SystemContextBuilding,
    ) -> Result<InfraIds, ModelBuildingError> {
        if let Some(ids) = self.cache.get(&reference.dedup_key()) {
            debug!(name = %reference.name, "Reusing shared function infrastructure");
            return Ok(ids.clone());
        }

        let ids = InfraIds {
            role_id: function_role_id(&reference.name, reference.region.as_deref()),
            data_source_id: function_data_source_id(&reference.name, reference.region.as_deref()),
            function_id: invocation_function_id(&reference.name, reference.region.as_deref()),
        };

        for id in [&ids.role_id, &ids.data_source_id, &ids.function_id] {
            if building.graph.contains(id) {
                return Err(ModelBuildingError::InternalInvariant(format!(
                    "Function reference '{}' maps to logical id '{}', which is already bound to a different reference",
                    reference.name, id
                )));
            }
        }

        let target = arn::function_target(&reference.name, reference.region.as_deref());

        create_role(&ids.role_id, &target, building);
        create_data_source(&ids.data_source_id, &ids.role_id, &target, building);
        create_invocation_function(&ids.function_id, &ids.data_source_id, building);

        self.cache.insert(reference.dedup_key(), ids.clone());
        Ok(ids)
    }
}

fn create_role(id: &str, target: &DeployExpr, building: &mut SystemContextBuilding) {
    building.graph.insert(
        id,
        Resource::Role(RoleResource {
            trust_principal: API_SERVICE_PRINCIPAL.to_string(),
            actions: vec![INVOKE_ACTION.to_string()],
            target: target.clone(),
        }),
    );
    building
        .partitions
        .assign(id, Partition::new(FUNCTION_DIRECTIVE_PARTITION));
}

fn create_data_source(
    id: &str,
    role_id: &str,
    target: &DeployExpr,
    building: &mut SystemContextBuilding,
) {
    building.graph.insert(
        id,
        Resource::DataSource(DataSourceResource {
            role_id: role_id.to_string(),
            target: target.clone(),
        }),
    );
    building.graph.add_dependency(id, role_id);
    building
        .partitions
        .assign(id, Partition::new(FUNCTION_DIRECTIVE_PARTITION));
}

fn create_invocation_function(id: &str, data_source_id: &str, building: &mut SystemContextBuilding) {
    building.graph.insert(
        id,
        Resource::Function(FunctionResource {
            data_source_id: data_source_id.to_string(),
            request_template: INVOCATION_REQUEST_TEMPLATE.to_string(),
            response_template: INVOCATION_RESPONSE_TEMPLATE.to_string(),
        }),
    );
    building.graph.add_dependency(id, data_source_id);
    building
        .partitions
        .assign(id, Partition::new(FUNCTION_DIRECTIVE_PARTITION));
}
