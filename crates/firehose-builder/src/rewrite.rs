// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! The resolver-pipeline rewrite.
//!
//! For one operation field of an annotated type: wrap the original single-stage
//! resolver in a pass-through stage function, pull any deferred template
//! content the upstream generator registered for it, delete the original
//! definition entirely, and install a two-stage pipeline (invocation first,
//! original logic second) under the original resolver id.

use tracing::debug;

use core_model::{
    naming::wrapper_function_id,
    operation::OperationKind,
    partition::Partition,
    resource::{FunctionResource, Resource, ResolverKind, ResolverResource},
};
use core_model_builder::{building::SystemContextBuilding, error::ModelBuildingError};

use crate::{FUNCTION_DIRECTIVE_PARTITION, infra::InfraIds};

pub fn rewrite_operation(
    type_name: &str,
    kind: OperationKind,
    infra: &InfraIds,
    building: &mut SystemContextBuilding,
) -> Result<(), ModelBuildingError> {
    let resolver_id = kind.resolver_id(type_name);
    debug!(%resolver_id, "Rewriting resolver into a pipeline");

    // The upstream generator must have produced the definition for every
    // standard operation of a modeled type; its absence is a collaborator
    // defect, not a skippable condition.
    let original = building
        .graph
        .resolver(&resolver_id)
        .cloned()
        .ok_or_else(|| {
            ModelBuildingError::InternalInvariant(format!(
                "Expected resolver '{resolver_id}' to have been generated for type '{type_name}'"
            ))
        })?;
    let data_source_id = original
        .unit_data_source_id()
        .ok_or_else(|| {
            ModelBuildingError::InternalInvariant(format!(
                "Resolver '{resolver_id}' has already been rewritten into a pipeline"
            ))
        })?
        .to_string();

    // Pull deferred content now: the finalize phase that would normally
    // materialize it runs after this builder, against a resolver id that is
    // about to disappear.
    let request_template = match building.hoisted.materialize(&resolver_id) {
        Some(content) => format!("{content}\n{}", original.request_template),
        None => original.request_template.clone(),
    };

    // Remove the original definition completely: graph entry, partition
    // membership, and the consumed registry entry.
    building.graph.remove(&resolver_id);
    building.partitions.remove(&resolver_id);
    building.hoisted.remove(&resolver_id);

    let wrapper_id = wrapper_function_id(&resolver_id);
    building.graph.insert(
        &wrapper_id,
        Resource::Function(FunctionResource {
            data_source_id: data_source_id.clone(),
            request_template,
            response_template: original.response_template.clone(),
        }),
    );

    building.graph.insert(
        &resolver_id,
        Resource::Resolver(ResolverResource {
            type_name: original.type_name.clone(),
            field_name: original.field_name.clone(),
            kind: ResolverKind::Pipeline {
                function_ids: vec![infra.function_id.clone(), wrapper_id.clone()],
            },
            request_template: pipeline_request_template(&original.type_name, &original.field_name),
            response_template: "$util.toJson($ctx.prev.result)".to_string(),
        }),
    );

    building
        .partitions
        .assign(&wrapper_id, Partition::new(FUNCTION_DIRECTIVE_PARTITION));
    building
        .partitions
        .assign(&resolver_id, Partition::new(FUNCTION_DIRECTIVE_PARTITION));

    building.graph.add_dependency(&wrapper_id, &data_source_id);
    building.graph.add_dependency(&wrapper_id, &infra.function_id);
    building.graph.add_dependency(&resolver_id, &wrapper_id);

    Ok(())
}

/// Stash the compile-time-constant type and field names for the invocation
/// stage's payload, then start the pipeline.
fn pipeline_request_template(type_name: &str, field_name: &str) -> String {
    format!(
        "$util.qr($ctx.stash.put(\"typeName\", \"{type_name}\"))\n$util.qr($ctx.stash.put(\"fieldName\", \"{field_name}\"))\n{{}}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_model::expr::DeployExpr;
    use core_model::resource::DataSourceResource;

    fn seeded_building(register_hoisted: bool) -> (SystemContextBuilding, InfraIds) {
        let mut building = SystemContextBuilding::default();

        building.graph.insert(
            "TodoTableDataSource",
            Resource::DataSource(DataSourceResource {
                role_id: "TodoTableRole".to_string(),
                target: DeployExpr::lit("table"),
            }),
        );

        let kind = OperationKind::Create;
        let resolver_id = kind.resolver_id("Todo");
        building.graph.insert(
            &resolver_id,
            Resource::Resolver(ResolverResource {
                type_name: "Mutation".to_string(),
                field_name: "createTodo".to_string(),
                kind: ResolverKind::Unit {
                    data_source_id: "TodoTableDataSource".to_string(),
                },
                request_template: "{ \"operation\": \"PutItem\" }".to_string(),
                response_template: "$util.toJson($ctx.result)".to_string(),
            }),
        );
        building
            .partitions
            .assign(&resolver_id, Partition::new("Todo"));

        if register_hoisted {
            building
                .hoisted
                .register(&resolver_id, || "$util.autoId()".to_string())
                .unwrap();
        }

        let infra = InfraIds {
            role_id: "AuditlogLambdaRole".to_string(),
            data_source_id: "AuditlogLambdaDataSource".to_string(),
            function_id: "AuditlogInvocationFunction".to_string(),
        };
        (building, infra)
    }

    #[test]
    fn wrapper_clones_templates_verbatim() {
        let (mut building, infra) = seeded_building(false);
        rewrite_operation("Todo", OperationKind::Create, &infra, &mut building).unwrap();

        let Some(Resource::Function(wrapper)) = building.graph.get("CreateTodoResolverWrapper")
        else {
            panic!("expected wrapper function");
        };
        assert_eq!("{ \"operation\": \"PutItem\" }", wrapper.request_template);
        assert_eq!("$util.toJson($ctx.result)", wrapper.response_template);
        assert_eq!("TodoTableDataSource", wrapper.data_source_id);
    }

    #[test]
    fn hoisted_content_is_prepended_with_one_line_break() {
        let (mut building, infra) = seeded_building(true);
        rewrite_operation("Todo", OperationKind::Create, &infra, &mut building).unwrap();

        let Some(Resource::Function(wrapper)) = building.graph.get("CreateTodoResolverWrapper")
        else {
            panic!("expected wrapper function");
        };
        assert_eq!(
            "$util.autoId()\n{ \"operation\": \"PutItem\" }",
            wrapper.request_template
        );
        // The registry entry is gone; the finalize phase will not see it
        assert!(!building.hoisted.contains("CreateTodoResolver"));
    }

    #[test]
    fn pipeline_replaces_the_original() {
        let (mut building, infra) = seeded_building(false);
        rewrite_operation("Todo", OperationKind::Create, &infra, &mut building).unwrap();

        let pipeline = building.graph.resolver("CreateTodoResolver").unwrap();
        assert_eq!(
            Some(
                &[
                    "AuditlogInvocationFunction".to_string(),
                    "CreateTodoResolverWrapper".to_string()
                ][..]
            ),
            pipeline.pipeline_function_ids()
        );
        assert_eq!("Mutation", pipeline.type_name);
        assert_eq!("createTodo", pipeline.field_name);
        assert!(pipeline.request_template.contains("\"typeName\", \"Mutation\""));
        assert!(pipeline.request_template.contains("\"fieldName\", \"createTodo\""));

        assert_eq!(
            FUNCTION_DIRECTIVE_PARTITION,
            building
                .partitions
                .partition_of("CreateTodoResolver")
                .unwrap()
                .name()
        );
        assert!(building.graph.depends_on("CreateTodoResolver", "CreateTodoResolverWrapper"));
        assert!(building
            .graph
            .depends_on("CreateTodoResolverWrapper", "AuditlogInvocationFunction"));
    }

    #[test]
    fn missing_upstream_definition_is_fatal() {
        let (mut building, infra) = seeded_building(false);
        // Get was never generated in this fixture
        let result = rewrite_operation("Todo", OperationKind::Get, &infra, &mut building);
        assert!(matches!(
            result,
            Err(ModelBuildingError::InternalInvariant(_))
        ));
    }
}
