// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use tracing::{debug, info};

use core_model::{
    expr::DeployExpr,
    naming::{table_data_source_id, table_role_id},
    operation::OperationKind,
    partition::Partition,
    resource::{
        DataSourceResource, Resource, ResolverKind, ResolverResource, RoleResource,
    },
};
use core_model_builder::{
    ast::ast_types::{AstSystem, MODEL_DIRECTIVE},
    building::SystemContextBuilding,
    error::ModelBuildingError,
};

use crate::templates;

const TABLE_ACTIONS: [&str; 5] = [
    "dynamodb:GetItem",
    "dynamodb:PutItem",
    "dynamodb:DeleteItem",
    "dynamodb:Query",
    "dynamodb:Scan",
];

/// Generate the baseline resources for every `@model` type, in declaration
/// order. Each type's resources go into a partition named after the type.
pub fn build(
    system: &AstSystem,
    building: &mut SystemContextBuilding,
) -> Result<(), ModelBuildingError> {
    for model in system.types.iter().filter(|t| t.has_directive(MODEL_DIRECTIVE)) {
        info!(type_name = %model.name, "Generating baseline operations");
        build_type(&model.name, building)?;
    }
    Ok(())
}

fn build_type(
    type_name: &str,
    building: &mut SystemContextBuilding,
) -> Result<(), ModelBuildingError> {
    let partition = Partition::new(type_name);

    let table_target = DeployExpr::sub(format!(
        "arn:aws:dynamodb:${{AWS::Region}}:${{AWS::AccountId}}:table/{type_name}Table"
    ));

    let role_id = table_role_id(type_name);
    building.graph.insert(
        &role_id,
        Resource::Role(RoleResource {
            trust_principal: "appsync.amazonaws.com".to_string(),
            actions: TABLE_ACTIONS.iter().map(|s| s.to_string()).collect(),
            target: table_target.clone(),
        }),
    );
    building.partitions.assign(&role_id, partition.clone());

    let data_source_id = table_data_source_id(type_name);
    building.graph.insert(
        &data_source_id,
        Resource::DataSource(DataSourceResource {
            role_id: role_id.clone(),
            target: table_target,
        }),
    );
    building.graph.add_dependency(&data_source_id, &role_id);
    building.partitions.assign(&data_source_id, partition.clone());

    for kind in OperationKind::ALL {
        let resolver_id = kind.resolver_id(type_name);
        debug!(%resolver_id, "Generating resolver");

        building.graph.insert(
            &resolver_id,
            Resource::Resolver(ResolverResource {
                type_name: kind.parent_type_name().to_string(),
                field_name: kind.field_name(type_name),
                kind: ResolverKind::Unit {
                    data_source_id: data_source_id.clone(),
                },
                request_template: templates::request_template(kind),
                response_template: templates::response_template(kind),
            }),
        );
        building.graph.add_dependency(&resolver_id, &data_source_id);
        building.partitions.assign(&resolver_id, partition.clone());

        if let Some(content) = templates::hoisted_content(kind) {
            building
                .hoisted
                .register(&resolver_id, move || content)?;
        }
    }

    Ok(())
}

/// The finalize phase: materialize every still-pending deferred content entry
/// into the owning resolver's request template. A pending entry whose resolver
/// no longer exists indicates that a downstream builder deleted a resolver
/// without consuming its entry.
pub fn finalize(building: &mut SystemContextBuilding) -> Result<(), ModelBuildingError> {
    for resolver_id in building.hoisted.pending_ids() {
        let content = match building.hoisted.materialize(&resolver_id) {
            Some(content) => content,
            None => continue,
        };

        let resolver = building.graph.resolver_mut(&resolver_id).ok_or_else(|| {
            ModelBuildingError::InternalInvariant(format!(
                "Deferred content pending for resolver '{resolver_id}', which is no longer in the graph"
            ))
        })?;
        resolver.request_template = format!("{content}\n{}", resolver.request_template);

        building.hoisted.remove(&resolver_id);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_model_builder::ast::ast_types::AstModel;

    fn modeled(name: &str) -> AstModel {
        AstModel {
            name: name.to_string(),
            directives: vec![core_model_builder::ast::ast_types::AstDirective {
                name: MODEL_DIRECTIVE.to_string(),
                args: Default::default(),
            }],
        }
    }

    #[test]
    fn five_resolvers_per_type() {
        let system = AstSystem {
            types: vec![modeled("Todo")],
        };
        let mut building = SystemContextBuilding::default();
        build(&system, &mut building).unwrap();

        for kind in OperationKind::ALL {
            let id = kind.resolver_id("Todo");
            let resolver = building.graph.resolver(&id).unwrap();
            assert_eq!(kind.parent_type_name(), resolver.type_name);
            assert!(building.graph.depends_on(&id, "TodoTableDataSource"));
            assert_eq!("Todo", building.partitions.partition_of(&id).unwrap().name());
        }
        // get/list/delete have no deferred content
        assert_eq!(2, building.hoisted.pending_ids().len());
    }

    #[test]
    fn finalize_prepends_pending_content() {
        let system = AstSystem {
            types: vec![modeled("Todo")],
        };
        let mut building = SystemContextBuilding::default();
        build(&system, &mut building).unwrap();

        let before = building
            .graph
            .resolver("CreateTodoResolver")
            .unwrap()
            .request_template
            .clone();

        finalize(&mut building).unwrap();

        let after = &building.graph.resolver("CreateTodoResolver").unwrap().request_template;
        assert!(after.ends_with(&before));
        assert!(after.contains("$util.autoId()"));
        assert!(building.hoisted.pending_ids().is_empty());
    }

    #[test]
    fn finalize_faults_on_vanished_resolver() {
        let system = AstSystem {
            types: vec![modeled("Todo")],
        };
        let mut building = SystemContextBuilding::default();
        build(&system, &mut building).unwrap();

        // Simulate a downstream builder deleting a resolver without consuming
        // its deferred content
        building.graph.remove("CreateTodoResolver");
        building.partitions.remove("CreateTodoResolver");

        assert!(matches!(
            finalize(&mut building),
            Err(ModelBuildingError::InternalInvariant(_))
        ));
    }
}
