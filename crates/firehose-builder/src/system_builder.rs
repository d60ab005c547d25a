// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use tracing::info;

use core_model::operation::OperationKind;
use core_model_builder::{
    ast::ast_types::{AstModel, AstSystem},
    building::SystemContextBuilding,
    error::ModelBuildingError,
};

use crate::{
    FIREHOSE_DIRECTIVE,
    infra::SharedInfra,
    rewrite::rewrite_operation,
    validate::{self, FunctionReference},
};

/// Rewrite every annotated type's standard operations into pipelines.
///
/// All directives are validated before the first graph mutation. Types are
/// processed in declaration order, and all five operations of one type
/// complete before the next type begins; the deduplication cache spans the
/// whole run.
pub fn build(
    system: &AstSystem,
    building: &mut SystemContextBuilding,
) -> Result<(), ModelBuildingError> {
    let annotated: Vec<(&AstModel, FunctionReference)> = system
        .types
        .iter()
        .filter(|t| t.has_directive(FIREHOSE_DIRECTIVE))
        .map(|model| validate::validate(model).map(|reference| (model, reference)))
        .collect::<Result<_, _>>()?;

    let mut shared = SharedInfra::default();

    for (model, reference) in annotated {
        info!(type_name = %model.name, function = %reference.name, "Intercepting standard operations");

        let infra = shared.ensure(&reference, building)?;
        for kind in OperationKind::ALL {
            rewrite_operation(&model.name, kind, &infra, building)?;
        }
    }

    Ok(())
}
