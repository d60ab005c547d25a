// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use tracing::debug;

use core_model_builder::{
    ast::ast_types::AstSystem,
    building::{SystemContextBuilding, TransformedSystem},
    error::ModelBuildingError,
};

/// Run the builders over one parsed schema.
///
/// The order is contractual: the firehose builder consumes resolvers (and
/// their deferred template content) that the model builder produces, and it
/// must run before the model builder's finalize phase materializes what is
/// left. The building context is discarded on the first error, so no partial
/// artifact is ever observable.
pub fn build(system: &AstSystem) -> Result<TransformedSystem, ModelBuildingError> {
    let mut building = SystemContextBuilding::default();

    debug!("Generating baseline model resources");
    model_builder::build(system, &mut building)?;

    debug!("Rewriting intercepted resolvers");
    firehose_builder::build(system, &mut building)?;

    debug!("Finalizing deferred model content");
    model_builder::finalize(&mut building)?;

    Ok(building.into_system())
}
