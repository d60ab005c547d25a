// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use thiserror::Error;

/// Every error is fatal: a transform run either completes entirely or aborts
/// with no partial artifact. There are no retries anywhere in this system.
#[derive(Error, Debug)]
pub enum ModelBuildingError {
    /// The schema violates the directive contract (caller's mistake).
    #[error("Types annotated with @{directive} must also be annotated with @model.")]
    MissingModelDirective { directive: String, type_name: String },

    #[error("The @{directive} directive on type '{type_name}' requires a '{argument}' argument")]
    MissingArgument {
        directive: String,
        type_name: String,
        argument: String,
    },

    /// A collaborator-ordering or configuration defect, never a user error and
    /// never silently recovered.
    #[error("Internal error: {0}")]
    InternalInvariant(String),

    #[error("{0}")]
    IO(#[from] std::io::Error),

    #[error("Unable to serialize system: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("{0}")]
    Generic(String),
}
