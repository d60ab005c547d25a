// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use thiserror::Error;

use core_model_builder::error::ModelBuildingError;

#[derive(Error, Debug)]
pub enum ParserError {
    #[error("Could not parse schema: {0}")]
    Diagnosis(String),

    #[error("File '{0}' not found")]
    FileNotFound(String),

    #[error("Unsupported argument value for '{argument}' on @{directive}: expected a string")]
    UnsupportedArgumentValue { directive: String, argument: String },

    #[error("{0}")]
    IO(#[from] std::io::Error),

    #[error("{0}")]
    ModelBuildingError(#[from] ModelBuildingError),
}
