// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Orchestration of one transform run: parse a schema, run the builders in
//! their contractual order, and hand back the produced system.

use std::fs;
use std::path::Path;

pub mod error;
pub mod parser;

mod system_builder;

use core_model_builder::building::TransformedSystem;
use error::ParserError;

/// Build a system from a schema file.
pub fn build_system(schema_file: impl AsRef<Path>) -> Result<TransformedSystem, ParserError> {
    let schema_file = schema_file.as_ref();
    let source = fs::read_to_string(schema_file)
        .map_err(|_| ParserError::FileNotFound(schema_file.display().to_string()))?;
    build_system_from_str(&source)
}

pub fn build_system_from_str(source: &str) -> Result<TransformedSystem, ParserError> {
    let ast_system = parser::parse_str(source)?;
    Ok(system_builder::build(&ast_system)?)
}
