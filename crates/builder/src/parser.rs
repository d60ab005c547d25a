// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! SDL parsing into the builder-facing AST.
//!
//! Only object-type declarations and their type-level directives are carried
//! over; directives attached to fields or to non-object declarations never
//! reach the builders (the host placement rules).

use async_graphql_parser::{
    parse_schema,
    types::{TypeKind, TypeSystemDefinition},
};
use async_graphql_value::ConstValue;
use indexmap::IndexMap;

use core_model_builder::ast::ast_types::{AstDirective, AstModel, AstSystem};

use crate::error::ParserError;

pub fn parse_str(source: &str) -> Result<AstSystem, ParserError> {
    let document = parse_schema(source).map_err(|e| ParserError::Diagnosis(e.to_string()))?;

    let mut types = Vec::new();
    for definition in document.definitions {
        let TypeSystemDefinition::Type(type_definition) = definition else {
            continue;
        };
        let type_definition = type_definition.node;
        let TypeKind::Object(_) = type_definition.kind else {
            continue;
        };

        let name = type_definition.name.node.to_string();
        let directives = type_definition
            .directives
            .into_iter()
            .map(|directive| {
                let directive = directive.node;
                let directive_name = directive.name.node.to_string();
                let args = directive
                    .arguments
                    .into_iter()
                    .map(|(arg_name, value)| {
                        let arg_name = arg_name.node.to_string();
                        match value.node {
                            ConstValue::String(value) => Ok((arg_name, value)),
                            _ => Err(ParserError::UnsupportedArgumentValue {
                                directive: directive_name.clone(),
                                argument: arg_name,
                            }),
                        }
                    })
                    .collect::<Result<IndexMap<_, _>, _>>()?;
                Ok(AstDirective {
                    name: directive_name,
                    args,
                })
            })
            .collect::<Result<Vec<_>, ParserError>>()?;

        types.push(AstModel { name, directives });
    }

    Ok(AstSystem { types })
}
