// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use core_model_builder::{
    ast::ast_types::{AstModel, MODEL_DIRECTIVE},
    error::ModelBuildingError,
};

use crate::{FIREHOSE_DIRECTIVE, NAME_ARGUMENT, REGION_ARGUMENT};

/// The external function named by a `@firehose` directive. Many annotated
/// types may resolve to the same reference; `(name, region)` is the identity
/// under which shared infrastructure is deduplicated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionReference {
    /// May embed the environment placeholder token (`${env}`).
    pub name: String,
    pub region: Option<String>,
}

impl FunctionReference {
    pub fn dedup_key(&self) -> (String, Option<String>) {
        (self.name.clone(), self.region.clone())
    }
}

/// Check the directive contract for one annotated type and extract the
/// function reference. Runs before any graph mutation this builder performs.
pub fn validate(model: &AstModel) -> Result<FunctionReference, ModelBuildingError> {
    let directive = model.directive(FIREHOSE_DIRECTIVE).ok_or_else(|| {
        ModelBuildingError::InternalInvariant(format!(
            "Type '{}' reached @{FIREHOSE_DIRECTIVE} validation without the directive",
            model.name
        ))
    })?;

    if !model.has_directive(MODEL_DIRECTIVE) {
        return Err(ModelBuildingError::MissingModelDirective {
            directive: FIREHOSE_DIRECTIVE.to_string(),
            type_name: model.name.clone(),
        });
    }

    let name = match directive.arg(NAME_ARGUMENT) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => {
            return Err(ModelBuildingError::MissingArgument {
                directive: FIREHOSE_DIRECTIVE.to_string(),
                type_name: model.name.clone(),
                argument: NAME_ARGUMENT.to_string(),
            });
        }
    };

    Ok(FunctionReference {
        name,
        region: directive.arg(REGION_ARGUMENT).map(str::to_string),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_model_builder::ast::ast_types::AstDirective;
    use indexmap::IndexMap;

    fn firehose_type(directives: Vec<AstDirective>) -> AstModel {
        AstModel {
            name: "Todo".to_string(),
            directives,
        }
    }

    fn directive(name: &str, args: &[(&str, &str)]) -> AstDirective {
        AstDirective {
            name: name.to_string(),
            args: args
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<IndexMap<_, _>>(),
        }
    }

    #[test]
    fn accepts_well_formed_directive() {
        let model = firehose_type(vec![
            directive("model", &[]),
            directive("firehose", &[("name", "auditlog"), ("region", "us-west-2")]),
        ]);
        let reference = validate(&model).unwrap();
        assert_eq!("auditlog", reference.name);
        assert_eq!(Some("us-west-2".to_string()), reference.region);
    }

    #[test]
    fn requires_model_directive() {
        let model = firehose_type(vec![directive("firehose", &[("name", "auditlog")])]);
        let err = validate(&model).unwrap_err();
        assert_eq!(
            "Types annotated with @firehose must also be annotated with @model.",
            err.to_string()
        );
    }

    #[test]
    fn requires_name_argument() {
        let model = firehose_type(vec![directive("model", &[]), directive("firehose", &[])]);
        assert!(matches!(
            validate(&model),
            Err(ModelBuildingError::MissingArgument { argument, .. }) if argument == "name"
        ));
    }
}
