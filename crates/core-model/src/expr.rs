// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Deployment-time expressions.
//!
//! Invocation targets are not plain strings: which environment (if any) is bound is
//! known only at deployment time, so the graph stores a small expression tree that
//! the provisioning process renders into template intrinsics. [`DeployExpr::evaluate`]
//! resolves an expression against concrete deployment parameters; it exists for tests
//! and for previewing targets from the CLI.

use serde::{Serialize, Serializer};
use serde_json::{Value, json};

/// Placeholder substituted by the `${AWS::Region}` pseudo parameter.
pub const REGION_PLACEHOLDER: &str = "${AWS::Region}";

/// Placeholder substituted by the `${AWS::AccountId}` pseudo parameter.
pub const ACCOUNT_PLACEHOLDER: &str = "${AWS::AccountId}";

/// Placeholder substituted by the bound environment parameter.
pub const ENV_PLACEHOLDER: &str = "${env}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// True when a deployment binds the `env` parameter.
    HasEnvironment,
}

impl Condition {
    pub fn name(&self) -> &'static str {
        match self {
            Condition::HasEnvironment => "HasEnvironment",
        }
    }

    fn holds(&self, params: &DeployParams) -> bool {
        match self {
            Condition::HasEnvironment => params.env.is_some(),
        }
    }
}

/// An expression resolved by the deployment engine, not by the transform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployExpr {
    /// A literal string, used verbatim.
    Lit(String),
    /// A substitution template; placeholders are `${AWS::Region}`,
    /// `${AWS::AccountId}`, and `${env}`.
    Sub(String),
    /// A two-branch conditional on a deployment condition.
    If {
        condition: Condition,
        then: Box<DeployExpr>,
        otherwise: Box<DeployExpr>,
    },
}

impl DeployExpr {
    pub fn lit(value: impl Into<String>) -> Self {
        DeployExpr::Lit(value.into())
    }

    pub fn sub(template: impl Into<String>) -> Self {
        DeployExpr::Sub(template.into())
    }

    pub fn if_env(then: DeployExpr, otherwise: DeployExpr) -> Self {
        DeployExpr::If {
            condition: Condition::HasEnvironment,
            then: Box::new(then),
            otherwise: Box::new(otherwise),
        }
    }

    /// Template-intrinsic rendering, the form the provisioning process consumes.
    pub fn to_value(&self) -> Value {
        match self {
            DeployExpr::Lit(value) => json!(value),
            DeployExpr::Sub(template) => json!({ "Fn::Sub": template }),
            DeployExpr::If {
                condition,
                then,
                otherwise,
            } => json!({ "Fn::If": [condition.name(), then.to_value(), otherwise.to_value()] }),
        }
    }

    /// Resolve to a concrete string under the given deployment parameters.
    pub fn evaluate(&self, params: &DeployParams) -> String {
        match self {
            DeployExpr::Lit(value) => value.clone(),
            DeployExpr::Sub(template) => {
                let resolved = template
                    .replace(REGION_PLACEHOLDER, &params.region)
                    .replace(ACCOUNT_PLACEHOLDER, &params.account_id);
                match &params.env {
                    Some(env) => resolved.replace(ENV_PLACEHOLDER, env),
                    None => resolved,
                }
            }
            DeployExpr::If {
                condition,
                then,
                otherwise,
            } => {
                if condition.holds(params) {
                    then.evaluate(params)
                } else {
                    otherwise.evaluate(params)
                }
            }
        }
    }
}

impl Serialize for DeployExpr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

/// Concrete parameter bindings for one deployment.
#[derive(Debug, Clone)]
pub struct DeployParams {
    pub env: Option<String>,
    pub region: String,
    pub account_id: String,
}

impl Default for DeployParams {
    fn default() -> Self {
        DeployParams {
            env: None,
            region: "us-east-1".to_string(),
            account_id: "123456789012".to_string(),
        }
    }
}
