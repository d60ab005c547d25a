// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde::Serialize;
use serde_json::{Value, json};

use crate::expr::DeployExpr;

/// A node in the resource graph. Resources reference each other by logical id,
/// never by pointer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum Resource {
    Role(RoleResource),
    DataSource(DataSourceResource),
    Function(FunctionResource),
    Resolver(ResolverResource),
}

/// A permission role: a trust policy naming the hosting API's service principal
/// and a permission policy granting `actions` on `target`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleResource {
    pub trust_principal: String,
    pub actions: Vec<String>,
    pub target: DeployExpr,
}

impl RoleResource {
    pub fn assume_role_policy_document(&self) -> Value {
        json!({
            "Version": "2012-10-17",
            "Statement": [{
                "Effect": "Allow",
                "Principal": { "Service": self.trust_principal },
                "Action": "sts:AssumeRole"
            }]
        })
    }

    pub fn policy_document(&self) -> Value {
        json!({
            "Version": "2012-10-17",
            "Statement": [{
                "Effect": "Allow",
                "Action": self.actions,
                "Resource": self.target.to_value()
            }]
        })
    }
}

/// A data source bound to a role and an invocation target.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataSourceResource {
    pub role_id: String,
    pub target: DeployExpr,
}

/// A pipeline-stage function: one unit of a pipeline, bound to a data source
/// and a request/response template pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionResource {
    pub data_source_id: String,
    pub request_template: String,
    pub response_template: String,
}

/// A field resolver, either single-stage (bound directly to a data source) or
/// a pipeline over an ordered list of stage functions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolverResource {
    pub type_name: String,
    pub field_name: String,
    pub kind: ResolverKind,
    pub request_template: String,
    pub response_template: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "resolver_kind")]
pub enum ResolverKind {
    Unit { data_source_id: String },
    Pipeline { function_ids: Vec<String> },
}

impl ResolverResource {
    /// The data source id of a single-stage resolver.
    pub fn unit_data_source_id(&self) -> Option<&str> {
        match &self.kind {
            ResolverKind::Unit { data_source_id } => Some(data_source_id),
            ResolverKind::Pipeline { .. } => None,
        }
    }

    /// The ordered stage functions of a pipeline resolver.
    pub fn pipeline_function_ids(&self) -> Option<&[String]> {
        match &self.kind {
            ResolverKind::Pipeline { function_ids } => Some(function_ids),
            ResolverKind::Unit { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_policy_documents() {
        let role = RoleResource {
            trust_principal: "appsync.amazonaws.com".to_string(),
            actions: vec!["lambda:InvokeFunction".to_string()],
            target: DeployExpr::sub("arn:aws:lambda:${AWS::Region}:${AWS::AccountId}:function:f"),
        };

        assert_eq!(
            json!({
                "Version": "2012-10-17",
                "Statement": [{
                    "Effect": "Allow",
                    "Principal": { "Service": "appsync.amazonaws.com" },
                    "Action": "sts:AssumeRole"
                }]
            }),
            role.assume_role_policy_document()
        );

        let policy = role.policy_document();
        assert_eq!(
            json!(["lambda:InvokeFunction"]),
            policy["Statement"][0]["Action"]
        );
        assert_eq!(
            json!({ "Fn::Sub": "arn:aws:lambda:${AWS::Region}:${AWS::AccountId}:function:f" }),
            policy["Statement"][0]["Resource"]
        );
    }
}
