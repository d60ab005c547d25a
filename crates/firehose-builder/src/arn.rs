// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Resolution of a function reference into a deployment-time target expression.
//!
//! [`function_target`] is a pure function of `(name, region)`: every call site
//! with the same input produces a structurally identical expression. The
//! deduplicator's identity check relies on this.

use core_model::expr::{DeployExpr, REGION_PLACEHOLDER};

/// The environment placeholder convention, matched as an exact literal.
pub const ENV_TOKEN: &str = "${env}";

/// Build the invocation-target expression for a function reference.
///
/// A name embedding [`ENV_TOKEN`] produces a two-branch conditional: with an
/// environment parameter bound, the token is substituted verbatim; without
/// one, the placeholder segment is stripped entirely, supporting deployments
/// that never had an environment suffix.
pub fn function_target(name: &str, region: Option<&str>) -> DeployExpr {
    let region_segment = region.unwrap_or(REGION_PLACEHOLDER);

    if name.contains(ENV_TOKEN) {
        DeployExpr::if_env(
            DeployExpr::sub(lambda_arn(region_segment, name)),
            DeployExpr::sub(lambda_arn(region_segment, &strip_env_segment(name))),
        )
    } else {
        DeployExpr::sub(lambda_arn(region_segment, name))
    }
}

fn lambda_arn(region: &str, name: &str) -> String {
    format!("arn:aws:lambda:{region}:${{AWS::AccountId}}:function:{name}")
}

/// Remove the placeholder segment: a `-` directly before the token belongs to
/// the segment and is removed with it.
fn strip_env_segment(name: &str) -> String {
    name.replace(&format!("-{ENV_TOKEN}"), "")
        .replace(ENV_TOKEN, "")
}
