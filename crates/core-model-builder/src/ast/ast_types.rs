// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! The parsed schema surface consumed by the builders.
//!
//! Only object-type declarations and their type-level directives are carried.
//! Directive placement on anything else is a host schema-engine concern and is
//! rejected before an [`AstSystem`] is ever constructed.

use std::fmt::{Display, Formatter};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The data-modeling directive owned by the upstream generator.
pub const MODEL_DIRECTIVE: &str = "model";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct AstSystem {
    /// Object types in declaration order. The builders process them in this
    /// order and never interleave two types.
    pub types: Vec<AstModel>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AstModel {
    pub name: String,
    pub directives: Vec<AstDirective>,
}

impl AstModel {
    pub fn directive(&self, name: &str) -> Option<&AstDirective> {
        self.directives.iter().find(|d| d.name == name)
    }

    pub fn has_directive(&self, name: &str) -> bool {
        self.directive(name).is_some()
    }
}

impl Display for AstModel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AstDirective {
    pub name: String,
    /// String-valued arguments in declaration order. The directive surface in
    /// scope here (`@firehose(name:, region:)`) takes only string arguments.
    pub args: IndexMap<String, String>,
}

impl AstDirective {
    pub fn arg(&self, name: &str) -> Option<&str> {
        self.args.get(name).map(String::as_str)
    }
}
