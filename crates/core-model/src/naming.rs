// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Deterministic logical ids.
//!
//! Every resource id is a pure function of the names that identify it. The
//! deduplication of shared infrastructure and the lookup of upstream-generated
//! resolvers both depend on these functions never changing their output for a
//! given input.

use heck::ToUpperCamelCase;

/// A type with both singular and plural versions of itself.
pub trait ToPlural {
    fn to_plural(&self) -> String;
}

impl ToPlural for str {
    fn to_plural(&self) -> String {
        let plural_name = pluralizer::pluralize(self, 2, false);
        if plural_name == self {
            // Force pluralization if the pluralizer returns the same string
            format!("{self}s")
        } else {
            plural_name
        }
    }
}

/// Project an arbitrary string (function names may carry placeholder tokens,
/// regions carry hyphens) onto its UpperCamelCase alphanumeric form, suitable
/// for use inside a logical id.
pub fn logical_id_fragment(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { ' ' })
        .collect();
    cleaned.to_upper_camel_case()
}

fn function_key_fragment(name: &str, region: Option<&str>) -> String {
    match region {
        Some(region) => format!(
            "{}{}",
            logical_id_fragment(name),
            logical_id_fragment(region)
        ),
        None => logical_id_fragment(name),
    }
}

pub fn function_role_id(name: &str, region: Option<&str>) -> String {
    format!("{}LambdaRole", function_key_fragment(name, region))
}

pub fn function_data_source_id(name: &str, region: Option<&str>) -> String {
    format!("{}LambdaDataSource", function_key_fragment(name, region))
}

pub fn invocation_function_id(name: &str, region: Option<&str>) -> String {
    format!("{}InvocationFunction", function_key_fragment(name, region))
}

pub fn wrapper_function_id(resolver_id: &str) -> String {
    format!("{resolver_id}Wrapper")
}

pub fn table_role_id(type_name: &str) -> String {
    format!("{type_name}TableRole")
}

pub fn table_data_source_id(type_name: &str) -> String {
    format!("{type_name}TableDataSource")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plural_names() {
        assert_eq!("Todos", "Todo".to_plural());
        assert_eq!("People", "Person".to_plural());
    }

    #[test]
    fn id_fragments() {
        assert_eq!("Auditlog", logical_id_fragment("auditlog"));
        assert_eq!("AuditlogEnv", logical_id_fragment("auditlog-${env}"));
        assert_eq!("UsEast1", logical_id_fragment("us-east-1"));
    }

    #[test]
    fn infra_ids() {
        assert_eq!("AuditlogLambdaRole", function_role_id("auditlog", None));
        assert_eq!(
            "AuditlogUsWest2LambdaDataSource",
            function_data_source_id("auditlog", Some("us-west-2"))
        );
        assert_eq!(
            "AuditlogEnvInvocationFunction",
            invocation_function_id("auditlog-${env}", None)
        );
    }
}
