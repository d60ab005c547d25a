// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! The `@firehose` builder: rewrites the standard operations of an annotated
//! type into two-stage pipelines that invoke an external function ahead of the
//! original logic, without changing the operation's observable result.
//!
//! It runs after the `@model` baseline generator and before that generator's
//! finalize phase; the rewrite pulls any deferred template content eagerly so
//! nothing is lost when the original resolver is deleted.

pub mod arn;
pub mod infra;
pub mod rewrite;
pub mod system_builder;
pub mod validate;

pub use system_builder::build;

/// The interception directive. Applicable only to object types; placement
/// anywhere else is rejected by the host schema engine.
pub const FIREHOSE_DIRECTIVE: &str = "firehose";

pub const NAME_ARGUMENT: &str = "name";
pub const REGION_ARGUMENT: &str = "region";

/// The partition holding everything this builder creates. Keeping it separate
/// from the per-type model partitions prevents a circular dependency between
/// deployment units.
pub const FUNCTION_DIRECTIVE_PARTITION: &str = "FunctionDirectiveStack";
