// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! The baseline generator for `@model` types.
//!
//! For every modeled type this builder produces a table-backed data source and
//! the five standard single-stage resolvers under their documented
//! deterministic ids, and registers deferred template content (identifier
//! seeding, timestamps) for the write operations. Downstream builders may
//! consume a resolver (and pull its deferred content) before [`finalize`] runs;
//! `finalize` only materializes what is still pending.

mod templates;

pub mod system_builder;

pub use system_builder::{build, finalize};
