// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! The resource-graph data model shared by every builder.
//!
//! A transform run produces a [`graph::ResourceGraph`] (resources keyed by stable
//! logical ids, dependencies as id pairs) and a [`partition::PartitionMap`]
//! (resource id to deployment partition). Both are handed to the out-of-scope
//! provisioning process at the end of a run.

pub mod expr;
pub mod graph;
pub mod naming;
pub mod operation;
pub mod partition;
pub mod resource;
