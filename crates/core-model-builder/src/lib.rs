// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Shared build-time state and the contract between builders.
//!
//! One transform run threads a single [`building::SystemContextBuilding`]
//! through every builder by exclusive reference; it is discarded when the run
//! ends. Nothing in this crate is global or persistent.

pub mod ast;
pub mod building;
pub mod error;
pub mod hoisted;
