// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use core_model::{graph::ResourceGraph, partition::PartitionMap};
use serde::Serialize;

use crate::hoisted::HoistedContentRegistry;

/// The mutable state of one transform run, threaded through every builder by
/// exclusive reference and discarded at run end.
#[derive(Debug, Default)]
pub struct SystemContextBuilding {
    pub graph: ResourceGraph,
    pub partitions: PartitionMap,
    pub hoisted: HoistedContentRegistry,
}

impl SystemContextBuilding {
    /// The artifact handed to the provisioning process. The hoisted-content
    /// registry is build-time-only state and is dropped here.
    pub fn into_system(self) -> TransformedSystem {
        TransformedSystem {
            graph: self.graph,
            partitions: self.partitions,
        }
    }
}

/// The produced artifact: the resource graph plus the partition assignments.
#[derive(Debug, Serialize)]
pub struct TransformedSystem {
    pub graph: ResourceGraph,
    pub partitions: PartitionMap,
}
