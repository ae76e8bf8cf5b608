// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Export counters

use std::ops::{Add, AddAssign};

/// Number of records written per kind
///
/// Traversal calls return their own counts; callers sum them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExportStats {
    pub textures: usize,
    pub layers: usize,
    pub materials: usize,
    pub definitions: usize,
    pub instances: usize,
    pub groups: usize,
    pub faces: usize,
    pub edges: usize,
    pub curves: usize,
}

impl AddAssign for ExportStats {
    fn add_assign(&mut self, other: Self) {
        self.textures += other.textures;
        self.layers += other.layers;
        self.materials += other.materials;
        self.definitions += other.definitions;
        self.instances += other.instances;
        self.groups += other.groups;
        self.faces += other.faces;
        self.edges += other.edges;
        self.curves += other.curves;
    }
}

impl Add for ExportStats {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        self += other;
        self
    }
}
