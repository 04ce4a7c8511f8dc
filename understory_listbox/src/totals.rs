// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-order glue budgets and the single-pass accumulator that fills them.

use core::ops::Index;

use crate::{Dimensions, Glue, GlueOrder, GlueSpec, Node};

/// Sum of stretch (or shrink) amounts, one per [`GlueOrder`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GlueTotals {
    sums: [f64; GlueOrder::COUNT],
}

impl GlueTotals {
    /// No elasticity at any order.
    pub const ZERO: Self = Self {
        sums: [0.0; GlueOrder::COUNT],
    };

    /// Adds one glue component.
    #[inline]
    pub fn add(&mut self, spec: GlueSpec) {
        self.sums[spec.order.index()] += spec.amount;
    }

    /// Sum at `order`.
    #[inline]
    pub fn get(&self, order: GlueOrder) -> f64 {
        self.sums[order.index()]
    }

    /// The highest order whose sum is nonzero, or [`GlueOrder::Normal`] when every sum is zero.
    ///
    /// Sums that cancel out to exactly zero do not count.
    pub fn highest_order(&self) -> GlueOrder {
        GlueOrder::ALL
            .into_iter()
            .rev()
            .find(|order| self.get(*order) != 0.0)
            .unwrap_or(GlueOrder::Normal)
    }

    /// Returns `true` if no order has a nonzero sum.
    pub fn is_zero(&self) -> bool {
        self.sums.iter().all(|sum| *sum == 0.0)
    }
}

impl Index<GlueOrder> for GlueTotals {
    type Output = f64;

    fn index(&self, order: GlueOrder) -> &f64 {
        &self.sums[order.index()]
    }
}

/// Result of one scan over a list: nominal length plus available elasticity.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GlueAccumulator {
    /// Sum of box extents, kern spaces, and glue spaces along the scanned axis.
    pub length: f64,
    /// Stretch available, per order.
    pub stretch: GlueTotals,
    /// Shrink available, per order.
    pub shrink: GlueTotals,
}

impl GlueAccumulator {
    /// An empty accumulator.
    pub const fn new() -> Self {
        Self {
            length: 0.0,
            stretch: GlueTotals::ZERO,
            shrink: GlueTotals::ZERO,
        }
    }

    /// Scans `list` once, measuring boxes by their total extent (`height + depth`).
    ///
    /// This is the vertical measure: it is what a vertical list spans before
    /// the trailing box's depth is split off.
    pub fn scan<'a>(list: impl IntoIterator<Item = &'a Node>) -> Self {
        let mut acc = Self::new();
        for node in list {
            acc.push(node, |dims| dims.total_extent());
        }
        acc
    }

    /// Records one node, measuring boxes with `extent`.
    #[inline]
    pub fn push(&mut self, node: &Node, extent: impl FnOnce(Dimensions) -> f64) {
        match node {
            Node::Box(b) => self.length += extent(b.dims()),
            Node::Kern(kern) => self.length += kern.space,
            Node::Glue(glue) => self.push_glue(glue),
            Node::Other(_) => {}
        }
    }

    /// Records one glue node.
    #[inline]
    pub fn push_glue(&mut self, glue: &Glue) {
        self.length += glue.space;
        self.stretch.add(glue.stretch);
        self.shrink.add(glue.shrink);
    }
}
