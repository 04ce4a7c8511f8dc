// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! List content: [`Node`] and friends.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::{Dimensions, Glue, Kern, ListBox};

/// An ordered sequence of nodes. Order is significant.
pub type List = Vec<Node>;

/// Opaque marker carried through a list without being measured.
///
/// The value is chosen by the caller (a penalty, a mark, a source span id, ...).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Marker(pub u32);

/// Content of a box node.
#[derive(Clone, Debug, PartialEq)]
pub enum BoxNode {
    /// A box measured elsewhere, such as a glyph or a rule.
    Rigid(Dimensions),
    /// A nested list box. Its cached dimensions are the ones reported.
    List(Box<ListBox>),
}

impl BoxNode {
    /// Dimensions of the box as seen by an enclosing list.
    #[inline]
    pub fn dims(&self) -> Dimensions {
        match self {
            Self::Rigid(dims) => *dims,
            Self::List(list_box) => list_box.dims(),
        }
    }
}

impl From<Dimensions> for BoxNode {
    fn from(dims: Dimensions) -> Self {
        Self::Rigid(dims)
    }
}

impl From<ListBox> for BoxNode {
    fn from(list_box: ListBox) -> Self {
        Self::List(Box::new(list_box))
    }
}

/// A unit of list content.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// Something with a width, height and depth.
    Box(BoxNode),
    /// Elastic spacing.
    Glue(Glue),
    /// Rigid spacing.
    Kern(Kern),
    /// Content that takes no room along either axis.
    Other(Marker),
}

impl Node {
    /// A rigid box node.
    #[inline]
    pub const fn rigid(width: f64, height: f64, depth: f64) -> Self {
        Self::Box(BoxNode::Rigid(Dimensions::new(width, height, depth)))
    }

    /// A kern node.
    #[inline]
    pub const fn kern(space: f64) -> Self {
        Self::Kern(Kern::new(space))
    }

    /// Returns `true` for box nodes.
    #[inline]
    pub const fn is_box(&self) -> bool {
        matches!(self, Self::Box(_))
    }

    /// Returns `true` for glue nodes.
    #[inline]
    pub const fn is_glue(&self) -> bool {
        matches!(self, Self::Glue(_))
    }

    /// Returns `true` for kern nodes.
    #[inline]
    pub const fn is_kern(&self) -> bool {
        matches!(self, Self::Kern(_))
    }

    /// Dimensions of a box node, `None` for everything else.
    #[inline]
    pub fn box_dims(&self) -> Option<Dimensions> {
        match self {
            Self::Box(b) => Some(b.dims()),
            Self::Glue(_) | Self::Kern(_) | Self::Other(_) => None,
        }
    }
}

impl From<BoxNode> for Node {
    fn from(b: BoxNode) -> Self {
        Self::Box(b)
    }
}

impl From<Dimensions> for Node {
    fn from(dims: Dimensions) -> Self {
        Self::Box(BoxNode::Rigid(dims))
    }
}

impl From<ListBox> for Node {
    fn from(list_box: ListBox) -> Self {
        Self::Box(list_box.into())
    }
}

impl From<Glue> for Node {
    fn from(glue: Glue) -> Self {
        Self::Glue(glue)
    }
}

impl From<Kern> for Node {
    fn from(kern: Kern) -> Self {
        Self::Kern(kern)
    }
}

impl From<Marker> for Node {
    fn from(marker: Marker) -> Self {
        Self::Other(marker)
    }
}
