// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boxes whose size is derived from an owned list.

use alloc::vec::Vec;

use kurbo::{Axis, Point};

use crate::glue_set::set_glue;
use crate::{
    BoxingResult, Dimensions, GlueAccumulator, GlueSetting, GlueTotals, List, ListBoxEditor, Node,
    PrevDepth,
};

/// Natural size of a list plus the elasticity available to change it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Measurement {
    /// Natural width, height and depth.
    pub dims: Dimensions,
    /// Stretch available along the list axis.
    pub stretch: GlueTotals,
    /// Shrink available along the list axis.
    pub shrink: GlueTotals,
}

impl Measurement {
    /// Natural size along `axis`: height for vertical lists, width for horizontal ones.
    pub fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Vertical => self.dims.height,
            Axis::Horizontal => self.dims.width,
        }
    }
}

/// Measures `list` stacked along `axis`.
///
/// Vertical lists take the widest box as their width and add up box extents,
/// kerns and glue for their height; when the last node is a box its depth
/// becomes the list's depth instead. Horizontal lists add up widths and take
/// the tallest height and deepest depth. Markers are skipped. An empty list
/// measures zero everywhere.
pub fn measure(axis: Axis, list: &[Node]) -> Measurement {
    let mut acc = GlueAccumulator::new();
    let dims = match axis {
        Axis::Vertical => {
            let mut width = 0.0_f64;
            for node in list {
                if let Some(d) = node.box_dims() {
                    width = width.max(d.width);
                }
                acc.push(node, |d| d.total_extent());
            }
            match list.last().and_then(Node::box_dims) {
                Some(last) => Dimensions::new(width, acc.length - last.depth, last.depth),
                None => Dimensions::new(width, acc.length, 0.0),
            }
        }
        Axis::Horizontal => {
            let mut height = 0.0_f64;
            let mut depth = 0.0_f64;
            for node in list {
                if let Some(d) = node.box_dims() {
                    height = height.max(d.height);
                    depth = depth.max(d.depth);
                }
                acc.push(node, |d| d.width);
            }
            Dimensions::new(acc.length, height, depth)
        }
    };
    Measurement {
        dims,
        stretch: acc.stretch,
        shrink: acc.shrink,
    }
}

/// Where a box child of a list box sits.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Index of the child in the list.
    pub index: usize,
    /// The child's reference point, relative to the list box's reference point (y grows downwards).
    pub origin: Point,
}

/// A box whose width, height and depth come from its list.
///
/// The cached dimensions are only meaningful right after a rebox. Mutating
/// the list goes through [`ListBox::edit`], which reboxes when the edit ends.
#[derive(Clone, Debug, PartialEq)]
pub struct ListBox {
    axis: Axis,
    dims: Dimensions,
    glue: GlueSetting,
    list: List,
}

impl ListBox {
    /// Boxes `list` along `axis` at its natural size.
    pub fn new(axis: Axis, list: List) -> Self {
        let mut b = Self::from_parts(axis, list, Dimensions::ZERO);
        b.rebox_natural();
        b
    }

    /// Boxes `list` along `axis` to `desired`.
    pub fn new_to(axis: Axis, list: List, desired: f64) -> (Self, BoxingResult) {
        let mut b = Self::from_parts(axis, list, Dimensions::ZERO);
        let result = b.rebox_to(desired);
        (b, result)
    }

    /// A box with the given dimensions and list, without measuring anything.
    pub fn from_parts(axis: Axis, list: List, dims: Dimensions) -> Self {
        Self {
            axis,
            dims,
            glue: GlueSetting::NATURAL,
            list,
        }
    }

    /// An empty box with preset dimensions.
    pub fn with_dims(axis: Axis, dims: Dimensions) -> Self {
        Self::from_parts(axis, List::new(), dims)
    }

    /// A vertical box at natural size.
    pub fn vbox(list: List) -> Self {
        Self::new(Axis::Vertical, list)
    }

    /// A vertical box of height `desired`.
    pub fn vbox_to(list: List, desired: f64) -> (Self, BoxingResult) {
        Self::new_to(Axis::Vertical, list, desired)
    }

    /// A vertical box at natural size whose reference point is the first box's baseline.
    pub fn vtop(list: List) -> Self {
        let mut b = Self::vbox(list);
        b.make_top();
        b
    }

    /// [`ListBox::vbox_to`] followed by [`ListBox::make_top`].
    pub fn vtop_to(list: List, desired: f64) -> (Self, BoxingResult) {
        let (mut b, result) = Self::vbox_to(list, desired);
        b.make_top();
        (b, result)
    }

    /// A horizontal box at natural size.
    pub fn hbox(list: List) -> Self {
        Self::new(Axis::Horizontal, list)
    }

    /// A horizontal box of width `desired`.
    pub fn hbox_to(list: List, desired: f64) -> (Self, BoxingResult) {
        Self::new_to(Axis::Horizontal, list, desired)
    }

    /// The axis the list stacks along.
    #[inline]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Cached dimensions.
    #[inline]
    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    /// Cached width.
    #[inline]
    pub fn width(&self) -> f64 {
        self.dims.width
    }

    /// Cached height.
    #[inline]
    pub fn height(&self) -> f64 {
        self.dims.height
    }

    /// Cached depth.
    #[inline]
    pub fn depth(&self) -> f64 {
        self.dims.depth
    }

    /// `height + depth`.
    #[inline]
    pub fn total_extent(&self) -> f64 {
        self.dims.total_extent()
    }

    /// Glue setting from the last rebox.
    #[inline]
    pub fn glue_setting(&self) -> GlueSetting {
        self.glue
    }

    /// The content list.
    #[inline]
    pub fn list(&self) -> &List {
        &self.list
    }

    /// Takes the content list, dropping the box.
    pub fn into_list(self) -> List {
        self.list
    }

    /// Natural size of the current list. Does not touch the cached dimensions.
    pub fn measure(&self) -> Measurement {
        measure(self.axis, &self.list)
    }

    /// Sets the cached dimensions to the natural size.
    pub fn rebox_natural(&mut self) {
        self.dims = self.measure().dims;
        self.glue = GlueSetting::NATURAL;
    }

    /// Resolves the size along the box's axis against `desired`.
    ///
    /// The cross-axis dimensions come from measurement. Always succeeds; the
    /// result says whether the glue could make up the difference.
    pub fn rebox_to(&mut self, desired: f64) -> BoxingResult {
        let m = self.measure();
        let natural = m.along(self.axis);
        let set = set_glue(natural, desired, &m.stretch, &m.shrink);

        self.dims = m.dims;
        match self.axis {
            Axis::Vertical => self.dims.height = set.size,
            Axis::Horizontal => self.dims.width = set.size,
        }
        self.glue = set.setting;

        let result = set.result(desired);
        if !result.is_normal() {
            log::debug!(
                "{result:?} {:?} box: natural {natural}, desired {desired}, final {}, badness {}",
                self.axis,
                set.size,
                set.setting.badness(),
            );
        }
        result
    }

    /// Moves the reference point to the baseline of the first node, keeping the total extent.
    ///
    /// If the list does not start with a box the reference point moves to the top edge.
    pub fn make_top(&mut self) {
        let x = self
            .list
            .first()
            .and_then(Node::box_dims)
            .map_or(0.0, |d| d.height);
        self.dims.split_at_height(x);
    }

    /// Sets the height to `h` and the depth to whatever keeps the total extent. The list is not touched.
    pub fn set_split_at_height(&mut self, h: f64) {
        self.dims.split_at_height(h);
    }

    /// Same as [`ListBox::set_split_at_height`]; a size change, not a content edit.
    pub fn change_height(&mut self, h: f64) {
        self.set_split_at_height(h);
    }

    /// Depth of the last box in the list, which is what a list builder's prevdepth would hold.
    pub fn prev_depth(&self) -> PrevDepth {
        self.list
            .iter()
            .rev()
            .find_map(Node::box_dims)
            .map_or(PrevDepth::Ignore, |d| PrevDepth::Depth(d.depth))
    }

    /// Opens an editing session over the list.
    ///
    /// The box is reboxed at natural size when the session ends unless one
    /// of the editor's finalizers says otherwise.
    pub fn edit(&mut self) -> ListBoxEditor<'_> {
        ListBoxEditor::new(self)
    }

    pub(crate) fn list_mut(&mut self) -> &mut List {
        &mut self.list
    }

    /// Reference points of the box children, with glue set as recorded by the last rebox.
    pub fn placements(&self) -> Vec<Placement> {
        let mut out = Vec::new();
        match self.axis {
            Axis::Vertical => {
                let mut y = -self.dims.height;
                for (index, node) in self.list.iter().enumerate() {
                    match node {
                        Node::Box(b) => {
                            let d = b.dims();
                            y += d.height;
                            out.push(Placement {
                                index,
                                origin: Point::new(0.0, y),
                            });
                            y += d.depth;
                        }
                        Node::Glue(glue) => y += self.glue.set_size(glue),
                        Node::Kern(kern) => y += kern.space,
                        Node::Other(_) => {}
                    }
                }
            }
            Axis::Horizontal => {
                let mut x = 0.0;
                for (index, node) in self.list.iter().enumerate() {
                    match node {
                        Node::Box(b) => {
                            out.push(Placement {
                                index,
                                origin: Point::new(x, 0.0),
                            });
                            x += b.dims().width;
                        }
                        Node::Glue(glue) => x += self.glue.set_size(glue),
                        Node::Kern(kern) => x += kern.space,
                        Node::Other(_) => {}
                    }
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use kurbo::{Axis, Point};

    use super::{ListBox, measure};
    use crate::{
        BaselineParams, BoxingResult, Dimensions, Glue, GlueSpec, List, ListBuilder, Marker, Node,
        PrevDepth,
    };

    fn two_lines() -> List {
        let mut builder =
            ListBuilder::vertical(BaselineParams::new(Glue::fixed(12.0), Glue::fixed(1.0)));
        builder.push_box(Dimensions::new(5.0, 10.0, 2.0));
        builder.push_box(Dimensions::new(5.0, 10.0, 2.0));
        builder.into_list()
    }

    #[test]
    fn two_lines_measure_and_underfull_target() {
        let b = ListBox::vbox(two_lines());
        assert_eq!(b.dims(), Dimensions::new(5.0, 22.0, 2.0));

        let (b, result) = ListBox::vbox_to(two_lines(), 30.0);
        assert_eq!(result, BoxingResult::Underfull);
        assert_eq!(b.height(), 22.0, "no stretch keeps the natural height");
        assert_eq!(b.depth(), 2.0);
        assert_eq!(b.width(), 5.0);
    }

    #[test]
    fn empty_list_is_zero() {
        assert_eq!(ListBox::vbox(List::new()).dims(), Dimensions::ZERO);
        assert_eq!(ListBox::hbox(List::new()).dims(), Dimensions::ZERO);
        assert_eq!(ListBox::vtop(List::new()).dims(), Dimensions::ZERO);
    }

    #[test]
    fn depth_comes_only_from_a_trailing_box() {
        let ends_in_box = vec![Node::kern(3.0), Node::rigid(1.0, 4.0, 1.5)];
        assert_eq!(ListBox::vbox(ends_in_box).depth(), 1.5);

        let ends_in_kern = vec![Node::rigid(1.0, 4.0, 1.5), Node::kern(3.0)];
        let b = ListBox::vbox(ends_in_kern);
        assert_eq!(b.depth(), 0.0);
        assert_eq!(b.height(), 8.5);

        let ends_in_glue = vec![Node::rigid(1.0, 4.0, 1.5), Node::from(Glue::fil())];
        assert_eq!(ListBox::vbox(ends_in_glue).depth(), 0.0);

        let ends_in_marker = vec![Node::rigid(1.0, 4.0, 1.5), Node::from(Marker(3))];
        assert_eq!(ListBox::vbox(ends_in_marker).depth(), 0.0);
    }

    #[test]
    fn width_is_widest_box() {
        let list = vec![
            Node::rigid(3.0, 1.0, 0.0),
            Node::kern(100.0),
            Node::rigid(8.0, 1.0, 0.0),
            Node::rigid(2.0, 1.0, 0.0),
        ];
        assert_eq!(ListBox::vbox(list).width(), 8.0);
    }

    #[test]
    fn target_uses_highest_order_only() {
        let list = vec![
            Node::rigid(1.0, 5.0, 0.0),
            Node::from(Glue::new(2.0, GlueSpec::NONE, GlueSpec::finite(10.0))),
            Node::rigid(1.0, 5.0, 0.0),
            Node::from(Glue::fil()),
        ];
        let (b, result) = ListBox::vbox_to(list, 20.0);
        assert_eq!(result, BoxingResult::Normal);
        assert_eq!(b.height(), 20.0);
        assert_eq!(b.glue_setting().ratio, 8.0);

        // The finite glue keeps its nominal space: only the fil glue grows.
        let origins: Vec<Point> = b.placements().iter().map(|p| p.origin).collect();
        assert_eq!(origins, vec![Point::new(0.0, -15.0), Point::new(0.0, -8.0)]);
    }

    #[test]
    fn finite_shrink_can_leave_overfull() {
        let list = vec![
            Node::rigid(1.0, 10.0, 0.0),
            Node::from(Glue::new(4.0, GlueSpec::finite(1.0), GlueSpec::NONE)),
            Node::rigid(1.0, 10.0, 0.0),
        ];
        let (b, result) = ListBox::vbox_to(list.clone(), 20.0);
        assert_eq!(result, BoxingResult::Overfull);
        assert_eq!(b.height(), 23.0);

        let (b, result) = ListBox::vbox_to(list, 23.5);
        assert_eq!(result, BoxingResult::Normal);
        assert_eq!(b.height(), 23.5);
    }

    #[test]
    fn classification_matches_final_height() {
        let list = vec![
            Node::rigid(1.0, 10.0, 1.0),
            Node::from(Glue::new(2.0, GlueSpec::finite(1.0), GlueSpec::finite(3.0))),
            Node::rigid(1.0, 10.0, 1.0),
        ];
        for desired in [0.0, 20.0, 23.0, 24.0, 25.0, 26.0, 40.0] {
            let (b, result) = ListBox::vbox_to(list.clone(), desired);
            let expected = if b.height() < desired {
                BoxingResult::Underfull
            } else if b.height() > desired {
                BoxingResult::Overfull
            } else {
                BoxingResult::Normal
            };
            assert_eq!(result, expected, "desired {desired}");
        }
    }

    #[test]
    fn top_transform_keeps_total_extent() {
        let list = two_lines();
        let b = ListBox::vbox(list.clone());
        let t = ListBox::vtop(list.clone());
        assert_eq!(b.total_extent(), t.total_extent());
        assert_eq!(t.height(), 10.0, "first box height");
        assert_eq!(t.depth(), 14.0);

        let (t, result) = ListBox::vtop_to(list, 30.0);
        assert_eq!(result, BoxingResult::Underfull);
        assert_eq!(t.height(), 10.0);
        assert_eq!(t.total_extent(), 24.0);
    }

    #[test]
    fn top_of_list_starting_with_glue_is_top_edge() {
        let list = vec![Node::kern(2.0), Node::rigid(1.0, 3.0, 1.0)];
        let t = ListBox::vtop(list);
        assert_eq!(t.height(), 0.0);
        assert_eq!(t.depth(), 6.0);
    }

    #[test]
    fn split_at_height_is_bookkeeping_only() {
        let mut b = ListBox::vbox(two_lines());
        b.change_height(4.0);
        assert_eq!(b.height(), 4.0);
        assert_eq!(b.depth(), 20.0);
        assert_eq!(b.list().len(), 3);
        assert_eq!(b.measure().dims.height, 22.0, "the list still measures the same");
    }

    #[test]
    fn horizontal_axis_sums_widths() {
        let list = vec![
            Node::rigid(3.0, 7.0, 1.0),
            Node::from(Glue::new(1.0, GlueSpec::finite(0.5), GlueSpec::finite(1.0))),
            Node::rigid(4.0, 5.0, 2.0),
            Node::kern(0.5),
        ];
        let m = measure(Axis::Horizontal, &list);
        assert_eq!(m.dims, Dimensions::new(8.5, 7.0, 2.0));
        assert_eq!(m.along(Axis::Horizontal), 8.5);

        let (b, result) = ListBox::hbox_to(list, 9.0);
        assert_eq!(result, BoxingResult::Normal);
        assert_eq!(b.dims(), Dimensions::new(9.0, 7.0, 2.0));
        let origins: Vec<Point> = b.placements().iter().map(|p| p.origin).collect();
        assert_eq!(origins, vec![Point::new(0.0, 0.0), Point::new(4.5, 0.0)]);
    }

    #[test]
    fn nested_boxes_measure_by_cached_dims() {
        let inner = ListBox::hbox(vec![Node::rigid(3.0, 7.0, 1.0), Node::rigid(4.0, 5.0, 2.0)]);
        let outer = ListBox::vbox(vec![Node::from(inner), Node::rigid(2.0, 1.0, 0.5)]);
        assert_eq!(outer.dims(), Dimensions::new(7.0, 10.0, 0.5));
    }

    #[test]
    fn placements_walk_from_the_top() {
        let b = ListBox::vbox(two_lines());
        let placements = b.placements();
        assert_eq!(placements.len(), 2);
        assert_eq!(placements[0].index, 0);
        assert_eq!(placements[0].origin, Point::new(0.0, -12.0));
        assert_eq!(placements[1].index, 2);
        assert_eq!(placements[1].origin, Point::new(0.0, 0.0), "last baseline is the reference");
    }

    #[test]
    fn prev_depth_tracks_last_box() {
        assert_eq!(ListBox::vbox(List::new()).prev_depth(), PrevDepth::Ignore);
        let b = ListBox::vbox(vec![Node::rigid(1.0, 2.0, 3.0), Node::kern(1.0)]);
        assert_eq!(b.prev_depth(), PrevDepth::Depth(3.0));
    }
}
