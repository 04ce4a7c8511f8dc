// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Building lists with automatic interline spacing.

use kurbo::Axis;

use crate::{BoxNode, BoxingResult, Glue, GlueSpec, List, ListBox, Node};

/// Raw prevdepth values at or below this mean "no previous box".
pub const PREV_DEPTH_SENTINEL: f64 = -10_000.0;

/// The prevdepth cursor: depth of the last box appended to a vertical list.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum PrevDepth {
    /// No box yet, or spacing before the next box is suppressed.
    #[default]
    Ignore,
    /// Depth of the most recently appended box.
    Depth(f64),
}

impl PrevDepth {
    /// Reads a raw prevdepth, mapping anything at or below [`PREV_DEPTH_SENTINEL`] to [`PrevDepth::Ignore`].
    pub fn from_raw(raw: f64) -> Self {
        if raw <= PREV_DEPTH_SENTINEL {
            Self::Ignore
        } else {
            Self::Depth(raw)
        }
    }

    /// The raw prevdepth value, [`PREV_DEPTH_SENTINEL`] for [`PrevDepth::Ignore`].
    pub const fn to_raw(self) -> f64 {
        match self {
            Self::Ignore => PREV_DEPTH_SENTINEL,
            Self::Depth(d) => d,
        }
    }
}

/// What the interline gap is compared against before falling back to lineskip.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LineSkipRule {
    /// Use baselineskip whenever the gap is non-negative.
    ///
    /// [`BaselineParams::line_skip_limit`] is carried but not consulted.
    #[default]
    Zero,
    /// Use baselineskip whenever the gap is at least [`BaselineParams::line_skip_limit`].
    Limit,
}

/// Parameters of the baseline/lineskip rule.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BaselineParams {
    /// Desired distance between consecutive baselines, plus the elasticity of the inserted gap.
    pub baseline_skip: Glue,
    /// Inserted verbatim when boxes would otherwise sit too close.
    pub line_skip: Glue,
    /// Threshold for [`LineSkipRule::Limit`].
    pub line_skip_limit: f64,
    /// How the gap is tested.
    pub rule: LineSkipRule,
}

impl Default for BaselineParams {
    fn default() -> Self {
        Self {
            baseline_skip: Glue::fixed(12.0),
            line_skip: Glue::fixed(1.0),
            line_skip_limit: 0.0,
            rule: LineSkipRule::Zero,
        }
    }
}

impl BaselineParams {
    /// Creates parameters with a zero lineskiplimit and [`LineSkipRule::Zero`].
    pub fn new(baseline_skip: Glue, line_skip: Glue) -> Self {
        Self {
            baseline_skip,
            line_skip,
            ..Self::default()
        }
    }

    /// The glue to put between a box of depth `prev_depth` and a following box of height `height`.
    pub fn interline_glue(&self, prev_depth: f64, height: f64) -> Glue {
        let gap = self.baseline_skip.space - prev_depth - height;
        let threshold = match self.rule {
            LineSkipRule::Zero => 0.0,
            LineSkipRule::Limit => self.line_skip_limit,
        };
        if gap >= threshold {
            Glue::new(gap, self.baseline_skip.shrink, self.baseline_skip.stretch)
        } else {
            log::trace!("interline gap {gap} below {threshold}; using lineskip");
            self.line_skip
        }
    }
}

/// Appends `b` to a vertical list, preceded by interline glue unless `prev_depth` is [`PrevDepth::Ignore`].
///
/// Afterwards `prev_depth` holds the depth of `b`.
pub fn append_box(
    list: &mut List,
    b: BoxNode,
    prev_depth: &mut PrevDepth,
    params: &BaselineParams,
) {
    let dims = b.dims();
    debug_assert!(dims.is_finite(), "box dimensions must be finite; got {dims:?}");
    if let PrevDepth::Depth(depth) = *prev_depth {
        list.push(Node::Glue(params.interline_glue(depth, dims.height)));
    }
    list.push(Node::Box(b));
    *prev_depth = PrevDepth::Depth(dims.depth);
}

/// Appends any node to a vertical list.
///
/// Boxes go through [`append_box`]; everything else is pushed unchanged and
/// leaves `prev_depth` alone.
pub fn append_node(
    list: &mut List,
    node: Node,
    prev_depth: &mut PrevDepth,
    params: &BaselineParams,
) {
    match node {
        Node::Box(b) => append_box(list, b, prev_depth, params),
        other @ (Node::Glue(_) | Node::Kern(_) | Node::Other(_)) => list.push(other),
    }
}

/// Incremental list construction along one axis.
///
/// Vertical builders apply the baseline rule between boxes. Horizontal
/// builders append nodes as given; spacing between words is the caller's.
#[derive(Clone, Debug)]
pub struct ListBuilder {
    axis: Axis,
    params: BaselineParams,
    prev_depth: PrevDepth,
    list: List,
}

impl ListBuilder {
    /// A vertical builder.
    pub fn vertical(params: BaselineParams) -> Self {
        Self {
            axis: Axis::Vertical,
            params,
            prev_depth: PrevDepth::Ignore,
            list: List::new(),
        }
    }

    /// A horizontal builder.
    pub fn horizontal() -> Self {
        Self {
            axis: Axis::Horizontal,
            params: BaselineParams::default(),
            prev_depth: PrevDepth::Ignore,
            list: List::new(),
        }
    }

    /// The axis this builder stacks along.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// The baseline parameters.
    pub fn params(&self) -> &BaselineParams {
        &self.params
    }

    /// Replaces the baseline parameters for subsequent boxes.
    pub fn set_params(&mut self, params: BaselineParams) {
        self.params = params;
    }

    /// The prevdepth cursor.
    pub fn prev_depth(&self) -> PrevDepth {
        self.prev_depth
    }

    /// Overrides the prevdepth cursor, e.g. [`PrevDepth::Ignore`] to suppress spacing before the next box.
    pub fn set_prev_depth(&mut self, prev_depth: PrevDepth) {
        self.prev_depth = prev_depth;
    }

    /// The list built so far.
    pub fn list(&self) -> &List {
        &self.list
    }

    /// Appends a box.
    pub fn push_box(&mut self, b: impl Into<BoxNode>) {
        match self.axis {
            Axis::Vertical => {
                append_box(&mut self.list, b.into(), &mut self.prev_depth, &self.params);
            }
            Axis::Horizontal => self.list.push(Node::Box(b.into())),
        }
    }

    /// Appends any node.
    pub fn push_node(&mut self, node: impl Into<Node>) {
        match self.axis {
            Axis::Vertical => {
                append_node(&mut self.list, node.into(), &mut self.prev_depth, &self.params);
            }
            Axis::Horizontal => self.list.push(node.into()),
        }
    }

    /// Appends a kern.
    pub fn push_kern(&mut self, space: f64) {
        self.push_node(Node::kern(space));
    }

    /// Appends glue.
    pub fn push_glue(&mut self, space: f64, shrink: GlueSpec, stretch: GlueSpec) {
        self.push_node(Glue::new(space, shrink, stretch));
    }

    /// Takes the finished list.
    pub fn into_list(self) -> List {
        self.list
    }

    /// Boxes the list at its natural size.
    pub fn into_box(self) -> ListBox {
        ListBox::new(self.axis, self.list)
    }

    /// Boxes the list to `desired` along the builder's axis.
    pub fn into_box_to(self, desired: f64) -> (ListBox, BoxingResult) {
        ListBox::new_to(self.axis, self.list, desired)
    }

    /// Boxes the list at its natural size, then moves the reference point to the first box's baseline.
    pub fn into_top(self) -> ListBox {
        let mut b = self.into_box();
        b.make_top();
        b
    }

    /// Boxes the list to `desired`, then moves the reference point to the first box's baseline.
    pub fn into_top_to(self, desired: f64) -> (ListBox, BoxingResult) {
        let (mut b, result) = self.into_box_to(desired);
        b.make_top();
        (b, result)
    }
}

#[cfg(test)]
mod tests {
    use super::{
        BaselineParams, LineSkipRule, ListBuilder, PREV_DEPTH_SENTINEL, PrevDepth, append_box,
        append_node,
    };
    use crate::{BoxNode, Dimensions, Glue, GlueSpec, List, Marker, Node};

    fn line(height: f64, depth: f64) -> BoxNode {
        BoxNode::Rigid(Dimensions::new(5.0, height, depth))
    }

    #[test]
    fn first_box_gets_no_spacing() {
        let params = BaselineParams::new(
            Glue::new(100.0, GlueSpec::finite(3.0), GlueSpec::fil(1.0)),
            Glue::fixed(50.0),
        );
        let mut list = List::new();
        let mut prev = PrevDepth::Ignore;
        append_box(&mut list, line(10.0, 2.0), &mut prev, &params);
        assert_eq!(list.len(), 1, "no glue before the first box");
        assert_eq!(prev, PrevDepth::Depth(2.0));
    }

    #[test]
    fn baseline_glue_fills_the_gap() {
        let skip = Glue::new(12.0, GlueSpec::finite(1.0), GlueSpec::finite(2.0));
        let params = BaselineParams::new(skip, Glue::fixed(1.0));
        let mut list = List::new();
        let mut prev = PrevDepth::Depth(3.0);
        append_box(&mut list, line(7.0, 1.0), &mut prev, &params);
        assert_eq!(list[0], Node::Glue(Glue::new(2.0, skip.shrink, skip.stretch)));
        assert!(list[1].is_box());
        assert_eq!(prev, PrevDepth::Depth(1.0));
    }

    #[test]
    fn negative_gap_uses_lineskip_verbatim() {
        let line_skip = Glue::new(1.0, GlueSpec::finite(0.5), GlueSpec::fil(1.0));
        let params = BaselineParams::new(Glue::fixed(12.0), line_skip);
        let mut list = List::new();
        let mut prev = PrevDepth::Depth(4.0);
        append_box(&mut list, line(9.0, 0.0), &mut prev, &params);
        assert_eq!(list[0], Node::Glue(line_skip));
    }

    #[test]
    fn zero_rule_ignores_line_skip_limit() {
        let mut params = BaselineParams::new(Glue::fixed(12.0), Glue::fixed(0.5));
        params.line_skip_limit = 2.0;
        // A gap of 1 is below the limit but not negative.
        assert_eq!(params.interline_glue(1.0, 10.0), Glue::fixed(1.0));

        params.rule = LineSkipRule::Limit;
        assert_eq!(params.interline_glue(1.0, 10.0), Glue::fixed(0.5));
        assert_eq!(params.interline_glue(0.0, 10.0), Glue::fixed(2.0));
    }

    #[test]
    fn non_box_nodes_leave_prev_depth_alone() {
        let params = BaselineParams::default();
        let mut list = List::new();
        let mut prev = PrevDepth::Depth(2.0);
        append_node(&mut list, Node::kern(3.0), &mut prev, &params);
        append_node(&mut list, Node::from(Marker(1)), &mut prev, &params);
        assert_eq!(prev, PrevDepth::Depth(2.0));
        assert_eq!(list.len(), 2);

        let mut prev = PrevDepth::Ignore;
        append_node(&mut list, Node::from(Glue::fil()), &mut prev, &params);
        assert_eq!(prev, PrevDepth::Ignore);
    }

    #[test]
    fn raw_sentinel_round_trips() {
        assert_eq!(PrevDepth::from_raw(PREV_DEPTH_SENTINEL), PrevDepth::Ignore);
        assert_eq!(PrevDepth::from_raw(-20_000.0), PrevDepth::Ignore);
        assert_eq!(PrevDepth::from_raw(-3.0), PrevDepth::Depth(-3.0));
        assert_eq!(PrevDepth::Ignore.to_raw(), PREV_DEPTH_SENTINEL);
    }

    #[test]
    fn builder_two_lines_scenario() {
        let params = BaselineParams::new(Glue::fixed(12.0), Glue::fixed(1.0));
        let mut builder = ListBuilder::vertical(params);
        assert_eq!(builder.prev_depth(), PrevDepth::Ignore);
        builder.push_box(Dimensions::new(5.0, 10.0, 2.0));
        assert_eq!(builder.prev_depth(), PrevDepth::Depth(2.0));
        builder.push_box(Dimensions::new(5.0, 10.0, 2.0));
        assert_eq!(builder.prev_depth(), PrevDepth::Depth(2.0));

        let list = builder.into_list();
        assert_eq!(list.len(), 3);
        assert_eq!(list[1], Node::Glue(Glue::fixed(0.0)));
    }

    #[test]
    fn horizontal_builder_inserts_nothing() {
        let mut builder = ListBuilder::horizontal();
        builder.push_box(Dimensions::new(5.0, 10.0, 2.0));
        builder.push_box(Dimensions::new(5.0, 10.0, 2.0));
        assert_eq!(builder.list().len(), 2);
        assert_eq!(builder.prev_depth(), PrevDepth::Ignore);
    }
}
