// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scoped editing of a list box's content.

use kurbo::Axis;

use crate::builder::append_box;
use crate::{BaselineParams, BoxNode, BoxingResult, List, ListBox, Node};

/// Mutable access to a [`ListBox`]'s list for the duration of one session.
///
/// Dropping the editor reboxes the box at its natural size. The finalizers
/// consume the editor and replace that default:
///
/// - [`finish`](Self::finish) / [`finish_to`](Self::finish_to) rebox at natural or target size,
/// - [`finish_top`](Self::finish_top) / [`finish_top_to`](Self::finish_top_to) also apply the top transform,
/// - [`mark_done`](Self::mark_done) leaves the cached dimensions as they are.
///
/// Because finalizers take `self`, at most one of them runs per session.
///
/// ```rust
/// use understory_listbox::{ListBox, Node};
///
/// let mut vbox = ListBox::vbox(Vec::new());
/// {
///     let mut editor = vbox.edit();
///     editor.push(Node::rigid(5.0, 10.0, 2.0));
///     editor.push(Node::kern(3.0));
/// }
/// assert_eq!(vbox.height(), 15.0);
/// assert_eq!(vbox.depth(), 0.0);
/// ```
#[must_use = "dropping the editor immediately reboxes without any edit"]
#[derive(Debug)]
pub struct ListBoxEditor<'a> {
    target: &'a mut ListBox,
    done: bool,
}

impl<'a> ListBoxEditor<'a> {
    pub(crate) fn new(target: &'a mut ListBox) -> Self {
        Self {
            target,
            done: false,
        }
    }

    /// The list being edited.
    pub fn list(&self) -> &List {
        self.target.list()
    }

    /// The list being edited, mutably.
    pub fn list_mut(&mut self) -> &mut List {
        self.target.list_mut()
    }

    /// The box being edited. Its dimensions are those from before the session.
    pub fn target(&self) -> &ListBox {
        self.target
    }

    /// Appends a node verbatim.
    pub fn push(&mut self, node: impl Into<Node>) {
        self.target.list_mut().push(node.into());
    }

    /// Appends a box to a vertical list with interline glue, as a list builder would.
    ///
    /// The prevdepth is taken from the last box already in the list.
    /// Horizontal lists get the box with no spacing.
    pub fn push_box(&mut self, b: impl Into<BoxNode>, params: &BaselineParams) {
        match self.target.axis() {
            Axis::Vertical => {
                let mut prev_depth = self.target.prev_depth();
                append_box(self.target.list_mut(), b.into(), &mut prev_depth, params);
            }
            Axis::Horizontal => self.push(b.into()),
        }
    }

    /// Moves the baseline of the box without touching the list.
    ///
    /// This does not end the session, so the rebox on drop still applies.
    pub fn change_height(&mut self, h: f64) {
        self.target.set_split_at_height(h);
    }

    /// Ends the session with a natural-size rebox.
    pub fn finish(mut self) {
        self.done = true;
        self.target.rebox_natural();
    }

    /// Ends the session with a rebox to `desired` along the box's axis.
    pub fn finish_to(mut self, desired: f64) -> BoxingResult {
        self.done = true;
        self.target.rebox_to(desired)
    }

    /// Ends the session with a natural-size rebox followed by the top transform.
    pub fn finish_top(mut self) {
        self.done = true;
        self.target.rebox_natural();
        self.target.make_top();
    }

    /// Ends the session with a rebox to `desired` followed by the top transform.
    pub fn finish_top_to(mut self, desired: f64) -> BoxingResult {
        self.done = true;
        let result = self.target.rebox_to(desired);
        self.target.make_top();
        result
    }

    /// Ends the session without recomputing anything.
    ///
    /// The cached dimensions stay as they were, even if the list changed.
    pub fn mark_done(mut self) {
        self.done = true;
    }
}

impl Drop for ListBoxEditor<'_> {
    fn drop(&mut self) {
        if !self.done {
            log::trace!("list box edit ended without a finalizer; reboxing at natural size");
            self.target.rebox_natural();
        }
    }
}
