// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_listbox --heading-base-level=0

//! Understory List Box: box-and-glue list boxes.
//!
//! This crate is the measuring core of a TeX-style layout engine. Content is
//! an ordered [`List`] of [`Node`]s (boxes, glue, kerns, and opaque markers),
//! stacked along one [`kurbo::Axis`]. A [`ListBox`] owns such a list and
//! caches the width, height and depth derived from it.
//!
//! The core concepts are:
//!
//! - [`Glue`]: elastic space with a nominal size plus stretch and shrink, each
//!   tagged with a [`GlueOrder`]. Infinite orders dominate finite ones.
//! - [`ListBuilder`] / [`append_box`]: appends boxes to a vertical list and
//!   inserts interline glue between them from [`BaselineParams`] (the
//!   baselineskip/lineskip rule), tracking the [`PrevDepth`] cursor.
//! - [`ListBox`]: measures its list ([`ListBox::rebox_natural`]), resolves it
//!   against a target size ([`ListBox::rebox_to`]) and reports a
//!   [`BoxingResult`], and can move its reference point to the baseline of its
//!   first box ([`ListBox::make_top`]).
//! - [`ListBoxEditor`]: the only way to mutate a box's list. It reboxes on
//!   drop unless one of its finalizers runs first, so cached dimensions never
//!   go stale by accident.
//!
//! This crate deliberately does **not** read markup, look up font metrics,
//! break paragraphs or pages, or paint anything. Hosts feed it already-measured
//! boxes and read back sizes, [`GlueSetting`]s, and child [`Placement`]s.
//!
//! ## Minimal example
//!
//! Two 10+2 lines with a 12 unit baselineskip:
//!
//! ```rust
//! use understory_listbox::{BaselineParams, BoxingResult, Dimensions, Glue, ListBuilder};
//!
//! let params = BaselineParams::new(Glue::fixed(12.0), Glue::fixed(1.0));
//! let mut builder = ListBuilder::vertical(params);
//! builder.push_box(Dimensions::new(5.0, 10.0, 2.0));
//! builder.push_box(Dimensions::new(5.0, 10.0, 2.0));
//!
//! // The second line gets a zero-sized baselineskip glue in front of it.
//! assert_eq!(builder.list().len(), 3);
//!
//! let (vbox, result) = builder.into_box_to(30.0);
//! // There is nothing to stretch, so the box stays at its natural height.
//! assert_eq!(result, BoxingResult::Underfull);
//! assert_eq!(vbox.dims(), Dimensions::new(5.0, 22.0, 2.0));
//! ```
//!
//! ## Logging
//!
//! Underfull and overfull boxes are reported through [`log`] at `debug` level.
//! Lineskip fallbacks and editor auto-reboxes are logged at `trace` level.
//!
//! This crate is `no_std` and uses `alloc`. Enable either the `std` (default)
//! or the `libm` feature for Kurbo.

#![no_std]

extern crate alloc;

mod builder;
mod dims;
mod editor;
mod glue;
mod glue_set;
mod list_box;
mod node;
mod totals;

pub use builder::{
    BaselineParams, LineSkipRule, ListBuilder, PREV_DEPTH_SENTINEL, PrevDepth, append_box,
    append_node,
};
pub use dims::Dimensions;
pub use editor::ListBoxEditor;
pub use glue::{Glue, GlueOrder, GlueSpec, Kern};
pub use glue_set::{BoxingResult, GlueSet, GlueSetting, GlueSign, INF_BAD, badness, set_glue};
pub use list_box::{ListBox, Measurement, Placement, measure};
pub use node::{BoxNode, List, Marker, Node};
pub use totals::{GlueAccumulator, GlueTotals};
