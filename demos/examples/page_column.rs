// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stacking lines into a fixed-height column.
//!
//! This example shows how to:
//! - build horizontal lines of "glyph" boxes with interword glue,
//! - stack them with the baselineskip/lineskip rule,
//! - set the column to a target height and inspect the outcome,
//! - edit the column afterwards and let the editor rebox it.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_listbox_demos --example page_column`

use understory_listbox::{BaselineParams, Dimensions, Glue, GlueSpec, ListBox, ListBuilder, Node};

/// Fake font metrics: every glyph is 0.5 wide, 7 tall, 2 deep.
fn word(len: usize) -> Vec<Node> {
    (0..len).map(|_| Node::rigid(0.5, 7.0, 2.0)).collect()
}

fn line(words: &[usize], width: f64) -> ListBox {
    let interword = Glue::new(1.0, GlueSpec::finite(0.3), GlueSpec::finite(0.5));
    let mut builder = ListBuilder::horizontal();
    for (i, len) in words.iter().enumerate() {
        if i > 0 {
            builder.push_node(interword);
        }
        for glyph in word(*len) {
            builder.push_node(glyph);
        }
    }
    let (hbox, result) = builder.into_box_to(width);
    println!(
        "line {words:?}: {result:?}, badness {}",
        hbox.glue_setting().badness()
    );
    hbox
}

fn main() {
    env_logger::init();

    let params = BaselineParams::new(
        Glue::new(12.0, GlueSpec::finite(0.5), GlueSpec::finite(1.0)),
        Glue::fixed(1.0),
    );
    let mut column = ListBuilder::vertical(params);
    column.push_box(line(&[3, 5, 2, 4], 12.0));
    column.push_box(line(&[6, 6], 12.0));
    // A tall display line: the baselineskip gap would be negative.
    column.push_box(Dimensions::new(10.0, 14.0, 4.0));
    column.push_box(line(&[2, 2, 2], 12.0));

    let (mut page, result) = column.into_box_to(60.0);
    let dims = page.dims();
    println!(
        "column: {result:?}, {}x{} (+{} depth), size {:?}",
        dims.width,
        dims.height,
        dims.depth,
        dims.size()
    );
    for placement in page.placements() {
        println!("  child {} at {:?}", placement.index, placement.origin);
    }

    // Add a footer without rebuilding; the editor reboxes on drop.
    {
        let mut editor = page.edit();
        editor.push(Glue::fil());
        editor.push_box(Dimensions::new(4.0, 6.0, 1.0), &params);
    }
    println!("after edit: {:?}", page.dims());

    let mut editor = page.edit();
    editor.push(Node::kern(2.0));
    let result = editor.finish_top_to(80.0);
    println!("as vtop to 80: {result:?}, {:?}", page.dims());
}
