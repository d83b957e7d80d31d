// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer basics.
//!
//! Two adjacent buttons share an edge. This example presses on the shared
//! edge, releases off a button, and reuses a touch id without releasing it.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p understory_demos --example pointer_basics`

use std::cell::RefCell;
use std::rc::Rc;

use understory_pointer::component::{Button, Component};
use understory_pointer::container::Container;
use understory_pointer::geometry::IntRect;
use understory_pointer::types::TouchId;

type Journal = Rc<RefCell<Vec<String>>>;

struct LabeledButton {
    label: &'static str,
    journal: Journal,
}

impl Button for LabeledButton {
    fn press(&mut self) {
        self.journal
            .borrow_mut()
            .push(format!("{} pressed", self.label));
    }

    fn release(&mut self, inside: bool) {
        let what = if inside { "clicked" } else { "cancelled" };
        self.journal
            .borrow_mut()
            .push(format!("{} {what}", self.label));
    }
}

impl Component for LabeledButton {
    fn as_button(&mut self) -> Option<&mut dyn Button> {
        Some(self)
    }
}

fn main() {
    env_logger::init();

    let journal: Journal = Rc::default();
    let mut root = Container::with_frame(IntRect::new(0, 0, 200, 100));
    let a = root.add_child(LabeledButton {
        label: "A",
        journal: journal.clone(),
    });
    let b = root.add_child(LabeledButton {
        label: "B",
        journal: journal.clone(),
    });
    root.set_child_bounds(a, IntRect::new(0, 0, 50, 50));
    root.set_child_bounds(b, IntRect::new(50, 0, 100, 50));
    root.clear_dirty();

    println!("== Press on the shared edge (50, 25) ==");
    let consumed = root.handle_pressed(TouchId(1), 50, 25);
    root.handle_released(TouchId(1), 50, 25);
    println!("  consumed: {consumed}");
    flush(&journal);

    println!("\n== Press A, release far away ==");
    root.handle_pressed(TouchId(1), 25, 25);
    root.handle_released(TouchId(1), 999, 999);
    flush(&journal);

    println!("\n== Press A, then reuse id 1 on B ==");
    root.handle_pressed(TouchId(1), 25, 25);
    root.handle_pressed(TouchId(1), 75, 25);
    println!("  A capture: {:?}", root.capture(a));
    println!("  B capture: {:?}", root.capture(b));
    root.handle_released(TouchId(1), 75, 25);
    flush(&journal);
}

fn flush(journal: &Journal) {
    for line in journal.borrow_mut().drain(..) {
        println!("  {line}");
    }
}
