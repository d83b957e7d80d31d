// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nested containers fed by a Kurbo-based layout pass.
//!
//! A toolbar container holds a row of buttons and sits above a canvas that
//! takes touches and the mouse directly. A tiny row layout computes float
//! rectangles with Kurbo and converts them to integer frames. A scripted event
//! stream is then routed through the root.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_demos --example pointer_nested`

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Rect, Size};
use understory_pointer::component::{Button, Component, MouseHandler, TouchHandler};
use understory_pointer::container::Container;
use understory_pointer::geometry::{IntPoint, IntRect};
use understory_pointer::types::{PointerEvent, TouchId};

type Journal = Rc<RefCell<Vec<String>>>;

struct ToolButton {
    name: &'static str,
    journal: Journal,
}

impl Button for ToolButton {
    fn press(&mut self) {}

    fn release(&mut self, inside: bool) {
        if inside {
            self.journal
                .borrow_mut()
                .push(format!("tool {} selected", self.name));
        }
    }
}

impl Component for ToolButton {
    fn as_button(&mut self) -> Option<&mut dyn Button> {
        Some(self)
    }
}

struct Canvas {
    journal: Journal,
}

impl TouchHandler for Canvas {
    fn press(&mut self, touch: TouchId, x: i32, y: i32) -> bool {
        self.journal
            .borrow_mut()
            .push(format!("stroke {} starts at ({x}, {y})", touch.0));
        true
    }

    fn release(&mut self, touch: TouchId, x: i32, y: i32) {
        self.journal
            .borrow_mut()
            .push(format!("stroke {} ends at ({x}, {y})", touch.0));
    }
}

impl MouseHandler for Canvas {
    fn move_to(&mut self, x: i32, y: i32) -> bool {
        self.journal
            .borrow_mut()
            .push(format!("cursor over canvas at ({x}, {y})"));
        true
    }

    fn press_left(&mut self, _x: i32, _y: i32) -> bool {
        true
    }

    fn release_left(&mut self, x: i32, y: i32) {
        self.journal
            .borrow_mut()
            .push(format!("mouse stroke ends at ({x}, {y})"));
    }
}

impl Component for Canvas {
    fn as_touch_handler(&mut self) -> Option<&mut dyn TouchHandler> {
        Some(self)
    }

    fn as_mouse_handler(&mut self) -> Option<&mut dyn MouseHandler> {
        Some(self)
    }
}

/// Split `area` into `n` equal cells laid out left to right.
fn row(area: Rect, n: usize, gap: f64) -> Vec<Rect> {
    let w = (area.width() - gap * (n as f64 - 1.0)) / n as f64;
    (0..n)
        .map(|i| {
            let x0 = area.x0 + i as f64 * (w + gap);
            Rect::from_origin_size((x0, area.y0), Size::new(w, area.height()))
        })
        .collect()
}

fn main() {
    env_logger::init();
    let journal: Journal = Rc::default();

    let screen = Rect::new(0.0, 0.0, 320.0, 240.0);
    let toolbar_rect = Rect::new(0.0, 0.0, 320.0, 40.0);
    let canvas_rect = Rect::new(0.0, 40.0, 320.0, 240.0);

    let mut root = Container::with_frame(IntRect::from_kurbo(screen));
    let canvas = root.add_child(Canvas {
        journal: journal.clone(),
    });
    let toolbar = root.add_child(Container::new());
    root.set_child_bounds(canvas, IntRect::from_kurbo(canvas_rect));
    root.set_child_bounds(toolbar, IntRect::from_kurbo(toolbar_rect));

    // Lay the toolbar out; its frame is in the root's parent space.
    let bar = root
        .child_container_mut(toolbar)
        .expect("toolbar is a container");
    bar.set_frame(IntRect::from_kurbo(toolbar_rect));
    let cells = row(Rect::new(0.0, 0.0, 320.0, 40.0).inset(-4.0), 3, 4.0);
    for (name, cell) in ["pen", "eraser", "fill"].into_iter().zip(cells) {
        let id = bar.add_child(ToolButton {
            name,
            journal: journal.clone(),
        });
        bar.set_child_bounds(id, IntRect::from_kurbo(cell));
        println!("{name:>8}: {:?}", bar.child_frame(id));
    }
    bar.clear_dirty();
    root.clear_dirty();

    let at = |x, y| IntPoint::new(x, y);
    let script = [
        PointerEvent::TouchPressed {
            id: TouchId(3),
            pos: at(160, 20),
        },
        PointerEvent::TouchReleased {
            id: TouchId(3),
            pos: at(165, 22),
        },
        PointerEvent::TouchPressed {
            id: TouchId(4),
            pos: at(40, 120),
        },
        PointerEvent::TouchReleased {
            id: TouchId(4),
            pos: at(300, 10),
        },
        PointerEvent::MouseMoved { pos: at(100, 100) },
        PointerEvent::MousePressed { pos: at(100, 100) },
        PointerEvent::MouseReleased { pos: at(120, 140) },
        PointerEvent::TouchPressed {
            id: TouchId(5),
            pos: at(20, 20),
        },
        PointerEvent::TouchReleased {
            id: TouchId(5),
            pos: at(0, 0),
        },
    ];

    println!("\n== Events ==");
    for event in script {
        let consumed = root.dispatch(event);
        println!("{event:?} -> consumed: {consumed}");
        for line in journal.borrow_mut().drain(..) {
            println!("    {line}");
        }
    }
}
