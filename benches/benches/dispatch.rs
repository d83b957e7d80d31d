// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_pointer::component::{Button, Component, MouseHandler};
use understory_pointer::container::Container;
use understory_pointer::geometry::IntRect;
use understory_pointer::types::TouchId;

struct Key;

impl Button for Key {
    fn press(&mut self) {}
    fn release(&mut self, _inside: bool) {}
}

impl Component for Key {
    fn as_button(&mut self) -> Option<&mut dyn Button> {
        Some(self)
    }
}

struct Hover;

impl MouseHandler for Hover {
    fn move_to(&mut self, _x: i32, _y: i32) -> bool {
        true
    }
    fn press_left(&mut self, _x: i32, _y: i32) -> bool {
        true
    }
    fn release_left(&mut self, _x: i32, _y: i32) {}
}

impl Component for Hover {
    fn as_mouse_handler(&mut self) -> Option<&mut dyn MouseHandler> {
        Some(self)
    }
}

fn grid<C: Component + 'static>(n: i32, cell: i32, make: impl Fn() -> C) -> Container {
    let mut c = Container::with_frame(IntRect::new(0, 0, n * cell, n * cell));
    for y in 0..n {
        for x in 0..n {
            let id = c.add_child(make());
            c.set_child_bounds(id, IntRect::from_xywh(x * cell, y * cell, cell - 1, cell - 1));
        }
    }
    c.clear_dirty();
    c
}

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    fn next_coord(&mut self, max: i32) -> i32 {
        (self.next_u64() % max.unsigned_abs() as u64) as i32
    }
}

fn bench_touch(c: &mut Criterion) {
    let mut group = c.benchmark_group("touch_press_release");
    for n in [4_i32, 16, 32] {
        let cell = 20;
        let mut root = grid(n, cell, || Key);
        let mut rng = Rng(0x9E37_79B9_7F4A_7C15);
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(n * n), &n, |b, &n| {
            b.iter(|| {
                let x = rng.next_coord(n * cell);
                let y = rng.next_coord(n * cell);
                let hit = root.handle_pressed(TouchId(1), x, y);
                root.handle_released(TouchId(1), x, y);
                black_box(hit)
            });
        });
    }
    group.finish();
}

fn bench_mouse_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("mouse_move");
    for n in [4_i32, 16, 32] {
        let cell = 20;
        let mut root = grid(n, cell, || Hover);
        let mut rng = Rng(0xD1B5_4A32_D192_ED03);
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(n * n), &n, |b, &n| {
            b.iter(|| {
                let x = rng.next_coord(n * cell);
                let y = rng.next_coord(n * cell);
                black_box(root.handle_mouse_move(x, y))
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_touch, bench_mouse_move);
criterion_main!(benches);
