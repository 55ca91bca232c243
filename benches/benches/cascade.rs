// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `understory_style_key` + `understory_cascade`.

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use std::sync::Once;

use understory_cascade::{
    ComponentState, Selector, Style, StyleDefn, StylePlacement, StyledComponent,
};
use understory_drawing::{Color, FlattenContext, LineType, Size, Unit};
use understory_style_key::{StyleKeys, StyleValues};

struct Node {
    element: &'static str,
    class: Option<&'static str>,
    parent: Option<Box<Node>>,
}

impl Node {
    /// A chain of `depth` `div`s with a classed `span` at the bottom.
    fn chain(depth: usize) -> Self {
        let mut node = None;
        for _ in 0..depth {
            node = Some(Box::new(Self {
                element: "div",
                class: Some("section"),
                parent: node,
            }));
        }
        Self {
            element: "span",
            class: Some("note warning"),
            parent: node,
        }
    }
}

impl StyledComponent for Node {
    fn id(&self) -> Option<&str> {
        None
    }

    fn element_name(&self) -> Option<&str> {
        Some(self.element)
    }

    fn style_class(&self) -> Option<&str> {
        self.class
    }

    fn parent(&self) -> Option<&dyn StyledComponent> {
        self.parent.as_deref().map(|p| p as &dyn StyledComponent)
    }
}

fn rules() -> Vec<StyleDefn> {
    let keys = StyleKeys::get();
    let mut rules = Vec::new();

    let mut base = Style::new();
    base.set_value(keys.font.size, Unit::pt(11.0));
    base.set_value(keys.fill.color, Color::BLACK);
    rules.push(StyleDefn::with_matcher(base, Selector::element("span")));

    let mut note = Style::new();
    note.set_value(keys.background.color, Color::WHITE);
    note.set_value(keys.padding.all, Unit::pt(4.0));
    rules.push(StyleDefn::with_matcher(note, Selector::class("note")));

    let mut nested = Style::new();
    nested.set_value(keys.border.style, LineType::Solid);
    nested.set_value(keys.border.width, Unit::pt(1.0));
    let section = Selector::class("section");
    let in_section = Selector::class("warning").with_ancestor(section, StylePlacement::Any);
    rules.push(StyleDefn::with_matcher(nested, in_section));

    let mut miss = Style::new();
    miss.set_value(keys.fill.color, Color::WHITE);
    rules.push(StyleDefn::with_matcher(miss, Selector::class("hidden")));
    rules
}

fn context() -> FlattenContext {
    FlattenContext::new(
        Size::new(595.0, 842.0),
        Size::new(400.0, 600.0),
        Size::new(6.0, 12.0),
        12.0,
    )
}

fn bench_values(c: &mut Criterion) {
    static PRINT_SIZES: Once = Once::new();
    PRINT_SIZES.call_once(|| {
        eprintln!(
            "sizes: Style={} StyleValues={} Unit={}",
            size_of::<Style>(),
            size_of::<StyleValues>(),
            size_of::<Unit>(),
        );
    });

    let keys = StyleKeys::get();
    let mut group = c.benchmark_group("style_key/values");

    group.bench_function("catalog", |b| b.iter(|| black_box(StyleKeys::get())));

    group.bench_function("value/hit", |b| {
        let mut style = Style::new();
        style.set_value(keys.size.width, Unit::pt(100.0));
        style.set_value(keys.font.size, Unit::pt(12.0));
        b.iter(|| black_box(style.value(keys.size.width)));
    });

    group.bench_function("value/miss", |b| {
        let style = Style::new();
        b.iter(|| black_box(style.value(keys.size.width)));
    });

    group.bench_function("set_value/new_style", |b| {
        b.iter_batched(
            Style::new,
            |mut style| {
                style.set_value(keys.size.width, Unit::pt(100.0));
                style.set_value(keys.fill.color, Color::BLACK);
                black_box(style);
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_cascade(c: &mut Criterion) {
    let rules = rules();
    let mut group = c.benchmark_group("cascade/merge");

    for depth in [1_usize, 8, 32] {
        let node = Node::chain(depth);
        group.bench_function(BenchmarkId::new("rules", depth), |b| {
            b.iter_batched(
                Style::new,
                |mut style| {
                    for rule in &rules {
                        rule.merge_into_for(&mut style, &node, ComponentState::Normal);
                    }
                    black_box(style);
                },
                BatchSize::SmallInput,
            );
        });
    }

    let keys = StyleKeys::get();
    let mut parent = Style::new();
    parent.set_value(keys.font.size, Unit::pt(14.0));
    parent.set_value(keys.fill.color, Color::BLACK);
    parent.set_value(keys.text.leading, Unit::pt(16.0));
    group.bench_function("inherited/fill_gaps", |b| {
        b.iter_batched(
            Style::new,
            |mut child| {
                parent.merge_inherited(&mut child, false, 0);
                black_box(child);
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_derive(c: &mut Criterion) {
    let keys = StyleKeys::get();
    let mut style = Style::new();
    style.set_value(keys.size.width, Unit::percent(50.0));
    style.set_value(keys.margins.all, Unit::em(1.0));
    style.set_value(keys.font.size, Unit::em(1.2));
    style.set_value(keys.border.style, LineType::Solid);
    style.set_value(keys.border.color, Color::BLACK);
    style.set_value(keys.border_left.width, Unit::pt(3.0));
    style.set_value(keys.background.color, Color::WHITE);

    let cx = context();
    let mut group = c.benchmark_group("cascade/derive");

    group.bench_function("flatten", |b| {
        b.iter_batched(
            || style.clone(),
            |mut style| {
                style.flatten(&cx);
                black_box(style);
            },
            BatchSize::SmallInput,
        );
    });

    let mut flat = style.clone();
    flat.flatten(&cx);
    group.bench_function("border_pens", |b| {
        b.iter(|| black_box(flat.create_border_pens()));
    });
    group.bench_function("position_options", |b| {
        b.iter(|| black_box(flat.create_position_options(false)));
    });
    group.bench_function("text_options", |b| {
        b.iter(|| black_box(flat.create_text_options()));
    });

    group.finish();
}

criterion_group!(benches, bench_values, bench_cascade, bench_derive);
criterion_main!(benches);
