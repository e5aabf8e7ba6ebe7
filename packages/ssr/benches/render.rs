//! Measures building and serializing a large table, the shape of a typical server-rendered
//! listing page.
//!
//! Building and rendering are benchmarked separately so allocation in the builders
//! doesn't hide the cost of the serializer.

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use ztml_html::prelude::*;
use ztml_ssr::Renderer;

criterion_group!(mbenches, build_rows, render_rows, render_rows_pretty);
criterion_main!(mbenches);

const ADJECTIVES: &[&str] = &["pretty", "large", "big", "small", "tall", "short", "long"];
const NOUNS: &[&str] = &["table", "chair", "house", "bbq", "desk", "car", "pony"];

fn table(rows: usize) -> html::HtmlTable {
    html::table().class(["table", "table-hover"]).child(
        html::tbody().children((0..rows).map(|row| {
            html::tr()
                .custom_data_f("row", format_args!("{row}"))
                .if_class(row % 2 == 0, "even")
                .child(html::td().class("col-md-1").text_f(format_args!("{row}")))
                .child(
                    html::td().class("col-md-4").child(
                        html::a().href("#").text_f(format_args!(
                            "{} {}",
                            ADJECTIVES[row % ADJECTIVES.len()],
                            NOUNS[row % NOUNS.len()]
                        )),
                    ),
                )
                .child(
                    html::td().class("col-md-1").child(
                        html::span()
                            .class(["glyphicon", "glyphicon-remove"])
                            .z_req("/rows/remove")
                            .z_req_method(ZReqMethod::Post)
                            .attr("aria-hidden", "true"),
                    ),
                )
        })),
    )
}

fn build_rows(c: &mut Criterion) {
    c.bench_function("build 1_000 rows", |b| b.iter(|| black_box(table(1_000))));
}

fn render_rows(c: &mut Criterion) {
    let tree = table(1_000);
    let renderer = Renderer::new();
    c.bench_function("render 1_000 rows", |b| {
        b.iter(|| black_box(renderer.render(&tree)))
    });
}

fn render_rows_pretty(c: &mut Criterion) {
    let tree = table(1_000);
    let renderer = Renderer::pretty();
    c.bench_function("render 1_000 rows pretty", |b| {
        b.iter(|| black_box(renderer.render(&tree)))
    });
}
