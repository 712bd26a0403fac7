//! Performance benchmarks for eh-detail.
//!
//! Run with: `cargo bench`
//!
//! Benchmarks include:
//! - The full pipeline over the test fixture detail page
//! - The raw-text pagination helpers used for lightweight checks
//! - Pages with a growing number of comments

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use eh_detail::{parse, parse_pages, parse_preview_page, parse_with_options, Options};

const SAMPLE_HTML: &str = include_str!("../tests/fixtures/gallery_detail.html");

const COMMENT: &str = r##"<a name="c{id}"></a><div class="c1"><div class="c2"><div class="c3">Posted on 02 April 2023, 08:15 by: &nbsp; <a href="https://e-hentai.org/uploader/reader">reader</a></div><div class="c4 nosel">[<a style="" href="#">Vote+</a>] &nbsp; [<a style="" href="#">Vote-</a>]</div><div class="c5 nosel"><span>+{id}</span></div></div><div class="c6">comment {id} with <span style="text-decoration:underline;">markup</span></div></div>"##;

fn bench_parse_default(c: &mut Criterion) {
    c.bench_function("parse_default", |b| {
        b.iter(|| parse(black_box(SAMPLE_HTML)));
    });
}

fn bench_parse_with_blacklists(c: &mut Criterion) {
    let options = Options {
        commenter_blacklist: Some(vec!["spammer".to_string(), "troll".to_string()]),
        comment_blacklist: Some(vec!["shop".to_string()]),
        ..Options::default()
    };

    c.bench_function("parse_with_blacklists", |b| {
        b.iter(|| parse_with_options(black_box(SAMPLE_HTML), black_box(&options)));
    });
}

fn bench_raw_pagination(c: &mut Criterion) {
    c.bench_function("parse_pages", |b| {
        b.iter(|| parse_pages(black_box(SAMPLE_HTML)));
    });
    c.bench_function("parse_preview_page", |b| {
        b.iter(|| parse_preview_page(black_box(SAMPLE_HTML)));
    });
}

/// Comment extraction dominates on popular galleries
fn bench_comment_heavy(c: &mut Criterion) {
    let mut group = c.benchmark_group("comment_heavy");

    for count in [10_usize, 100, 500] {
        let comments: String = (1..=count)
            .map(|id| COMMENT.replace("{id}", &id.to_string()))
            .collect();
        let html = SAMPLE_HTML.replace("<div id=\"cdiv\">", &format!("<div id=\"cdiv\">{comments}"));

        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(BenchmarkId::new("parse", count), &html, |b, html| {
            b.iter(|| parse(black_box(html)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_parse_default,
    bench_parse_with_blacklists,
    bench_raw_pagination,
    bench_comment_heavy
);
criterion_main!(benches);
