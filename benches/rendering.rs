//! Performance benchmarks for slackdown
//!
//! Run with: cargo bench

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use slackdown::Options;

/// Sample messages of various shapes
mod samples {
    pub const TINY: &str = "Hello, *world*!";

    pub const MESSAGE: &str = "Hey <@U024BE7LH|bob>, the deploy for <#C024BE7LR|ops> is *done* :tada:\n\
        &gt; _all_ green, see <https://ci.example.com/build/42|build 42>\n\
        ```cargo test --release\nok```";

    pub fn prose() -> String {
        "Plain words without any markup at all, just a long paragraph of prose. ".repeat(200)
    }

    pub fn mixed() -> String {
        "`code` *bold* _italic_ ~struck~ <@U1|ann> :wave: ".repeat(200)
    }

    pub fn block_quotes() -> String {
        "&gt; quoted line\n".repeat(5_000)
    }

    pub fn delimiters() -> String {
        "* _ ~ ".repeat(5_000)
    }
}

fn bench_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");
    let options = Options::markdown();

    group.throughput(Throughput::Bytes(samples::TINY.len() as u64));
    group.bench_function("tiny", |b| {
        b.iter(|| slackdown::render(black_box(samples::TINY), &options))
    });

    group.throughput(Throughput::Bytes(samples::MESSAGE.len() as u64));
    group.bench_function("message", |b| {
        b.iter(|| slackdown::render(black_box(samples::MESSAGE), &options))
    });

    let prose = samples::prose();
    group.throughput(Throughput::Bytes(prose.len() as u64));
    group.bench_function("prose", |b| {
        b.iter(|| slackdown::render(black_box(prose.as_str()), &options))
    });

    let mixed = samples::mixed();
    group.throughput(Throughput::Bytes(mixed.len() as u64));
    group.bench_function("mixed", |b| {
        b.iter(|| slackdown::render(black_box(mixed.as_str()), &options))
    });

    group.finish();
}

fn bench_pathological(c: &mut Criterion) {
    let mut group = c.benchmark_group("pathological");
    group.sample_size(20); // Fewer samples for slow cases

    let quotes = samples::block_quotes();
    group.throughput(Throughput::Bytes(quotes.len() as u64));
    group.bench_function("block_quotes", |b| {
        b.iter(|| slackdown::expand_markdown(black_box(&quotes)))
    });

    let delimiters = samples::delimiters();
    group.throughput(Throughput::Bytes(delimiters.len() as u64));
    group.bench_function("delimiters", |b| {
        b.iter(|| slackdown::expand_markdown(black_box(&delimiters)))
    });

    group.finish();
}

fn bench_buffer_reuse(c: &mut Criterion) {
    let mut group = c.benchmark_group("buffer_reuse");
    let options = Options::markdown();
    let input = samples::MESSAGE;
    group.throughput(Throughput::Bytes(input.len() as u64));

    group.bench_function("without_reuse", |b| {
        b.iter(|| slackdown::render(black_box(input), &options))
    });

    group.bench_function("with_reuse", |b| {
        let mut buffer = String::with_capacity(input.len() * 2);
        b.iter(|| {
            slackdown::render_into(black_box(input), &mut buffer, &options);
            black_box(&buffer);
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_rendering,
    bench_pathological,
    bench_buffer_reuse
);
criterion_main!(benches);
