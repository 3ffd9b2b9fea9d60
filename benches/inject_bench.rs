// Copyright (c) 2026 Bountyy Oy. All rights reserved.

use std::io::Read;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use encoding_rs::UTF_8;
use webview_bridge::{InjectingReader, InjectionContext};

fn page() -> Vec<u8> {
    let mut html = String::from("<!DOCTYPE html>\n<html>\n<head><title>Bench</title></head>\n<body>\n");
    for i in 0..5_000 {
        html.push_str(&format!("<div class=\"row\"><a href=\"/item/{}\">Item {}</a></div>\n", i, i));
    }
    html.push_str("</body>\n</html>\n");
    html.into_bytes()
}

fn drain<R: Read>(mut reader: R, chunk: usize) -> usize {
    let mut buf = vec![0u8; chunk];
    let mut total = 0;
    loop {
        let n = reader.read(&mut buf).unwrap();
        if n == 0 {
            return total;
        }
        total += n;
    }
}

fn injection_benchmark(c: &mut Criterion) {
    let body = page();
    let ctx = InjectionContext::new(Some("window.WebViewBridge = { ready: true };"), UTF_8);

    c.bench_function("inject_8k_reads", |b| {
        b.iter(|| black_box(drain(InjectingReader::new(&body[..], &ctx), 8192)))
    });

    c.bench_function("inject_small_reads", |b| {
        b.iter(|| black_box(drain(InjectingReader::new(&body[..], &ctx), 64)))
    });

    c.bench_function("passthrough_8k_reads", |b| {
        let empty = InjectionContext::default();
        b.iter(|| black_box(drain(InjectingReader::new(&body[..], &empty), 8192)))
    });
}

criterion_group!(benches, injection_benchmark);
criterion_main!(benches);
