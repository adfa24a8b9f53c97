//! Performance benchmarks for serialization and frame rendering
//!
//! Measures the per-keystroke cost: parsing the editor buffer, serializing
//! the document, and drawing a full frame.
//! Run with: cargo bench

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ratatui::{backend::TestBackend, Terminal};
use serde_json::{json, Value};
use specdeck::adapters::MockHttpClient;
use specdeck::app::{App, EditorTab};
use specdeck::assistant::{AssistantPanel, CompletionClient, SessionCredential};
use specdeck::spec::{SpecFormat, SpecStore};
use specdeck::ui;

/// Generate a document with `paths` endpoints, each with a few responses
fn generate_document(paths: usize) -> Value {
    let mut map = serde_json::Map::new();
    for i in 0..paths {
        map.insert(
            format!("/resource{}/{{id}}", i),
            json!({
                "get": {
                    "summary": format!("Fetch resource {}", i),
                    "tags": ["resources"],
                    "responses": {
                        "200": {"description": "OK"},
                        "404": {"description": "Not found"}
                    }
                },
                "delete": {
                    "summary": format!("Delete resource {}", i),
                    "responses": {"204": {"description": "Deleted"}}
                }
            }),
        );
    }
    json!({
        "openapi": "3.0.0",
        "info": {"title": "Bench API", "version": "1.0.0"},
        "servers": [{"url": "https://api.example.com"}],
        "paths": Value::Object(map)
    })
}

fn app_for(doc: Value) -> App {
    let store = SpecStore::with_document(doc).expect("valid bench document");
    let client = CompletionClient::new(
        Arc::new(MockHttpClient::new()),
        "https://llm.invalid/v1",
        "gpt-3.5-turbo",
    );
    App::new(store, AssistantPanel::new(SessionCredential::default()), client)
}

/// Benchmark serializing the document in each format
fn bench_serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize");

    for size in [1, 10, 50, 200].iter() {
        let doc = generate_document(*size);
        for format in [SpecFormat::Yaml, SpecFormat::Json] {
            group.bench_with_input(
                BenchmarkId::new(format.label(), format!("{}_paths", size)),
                &doc,
                |b, doc| b.iter(|| black_box(format.serialize(black_box(doc)))),
            );
        }
    }

    group.finish();
}

/// Benchmark the parse-and-validate path taken on every code edit
fn bench_replace_from_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("replace_from_text");

    for size in [1, 10, 50, 200].iter() {
        let text = SpecFormat::Yaml
            .serialize(&generate_document(*size))
            .expect("serializable");
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_paths", size)),
            &text,
            |b, text| {
                let mut store = SpecStore::new();
                b.iter(|| black_box(store.replace_from_text(black_box(text))));
            },
        );
    }

    group.finish();
}

/// Benchmark drawing a full frame for each editor tab
fn bench_frame_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_render");

    for tab in EditorTab::ALL {
        let mut app = app_for(generate_document(50));
        app.tab = tab;
        let mut terminal = Terminal::new(TestBackend::new(160, 48)).expect("test backend");

        group.bench_function(tab.label(), |b| {
            b.iter(|| {
                terminal
                    .draw(|f| ui::render(f, &mut app))
                    .expect("draw");
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_serialize,
    bench_replace_from_text,
    bench_frame_render
);
criterion_main!(benches);
