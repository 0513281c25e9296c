// SPDX-License-Identifier: MPL-2.0
use canvas_toolbar::config::MemoryStore;
use canvas_toolbar::diagnostics::DiagnosticsHandle;
use canvas_toolbar::i18n::{lookup, resolve, LocaleCatalog, LocaleState};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use std::rc::Rc;

fn lookup_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");

    let catalog = LocaleCatalog::builtin();
    let dictionary = catalog.dictionary(&catalog.default_locale());
    let diagnostics = DiagnosticsHandle::default();

    group.bench_function("resolve_hit", |b| {
        b.iter(|| black_box(resolve(&dictionary, black_box("dialog.hyperlink.warning.invalidUrl"))));
    });

    group.bench_function("lookup_miss", |b| {
        b.iter(|| {
            black_box(lookup(&dictionary, black_box("toolbar.doesNotExist"), &diagnostics))
        });
    });

    let state = LocaleState::with_system_locale(
        catalog,
        Rc::new(MemoryStore::new()),
        Some("en-US"),
        DiagnosticsHandle::default(),
    );
    group.bench_function("state_t", |b| {
        b.iter(|| black_box(state.t(black_box("toolbar.formatPainter"))));
    });

    group.bench_function("switch_locale", |b| {
        let mut english = false;
        b.iter(|| {
            english = !english;
            state.set_locale(if english { "en-US" } else { "zh-CN" });
        });
    });

    group.finish();
}

criterion_group!(benches, lookup_benchmark);
criterion_main!(benches);
