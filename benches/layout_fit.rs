// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use iced::Size;
use iced_lightbox::catalog::Dimensions;
use iced_lightbox::config::SizingMode;
use iced_lightbox::ui::viewer::fit::{fit, Margins};
use std::hint::black_box;

fn layout_fit_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_fit");

    let container = Size::new(1920.0, 1080.0);
    let margins = Margins::new(100.0, 90.0);
    let photos = [
        Dimensions::new(6000, 4000),
        Dimensions::new(800, 1200),
        Dimensions::new(320, 240),
    ];

    for mode in [
        SizingMode::Default,
        SizingMode::Contain,
        SizingMode::Cover,
        SizingMode::Native,
    ] {
        group.bench_function(mode.as_str(), |b| {
            b.iter(|| {
                for photo in photos {
                    black_box(fit(
                        black_box(Some(photo)),
                        black_box(container),
                        margins,
                        mode,
                    ));
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, layout_fit_benchmark);
criterion_main!(benches);
