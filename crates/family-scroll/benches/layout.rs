use std::rc::Rc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use family_scroll::{EdgeInsets, FamilyConfig, FamilyScrollView, Size, SpacingTable};

const VIEWPORT: Size = Size {
    width: 1080.0,
    height: 1920.0,
};
const CHILD_COUNT_SAMPLES: &[usize] = &[4, 16, 64, 256];

struct StackFixture {
    view: FamilyScrollView,
    content_height: f32,
}

impl StackFixture {
    fn new(children: usize) -> Self {
        let config = FamilyConfig::default()
            .with_default_margins(EdgeInsets::vertical(8.0))
            .with_default_padding(EdgeInsets::symmetric(12.0, 4.0));
        let view = FamilyScrollView::new(config, Rc::new(SpacingTable::from_config(&config)));
        for index in 0..children {
            let height = 200.0 + (index % 7) as f32 * 150.0;
            if index % 3 == 0 {
                view.insert_wrapping(Size::new(VIEWPORT.width, height));
            } else {
                view.insert_plain(Size::new(VIEWPORT.width, height));
            }
        }
        view.set_viewport(VIEWPORT);
        let content_height = view.current_content_size().height;
        Self {
            view,
            content_height,
        }
    }
}

fn bench_full_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_layout");
    for &children in CHILD_COUNT_SAMPLES {
        let fixture = StackFixture::new(children);
        group.bench_with_input(BenchmarkId::from_parameter(children), &children, |b, _| {
            b.iter(|| {
                fixture.view.invalidate_cache();
                fixture.view.run_layout();
                black_box(fixture.view.current_content_size());
            });
        });
    }
    group.finish();
}

fn bench_scroll_sync(c: &mut Criterion) {
    let mut group = c.benchmark_group("scroll_sync");
    for &children in CHILD_COUNT_SAMPLES {
        let fixture = StackFixture::new(children);
        let step = (fixture.content_height / 64.0).max(1.0);
        group.bench_with_input(BenchmarkId::from_parameter(children), &children, |b, _| {
            let mut offset = 0.0;
            b.iter(|| {
                offset = (offset + step) % fixture.content_height.max(1.0);
                fixture.view.set_content_offset(black_box(offset));
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_full_layout, bench_scroll_sync);
criterion_main!(benches);
