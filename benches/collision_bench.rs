use collision2d::{detect_and_resolve, Circle, Line, Rect, Shape, Vec2, DETECT_ONLY};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

// --- Helpers building representative shape pairs ---

fn overlapping_circles() -> (Shape, Shape) {
    (
        Shape::Circle(Circle::new(Vec2::new(0.0, 0.0), 5.0)),
        Shape::Circle(Circle::new(Vec2::new(8.0, 0.0), 4.0)),
    )
}

fn overlapping_rects() -> (Shape, Shape) {
    (
        Shape::Rect(Rect::new(Vec2::new(0.0, 0.0), 10.0, 10.0, 30.0)),
        Shape::Rect(Rect::new(Vec2::new(7.0, 2.0), 8.0, 6.0, 75.0)),
    )
}

fn line_across_rect() -> (Shape, Shape) {
    (
        Shape::Line(Line::new(Vec2::new(-10.0, 1.0), Vec2::new(10.0, -1.0))),
        Shape::Rect(Rect::new(Vec2::new(0.0, 0.0), 6.0, 6.0, 15.0)),
    )
}

fn disjoint_rects() -> (Shape, Shape) {
    (
        Shape::Rect(Rect::new(Vec2::new(0.0, 0.0), 10.0, 10.0, 30.0)),
        Shape::Rect(Rect::new(Vec2::new(50.0, 0.0), 8.0, 6.0, 75.0)),
    )
}

fn bench_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("detect");

    group.bench_function("circle_circle", |bencher| {
        let (a, b) = overlapping_circles();
        bencher.iter(|| {
            let (mut a, mut b) = (black_box(a), black_box(b));
            detect_and_resolve(&mut a, &mut b, DETECT_ONLY)
        });
    });

    group.bench_function("rect_rect_sat", |bencher| {
        let (a, b) = overlapping_rects();
        bencher.iter(|| {
            let (mut a, mut b) = (black_box(a), black_box(b));
            detect_and_resolve(&mut a, &mut b, DETECT_ONLY)
        });
    });

    group.bench_function("rect_rect_sat_early_exit", |bencher| {
        let (a, b) = disjoint_rects();
        bencher.iter(|| {
            let (mut a, mut b) = (black_box(a), black_box(b));
            detect_and_resolve(&mut a, &mut b, DETECT_ONLY)
        });
    });

    group.bench_function("line_rect_sat", |bencher| {
        let (a, b) = line_across_rect();
        bencher.iter(|| {
            let (mut a, mut b) = (black_box(a), black_box(b));
            detect_and_resolve(&mut a, &mut b, DETECT_ONLY)
        });
    });

    group.finish();
}

fn bench_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");

    group.bench_function("circle_circle_split", |bencher| {
        let (a, b) = overlapping_circles();
        bencher.iter(|| {
            let (mut a, mut b) = (black_box(a), black_box(b));
            detect_and_resolve(&mut a, &mut b, black_box(0.5));
            (a, b)
        });
    });

    group.bench_function("rect_rect_split", |bencher| {
        let (a, b) = overlapping_rects();
        bencher.iter(|| {
            let (mut a, mut b) = (black_box(a), black_box(b));
            detect_and_resolve(&mut a, &mut b, black_box(0.5));
            (a, b)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_detection, bench_resolution);
criterion_main!(benches);
