use criterion::{black_box, Criterion};
use ncubic::{evaluate, CurveKind, DEFAULT_STEP};
use crate::common::samples::{MANY_POINTS, POINTS};

pub fn few(c: &mut Criterion) {
    for kind in CurveKind::ALL {
        c.bench_function(&format!("{} 10 points", kind), |b| {
            b.iter(|| evaluate(black_box(&POINTS[..]), kind, DEFAULT_STEP).fold(0.0, |acc, p| acc + p.x))
        });
    }
}

pub fn many(c: &mut Criterion) {
    for kind in [CurveKind::Hermite, CurveKind::BSpline] {
        c.bench_function(&format!("{} 200 points", kind), |b| {
            b.iter(|| evaluate(black_box(&MANY_POINTS[..]), kind, DEFAULT_STEP).count())
        });
    }
}

pub fn all(c: &mut Criterion) {
    few(c);
    many(c);
}
