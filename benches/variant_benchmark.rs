use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tagged_variant::{Variant, Visit, Visit2};

type Scalars = (u8, i32, u64, f64);
type Mixed = (i32, String, Vec<u8>);

#[derive(Clone, PartialEq, PartialOrd)]
enum StdScalars {
    A(u8),
    B(i32),
    C(u64),
    D(f64),
}

#[derive(Clone, PartialEq)]
enum StdMixed {
    Int(i32),
    Text(String),
    Bytes(Vec<u8>),
}

struct AsU64;

macro_rules! as_u64 {
    ($($ty:ty => |$v:ident| $body:expr),+ $(,)?) => {
        $(
            impl Visit<$ty> for AsU64 {
                type Output = u64;

                fn visit(&mut self, $v: &$ty) -> u64 {
                    $body
                }
            }
        )+
    };
}

as_u64! {
    u8 => |v| u64::from(*v),
    i32 => |v| u64::try_from(*v).unwrap_or(0),
    u64 => |v| *v,
    f64 => |v| v.to_bits(),
}

struct Len;

impl Visit<i32> for Len {
    type Output = usize;

    fn visit(&mut self, _: &i32) -> usize {
        4
    }
}

impl Visit<String> for Len {
    type Output = usize;

    fn visit(&mut self, value: &String) -> usize {
        value.len()
    }
}

impl Visit<Vec<u8>> for Len {
    type Output = usize;

    fn visit(&mut self, value: &Vec<u8>) -> usize {
        value.len()
    }
}

struct Pair;

impl<A, B> Visit2<A, B> for Pair {
    type Output = usize;

    fn visit2(&mut self, _: &A, _: &B) -> usize {
        core::mem::size_of::<A>() + core::mem::size_of::<B>()
    }
}

fn scalars(n: usize) -> Vec<Variant<Scalars>> {
    (0..n)
        .map(|i| match i % 4 {
            0 => Variant::<Scalars>::in_place::<0>(i as u8),
            1 => Variant::<Scalars>::in_place::<1>(i as i32),
            2 => Variant::<Scalars>::in_place::<2>(i as u64),
            _ => Variant::<Scalars>::in_place::<3>(i as f64),
        })
        .collect()
}

fn std_scalars(n: usize) -> Vec<StdScalars> {
    (0..n)
        .map(|i| match i % 4 {
            0 => StdScalars::A(i as u8),
            1 => StdScalars::B(i as i32),
            2 => StdScalars::C(i as u64),
            _ => StdScalars::D(i as f64),
        })
        .collect()
}

fn bench_visit(c: &mut Criterion) {
    let mut group = c.benchmark_group("visit");

    for size in [64, 1024] {
        let variants = scalars(size);
        let std = std_scalars(size);

        group.bench_with_input(BenchmarkId::new("variant_table", size), &variants, |b, variants| {
            b.iter(|| {
                let mut sum = 0u64;
                for v in variants {
                    sum = sum.wrapping_add(v.visit(&mut AsU64).unwrap_or(0));
                }
                black_box(sum)
            });
        });

        // Comparison with a hand-written enum match
        group.bench_with_input(BenchmarkId::new("std_enum_match", size), &std, |b, std| {
            b.iter(|| {
                let mut sum = 0u64;
                for v in std {
                    let x = match v {
                        StdScalars::A(x) => u64::from(*x),
                        StdScalars::B(x) => u64::try_from(*x).unwrap_or(0),
                        StdScalars::C(x) => *x,
                        StdScalars::D(x) => x.to_bits(),
                    };
                    sum = sum.wrapping_add(x);
                }
                black_box(sum)
            });
        });
    }

    let a = scalars(32);
    let b = scalars(33);
    group.bench_function("variant_visit2", |bench| {
        bench.iter(|| {
            let mut total = 0usize;
            for x in &a {
                for y in &b[1..] {
                    total += tagged_variant::access::visit2(&mut Pair, x, y).unwrap_or(0);
                }
            }
            black_box(total)
        });
    });

    group.finish();
}

fn bench_emplace(c: &mut Criterion) {
    let mut group = c.benchmark_group("emplace");

    group.bench_function("variant_scalar_cycle", |b| {
        let mut v: Variant<Scalars> = Variant::default();
        b.iter(|| {
            for i in 0..64u32 {
                match i % 4 {
                    0 => *v.emplace::<0>(black_box(i as u8)) += 1,
                    1 => *v.emplace::<1>(black_box(i as i32)) += 1,
                    2 => *v.emplace::<2>(black_box(u64::from(i))) += 1,
                    _ => *v.emplace::<3>(black_box(f64::from(i))) += 1.0,
                }
            }
            black_box(v.index())
        });
    });

    group.bench_function("std_enum_scalar_cycle", |b| {
        let mut v = StdScalars::A(0);
        b.iter(|| {
            for i in 0..64u32 {
                v = match i % 4 {
                    0 => StdScalars::A(black_box(i as u8)),
                    1 => StdScalars::B(black_box(i as i32)),
                    2 => StdScalars::C(black_box(u64::from(i))),
                    _ => StdScalars::D(black_box(f64::from(i))),
                };
            }
            black_box(&v);
        });
    });

    group.bench_function("variant_owning_set", |b| {
        let mut v: Variant<Mixed> = Variant::new(0i32);
        b.iter(|| {
            for i in 0..16i32 {
                if i % 2 == 0 {
                    v.set(String::from("payload"));
                } else {
                    v.set(black_box(i));
                }
            }
            black_box(v.visit(&mut Len))
        });
    });

    group.finish();
}

fn bench_clone_swap(c: &mut Criterion) {
    let mut group = c.benchmark_group("clone_swap");

    let scalars = scalars(256);
    let std = std_scalars(256);
    group.bench_function("variant_clone_trivial", |b| {
        b.iter(|| black_box(scalars.clone()));
    });
    group.bench_function("std_enum_clone_trivial", |b| {
        b.iter(|| black_box(std.clone()));
    });

    let mixed: Vec<Variant<Mixed>> = (0..256i32)
        .map(|i| match i % 3 {
            0 => Variant::<Mixed>::new(i),
            1 => Variant::<Mixed>::new(format!("item {i}")),
            _ => Variant::<Mixed>::new(vec![0u8; 16]),
        })
        .collect();
    let std_mixed: Vec<StdMixed> = (0..256i32)
        .map(|i| match i % 3 {
            0 => StdMixed::Int(i),
            1 => StdMixed::Text(format!("item {i}")),
            _ => StdMixed::Bytes(vec![0u8; 16]),
        })
        .collect();
    group.bench_function("variant_clone_owning", |b| {
        b.iter(|| black_box(mixed.clone()));
    });
    group.bench_function("std_enum_clone_owning", |b| {
        b.iter(|| black_box(std_mixed.clone()));
    });

    group.bench_function("variant_clone_from_same_slot", |b| {
        let source: Variant<Mixed> = Variant::new(String::from("a reasonably long source string"));
        let mut target: Variant<Mixed> = Variant::new(String::with_capacity(64));
        b.iter(|| {
            target.clone_from(black_box(&source));
            black_box(target.index())
        });
    });

    group.bench_function("variant_swap_across_slots", |b| {
        let mut x: Variant<Mixed> = Variant::new(7i32);
        let mut y: Variant<Mixed> = Variant::new(String::from("text"));
        b.iter(|| {
            x.swap(&mut y);
            black_box(x.index() + y.index())
        });
    });

    group.bench_function("std_enum_swap_across_variants", |b| {
        let mut x = StdMixed::Int(7);
        let mut y = StdMixed::Text(String::from("text"));
        b.iter(|| {
            core::mem::swap(&mut x, &mut y);
            black_box(&x);
        });
    });

    group.finish();
}

fn bench_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare");

    let a = scalars(256);
    let b = scalars(256);
    let sa = std_scalars(256);
    let sb = std_scalars(256);

    group.bench_function("variant_eq", |bench| bench.iter(|| black_box(a == b)));
    group.bench_function("std_enum_eq", |bench| bench.iter(|| black_box(sa == sb)));
    group.bench_function("variant_partial_cmp", |bench| {
        bench.iter(|| black_box(a.partial_cmp(&b)));
    });
    group.bench_function("std_enum_partial_cmp", |bench| {
        bench.iter(|| black_box(sa.partial_cmp(&sb)));
    });

    group.finish();
}

criterion_group!(benches, bench_visit, bench_emplace, bench_clone_swap, bench_compare);
criterion_main!(benches);
