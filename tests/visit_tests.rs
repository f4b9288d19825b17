use std::fmt::Debug;

use tagged_variant::access::{visit, visit2, visit3, visit_mut};
use tagged_variant::{BadVariantAccess, Variant, Visit, Visit2, Visit3, VisitMut};

type Small = Variant<(u8, String, f64)>;

/// Renders the visited value with its type's `Debug`.
#[derive(Default)]
struct Show {
    calls: usize,
}

impl<A: Debug> Visit<A> for Show {
    type Output = String;

    fn visit(&mut self, value: &A) -> String {
        self.calls += 1;
        format!("{value:?}")
    }
}

impl<A: Debug, B: Debug> Visit2<A, B> for Show {
    type Output = String;

    fn visit2(&mut self, a: &A, b: &B) -> String {
        self.calls += 1;
        format!("{a:?}/{b:?}")
    }
}

impl<A: Debug, B: Debug, C: Debug> Visit3<A, B, C> for Show {
    type Output = String;

    fn visit3(&mut self, a: &A, b: &B, c: &C) -> String {
        self.calls += 1;
        format!("{a:?}/{b:?}/{c:?}")
    }
}

/// Grows every alternative in place.
struct Grow;

impl VisitMut<u8> for Grow {
    type Output = ();
    fn visit_mut(&mut self, value: &mut u8) {
        *value += 1;
    }
}

impl VisitMut<String> for Grow {
    type Output = ();
    fn visit_mut(&mut self, value: &mut String) {
        value.push('+');
    }
}

impl VisitMut<f64> for Grow {
    type Output = ();
    fn visit_mut(&mut self, value: &mut f64) {
        *value *= 2.0;
    }
}

fn samples() -> [Small; 3] {
    [
        Small::new(1u8),
        Small::new(String::from("s")),
        Small::new(0.5f64),
    ]
}

fn valueless() -> Small {
    let mut v = Small::new(0u8);
    assert!(v.try_emplace_with::<1, _, _>(|| Err(())).is_err());
    v
}

#[test]
fn test_visit_calls_the_live_alternative() {
    let rendered: Vec<_> = samples().iter().map(|v| v.visit(&mut Show::default())).collect();
    assert_eq!(rendered, [Ok("1".to_owned()), Ok("\"s\"".to_owned()), Ok("0.5".to_owned())]);
}

#[test]
fn test_visit_mut_updates_in_place() {
    let mut values = samples();
    for v in &mut values {
        assert_eq!(visit_mut(&mut Grow, v), Ok(()));
    }
    assert_eq!(values[0].get::<0>(), Ok(&2));
    assert_eq!(values[1].get::<1>().map(String::as_str), Ok("s+"));
    assert_eq!(values[2].get::<2>(), Ok(&1.0));
}

#[test]
fn test_visit2_covers_every_combination() {
    let left = samples();
    let right = samples();
    let mut show = Show::default();

    let mut seen = Vec::new();
    for a in &left {
        for b in &right {
            seen.push(visit2(&mut show, a, b).expect("both containers hold a value"));
        }
    }

    assert_eq!(show.calls, 9);
    assert_eq!(seen[0], "1/1");
    assert_eq!(seen[1], "1/\"s\"");
    assert_eq!(seen[5], "\"s\"/0.5");
    assert_eq!(seen[6], "0.5/1");
    assert_eq!(seen[8], "0.5/0.5");
}

#[test]
fn test_visit2_across_different_lists() {
    let a: Variant<(i32, char)> = Variant::new('q');
    let b: Small = Small::new(String::from("z"));
    assert_eq!(visit2(&mut Show::default(), &a, &b).as_deref(), Ok("'q'/\"z\""));
}

#[test]
fn test_visit3_is_deterministic() {
    let values = samples();
    let mut show = Show::default();

    let mut outputs = Vec::new();
    for a in &values {
        for b in &values {
            for c in &values {
                outputs.push(visit3(&mut show, a, b, c).expect("all containers hold a value"));
            }
        }
    }
    assert_eq!(show.calls, 27);
    assert_eq!(outputs[0], "1/1/1");
    assert_eq!(outputs[13], "\"s\"/\"s\"/\"s\"");
    assert_eq!(outputs[26], "0.5/0.5/0.5");

    // Same inputs, same outputs.
    let again = visit3(&mut show, &values[2], &values[0], &values[1]);
    assert_eq!(again.as_deref(), Ok("0.5/1/\"s\""));
}

#[test]
fn test_valueless_fails_in_every_position() {
    let live = Small::new(3u8);
    let empty = valueless();
    let mut show = Show::default();

    assert_eq!(visit(&mut show, &empty), Err(BadVariantAccess));

    assert_eq!(visit2(&mut show, &empty, &live), Err(BadVariantAccess));
    assert_eq!(visit2(&mut show, &live, &empty), Err(BadVariantAccess));

    assert_eq!(visit3(&mut show, &empty, &live, &live), Err(BadVariantAccess));
    assert_eq!(visit3(&mut show, &live, &empty, &live), Err(BadVariantAccess));
    assert_eq!(visit3(&mut show, &live, &live, &empty), Err(BadVariantAccess));

    let mut empty = empty;
    assert_eq!(empty.visit_mut(&mut Grow), Err(BadVariantAccess));

    // The visitor was never invoked.
    assert_eq!(show.calls, 0);
}
