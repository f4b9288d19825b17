use std::rc::Rc;

use tagged_variant::{alternative, Alternative, Alternatives, Capabilities, Level, Variant};

#[derive(Clone, Copy)]
struct Point {
    _x: i32,
    _y: i32,
}

#[derive(Clone)]
struct Name(#[allow(dead_code)] String);

#[derive(Clone)]
struct Tally(#[allow(dead_code)] u32);

struct Handle;

impl Drop for Handle {
    fn drop(&mut self) {}
}

alternative!(Point, Name, Tally, Handle);

fn caps<L: Alternatives>() -> Capabilities {
    L::CAPABILITIES
}

#[test]
fn test_macro_detects_copy_and_clone() {
    assert_eq!(Point::COPY, Level::TriviallyAvailable);
    assert_eq!(Name::COPY, Level::Available);
    assert_eq!(Handle::COPY, Level::Unavailable);
}

#[test]
fn test_std_type_levels() {
    assert_eq!(<u64 as Alternative>::COPY, Level::TriviallyAvailable);
    assert_eq!(<String as Alternative>::COPY, Level::Available);
    assert_eq!(<Option<u8> as Alternative>::COPY, Level::TriviallyAvailable);
    assert_eq!(<Option<String> as Alternative>::COPY, Level::Available);
    assert_eq!(<Vec<u8> as Alternative>::COPY, Level::Available);
    assert_eq!(<Rc<Handle> as Alternative>::COPY, Level::Available);
    assert_eq!(<[Point; 4] as Alternative>::COPY, Level::TriviallyAvailable);
    assert_eq!(<Result<Point, Name> as Alternative>::COPY, Level::Available);
}

#[test]
fn test_scalar_list_is_trivial() {
    let c = caps::<(u8, i64, Point, f32)>();
    assert!(c.is_trivial());
    assert!(c.copy_is_trivial());
    assert!(c.copy_never_fails());
    assert!(c.move_never_fails());
}

#[test]
fn test_one_member_degrades_the_whole_list() {
    let c = caps::<(u8, Point, Name)>();
    assert_eq!(c.destroy, Level::Available);
    assert_eq!(c.copy_construct, Level::Available);
    assert_eq!(c.copy_assign, Level::Available);
    assert_eq!(c.move_construct, Level::TriviallyAvailable);
    assert_eq!(c.move_assign, Level::Available);
    assert!(c.can_copy());
    assert!(!c.copy_never_fails());
    assert!(!c.is_trivial());
}

#[test]
fn test_non_clone_member_removes_copy() {
    let c = caps::<(u8, Name, Handle)>();
    assert_eq!(c.copy_construct, Level::Unavailable);
    assert_eq!(c.copy_assign, Level::Unavailable);
    assert!(!c.can_copy());

    // Moves stay available for every list.
    assert!(c.move_never_fails());
    assert!(c.swap_never_fails());
}

#[test]
fn test_classification_is_per_operation() {
    // Trivially destructible, but copying runs code.
    let c = caps::<(u8, &'static str, Tally)>();
    assert_eq!(c.destroy, Level::TriviallyAvailable);
    assert_eq!(c.copy_construct, Level::Available);
    assert_eq!(c.move_assign, Level::TriviallyAvailable);

    let c = caps::<(u8, Name)>();
    let d = Capabilities::of::<Name>();
    assert_eq!(c, d);
    assert_eq!(Capabilities::fold(&[Capabilities::of::<u8>(), d]), c);
    assert_eq!(Capabilities::TRIVIAL.join(d), d);
}

#[test]
fn test_containers_nest_as_alternatives() {
    type Inner = Variant<(u8, String)>;
    type Opaque = Variant<(u8, Handle)>;

    assert_eq!(<Inner as Alternative>::COPY, Level::Available);
    assert_eq!(<Opaque as Alternative>::COPY, Level::Unavailable);

    let outer: Variant<(Inner, bool)> = Variant::new(Inner::new(String::from("nested")));
    let copy = outer.clone();
    let inner = copy.get::<0>().expect("outer holds the inner container");
    assert_eq!(inner.get::<1>().map(String::as_str), Ok("nested"));
    assert_eq!(Variant::<(Inner, bool)>::LEN, 2);
}

#[test]
fn test_level_queries() {
    assert!(Level::TriviallyAvailable.is_trivial());
    assert!(Level::Available.is_available() && !Level::Available.is_trivial());
    assert!(!Level::Unavailable.is_available());
}
