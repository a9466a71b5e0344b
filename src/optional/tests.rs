#![cfg(test)]

use std::cell::Cell;

use super::*;
use crate::Outcome;
use crate::error::EmptyOptional;
use crate::util::panic::assert_panics;

#[test]
fn test_unwrap() {
    assert_eq!(Optional::Some(5).unwrap(), 5);
    assert_eq!(some("five").expect("should hold a value"), "five");

    assert_panics!({ Optional::<u8>::None.unwrap() }, message = "no value");
    assert_panics!(
        { none::<u8>().expect("needed a port") },
        message = "needed a port"
    );

    assert_eq!(Optional::<u8>::None.try_unwrap(), Err(EmptyOptional::default()));
    assert_eq!(
        Optional::<u8>::None.try_expect("needed a port").unwrap_err().reason.as_deref(),
        Some("needed a port")
    );
}

#[test]
fn test_unwrap_fallbacks() {
    assert_eq!(Optional::None.unwrap_or(3), 3);
    assert_eq!(Optional::Some(1).unwrap_or(3), 1);
    assert_eq!(Optional::<u8>::None.unwrap_or_default(), 0);

    let calls = Cell::new(0);
    let fallback = || {
        calls.set(calls.get() + 1);
        7
    };
    assert_eq!(Optional::Some(1).unwrap_or_else(fallback), 1);
    assert_eq!(calls.get(), 0, "The fallback shouldn't run for Some.");
    assert_eq!(Optional::None.unwrap_or_else(fallback), 7);
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_map() {
    assert_eq!(Optional::Some(2).map(|x| x * 10), Optional::Some(20));
    assert_eq!(
        Optional::None.map(|x: i32| -> i32 { panic!("mapped {}", x) }),
        Optional::None,
        "Mapping None should never call the function."
    );

    assert_eq!(Optional::Some(2).map_or(0, |x| x + 1), 3);
    assert_eq!(Optional::None.map_or(0, |x: i32| x + 1), 0);
    assert_eq!(Optional::Some(2).map_or_else(|| -1, |x| x * 2), 4);
    assert_eq!(Optional::None.map_or_else(|| -1, |x: i32| x * 2), -1);
}

#[test]
fn test_map_nullable_collapses() {
    let halve = |x: u32| if x % 2 == 0 { Some(x / 2) } else { None };
    assert_eq!(Optional::Some(4).map_nullable(halve), Optional::Some(2));
    assert_eq!(
        Optional::Some(3).map_nullable(halve),
        Optional::None,
        "A Some mapped to the empty sentinel should become None."
    );

    assert_eq!(Optional::from_nullable(Some('a')), Optional::Some('a'));
    assert_eq!(Optional::from_nullable(None::<char>), Optional::None);
    assert_eq!(Optional::from(None::<char>), Optional::None);
}

#[test]
fn test_and_or() {
    let some = Optional::Some(1);
    let none = Optional::<i32>::None;

    assert_eq!(some.and(Optional::Some("b")), Optional::Some("b"));
    assert_eq!(none.and(Optional::Some("b")), Optional::None);
    assert_eq!(some.and_then(|x| Optional::Some(x + 1)), Optional::Some(2));
    assert_eq!(some.and_then(|_| Optional::<i32>::None), Optional::None);
    assert_eq!(
        none.and_then(|x: i32| -> Optional<i32> { panic!("chained {}", x) }),
        Optional::None
    );

    assert_eq!(some.or(Optional::Some(9)), some);
    assert_eq!(none.or(Optional::Some(9)), Optional::Some(9));
    assert_eq!(some.or_else(|| panic!("or_else on Some")), some);
    assert_eq!(none.or_else(|| Optional::Some(9)), Optional::Some(9));

    assert_eq!(some.xor(none), some);
    assert_eq!(none.xor(some), some);
    assert_eq!(some.xor(Optional::Some(2)), Optional::None);
    assert_eq!(none.xor(none), Optional::None);
}

#[test]
fn test_filter() {
    let is_even = |x: &u8| x % 2 == 0;
    assert_eq!(Optional::Some(4).filter(is_even), Optional::Some(4));
    assert_eq!(Optional::Some(3).filter(is_even), Optional::None);
    assert_eq!(Optional::None.filter(is_even), Optional::None);
}

#[test]
fn test_zip() {
    assert_eq!(Optional::Some(1).zip(Optional::Some('a')), Optional::Some((1, 'a')));
    assert_eq!(Optional::Some(1).zip(Optional::<char>::None), Optional::None);
    assert_eq!(
        Optional::Some(2).zip_with(Optional::Some(3), |a, b| a * b),
        Optional::Some(6)
    );

    assert_eq!(
        Optional::Some((1, 'a')).unzip(),
        (Optional::Some(1), Optional::Some('a'))
    );
    assert_eq!(
        Optional::<(u8, char)>::None.unzip(),
        (Optional::None, Optional::None)
    );
}

#[test]
fn test_in_place_mutators() {
    let mut optional = Optional::None;
    *optional.insert(1) += 10;
    assert_eq!(optional, Optional::Some(11), "insert should hand back the stored value.");

    assert_eq!(optional.replace(2), Optional::Some(11));
    assert_eq!(optional, Optional::Some(2));

    assert_eq!(*optional.get_or_insert(5), 2, "An existing value should be kept.");
    assert_eq!(optional.take(), Optional::Some(2));
    assert_eq!(optional, Optional::None);

    assert_eq!(*optional.get_or_insert(5), 5);

    let mut empty = Optional::None;
    let calls = Cell::new(0);
    for _ in 0..3 {
        empty.get_or_insert_with(|| {
            calls.set(calls.get() + 1);
            "computed"
        });
    }
    assert_eq!(empty, Optional::Some("computed"));
    assert_eq!(calls.get(), 1, "The value should only be computed once.");
}

#[test]
fn test_insert_nullable() {
    let mut optional = Optional::Some(3);
    assert_eq!(*optional.insert_nullable(None), Optional::None);
    assert_eq!(*optional.insert_nullable(Some(4)), Optional::Some(4));
}

#[test]
fn test_replace_nullable() {
    let mut optional = Optional::Some(3);
    assert_eq!(optional.replace_nullable(None), Optional::Some(3));
    assert_eq!(optional, Optional::None, "Replacing with the empty sentinel should leave None.");

    assert_eq!(optional.replace_nullable(Some(4)), Optional::None);
    assert_eq!(optional, Optional::Some(4));
}

#[test]
fn test_checked_get_or_insert() {
    let mut optional: Optional<Option<u8>> = Optional::None;
    assert!(
        optional.checked_get_or_insert(None).is_err(),
        "Storing the empty sentinel should be refused."
    );
    assert_eq!(optional, Optional::None, "The receiver should be left untouched.");

    assert_eq!(optional.checked_get_or_insert(Some(1)).copied(), Ok(Some(1)));
    assert_eq!(
        optional.checked_get_or_insert_with(|| None).copied(),
        Ok(Some(1)),
        "An existing value should be returned without calling the function."
    );

    let mut full = Optional::Some(Some(1u8));
    assert!(
        full.checked_get_or_insert(None).is_err(),
        "The empty sentinel should be refused even when a value is already held."
    );
    assert_eq!(full, Optional::Some(Some(1)));
}

#[test]
fn test_flatten() {
    assert_eq!(Optional::Some(Optional::Some(1)).flatten(), Optional::Some(1));
    assert_eq!(Optional::Some(Optional::<u8>::None).flatten(), Optional::None);
    assert_eq!(Optional::<Optional<u8>>::None.flatten(), Optional::None);
}

#[test]
fn test_transpose() {
    assert_eq!(
        Optional::Some(Outcome::<u8, String>::Ok(1)).transpose(),
        Outcome::Ok(Optional::Some(1))
    );
    assert_eq!(
        Optional::Some(Outcome::<u8, &str>::Err("bad")).transpose(),
        Outcome::Err("bad")
    );
    assert_eq!(
        Optional::<Outcome<u8, String>>::None.transpose(),
        Outcome::Ok(Optional::None)
    );
}

#[test]
fn test_ok_or() {
    assert_eq!(Optional::Some(1).ok_or("missing"), Outcome::Ok(1));
    assert_eq!(Optional::<u8>::None.ok_or("missing"), Outcome::Err("missing"));
    assert_eq!(
        Optional::Some(1).ok_or_else(|| -> &'static str { panic!("error computed for Some") }),
        Outcome::Ok(1)
    );
    assert_eq!(Optional::<u8>::None.ok_or_else(|| 404), Outcome::Err(404));
}

#[test]
fn test_equal() {
    assert!(Optional::Some(1).equal(&Optional::Some(1)));
    assert!(!Optional::Some(1).equal(&Optional::Some(2)));
    assert!(Optional::<u8>::None.equal(&Optional::None));
    assert!(!Optional::Some(1).equal(&Optional::None));

    let same_length = |a: &&str, b: &String| a.len() == b.len();
    assert!(Optional::Some("abc").equal_by(&Optional::Some("xyz".to_owned()), same_length));
    assert!(!Optional::Some("abc").equal_by(&Optional::None, same_length));
}

#[test]
fn test_predicates() {
    assert!(Optional::Some(2).is_some());
    assert!(Optional::<u8>::None.is_none());
    assert!(Optional::Some(2).is_some_and(|x| x > 1));
    assert!(!Optional::None.is_some_and(|x: u8| x > 1));
    assert!(Optional::None.is_none_or(|x: u8| x > 1));
    assert!(!Optional::Some(0).is_none_or(|x| x > 1));
}

#[test]
fn test_references() {
    let mut optional = Optional::Some(String::from("a"));
    if let Optional::Some(value) = optional.as_mut() {
        value.push('b');
    }
    assert_eq!(optional.as_ref().map(String::len), Optional::Some(2));
    assert_eq!(optional.as_ref().cloned(), Optional::Some("ab".to_owned()));

    let number = Optional::Some(3);
    assert_eq!(number.as_ref().copied(), Optional::Some(3));

    let mut seen = None;
    let inspected = Optional::Some(4).inspect(|x| seen = Some(*x));
    assert_eq!((inspected, seen), (Optional::Some(4), Some(4)));
}

#[test]
fn test_display() {
    assert_eq!(Optional::Some(3).to_string(), "Some(3)");
    assert_eq!(Optional::<u8>::None.to_string(), "None()");
    assert_eq!(Optional::Some(Optional::Some("x")).to_string(), "Some(Some(x))");
}

#[test]
fn test_iteration() {
    let items: Vec<_> = Optional::Some(vec![1, 2, 3]).try_into_iter().unwrap().collect();
    assert_eq!(items, [1, 2, 3]);

    assert!(
        Optional::<Vec<u8>>::None.try_into_iter().is_err(),
        "Iterating None should fail rather than yield nothing."
    );
}

#[cfg(feature = "futures")]
#[test]
fn test_stream() {
    use futures::executor::block_on;
    use futures::stream::{self, StreamExt};

    let items: Vec<_> = block_on(Optional::Some(stream::iter([1, 2])).into_stream().collect());
    assert_eq!(items, [Ok(1), Ok(2)]);

    let items: Vec<Result<u8, _>> = block_on(
        Optional::<stream::Iter<std::vec::IntoIter<u8>>>::None
            .into_stream()
            .collect(),
    );
    assert_eq!(items, [Err(EmptyOptional::default())]);
}
