#![cfg(test)]

use std::cell::Cell;

use super::*;
use crate::Optional;
use crate::util::panic::assert_panics;

type Parsed = Outcome<i32, String>;

fn parse(text: &str) -> Parsed {
    text.parse::<i32>().map_err(|e| e.to_string()).into()
}

#[test]
fn test_unwrap() {
    assert_eq!(Parsed::Ok(3).unwrap(), 3);
    assert_eq!(Parsed::Ok(3).expect("parsed"), 3);
    assert_eq!(Parsed::Err("bad".into()).unwrap_err(), "bad");
    assert_eq!(Parsed::Err("bad".into()).expect_err("should fail"), "bad");

    assert_panics!({ Parsed::Err("boom".into()).unwrap() }, message = "boom");
    assert_panics!(
        { Parsed::Err("boom".into()).expect("reading config") },
        message = "reading config"
    );
    assert_panics!({ Parsed::Ok(1).unwrap_err() }, message = "1");
}

#[test]
fn test_unwrap_fallbacks() {
    assert_eq!(parse("7").unwrap_or(0), 7);
    assert_eq!(parse("seven").unwrap_or(0), 0);
    assert_eq!(parse("seven").unwrap_or_default(), 0);
    assert_eq!(parse("seven").unwrap_or_else(|e| e.len() as i32), 29);
    assert_eq!(
        parse("7").unwrap_or_else(|e| panic!("recovered from {}", e)),
        7
    );
}

#[test]
fn test_map() {
    assert_eq!(parse("3").map(|x| x * x).unwrap(), 9);

    let calls = Cell::new(0);
    let mapped = Parsed::Err("bad".into()).map(|x| {
        calls.set(calls.get() + 1);
        x
    });
    assert_eq!(mapped, Outcome::Err("bad".to_owned()), "The error should be left untouched.");
    assert_eq!(calls.get(), 0, "Mapping an Err should never call the function.");

    assert_eq!(
        Parsed::Err("bad".into()).map_err(|e| e.len()),
        Outcome::Err(3)
    );
    assert_eq!(Parsed::Ok(1).map_err(|e| e.len()), Outcome::Ok(1));

    assert_eq!(Parsed::Ok(2).map_or(0, |x| x + 1), 3);
    assert_eq!(Parsed::Err("bad".into()).map_or(0, |x| x + 1), 0);
    assert_eq!(Parsed::Ok(2).map_or_else(|_| -1, |x| x * 2), 4);
    assert_eq!(
        Parsed::Err("bad".into()).map_or_else(|e| e.len() as i32, |x| x * 2),
        3
    );
}

#[test]
fn test_and_or() {
    let positive = |x: i32| {
        if x > 0 {
            Outcome::Ok(x)
        } else {
            Outcome::Err(format!("{} isn't positive", x))
        }
    };

    assert_eq!(parse("4").and_then(positive), Outcome::Ok(4));
    assert_eq!(
        parse("-4").and_then(positive),
        Outcome::Err("-4 isn't positive".to_owned())
    );
    assert!(
        parse("four").and_then(positive).is_err_and(|e| e.starts_with("invalid digit")),
        "The first error should short-circuit."
    );

    assert_eq!(parse("1").and(Outcome::<&str, String>::Ok("next")), Outcome::Ok("next"));
    assert_eq!(
        parse("x").and(Outcome::<&str, String>::Ok("next")).is_err(),
        true
    );

    assert_eq!(parse("1").or(Outcome::<i32, ()>::Ok(2)), Outcome::Ok(1));
    assert_eq!(parse("x").or(Outcome::<i32, ()>::Err(())), Outcome::Err(()));
    assert_eq!(
        parse("x").or_else(|e| Outcome::<i32, usize>::Err(e.len())),
        Outcome::Err(29)
    );
    assert_eq!(
        parse("1").or_else(|e| -> Outcome<i32, usize> { panic!("recovered from {}", e) }),
        Outcome::Ok(1)
    );
}

#[test]
fn test_flatten() {
    assert_eq!(Outcome::<Parsed, String>::Ok(Parsed::Ok(1)).flatten(), Outcome::Ok(1));
    assert_eq!(
        Outcome::<Parsed, String>::Ok(Parsed::Err("inner".into())).flatten(),
        Outcome::Err("inner".to_owned())
    );
    assert_eq!(
        Outcome::<Parsed, String>::Err("outer".into()).flatten(),
        Outcome::Err("outer".to_owned())
    );
}

#[test]
fn test_conversions() {
    assert_eq!(parse("1").ok(), Optional::Some(1));
    assert_eq!(parse("x").ok(), Optional::None);
    assert_eq!(parse("1").err(), Optional::None);
    assert!(parse("x").err().is_some());

    assert_eq!(
        Outcome::<Optional<u8>, String>::Ok(Optional::Some(1)).transpose(),
        Optional::Some(Outcome::Ok(1))
    );
    assert_eq!(
        Outcome::<Optional<u8>, String>::Ok(Optional::None).transpose(),
        Optional::None
    );

    let result: Result<i32, String> = parse("5").into();
    assert_eq!(result, Ok(5));
    assert_eq!(Outcome::from(Err::<i32, _>("bad")), Outcome::Err("bad"));
}

#[test]
fn test_equal() {
    assert!(parse("1").equal(&Outcome::Ok(1)));
    assert!(!parse("1").equal(&Outcome::Ok(2)));
    assert!(parse("x").equal(&parse("y")), "Both errors have the same message.");
    assert!(!parse("1").equal(&Outcome::Err("1".into())), "Statuses differ.");

    let close = |a: &i32, b: &f64| (f64::from(*a) - b).abs() < 0.5;
    let any = |_: &String, _: &()| true;
    assert!(parse("2").equal_by(&Outcome::Ok(2.1), close, any));
    assert!(
        !parse("2").equal_by(&Outcome::Err(()), close, any),
        "Different statuses should be unequal even when the error comparator accepts anything."
    );

    let calls = Cell::new(0);
    let counted = |_: &String, _: &String| {
        calls.set(calls.get() + 1);
        true
    };
    assert!(!parse("x").equal_by(&Outcome::<i32, String>::Ok(1), i32::eq, counted));
    assert_eq!(calls.get(), 0, "No comparator should see a mixed-status pair.");
}

#[test]
fn test_inspect() {
    let seen = Cell::new(None);
    let _ = parse("3").inspect(|x| seen.set(Some(*x))).inspect_err(|_| panic!("inspected an Ok"));
    assert_eq!(seen.get(), Some(3));

    let failed = Cell::new(false);
    let _ = parse("x").inspect(|_| panic!("inspected an Err")).inspect_err(|_| failed.set(true));
    assert!(failed.get());
}

#[test]
fn test_references() {
    let mut outcome = Outcome::<String, String>::Ok("a".into());
    if let Outcome::Ok(value) = outcome.as_mut() {
        value.push('b');
    }
    assert_eq!(outcome.as_ref().map(String::len), Outcome::Ok(2));
    assert!(outcome.is_ok_and(|value| value == "ab"));
}

#[test]
fn test_collect() {
    let parsed: Outcome<Vec<i32>, String> = ["1", "2", "3"].into_iter().map(parse).collect();
    assert_eq!(parsed, Outcome::Ok(vec![1, 2, 3]));

    let parsed: Outcome<Vec<i32>, String> = ["1", "x", "y"].into_iter().map(parse).collect();
    assert_eq!(
        parsed,
        Outcome::Err("invalid digit found in string".to_owned()),
        "The first error should be kept."
    );
}

#[test]
fn test_display() {
    assert_eq!(Parsed::Ok(3).to_string(), "Ok(3)");
    assert_eq!(Parsed::Err("boom".into()).to_string(), "Err(boom)");
}

#[test]
fn test_iteration() {
    let items: Vec<_> = Outcome::<_, String>::Ok(vec!['a', 'b']).try_into_iter().unwrap().collect();
    assert_eq!(items, ['a', 'b']);

    assert_eq!(
        Outcome::<Vec<char>, _>::Err("boom").try_into_iter().err(),
        Some("boom"),
        "Iterating a failure should propagate the error."
    );
}

#[cfg(feature = "futures")]
#[test]
fn test_stream() {
    use futures::executor::block_on;
    use futures::stream::{self, StreamExt};

    let items: Vec<_> = block_on(
        Outcome::<_, String>::Ok(stream::iter([1, 2]))
            .into_stream()
            .collect(),
    );
    assert_eq!(items, [Ok(1), Ok(2)]);

    let items: Vec<Result<u8, _>> = block_on(
        Outcome::<stream::Iter<std::vec::IntoIter<u8>>, _>::Err("boom")
            .into_stream()
            .collect(),
    );
    assert_eq!(items, [Err("boom")]);
}
