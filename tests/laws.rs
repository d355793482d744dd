//! Property tests: the railway combinators obey the functor/monad laws and
//! the short-circuit rules for every outcome.

use std::cell::Cell;

use proptest::prelude::*;
use railway::*;

// ---------------------------------------------------------------------------
// Helpers / Strategies
// ---------------------------------------------------------------------------

/// Generate an outcome with either channel populated.
fn arb_outcome() -> impl Strategy<Value = Outcome<i32, String>> {
    prop_oneof![
        any::<i32>().prop_map(ok::<i32, String>),
        "[a-z]{1,8}".prop_map(err::<i32, String>),
    ]
}

/// Generate a presence with or without content.
fn arb_presence() -> impl Strategy<Value = Presence<i32>> {
    prop_oneof![any::<i32>().prop_map(some), Just(none::<i32>())]
}

fn halve_even(n: i32) -> Outcome<i32, String> {
    if n % 2 == 0 { ok(n / 2) } else { err(format!("{n} is odd")) }
}

fn below_limit(n: i32) -> Outcome<i32, String> {
    if n < 1_000 { ok(n) } else { err(format!("{n} too large")) }
}

// ---------------------------------------------------------------------------
// Functor laws
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn map_identity(o in arb_outcome()) {
        prop_assert_eq!(map(o.clone(), |x| x), o);
    }

    #[test]
    fn map_composition(o in arb_outcome()) {
        let f = |x: i32| i64::from(x) * 3;
        let g = |y: i64| y.to_string();

        prop_assert_eq!(map(map(o.clone(), f), g), map(o, |x| g(f(x))));
    }

    #[test]
    fn map_error_identity(o in arb_outcome()) {
        prop_assert_eq!(map_error(o.clone(), |e| e), o);
    }

    #[test]
    fn presence_map_identity(p in arb_presence()) {
        prop_assert_eq!(p.map(|x| x), p);
    }
}

// ---------------------------------------------------------------------------
// Bind laws and short-circuiting
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn bind_left_identity(x in any::<i32>()) {
        prop_assert_eq!(bind(ok(x), halve_even), halve_even(x));
    }

    #[test]
    fn bind_right_identity(o in arb_outcome()) {
        prop_assert_eq!(bind(o.clone(), ok), o);
    }

    #[test]
    fn bind_associativity(o in arb_outcome()) {
        let left = bind(bind(o.clone(), halve_even), below_limit);
        let right = bind(o, |x| bind(halve_even(x), below_limit));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn bind_never_calls_f_on_err(e in "[a-z]{1,8}") {
        let calls = Cell::new(0);
        let out = bind(err::<i32, String>(e.clone()), |x| {
            calls.set(calls.get() + 1);
            ok::<i32, String>(x)
        });

        prop_assert_eq!(out, err(e));
        prop_assert_eq!(calls.get(), 0);
    }

    #[test]
    fn presence_bind_matches_outcome_bind(p in arb_presence()) {
        let via_presence = p.bind(|x| if x % 2 == 0 { some(x / 2) } else { none() });
        let via_outcome = match p {
            Presence::Some(x) => halve_even(x).success(),
            Presence::None => none(),
        };
        prop_assert_eq!(via_presence, via_outcome);
    }
}

// ---------------------------------------------------------------------------
// Combine priority, fold totality, lazy fallback
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn combine_first_failure_wins(a in arb_outcome(), b in arb_outcome()) {
        let expected = match (&a, &b) {
            (Outcome::Err(e), _) => err(e.clone()),
            (Outcome::Ok(_), Outcome::Err(e)) => err(e.clone()),
            (Outcome::Ok(x), Outcome::Ok(y)) => ok(i64::from(*x) + i64::from(*y)),
        };
        let combined = combine(a, b, |x, y| i64::from(x) + i64::from(y));
        prop_assert_eq!(combined, expected);
    }

    #[test]
    fn reduce_calls_exactly_one_branch(o in arb_outcome()) {
        let success_calls = Cell::new(0);
        let error_calls = Cell::new(0);
        let was_success = o.is_success();

        reduce(
            o,
            |_| success_calls.set(success_calls.get() + 1),
            |_| error_calls.set(error_calls.get() + 1),
        );

        prop_assert_eq!(success_calls.get(), u32::from(was_success));
        prop_assert_eq!(error_calls.get(), u32::from(!was_success));
    }

    #[test]
    fn get_or_default_only_falls_back_on_err(o in arb_outcome()) {
        let calls = Cell::new(0);
        let was_error = o.is_error();
        let expected = match &o {
            Outcome::Ok(x) => *x,
            Outcome::Err(_) => -1,
        };

        let value = get_or_default(o, || {
            calls.set(calls.get() + 1);
            -1
        });

        prop_assert_eq!(value, expected);
        prop_assert_eq!(calls.get(), u32::from(was_error));
    }

    #[test]
    fn get_or_else_agrees_with_reduce(o in arb_outcome()) {
        let by_reduce = reduce(o.clone(), |x| x, |e| e.len() as i32);
        prop_assert_eq!(get_or_else(o, |e| e.len() as i32), by_reduce);
    }
}

// ---------------------------------------------------------------------------
// Capture boundary
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn try_capture_wraps_normal_returns(x in any::<i32>()) {
        let captured = try_capture(|| x);
        prop_assert!(matches!(captured, Outcome::Ok(v) if v == x));
    }

    #[test]
    fn try_capture_preserves_panic_payload(msg in "[a-z ]{1,16}") {
        let payload = msg.clone();
        let captured = try_capture(move || -> i32 { std::panic::panic_any(payload) });

        match captured {
            Outcome::Err(fault) => {
                prop_assert_eq!(fault.message(), msg.as_str());
                prop_assert_eq!(fault.downcast_ref::<String>(), Some(&msg));
            }
            Outcome::Ok(_) => prop_assert!(false, "expected a fault"),
        }
    }
}
