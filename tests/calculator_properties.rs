//! Algebraic properties of the calculator, checked over boundary operands.

use arith::calculator::{self, CalcError};

const OPERANDS: [i64; 11] = [
    i64::MIN,
    i64::MIN + 1,
    -1_000_000,
    -10,
    -5,
    -1,
    0,
    1,
    5,
    10,
    i64::MAX,
];

fn pairs() -> impl Iterator<Item = (i64, i64)> {
    OPERANDS
        .iter()
        .flat_map(|&a| OPERANDS.iter().map(move |&b| (a, b)))
}

#[test]
fn add_is_commutative() {
    for (a, b) in pairs() {
        assert_eq!(calculator::add(a, b), calculator::add(b, a), "a={a} b={b}");
    }
}

#[test]
fn subtract_is_anti_commutative() {
    for (a, b) in pairs() {
        assert_eq!(
            calculator::subtract(a, b),
            calculator::subtract(b, a).wrapping_neg(),
            "a={a} b={b}"
        );
    }
}

#[test]
fn max_is_commutative_and_idempotent() {
    for (a, b) in pairs() {
        assert_eq!(calculator::max(a, b), calculator::max(b, a), "a={a} b={b}");
        assert!(calculator::max(a, b) >= a && calculator::max(a, b) >= b);
    }
    for a in OPERANDS {
        assert_eq!(calculator::max(a, a), a);
    }
}

#[test]
fn divide_by_zero_always_fails() {
    for a in OPERANDS {
        assert_eq!(calculator::divide(a, 0), Err(CalcError::InvalidArgument), "a={a}");
    }
}

#[test]
fn divide_matches_truncating_division() {
    for (a, b) in pairs().filter(|&(_, b)| b != 0) {
        assert_eq!(calculator::divide(a, b), Ok(a.wrapping_div(b)), "a={a} b={b}");
    }
    assert_eq!(calculator::divide(10, 5), Ok(2));
    assert_eq!(calculator::divide(-10, 5), Ok(-2));
}

#[test]
fn documented_examples() {
    assert_eq!(calculator::add(-5, 5), 0);
    assert_eq!(calculator::subtract(-5, 5), -10);
    assert_eq!(calculator::max(15, 20), 20);
    assert_eq!(calculator::max(5, 5), 5);
}
