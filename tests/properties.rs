/*
    Property tests
*/

use fraction_num::Fraction;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::ToPrimitive;
use proptest::prelude::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

// Truncates an exact integer to the low 32 bits, read as two's complement
fn wrap(x: BigInt) -> i32 {
    let low = x & BigInt::from(u32::MAX);
    low.to_u32().unwrap() as i32
}

fn small() -> impl Strategy<Value = i32> {
    -1000i32..=1000
}

fn small_nonzero() -> impl Strategy<Value = i32> {
    small().prop_filter("non-zero", |d| *d != 0)
}

// Full width, leaving out `i32::MIN` which has no negation
fn wide() -> impl Strategy<Value = i32> {
    (i32::MIN + 1)..=i32::MAX
}

fn wide_nonzero() -> impl Strategy<Value = i32> {
    wide().prop_filter("non-zero", |d| *d != 0)
}

fn fraction() -> impl Strategy<Value = Fraction> {
    (small(), small_nonzero()).prop_map(|(n, d)| Fraction::init(n, d).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn zero_denominator_rejected(n in any::<i32>()) {
        prop_assert!(Fraction::init(n, 0).is_err());
    }

    #[test]
    fn init_normalizes_sign(n in wide(), d in wide_nonzero()) {
        let f = Fraction::init(n, d).unwrap();
        prop_assert!(f.denominator() > 0);
        prop_assert_eq!(f.denominator(), d.abs());
        prop_assert_eq!(f.numerator(), if d < 0 { -n } else { n });
    }

    #[test]
    fn check_negatives_idempotent(f in fraction(), g in fraction()) {
        // `invert` moves a negative numerator into the denominator
        let mut f = f;
        f.invert();
        let mut once = f;
        once.check_negatives();
        let mut twice = once;
        twice.check_negatives();
        prop_assert_eq!(once, twice);

        let mut g1 = g;
        g1.check_negatives();
        prop_assert_eq!(g1, g);
    }

    #[test]
    fn operations_leave_positive_denominators(mut a in fraction(), mut b in fraction(), op in 0..6u8) {
        prop_assume!(op != 3 || b.numerator() != 0);
        match op {
            0 => a.add(&mut b),
            1 => a.subtract(&mut b),
            2 => a.multiply(&mut b),
            3 => a.divide(&mut b),
            4 => a.negate(),
            _ => a.reduce(),
        }
        if op == 3 {
            b.check_negatives();
        }
        prop_assert!(a.denominator() > 0, "{}", a);
        prop_assert!(b.denominator() > 0, "{}", b);
    }

    #[test]
    fn operations_match_exact_values(a in fraction(), b in fraction()) {
        let (an, ad) = (a.numerator() as i64, a.denominator() as i64);
        let (bn, bd) = (b.numerator() as i64, b.denominator() as i64);

        let (mut x, mut y) = (a, b);
        x.add(&mut y);
        prop_assert_eq!(x.numerator() as i64 * ad * bd, (an * bd + bn * ad) * x.denominator() as i64);
        prop_assert_eq!(y, b);

        let (mut x, mut y) = (a, b);
        x.subtract(&mut y);
        prop_assert_eq!(x.numerator() as i64 * ad * bd, (an * bd - bn * ad) * x.denominator() as i64);
        prop_assert_eq!((y.numerator(), y.denominator()), (-b.numerator(), b.denominator()));

        let (mut x, mut y) = (a, b);
        x.multiply(&mut y);
        prop_assert_eq!((x.numerator() as i64, x.denominator() as i64), (an * bn, ad * bd));
        prop_assert_eq!(y, b);
    }

    #[test]
    fn reduce_is_lowest_terms(f in fraction()) {
        init_tracing();
        let mut r = f;
        r.reduce();

        prop_assert!(r.denominator() > 0);
        prop_assert_eq!(r.numerator().gcd(&r.denominator()), 1);
        prop_assert_eq!(
            r.numerator() as i64 * f.denominator() as i64,
            f.numerator() as i64 * r.denominator() as i64
        );

        let g = f.numerator().gcd(&f.denominator());
        prop_assert_eq!(r.denominator(), f.denominator() / g);

        let mut again = r;
        again.reduce();
        prop_assert_eq!(again, r);
    }

    #[test]
    fn arithmetic_wraps(n1 in wide(), d1 in wide_nonzero(), n2 in wide(), d2 in wide_nonzero()) {
        let a = Fraction::init(n1, d1).unwrap();
        let b = Fraction::init(n2, d2).unwrap();
        let big = |x: i32| BigInt::from(x);

        let (mut x, mut y) = (a, b);
        x.multiply(&mut y);
        prop_assert_eq!(x.numerator(), wrap(big(a.numerator()) * big(b.numerator())));
        prop_assert_eq!(x.denominator(), wrap(big(a.denominator()) * big(b.denominator())));

        prop_assume!(a.denominator() != b.denominator());
        let (mut x, mut y) = (a, b);
        x.add(&mut y);
        let exact = big(a.numerator()) * big(b.denominator()) + big(b.numerator()) * big(a.denominator());
        prop_assert_eq!(x.numerator(), wrap(exact));
        prop_assert_eq!(x.denominator(), wrap(big(a.denominator()) * big(b.denominator())));
    }
}
