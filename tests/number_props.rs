#![cfg(feature = "elements")]

use data_structures::elements::{Number, NumberError, Real};
use proptest::prelude::*;

fn finite_or_infinite() -> impl Strategy<Value = f64> {
    prop_oneof![
        -1e18..1e18_f64,
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
        any::<f64>().prop_filter("NaN is not a real number", |v| !v.is_nan()),
    ]
}

proptest! {
    #[test]
    fn float_value_round_trips(v in finite_or_infinite()) {
        let number = Number::new(v).unwrap();
        prop_assert_eq!(number.value(), Real::Float(v));
        let copy = number.copy();
        prop_assert_eq!(copy, number);
        prop_assert!(!std::ptr::eq(&copy, &number));
    }

    #[test]
    fn int_value_round_trips(v in any::<i64>()) {
        let number = Number::from(v);
        prop_assert_eq!(number.value(), Real::Int(v));
        prop_assert_eq!(number.to_string(), v.to_string());
    }

    #[test]
    fn ordering_follows_values(a in -10.0..10.0_f64, b in -10.0..10.0_f64) {
        let (x, y) = (Number::new(a).unwrap(), Number::new(b).unwrap());
        prop_assert_eq!(x <= y, a <= b);
        prop_assert_eq!(x > y, a > b);
        prop_assert_eq!(x.try_lt(&y), Ok(a < b));
        prop_assert_eq!(x.try_eq(&y), Ok(a == b));
    }

    #[test]
    fn ints_and_floats_compare_exactly(i in -(1_i64 << 40)..(1_i64 << 40), frac in 0.0..1.0_f64) {
        let int = Number::from(i);
        prop_assert_eq!(int, Number::new(i as f64).unwrap());
        let sum = i as f64 + frac;
        let above = Number::new(sum).unwrap();
        prop_assert!(int <= above);
        prop_assert_eq!(int == above, sum == i as f64);
    }

    #[test]
    fn strings_are_not_numbers(s in ".*") {
        let not_real = matches!(Number::try_from_element(&s), Err(NumberError::NotReal { .. }));
        prop_assert!(not_real);
        prop_assert!(Number::from(0).try_eq(&s).is_err());
    }
}
