//! Property-based tests for decimal scalar arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::Scalar;

    // Strategy for generating small integers (exact at any precision)
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    proptest! {
        // Ring axioms hold exactly on integer-valued scalars

        #[test]
        fn scalar_add_commutative(a in small_int(), b in small_int()) {
            let a = Scalar::from_i64(a);
            let b = Scalar::from_i64(b);
            prop_assert_eq!(a.clone() + b.clone(), b + a);
        }

        #[test]
        fn scalar_add_associative(a in small_int(), b in small_int(), c in small_int()) {
            let a = Scalar::from_i64(a);
            let b = Scalar::from_i64(b);
            let c = Scalar::from_i64(c);
            prop_assert_eq!(
                (a.clone() + b.clone()) + c.clone(),
                a + (b + c)
            );
        }

        #[test]
        fn scalar_mul_commutative(a in small_int(), b in small_int()) {
            let a = Scalar::from_i64(a);
            let b = Scalar::from_i64(b);
            prop_assert_eq!(a.clone() * b.clone(), b * a);
        }

        #[test]
        fn scalar_distributive(a in small_int(), b in small_int(), c in small_int()) {
            let a = Scalar::from_i64(a);
            let b = Scalar::from_i64(b);
            let c = Scalar::from_i64(c);
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn scalar_add_identity(a in small_int()) {
            let a = Scalar::from_i64(a);
            prop_assert_eq!(a.clone() + Scalar::zero(), a.clone());
            prop_assert_eq!(Scalar::zero() + a.clone(), a);
        }

        #[test]
        fn scalar_neg_is_additive_inverse(a in small_int()) {
            let a = Scalar::from_i64(a);
            prop_assert!((a.clone() + (-a)).is_zero());
        }

        // Division rounds, so inverse laws hold within the 1e-10 tolerance

        #[test]
        fn scalar_recip_roundtrip(a in non_zero_int()) {
            let a = Scalar::from_i64(a);
            let product = a.clone() * a.recip();
            prop_assert!(product.approx_eq(&Scalar::one()));
        }

        #[test]
        fn scalar_div_mul_roundtrip(a in small_int(), b in non_zero_int()) {
            let a = Scalar::from_i64(a);
            let b = Scalar::from_i64(b);
            let quotient = a.clone() / b.clone();
            prop_assert!((quotient * b).approx_eq(&a));
        }

        // Tolerance predicates

        #[test]
        fn approx_eq_is_reflexive(a in small_int()) {
            let a = Scalar::from_i64(a);
            prop_assert!(a.approx_eq(&a));
        }

        #[test]
        fn near_zero_iff_below_threshold(a in non_zero_int()) {
            // |a| >= 1 is never near zero; |a| <= 1000 scaled by 1e-14
            // always lands below the 1e-10 tolerance
            let a = Scalar::from_i64(a);
            prop_assert!(!a.is_near_zero());
            let tiny = a * "1e-14".parse::<Scalar>().unwrap();
            prop_assert!(tiny.is_near_zero());
        }
    }
}
