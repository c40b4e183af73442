//! Property-based tests for arbitrary precision arithmetic and decoding.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{decode, DecodeError, Integer};

    const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    // A base together with up to 80 digits that are legal in it
    fn base_and_digits() -> impl Strategy<Value = (u32, Vec<u32>)> {
        (2u32..=36).prop_flat_map(|base| (Just(base), prop::collection::vec(0..base, 0..80)))
    }

    fn render(digits: &[u32], uppercase: bool) -> String {
        digits
            .iter()
            .map(|&d| {
                let ch = char::from(ALPHABET[d as usize]);
                if uppercase {
                    ch.to_ascii_uppercase()
                } else {
                    ch
                }
            })
            .collect()
    }

    proptest! {
        #[test]
        fn integer_distributive(a in small_int(), b in small_int(), c in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let c = Integer::new(c);
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b.clone() + a.clone() * c.clone()
            );
        }

        #[test]
        fn div_rem_reconstructs(a in small_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let (q, r) = a.div_rem(&b);
            prop_assert_eq!(q * b.clone() + r.clone(), a);
            prop_assert!(r.abs() < b.abs());
        }

        #[test]
        fn exact_div_inverts_mul(a in small_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            prop_assert_eq!((&a * &b).exact_div(&b), Some(a));
        }

        #[test]
        fn gcd_divides_both(a in non_zero_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let g = a.gcd(&b);

            prop_assert!(a.exact_div(&g).is_some());
            prop_assert!(b.exact_div(&g).is_some());
        }

        // Decoding matches sum(digit * base^position)

        #[test]
        fn decode_matches_positional_definition((base, digits) in base_and_digits()) {
            let radix = Integer::from(base);
            let expected = digits
                .iter()
                .rev()
                .enumerate()
                .fold(Integer::zero(), |acc, (position, &d)| {
                    acc + Integer::from(d) * radix.pow(position)
                });

            prop_assert_eq!(decode(&render(&digits, false), base).unwrap(), expected);
        }

        #[test]
        fn decode_ignores_case((base, digits) in base_and_digits()) {
            prop_assert_eq!(
                decode(&render(&digits, true), base).unwrap(),
                decode(&render(&digits, false), base).unwrap()
            );
        }

        #[test]
        fn decode_agrees_with_dashu_parser((base, digits) in base_and_digits()) {
            prop_assume!(!digits.is_empty());
            let text = render(&digits, false);
            let parsed = dashu::integer::IBig::from_str_radix(&text, base).unwrap();
            prop_assert_eq!(decode(&text, base).unwrap(), Integer::from(parsed));
        }

        #[test]
        fn decode_rejects_out_of_range_digit(base in 2u32..36, prefix in "[0-1]{0,10}") {
            let bad = char::from(ALPHABET[base as usize]);
            let text = format!("{prefix}{bad}");
            let is_invalid_digit = matches!(
                decode(&text, base),
                Err(DecodeError::InvalidDigit { digit, .. }) if digit == bad
            );
            prop_assert!(is_invalid_digit);
        }

        #[test]
        fn decode_rejects_bad_base(base in prop_oneof![0u32..2, 37u32..1000]) {
            prop_assert_eq!(decode("1", base), Err(DecodeError::InvalidBase { base }));
        }

        #[test]
        fn leading_one_sets_bit_length(zeros in 0usize..200) {
            let text = format!("1{}", "0".repeat(zeros));
            let value = decode(&text, 2).unwrap();
            prop_assert_eq!(value.bit_len(), zeros + 1);
            prop_assert_eq!(value, Integer::one() * Integer::new(2).pow(zeros));
        }
    }
}
