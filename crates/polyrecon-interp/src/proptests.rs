//! Property-based tests for polynomial reconstruction.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use polyrecon_integers::Integer;

    use crate::{
        constant_term_at_zero, interpolate_at, solve, Coefficients, RadixSpec, Sample,
    };

    // Products of up to three i64 factors, well past machine width
    fn big_int() -> impl Strategy<Value = Integer> {
        prop::collection::vec(any::<i64>(), 1..=3).prop_map(|factors| {
            factors
                .into_iter()
                .fold(Integer::new(1), |acc, f| acc * Integer::new(f))
        })
    }

    fn distinct_xs() -> impl Strategy<Value = Vec<i64>> {
        prop::collection::btree_set(-40i64..=40, 1..=7).prop_map(Vec::from_iter)
    }

    // Distinct abscissas plus one coefficient per abscissa
    fn polynomial_and_xs() -> impl Strategy<Value = (Vec<Integer>, Vec<i64>)> {
        distinct_xs().prop_flat_map(|xs| {
            let k = xs.len();
            (prop::collection::vec(big_int(), k), Just(xs))
        })
    }

    fn sample_polynomial(coeffs: &[Integer], xs: &[i64]) -> Vec<Sample> {
        let poly = Coefficients::new(coeffs.to_vec());
        xs.iter()
            .map(|&x| {
                let x = Integer::new(x);
                let y = poly.eval(&x);
                Sample::new(x, y)
            })
            .collect()
    }

    proptest! {
        #[test]
        fn solve_round_trips((coeffs, xs) in polynomial_and_xs()) {
            let samples = sample_polynomial(&coeffs, &xs);
            let solved = solve(&samples).unwrap();
            prop_assert_eq!(solved.as_slice(), coeffs.as_slice());
            prop_assert!(solved.mismatches(&samples).is_empty());
        }

        #[test]
        fn lagrange_matches_elimination((coeffs, xs) in polynomial_and_xs(), at in -100i64..100) {
            let samples = sample_polynomial(&coeffs, &xs);
            let poly = Coefficients::new(coeffs.clone());
            prop_assert_eq!(constant_term_at_zero(&samples).unwrap(), coeffs[0].clone());
            let at = Integer::new(at);
            prop_assert_eq!(interpolate_at(&samples, &at).unwrap(), poly.eval(&at));
        }

        #[test]
        fn solve_is_idempotent((coeffs, xs) in polynomial_and_xs()) {
            let samples = sample_polynomial(&coeffs, &xs);
            let first = solve(&samples);
            let second = solve(&samples);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn encoded_samples_round_trip(
            (coeffs, k) in (1usize..=5).prop_flat_map(|k| {
                (prop::collection::vec(0u64..u64::MAX, k), Just(k))
            }),
            bases in prop::collection::vec(2u32..=36, 5),
        ) {
            // Non-negative coefficients keep every y positive at x = 1..=k.
            let coeffs: Vec<Integer> = coeffs.into_iter().map(Integer::from).collect();
            let xs: Vec<i64> = (1..=i64::try_from(k).unwrap()).collect();
            let decoded: Vec<Sample> = sample_polynomial(&coeffs, &xs)
                .into_iter()
                .zip(&bases)
                .map(|(sample, &base)| {
                    let digits = sample.y().as_inner().in_radix(base).to_string();
                    RadixSpec::new(digits, base).into_sample(sample.x().clone()).unwrap()
                })
                .collect();

            prop_assert_eq!(solve(&decoded).unwrap().into_vec(), coeffs);
        }

        #[test]
        fn repeated_abscissa_is_singular(
            (coeffs, xs) in polynomial_and_xs(),
            y in big_int(),
        ) {
            let mut samples = sample_polynomial(&coeffs, &xs);
            let x = samples[0].x().clone();
            samples.push(Sample::new(x, y));
            // k + 1 samples with only k distinct abscissas
            let is_singular = matches!(
                solve(&samples),
                Err(polyrecon_linalg::SolveError::Singular { .. })
            );
            prop_assert!(is_singular);
        }
    }
}
