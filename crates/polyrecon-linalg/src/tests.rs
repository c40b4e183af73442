//! Integration tests for polyrecon-linalg.

#[cfg(test)]
mod integration_tests {
    use num_traits::One;
    use polyrecon_integers::Integer;
    use proptest::prelude::*;

    use crate::{eliminate, solve_augmented, DenseMatrix, SolveError};

    fn augment(a: &DenseMatrix<Integer>, b: &[Integer]) -> DenseMatrix<Integer> {
        let rows = (0..a.num_rows())
            .map(|i| {
                let mut row = a.row(i).to_vec();
                row.push(b[i].clone());
                row
            })
            .collect();
        DenseMatrix::from_rows(rows)
    }

    #[test]
    fn test_identity_system() {
        let id: DenseMatrix<Integer> = DenseMatrix::identity(4);
        let b: Vec<Integer> = (1..=4).map(Integer::new).collect();
        assert_eq!(solve_augmented(augment(&id, &b)).unwrap(), b);
    }

    #[test]
    fn test_elimination_leaves_upper_triangle() {
        let a = DenseMatrix::from_rows(vec![
            vec![Integer::new(1), Integer::new(1), Integer::new(1)],
            vec![Integer::new(1), Integer::new(2), Integer::new(4)],
            vec![Integer::new(1), Integer::new(3), Integer::new(9)],
        ]);
        let b = vec![Integer::new(6), Integer::new(17), Integer::new(34)];
        let mut m = augment(&a, &b);
        eliminate(&mut m).unwrap();

        for i in 0..3 {
            for j in 0..i {
                assert_eq!(m[(i, j)], Integer::new(0), "entry ({i}, {j})");
            }
            assert_ne!(m[(i, i)], Integer::new(0));
        }
    }

    #[test]
    fn test_huge_entries_stay_exact() {
        // Diagonal system with a 300-bit right-hand side.
        let big = Integer::new(3).pow(190);
        let a = DenseMatrix::from_rows(vec![
            vec![Integer::new(2), Integer::new(0)],
            vec![Integer::new(0), Integer::new(3)],
        ]);
        let b = vec![&big * &Integer::new(2), &big * &Integer::new(3)];
        let x = solve_augmented(augment(&a, &b)).unwrap();
        assert_eq!(x, vec![big.clone(), big]);
    }

    #[test]
    fn test_duplicate_rows_are_singular() {
        let m = DenseMatrix::from_rows(vec![
            vec![Integer::one(), Integer::new(2), Integer::new(3)],
            vec![Integer::one(), Integer::new(2), Integer::new(4)],
        ]);
        assert!(matches!(
            solve_augmented(m),
            Err(SolveError::Singular { column: 1 })
        ));
    }

    fn small_system(n: usize) -> impl Strategy<Value = (Vec<Vec<i64>>, Vec<i64>)> {
        (
            prop::collection::vec(prop::collection::vec(-6i64..=6, n), n),
            prop::collection::vec(-1000i64..=1000, n),
        )
    }

    proptest! {
        #[test]
        fn recovers_integer_solutions((rows, x) in (1usize..=5).prop_flat_map(small_system)) {
            let a = DenseMatrix::from_rows(
                rows.iter().map(|r| r.iter().copied().map(Integer::new).collect()).collect(),
            );
            let x: Vec<Integer> = x.into_iter().map(Integer::new).collect();
            let b = a.mv(&x);

            match solve_augmented(augment(&a, &b)) {
                Ok(solution) => prop_assert_eq!(solution, x),
                Err(SolveError::Singular { .. }) => prop_assume!(false),
                Err(other) => prop_assert!(false, "unexpected error {other}"),
            }
        }

        #[test]
        fn solving_is_deterministic((rows, x) in (1usize..=4).prop_flat_map(small_system)) {
            let a = DenseMatrix::from_rows(
                rows.iter().map(|r| r.iter().copied().map(Integer::new).collect()).collect(),
            );
            let b: Vec<Integer> = x.into_iter().map(Integer::new).collect();
            let m = augment(&a, &b);
            prop_assert_eq!(solve_augmented(m.clone()), solve_augmented(m));
        }
    }
}
