mod common;

use approx::relative_eq;
use delacourse::bands::Band;
use delacourse::{FixedFixed, FixedFixedError, IndexAccess};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(common::random_size_cases()))]

    #[test]
    fn dimension_matches(n in 2usize..500) {
        let k = FixedFixed::new(n).unwrap();
        prop_assert_eq!(k.n().unwrap(), n);
        prop_assert_eq!(k.shape().unwrap(), (n, n));
        prop_assert_eq!(k.dimension(), n);
    }

    #[test]
    fn small_dimensions_rejected(n in 0usize..2) {
        prop_assert!(matches!(
            FixedFixed::new(n),
            Err(FixedFixedError::DimensionError(_))
        ));
    }

    #[test]
    fn entries_are_second_differences(n in 2usize..40) {
        let k = FixedFixed::new(n).unwrap();
        for row in 0..n {
            for column in 0..n {
                let expected = match row.abs_diff(column) {
                    0 => 2.0,
                    1 => -1.0,
                    _ => 0.0,
                };
                prop_assert_eq!(k.entry((row, column)).unwrap().scalar(), Some(expected));
            }
        }
        prop_assert_eq!(k.matrix().nnz(), Band::ALL.iter().map(|b| b.len(n)).sum::<usize>());
    }

    #[test]
    fn unit_solution_matches_closed_form(n in 2usize..200) {
        let mut k = FixedFixed::new(n).unwrap();
        let x = k.solve_unit().unwrap().to_vec();
        for (computed, exact) in x.iter().zip(common::unit_solution(n)) {
            prop_assert!(
                relative_eq!(*computed, exact, max_relative = 1e-9),
                "n = {}: {} != {}", n, computed, exact
            );
        }
    }

    #[test]
    fn solve_unit_is_idempotent(n in 2usize..100) {
        let mut k = FixedFixed::new(n).unwrap();
        let first = k.solve_unit().unwrap().clone();
        let second = k.solve_unit().unwrap().clone();
        prop_assert_eq!(k.num_solves(), 1);
        prop_assert!(first.iter().zip(second.iter()).all(|(a, b)| a.to_bits() == b.to_bits()));
    }

    #[test]
    fn band_lengths(n in 0usize..50) {
        prop_assert_eq!(delacourse::bands::subdiagonal(n).count(), n.saturating_sub(1));
        prop_assert_eq!(delacourse::bands::main_diagonal(n).count(), n);
        prop_assert_eq!(delacourse::bands::superdiagonal(n).count(), n.saturating_sub(1));
    }
}
