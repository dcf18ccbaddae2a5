mod common;

use common::{row, table, ScriptedEvaluator};
use evaltable::builder::TableBuilder;
use evaltable::compare::compare;
use evaltable::ids::{all_datasets, all_methods, Dataset, Method};
use evaltable::parser::parse_numbers;
use evaltable::table::{round_to, ResultTable};
use proptest::prelude::*;

// --- STRATEGIES ---

prop_compose! {
    fn arb_values()(v in proptest::array::uniform4(0.0..1.0f64)) -> [f64; 4] {
        v
    }
}

prop_compose! {
    fn arb_table_pair()(
        methods in proptest::sample::subsequence(all_methods(), 1..=9)
    )(
        a in proptest::collection::vec(arb_values(), methods.len()),
        b in proptest::collection::vec(arb_values(), methods.len()),
        methods in Just(methods)
    ) -> (ResultTable, ResultTable) {
        let rows = |vals: &[[f64; 4]]| {
            table(methods.iter().zip(vals).map(|(&m, v)| row(Dataset::Benzene, m, *v)).collect())
        };
        (rows(&a), rows(&b))
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn test_rounding_is_idempotent(x in -1.0e4..1.0e4f64) {
        let once = round_to(x, 3);
        prop_assert_eq!(round_to(once, 3), once);
    }

    #[test]
    fn test_bound_symmetry((a, b) in arb_table_pair()) {
        let ab = compare(&a, &b).unwrap();
        let ba = compare(&b, &a).unwrap();
        prop_assert_eq!(ab.bound(), ba.bound());
        prop_assert!(ab.bound() >= 0.0);
        for r in ab.rows() {
            for d in r.diffs {
                prop_assert!(d.abs() <= ab.bound());
            }
        }
    }

    #[test]
    fn test_self_comparison_is_zero((a, _b) in arb_table_pair()) {
        prop_assert_eq!(compare(&a, &a).unwrap().bound(), 0.0);
    }

    #[test]
    fn test_parser_preserves_order(
        values in proptest::collection::vec(-1000.0..1000.0f64, 2..12),
        filler in "[a-z =,:]{1,6}"
    ) {
        let tokens: Vec<String> = values.iter().map(|v| format!("{:.3}", v)).collect();
        let text = format!("{}{}", tokens.join(&format!(" {} ", filler)), "\n");
        let expected: Vec<f64> = tokens.iter().map(|t| t.parse().unwrap()).collect();
        prop_assert_eq!(parse_numbers(&text).unwrap(), expected);
    }

    #[test]
    fn test_build_covers_cross_product(
        datasets in proptest::sample::subsequence(all_datasets(), 0..=3),
        methods in proptest::sample::subsequence(all_methods(), 0..=9)
    ) {
        let eval = ScriptedEvaluator::new();
        let t = TableBuilder::new(&eval).build(&datasets, &methods).unwrap();

        prop_assert_eq!(t.len(), datasets.len() * methods.len());
        prop_assert_eq!(eval.calls.borrow().len(), 2 * t.len());

        let expected: Vec<(Dataset, Method)> = datasets
            .iter()
            .flat_map(|&d| methods.iter().map(move |&m| (d, m)))
            .collect();
        let actual: Vec<_> = t.rows().iter().map(|r| r.key()).collect();
        prop_assert_eq!(actual, expected);
    }
}
