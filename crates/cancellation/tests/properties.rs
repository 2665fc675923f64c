use proptest::prelude::*;
use smallcancel_core::{
    cprime, decide, min_piece_count, pieces, Analyzer, AnalysisConfig, PieceCount, PieceRatio,
};
use smallcancel_words::{RelatorSet, Word};

fn relator_strategy() -> impl Strategy<Value = Word> {
    prop::collection::vec(prop_oneof![(1i32..4), (-3i32..0)], 1..10).prop_filter_map(
        "cyclically reduced, non-empty",
        |generators| {
            let word = Word::from_generators(&generators).ok()?.cyclic_reduce();
            (!word.is_empty()).then_some(word)
        },
    )
}

fn relator_set_strategy() -> impl Strategy<Value = RelatorSet> {
    prop::collection::vec(relator_strategy(), 1..4)
        .prop_map(|words| RelatorSet::new(words).expect("generated words are cyclically reduced"))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn cprime_lies_in_unit_interval(set in relator_set_strategy()) {
        let ratio = cprime(&set, 1).unwrap();
        prop_assert!(ratio.numerator() > 0);
        prop_assert!(ratio <= PieceRatio::one());
    }

    #[test]
    fn cprime_short_circuits_exactly_at_threshold(
        set in relator_set_strategy(),
        lambda in 1u32..10,
    ) {
        let exact = cprime(&set, 1).unwrap();
        let bounded = cprime(&set, lambda).unwrap();
        let threshold = PieceRatio::new(1, lambda as usize).unwrap();
        if exact >= threshold {
            prop_assert_eq!(bounded, PieceRatio::one());
        } else {
            prop_assert_eq!(bounded, exact);
        }
    }

    #[test]
    fn pieces_are_closed_under_inversion(set in relator_set_strategy()) {
        let found = pieces(&set);
        for piece in &found {
            prop_assert!(found.contains(&piece.inverse()), "missing inverse of {}", piece);
        }
    }

    #[test]
    fn piece_count_is_capped_minimum(set in relator_set_strategy(), q in 1usize..9) {
        let full = min_piece_count(&set, PieceCount::Infinite).unwrap();
        let capped = min_piece_count(&set, PieceCount::Finite(q)).unwrap();
        prop_assert_eq!(capped, full.min(PieceCount::Finite(q)));
    }

    #[test]
    fn piece_count_is_monotone_in_quit_at(
        set in relator_set_strategy(),
        q1 in 1usize..9,
        extra in 0usize..5,
    ) {
        let low = min_piece_count(&set, PieceCount::Finite(q1)).unwrap();
        let high = min_piece_count(&set, PieceCount::Finite(q1 + extra)).unwrap();
        prop_assert!(low <= high);
    }

    #[test]
    fn memoization_does_not_change_answers(set in relator_set_strategy()) {
        let plain = Analyzer::new(AnalysisConfig { memoize: false, ..Default::default() }).unwrap();
        let memo = Analyzer::default();
        prop_assert_eq!(
            plain.min_piece_count(&set, PieceCount::Infinite).unwrap(),
            memo.min_piece_count(&set, PieceCount::Infinite).unwrap()
        );
    }

    #[test]
    fn decision_is_idempotent(set in relator_set_strategy()) {
        prop_assert_eq!(decide(&set, None).unwrap(), decide(&set, None).unwrap());
        prop_assert_eq!(pieces(&set), pieces(&set));
    }
}
