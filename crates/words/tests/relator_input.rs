use pretty_assertions::assert_eq;
use proptest::prelude::*;
use smallcancel_words::{Letter, RelatorInput, RelatorSet, Word, WordError};

#[test]
fn json_accepts_letters_and_generator_lists() {
    let set: RelatorSet =
        serde_json::from_str(r#"["abAB", [-2, -2, -3, -1, -2, -3, -3, -2, 1, 2, 2, 3, 3]]"#)
            .expect("valid relator set");

    assert_eq!(set.len(), 2);
    assert_eq!(set.as_slice()[0], Word::parse("abAB").unwrap());
    assert_eq!(set.as_slice()[1].to_string(), "BBCABCCBabbcc");
}

#[test]
fn json_reports_contract_violations() {
    let err = serde_json::from_str::<RelatorSet>(r#"["abA"]"#).unwrap_err();
    assert!(
        err.to_string().contains("not cyclically reduced"),
        "unexpected error: {err}"
    );

    let err = serde_json::from_str::<RelatorSet>("[]").unwrap_err();
    assert!(err.to_string().contains("empty"), "unexpected error: {err}");
}

#[test]
fn generator_inputs_reject_zero() {
    let err = RelatorSet::normalize([RelatorInput::Generators(vec![1, 0, 2])]).unwrap_err();
    assert_eq!(err, WordError::ZeroGenerator);
}

fn letter_strategy() -> impl Strategy<Value = Letter> {
    prop_oneof![(1i32..5), (-4i32..0)].prop_map(|v| Letter::new(v).unwrap())
}

proptest! {
    #[test]
    fn inverse_is_an_involution(letters in prop::collection::vec(letter_strategy(), 0..20)) {
        let word = Word::new(letters);
        prop_assert_eq!(word.inverse().inverse(), word);
    }

    #[test]
    fn cyclic_reduce_yields_cyclically_reduced_words(
        letters in prop::collection::vec(letter_strategy(), 0..20)
    ) {
        let reduced = Word::new(letters).cyclic_reduce();
        prop_assert!(reduced.is_cyclically_reduced());
        prop_assert_eq!(reduced.cyclic_reduce(), reduced.clone());
    }

    #[test]
    fn word_times_inverse_reduces_to_identity(
        letters in prop::collection::vec(letter_strategy(), 0..20)
    ) {
        let word = Word::new(letters);
        let mut product = word.letters().to_vec();
        product.extend_from_slice(word.inverse().letters());
        prop_assert!(Word::new(product).free_reduce().is_empty());
    }
}
