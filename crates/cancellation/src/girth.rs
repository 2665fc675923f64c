use smallcancel_graph::{Girth, WhiteheadBuilder};
use smallcancel_words::RelatorSet;

/// Girth of the reduced Whitehead graph
pub fn whitehead_girth(relators: &RelatorSet) -> Girth {
    WhiteheadBuilder::new().build(relators).girth()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_girth_of_reference_relators() {
        let girth_of = |relators: &[&str]| {
            whitehead_girth(&RelatorSet::normalize(relators.iter().copied()).unwrap())
        };
        assert_eq!(girth_of(&["abAB"]), Girth::Finite(4));
        assert_eq!(girth_of(&["cacbcbcbcabacbcaba"]), Girth::Finite(6));
        assert_eq!(girth_of(&["abcabd"]), Girth::Infinite);
    }
}
