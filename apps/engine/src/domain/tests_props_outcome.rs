use proptest::prelude::*;

use crate::domain::{evaluate, test_gens, test_prelude, Outcome, Symbol};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: Unknown on either side is always Inconclusive.
    #[test]
    fn prop_unknown_is_inconclusive(other in test_gens::any_symbol()) {
        prop_assert_eq!(evaluate(&Symbol::unknown(), &other), Outcome::Inconclusive);
        prop_assert_eq!(evaluate(&other, &Symbol::unknown()), Outcome::Inconclusive);
    }

    /// Property: a letter matches itself.
    #[test]
    fn prop_same_letter_is_correct(x in test_gens::letter()) {
        prop_assert_eq!(evaluate(&x, &x), Outcome::Correct);
    }

    /// Property: distinct letters are Incorrect, never Inconclusive.
    #[test]
    fn prop_distinct_letters_are_incorrect((x, y) in test_gens::distinct_letters()) {
        prop_assert_ne!(&x, &y);
        prop_assert_eq!(evaluate(&x, &y), Outcome::Incorrect);
    }

    /// Property: case of the observed label does not matter.
    #[test]
    fn prop_case_insensitive(x in test_gens::letter()) {
        let lowered = Symbol::letter(&x.name().to_lowercase());
        prop_assert_eq!(evaluate(&x, &lowered), Outcome::Correct);
    }
}
