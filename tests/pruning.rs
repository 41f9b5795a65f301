//! Property tests: pruning only ever keeps consistent candidates.

use nerdle_solver::core::FeedbackCode;
use nerdle_solver::solver::{CandidateSet, prune_index};
use nerdle_solver::universe::{FeedbackLookup, Universe};
use proptest::prelude::*;
use proptest::sample::Index;
use std::sync::LazyLock;

static UNIVERSE: LazyLock<Universe> = LazyLock::new(|| {
    Universe::generate(5).unwrap_or_else(|error| panic!("length 5 must generate: {error}"))
});

proptest! {
    #[test]
    fn prune_is_idempotent(guess in any::<Index>(), target in any::<Index>()) {
        let universe = &*UNIVERSE;
        let guess = guess.index(universe.len());
        let target = target.index(universe.len());
        let code = universe.code(guess, target);

        let mut once = CandidateSet::full(universe.len());
        prune_index(universe, universe, &mut once, guess, code).unwrap();

        let mut twice = once.clone();
        let report = prune_index(universe, universe, &mut twice, guess, code).unwrap();

        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(report.eliminated(), 0);
    }

    #[test]
    fn prune_is_monotone_and_keeps_target(
        guesses in prop::collection::vec(any::<Index>(), 1..5),
        target in any::<Index>(),
    ) {
        let universe = &*UNIVERSE;
        let target = target.index(universe.len());
        let mut candidates = CandidateSet::full(universe.len());

        for guess in guesses {
            let guess = guess.index(universe.len());
            let before = candidates.clone();
            let code = universe.code(guess, target);

            prune_index(universe, universe, &mut candidates, guess, code).unwrap();

            prop_assert!(candidates.contains(target));
            prop_assert!(candidates.iter().all(|index| before.contains(index)));
            prop_assert!(candidates.iter().all(|index| universe.code(guess, index) == code));
        }
    }

    #[test]
    fn inconsistent_feedback_leaves_set_untouched(guess in any::<Index>()) {
        let universe = &*UNIVERSE;
        let guess = guess.index(universe.len());
        let mut candidates = CandidateSet::full(universe.len());

        // '=' is in every equation, so an all-black hint is never consistent
        let all_black = FeedbackCode::new(0);
        prop_assert!(prune_index(universe, universe, &mut candidates, guess, all_black).is_err());
        prop_assert_eq!(candidates.len(), universe.len());
    }
}
