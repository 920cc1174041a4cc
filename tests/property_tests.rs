//! Property-Based Tests for UFO Burgers
//!
//! Uses proptest for invariants that must hold for any input:
//! - Selection clamping for arbitrary indices
//! - Strip offset always matching index and spacing
//! - Intro phases entered in order, whatever the polling pattern
//! - Overlay transitions never showing info while closed

use proptest::prelude::*;
use std::time::{Duration, Instant};

use ufoburgers::audio::NullOutput;
use ufoburgers::{
    Carousel, FixedViewport, IntroPhase, IntroSequencer, KeyInput, OverlayState, PageController,
    Spacing,
};

// =============================================================================
// Carousel Property Tests
// =============================================================================

proptest! {
    /// select_index stores clamp(i, 0, 7) for any i
    #[test]
    fn select_is_clamped(i in any::<i64>()) {
        let mut carousel = Carousel::new();
        let stored = carousel.select(i);
        prop_assert_eq!(stored as i64, i.clamp(0, 7));
        prop_assert_eq!(carousel.index(), stored);
    }

    /// Offset is -index * spacing for every index and viewport width
    #[test]
    fn offset_matches_index_and_spacing(i in any::<i64>(), width in 0u32..4000) {
        let t0 = Instant::now();
        let mut page = PageController::mount(&FixedViewport(width), Box::new(NullOutput), t0);
        page.select_index(i);
        let spacing = Spacing::for_width(width);
        prop_assert_eq!(page.compute_offset(), -(page.index() as i64) * i64::from(spacing.pixels()));
    }
}

// =============================================================================
// Intro Sequencer Property Tests
// =============================================================================

proptest! {
    /// Phases are entered 1, 2, 3 in order with no skips or repeats
    #[test]
    fn phases_are_monotonic(mut polls in prop::collection::vec(0u64..12_000, 0..40)) {
        polls.sort_unstable();
        let t0 = Instant::now();
        let mut intro = IntroSequencer::new();
        intro.start(t0);

        let mut seen = Vec::new();
        let mut last = IntroPhase::Waiting;
        for ms in polls {
            for phase in intro.poll(t0 + Duration::from_millis(ms)) {
                prop_assert_eq!(Some(phase), last.next());
                last = phase;
                seen.push(phase);
            }
        }
        // Catch up: the rest of the chain still arrives in order
        for phase in intro.poll(t0 + Duration::from_millis(20_000)) {
            prop_assert_eq!(Some(phase), last.next());
            last = phase;
            seen.push(phase);
        }
        prop_assert_eq!(seen, vec![IntroPhase::FlyingIn, IntroPhase::Landed, IntroPhase::Revealed]);
    }

    /// The UFO cannot be activated before 6500ms
    #[test]
    fn activation_gated_until_landed(ms in 0u64..6500) {
        let t0 = Instant::now();
        let mut page = PageController::mount(&FixedViewport(1024), Box::new(NullOutput), t0);
        page.enter(t0);
        page.tick(t0 + Duration::from_millis(ms));
        prop_assert!(!page.activate_ufo());
        prop_assert_eq!(page.overlay(), OverlayState::Closed);
    }
}

// =============================================================================
// Overlay Property Tests
// =============================================================================

#[derive(Debug, Clone)]
enum Input {
    Activate,
    Select(i64),
    Key(KeyInput),
}

fn input_strategy() -> impl Strategy<Value = Input> {
    prop_oneof![
        Just(Input::Activate),
        any::<i64>().prop_map(Input::Select),
        Just(Input::Key(KeyInput::ArrowLeft)),
        Just(Input::Key(KeyInput::ArrowRight)),
        Just(Input::Key(KeyInput::Escape)),
        Just(Input::Key(KeyInput::Other)),
    ]
}

proptest! {
    /// No input sequence leaves the info card visible while the overlay is closed
    #[test]
    fn info_never_visible_while_closed(inputs in prop::collection::vec(input_strategy(), 0..50)) {
        let t0 = Instant::now();
        let mut page = PageController::mount(&FixedViewport(1024), Box::new(NullOutput), t0);
        page.enter(t0);
        page.tick(t0 + Duration::from_millis(8000));

        for input in inputs {
            match input {
                Input::Activate => { page.activate_ufo(); }
                Input::Select(i) => { page.select_index(i); }
                Input::Key(key) => { page.key(key); }
            }
            prop_assert!(page.menu_open() || !page.info_visible());
            prop_assert!(page.index() <= 7);
        }
    }
}
