//! Tests for the Page Controller
//!
//! These tests drive the controller the way the terminal shell does, with a
//! recording audio output and fixed viewports:
//! - The full landing walkthrough, from Enter to Escape
//! - Teardown in the middle of the intro
//! - Guarded actions and responsive spacing

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use ufoburgers::audio::{AudioOutput, Cue, Playback};
use ufoburgers::error::Result;
use ufoburgers::{FixedViewport, IntroPhase, KeyInput, OverlayState, PageController, Spacing};

// =============================================================================
// Recording audio output
// =============================================================================

#[derive(Debug, Default)]
struct AudioLog {
    prepared: Vec<&'static str>,
    played: Vec<&'static str>,
    stopped: usize,
}

struct RecordingOutput(Rc<RefCell<AudioLog>>);

struct RecordingPlayback(Rc<RefCell<AudioLog>>);

impl Playback for RecordingPlayback {
    fn stop(&mut self) {
        self.0.borrow_mut().stopped += 1;
    }

    fn is_finished(&self) -> bool {
        false
    }
}

impl AudioOutput for RecordingOutput {
    fn prepare(&mut self, cue: &'static Cue) {
        self.0.borrow_mut().prepared.push(cue.name);
    }

    fn play(&mut self, cue: &'static Cue) -> Result<Box<dyn Playback>> {
        self.0.borrow_mut().played.push(cue.name);
        Ok(Box::new(RecordingPlayback(Rc::clone(&self.0))))
    }
}

fn mount(width: u32) -> (PageController, Rc<RefCell<AudioLog>>, Instant) {
    let log = Rc::new(RefCell::new(AudioLog::default()));
    let t0 = Instant::now();
    let page = PageController::mount(
        &FixedViewport(width),
        Box::new(RecordingOutput(Rc::clone(&log))),
        t0,
    );
    (page, log, t0)
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

// =============================================================================
// Walkthrough
// =============================================================================

#[test]
fn test_full_landing_walkthrough() {
    let (mut page, log, t0) = mount(1024);

    assert!(page.enter(t0));

    assert_eq!(page.tick(t0 + ms(500)), vec![IntroPhase::FlyingIn]);
    assert_eq!(log.borrow().played, vec!["ufo-whoosh"]);

    assert_eq!(page.tick(t0 + ms(6500)), vec![IntroPhase::Landed]);
    assert_eq!(page.tick(t0 + ms(8000)), vec![IntroPhase::Revealed]);
    assert_eq!(log.borrow().played.len(), 1, "cue fires exactly once");
    assert_eq!(
        page.intro().history(),
        &[
            (IntroPhase::FlyingIn, t0 + ms(500)),
            (IntroPhase::Landed, t0 + ms(6500)),
            (IntroPhase::Revealed, t0 + ms(8000)),
        ]
    );

    assert!(page.activate_ufo());
    assert_eq!(page.overlay(), OverlayState::Open);
    assert!(!page.info_visible());

    assert_eq!(page.select_index(5), 5);
    assert_eq!(page.overlay(), OverlayState::OpenWithInfo);
    assert_eq!(page.index(), 5);

    assert!(page.key(KeyInput::ArrowRight));
    assert_eq!(page.index(), 6);

    assert!(page.key(KeyInput::Escape));
    assert_eq!(page.overlay(), OverlayState::Closed);
    assert!(!page.info_visible());
}

#[test]
fn test_cue_prepared_at_mount() {
    let (mut page, log, t0) = mount(1024);
    assert_eq!(log.borrow().prepared, vec!["ufo-whoosh"]);
    assert!(log.borrow().played.is_empty());

    page.enter(t0);
    page.tick(t0 + ms(500));
    assert_eq!(log.borrow().prepared.len(), 1);
    assert_eq!(log.borrow().played, vec!["ufo-whoosh"]);
}

#[test]
fn test_late_tick_enters_every_phase_in_order() {
    let (mut page, log, t0) = mount(1024);
    page.enter(t0);

    let entered = page.tick(t0 + ms(20_000));
    assert_eq!(
        entered,
        vec![IntroPhase::FlyingIn, IntroPhase::Landed, IntroPhase::Revealed]
    );
    // Cue started on phase 1 and released again on phase 2
    assert_eq!(log.borrow().played.len(), 1);
    assert_eq!(log.borrow().stopped, 1);
    assert!(!page.cue_active());
}

// =============================================================================
// Teardown
// =============================================================================

#[test]
fn test_unmount_mid_intro_cancels_and_releases() {
    let (mut page, log, t0) = mount(1024);
    page.enter(t0);
    page.tick(t0 + ms(1000));
    assert!(page.cue_active());

    let teardown = page.unmount();
    assert_eq!(teardown.cancelled_transitions, 2);
    assert!(teardown.released_cue);
    assert_eq!(log.borrow().stopped, 1);

    assert!(page.tick(t0 + ms(10_000)).is_empty());
    assert_eq!(page.phase(), IntroPhase::FlyingIn);
    assert_eq!(log.borrow().played.len(), 1);
}

#[test]
fn test_inputs_ignored_after_unmount() {
    let (mut page, _, t0) = mount(1024);
    page.enter(t0);
    page.tick(t0 + ms(8000));
    page.activate_ufo();
    page.unmount();
    assert!(!page.is_mounted());

    let before = (page.index(), page.spacing(), page.overlay());
    assert_eq!(page.select_index(7), 3);
    assert_eq!(page.next(), 3);
    assert_eq!(page.previous(), 3);
    assert_eq!(page.resize(&FixedViewport(500)), Spacing::Wide);
    assert!(!page.key(KeyInput::Escape));

    assert_eq!((page.index(), page.spacing(), page.overlay()), before);
    assert_eq!(page.compute_offset(), -3 * 480);
}

#[test]
fn test_drop_releases_cue() {
    let (mut page, log, t0) = mount(1024);
    page.enter(t0);
    page.tick(t0 + ms(600));
    drop(page);
    assert_eq!(log.borrow().stopped, 1);
}

#[test]
fn test_unmount_before_enter_is_clean() {
    let (mut page, log, _) = mount(1024);
    let teardown = page.unmount();
    assert_eq!(teardown.cancelled_transitions, 0);
    assert!(!teardown.released_cue);
    assert_eq!(log.borrow().stopped, 0);
}

// =============================================================================
// Guards
// =============================================================================

#[test]
fn test_activation_before_landing_never_opens() {
    let (mut page, _, t0) = mount(1024);
    page.enter(t0);
    for t in [0, 499, 500, 3000, 6499] {
        page.tick(t0 + ms(t));
        assert!(!page.activate_ufo());
        assert_eq!(page.overlay(), OverlayState::Closed);
    }
    page.tick(t0 + ms(6500));
    assert!(page.activate_ufo());
}

#[test]
fn test_repeated_activation_toggles() {
    let (mut page, _, t0) = mount(1024);
    page.enter(t0);
    page.tick(t0 + ms(8000));
    for round in 0..4 {
        page.activate_ufo();
        assert_eq!(page.menu_open(), round % 2 == 0);
    }
}

// =============================================================================
// Responsive spacing
// =============================================================================

#[test]
fn test_resize_1024_to_500() {
    let (mut page, _, _) = mount(1024);
    assert_eq!(page.spacing(), Spacing::Wide);
    assert_eq!(page.compute_offset(), -3 * 480);

    assert_eq!(page.resize(&FixedViewport(500)), Spacing::Compact);
    assert_eq!(page.compute_offset(), -3 * 390);
}

#[test]
fn test_breakpoint_is_inclusive() {
    let (mut page, _, _) = mount(769);
    assert_eq!(page.spacing(), Spacing::Wide);
    page.resize(&FixedViewport(768));
    assert_eq!(page.spacing(), Spacing::Compact);
}
