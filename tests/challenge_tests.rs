//! Challenge engine integration tests.
//!
//! These walk the engine through complete sessions: success at the exact
//! target-count crossing, timeout after 30 ticks, cancellation, and the
//! late-call no-op guarantees.

use solar_defense::challenge::{
    ChallengeEngine, ItemId, Outcome, Resolution, ToggleResult, CHALLENGE_SECONDS,
};
use solar_defense::core::DefenderType;

/// Drive an engine to success by selecting the first `target_count` items.
fn select_to_target(engine: &mut ChallengeEngine) -> Resolution {
    let target = engine.session().unwrap().definition().target_count;
    for i in 0..target - 1 {
        assert_eq!(
            engine.toggle_item(ItemId::new(i as u32)),
            ToggleResult::Selected
        );
    }
    match engine.toggle_item(ItemId::new((target - 1) as u32)) {
        ToggleResult::Completed(resolution) => resolution,
        other => panic!("expected completion, got {other:?}"),
    }
}

// =============================================================================
// Success Path
// =============================================================================

/// Every variant succeeds after exactly target_count distinct selections,
/// with reward points matching the severity tier.
#[test]
fn test_every_variant_succeeds_at_target_count() {
    let cases = [(9.0, 150), (8.0, 150), (7.5, 100), (5.0, 100), (3.0, 50)];

    for (intensity, expected_points) in cases {
        for defender in DefenderType::all() {
            let mut engine = ChallengeEngine::with_builtin();
            engine.start(defender, intensity).unwrap();

            let resolution = select_to_target(&mut engine);

            assert_eq!(resolution.defender, defender);
            assert_eq!(resolution.outcome, Outcome::Success);
            assert_eq!(resolution.points, expected_points);
            assert!(!engine.is_running());
        }
    }
}

/// Concrete scenario: satellite challenge at intensity 7.5, select 5 of 8
/// satellites, success worth 100 points.
#[test]
fn test_satellite_medium_tier_scenario() {
    let mut engine = ChallengeEngine::with_builtin();
    engine.start(DefenderType::Satellite, 7.5).unwrap();

    assert_eq!(engine.session().unwrap().definition().item_count(), 8);

    for i in 0..4 {
        engine.toggle_item(ItemId::new(i));
    }
    assert_eq!(engine.session().unwrap().progress(), 0.8);

    match engine.toggle_item(ItemId::new(4)) {
        ToggleResult::Completed(resolution) => {
            assert_eq!(resolution.points, 100);
            assert_eq!(resolution.outcome, Outcome::Success);
        }
        other => panic!("expected completion, got {other:?}"),
    }
}

/// Selection past the target count is impossible: success fires exactly at
/// the threshold crossing and the session is gone afterwards.
#[test]
fn test_no_selection_past_target() {
    let mut engine = ChallengeEngine::with_builtin();
    engine.start(DefenderType::Farmer, 6.0).unwrap();

    select_to_target(&mut engine);

    assert_eq!(engine.toggle_item(ItemId::new(5)), ToggleResult::Ignored);
}

// =============================================================================
// Timeout Path
// =============================================================================

/// Concrete scenario: farmer challenge, no selections, 30 ticks elapse,
/// failure with zero points.
#[test]
fn test_farmer_timeout_scenario() {
    let mut engine = ChallengeEngine::with_builtin();
    engine.start(DefenderType::Farmer, 6.0).unwrap();

    for tick in 1..CHALLENGE_SECONDS {
        assert!(engine.tick().is_none(), "expired early at tick {tick}");
    }

    let resolution = engine.tick().expect("tick 30 must expire");
    assert_eq!(resolution.defender, DefenderType::Farmer);
    assert_eq!(resolution.outcome, Outcome::Timeout);
    assert_eq!(resolution.points, 0);
    assert!(!engine.is_running());
}

/// Insufficient selections still time out.
#[test]
fn test_partial_selection_still_times_out() {
    let mut engine = ChallengeEngine::with_builtin();
    engine.start(DefenderType::PowerGrid, 6.0).unwrap();

    engine.toggle_item(ItemId::new(0));
    engine.toggle_item(ItemId::new(1));

    let mut resolution = None;
    for _ in 0..CHALLENGE_SECONDS {
        resolution = engine.tick();
        if resolution.is_some() {
            break;
        }
    }
    assert_eq!(resolution.unwrap().outcome, Outcome::Timeout);
}

// =============================================================================
// Toggle Semantics
// =============================================================================

/// Toggling the same item twice restores the prior selection state and
/// decreases progress accordingly.
#[test]
fn test_toggle_is_its_own_inverse() {
    let mut engine = ChallengeEngine::with_builtin();
    engine.start(DefenderType::Pilot, 6.0).unwrap();

    engine.toggle_item(ItemId::new(0));
    engine.toggle_item(ItemId::new(1));
    let progress_before = engine.session().unwrap().progress();

    engine.toggle_item(ItemId::new(2));
    assert!(engine.session().unwrap().progress() > progress_before);

    engine.toggle_item(ItemId::new(2));
    let session = engine.session().unwrap();
    assert_eq!(session.progress(), progress_before);
    assert_eq!(session.selected_count(), 2);
    assert!(!session.is_selected(ItemId::new(2)));
}

/// An item id outside the active definition is rejected without touching
/// the session.
#[test]
fn test_invalid_item_rejected() {
    let mut engine = ChallengeEngine::with_builtin();
    engine.start(DefenderType::Pilot, 6.0).unwrap();

    engine.toggle_item(ItemId::new(0));
    assert_eq!(engine.toggle_item(ItemId::new(42)), ToggleResult::InvalidItem);
    assert_eq!(engine.session().unwrap().selected_count(), 1);
}

// =============================================================================
// Terminal-State Guarantees
// =============================================================================

/// First resolution wins: after success, the pending host tick is inert.
#[test]
fn test_late_tick_after_success_is_noop() {
    let mut engine = ChallengeEngine::with_builtin();
    engine.start(DefenderType::Pilot, 6.0).unwrap();

    select_to_target(&mut engine);

    // The host interval may fire once more before it is cleared.
    assert!(engine.tick().is_none());
    assert!(engine.tick().is_none());
}

/// After timeout, a completing toggle sequence is discarded silently.
#[test]
fn test_late_toggle_after_timeout_is_noop() {
    let mut engine = ChallengeEngine::with_builtin();
    engine.start(DefenderType::Pilot, 6.0).unwrap();

    for _ in 0..CHALLENGE_SECONDS {
        engine.tick();
    }
    assert!(!engine.is_running());

    for i in 0..4 {
        assert_eq!(engine.toggle_item(ItemId::new(i)), ToggleResult::Ignored);
    }
}

/// Cancellation stops the countdown before returning and awards nothing.
#[test]
fn test_cancel_then_restart() {
    let mut engine = ChallengeEngine::with_builtin();
    engine.start(DefenderType::Satellite, 6.0).unwrap();
    engine.toggle_item(ItemId::new(0));

    assert!(engine.cancel());
    assert!(engine.tick().is_none());

    // Terminal states transition back to idle on the next start.
    engine.start(DefenderType::Satellite, 6.0).unwrap();
    let session = engine.session().unwrap();
    assert_eq!(session.selected_count(), 0);
    assert_eq!(session.time_left(), CHALLENGE_SECONDS);
}
