use std::time::Duration;

use gridbattle::{
    drive_computer_turn, forward_events, Difficulty, EventLog, MatchEngine, MatchEvent, Pacing,
    Phase, Side,
};
use rand::{rngs::SmallRng, SeedableRng};

fn started(seed: u64) -> MatchEngine {
    let mut engine = MatchEngine::new(Difficulty::Medium, SmallRng::seed_from_u64(seed));
    engine.place_remaining_randomly().unwrap();
    engine.confirm_placement().unwrap();
    engine
}

#[tokio::test]
async fn test_drive_fires_one_shot() {
    let mut engine = started(1);
    let mut log = EventLog::default();
    forward_events(&mut engine, &mut log).await.unwrap();
    assert_eq!(
        log.events.last(),
        Some(&MatchEvent::PhaseChanged {
            from: Phase::Placement,
            to: Phase::ComputerAttacking,
        })
    );

    let shots = drive_computer_turn(&mut engine, &Pacing::immediate(), &mut log)
        .await
        .unwrap();
    assert_eq!(shots, 1);
    assert_eq!(engine.phase(), Phase::AwaitingHumanTurnStart);
    assert!(log.events.iter().any(|e| matches!(
        e,
        MatchEvent::AttackResult {
            side: Side::Computer,
            ..
        }
    )));
    assert!(engine.drain_events().is_empty());
}

#[tokio::test]
async fn test_drive_outside_computer_phase_is_noop() {
    let mut engine = MatchEngine::new(Difficulty::Easy, SmallRng::seed_from_u64(2));
    let mut log = EventLog::default();
    let shots = drive_computer_turn(&mut engine, &Pacing::immediate(), &mut log)
        .await
        .unwrap();
    assert_eq!(shots, 0);
    assert_eq!(engine.phase(), Phase::Placement);
    assert!(log.events.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_drive_waits_opening_delay() {
    let mut engine = started(3);
    engine.drain_events();
    let pacing = Pacing {
        opening_delay: Duration::from_millis(1000),
        attack_delay: Duration::from_millis(400),
    };
    let mut log = EventLog::default();
    let before = tokio::time::Instant::now();
    drive_computer_turn(&mut engine, &pacing, &mut log)
        .await
        .unwrap();
    // Opening delay, one shot, then one attack delay before noticing the
    // hand-off.
    assert!(before.elapsed() >= Duration::from_millis(1400));
    assert_eq!(engine.phase(), Phase::AwaitingHumanTurnStart);
}
