//! Full-round gameplay tests.
//!
//! These tests drive the engine through whole rounds the way a driver loop
//! would:
//! - Start, reveal, playback hand-off, user turn
//! - Correct reproduction growing the sequence level by level
//! - Mistakes ending the game with the confirmed-rounds score
//! - Input gating outside the user's turn

use simon_core::{
    GameEngine, InputOutcome, MemoryStore, MessageKind, Phase, PresenterEvent, RecordingPresenter,
    ScheduledAdvance, Signal,
};

type TestEngine = GameEngine<RecordingPresenter, MemoryStore>;

fn new_engine(seed: u64) -> TestEngine {
    GameEngine::new(RecordingPresenter::new(), MemoryStore::new()).with_seed(seed)
}

/// Start a game and run it to the first user turn.
fn open_first_turn(engine: &mut TestEngine) {
    let ticket = engine.start().expect("engine should start from idle");
    let epoch = engine
        .fire_scheduled(ticket)
        .expect("first reveal should fire");
    assert!(engine.report_playback_done(epoch));
}

/// Correctly replay the whole current sequence; returns the round ticket.
fn complete_round(engine: &mut TestEngine) -> ScheduledAdvance {
    let signals: Vec<Signal> = engine.sequence().to_vec();
    let last = signals.len() - 1;

    for (i, signal) in signals.into_iter().enumerate() {
        match engine.submit_input(signal) {
            InputOutcome::Matched { position } if i < last => assert_eq!(position, i),
            InputOutcome::RoundComplete(ticket) if i == last => return ticket,
            other => panic!("unexpected outcome at position {}: {:?}", i, other),
        }
    }
    unreachable!("a live round always has at least one signal");
}

/// Fire the round ticket and open the next user turn.
fn open_next_turn(engine: &mut TestEngine, ticket: ScheduledAdvance) {
    let epoch = engine.fire_scheduled(ticket).expect("ticket should be live");
    assert!(engine.report_playback_done(epoch));
}

/// Any signal other than `not`.
fn wrong_signal(not: Signal) -> Signal {
    Signal::ALL
        .into_iter()
        .find(|s| *s != not)
        .expect("four signals exist")
}

/// Test the canonical two-round walkthrough: one correct round, then a
/// mistake on the first input of round two.
#[test]
fn test_first_rounds_walkthrough() {
    let mut engine = new_engine(11);
    open_first_turn(&mut engine);

    assert_eq!(engine.level(), 1);
    assert_eq!(engine.sequence().len(), 1);
    let first = engine.sequence()[0];

    let ticket = complete_round(&mut engine);
    assert_eq!(engine.phase(), Phase::AwaitingPlayback);

    open_next_turn(&mut engine, ticket);
    assert_eq!(engine.level(), 2);
    assert_eq!(engine.sequence().len(), 2);
    assert_eq!(engine.sequence()[0], first, "old signals are preserved");

    let outcome = engine.submit_input(wrong_signal(engine.sequence()[0]));
    assert_eq!(outcome, InputOutcome::GameOver { score: 1 });
    assert_eq!(engine.phase(), Phase::GameOver);
}

/// Test that level and sequence length rise together, one per round.
#[test]
fn test_level_tracks_sequence_across_rounds() {
    let mut engine = new_engine(23);
    open_first_turn(&mut engine);

    let mut previous: Vec<Signal> = Vec::new();
    for round in 1..=8u32 {
        assert_eq!(engine.level(), round);
        assert_eq!(engine.sequence().len() as u32, round);
        assert_eq!(
            &engine.sequence()[..previous.len()],
            previous.as_slice(),
            "each round extends the prior sequence"
        );
        previous = engine.sequence().to_vec();

        let ticket = complete_round(&mut engine);
        open_next_turn(&mut engine, ticket);
    }

    assert_eq!(engine.level(), 9);
}

/// Test that a mismatch mid-round ends the game at once with the
/// confirmed-rounds score.
#[test]
fn test_mid_round_mismatch_scores_confirmed_rounds() {
    let mut engine = new_engine(42);
    open_first_turn(&mut engine);

    for _ in 0..3 {
        let ticket = complete_round(&mut engine);
        open_next_turn(&mut engine, ticket);
    }
    assert_eq!(engine.level(), 4);

    // Two correct inputs, then a wrong third.
    let signals: Vec<Signal> = engine.sequence().to_vec();
    assert_eq!(
        engine.submit_input(signals[0]),
        InputOutcome::Matched { position: 0 }
    );
    assert_eq!(
        engine.submit_input(signals[1]),
        InputOutcome::Matched { position: 1 }
    );
    assert_eq!(
        engine.submit_input(wrong_signal(signals[2])),
        InputOutcome::GameOver { score: 3 }
    );

    // The game is over; nothing else is checked or accepted.
    assert_eq!(engine.phase(), Phase::GameOver);
    assert_eq!(engine.submit_input(signals[3]), InputOutcome::Ignored);
    assert_eq!(engine.stats().games_played, 1);
    assert_eq!(engine.stats().total_score, 3);
}

/// Test the presenter transcript from start to the first user turn.
#[test]
fn test_round_opening_transcript() {
    let mut engine = new_engine(5);
    open_first_turn(&mut engine);

    let revealed = engine.sequence().to_vec();
    let expected = vec![
        PresenterEvent::InputEnabled(false),
        PresenterEvent::Message {
            text: "Get Ready...".to_string(),
            kind: MessageKind::Info,
        },
        PresenterEvent::InputEnabled(false),
        PresenterEvent::Message {
            text: "Level 1".to_string(),
            kind: MessageKind::Level,
        },
        PresenterEvent::Sequence {
            signals: revealed,
            interval: engine.interval(),
        },
        PresenterEvent::InputEnabled(true),
        PresenterEvent::Message {
            text: "Your Turn!".to_string(),
            kind: MessageKind::UserTurn,
        },
    ];

    assert_eq!(engine.presenter().events(), &expected[..]);
}

/// Test that each accepted input is echoed back as a flash.
#[test]
fn test_accepted_inputs_are_echoed() {
    let mut engine = new_engine(13);
    open_first_turn(&mut engine);
    let ticket = complete_round(&mut engine);
    open_next_turn(&mut engine, ticket);

    engine.presenter_mut().clear();
    let signals: Vec<Signal> = engine.sequence().to_vec();
    let _ = engine.submit_input(signals[0]);
    let _ = engine.submit_input(signals[1]);

    let echoes: Vec<Signal> = engine
        .presenter()
        .events()
        .iter()
        .filter_map(|event| match event {
            PresenterEvent::Signal(signal) => Some(*signal),
            _ => None,
        })
        .collect();
    assert_eq!(echoes, &signals[..2]);
}

/// Test that input during the post-round acknowledgment beat is ignored.
#[test]
fn test_input_ignored_during_acknowledgment_beat() {
    let mut engine = new_engine(3);
    open_first_turn(&mut engine);

    let _ticket = complete_round(&mut engine);
    assert_eq!(engine.phase(), Phase::AwaitingPlayback);

    let before = engine.sequence().to_vec();
    assert_eq!(engine.submit_input(Signal::Green), InputOutcome::Ignored);
    assert_eq!(engine.sequence(), &before[..]);
    assert_eq!(engine.progress(), 0);
}

/// Test starting a fresh game after a loss.
#[test]
fn test_restart_after_game_over() {
    let mut engine = new_engine(31);
    open_first_turn(&mut engine);

    let wrong = wrong_signal(engine.sequence()[0]);
    assert_eq!(
        engine.submit_input(wrong),
        InputOutcome::GameOver { score: 0 }
    );

    open_first_turn(&mut engine);
    assert_eq!(engine.level(), 1);
    assert_eq!(engine.sequence().len(), 1);
    assert_eq!(engine.phase(), Phase::AwaitingInput);
    assert_eq!(
        engine.stats().games_played,
        1,
        "starting a game records nothing"
    );
}

/// Test that the sound toggle never touches game state.
#[test]
fn test_sound_toggle_leaves_game_untouched() {
    let mut engine = new_engine(17);
    open_first_turn(&mut engine);
    let before = engine.sequence().to_vec();

    assert!(!engine.toggle_sound());
    assert_eq!(engine.phase(), Phase::AwaitingInput);
    assert_eq!(engine.sequence(), &before[..]);

    // Input is still live and validated as usual.
    assert_ne!(engine.submit_input(before[0]), InputOutcome::Ignored);
}
