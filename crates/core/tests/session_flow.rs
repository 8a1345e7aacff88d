mod common;

use common::{full_catalog, get};
use janken_core::{
    Event, EventBus, GameConfig, HandDef, Phase, RoundOutcome, Session, SessionError, Side,
};

fn ids(hands: &[HandDef]) -> Vec<&str> {
    hands.iter().map(|hand| hand.id.as_str()).collect()
}

fn new_session(seed: u64) -> Session {
    let catalog = full_catalog();
    let mut events = EventBus::default();
    Session::start_default(GameConfig::default(), catalog, seed, &mut events).expect("start")
}

fn set_computer(session: &mut Session, hand_ids: &[&str]) {
    session.computer_hands = hand_ids
        .iter()
        .map(|id| get(&session.catalog, id))
        .collect();
}

#[test]
fn starts_with_configured_hands_and_full_life() {
    let catalog = full_catalog();
    let mut events = EventBus::default();
    let session =
        Session::start_default(GameConfig::default(), catalog, 7, &mut events).expect("start");
    assert_eq!(ids(&session.player_hands), vec!["rock", "scissors", "paper"]);
    assert_eq!(session.computer_hands.len(), 3);
    assert_eq!(session.state.life, 5);
    assert_eq!(session.state.win_count, 0);
    assert_eq!(session.phase(), Phase::AwaitingSelection);
    assert!(session.portrait.is_some());
    let started: Vec<Event> = events.drain().collect();
    assert!(matches!(started.as_slice(), [Event::GameStarted { life: 5, .. }]));
}

#[test]
fn rejects_wrong_starting_hand_count() {
    let catalog = full_catalog();
    let hands = vec![get(&catalog, "rock")];
    let err = Session::start(
        GameConfig::default(),
        catalog,
        hands,
        1,
        &mut EventBus::default(),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        SessionError::InvalidHandCount {
            expected: 3,
            got: 1
        }
    ));
}

#[test]
fn winning_round_trades_hands() {
    let mut session = new_session(1);
    set_computer(&mut session, &["scissors", "paper", "rock"]);
    let mut events = EventBus::default();

    let result = session
        .select_hand_against(0, 0, &mut events)
        .expect("select")
        .clone();
    assert_eq!(result.outcome, RoundOutcome::Win);
    assert_eq!(result.player_hand.id, "rock");
    assert_eq!(result.computer_hand.id, "scissors");
    assert_eq!(session.state.win_count, 1);
    assert_eq!(session.state.life, 5);
    assert_eq!(ids(&session.player_hands), vec!["scissors", "scissors", "paper"]);
    assert_eq!(ids(&session.computer_hands), vec!["rock", "paper", "rock"]);
    assert_eq!(session.phase(), Phase::ShowingResult);
    assert_eq!(session.view().last_result, Some(result));
}

#[test]
fn acknowledging_a_win_redraws_the_computer() {
    let mut session = new_session(2);
    set_computer(&mut session, &["scissors", "scissors", "scissors"]);
    let mut events = EventBus::default();
    session.select_hand_against(0, 0, &mut events).expect("select");
    events.drain().for_each(drop);

    session.acknowledge(&mut events).expect("ack");
    assert_eq!(session.phase(), Phase::AwaitingSelection);
    assert!(session.last_result.is_none());
    assert_eq!(session.computer_hands.len(), 3);
    let drained: Vec<Event> = events.drain().collect();
    assert!(drained
        .iter()
        .any(|event| matches!(event, Event::HandsRedrawn { win_count: 1, .. })));
}

#[test]
fn plain_draw_keeps_the_computer_hands() {
    let mut session = new_session(3);
    set_computer(&mut session, &["rock", "meteorite", "love"]);
    let mut events = EventBus::default();
    let outcome = session
        .select_hand_against(0, 0, &mut events)
        .expect("select")
        .outcome;
    assert_eq!(outcome, RoundOutcome::Draw);
    let before = session.computer_hands.clone();
    session.acknowledge(&mut events).expect("ack");
    assert_eq!(session.computer_hands, before);
    assert_eq!(session.state.draw_count, 1);
}

#[test]
fn three_draws_force_a_reset_win() {
    let mut session = new_session(4);
    set_computer(&mut session, &["barrier", "barrier", "barrier"]);
    let mut events = EventBus::default();

    let mut outcomes = Vec::new();
    for slot in 0..3 {
        let result = session
            .select_hand_against(slot, slot, &mut events)
            .expect("select");
        outcomes.push(result.outcome);
        session.acknowledge(&mut events).expect("ack");
    }
    assert_eq!(
        outcomes,
        vec![RoundOutcome::Draw, RoundOutcome::Draw, RoundOutcome::Reset]
    );
    assert_eq!(session.state.draw_count, 0);
    assert_eq!(session.state.win_count, 1);
    assert_eq!(session.state.life, 5);
    let drained: Vec<Event> = events.drain().collect();
    assert!(drained
        .iter()
        .any(|event| matches!(event, Event::ComebackTriggered { win_count: 1 })));
    assert!(drained
        .iter()
        .any(|event| matches!(event, Event::HandsRedrawn { .. })));
}

#[test]
fn never_reports_more_draws_than_the_limit() {
    let mut session = new_session(5);
    let mut events = EventBus::default();
    let mut streak = 0;
    for _ in 0..200 {
        if session.is_game_over() {
            session.restart(&mut events).expect("restart");
        }
        set_computer(&mut session, &["barrier", "rock", "barrier"]);
        session.player_hands = vec![
            get(&session.catalog, "barrier"),
            get(&session.catalog, "barrier"),
            get(&session.catalog, "barrier"),
        ];
        let outcome = session.select_hand(0, &mut events).expect("select").outcome;
        if outcome == RoundOutcome::Draw {
            streak += 1;
            assert!(streak < 3);
        } else {
            assert_eq!(outcome, RoundOutcome::Reset);
            streak = 0;
        }
        assert!(session.state.draw_count < 3);
        session.acknowledge(&mut events).expect("ack");
    }
}

#[test]
fn last_life_lost_ends_game_on_acknowledge() {
    let mut session = new_session(6);
    session.state.life = 1;
    set_computer(&mut session, &["paper", "paper", "paper"]);
    let mut events = EventBus::default();

    let outcome = session
        .select_hand_against(0, 1, &mut events)
        .expect("select")
        .outcome;
    assert_eq!(outcome, RoundOutcome::Lose);
    assert_eq!(session.state.life, 0);
    assert!(!session.view().game_over);

    session.acknowledge(&mut events).expect("ack");
    let view = session.view();
    assert_eq!(view.life, 0);
    assert!(view.game_over);
    assert!(view.last_result.is_none());
    let drained: Vec<Event> = events.drain().collect();
    assert!(matches!(
        drained.last(),
        Some(Event::GameOver { score: 0, rounds: 1 })
    ));
    assert!(!drained
        .iter()
        .any(|event| matches!(event, Event::HandsRedrawn { .. })));
}

#[test]
fn forfeit_from_awaiting_selection() {
    let mut session = new_session(7);
    let mut events = EventBus::default();
    session.forfeit(&mut events).expect("forfeit");
    assert_eq!(session.state.life, 0);
    assert!(session.view().game_over);
    assert!(matches!(
        session.forfeit(&mut events),
        Err(SessionError::InvalidPhase(Phase::GameOver))
    ));
}

#[test]
fn forfeit_while_showing_result() {
    let mut session = new_session(8);
    set_computer(&mut session, &["scissors", "scissors", "scissors"]);
    let mut events = EventBus::default();
    session.select_hand_against(0, 0, &mut events).expect("select");
    session.forfeit(&mut events).expect("forfeit");
    let view = session.view();
    assert_eq!(view.life, 0);
    assert!(view.game_over);
    assert!(view.last_result.is_none());
    assert_eq!(session.score(), 1);
    assert!(matches!(
        session.acknowledge(&mut events),
        Err(SessionError::InvalidPhase(Phase::GameOver))
    ));
}

#[test]
fn selection_outside_awaiting_is_rejected_without_changes() {
    let mut session = new_session(9);
    set_computer(&mut session, &["scissors", "scissors", "scissors"]);
    let mut events = EventBus::default();
    session.select_hand_against(0, 0, &mut events).expect("select");
    let before = session.view();
    assert!(matches!(
        session.select_hand(1, &mut events),
        Err(SessionError::InvalidPhase(Phase::ShowingResult))
    ));
    assert_eq!(session.view(), before);
}

#[test]
fn out_of_range_selection_is_rejected_without_changes() {
    let mut session = new_session(10);
    let before = session.view();
    let mut events = EventBus::default();
    assert!(matches!(
        session.select_hand(3, &mut events),
        Err(SessionError::InvalidSelection { index: 3, len: 3 })
    ));
    assert!(matches!(
        session.select_hand_against(0, 9, &mut events),
        Err(SessionError::InvalidSelection { index: 9, len: 3 })
    ));
    assert_eq!(session.view(), before);
    assert_eq!(session.phase(), Phase::AwaitingSelection);
}

#[test]
fn acknowledge_without_result_is_rejected() {
    let mut session = new_session(11);
    assert!(matches!(
        session.acknowledge(&mut EventBus::default()),
        Err(SessionError::InvalidPhase(Phase::AwaitingSelection))
    ));
}

#[test]
fn restart_restores_the_opening_position() {
    let mut session = new_session(12);
    set_computer(&mut session, &["scissors", "scissors", "scissors"]);
    let mut events = EventBus::default();
    session.select_hand_against(0, 0, &mut events).expect("select");
    session.forfeit(&mut events).expect("forfeit");

    session.restart(&mut events).expect("restart");
    assert_eq!(ids(&session.player_hands), vec!["rock", "scissors", "paper"]);
    assert_eq!(session.state.life, 5);
    assert_eq!(session.state.win_count, 0);
    assert_eq!(session.state.draw_count, 0);
    assert_eq!(session.state.rounds, 0);
    assert_eq!(session.phase(), Phase::AwaitingSelection);
    assert!(!session.is_game_over());
}

#[test]
fn describe_reads_either_side() {
    let session = new_session(13);
    assert_eq!(session.describe(Side::Player, 0).expect("desc"), "グー card");
    assert!(session.describe(Side::Computer, 2).is_ok());
    assert!(matches!(
        session.describe(Side::Player, 5),
        Err(SessionError::InvalidSelection { index: 5, len: 3 })
    ));
}

#[test]
fn same_seed_replays_the_same_game() {
    let play = |seed: u64| {
        let mut session = new_session(seed);
        let mut events = EventBus::default();
        let mut trace = Vec::new();
        while !session.is_game_over() && session.state.rounds < 60 {
            let outcome = session.select_hand(0, &mut events).expect("select").outcome;
            trace.push((outcome, ids(&session.computer_hands).join(",")));
            session.acknowledge(&mut events).expect("ack");
        }
        trace
    };
    assert_eq!(play(77), play(77));
}
