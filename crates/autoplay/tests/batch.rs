use janken_autoplay::{
    run_batch, run_game, write_json, AutoplayConfig, AutoplayResult, GameStatus, Policy,
    Simulator,
};
use janken_core::RoundOutcome;
use janken_data::builtin_assets;

macro_rules! terminates_case {
    ($name:ident, $policy:expr) => {
        #[test]
        fn $name() {
            let assets = builtin_assets().expect("assets");
            let config = AutoplayConfig {
                games: 20,
                policy: $policy,
                ..AutoplayConfig::default()
            };
            let result = run_batch(&assets, &config).expect("batch");
            assert_eq!(result.games.len(), 20);
            for game in &result.games {
                assert_eq!(game.status, GameStatus::GameOver);
                assert_eq!(game.losses, 5);
                assert_eq!(game.score, game.wins + game.resets);
                assert_eq!(game.rounds, game.wins + game.losses + game.draws + game.resets);
            }
        }
    };
}

terminates_case!(first_policy_terminates, Policy::First);
terminates_case!(random_policy_terminates, Policy::Random);
terminates_case!(counter_policy_terminates, Policy::Counter);

#[test]
fn seeded_batches_are_reproducible() {
    let assets = builtin_assets().expect("assets");
    let config = AutoplayConfig {
        games: 10,
        keep_rounds: true,
        ..AutoplayConfig::default()
    };
    let a = run_batch(&assets, &config).expect("batch a");
    let b = run_batch(&assets, &config).expect("batch b");
    assert_eq!(a.games, b.games);
}

#[test]
fn round_log_never_shows_a_fourth_draw() {
    let assets = builtin_assets().expect("assets");
    let config = AutoplayConfig {
        keep_rounds: true,
        policy: Policy::Random,
        ..AutoplayConfig::default()
    };
    for index in 0..30 {
        let game = run_game(&assets, config.game_seed(index), &config).expect("game");
        let mut streak = 0;
        for round in &game.round_log {
            match round.outcome {
                RoundOutcome::Draw => {
                    streak += 1;
                    assert!(streak < 3, "seed {:#x} round {}", game.seed, round.round);
                }
                _ => streak = 0,
            }
        }
    }
}

#[test]
fn counter_policy_outscores_first_slot() {
    let assets = builtin_assets().expect("assets");
    let first = AutoplayConfig {
        games: 200,
        policy: Policy::First,
        ..AutoplayConfig::default()
    };
    let counter = AutoplayConfig {
        policy: Policy::Counter,
        ..first.clone()
    };
    let first = run_batch(&assets, &first).expect("first");
    let counter = run_batch(&assets, &counter).expect("counter");
    assert!(
        counter.summary.mean_score > first.summary.mean_score,
        "counter {} <= first {}",
        counter.summary.mean_score,
        first.summary.mean_score
    );
}

#[test]
fn step_respects_round_limit() {
    let assets = builtin_assets().expect("assets");
    let config = AutoplayConfig {
        max_rounds: 2,
        ..AutoplayConfig::default()
    };
    let game = Simulator::new(&assets, 9)
        .expect("simulator")
        .play(&config)
        .expect("play");
    assert!(game.rounds <= 2);
    if game.rounds == 2 {
        assert_eq!(game.status, GameStatus::MaxRounds);
    }
}

#[test]
fn json_report_round_trips() {
    let assets = builtin_assets().expect("assets");
    let config = AutoplayConfig {
        games: 3,
        ..AutoplayConfig::default()
    };
    let result = run_batch(&assets, &config).expect("batch");
    let path = std::env::temp_dir()
        .join(format!("janken-autoplay-{}", std::process::id()))
        .join("report.json");
    write_json(&path, &result).expect("write");
    let raw = std::fs::read_to_string(&path).expect("read");
    let parsed: AutoplayResult = serde_json::from_str(&raw).expect("parse");
    assert_eq!(parsed.games, result.games);
    assert!(result.to_text_report().contains("policy: counter"));
}
