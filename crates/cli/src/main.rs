mod input;
mod view;

use anyhow::Context;
use input::{parse_command, Command};
use janken_autoplay::{run_batch, write_json, write_text, AutoplayConfig, Policy};
use janken_core::{EventBus, Phase, Session};
use janken_data::{builtin_assets, load_assets, missing_labels, normalize_locale, GameAssets};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use view::ViewFlags;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiLocale {
    EnUs,
    JaJp,
}

impl UiLocale {
    pub fn code(self) -> &'static str {
        match self {
            Self::EnUs => "en_US",
            Self::JaJp => "ja_JP",
        }
    }

    fn from_opt(value: Option<&str>) -> Self {
        let normalized = normalize_locale(value);
        if normalized == "ja_JP" {
            Self::JaJp
        } else {
            Self::EnUs
        }
    }

    pub fn text<'a>(self, en: &'a str, ja: &'a str) -> &'a str {
        if matches!(self, Self::JaJp) {
            ja
        } else {
            en
        }
    }
}

#[derive(Debug, Clone)]
struct CliOptions {
    auto: bool,
    seed: Option<u64>,
    assets: Option<PathBuf>,
    hands: Option<Vec<String>>,
    games: Option<u32>,
    policy: Option<String>,
    out: Option<PathBuf>,
    locale: UiLocale,
}

fn parse_cli_options(args: &[String]) -> CliOptions {
    let mut options = CliOptions {
        auto: false,
        seed: None,
        assets: None,
        hands: None,
        games: None,
        policy: None,
        out: None,
        locale: UiLocale::EnUs,
    };
    let mut locale_arg: Option<String> = std::env::var("JANKEN_LANG").ok();
    let mut idx = 0usize;
    while idx < args.len() {
        let value = args.get(idx + 1);
        let mut consumed = true;
        match (args[idx].as_str(), value) {
            ("--auto", _) => {
                options.auto = true;
                consumed = false;
            }
            ("--lang" | "-l", Some(value)) => locale_arg = Some(value.clone()),
            ("--seed", Some(value)) => options.seed = value.parse::<u64>().ok(),
            ("--assets", Some(value)) => options.assets = Some(PathBuf::from(value)),
            ("--hands", Some(value)) => {
                options.hands = Some(
                    value
                        .split(',')
                        .map(|id| id.trim().to_string())
                        .filter(|id| !id.is_empty())
                        .collect(),
                )
            }
            ("--games", Some(value)) => options.games = value.parse::<u32>().ok(),
            ("--policy", Some(value)) => options.policy = Some(value.clone()),
            ("--out", Some(value)) => options.out = Some(PathBuf::from(value)),
            (other, _) => {
                log::warn!("ignoring argument {other}");
                consumed = false;
            }
        }
        idx += if consumed { 2 } else { 1 };
    }
    options.locale = UiLocale::from_opt(locale_arg.as_deref());
    options
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_cli_options(&args);
    let assets = load_game_assets(options.assets.as_deref())?;
    missing_labels(&assets.catalog, options.locale.code());
    if options.auto {
        return run_auto(&options, &assets);
    }
    run_interactive(&options, assets)
}

/// Explicit `--assets` dir, then `./assets`, then the embedded defaults.
fn load_game_assets(dir: Option<&Path>) -> anyhow::Result<GameAssets> {
    if let Some(dir) = dir {
        return load_assets(dir);
    }
    let local = Path::new("assets");
    if local.join("catalog.json").exists() {
        return load_assets(local);
    }
    builtin_assets()
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or(0xC0FFEE)
}

fn run_auto(options: &CliOptions, assets: &GameAssets) -> anyhow::Result<()> {
    let mut config = AutoplayConfig::default();
    if let Some(seed) = options.seed {
        config.seed = seed;
    }
    if let Some(games) = options.games {
        config.games = games;
    }
    if let Some(policy) = options.policy.as_deref() {
        config.policy = Policy::from_name(policy)?;
    }
    config.keep_rounds = options.out.is_some();
    let result = run_batch(assets, &config)?;
    println!("{}", result.summary_line());
    if let Some(out) = options.out.as_deref() {
        if out.extension().and_then(|ext| ext.to_str()) == Some("json") {
            write_json(out, &result)?;
        } else {
            write_text(out, &result)?;
        }
        println!("report: {}", out.display());
    }
    Ok(())
}

fn run_interactive(options: &CliOptions, assets: GameAssets) -> anyhow::Result<()> {
    let locale = options.locale;
    let seed = options.seed.unwrap_or_else(clock_seed);
    let mut events = EventBus::default();
    let mut flags = ViewFlags::default();
    let initial = match options.hands.as_ref() {
        Some(ids) => assets
            .catalog
            .resolve_ids(ids.as_slice())
            .context("resolve --hands")?,
        None => assets
            .catalog
            .resolve_ids(assets.config.starting_hands.as_slice())?,
    };
    let draw_limit = assets.config.draw_limit;
    let mut session = Session::start(assets.config, assets.catalog, initial, seed, &mut events)
        .context("start game")?;
    events.drain().for_each(drop);

    println!("Trading Janken  ({} {seed})", locale.text("seed", "シード"));
    view::print_help(locale);
    view::print_board(locale, &session, &flags);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{} ", prompt(locale, session.phase()));
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let outcome = match parse_command(&line) {
            Command::Quit => break,
            Command::Help => {
                view::print_help(locale);
                continue;
            }
            Command::State => {
                view::print_state(locale, &session);
                continue;
            }
            Command::Describe(side, slot) => {
                match session.describe(side, slot) {
                    Ok(text) => println!("{text}"),
                    Err(err) => view::print_session_error(locale, &err),
                }
                continue;
            }
            Command::Invalid(raw) => {
                println!("{}: {raw}", locale.text("unknown command", "不明なコマンド"));
                continue;
            }
            Command::Select(slot) => session.select_hand(slot, &mut events).map(|result| {
                view::print_result(locale, result, draw_limit);
            }),
            Command::Acknowledge => {
                if session.phase() == Phase::AwaitingSelection {
                    continue;
                }
                session.acknowledge(&mut events)
            }
            Command::Forfeit => session.forfeit(&mut events),
            Command::Restart => session.restart(&mut events),
        };
        if let Err(err) = outcome {
            view::print_session_error(locale, &err);
            continue;
        }
        for event in events.drain() {
            flags.observe(&event);
            view::print_event(locale, &event);
        }
        match session.phase() {
            Phase::GameOver => view::print_score(locale, &session),
            Phase::AwaitingSelection => {
                view::print_board(locale, &session, &flags);
                flags.clear();
            }
            Phase::ShowingResult => {}
        }
    }
    Ok(())
}

fn prompt(locale: UiLocale, phase: Phase) -> &'static str {
    match phase {
        Phase::AwaitingSelection => locale.text("choose 1-3 >", "1-3 を選択 >"),
        Phase::ShowingResult => locale.text("[Enter] >", "[Enter] >"),
        Phase::GameOver => locale.text("restart/quit >", "restart/quit >"),
    }
}
