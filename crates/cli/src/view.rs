use crate::UiLocale;
use janken_core::{Event, HandDef, Phase, RoundOutcome, RoundResult, Session, SessionError};

/// Display-only flags fed from engine events and cleared after each board.
#[derive(Debug, Default)]
pub struct ViewFlags {
    pub traded_slot: Option<usize>,
    pub redrawn: bool,
}

impl ViewFlags {
    pub fn observe(&mut self, event: &Event) {
        match event {
            Event::RoundResolved { player_index, .. } => self.traded_slot = Some(*player_index),
            Event::HandsRedrawn { .. } => self.redrawn = true,
            Event::Restarted => *self = Self::default(),
            _ => {}
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

pub fn hand_label(locale: UiLocale, hand: &HandDef) -> String {
    let name = hand.display_name(Some(locale.code()));
    let stars = "*".repeat(hand.level as usize);
    if stars.is_empty() {
        format!("[{name}]")
    } else {
        format!("[{name} {stars}]")
    }
}

pub fn print_board(locale: UiLocale, session: &Session, flags: &ViewFlags) {
    let view = session.view();
    let portrait = view.portrait.as_deref().unwrap_or("-");
    println!();
    println!(
        "{} ({portrait}){}",
        locale.text("Random Robo", "ランダムロボ"),
        if flags.redrawn {
            locale.text("  ~ new hands ~", "  ~ 手札入れ替え ~")
        } else {
            ""
        }
    );
    let computer: Vec<String> = view
        .computer_hands
        .iter()
        .enumerate()
        .map(|(idx, hand)| format!("c{} {}", idx + 1, hand_label(locale, hand)))
        .collect();
    println!("  {}", computer.join("  "));
    let player: Vec<String> = view
        .player_hands
        .iter()
        .enumerate()
        .map(|(idx, hand)| {
            let marker = if flags.traded_slot == Some(idx) { "+" } else { "" };
            format!("{}{} {}", marker, idx + 1, hand_label(locale, hand))
        })
        .collect();
    println!("  {}", player.join("  "));
    println!(
        "{}  {} {}  ★ x{}",
        locale.text("You", "あなた"),
        locale.text("Life", "ライフ"),
        "♥".repeat(view.life as usize),
        view.win_count
    );
}

pub fn print_result(locale: UiLocale, result: &RoundResult, draw_limit: u32) {
    println!(
        "{} {}  vs  {} {}",
        locale.text("You", "あなた"),
        hand_label(locale, &result.player_hand),
        locale.text("Robo", "ロボ"),
        hand_label(locale, &result.computer_hand)
    );
    let (headline, delta) = match result.outcome {
        RoundOutcome::Win => ("WIN".to_string(), "★ +1"),
        RoundOutcome::Lose => ("LOSE".to_string(), "♥ -1"),
        RoundOutcome::Draw => (
            format!(
                "{} ({}/{draw_limit})",
                locale.text("DRAW", "あいこ"),
                result.draw_count
            ),
            "",
        ),
        RoundOutcome::Reset => (
            format!(
                "{} ({draw_limit}/{draw_limit})",
                locale.text("DRAW", "あいこ")
            ),
            "★ +1",
        ),
    };
    println!("  {headline}  {delta}");
    println!("{}", locale.text("press Enter to continue", "Enter で次へ"));
}

pub fn print_score(locale: UiLocale, session: &Session) {
    println!("{}", locale.text("== Game Over ==", "== ゲームオーバー =="));
    println!(
        "{}: ★ x{}  ({} {})",
        locale.text("Score", "スコア"),
        session.score(),
        session.state.rounds,
        locale.text("rounds", "ラウンド")
    );
    println!(
        "{}",
        locale.text(
            "type 'restart' to play again or 'quit' to leave",
            "'restart' で再挑戦、'quit' で終了"
        )
    );
}

pub fn print_state(locale: UiLocale, session: &Session) {
    println!("{}", locale.text("== State ==", "== 状態 =="));
    println!(
        "{} {} | {} {} | {} {}/{} | {} {}",
        locale.text("Life", "ライフ"),
        session.state.life,
        locale.text("Wins", "勝ち"),
        session.state.win_count,
        locale.text("Draws", "あいこ"),
        session.state.draw_count,
        session.config.draw_limit,
        locale.text("Rounds", "ラウンド"),
        session.state.rounds
    );
    println!(
        "{} {} | {} {}",
        locale.text("Phase", "フェーズ"),
        phase_label(locale, session.phase()),
        locale.text("Seed", "シード"),
        session.seed()
    );
}

pub fn print_help(locale: UiLocale) {
    println!("{}", locale.text("== Commands ==", "== コマンド =="));
    let rows = [
        ("1 | 2 | 3 | play <n>", locale.text("play a hand", "手を出す")),
        ("<Enter> | ok", locale.text("close the result", "結果を閉じる")),
        (
            "desc <n> | desc c<n>",
            locale.text("describe your / robo card", "自分/ロボのカード説明"),
        ),
        ("state", locale.text("show counters", "状態を表示")),
        ("forfeit", locale.text("give up", "降参")),
        ("restart", locale.text("start over", "最初から")),
        ("help | quit", locale.text("this list / leave", "ヘルプ / 終了")),
    ];
    for (command, meaning) in rows {
        println!("  {command:<24} {meaning}");
    }
}

pub fn print_event(locale: UiLocale, event: &Event) {
    match event {
        Event::ComebackTriggered { .. } => println!(
            "{}",
            locale.text(
                "three draws in a row: counted as a win!",
                "3連続あいこ：勝ちとして数えます！"
            )
        ),
        Event::Forfeited { .. } => println!("{}", locale.text("you forfeited", "降参しました")),
        _ => log::debug!("event: {:?}", event),
    }
}

pub fn print_session_error(locale: UiLocale, err: &SessionError) {
    println!("{}: {err}", locale.text("error", "エラー"));
    if let Some(hint) = session_error_hint(locale, err) {
        println!("{}: {hint}", locale.text("hint", "ヒント"));
    }
}

fn session_error_hint(locale: UiLocale, err: &SessionError) -> Option<&'static str> {
    match err {
        SessionError::InvalidPhase(Phase::ShowingResult) => Some(locale.text(
            "press Enter to close the result first",
            "先に Enter で結果を閉じてください",
        )),
        SessionError::InvalidPhase(Phase::AwaitingSelection) => Some(locale.text(
            "pick a hand with 1, 2 or 3",
            "1, 2, 3 で手を選んでください",
        )),
        SessionError::InvalidPhase(Phase::GameOver) => Some(locale.text(
            "the game is over: use 'restart'",
            "ゲームは終了しています：'restart' を使ってください",
        )),
        SessionError::InvalidSelection { .. } => {
            Some(locale.text("slots are numbered 1 to 3", "スロットは 1〜3 です"))
        }
        _ => None,
    }
}

fn phase_label(locale: UiLocale, phase: Phase) -> &'static str {
    match phase {
        Phase::AwaitingSelection => locale.text("choose a hand", "手を選択中"),
        Phase::ShowingResult => locale.text("showing result", "結果表示中"),
        Phase::GameOver => locale.text("game over", "ゲームオーバー"),
    }
}
