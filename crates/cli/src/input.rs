use janken_core::Side;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Select(usize),
    Acknowledge,
    Describe(Side, usize),
    State,
    Forfeit,
    Restart,
    Help,
    Quit,
    Invalid(String),
}

/// Slots are typed 1-based and returned 0-based.
pub fn parse_command(line: &str) -> Command {
    let input = line.trim();
    let mut parts = input.split_whitespace();
    let cmd = parts.next().unwrap_or("").to_ascii_lowercase();
    let arg = parts.next();
    match cmd.as_str() {
        "" | "ok" | "next" | "n" => Command::Acknowledge,
        "play" | "p" => match arg.and_then(parse_slot) {
            Some(slot) => Command::Select(slot),
            None => Command::Invalid(input.to_string()),
        },
        "desc" | "d" | "describe" => match arg.and_then(parse_side_slot) {
            Some((side, slot)) => Command::Describe(side, slot),
            None => Command::Invalid(input.to_string()),
        },
        "state" | "s" => Command::State,
        "forfeit" | "ff" => Command::Forfeit,
        "restart" | "r" => Command::Restart,
        "help" | "h" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => match parse_slot(other) {
            Some(slot) => Command::Select(slot),
            None => Command::Invalid(input.to_string()),
        },
    }
}

fn parse_slot(token: &str) -> Option<usize> {
    let value = token.parse::<usize>().ok()?;
    value.checked_sub(1)
}

fn parse_side_slot(token: &str) -> Option<(Side, usize)> {
    let lowered = token.to_ascii_lowercase();
    if let Some(rest) = lowered.strip_prefix('c') {
        return parse_slot(rest).map(|slot| (Side::Computer, slot));
    }
    parse_slot(&lowered).map(|slot| (Side::Player, slot))
}
