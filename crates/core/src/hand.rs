use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandKind {
    Rock,
    Paper,
    Scissors,
    Special,
}

impl HandKind {
    pub const ALL: [HandKind; 4] = [
        HandKind::Rock,
        HandKind::Paper,
        HandKind::Scissors,
        HandKind::Special,
    ];

    pub fn id(self) -> &'static str {
        match self {
            HandKind::Rock => "rock",
            HandKind::Paper => "paper",
            HandKind::Scissors => "scissors",
            HandKind::Special => "special",
        }
    }

    /// Standard janken cycle. `Special` never beats and is never beaten here.
    pub fn beats(self, other: HandKind) -> bool {
        matches!(
            (self, other),
            (HandKind::Rock, HandKind::Scissors)
                | (HandKind::Scissors, HandKind::Paper)
                | (HandKind::Paper, HandKind::Rock)
        )
    }
}

/// Which weight curve a hand is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandTier {
    Base,
    Neutralizer,
    Mid,
    Big,
}

impl HandTier {
    pub const ALL: [HandTier; 4] = [
        HandTier::Base,
        HandTier::Neutralizer,
        HandTier::Mid,
        HandTier::Big,
    ];
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandDef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub names: BTreeMap<String, String>,
    pub kind: HandKind,
    pub level: u8,
    pub tier: HandTier,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub art: Option<String>,
}

impl HandDef {
    pub fn new(id: &str, name: &str, kind: HandKind, level: u8, tier: HandTier) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            names: BTreeMap::new(),
            kind,
            level,
            tier,
            description: String::new(),
            art: None,
        }
    }

    pub fn is_neutralizer(&self) -> bool {
        self.tier == HandTier::Neutralizer
    }

    /// Label for `locale`, falling back to the canonical name.
    pub fn display_name(&self, locale: Option<&str>) -> &str {
        locale
            .and_then(|code| self.names.get(code))
            .map(String::as_str)
            .unwrap_or(self.name.as_str())
    }
}
