use crate::{HandDef, HandTier};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog has no hands")]
    Empty,
    #[error("duplicate hand id: {0}")]
    DuplicateId(String),
    #[error("duplicate hand name: {0}")]
    DuplicateName(String),
    #[error("catalog has no neutralizer hand")]
    MissingNeutralizer,
    #[error("catalog has more than one neutralizer: {0} and {1}")]
    MultipleNeutralizers(String, String),
    #[error("unknown hand id: {0}")]
    UnknownHand(String),
}

/// Fixed set of playable hands. Validated once, read-only afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    hands: Vec<HandDef>,
}

impl Catalog {
    pub fn new(hands: Vec<HandDef>) -> Result<Self, CatalogError> {
        if hands.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut ids = HashSet::new();
        let mut names = HashSet::new();
        let mut neutralizer: Option<&str> = None;
        for hand in &hands {
            if !ids.insert(hand.id.as_str()) {
                return Err(CatalogError::DuplicateId(hand.id.clone()));
            }
            if !names.insert(hand.name.as_str()) {
                return Err(CatalogError::DuplicateName(hand.name.clone()));
            }
            if hand.is_neutralizer() {
                if let Some(first) = neutralizer {
                    return Err(CatalogError::MultipleNeutralizers(
                        first.to_string(),
                        hand.id.clone(),
                    ));
                }
                neutralizer = Some(hand.id.as_str());
            }
        }
        if neutralizer.is_none() {
            return Err(CatalogError::MissingNeutralizer);
        }
        Ok(Self { hands })
    }

    pub fn hands(&self) -> &[HandDef] {
        &self.hands
    }

    pub fn len(&self) -> usize {
        self.hands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hands.is_empty()
    }

    pub fn by_id(&self, id: &str) -> Option<&HandDef> {
        self.hands.iter().find(|hand| hand.id == id)
    }

    pub fn by_name(&self, name: &str) -> Option<&HandDef> {
        self.hands.iter().find(|hand| hand.name == name)
    }

    pub fn in_tier(&self, tier: HandTier) -> impl Iterator<Item = &HandDef> + '_ {
        self.hands.iter().filter(move |hand| hand.tier == tier)
    }

    pub fn neutralizer(&self) -> &HandDef {
        // Construction guarantees exactly one.
        self.in_tier(HandTier::Neutralizer)
            .next()
            .unwrap_or(&self.hands[0])
    }

    /// Resolves a list of ids into owned hands, in order.
    pub fn resolve_ids<S: AsRef<str>>(&self, ids: &[S]) -> Result<Vec<HandDef>, CatalogError> {
        ids.iter()
            .map(|id| {
                let id = id.as_ref();
                self.by_id(id)
                    .cloned()
                    .ok_or_else(|| CatalogError::UnknownHand(id.to_string()))
            })
            .collect()
    }
}
