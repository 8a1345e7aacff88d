#![allow(dead_code)]

use janken_core::{Catalog, HandDef, HandKind, HandTier};

pub fn hand(id: &str, name: &str, kind: HandKind, level: u8, tier: HandTier) -> HandDef {
    let mut hand = HandDef::new(id, name, kind, level, tier);
    hand.description = format!("{name} card");
    hand
}

pub fn full_catalog() -> Catalog {
    Catalog::new(vec![
        hand("rock", "グー", HandKind::Rock, 1, HandTier::Base),
        hand("scissors", "チョキ", HandKind::Scissors, 1, HandTier::Base),
        hand("paper", "パー", HandKind::Paper, 1, HandTier::Base),
        hand("barrier", "バリアー", HandKind::Special, 0, HandTier::Neutralizer),
        hand("crayfish", "ザリガニ", HandKind::Scissors, 2, HandTier::Mid),
        hand("golden_ball", "金の玉", HandKind::Rock, 2, HandTier::Mid),
        hand("bill", "札", HandKind::Paper, 2, HandTier::Mid),
        hand("muramasa", "村正", HandKind::Scissors, 3, HandTier::Big),
        hand("meteorite", "隕石", HandKind::Rock, 3, HandTier::Big),
        hand("love", "愛", HandKind::Paper, 3, HandTier::Big),
    ])
    .expect("valid catalog")
}

pub fn get(catalog: &Catalog, id: &str) -> HandDef {
    catalog.by_id(id).cloned().expect("known hand")
}
