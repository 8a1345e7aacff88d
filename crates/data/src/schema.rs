use serde::{Deserialize, Serialize};

pub use janken_core::{GameConfig, HandDef, HandKind, HandTier, WeightCurve, WeightRule};

/// On-disk shape of `catalog.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub hands: Vec<HandDef>,
}
