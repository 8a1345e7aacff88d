use crate::schema::CatalogFile;
use anyhow::{bail, Context};
use janken_core::{Catalog, GameConfig};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

const CATALOG_FILE: &str = "catalog.json";
const RULES_FILE: &str = "rules.json";

const BUILTIN_CATALOG: &str = include_str!("../../../assets/catalog.json");
const BUILTIN_RULES: &str = include_str!("../../../assets/rules.json");

/// Catalog and rules that have been checked against each other.
#[derive(Debug, Clone)]
pub struct GameAssets {
    pub config: GameConfig,
    pub catalog: Catalog,
}

pub fn load_catalog(path: &Path) -> anyhow::Result<Catalog> {
    let file: CatalogFile = load_json(path)?;
    catalog_from_file(file).with_context(|| format!("validate {}", path.display()))
}

pub fn load_game_config(dir: &Path) -> anyhow::Result<GameConfig> {
    let path = dir.join(RULES_FILE);
    let config: GameConfig = load_json(&path)?;
    config
        .validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(config)
}

pub fn load_assets(dir: &Path) -> anyhow::Result<GameAssets> {
    let config = load_game_config(dir)?;
    let catalog = load_catalog(&dir.join(CATALOG_FILE))?;
    validate_assets(&config, &catalog)
        .with_context(|| format!("cross-check assets in {}", dir.display()))?;
    Ok(GameAssets { config, catalog })
}

/// The assets shipped with the game, embedded at compile time.
pub fn builtin_assets() -> anyhow::Result<GameAssets> {
    let file: CatalogFile =
        serde_json::from_str(BUILTIN_CATALOG).context("parse builtin catalog")?;
    let catalog = catalog_from_file(file).context("validate builtin catalog")?;
    let config: GameConfig = serde_json::from_str(BUILTIN_RULES).context("parse builtin rules")?;
    config.validate().context("validate builtin rules")?;
    validate_assets(&config, &catalog).context("cross-check builtin assets")?;
    Ok(GameAssets { config, catalog })
}

pub fn parse_catalog(raw: &str) -> anyhow::Result<Catalog> {
    let file: CatalogFile = serde_json::from_str(raw).context("parse catalog")?;
    catalog_from_file(file)
}

/// Starting hands must exist and fill every slot.
pub fn validate_assets(config: &GameConfig, catalog: &Catalog) -> anyhow::Result<()> {
    if config.starting_hands.len() != config.hand_slots {
        bail!(
            "starting_hands has {} entries but hand_slots is {}",
            config.starting_hands.len(),
            config.hand_slots
        );
    }
    catalog.resolve_ids(&config.starting_hands)?;
    Ok(())
}

/// Hands without a label for `locale`; they fall back to the canonical name.
pub fn missing_labels(catalog: &Catalog, locale: &str) -> Vec<String> {
    if locale == CANONICAL_LOCALE {
        return Vec::new();
    }
    let missing: Vec<String> = catalog
        .hands()
        .iter()
        .filter(|hand| !hand.names.contains_key(locale))
        .map(|hand| hand.id.clone())
        .collect();
    if !missing.is_empty() {
        log::warn!("no {locale} label for {}", missing.join(", "));
    }
    missing
}

/// Locale of the canonical hand names.
pub const CANONICAL_LOCALE: &str = "ja_JP";

pub fn normalize_locale(locale: Option<&str>) -> String {
    let raw = locale.unwrap_or("en_US").trim();
    if raw.is_empty() {
        return "en_US".to_string();
    }
    let lowered = raw.replace('-', "_").to_ascii_lowercase();
    match lowered.as_str() {
        "ja" | "jp" | "ja_jp" => CANONICAL_LOCALE.to_string(),
        "en" | "en_us" => "en_US".to_string(),
        _ => raw.replace('-', "_"),
    }
}

fn catalog_from_file(file: CatalogFile) -> anyhow::Result<Catalog> {
    Ok(Catalog::new(file.hands)?)
}

fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<T> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let value = serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(value)
}
