use crate::Policy;

#[derive(Debug, Clone)]
pub struct AutoplayConfig {
    pub seed: u64,
    pub games: u32,
    pub max_rounds: u32,
    pub policy: Policy,
    pub keep_rounds: bool,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            seed: 0xC0FFEE,
            games: 100,
            max_rounds: 500,
            policy: Policy::Counter,
            keep_rounds: false,
        }
    }
}

impl AutoplayConfig {
    /// Seed for game `index`; consecutive games never share a stream.
    pub fn game_seed(&self, index: u32) -> u64 {
        self.seed
            .wrapping_add(u64::from(index).wrapping_mul(0x9E37_79B9_7F4A_7C15))
    }
}
