//! Registry-level configuration.

/// Settings applied to every room the registry spawns.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Command channel capacity per room actor. When the channel fills
    /// up, senders wait (bounded backpressure).
    pub channel_size: usize,

    /// Fixed RNG seed for every spawned room. `None` seeds each room
    /// from the OS; tests set this for reproducible deals.
    pub rng_seed: Option<u64>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            channel_size: 64,
            rng_seed: None,
        }
    }
}
