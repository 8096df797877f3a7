//! Search radius defaults and limits.

use domain::SearchRadius;
use serde::{Deserialize, Serialize};

/// Query settings applied to every proximity search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Radius in metres when a request omits `maxdistance`
    #[serde(default = "default_radius")]
    pub default_radius_m: u32,

    /// Largest radius in metres a request may ask for
    #[serde(default = "default_max_radius")]
    pub max_radius_m: u32,
}

const fn default_radius() -> u32 {
    SearchRadius::DEFAULT_METERS
}

const fn default_max_radius() -> u32 {
    50_000
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            default_radius_m: default_radius(),
            max_radius_m: default_max_radius(),
        }
    }
}
