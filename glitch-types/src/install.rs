//! Install requests.

use crate::fingerprint::FingerprintComponents;
use serde::{Deserialize, Serialize};

/// An install record enriched with a device fingerprint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FingerprintInstall {
    /// Persistent per-user/device identifier chosen by the game.
    pub user_install_id: String,
    /// Distribution platform: "steam", "apple", "android", ...
    pub platform: String,
    pub fingerprint: FingerprintComponents,
    /// Game build version (empty = omitted).
    pub game_version: String,
    /// Campaign or referrer the install came from (empty = omitted).
    pub referral_source: String,
}

impl FingerprintInstall {
    #[must_use]
    pub fn new(
        user_install_id: impl Into<String>,
        platform: impl Into<String>,
        fingerprint: FingerprintComponents,
    ) -> Self {
        Self {
            user_install_id: user_install_id.into(),
            platform: platform.into(),
            fingerprint,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_game_version(mut self, game_version: impl Into<String>) -> Self {
        self.game_version = game_version.into();
        self
    }

    #[must_use]
    pub fn with_referral_source(mut self, referral_source: impl Into<String>) -> Self {
        self.referral_source = referral_source.into();
        self
    }
}
