//! Page behavior tuning.
//!
//! Every field has a default matching the stock site, so a page needs no
//! configuration at all. A page may override any subset through a JSON block:
//!
//! ```html
//! <script type="application/json" id="site-config">{ "parallax_speed": 0.3 }</script>
//! ```

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::SiteError;
use crate::util::forms::SubmissionTiming;

/// Id of the optional element holding a JSON [`SiteConfig`].
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Visible fraction at which reveal and `animate_on_scroll` fire.
    pub reveal_threshold: f64,
    /// Observer root margin for `.card-reveal` elements.
    pub reveal_root_margin: String,
    /// Added to the scroll position before matching journey chapters.
    pub scroll_spy_offset: f64,
    pub scroll_spy_throttle_ms: u64,
    pub parallax_speed: f64,
    /// Transition delay step between cards of one grid, in seconds.
    pub stagger_step_secs: f64,
    /// Simulated server round trip for form submissions.
    pub submit_delay_ms: u64,
    pub message_ttl_ms: u64,
    pub message_fade_ms: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px".to_owned(),
            scroll_spy_offset: 150.0,
            scroll_spy_throttle_ms: 100,
            parallax_speed: 0.5,
            stagger_step_secs: 0.1,
            submit_delay_ms: 1000,
            message_ttl_ms: 5000,
            message_fade_ms: 300,
        }
    }
}

impl SiteConfig {
    /// Parse a JSON override block. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Config`] when the block is not valid JSON or a
    /// field has the wrong type.
    pub fn from_json(text: &str) -> Result<Self, SiteError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(trimmed)?)
    }

    #[must_use]
    pub fn scroll_spy_throttle(&self) -> Duration {
        Duration::from_millis(self.scroll_spy_throttle_ms)
    }

    #[must_use]
    pub fn submission_timing(&self) -> SubmissionTiming {
        SubmissionTiming {
            response_delay: Duration::from_millis(self.submit_delay_ms),
            message_ttl: Duration::from_millis(self.message_ttl_ms),
            fade: Duration::from_millis(self.message_fade_ms),
        }
    }
}
