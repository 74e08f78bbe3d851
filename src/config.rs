use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Fixed tuning values for the page. Provided once at the root via context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Height of the fixed header, subtracted when scrolling to a section.
    pub header_offset: f64,
    /// A section is "active" once its top is at or above this many px.
    pub active_threshold: f64,
    /// Header switches to its compact style past this scroll offset.
    pub scrolled_threshold: f64,
    /// Fraction of viewport height at which section reveals fire.
    pub reveal_at: f64,
    /// Project cards fire a little later than the rest of the section.
    pub cards_reveal_at: f64,
    pub loading_gate: Duration,
    pub submit_delay: Duration,
    pub reset_delay: Duration,
    pub cv_path: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            header_offset: 80.0,
            active_threshold: 100.0,
            scrolled_threshold: 50.0,
            reveal_at: 0.8,
            cards_reveal_at: 0.7,
            loading_gate: Duration::from_millis(2000),
            submit_delay: Duration::from_millis(2000),
            reset_delay: Duration::from_millis(5000),
            cv_path: "/cv.pdf".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn loading_gate_ms(&self) -> f64 {
        self.loading_gate.as_millis() as f64
    }

    pub fn reset_delay_ms(&self) -> f64 {
        self.reset_delay.as_millis() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timings() {
        let config = SiteConfig::default();
        assert_eq!(config.loading_gate_ms(), 2000.0);
        assert_eq!(config.submit_delay, Duration::from_secs(2));
        assert_eq!(config.reset_delay_ms(), 5000.0);
        assert!(config.cards_reveal_at < config.reveal_at);
    }
}
