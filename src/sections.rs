use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Scroll-anchored content blocks, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionId {
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("no such section: {0}")]
pub struct UnknownSection(pub String);

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Contact,
    ];

    /// DOM anchor id.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.as_str())
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// Picks the last section (in document order) whose top edge has crossed
/// `threshold`. Sections with no element are skipped. Falls back to
/// `current` when nothing has crossed yet.
pub fn active_section<I>(tops: I, threshold: f64, current: SectionId) -> SectionId
where
    I: IntoIterator<Item = (SectionId, Option<f64>)>,
{
    tops.into_iter()
        .filter_map(|(id, top)| top.map(|t| (id, t)))
        .filter(|(_, top)| *top <= threshold)
        .map(|(id, _)| id)
        .last()
        .unwrap_or(current)
}

pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Document offset to scroll to so the section sits just below the header.
pub fn scroll_target(offset_top: f64, header_offset: f64) -> f64 {
    offset_top - header_offset
}

/// Smooth-scrolls the window to the section with the given anchor.
/// Unknown anchors and missing elements are ignored.
pub fn scroll_to_section(id: &str, header_offset: f64) {
    use wasm_bindgen::JsCast;
    use web_sys::{ScrollBehavior, ScrollToOptions};

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(el) = window
        .document()
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        log::debug!("scroll target #{id} not found");
        return;
    };
    let opts = ScrollToOptions::new();
    opts.set_top(scroll_target(el.offset_top() as f64, header_offset));
    opts.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&opts);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tops(values: [Option<f64>; 5]) -> Vec<(SectionId, Option<f64>)> {
        SectionId::ALL.into_iter().zip(values).collect()
    }

    #[test]
    fn test_active_section_last_crossed_wins() {
        let boxes = tops([Some(-900.0), Some(40.0), Some(400.0), Some(1200.0), Some(2000.0)]);
        assert_eq!(active_section(boxes, 100.0, SectionId::Home), SectionId::About);
    }

    #[test]
    fn test_active_section_threshold_inclusive() {
        let boxes = tops([Some(-900.0), Some(-300.0), Some(100.0), Some(700.0), Some(1500.0)]);
        assert_eq!(active_section(boxes, 100.0, SectionId::Home), SectionId::Skills);
    }

    #[test]
    fn test_active_section_defaults_before_crossing() {
        let boxes = tops([Some(120.0), Some(900.0), Some(1400.0), Some(2000.0), Some(2600.0)]);
        assert_eq!(active_section(boxes, 100.0, SectionId::Home), SectionId::Home);
        let boxes = tops([Some(120.0), Some(900.0), Some(1400.0), Some(2000.0), Some(2600.0)]);
        assert_eq!(
            active_section(boxes, 100.0, SectionId::Projects),
            SectionId::Projects
        );
    }

    #[test]
    fn test_active_section_skips_missing() {
        let boxes = tops([Some(-900.0), Some(-500.0), None, Some(-10.0), None]);
        assert_eq!(active_section(boxes, 100.0, SectionId::Home), SectionId::Projects);
    }

    #[test]
    fn test_section_round_trip() {
        for id in SectionId::ALL {
            assert_eq!(id.as_str().parse::<SectionId>(), Ok(id));
        }
        assert_eq!(
            "blog".parse::<SectionId>(),
            Err(UnknownSection("blog".to_string()))
        );
        assert_eq!(SectionId::Contact.href(), "#contact");
    }

    #[test]
    fn test_scroll_helpers() {
        assert_eq!(scroll_target(1000.0, 80.0), 920.0);
        assert!(!is_scrolled(50.0, 50.0));
        assert!(is_scrolled(51.0, 50.0));
    }
}
