//! Navigation: mobile menu, smooth-scroll targets, scroll-spy, header state.

use premier_types::page::Section;

/// Extra gap kept between the fixed header and a scrolled-to section.
pub const SCROLL_MARGIN: f64 = 20.0;

/// A section becomes "current" once its top is this far under the header.
pub const SPY_MARGIN: f64 = 50.0;

/// Scroll distance after which the header switches to its solid style.
pub const HEADER_SCROLLED_AFTER: f64 = 50.0;

/// Open/closed state of the mobile nav menu.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the menu. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close the menu. Returns true if it was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }
}

/// The element id an internal link points at, if it is one.
///
/// `"#services"` → `Some("services")`; `"#"` and external links → `None`.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Whether a link is handled in-page (starts with `#`).
pub fn is_internal_link(href: &str) -> bool {
    href.starts_with('#')
}

/// Document offset to scroll to so the target clears the fixed header.
pub fn scroll_offset(element_top: f64, page_y: f64, header_height: f64) -> f64 {
    element_top + page_y - header_height - SCROLL_MARGIN
}

/// The section whose nav link should be highlighted: the last one, in
/// document order, whose top has passed under the header.
pub fn active_section(sections: &[Section], header_height: f64) -> Option<&str> {
    sections
        .iter()
        .filter(|s| s.top - header_height - SPY_MARGIN <= 0.0)
        .last()
        .map(|s| s.id.as_str())
}

pub fn header_scrolled(scroll_y: f64) -> bool {
    scroll_y > HEADER_SCROLLED_AFTER
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_and_close() {
        let mut menu = NavMenu::default();
        assert!(!menu.is_open());
        assert!(menu.toggle());
        assert!(menu.close());
        assert!(!menu.close());
        assert!(!menu.is_open());
    }

    #[test]
    fn anchor_targets() {
        assert_eq!(anchor_target("#services"), Some("services"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("https://example.com"), None);
        assert!(is_internal_link("#"));
        assert!(!is_internal_link("/about"));
    }

    #[test]
    fn scroll_offset_clears_header() {
        // Target 400px below the viewport top, page scrolled 100px, 80px header.
        assert_eq!(scroll_offset(400.0, 100.0, 80.0), 400.0);
        assert_eq!(scroll_offset(0.0, 0.0, 70.0), -90.0);
    }

    #[test]
    fn active_section_is_last_passed() {
        let sections = vec![
            Section::new("home", -500.0),
            Section::new("services", 100.0),
            Section::new("contact", 900.0),
        ];
        // services: 100 - 80 - 50 = -30 <= 0
        assert_eq!(active_section(&sections, 80.0), Some("services"));
        // With a short header services has not passed yet: 100 - 20 - 50 = 30
        assert_eq!(active_section(&sections, 20.0), Some("home"));
    }

    #[test]
    fn active_section_none_at_top() {
        let sections = vec![Section::new("home", 200.0)];
        assert_eq!(active_section(&sections, 80.0), None);
        assert_eq!(active_section(&[], 80.0), None);
    }

    #[test]
    fn header_threshold() {
        assert!(!header_scrolled(0.0));
        assert!(!header_scrolled(50.0));
        assert!(header_scrolled(50.5));
    }
}
