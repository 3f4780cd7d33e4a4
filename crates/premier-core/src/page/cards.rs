//! Service cards: detail text and arrow-key focus movement.

use premier_types::page::Key;

/// Card titles in page order.
pub const SERVICE_CARDS: [&str; 4] = [
    "Personal Banking",
    "Business Banking",
    "Loans & Mortgages",
    "Investment Services",
];

pub fn service_details(name: &str) -> &'static str {
    match name.trim() {
        "Personal Banking" => {
            "Our personal banking services include checking accounts, savings accounts, CDs, \
             and personal loans. Visit a branch or call 1-800-PREMIER to get started."
        }
        "Business Banking" => {
            "We offer comprehensive business banking solutions including business checking, \
             merchant services, and business loans. Contact our business banking specialists \
             today."
        }
        "Loans & Mortgages" => {
            "Whether you're buying your first home or refinancing, our mortgage specialists \
             are here to help. Get pre-approved online or schedule a consultation."
        }
        "Investment Services" => {
            "Build wealth for the future with our investment services. Our financial advisors \
             can help you create a personalized investment strategy."
        }
        _ => "Contact us at 1-800-PREMIER for more information about this service.",
    }
}

/// Card to focus after `key` is pressed on card `current` of `count`.
pub fn next_card(current: usize, count: usize, key: Key) -> Option<usize> {
    match key {
        Key::ArrowRight if current + 1 < count => Some(current + 1),
        Key::ArrowLeft if current > 0 && current < count => Some(current - 1),
        _ => None,
    }
}

/// Only the first card starts in the tab order.
pub fn initial_tab_index(index: usize) -> i32 {
    if index == 0 { 0 } else { -1 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_navigation_stops_at_edges() {
        assert_eq!(next_card(0, 4, Key::ArrowRight), Some(1));
        assert_eq!(next_card(3, 4, Key::ArrowRight), None);
        assert_eq!(next_card(0, 4, Key::ArrowLeft), None);
        assert_eq!(next_card(2, 4, Key::ArrowLeft), Some(1));
        assert_eq!(next_card(1, 4, Key::Enter), None);
    }

    #[test]
    fn tab_order() {
        assert_eq!(initial_tab_index(0), 0);
        assert_eq!(initial_tab_index(2), -1);
    }

    #[test]
    fn details_fall_back_to_generic() {
        assert!(service_details("Loans & Mortgages").contains("mortgage"));
        assert!(service_details("Crypto").contains("more information"));
    }
}
