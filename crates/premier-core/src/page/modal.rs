//! Contact-options modal opened by the floating chat button.

use premier_types::page::Key;

/// Canned reply for a contact option.
pub fn option_reply(option: &str) -> &'static str {
    match option.trim() {
        "Account Information" => {
            "For account information, please call us at 1-800-PREMIER or visit your nearest \
             branch. Our customer service team is available 24/7 to assist you."
        }
        "Loan Services" => {
            "Interested in our loan services? Our loan specialists can help you find the \
             perfect solution. Would you like to schedule a consultation?"
        }
        "Technical Support" => {
            "Having trouble with online banking or our mobile app? Our technical support team \
             is ready to help. Please call 1-800-PREMIER for immediate assistance."
        }
        "Schedule Appointment" => {
            "Ready to meet with one of our banking professionals? Please call 1-800-PREMIER or \
             visit our website to schedule an appointment at your convenience."
        }
        _ => {
            "Thank you for contacting Premier Bank. Please call 1-800-PREMIER for immediate \
             assistance."
        }
    }
}

/// Visibility of the modal.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ContactModal {
    open: bool,
}

impl ContactModal {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Returns true if the modal was hidden.
    pub fn open(&mut self) -> bool {
        !std::mem::replace(&mut self.open, true)
    }

    /// Returns true if the modal was showing.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// Escape closes an open modal. Returns true if it closed.
    pub fn on_key(&mut self, key: Key) -> bool {
        key == Key::Escape && self.close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_close_report_changes() {
        let mut modal = ContactModal::default();
        assert!(modal.open());
        assert!(!modal.open());
        assert!(modal.close());
        assert!(!modal.close());
    }

    #[test]
    fn escape_closes_only_when_open() {
        let mut modal = ContactModal::default();
        assert!(!modal.on_key(Key::Escape));
        modal.open();
        assert!(!modal.on_key(Key::Enter));
        assert!(modal.is_open());
        assert!(modal.on_key(Key::Escape));
        assert!(!modal.is_open());
    }

    #[test]
    fn every_option_has_specific_reply() {
        let generic = option_reply("Something else");
        for option in [
            "Account Information",
            "Loan Services",
            "Technical Support",
            "Schedule Appointment",
        ] {
            assert_ne!(option_reply(option), generic);
        }
        assert!(generic.contains("1-800-PREMIER"));
    }
}
