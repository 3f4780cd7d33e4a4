//! Page handlers: navigation, counters, reveal, contact modal, service
//! cards, and the contact form.
//!
//! `PageController` holds all page state in explicit fields and reacts to
//! [`PageEvent`]s. Every visible effect goes through the [`PageView`]
//! capability set, so the handlers run the same against a terminal, a browser
//! binding, or a test fake.

pub mod cards;
pub mod counter;
pub mod form;
pub mod modal;
pub mod nav;
pub mod notify;
pub mod reveal;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tracing::{debug, info};

use premier_types::form::FieldError;
use premier_types::page::{Key, Notification, NotificationKind, Section};

use crate::chat::ChatController;
use crate::event::debounce::SCROLL_DEBOUNCE;
use crate::event::{ClickTarget, Debouncer, EventKind, EventSource, PageEvent};

use self::cards::{initial_tab_index, next_card, service_details};
use self::counter::{run_counters, CounterAnimator};
use self::form::{ContactForm, ContactSubmission, FormError};
use self::modal::{option_reply, ContactModal};
use self::nav::{active_section, anchor_target, header_scrolled, scroll_offset, NavMenu};
use self::notify::NotificationCenter;
use self::reveal::RevealTracker;

/// Element id of the hero stats block that starts the counters.
pub const STATS_ELEMENT: &str = "hero-stats";

/// Simulated network time of a contact form submission.
pub const SUBMIT_DELAY: Duration = Duration::from_secs(2);

/// Label of the submit button while a submission runs.
pub const SENDING_LABEL: &str = "Sending...";

pub const FORM_INVALID_MESSAGE: &str = "Please correct the errors before submitting.";

pub const FORM_SENT_MESSAGE: &str =
    "Thank you! Your message has been sent. We'll get back to you within 24 hours.";

/// Capabilities the page handlers need from the rendering surface.
///
/// Every method defaults to doing nothing, so a host only implements what it
/// can actually show.
#[allow(unused_variables)]
pub trait PageView: Send + Sync {
    fn set_nav_open(&self, open: bool) {}

    /// Smooth-scroll the document to `top`.
    fn scroll_to(&self, top: f64) {}

    /// Highlight the nav link for `section`, un-highlighting all others.
    fn set_active_link(&self, section: Option<&str>) {}

    fn set_header_scrolled(&self, scrolled: bool) {}

    /// Add the "animate-in" state to an element.
    fn reveal(&self, element: &str) {}

    fn set_counter_text(&self, counter: &str, text: &str) {}

    fn show_field_error(&self, field: &str, error: &FieldError) {}

    fn clear_field_error(&self, field: &str) {}

    /// Disable the submit button and show [`SENDING_LABEL`], or restore it.
    fn set_submit_busy(&self, busy: bool) {}

    fn reset_form(&self) {}

    fn show_notification(&self, notification: &Notification) {}

    fn dismiss_notification(&self) {}

    fn set_modal_visible(&self, visible: bool) {}

    /// Lock or unlock page scrolling behind the modal.
    fn set_scroll_locked(&self, locked: bool) {}

    /// Blocking informational dialog with a title and body.
    fn show_alert(&self, title: &str, body: &str) {}

    fn focus_card(&self, index: usize) {}

    /// Set the `tabindex` of service card `index`.
    fn set_card_tab_index(&self, index: usize, tab_index: i32) {}
}

#[derive(Default)]
struct PageState {
    nav: NavMenu,
    animator: CounterAnimator,
    modal: ContactModal,
    form: ContactForm,
    reveal: RevealTracker,
}

/// All page handlers and the state they share.
pub struct PageController {
    view: Arc<dyn PageView>,
    chat: Option<ChatController>,
    counters: Vec<(String, u64)>,
    card_count: usize,
    state: Mutex<PageState>,
    notifications: NotificationCenter,
    scroll_debounce: Debouncer,
}

impl PageController {
    pub fn new(view: Arc<dyn PageView>) -> Self {
        Self {
            notifications: NotificationCenter::new(Arc::clone(&view)),
            view,
            chat: None,
            counters: Vec::new(),
            card_count: cards::SERVICE_CARDS.len(),
            state: Mutex::new(PageState::default()),
            scroll_debounce: Debouncer::new(SCROLL_DEBOUNCE),
        }
    }

    /// Chat panel opened by the modal's agent hand-off control.
    pub fn with_chat(mut self, chat: ChatController) -> Self {
        self.chat = Some(chat);
        self
    }

    /// Counters (element id, target) animated when the stats block shows.
    pub fn with_counters(mut self, counters: Vec<(String, u64)>) -> Self {
        self.counters = counters;
        self
    }

    fn state(&self) -> MutexGuard<'_, PageState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn nav_open(&self) -> bool {
        self.state().nav.is_open()
    }

    pub fn modal_open(&self) -> bool {
        self.state().modal.is_open()
    }

    pub fn has_animated(&self) -> bool {
        self.state().animator.has_animated()
    }

    /// Snapshot of the contact form.
    pub fn form(&self) -> ContactForm {
        self.state().form.clone()
    }

    fn close_modal(&self) {
        if self.state().modal.close() {
            self.view.set_modal_visible(false);
            self.view.set_scroll_locked(false);
        }
    }

    pub fn on_click(&self, target: &ClickTarget) {
        if !target.is_inside_nav() && self.state().nav.close() {
            self.view.set_nav_open(false);
        }

        match target {
            ClickTarget::NavToggle => {
                let open = self.state().nav.toggle();
                self.view.set_nav_open(open);
            }
            ClickTarget::NavLink {
                href,
                target_top,
                page_y,
                header_height,
            } => {
                // External links navigate normally; missing anchors do nothing.
                let (Some(id), Some(top)) = (anchor_target(href), target_top) else {
                    return;
                };
                let offset = scroll_offset(*top, *page_y, *header_height);
                debug!(section = id, offset, "scrolling to section");
                self.view.scroll_to(offset);
                if self.state().nav.close() {
                    self.view.set_nav_open(false);
                }
            }
            ClickTarget::ChatButton => {
                if self.state().modal.open() {
                    self.view.set_modal_visible(true);
                    self.view.set_scroll_locked(true);
                }
            }
            ClickTarget::ModalClose | ClickTarget::ModalBackdrop => self.close_modal(),
            ClickTarget::ChatOption(option) => {
                self.view.show_alert(option, option_reply(option));
            }
            ClickTarget::AgentHandoff => {
                self.close_modal();
                match &self.chat {
                    Some(chat) => chat.open_panel(),
                    None => debug!("agent hand-off without a chat panel"),
                }
            }
            ClickTarget::ServiceCard(name) => {
                self.view.show_alert(name, service_details(name));
            }
            ClickTarget::Elsewhere => {}
        }
    }

    /// Header state updates immediately; scroll-spy runs debounced.
    pub fn on_scroll(&self, scroll_y: f64, header_height: f64, sections: Vec<Section>) {
        self.view.set_header_scrolled(header_scrolled(scroll_y));

        let view = Arc::clone(&self.view);
        self.scroll_debounce.call(move || {
            view.set_active_link(active_section(&sections, header_height));
        });
    }

    pub fn on_key(&self, key: Key, card_index: Option<usize>) {
        if self.state().modal.on_key(key) {
            self.view.set_modal_visible(false);
            self.view.set_scroll_locked(false);
        }
        if let Some(next) = card_index.and_then(|i| next_card(i, self.card_count, key)) {
            self.view.focus_card(next);
        }
    }

    pub fn on_intersect(&self, element: &str, ratio: f64) {
        if element == STATS_ELEMENT {
            if self.state().animator.trigger(ratio) {
                info!(counters = self.counters.len(), "starting counter animation");
                tokio::spawn(run_counters(Arc::clone(&self.view), self.counters.clone()));
            }
        } else if self.state().reveal.on_intersect(element, ratio) {
            self.view.reveal(element);
        }
    }

    pub fn on_input(&self, field: &str, value: &str) {
        let result = self.state().form.set_value(field, value);
        match result {
            Ok(true) => self.view.clear_field_error(field),
            Ok(false) => {}
            Err(e) => debug!(error = %e, "ignoring input"),
        }
    }

    pub fn on_blur(&self, field: &str) {
        let result = self.state().form.blur(field);
        match result {
            Ok(outcome) => {
                self.view.clear_field_error(field);
                if let Some(error) = outcome {
                    self.view.show_field_error(field, &error);
                }
            }
            Err(e) => debug!(error = %e, "ignoring blur"),
        }
    }

    /// Validate and (mock-)send the contact form.
    pub async fn submit_contact(&self) -> Result<ContactSubmission, FormError> {
        let begun = self.state().form.begin_submit();
        let submission = match begun {
            Ok(submission) => submission,
            Err(FormError::Invalid(failures)) => {
                let names: Vec<String> = self
                    .state()
                    .form
                    .fields()
                    .iter()
                    .map(|f| f.name.clone())
                    .collect();
                for name in &names {
                    self.view.clear_field_error(name);
                }
                for (field, error) in &failures {
                    self.view.show_field_error(field, error);
                }
                self.notifications.show(Notification::new(
                    FORM_INVALID_MESSAGE,
                    NotificationKind::Error,
                ));
                return Err(FormError::Invalid(failures));
            }
            Err(e) => return Err(e),
        };

        self.view.set_submit_busy(true);
        tokio::time::sleep(SUBMIT_DELAY).await;

        self.notifications
            .show(Notification::new(FORM_SENT_MESSAGE, NotificationKind::Success));
        self.state().form.finish_submit();
        self.view.reset_form();
        self.view.set_submit_busy(false);
        info!(fields = submission.values.len(), "contact form sent");
        Ok(submission)
    }

    /// Attach every page handler to `source` and put only the first service
    /// card in the tab order.
    pub fn register(self: &Arc<Self>, source: &mut dyn EventSource) {
        for index in 0..self.card_count {
            self.view.set_card_tab_index(index, initial_tab_index(index));
        }

        let page = Arc::clone(self);
        source.register(
            EventKind::Click,
            Box::new(move |event| {
                if let PageEvent::Click(target) = event {
                    page.on_click(target);
                }
            }),
        );

        let page = Arc::clone(self);
        source.register(
            EventKind::Scroll,
            Box::new(move |event| {
                if let PageEvent::Scroll {
                    scroll_y,
                    header_height,
                    sections,
                } = event
                {
                    page.on_scroll(*scroll_y, *header_height, sections.clone());
                }
            }),
        );

        let page = Arc::clone(self);
        source.register(
            EventKind::KeyDown,
            Box::new(move |event| {
                if let PageEvent::KeyDown { key, card_index } = event {
                    page.on_key(*key, *card_index);
                }
            }),
        );

        let page = Arc::clone(self);
        source.register(
            EventKind::Intersect,
            Box::new(move |event| {
                if let PageEvent::Intersect { element, ratio } = event {
                    page.on_intersect(element, *ratio);
                }
            }),
        );

        let page = Arc::clone(self);
        source.register(
            EventKind::Input,
            Box::new(move |event| {
                if let PageEvent::Input { field, value } = event {
                    page.on_input(field, value);
                }
            }),
        );

        let page = Arc::clone(self);
        source.register(
            EventKind::Blur,
            Box::new(move |event| {
                if let PageEvent::Blur { field } = event {
                    page.on_blur(field);
                }
            }),
        );

        let page = Arc::clone(self);
        source.register(
            EventKind::Submit,
            Box::new(move |_| {
                let page = Arc::clone(&page);
                tokio::spawn(async move {
                    match page.submit_contact().await {
                        Ok(_) | Err(FormError::Invalid(_)) => {}
                        Err(e) => debug!(error = %e, "ignoring submit"),
                    }
                });
            }),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::chat::ChatView;
    use crate::event::HandlerRegistry;
    use crate::responder::{BoxResponder, CannedResponder};
    use premier_types::chat::Message;
    use premier_types::panel::PanelVisibility;
    use uuid::Uuid;

    #[derive(Default)]
    struct RecordingPage {
        log: Mutex<Vec<String>>,
    }

    impl RecordingPage {
        fn push(&self, entry: String) {
            self.log.lock().unwrap().push(entry);
        }

        fn log(&self) -> Vec<String> {
            self.log.lock().unwrap().clone()
        }

        fn has(&self, entry: &str) -> bool {
            self.log().iter().any(|e| e == entry)
        }

        fn count_prefix(&self, prefix: &str) -> usize {
            self.log().iter().filter(|e| e.starts_with(prefix)).count()
        }
    }

    impl PageView for RecordingPage {
        fn set_nav_open(&self, open: bool) {
            self.push(format!("nav:{open}"));
        }
        fn scroll_to(&self, top: f64) {
            self.push(format!("scroll:{top}"));
        }
        fn set_active_link(&self, section: Option<&str>) {
            self.push(format!("active:{}", section.unwrap_or("-")));
        }
        fn set_header_scrolled(&self, scrolled: bool) {
            self.push(format!("header:{scrolled}"));
        }
        fn reveal(&self, element: &str) {
            self.push(format!("reveal:{element}"));
        }
        fn set_counter_text(&self, counter: &str, text: &str) {
            self.push(format!("counter:{counter}={text}"));
        }
        fn show_field_error(&self, field: &str, error: &FieldError) {
            self.push(format!("field-error:{field}:{error}"));
        }
        fn clear_field_error(&self, field: &str) {
            self.push(format!("field-clear:{field}"));
        }
        fn set_submit_busy(&self, busy: bool) {
            self.push(format!("busy:{busy}"));
        }
        fn reset_form(&self) {
            self.push("reset".to_string());
        }
        fn show_notification(&self, notification: &Notification) {
            self.push(format!("notify:{}", notification.message));
        }
        fn set_modal_visible(&self, visible: bool) {
            self.push(format!("modal:{visible}"));
        }
        fn set_scroll_locked(&self, locked: bool) {
            self.push(format!("locked:{locked}"));
        }
        fn show_alert(&self, title: &str, _body: &str) {
            self.push(format!("alert:{title}"));
        }
        fn focus_card(&self, index: usize) {
            self.push(format!("focus-card:{index}"));
        }
        fn set_card_tab_index(&self, index: usize, tab_index: i32) {
            self.push(format!("tab-index:{index}={tab_index}"));
        }
    }

    struct SilentChat;

    impl ChatView for SilentChat {
        fn append_message(&self, _message: &Message) {}
        fn remove_message(&self, _id: Uuid) {}
        fn set_visibility(&self, _visibility: PanelVisibility) {}
        fn focus_input(&self) {}
        fn clear_input(&self) {}
    }

    fn page() -> (Arc<PageController>, Arc<RecordingPage>) {
        let view = Arc::new(RecordingPage::default());
        let ctrl = PageController::new(view.clone())
            .with_counters(vec![("customers".to_string(), 50_000), ("years".to_string(), 25)]);
        (Arc::new(ctrl), view)
    }

    fn nav_link(href: &str, target_top: Option<f64>) -> ClickTarget {
        ClickTarget::NavLink {
            href: href.to_string(),
            target_top,
            page_y: 100.0,
            header_height: 80.0,
        }
    }

    #[tokio::test]
    async fn nav_toggle_and_click_outside() {
        let (page, view) = page();
        page.on_click(&ClickTarget::NavToggle);
        assert!(page.nav_open());
        page.on_click(&ClickTarget::Elsewhere);
        assert!(!page.nav_open());
        assert_eq!(view.log(), vec!["nav:true", "nav:false"]);

        // Clicking outside a closed menu does nothing.
        page.on_click(&ClickTarget::Elsewhere);
        assert_eq!(view.log().len(), 2);
    }

    #[tokio::test]
    async fn internal_link_scrolls_and_closes_menu() {
        let (page, view) = page();
        page.on_click(&ClickTarget::NavToggle);
        page.on_click(&nav_link("#services", Some(400.0)));
        assert!(view.has("scroll:400"));
        assert!(!page.nav_open());
    }

    #[tokio::test]
    async fn external_or_missing_links_do_nothing() {
        let (page, view) = page();
        page.on_click(&ClickTarget::NavToggle);
        page.on_click(&nav_link("https://example.com", Some(10.0)));
        page.on_click(&nav_link("#missing", None));
        assert_eq!(view.count_prefix("scroll:"), 0);
        assert!(page.nav_open());
    }

    #[tokio::test(start_paused = true)]
    async fn scroll_updates_header_and_debounced_spy() {
        let (page, view) = page();
        let sections = vec![Section::new("home", -300.0), Section::new("about", 20.0)];

        page.on_scroll(10.0, 80.0, sections.clone());
        page.on_scroll(120.0, 80.0, sections);
        assert_eq!(view.log(), vec!["header:false", "header:true"]);

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(view.count_prefix("active:"), 1);
        assert!(view.has("active:about"));
    }

    #[tokio::test]
    async fn modal_open_and_close_triggers() {
        let (page, view) = page();
        page.on_click(&ClickTarget::ChatButton);
        assert!(page.modal_open());
        assert!(view.has("modal:true"));
        assert!(view.has("locked:true"));

        page.on_click(&ClickTarget::ModalBackdrop);
        assert!(!page.modal_open());
        assert!(view.has("locked:false"));

        page.on_click(&ClickTarget::ChatButton);
        page.on_key(Key::Escape, None);
        assert!(!page.modal_open());

        page.on_click(&ClickTarget::ChatButton);
        page.on_click(&ClickTarget::ModalClose);
        assert!(!page.modal_open());
        assert_eq!(view.count_prefix("modal:false"), 3);
    }

    #[tokio::test]
    async fn escape_on_closed_modal_is_ignored() {
        let (page, view) = page();
        page.on_key(Key::Escape, None);
        assert!(view.log().is_empty());
    }

    #[tokio::test]
    async fn chat_option_and_service_card_alerts() {
        let (page, view) = page();
        page.on_click(&ClickTarget::ChatOption("Loan Services".to_string()));
        page.on_click(&ClickTarget::ServiceCard("Business Banking".to_string()));
        assert!(view.has("alert:Loan Services"));
        assert!(view.has("alert:Business Banking"));
    }

    #[tokio::test]
    async fn agent_handoff_opens_chat_panel() {
        let view = Arc::new(RecordingPage::default());
        let chat = ChatController::new(
            Arc::new(SilentChat),
            BoxResponder::new(CannedResponder::instant()),
            Duration::from_millis(1),
        );
        let page = PageController::new(view.clone()).with_chat(chat.clone());

        page.on_click(&ClickTarget::ChatButton);
        page.on_click(&ClickTarget::AgentHandoff);

        assert!(!page.modal_open());
        assert_eq!(chat.visibility(), PanelVisibility::Open);
    }

    #[tokio::test]
    async fn card_keyboard_navigation() {
        let (page, view) = page();
        page.on_key(Key::ArrowRight, Some(0));
        page.on_key(Key::ArrowRight, Some(3));
        page.on_key(Key::ArrowLeft, Some(0));
        page.on_key(Key::ArrowLeft, Some(2));
        page.on_key(Key::ArrowRight, None);
        assert_eq!(view.log(), vec!["focus-card:1", "focus-card:1"]);
    }

    #[tokio::test(start_paused = true)]
    async fn counters_run_once_and_end_on_targets() {
        let (page, view) = page();
        page.on_intersect(STATS_ELEMENT, 0.3);
        assert!(!page.has_animated());

        page.on_intersect(STATS_ELEMENT, 0.6);
        page.on_intersect(STATS_ELEMENT, 1.0);
        assert!(page.has_animated());

        tokio::time::sleep(Duration::from_secs(3)).await;
        let log = view.log();
        let last_customers = log
            .iter()
            .filter(|e| e.starts_with("counter:customers="))
            .last()
            .cloned();
        assert_eq!(last_customers.as_deref(), Some("counter:customers=50K+"));
        assert!(view.has("counter:years=25+"));
        // One ramp per counter, not two.
        assert!(view.count_prefix("counter:years=") <= 101);
    }

    #[tokio::test]
    async fn reveal_once() {
        let (page, view) = page();
        page.on_intersect("service-card-1", 0.5);
        page.on_intersect("service-card-1", 0.9);
        assert_eq!(view.count_prefix("reveal:"), 1);
    }

    #[tokio::test]
    async fn blur_shows_error_and_input_clears_it() {
        let (page, view) = page();
        page.on_blur("name");
        assert!(view.has("field-error:name:Full Name is required."));

        page.on_input("name", "Ada");
        assert_eq!(view.count_prefix("field-clear:name"), 2);
        assert!(page.form().error("name").is_none());
    }

    #[tokio::test]
    async fn invalid_submit_shows_errors_and_notification() {
        let (page, view) = page();
        page.on_input("email", "not-an-email");

        let result = page.submit_contact().await;
        assert!(matches!(result, Err(FormError::Invalid(_))));
        assert!(view.has("field-error:email:Please enter a valid email address."));
        assert!(view.has(&format!("notify:{FORM_INVALID_MESSAGE}")));
        assert_eq!(view.count_prefix("busy:"), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn valid_submit_is_delayed_then_resets() {
        let (page, view) = page();
        for (field, value) in [
            ("name", "Ada Lovelace"),
            ("email", "ada@example.com"),
            ("subject", "loans"),
            ("message", "Please call me"),
        ] {
            page.on_input(field, value);
        }

        let started = tokio::time::Instant::now();
        let submission = page.submit_contact().await.unwrap();
        assert!(started.elapsed() >= SUBMIT_DELAY);
        assert_eq!(submission.values["email"], "ada@example.com");

        let log = view.log();
        let busy_on = log.iter().position(|e| e == "busy:true").unwrap();
        let notified = log
            .iter()
            .position(|e| *e == format!("notify:{FORM_SENT_MESSAGE}"))
            .unwrap();
        let busy_off = log.iter().position(|e| e == "busy:false").unwrap();
        assert!(busy_on < notified && notified < busy_off);
        assert!(view.has("reset"));
        assert_eq!(page.form().value("name"), "");
    }

    #[tokio::test]
    async fn registered_handlers_route_events() {
        let (page, view) = page();
        let mut registry = HandlerRegistry::new();
        page.register(&mut registry);

        registry.dispatch(&PageEvent::Click(ClickTarget::NavToggle));
        registry.dispatch(&PageEvent::Blur {
            field: "email".to_string(),
        });
        registry.dispatch(&PageEvent::Intersect {
            element: "feature-1".to_string(),
            ratio: 0.2,
        });

        assert!(page.nav_open());
        assert!(view.has("field-error:email:Email Address is required."));
        assert!(view.has("reveal:feature-1"));
        assert_eq!(registry.handler_count(EventKind::Submit), 1);
    }

    #[tokio::test]
    async fn only_first_card_is_tabbable_after_register() {
        let (page, view) = page();
        let mut registry = HandlerRegistry::new();
        page.register(&mut registry);

        let tab_indexes: Vec<String> = view
            .log()
            .into_iter()
            .filter(|e| e.starts_with("tab-index:"))
            .collect();
        assert_eq!(
            tab_indexes,
            vec!["tab-index:0=0", "tab-index:1=-1", "tab-index:2=-1", "tab-index:3=-1"]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn second_submit_while_sending_is_busy() {
        let (page, _view) = page();
        for (field, value) in [
            ("name", "Ada Lovelace"),
            ("email", "ada@example.com"),
            ("subject", "loans"),
            ("message", "Please call me"),
        ] {
            page.on_input(field, value);
        }

        let first = {
            let page = Arc::clone(&page);
            tokio::spawn(async move { page.submit_contact().await })
        };
        tokio::task::yield_now().await;

        assert_eq!(page.submit_contact().await, Err(FormError::Busy));
        assert!(first.await.unwrap().is_ok());
    }
}
