//! Input controller: keyboard and input events driving the search filter
//!
//! Hosts translate their native events into [`InputEvent`]s and expose the
//! few page capabilities the controller needs through [`SearchHost`].

use crate::container::Container;
use crate::dashboard::Dashboard;

/// Element id of the search box in the page
pub const SEARCH_INPUT_ID: &str = "searchInput";

/// Keys the controller reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Escape,
    Enter,
    Slash,
    Other(String),
}

impl Key {
    /// Map a `KeyboardEvent.key` value
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "Escape" => Key::Escape,
            "Enter" => Key::Enter,
            "/" => Key::Slash,
            other => Key::Other(other.to_string()),
        }
    }
}

/// Events delivered by a host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// The search box value changed
    Input(String),
    /// A key went down inside the search box, which therefore has focus
    SearchKeyDown(Key),
    /// A key went down anywhere in the document
    DocumentKeyDown(Key),
    /// The card at this index was activated without native link navigation.
    ///
    /// Hosts that render cards as real `<a href>` links (the browser app and
    /// the server page) let the browser follow the link and never send this.
    /// Hosts without hyperlinks, such as a terminal front end or a scripted
    /// event source, use it to open a card.
    CardActivated(usize),
}

/// Page capabilities the controller drives
#[cfg_attr(test, mockall::automock)]
pub trait SearchHost {
    fn search_has_focus(&self) -> bool;

    fn focus_search(&mut self);

    fn blur_search(&mut self);

    /// Set the search box value to the empty string
    fn clear_search(&mut self);

    /// Full page navigation to `url`
    fn navigate(&mut self, url: &str);
}

/// What the host should do with the native event afterwards
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Handled {
    pub prevent_default: bool,
}

/// A source of input events, drained by [`InputController::run`]
pub trait EventSource {
    fn next_event(&mut self) -> Option<InputEvent>;
}

impl<I: Iterator<Item = InputEvent>> EventSource for I {
    fn next_event(&mut self) -> Option<InputEvent> {
        self.next()
    }
}

/// Routes events to the filter and to navigation
#[derive(Debug, Clone)]
pub struct InputController<C> {
    dashboard: Dashboard<C>,
}

impl<C: Container> InputController<C> {
    pub fn new(dashboard: Dashboard<C>) -> Self {
        Self { dashboard }
    }

    pub fn dashboard(&self) -> &Dashboard<C> {
        &self.dashboard
    }

    pub fn handle(&mut self, event: &InputEvent, host: &mut dyn SearchHost) -> Handled {
        match event {
            InputEvent::Input(value) => {
                self.dashboard.filter(value);
                Handled::default()
            }
            InputEvent::SearchKeyDown(Key::Escape) => {
                host.clear_search();
                self.dashboard.filter("");
                host.blur_search();
                Handled::default()
            }
            InputEvent::SearchKeyDown(Key::Enter) => {
                match self.dashboard.first_visible() {
                    Some(card) => {
                        tracing::debug!("Opening top result '{}'", card.name);
                        host.navigate(&card.href);
                    }
                    None => tracing::debug!("Enter with no visible cards"),
                }
                Handled::default()
            }
            InputEvent::DocumentKeyDown(Key::Slash) if !host.search_has_focus() => {
                host.focus_search();
                Handled {
                    prevent_default: true,
                }
            }
            InputEvent::CardActivated(index) => {
                if let Some(card) = self.dashboard.card(*index) {
                    host.navigate(&card.href);
                }
                Handled::default()
            }
            _ => Handled::default(),
        }
    }

    /// Handle every event until the source is exhausted
    pub fn run<S: EventSource + ?Sized>(
        &mut self,
        source: &mut S,
        host: &mut dyn SearchHost,
    ) -> Vec<Handled> {
        let mut handled = Vec::new();
        while let Some(event) = source.next_event() {
            handled.push(self.handle(&event, host));
        }
        handled
    }
}
