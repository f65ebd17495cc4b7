//! Reactive grid container
//!
//! Cards are fixed once appended; each carries its own `hidden` signal, so
//! filtering only flips class bindings on existing elements.

use beacon_core::{Container, RenderedCard};
use leptos::prelude::*;

/// A [`Container`] whose visibility state lives in signals
#[derive(Debug, Clone, Default)]
pub struct ReactiveGrid {
    cards: Vec<(RenderedCard, RwSignal<bool>)>,
    placeholders: RwSignal<Vec<String>>,
}

impl ReactiveGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cards with their visibility signals, in document order
    pub fn cards(&self) -> &[(RenderedCard, RwSignal<bool>)] {
        &self.cards
    }

    pub fn placeholders(&self) -> RwSignal<Vec<String>> {
        self.placeholders
    }
}

impl Container for ReactiveGrid {
    fn append_card(&mut self, card: RenderedCard) {
        self.cards.push((card, RwSignal::new(false)));
    }

    fn card_count(&self) -> usize {
        self.cards.len()
    }

    fn card(&self, index: usize) -> Option<&RenderedCard> {
        self.cards.get(index).map(|(card, _)| card)
    }

    fn set_hidden(&mut self, index: usize, hidden: bool) {
        if let Some((_, signal)) = self.cards.get(index) {
            if signal.get_untracked() != hidden {
                signal.set(hidden);
            }
        }
    }

    fn is_hidden(&self, index: usize) -> bool {
        self.cards
            .get(index)
            .map(|(_, signal)| signal.get_untracked())
            .unwrap_or(false)
    }

    fn remove_placeholder(&mut self) {
        if !self.placeholders.with_untracked(Vec::is_empty) {
            self.placeholders.set(Vec::new());
        }
    }

    fn append_placeholder(&mut self, text: &str) {
        self.placeholders.update(|p| p.push(text.to_string()));
    }

    fn placeholder_count(&self) -> usize {
        self.placeholders.with_untracked(Vec::len)
    }
}
