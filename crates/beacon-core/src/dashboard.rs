//! A catalog bound to a built grid

use crate::card::RenderedCard;
use crate::catalog::Catalog;
use crate::container::Container;
use crate::filter::{self, FilterOutcome};
use crate::grid::build_grid;

/// Owns a container whose grid has been built exactly once
#[derive(Debug, Clone)]
pub struct Dashboard<C> {
    container: C,
    card_count: usize,
}

impl<C: Container> Dashboard<C> {
    /// Build the grid for `catalog` into a fresh `container`
    pub fn new(catalog: &Catalog, mut container: C) -> Self {
        let card_count = build_grid(catalog, &mut container);
        Self {
            container,
            card_count,
        }
    }

    pub fn filter(&mut self, query: &str) -> FilterOutcome {
        filter::apply_filter(query, &mut self.container)
    }

    /// The top search result, if any card is visible
    pub fn first_visible(&self) -> Option<&RenderedCard> {
        filter::first_visible(&self.container).and_then(|index| self.container.card(index))
    }

    pub fn visible_count(&self) -> usize {
        (0..self.container.card_count())
            .filter(|&index| !self.container.is_hidden(index))
            .count()
    }

    pub fn card_count(&self) -> usize {
        self.card_count
    }

    pub fn card(&self, index: usize) -> Option<&RenderedCard> {
        self.container.card(index)
    }

    pub fn container(&self) -> &C {
        &self.container
    }

    pub fn into_container(self) -> C {
        self.container
    }
}
