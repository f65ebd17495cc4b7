//! Search filter over already rendered cards

use serde::Serialize;

use crate::container::Container;

/// Text of the placeholder shown when a non-empty term matches nothing
pub const NO_RESULTS_TEXT: &str = "No services found";

/// Result of one filter pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOutcome {
    pub term: String,
    pub visible: usize,
    pub no_results: bool,
}

/// Lowercase and trim a raw query
pub fn normalize(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Toggle card visibility for `query` and manage the placeholder.
///
/// Cards are never added, removed or reordered. Any existing placeholder is
/// removed first, so at most one exists afterwards.
pub fn apply_filter<C: Container + ?Sized>(query: &str, container: &mut C) -> FilterOutcome {
    let term = normalize(query);
    let mut visible = 0;

    for index in 0..container.card_count() {
        let matches = container
            .card(index)
            .map(|card| card.matches(&term))
            .unwrap_or(false);
        container.set_hidden(index, !matches);
        if matches {
            visible += 1;
        }
    }

    container.remove_placeholder();

    let no_results = visible == 0 && !term.is_empty();
    if no_results {
        container.append_placeholder(NO_RESULTS_TEXT);
    }

    tracing::debug!(
        "Filter '{}': {} of {} cards visible",
        term,
        visible,
        container.card_count()
    );

    FilterOutcome {
        term,
        visible,
        no_results,
    }
}

/// Index of the first visible card in document order
pub fn first_visible<C: Container + ?Sized>(container: &C) -> Option<usize> {
    (0..container.card_count()).find(|&index| !container.is_hidden(index))
}
