//! Grid builder

use crate::card::render;
use crate::catalog::Catalog;
use crate::container::Container;

/// Render every record and append it to `container`, in catalog order.
///
/// Not idempotent: a second call appends a second copy of every card.
/// [`crate::Dashboard::new`] is the single-call entry point.
pub fn build_grid<C: Container + ?Sized>(catalog: &Catalog, container: &mut C) -> usize {
    for record in catalog {
        container.append_card(render(record));
    }
    tracing::debug!("Built grid with {} cards", catalog.len());
    catalog.len()
}
