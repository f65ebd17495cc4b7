//! Services grid component

use beacon_core::container::{GRID_ID, PLACEHOLDER_CLASS};
use leptos::prelude::*;

use crate::components::service_card::ServiceCard;
use crate::grid::ReactiveGrid;

/// Renders every card once, followed by the "no results" placeholder slot
#[component]
pub fn ServicesGrid(grid: ReactiveGrid) -> impl IntoView {
    let placeholders = grid.placeholders();

    view! {
        <div class="services-grid" id=GRID_ID>
            {grid
                .cards()
                .iter()
                .map(|(card, hidden)| view! { <ServiceCard card=card.clone() hidden=*hidden /> })
                .collect_view()}
            {move || {
                placeholders
                    .get()
                    .into_iter()
                    .map(|text| view! { <div class=PLACEHOLDER_CLASS>{text}</div> })
                    .collect_view()
            }}
        </div>
    }
}
