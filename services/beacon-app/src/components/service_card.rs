//! Service card component

use beacon_core::card::CARD_CLASS;
use beacon_core::RenderedCard;
use leptos::prelude::*;

/// A clickable card; only its `hidden` class reacts to the search term
#[component]
pub fn ServiceCard(card: RenderedCard, hidden: RwSignal<bool>) -> impl IntoView {
    let icon_style = format!("color: {}", card.color);

    view! {
        <a
            href=card.href
            class=CARD_CLASS
            class:hidden=move || hidden.get()
            data-name=card.name_key
            data-description=card.desc_key
        >
            <div class="service-icon">
                <i class=card.icon style=icon_style></i>
            </div>
            <div class="service-info">
                <div class="service-name">{card.name}</div>
                <div class="service-description">{card.description}</div>
            </div>
        </a>
    }
}
