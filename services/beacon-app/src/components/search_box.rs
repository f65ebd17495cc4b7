//! Search box component

use beacon_core::input::SEARCH_INPUT_ID;
use beacon_core::{Handled, InputEvent, Key};
use leptos::ev::KeyboardEvent;
use leptos::html;
use leptos::prelude::*;

/// The search input; every input and keydown is handed to `on_event`
#[component]
pub fn SearchBox<F>(
    input_ref: NodeRef<html::Input>,
    placeholder: String,
    on_event: F,
) -> impl IntoView
where
    F: Fn(InputEvent) -> Handled + Copy + 'static,
{
    view! {
        <div class="search-container">
            <input
                type="text"
                id=SEARCH_INPUT_ID
                class="search-input"
                placeholder=placeholder
                autocomplete="off"
                node_ref=input_ref
                on:input=move |ev| {
                    on_event(InputEvent::Input(event_target_value(&ev)));
                }
                on:keydown=move |ev: KeyboardEvent| {
                    let key = Key::from_key_name(&ev.key());
                    let handled = on_event(InputEvent::SearchKeyDown(key));
                    if handled.prevent_default {
                        ev.prevent_default();
                    }
                }
            />
        </div>
    }
}
