//! Main App component

use crate::api::fetch_catalog;
use crate::components::service_board::ServiceBoard;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};

const TITLE: &str = "Homelab";
const SEARCH_PLACEHOLDER: &str = "Search services... (press / to focus)";

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let catalog = LocalResource::new(fetch_catalog);

    view! {
        <Title text=TITLE />
        <main>
            <h1>{TITLE}</h1>
            <Suspense fallback=move || view! { <p>"Loading services..."</p> }>
                {move || {
                    catalog.get().map(|catalog| {
                        view! {
                            <ServiceBoard catalog=catalog placeholder=SEARCH_PLACEHOLDER.to_string() />
                        }
                    })
                }}
            </Suspense>
        </main>
    }
}
