//! Search box and grid wired to one input controller

use beacon_core::{Catalog, Dashboard, Handled, InputController, InputEvent, Key};
use leptos::ev;
use leptos::html;
use leptos::prelude::*;

use crate::components::search_box::SearchBox;
use crate::components::services_grid::ServicesGrid;
use crate::grid::ReactiveGrid;
use crate::host::BrowserHost;

/// Builds the grid once for `catalog` and routes page events through the
/// controller
#[component]
pub fn ServiceBoard(catalog: Catalog, placeholder: String) -> impl IntoView {
    let dashboard = Dashboard::new(&catalog, ReactiveGrid::new());
    let grid = dashboard.container().clone();
    let controller = StoredValue::new(InputController::new(dashboard));
    let input_ref = NodeRef::<html::Input>::new();

    let dispatch = move |event: InputEvent| -> Handled {
        let mut host = BrowserHost::new(input_ref);
        let mut handled = Handled::default();
        controller.update_value(|controller| handled = controller.handle(&event, &mut host));
        handled
    };

    let keydown = window_event_listener(ev::keydown, move |ev| {
        let handled = dispatch(InputEvent::DocumentKeyDown(Key::from_key_name(&ev.key())));
        if handled.prevent_default {
            ev.prevent_default();
        }
    });
    on_cleanup(move || keydown.remove());

    view! {
        <SearchBox input_ref=input_ref placeholder=placeholder on_event=dispatch />
        <ServicesGrid grid=grid />
    }
}
