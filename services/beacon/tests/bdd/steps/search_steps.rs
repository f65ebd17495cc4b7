//! BDD step definitions for the search feature

use beacon_core::{Catalog, Container, Dashboard, InputController, InputEvent, MemoryContainer};
use cucumber::{given, then, when};

use crate::world::BeaconWorld;

fn visible_names(world: &BeaconWorld) -> Vec<String> {
    world
        .controller()
        .dashboard()
        .container()
        .cards()
        .filter(|(_, hidden)| !hidden)
        .map(|(card, _)| card.name.clone())
        .collect()
}

#[given("the homelab catalog")]
fn homelab_catalog(world: &mut BeaconWorld) {
    world.catalog = Some(Catalog::homelab());
}

#[given("the dashboard is built")]
fn dashboard_built(world: &mut BeaconWorld) {
    let catalog = world.catalog.as_ref().expect("catalog not set");
    let dashboard = Dashboard::new(catalog, MemoryContainer::new());
    world.controller = Some(InputController::new(dashboard));
}

#[when(expr = "I search for {string}")]
fn search_for(world: &mut BeaconWorld, query: String) {
    world.host.value = query.clone();
    world.dispatch(InputEvent::Input(query));
}

#[then(expr = "there should be {int} cards")]
fn card_count(world: &mut BeaconWorld, expected: usize) {
    assert_eq!(world.controller().dashboard().container().card_count(), expected);
}

#[then(expr = "card {int} should be {string}")]
fn card_at(world: &mut BeaconWorld, position: usize, name: String) {
    let card = world
        .controller()
        .dashboard()
        .card(position - 1)
        .expect("no card at position");
    assert_eq!(card.name, name);
}

#[then(expr = "{int} cards should be visible")]
fn visible_count(world: &mut BeaconWorld, expected: usize) {
    assert_eq!(world.controller().dashboard().visible_count(), expected);
}

#[then(expr = "only {string} should be visible")]
fn only_visible(world: &mut BeaconWorld, name: String) {
    assert_eq!(visible_names(world), vec![name]);
}

#[then(expr = "{string} should be visible")]
fn is_visible(world: &mut BeaconWorld, name: String) {
    assert!(
        visible_names(world).contains(&name),
        "Expected '{}' to be visible, visible cards: {:?}",
        name,
        visible_names(world)
    );
}

#[then("there should be no placeholder")]
fn no_placeholder(world: &mut BeaconWorld) {
    assert_eq!(
        world.controller().dashboard().container().placeholder_count(),
        0
    );
}

#[then(expr = "there should be exactly {int} placeholder")]
fn placeholder_count(world: &mut BeaconWorld, expected: usize) {
    assert_eq!(
        world.controller().dashboard().container().placeholder_count(),
        expected
    );
}

#[then(expr = "the placeholder should read {string}")]
fn placeholder_text(world: &mut BeaconWorld, text: String) {
    let container = world.controller().dashboard().container();
    assert_eq!(container.placeholder_count(), 1);
    assert_eq!(container.placeholder_text(), Some(text.as_str()));
}
