//! BDD step definitions for the keyboard shortcuts feature

use beacon_core::{InputEvent, Key};
use cucumber::{given, then, when};

use crate::world::BeaconWorld;

#[given("the search box has focus")]
fn search_focused(world: &mut BeaconWorld) {
    world.host.focused = true;
}

#[given("the search box does not have focus")]
fn search_unfocused(world: &mut BeaconWorld) {
    world.host.focused = false;
}

#[when(expr = "I type {string}")]
fn type_query(world: &mut BeaconWorld, text: String) {
    world.host.value.push_str(&text);
    let value = world.host.value.clone();
    world.dispatch(InputEvent::Input(value));
}

#[when(expr = "I press {string} in the search box")]
fn press_in_search(world: &mut BeaconWorld, key: String) {
    assert!(world.host.focused, "search box must have focus");
    world.dispatch(InputEvent::SearchKeyDown(Key::from_key_name(&key)));
}

#[when(expr = "I press {string} on the page")]
fn press_on_page(world: &mut BeaconWorld, key: String) {
    world.dispatch(InputEvent::DocumentKeyDown(Key::from_key_name(&key)));
}

#[when(expr = "I click card {int}")]
fn click_card(world: &mut BeaconWorld, position: usize) {
    world.dispatch(InputEvent::CardActivated(position - 1));
}

#[then("the search box should have focus")]
fn should_be_focused(world: &mut BeaconWorld) {
    assert!(world.host.focused);
}

#[then("the search box should not have focus")]
fn should_not_be_focused(world: &mut BeaconWorld) {
    assert!(!world.host.focused);
}

#[then("the search box should be empty")]
fn search_empty(world: &mut BeaconWorld) {
    assert!(world.host.value.is_empty(), "value was '{}'", world.host.value);
}

#[then("focus should not have been moved")]
fn focus_not_moved(world: &mut BeaconWorld) {
    assert_eq!(world.host.focus_calls, 0);
}

#[then("the key's default action should be suppressed")]
fn default_suppressed(world: &mut BeaconWorld) {
    let handled = world.last_handled.expect("no key handled");
    assert!(handled.prevent_default);
}

#[then("the key's default action should not be suppressed")]
fn default_not_suppressed(world: &mut BeaconWorld) {
    let handled = world.last_handled.expect("no key handled");
    assert!(!handled.prevent_default);
}

#[then(expr = "the browser should navigate to {string}")]
fn navigated_to(world: &mut BeaconWorld, url: String) {
    assert_eq!(world.host.navigations, vec![url]);
}

#[then("the browser should not navigate")]
fn not_navigated(world: &mut BeaconWorld) {
    assert!(
        world.host.navigations.is_empty(),
        "unexpected navigation: {:?}",
        world.host.navigations
    );
}
