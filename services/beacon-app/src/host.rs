//! Browser implementation of the controller's page capabilities

use beacon_core::SearchHost;
use leptos::html;
use leptos::prelude::*;

/// Drives the real search input and window location
#[derive(Clone, Copy)]
pub struct BrowserHost {
    input: NodeRef<html::Input>,
}

impl BrowserHost {
    pub fn new(input: NodeRef<html::Input>) -> Self {
        Self { input }
    }
}

impl SearchHost for BrowserHost {
    fn search_has_focus(&self) -> bool {
        match self.input.get_untracked() {
            Some(input) => input.is_same_node(document().active_element().as_deref()),
            None => false,
        }
    }

    fn focus_search(&mut self) {
        if let Some(input) = self.input.get_untracked() {
            if let Err(e) = input.focus() {
                leptos::logging::warn!("Focusing the search box failed: {:?}", e);
            }
        }
    }

    fn blur_search(&mut self) {
        if let Some(input) = self.input.get_untracked() {
            if let Err(e) = input.blur() {
                leptos::logging::warn!("Blurring the search box failed: {:?}", e);
            }
        }
    }

    fn clear_search(&mut self) {
        if let Some(input) = self.input.get_untracked() {
            input.set_value("");
        }
    }

    fn navigate(&mut self, url: &str) {
        if let Err(e) = window().location().set_href(url) {
            leptos::logging::warn!("Navigation to {} failed: {:?}", url, e);
        }
    }
}
