//! BDD test world for the beacon dashboard

use std::net::SocketAddr;

use beacon::Config;
use beacon_core::{Catalog, Handled, InputController, InputEvent, MemoryContainer, SearchHost};
use cucumber::World;
use tokio_util::sync::CancellationToken;

/// A search host that records what the controller asked of it
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub focused: bool,
    pub value: String,
    pub focus_calls: usize,
    pub navigations: Vec<String>,
}

impl SearchHost for RecordingHost {
    fn search_has_focus(&self) -> bool {
        self.focused
    }

    fn focus_search(&mut self) {
        self.focus_calls += 1;
        self.focused = true;
    }

    fn blur_search(&mut self) {
        self.focused = false;
    }

    fn clear_search(&mut self) {
        self.value.clear();
    }

    fn navigate(&mut self, url: &str) {
        self.navigations.push(url.to_string());
    }
}

#[derive(Debug, Default, World)]
pub struct BeaconWorld {
    // Pipeline testing
    pub catalog: Option<Catalog>,
    pub controller: Option<InputController<MemoryContainer>>,
    pub host: RecordingHost,
    pub last_handled: Option<Handled>,

    // Server testing
    pub config: Option<Config>,
    pub config_dir: Option<tempfile::TempDir>,
    pub app_dir: Option<tempfile::TempDir>,
    pub server_addr: Option<SocketAddr>,
    pub server_cancel: Option<CancellationToken>,
    pub response_status: Option<u16>,
    pub response_location: Option<String>,
    pub response_body: Option<String>,
}

impl BeaconWorld {
    pub fn controller(&self) -> &InputController<MemoryContainer> {
        self.controller.as_ref().expect("dashboard not built")
    }

    /// Deliver an event to the controller against the recording host
    pub fn dispatch(&mut self, event: InputEvent) -> Handled {
        let controller = self.controller.as_mut().expect("dashboard not built");
        let handled = controller.handle(&event, &mut self.host);
        self.last_handled = Some(handled);
        handled
    }
}

impl Drop for BeaconWorld {
    fn drop(&mut self) {
        if let Some(cancel) = &self.server_cancel {
            cancel.cancel();
        }
    }
}
