//! Client-side API fetch helpers

use beacon_core::{Catalog, ServiceRecord};

/// The catalog served at /api/services, or the built-in one if unavailable
pub async fn fetch_catalog() -> Catalog {
    match fetch_services().await {
        Ok(services) => Catalog::new(services),
        Err(e) => {
            leptos::logging::warn!("Using built-in catalog: {}", e);
            Catalog::homelab()
        }
    }
}

async fn fetch_services() -> Result<Vec<ServiceRecord>, String> {
    #[cfg(all(feature = "csr", target_arch = "wasm32"))]
    {
        let window = web_sys::window().ok_or("no window")?;
        let origin = window.location().origin().map_err(|e| format!("{:?}", e))?;
        let url = format!("{}/api/services", origin);

        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("{}", e))?;

        if !resp.ok() {
            return Err(format!("GET {} -> {}", url, resp.status()));
        }

        resp.json().await.map_err(|e| format!("{}", e))
    }

    #[cfg(not(all(feature = "csr", target_arch = "wasm32")))]
    {
        Err("catalog API is only reachable from the browser".to_string())
    }
}
