//! Server-rendered dashboard page

use beacon_core::card::html_escape;
use beacon_core::container::GRID_ID;
use beacon_core::input::SEARCH_INPUT_ID;
use beacon_core::{Dashboard, MemoryContainer};

use crate::config::PageConfig;

const FONT_AWESOME_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";

/// Render the full page around an already built (and possibly filtered) grid
pub fn render_index(
    page: &PageConfig,
    dashboard: &Dashboard<MemoryContainer>,
    query: &str,
) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <link rel="stylesheet" href="{font_awesome}">
    <style>
        .services-grid {{ display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 1rem; }}
        .service-card {{ display: flex; gap: 0.75rem; align-items: center; padding: 1rem; border-radius: 0.5rem; text-decoration: none; color: inherit; background: #313244; }}
        .service-card.hidden {{ display: none; }}
        .service-icon {{ font-size: 1.5rem; }}
        .service-description {{ font-size: 0.85em; opacity: 0.8; }}
        .no-results {{ grid-column: 1 / -1; text-align: center; opacity: 0.8; }}
    </style>
</head>
<body style="font-family: system-ui, sans-serif; max-width: 1200px; margin: 0 auto; padding: 1rem; background: #1e1e2e; color: #cdd6f4;">
    <h1>{title}</h1>
    <form action="/go" method="get">
        <input type="search" id="{input_id}" name="q" value="{query}" placeholder="{placeholder}" autocomplete="off" style="width: 100%; padding: 0.75rem; font-size: 1rem;">
    </form>
    <div class="services-grid" id="{grid_id}">{grid}</div>
</body>
</html>"#,
        title = html_escape(&page.title),
        font_awesome = FONT_AWESOME_CSS,
        input_id = SEARCH_INPUT_ID,
        query = html_escape(query),
        placeholder = html_escape(&page.search_placeholder),
        grid_id = GRID_ID,
        grid = dashboard.container().to_html(),
    )
}
