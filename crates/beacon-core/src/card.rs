//! Card rendering: one catalog record becomes one clickable card

use serde::Serialize;

use crate::catalog::ServiceRecord;

/// CSS class of a card element
pub const CARD_CLASS: &str = "service-card";

/// CSS class toggled on cards that do not match the current term
pub const HIDDEN_CLASS: &str = "hidden";

/// A rendered card with its search keys cached at render time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedCard {
    pub href: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub color: String,
    pub name_key: String,
    pub desc_key: String,
}

impl RenderedCard {
    /// Whether the normalized term occurs in the name or description key
    pub fn matches(&self, term: &str) -> bool {
        self.name_key.contains(term) || self.desc_key.contains(term)
    }

    /// Markup for the card, as an anchor so activation is plain navigation
    pub fn to_html(&self, hidden: bool) -> String {
        let class = if hidden {
            format!("{} {}", CARD_CLASS, HIDDEN_CLASS)
        } else {
            CARD_CLASS.to_string()
        };

        format!(
            r#"<a href="{href}" class="{class}" data-name="{name_key}" data-description="{desc_key}"><div class="service-icon"><i class="{icon}" style="color: {color}"></i></div><div class="service-info"><div class="service-name">{name}</div><div class="service-description">{description}</div></div></a>"#,
            href = html_escape(&self.href),
            class = class,
            name_key = html_escape(&self.name_key),
            desc_key = html_escape(&self.desc_key),
            icon = html_escape(&self.icon),
            color = html_escape(&self.color),
            name = html_escape(&self.name),
            description = html_escape(&self.description),
        )
    }
}

/// Build the card for one record. Pure: nothing is inserted anywhere.
pub fn render(record: &ServiceRecord) -> RenderedCard {
    RenderedCard {
        href: record.url.clone(),
        name: record.name.clone(),
        description: record.description.clone(),
        icon: record.icon.clone(),
        color: record.color.clone(),
        name_key: record.name.to_lowercase(),
        desc_key: record.description.to_lowercase(),
    }
}

/// Escape text for use in element content and quoted attributes
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
