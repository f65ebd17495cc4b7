//! Service catalog: the ordered, read-only list of dashboard entries

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

/// A single service entry shown on the dashboard
///
/// Missing fields deserialize to empty strings and render as blank visuals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub color: String,
}

impl ServiceRecord {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
        icon: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            url: url.into(),
            icon: icon.into(),
            color: color.into(),
        }
    }
}

/// Problems found in a catalog that the pipeline tolerates
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogIssue {
    DuplicateName { name: String, index: usize },
    EmptyName { index: usize },
}

impl std::fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogIssue::DuplicateName { name, index } => {
                write!(f, "duplicate service name '{}' at index {}", name, index)
            }
            CatalogIssue::EmptyName { index } => {
                write!(f, "empty service name at index {}", index)
            }
        }
    }
}

/// Ordered, immutable sequence of service records
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    services: Vec<ServiceRecord>,
}

impl Catalog {
    pub fn new(services: Vec<ServiceRecord>) -> Self {
        Self { services }
    }

    /// Parse a catalog from a JSON array of records
    pub fn from_json(json: &str) -> Result<Self> {
        let services: Vec<ServiceRecord> = serde_json::from_str(json)?;
        Ok(Self::new(services))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ServiceRecord> {
        self.services.iter()
    }

    pub fn get(&self, index: usize) -> Option<&ServiceRecord> {
        self.services.get(index)
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    pub fn as_slice(&self) -> &[ServiceRecord] {
        &self.services
    }

    /// Collect duplicate and empty names, in catalog order
    pub fn issues(&self) -> Vec<CatalogIssue> {
        let mut seen = HashSet::new();
        let mut issues = Vec::new();
        for (index, service) in self.services.iter().enumerate() {
            if service.name.is_empty() {
                issues.push(CatalogIssue::EmptyName { index });
            } else if !seen.insert(service.name.as_str()) {
                issues.push(CatalogIssue::DuplicateName {
                    name: service.name.clone(),
                    index,
                });
            }
        }
        issues
    }

    /// Fail on the first issue instead of tolerating it
    pub fn validate_strict(&self) -> Result<()> {
        match self.issues().into_iter().next() {
            Some(CatalogIssue::DuplicateName { name, index }) => {
                Err(CatalogError::DuplicateName { name, index })
            }
            Some(CatalogIssue::EmptyName { index }) => Err(CatalogError::EmptyName { index }),
            None => Ok(()),
        }
    }

    /// The catalog of the reference homelab deployment
    pub fn homelab() -> Self {
        Self::new(
            HOMELAB_SERVICES
                .iter()
                .map(|(name, description, url, icon, color)| {
                    ServiceRecord::new(*name, *description, *url, *icon, *color)
                })
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ServiceRecord;
    type IntoIter = std::slice::Iter<'a, ServiceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.services.iter()
    }
}

impl From<Vec<ServiceRecord>> for Catalog {
    fn from(services: Vec<ServiceRecord>) -> Self {
        Self::new(services)
    }
}

#[rustfmt::skip]
const HOMELAB_SERVICES: &[(&str, &str, &str, &str, &str)] = &[
    ("Bazarr", "Subtitle manager", "http://10.10.10.107:6767", "fas fa-closed-captioning", "#f38ba8"),
    ("Frigate", "NVR camera system", "http://10.10.10.101:5000", "fas fa-video", "#fab387"),
    ("Home Assistant", "Home automation", "http://10.10.10.100:8123", "fas fa-home", "#fab387"),
    ("Immich", "Photo backup & management", "http://10.10.10.117:2283/", "fas fa-images", "#a6e3a1"),
    ("Jellyfin", "Media server", "http://10.10.10.108:8096", "fas fa-play-circle", "#a6e3a1"),
    ("Lidarr", "Music manager", "http://10.10.10.112:8686", "fas fa-music", "#f38ba8"),
    ("NGINX Proxy Manager", "Reverse proxy", "http://10.10.10.110:81", "fas fa-network-wired", "#89b4fa"),
    ("PiHole", "DNS and adblocking", "http://192.168.1.2/admin/", "fab fa-raspberry-pi", "#94e2d5"),
    ("Proxmox Backup Server (PBS)", "Backup server", "https://10.10.10.115:8007", "fas fa-database", "#89b4fa"),
    ("Proxmox VE", "Virtualization platform", "http://192.168.1.5:8006", "fas fa-cube", "#89b4fa"),
    ("qBittorrent", "Torrent client", "http://10.10.10.111:8090/", "fas fa-cloud-download-alt", "#cba6f7"),
    ("Radarr", "Movie manager", "http://10.10.10.105:7878", "fas fa-film", "#f38ba8"),
    ("RomM", "Games ROM manager", "http://10.10.10.118", "fas fa-gamepad", "#a6e3a1"),
    ("Router", "Network gateway", "http://192.168.1.1", "fas fa-wifi", "#94e2d5"),
    ("SABnzbd", "Usenet downloader", "http://10.10.10.104:7777", "fas fa-download", "#cba6f7"),
    ("SLZB-06", "Zigbee coordinator", "http://192.168.1.15", "fas fa-broadcast-tower", "#94e2d5"),
    ("Sonarr", "TV show manager", "http://10.10.10.106:8989", "fas fa-tv", "#f38ba8"),
    ("Tidarr", "Tidal music downloader", "http://10.10.10.103:8484/", "fas fa-music", "#f38ba8"),
    ("UniFi Controller", "Network management", "http://192.168.1.11", "fas fa-cloud", "#94e2d5"),
    ("WGDashboard", "WireGuard VPN", "http://10.10.10.102:10086", "fas fa-shield-alt", "#94e2d5"),
];
