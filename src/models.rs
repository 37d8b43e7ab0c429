use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::image::ImageReference;

/// GET /api/version response
#[derive(Debug, Deserialize)]
pub struct VersionInfo {
    #[serde(rename = "Version")]
    pub version: String,
}

/// GET /api/v1/applications response
#[derive(Debug, Deserialize)]
pub struct ApplicationList {
    #[serde(default)]
    pub items: Vec<Application>,
}

#[derive(Debug, Deserialize)]
pub struct Application {
    pub metadata: AppMetadata,
    #[serde(default)]
    pub spec: AppSpec,
    #[serde(default)]
    pub status: AppStatus,
}

#[derive(Debug, Deserialize)]
pub struct AppMetadata {
    pub name: String,
    #[serde(rename = "creationTimestamp")]
    pub creation_timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AppSpec {
    #[serde(default)]
    pub destination: Destination,
}

#[derive(Debug, Default, Deserialize)]
pub struct Destination {
    pub namespace: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AppStatus {
    #[serde(default)]
    pub summary: AppSummary,
    #[serde(default)]
    pub resources: Vec<ResourceStatus>,
    #[serde(default)]
    pub health: HealthStatus,
    #[serde(default)]
    pub sync: SyncStatus,
}

/// status.summary — image list aggregated by the server
#[derive(Debug, Default, Deserialize)]
pub struct AppSummary {
    #[serde(default)]
    pub images: Vec<String>,
}

/// One entry of status.resources; only the image field matters here
#[derive(Debug, Deserialize)]
pub struct ResourceStatus {
    pub image: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct HealthStatus {
    pub status: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SyncStatus {
    pub status: Option<String>,
}

impl Application {
    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    pub fn namespace(&self) -> &str {
        self.spec.destination.namespace.as_deref().unwrap_or("")
    }

    pub fn health(&self) -> &str {
        self.status.health.status.as_deref().unwrap_or("Unknown")
    }

    pub fn sync(&self) -> &str {
        self.status.sync.status.as_deref().unwrap_or("Unknown")
    }

    /// Collect this application's image references, deduplicated by raw
    /// string equality in first-seen order: status.summary.images first,
    /// then status.resources entries that carry an image.
    pub fn image_refs(&self) -> Vec<ImageReference> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut refs = Vec::new();

        let raw_images = self
            .status
            .summary
            .images
            .iter()
            .map(String::as_str)
            .chain(self.status.resources.iter().filter_map(|r| r.image.as_deref()));

        for raw in raw_images {
            if seen.insert(raw) {
                refs.push(ImageReference::parse(raw));
            }
        }

        refs
    }
}
