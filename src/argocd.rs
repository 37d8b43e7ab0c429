use anyhow::{Context, Result};
use reqwest::header::ACCEPT;
use reqwest::Client;

use crate::error::AppError;
use crate::models::{Application, ApplicationList, VersionInfo};

pub struct ArgoClient {
    client: Client,
    base_url: String,
    token: Option<String>,
    verbose: bool,
}

impl ArgoClient {
    pub fn new(base_url: &str, token: Option<String>, insecure: bool, verbose: bool) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/').to_string();
        let client = Client::builder()
            .danger_accept_invalid_certs(insecure)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url,
            token,
            verbose,
        })
    }

    /// GET /api/version — confirms the target actually speaks the Argo CD API
    pub async fn server_version(&self) -> Result<VersionInfo> {
        let url = self.endpoint("/api/version");
        if self.verbose {
            eprintln!("[DEBUG] GET {}", url);
        }
        let resp = self
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to reach {}", url))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(AppError::Api {
                url,
                status: status.as_u16(),
            }
            .into());
        }

        let body = resp
            .text()
            .await
            .context("Failed to read version response")?;

        let info: VersionInfo = serde_json::from_str(&body).map_err(|_| AppError::NotArgo {
            url: self.base_url.clone(),
        })?;

        Ok(info)
    }

    /// GET /api/v1/applications — items sorted by application name
    pub async fn list_applications(&self) -> Result<Vec<Application>> {
        let url = self.endpoint("/api/v1/applications");
        if self.verbose {
            eprintln!("[DEBUG] GET {}", url);
        }
        let resp = self
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch applications from {}", url))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(AppError::Api {
                url,
                status: status.as_u16(),
            }
            .into());
        }

        let list: ApplicationList = resp
            .json()
            .await
            .context("Failed to parse application list JSON")?;

        let mut apps = list.items;
        apps.sort_by(|a, b| a.name().cmp(b.name()));

        Ok(apps)
    }

    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        let mut req = self.client.get(url).header(ACCEPT, "application/json");
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }
        req
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_path() {
        let client = ArgoClient::new("https://argocd.local", None, false, false).unwrap();
        assert_eq!(
            client.endpoint("/api/v1/applications"),
            "https://argocd.local/api/v1/applications"
        );
    }

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let client = ArgoClient::new("https://argocd.local/", None, false, false).unwrap();
        assert_eq!(client.endpoint("/api/version"), "https://argocd.local/api/version");
    }
}
