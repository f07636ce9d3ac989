//! Client Configuration

use reqwest::Url;

use crate::error::{ApiError, ApiResult};

/// Hosted mock backend serving `/list` and `/todo`
pub const DEFAULT_BASE_URL: &str = "https://64227d0877e7062b3e1ab3e7.mockapi.io";

/// Where the REST resources live
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Base URL baked in at build time via `TODODOO_API_BASE`
    ///
    /// The browser has no process environment, so this is read with `option_env!`.
    pub fn from_build_env() -> Self {
        match option_env!("TODODOO_API_BASE") {
            Some(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }

    /// URL of a resource collection, optionally addressing one record
    pub fn resource_url(&self, resource: &str, id: Option<&str>) -> ApiResult<Url> {
        let mut url = Url::parse(&self.base_url).map_err(|e| ApiError::Config(format!("{}: {}", self.base_url, e)))?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ApiError::Config(format!("{} cannot be a base", self.base_url)))?;
            segments.pop_if_empty().push(resource);
            if let Some(id) = id {
                segments.push(id);
            }
        }
        Ok(url)
    }
}
