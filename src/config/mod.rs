//! Site configuration record and emitter.
//!
//! The configuration content is fixed at compile time; only `last_updated`
//! varies between runs. The record is built fresh on every invocation and
//! discarded after the file is written.

use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::emit;
use crate::error::Result;

/// Output filename, relative to the site directory.
pub const SITE_CONFIG_FILE: &str = "site_config.json";

/// Version tag written into the configuration file.
pub const SITE_CONFIG_VERSION: &str = "1.0.0";

// ============================================================================
// Record Types
// ============================================================================

/// Root configuration record for the testing-suite site.
///
/// Field order is the serialization order. `environments` preserves
/// insertion order, and `documentation_links` is display-ordered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Semantic version of the site configuration.
    pub version: String,

    /// Generation instant, RFC 3339 with microsecond precision.
    pub last_updated: String,

    /// Deployment targets keyed by environment name.
    pub environments: IndexMap<String, Environment>,

    /// External reference material, in display order.
    pub documentation_links: Vec<DocLink>,
}

/// A named deployment target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Environment {
    /// Base API URL for the environment.
    pub base_url: String,

    /// Human-readable description.
    pub description: String,
}

/// A title/URL pair referencing external documentation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocLink {
    /// Link title shown in the site.
    pub title: String,

    /// Target URL.
    pub url: String,
}

// ============================================================================
// Builder
// ============================================================================

fn environment(base_url: &str, description: &str) -> Environment {
    Environment {
        base_url: base_url.to_string(),
        description: description.to_string(),
    }
}

fn doc_link(title: &str, url: &str) -> DocLink {
    DocLink {
        title: title.to_string(),
        url: url.to_string(),
    }
}

/// Builds the site configuration record for the given generation instant.
#[must_use]
pub fn site_config(generated_at: DateTime<Utc>) -> SiteConfig {
    let mut environments = IndexMap::new();
    environments.insert(
        "sandbox".to_string(),
        environment(
            "https://sandbox.affirm.com/api/v2",
            "Sandbox environment for testing",
        ),
    );
    environments.insert(
        "production".to_string(),
        environment("https://api.affirm.com/api/v2", "Production environment"),
    );

    let documentation_links = vec![
        doc_link(
            "Introduction to Affirm",
            "https://docs.affirm.com/developers/docs/home-introduction",
        ),
        doc_link(
            "Direct API Overview",
            "https://docs.affirm.com/payments/docs/direct-api-overview",
        ),
        doc_link(
            "Affirm Lite Integration",
            "https://docs.affirm.com/payments/docs/affirm-lite-integration-guide",
        ),
        doc_link(
            "Virtual Card Network Overview",
            "https://docs.affirm.com/payments/docs/vcn-overview",
        ),
        doc_link(
            "Solutions We Offer",
            "https://docs.affirm.com/developers/docs/solutions-we-offer",
        ),
    ];

    SiteConfig {
        version: SITE_CONFIG_VERSION.to_string(),
        last_updated: generated_at.to_rfc3339_opts(SecondsFormat::Micros, true),
        environments,
        documentation_links,
    }
}

// ============================================================================
// Emitter
// ============================================================================

/// Builds the configuration record and writes [`SITE_CONFIG_FILE`] into
/// `site_dir`, overwriting any existing file.
///
/// # Errors
///
/// Returns an error if serialization or the filesystem write fails.
pub fn write(site_dir: &Path) -> Result<PathBuf> {
    let config = site_config(Utc::now());
    let path = site_dir.join(SITE_CONFIG_FILE);
    emit::write_json(&config, &path)?;
    tracing::info!(path = %path.display(), "site configuration written");
    Ok(path)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environments_are_exactly_sandbox_and_production() {
        let config = site_config(Utc::now());
        let keys: Vec<&str> = config.environments.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["sandbox", "production"]);
        for (name, env) in &config.environments {
            assert!(!env.base_url.is_empty(), "{name} has empty base_url");
            assert!(!env.description.is_empty(), "{name} has empty description");
        }
    }

    #[test]
    fn sandbox_and_production_point_at_distinct_hosts() {
        let config = site_config(Utc::now());
        assert!(config.environments["sandbox"].base_url.contains("sandbox"));
        assert!(!config.environments["production"].base_url.contains("sandbox"));
    }

    #[test]
    fn documentation_links_are_ordered_and_populated() {
        let config = site_config(Utc::now());
        assert_eq!(config.documentation_links.len(), 5);
        assert_eq!(
            config.documentation_links[0].title,
            "Introduction to Affirm"
        );
        for link in &config.documentation_links {
            assert!(
                link.url.starts_with("https://docs.affirm.com/"),
                "{}",
                link.url
            );
        }
    }

    #[test]
    fn version_is_the_fixed_tag() {
        let config = site_config(Utc::now());
        assert_eq!(config.version, SITE_CONFIG_VERSION);
    }

    #[test]
    fn last_updated_round_trips_through_rfc3339() {
        let now = Utc::now();
        let config = site_config(now);
        let parsed = DateTime::parse_from_rfc3339(&config.last_updated).unwrap();
        assert_eq!(parsed.timestamp_micros(), now.timestamp_micros());
    }

    #[test]
    fn serialized_field_order_is_stable() {
        let config = site_config(Utc::now());
        let json = serde_json::to_string_pretty(&config).unwrap();
        let version_at = json.find("\"version\"").unwrap();
        let updated_at = json.find("\"last_updated\"").unwrap();
        let envs_at = json.find("\"environments\"").unwrap();
        let links_at = json.find("\"documentation_links\"").unwrap();
        assert!(version_at < updated_at && updated_at < envs_at && envs_at < links_at);

        // Insertion order of the environment map must survive serialization.
        let sandbox_at = json.find("\"sandbox\"").unwrap();
        let production_at = json.find("\"production\"").unwrap();
        assert!(sandbox_at < production_at);
    }

    #[test]
    fn write_emits_file_into_site_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path()).unwrap();
        assert_eq!(path, dir.path().join(SITE_CONFIG_FILE));

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: SiteConfig = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.version, SITE_CONFIG_VERSION);
    }
}
