//! Built-in test scenario catalog.
//!
//! Curated test-scenario descriptions embedded in the binary at compile
//! time. The catalog is fully static: two consecutive runs emit
//! byte-identical `test_scenarios.json` files.

use std::fmt;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Serialize;

use crate::emit;
use crate::error::Result;

/// Output filename, relative to the site directory.
pub const TEST_SCENARIOS_FILE: &str = "test_scenarios.json";

// ============================================================================
// Types
// ============================================================================

/// A built-in test scenario embedded in the binary.
///
/// Serializes as the `{name, description, parameters}` record written into
/// the catalog file; the category becomes the enclosing JSON key.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioDef {
    /// Human-readable scenario name, unique across the catalog.
    pub name: &'static str,

    /// Short description of what the scenario exercises.
    pub description: &'static str,

    /// Category the scenario is grouped under.
    #[serde(skip)]
    pub category: ScenarioCategory,

    /// Names of the parameters the scenario exercises, in input order.
    pub parameters: &'static [&'static str],
}

/// Category for organizing built-in scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ScenarioCategory {
    /// On-site promotional messaging placements.
    PromotionalMessaging,
    /// Direct API checkout creation.
    DirectApi,
    /// Transaction lifecycle operations.
    TransactionManagement,
    /// Affirm Lite pop-up checkout.
    AffirmLite,
    /// Virtual Card Network flows.
    VirtualCardNetwork,
}

impl ScenarioCategory {
    /// Returns the snake_case key used in the emitted catalog file.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::PromotionalMessaging => "promotional_messaging",
            Self::DirectApi => "direct_api",
            Self::TransactionManagement => "transaction_management",
            Self::AffirmLite => "affirm_lite",
            Self::VirtualCardNetwork => "virtual_card_network",
        }
    }

    /// Returns the human-readable title-case label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PromotionalMessaging => "Promotional Messaging",
            Self::DirectApi => "Direct API",
            Self::TransactionManagement => "Transaction Management",
            Self::AffirmLite => "Affirm Lite",
            Self::VirtualCardNetwork => "Virtual Card Network",
        }
    }

    /// Returns all category variants in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::PromotionalMessaging,
            Self::DirectApi,
            Self::TransactionManagement,
            Self::AffirmLite,
            Self::VirtualCardNetwork,
        ]
    }
}

impl fmt::Display for ScenarioCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ============================================================================
// Registry
// ============================================================================

/// All built-in scenarios, in emission order within each category.
static CATALOG: &[ScenarioDef] = &[
    ScenarioDef {
        name: "Product Page Messaging",
        description: "Test promotional messaging on product pages",
        category: ScenarioCategory::PromotionalMessaging,
        parameters: &["price"],
    },
    ScenarioDef {
        name: "Cart View Messaging",
        description: "Test promotional messaging in cart view",
        category: ScenarioCategory::PromotionalMessaging,
        parameters: &["cart_total"],
    },
    ScenarioDef {
        name: "Banner Messaging",
        description: "Test site-wide promotional banner messaging",
        category: ScenarioCategory::PromotionalMessaging,
        parameters: &["min_amount"],
    },
    ScenarioDef {
        name: "Prequalification",
        description: "Test customer prequalification with financing options",
        category: ScenarioCategory::PromotionalMessaging,
        parameters: &["email", "amount"],
    },
    ScenarioDef {
        name: "Checkout Initialization",
        description: "Test creating and initializing a Direct API checkout",
        category: ScenarioCategory::DirectApi,
        parameters: &["amount", "merchant_name", "checkout_type"],
    },
    ScenarioDef {
        name: "Transaction Authorization",
        description: "Test authorizing a transaction from a completed checkout",
        category: ScenarioCategory::TransactionManagement,
        parameters: &["checkout_token"],
    },
    ScenarioDef {
        name: "Transaction Capture",
        description: "Test capturing an authorized transaction",
        category: ScenarioCategory::TransactionManagement,
        parameters: &["transaction_id"],
    },
    ScenarioDef {
        name: "Split Capture",
        description: "Test capturing an authorized transaction in partial amounts",
        category: ScenarioCategory::TransactionManagement,
        parameters: &["transaction_id", "amount"],
    },
    ScenarioDef {
        name: "Transaction Void",
        description: "Test voiding an authorized transaction before capture",
        category: ScenarioCategory::TransactionManagement,
        parameters: &["transaction_id"],
    },
    ScenarioDef {
        name: "Transaction Refund",
        description: "Test refunding a captured transaction",
        category: ScenarioCategory::TransactionManagement,
        parameters: &["transaction_id", "amount"],
    },
    ScenarioDef {
        name: "Read Transaction",
        description: "Test reading the current state of a transaction",
        category: ScenarioCategory::TransactionManagement,
        parameters: &["transaction_id"],
    },
    ScenarioDef {
        name: "Update Transaction",
        description: "Test updating order and shipping details on a transaction",
        category: ScenarioCategory::TransactionManagement,
        parameters: &["transaction_id", "order_id"],
    },
    ScenarioDef {
        name: "Lite Checkout",
        description: "Test the Affirm Lite pop-up checkout flow",
        category: ScenarioCategory::AffirmLite,
        parameters: &["amount", "autofill"],
    },
    ScenarioDef {
        name: "Autofill Fallback",
        description: "Test manual card entry when virtual card autofill fails",
        category: ScenarioCategory::AffirmLite,
        parameters: &["amount"],
    },
    ScenarioDef {
        name: "VCN Checkout",
        description: "Test the Virtual Card Network checkout flow",
        category: ScenarioCategory::VirtualCardNetwork,
        parameters: &["amount", "platform"],
    },
    ScenarioDef {
        name: "Virtual Card Generation",
        description: "Test generating a virtual card from a checkout token",
        category: ScenarioCategory::VirtualCardNetwork,
        parameters: &["checkout_token"],
    },
    ScenarioDef {
        name: "Card Cancellation",
        description: "Test cancelling an issued virtual card",
        category: ScenarioCategory::VirtualCardNetwork,
        parameters: &["card_id"],
    },
    ScenarioDef {
        name: "Telesales Checkout",
        description: "Test agent-initiated checkout with card delivery over SMS or email",
        category: ScenarioCategory::VirtualCardNetwork,
        parameters: &["amount", "customer_phone"],
    },
    ScenarioDef {
        name: "In-Store Checkout",
        description: "Test point-of-sale checkout via QR code",
        category: ScenarioCategory::VirtualCardNetwork,
        parameters: &["amount", "store_location"],
    },
];

// ============================================================================
// Public API
// ============================================================================

/// Look up a scenario by exact name.
#[must_use]
pub fn find_scenario(name: &str) -> Option<&'static ScenarioDef> {
    CATALOG.iter().find(|s| s.name == name)
}

/// List scenarios, optionally filtered by category.
#[must_use]
pub fn list_scenarios(category: Option<ScenarioCategory>) -> Vec<&'static ScenarioDef> {
    CATALOG
        .iter()
        .filter(|s| category.is_none_or(|c| s.category == c))
        .collect()
}

/// Suggest a similar scenario name for typo correction.
///
/// Returns the closest match if its Damerau-Levenshtein distance is <= 3.
#[must_use]
pub fn suggest_scenario(input: &str) -> Option<String> {
    CATALOG
        .iter()
        .map(|s| (s.name, strsim::damerau_levenshtein(input, s.name)))
        .filter(|(_, dist)| *dist <= 3)
        .min_by_key(|(_, dist)| *dist)
        .map(|(name, _)| name.to_string())
}

/// Returns all scenario names in catalog order.
#[must_use]
pub fn scenario_names() -> Vec<&'static str> {
    CATALOG.iter().map(|s| s.name).collect()
}

/// Returns the catalog grouped by category key, in category display order.
///
/// This is the exact structure serialized into [`TEST_SCENARIOS_FILE`].
#[must_use]
pub fn grouped() -> IndexMap<&'static str, Vec<&'static ScenarioDef>> {
    let mut map: IndexMap<&'static str, Vec<&'static ScenarioDef>> = IndexMap::new();
    for category in ScenarioCategory::all() {
        let in_cat: Vec<&'static ScenarioDef> =
            CATALOG.iter().filter(|s| s.category == *category).collect();
        if !in_cat.is_empty() {
            map.insert(category.key(), in_cat);
        }
    }
    map
}

// ============================================================================
// Emitter
// ============================================================================

/// Writes the catalog as [`TEST_SCENARIOS_FILE`] into `site_dir`,
/// overwriting any existing file.
///
/// # Errors
///
/// Returns an error if serialization or the filesystem write fails.
pub fn write(site_dir: &Path) -> Result<PathBuf> {
    let path = site_dir.join(TEST_SCENARIOS_FILE);
    emit::write_json(&grouped(), &path)?;
    tracing::info!(path = %path.display(), "test scenarios written");
    Ok(path)
}

// ============================================================================
// Tests
// ============================================================================
