use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Zotero API settings
    #[serde(default)]
    pub zotero: ZoteroConfig,

    /// Rendering settings
    #[serde(default)]
    pub render: RenderConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Citation line style
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RenderStyle {
    // @style: Plain citation line
    #[default]
    Plain,
    // @style: Citation line with a trailing PDF icon link
    PdfIcon,
}

impl RenderStyle {
    // @returns: Human-readable style name
    pub fn display_name(&self) -> &str {
        match self {
            Self::Plain => "Plain",
            Self::PdfIcon => "PDF icon",
        }
    }

    // @returns: Lowercase style identifier
    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::Plain => "plain".to_string(),
            Self::PdfIcon => "pdficon".to_string(),
        }
    }
}

// Implement Display trait for RenderStyle
impl std::fmt::Display for RenderStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

// Implement FromStr trait for RenderStyle
impl std::str::FromStr for RenderStyle {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "plain" => Ok(Self::Plain),
            "pdficon" | "pdf-icon" => Ok(Self::PdfIcon),
            _ => Err(anyhow!("Invalid render style: {}", s)),
        }
    }
}

/// Zotero API configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ZoteroConfig {
    // @field: Numeric Zotero user identifier
    #[serde(default = "default_user_id")]
    pub user_id: String,

    // @field: API base URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    // @field: Max items fetched in the single request page
    #[serde(default = "default_limit")]
    pub limit: usize,

    // @field: Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ZoteroConfig {
    fn default() -> Self {
        Self {
            user_id: default_user_id(),
            endpoint: default_endpoint(),
            limit: default_limit(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Rendering configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RenderConfig {
    /// Path of the HTML fragment written on each run
    #[serde(default = "default_output_path")]
    pub output_path: String,

    /// Author name to wrap in bold tags wherever it occurs in the
    /// rendered author string (literal substring substitution)
    #[serde(default = "default_highlight_author")]
    pub highlight_author: String,

    /// Citation line style
    #[serde(default)]
    pub style: RenderStyle,

    /// Base path for locally hosted PDF links (pdficon style only)
    #[serde(default = "default_pdf_link_base")]
    pub pdf_link_base: String,

    /// Sort records by parsed date before rendering instead of keeping
    /// the API response order
    #[serde(default)]
    pub sort_by_date: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output_path: default_output_path(),
            highlight_author: default_highlight_author(),
            style: RenderStyle::default(),
            pdf_link_base: default_pdf_link_base(),
            sort_by_date: false,
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_user_id() -> String {
    "4797004".to_string()
}

fn default_endpoint() -> String {
    "https://api.zotero.org".to_string()
}

fn default_limit() -> usize {
    // Zotero caps a single page at 100 items
    100
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_output_path() -> String {
    "publications.html".to_string()
}

fn default_highlight_author() -> String {
    "Bertil Chapuis".to_string()
}

fn default_pdf_link_base() -> String {
    "/pubs".to_string()
}

impl Config {

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.zotero.user_id.is_empty() {
            return Err(anyhow!("Zotero user id must not be empty"));
        }

        if !self.zotero.user_id.chars().all(|c| c.is_ascii_digit()) {
            return Err(anyhow!("Zotero user id must be numeric: {}", self.zotero.user_id));
        }

        if self.zotero.limit == 0 || self.zotero.limit > 100 {
            return Err(anyhow!("Item limit must be between 1 and 100, got {}", self.zotero.limit));
        }

        if self.render.output_path.is_empty() {
            return Err(anyhow!("Output path must not be empty"));
        }

        Ok(())
    }

}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            zotero: ZoteroConfig::default(),
            render: RenderConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
