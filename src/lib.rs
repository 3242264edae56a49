/*!
 * # zotpub - Zotero publications to HTML
 *
 * A Rust library for rendering a Zotero publications library as an HTML
 * citation list suitable for inclusion in a static site.
 *
 * ## Features
 *
 * - Fetch a user's public publications library from the Zotero web API
 * - Filter conference-proceedings entries
 * - Render one HTML list item per proceedings record
 * - Optional per-record PDF icon link for locally hosted preprints
 * - Bold highlighting of a configured author name
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `publication`: Data model for Zotero publication items
 * - `zotero`: Zotero web API client:
 *   - `zotero::PublicationSource`: Trait abstracting the item source
 *   - `zotero::ZoteroClient`: HTTP client for the public API
 * - `renderer`: Citation line and document rendering
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod file_utils;
pub mod publication;
pub mod renderer;
pub mod app_controller;
pub mod zotero;
pub mod errors;

// Re-export main types for easier usage
pub use app_config::Config;
pub use publication::{Publication, PublicationData, Creator};
pub use zotero::{PublicationSource, ZoteroClient};
pub use errors::{AppError, ApiError, RenderError};
