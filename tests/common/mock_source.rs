/*!
 * Mock publication sources for testing.
 *
 * This module provides mock sources that simulate different behaviors:
 * - `MockSource::working()` - Always succeeds with the given items
 * - `MockSource::empty()` - Succeeds with an empty library
 * - `MockSource::failing()` - Always fails with an API error
 */

use async_trait::async_trait;

use zotpub::errors::ApiError;
use zotpub::publication::Publication;
use zotpub::zotero::PublicationSource;

/// Behavior mode for the mock source
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds with the configured items
    Working,
    /// Succeeds with an empty item list
    Empty,
    /// Always fails with an error
    Failing,
}

/// Mock publication source for testing the render pipeline
pub struct MockSource {
    /// Behavior mode
    behavior: MockBehavior,
    /// Items returned in Working mode
    items: Vec<Publication>,
}

impl MockSource {
    /// Create a working mock source that yields the given items
    pub fn working(items: Vec<Publication>) -> Self {
        Self {
            behavior: MockBehavior::Working,
            items,
        }
    }

    /// Create a mock source with an empty library
    pub fn empty() -> Self {
        Self {
            behavior: MockBehavior::Empty,
            items: Vec::new(),
        }
    }

    /// Create a failing mock source that always errors
    pub fn failing() -> Self {
        Self {
            behavior: MockBehavior::Failing,
            items: Vec::new(),
        }
    }
}

#[async_trait]
impl PublicationSource for MockSource {
    async fn fetch(&self) -> Result<Vec<Publication>, ApiError> {
        match self.behavior {
            MockBehavior::Working => Ok(self.items.clone()),
            MockBehavior::Empty => Ok(Vec::new()),
            MockBehavior::Failing => Err(ApiError::RequestFailed(
                "Mock source configured to fail".to_string(),
            )),
        }
    }
}
