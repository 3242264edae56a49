/*!
 * Tests for the Zotero API client
 */

use anyhow::Result;
use zotpub::app_config::ZoteroConfig;
use zotpub::zotero::ZoteroClient;

/// Test that the items URL matches the fixed query of the public API
#[test]
fn test_itemsUrl_withDefaults_shouldBuildFixedQuery() -> Result<()> {
    let client = ZoteroClient::new("4797004", "https://api.zotero.org", 100);

    let url = client.items_url()?;
    assert_eq!(
        url.as_str(),
        "https://api.zotero.org/users/4797004/publications/items?linkwrap=1&order=date&sort=desc&start=0&include=data&limit=100&style="
    );

    Ok(())
}

/// Test that a trailing slash on the endpoint does not double up
#[test]
fn test_itemsUrl_withTrailingSlashEndpoint_shouldNormalize() -> Result<()> {
    let client = ZoteroClient::new("42", "https://api.zotero.org/", 10);

    let url = client.items_url()?;
    assert_eq!(
        url.as_str(),
        "https://api.zotero.org/users/42/publications/items?linkwrap=1&order=date&sort=desc&start=0&include=data&limit=10&style="
    );

    Ok(())
}

/// Test that the configured limit lands in the query string
#[test]
fn test_itemsUrl_withCustomLimit_shouldUseConfiguredPageSize() -> Result<()> {
    let client = ZoteroClient::new("4797004", "https://api.zotero.org", 25);

    let url = client.items_url()?;
    assert!(url.as_str().contains("limit=25"));

    Ok(())
}

/// Test that a local test endpoint is accepted, so integration tests can
/// point the client at a fake server
#[test]
fn test_itemsUrl_withLocalEndpoint_shouldBuildLocalUrl() -> Result<()> {
    let client = ZoteroClient::new("1", "http://127.0.0.1:8080", 5);

    let url = client.items_url()?;
    assert!(url.as_str().starts_with("http://127.0.0.1:8080/users/1/publications/items?"));

    Ok(())
}

/// Test that an unparsable endpoint is rejected when building the URL
#[test]
fn test_itemsUrl_withInvalidEndpoint_shouldFail() {
    let client = ZoteroClient::new("1", "not a url", 5);
    assert!(client.items_url().is_err());
}

/// Test building a client from the configuration section
#[test]
fn test_fromConfig_withDefaultConfig_shouldUseConfiguredValues() -> Result<()> {
    let config = ZoteroConfig::default();
    let client = ZoteroClient::from_config(&config);

    let url = client.items_url()?;
    assert!(url.as_str().contains("/users/4797004/"));
    assert!(url.as_str().contains("limit=100"));

    Ok(())
}
