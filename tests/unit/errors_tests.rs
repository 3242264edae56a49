/*!
 * Tests for error types and conversions
 */

use zotpub::errors::{ApiError, AppError, RenderError};

#[test]
fn test_apiError_requestFailed_shouldDisplayCorrectly() {
    let error = ApiError::RequestFailed("Connection timeout".to_string());
    let display = format!("{}", error);
    assert!(display.contains("API request failed"));
    assert!(display.contains("Connection timeout"));
}

#[test]
fn test_apiError_parseError_shouldDisplayCorrectly() {
    let error = ApiError::ParseError("Invalid JSON".to_string());
    let display = format!("{}", error);
    assert!(display.contains("Failed to parse API response"));
    assert!(display.contains("Invalid JSON"));
}

#[test]
fn test_apiError_apiStatus_shouldDisplayStatusAndMessage() {
    let error = ApiError::ApiStatus {
        status_code: 404,
        message: "Not found".to_string(),
    };
    let display = format!("{}", error);
    assert!(display.contains("404"));
    assert!(display.contains("Not found"));
}

#[test]
fn test_renderError_missingField_shouldNameKeyAndField() {
    let error = RenderError::MissingField {
        key: "ABC123".to_string(),
        field: "DOI",
    };
    let display = format!("{}", error);
    assert!(display.contains("ABC123"));
    assert!(display.contains("DOI"));
}

#[test]
fn test_appError_fromApiError_shouldWrapCorrectly() {
    let api_error = ApiError::RequestFailed("Network down".to_string());
    let app_error: AppError = api_error.into();
    let display = format!("{}", app_error);
    assert!(display.contains("API error"));
}

#[test]
fn test_appError_fromRenderError_shouldWrapCorrectly() {
    let render_error = RenderError::Io("Disk full".to_string());
    let app_error: AppError = render_error.into();
    let display = format!("{}", app_error);
    assert!(display.contains("Render error"));
    assert!(display.contains("Disk full"));
}

#[test]
fn test_appError_fromIoError_shouldWrapAsFileError() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
    let app_error: AppError = io_error.into();
    let display = format!("{}", app_error);
    assert!(display.contains("File error"));
    assert!(display.contains("File not found"));
}

#[test]
fn test_appError_fromAnyhowError_shouldWrapAsUnknown() {
    let anyhow_error = anyhow::anyhow!("Something went wrong");
    let app_error: AppError = anyhow_error.into();
    let display = format!("{}", app_error);
    assert!(display.contains("Unknown error"));
    assert!(display.contains("Something went wrong"));
}

#[test]
fn test_apiError_debug_shouldBeImplemented() {
    let error = ApiError::RequestFailed("test".to_string());
    let debug = format!("{:?}", error);
    assert!(debug.contains("RequestFailed"));
}

#[test]
fn test_renderError_debug_shouldBeImplemented() {
    let error = RenderError::MissingField { key: "K".to_string(), field: "pages" };
    let debug = format!("{:?}", error);
    assert!(debug.contains("MissingField"));
}
