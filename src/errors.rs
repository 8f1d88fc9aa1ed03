//! Error Types
//!
//! All public APIs return [`Result<T>`], an alias for
//! `std::result::Result<T, DioramaError>`. Viewpoint lookup misses are *not*
//! errors; they are reported as outcome values (see [`crate::viewpoint`] and
//! [`crate::tween`]) because callers branch on them without error handling.

use thiserror::Error;

/// The main error type for the diorama coordination layer.
#[derive(Error, Debug)]
pub enum DioramaError {
    // ========================================================================
    // Engine & Session Errors
    // ========================================================================
    /// The rendering engine failed to build its surface, camera, or controls.
    #[error("Engine error: {0}")]
    Engine(String),

    // ========================================================================
    // Asset Loading Errors
    // ========================================================================
    /// The requested asset was not found.
    #[error("Asset not found: {0}")]
    AssetNotFound(String),

    /// An asset bundle could not be decoded.
    #[error("Asset decode error: {0}")]
    AssetDecode(String),

    /// A model load failed; the scene graph was left unmodified.
    #[error("Failed to load asset {url}: {source}")]
    AssetLoad {
        /// Resolved URL the load was attempted against
        url: String,
        #[source]
        source: Box<DioramaError>,
    },

    // ========================================================================
    // Catalog Errors
    // ========================================================================
    /// The catalog document could not be fetched or parsed; any previously
    /// installed catalog is retained.
    #[error("Catalog fetch failed: {0}")]
    CatalogFetch(#[source] Box<DioramaError>),

    // ========================================================================
    // I/O Errors
    // ========================================================================
    /// File I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ========================================================================
    // HTTP & Network Errors
    // ========================================================================
    /// HTTP request error.
    #[cfg(feature = "http")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing error.
    #[cfg(feature = "http")]
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// HTTP response error with status code.
    #[error("HTTP response error: status {status}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
    },

    // ========================================================================
    // Format & Parsing Errors
    // ========================================================================
    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    // ========================================================================
    // Platform-Specific Errors
    // ========================================================================
    /// Feature not enabled.
    #[error("Feature not enabled: {0}")]
    FeatureNotEnabled(String),

    /// Event loop error (winit).
    #[cfg(feature = "winit")]
    #[error("Event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DioramaError>;
