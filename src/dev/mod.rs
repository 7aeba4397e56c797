/// Development utilities module
///
/// This module contains utilities for development and debugging:
/// a mock data client and screen capture.
pub mod mock_client;

#[cfg(feature = "development")]
pub mod screenshot;
