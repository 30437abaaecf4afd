// Common test utilities and fixtures

pub mod fixtures;

// Re-export commonly used items
// Note: These may appear unused in some test binaries
#[allow(unused_imports)]
pub use fixtures::{write_pdf, TestDocs, Utf8TestData};
#[allow(unused_imports)]
pub use helpers::{create_test_services, create_text_only_services, reconstruct};
