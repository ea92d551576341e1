// Common test utilities and fixtures


// Re-export commonly used items
// Note: These may appear unused in some test binaries
#[allow(unused_imports)]
pub use fixtures::{catalog, ids, write_records, Catalog};
