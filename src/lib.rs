pub mod collect;
pub mod index;
pub mod paths;
pub mod scan;
pub mod segment;

// Re-export commonly used types
pub use index::FrequencyIndex;
pub use scan::{build_digest, DigestConfig, ScanStats};
pub use segment::segments;
