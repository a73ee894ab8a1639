pub mod config;
pub mod section;

pub use config::{SegmenterConfig, SegmenterConfigBuilder};
pub use section::{SectionSpec, default_specs, segment, segment_with_config};
// Re-export domain types from core (canonical definitions live there)
pub use vitae_core::{NOT_FOUND, SectionContent, SectionKind, SectionMap};
