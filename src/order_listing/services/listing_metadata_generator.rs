use crate::order_listing::domain::ListingMetadata;
use chrono::Utc;
use uuid::Uuid;

/// Generates the metadata stamped on every rendered order listing
pub struct ListingMetadataGenerator;

impl ListingMetadataGenerator {
    /// Current RFC 3339 timestamp plus a fresh `urn:uuid:` listing id
    pub fn generate(tool_name: &str, tool_version: &str) -> ListingMetadata {
        let timestamp = Utc::now().to_rfc3339();
        let listing_id = format!("urn:uuid:{}", Uuid::new_v4());

        ListingMetadata::new(
            timestamp,
            tool_name.to_string(),
            tool_version.to_string(),
            listing_id,
        )
    }

    /// Same as [`generate`](Self::generate) with this crate's name and version
    pub fn generate_default() -> ListingMetadata {
        Self::generate(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }
}
