/// ListingMetadata value object describing one run of the lister
#[derive(Debug, Clone)]
pub struct ListingMetadata {
    timestamp: String,
    tool_name: String,
    tool_version: String,
    listing_id: String,
}

impl ListingMetadata {
    pub fn new(
        timestamp: String,
        tool_name: String,
        tool_version: String,
        listing_id: String,
    ) -> Self {
        Self {
            timestamp,
            tool_name,
            tool_version,
            listing_id,
        }
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    pub fn listing_id(&self) -> &str {
        &self.listing_id
    }
}
