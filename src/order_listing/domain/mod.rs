pub mod listing_metadata;
pub mod order;

pub use listing_metadata::ListingMetadata;
pub use order::Order;
