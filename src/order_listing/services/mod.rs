/// Domain services - stateless helpers with no infrastructure access
mod listing_metadata_generator;

pub use listing_metadata_generator::ListingMetadataGenerator;
