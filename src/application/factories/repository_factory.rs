use crate::adapters::outbound::filesystem::JsonFileOrderRepository;
use crate::adapters::outbound::network::HttpOrderRepository;
use crate::application::dto::RepositorySource;
use crate::ports::outbound::OrderRepository;
use crate::shared::Result;

/// Factory for creating the order repository adapter behind a source
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Creates the repository for `source`
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built or the URL is
    /// not an http(s) URL. File sources are only checked when read.
    pub fn create(source: &RepositorySource) -> Result<Box<dyn OrderRepository>> {
        match source {
            RepositorySource::File(path) => {
                Ok(Box::new(JsonFileOrderRepository::new(path.clone())))
            }
            RepositorySource::Http(url) => Ok(Box::new(HttpOrderRepository::new(url)?)),
        }
    }
}
