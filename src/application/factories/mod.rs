mod formatter_factory;
mod presenter_factory;
mod repository_factory;

pub use formatter_factory::FormatterFactory;
pub use presenter_factory::{PresenterFactory, PresenterType};
pub use repository_factory::RepositoryFactory;
