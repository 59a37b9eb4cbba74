mod error;
mod in_memory;
mod repository;

pub use error::RepositoryError;
pub use in_memory::InMemoryPostRepository;
pub use repository::PostRepository;
