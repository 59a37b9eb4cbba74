pub mod config;
pub mod http;
mod post;
mod repository;
mod scenario;
pub mod telemetry;

pub use post::{NewPost, Post, PostId, PostPatch, ValidationError};
pub use repository::{InMemoryPostRepository, PostRepository, RepositoryError};
pub use scenario::{ForcedFailure, Interception, ScenarioQuery, DEFAULT_STALL};

pub const SERVICE_TITLE: &str = "Flutter Template Mock API";
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");
