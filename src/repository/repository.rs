use crate::post::{NewPost, Post, PostId, PostPatch};

use super::error::RepositoryError;

/// Storage for posts.
///
/// Implementations own identifier allocation: ids are handed out in strictly
/// increasing order and never reassigned, even after a delete. Each call is
/// atomic with respect to the others.
pub trait PostRepository: Send + Sync {
    /// All posts in insertion order.
    fn list(&self) -> Result<Vec<Post>, RepositoryError>;

    fn get(&self, id: PostId) -> Result<Post, RepositoryError>;

    /// Store a new post under the next id. The payload is not validated here.
    fn create(&self, new_post: NewPost) -> Result<Post, RepositoryError>;

    /// Overwrite the supplied fields and return the post's full state.
    fn update(&self, id: PostId, patch: PostPatch) -> Result<Post, RepositoryError>;

    fn delete(&self, id: PostId) -> Result<(), RepositoryError>;
}
