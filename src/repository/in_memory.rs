use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::post::{NewPost, Post, PostId, PostPatch};

use super::{PostRepository, RepositoryError};

/// Map and id counter, guarded together so a create can never hand out an
/// id that another create is about to store.
struct PostTable {
    // Ids only grow, so key order is insertion order.
    posts: BTreeMap<PostId, Post>,
    next_id: PostId,
}

/// In-memory post repository backed by a `BTreeMap` behind one `RwLock`.
///
/// Clone-friendly via Arc: clones share the same table.
#[derive(Clone)]
pub struct InMemoryPostRepository {
    table: Arc<RwLock<PostTable>>,
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryPostRepository {
    /// Create an empty repository whose first id is 1.
    pub fn new() -> Self {
        Self::with_posts(Vec::new())
    }

    /// Create a repository holding `posts`, with the counter placed above the
    /// highest id among them.
    pub fn with_posts(posts: impl IntoIterator<Item = Post>) -> Self {
        let posts: BTreeMap<PostId, Post> = posts.into_iter().map(|p| (p.id, p)).collect();
        let next_id = posts.keys().next_back().map_or(1, |max| max + 1);
        Self {
            table: Arc::new(RwLock::new(PostTable { posts, next_id })),
        }
    }

    /// The two sample posts every fresh server starts with (ids 1 and 2).
    pub fn seeded() -> Self {
        Self::with_posts(sample_posts())
    }
}

fn sample_posts() -> Vec<Post> {
    vec![
        Post {
            id: 1,
            title: "Getting started with the mock API".to_string(),
            body: "This record comes from the in-memory FastAPI server. \
                   You can experiment with GET/POST/PUT/DELETE calls from the Flutter demo."
                .to_string(),
            author: "Mock Server".to_string(),
        },
        Post {
            id: 2,
            title: "Second sample post".to_string(),
            body: "Use PUT to update this entry or DELETE to remove it.".to_string(),
            author: "Mock Server".to_string(),
        },
    ]
}

impl PostRepository for InMemoryPostRepository {
    fn list(&self) -> Result<Vec<Post>, RepositoryError> {
        let table = self
            .table
            .read()
            .map_err(|_| RepositoryError::LockPoisoned("list"))?;
        Ok(table.posts.values().cloned().collect())
    }

    fn get(&self, id: PostId) -> Result<Post, RepositoryError> {
        let table = self
            .table
            .read()
            .map_err(|_| RepositoryError::LockPoisoned("get"))?;
        table
            .posts
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound(id))
    }

    fn create(&self, new_post: NewPost) -> Result<Post, RepositoryError> {
        let mut table = self
            .table
            .write()
            .map_err(|_| RepositoryError::LockPoisoned("create"))?;
        let id = table.next_id;
        table.next_id += 1;
        let post = new_post.into_post(id);
        table.posts.insert(id, post.clone());
        Ok(post)
    }

    fn update(&self, id: PostId, patch: PostPatch) -> Result<Post, RepositoryError> {
        let mut table = self
            .table
            .write()
            .map_err(|_| RepositoryError::LockPoisoned("update"))?;
        let post = table
            .posts
            .get_mut(&id)
            .ok_or(RepositoryError::NotFound(id))?;
        patch.apply_to(post);
        Ok(post.clone())
    }

    fn delete(&self, id: PostId) -> Result<(), RepositoryError> {
        let mut table = self
            .table
            .write()
            .map_err(|_| RepositoryError::LockPoisoned("delete"))?;
        table
            .posts
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound(id))
    }
}
