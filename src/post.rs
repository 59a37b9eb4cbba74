//! Post records and the payloads that create or change them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier assigned to a post by the repository. Never reused.
pub type PostId = u64;

/// A stored post, serialized on the wire as `{id, title, body, author}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub body: String,
    pub author: String,
}

/// Payload of a create request. All three fields are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub body: String,
    pub author: String,
}

/// Payload of an update request.
///
/// `None` means the field was not sent and keeps its stored value. A field
/// sent as `""` is `Some("")` and is rejected by [`PostPatch::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
}

impl NewPost {
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            author: author.into(),
        }
    }

    /// Every field must be non-empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        ValidationError::collect([
            ("title", self.title.is_empty()),
            ("body", self.body.is_empty()),
            ("author", self.author.is_empty()),
        ])
    }

    pub(crate) fn into_post(self, id: PostId) -> Post {
        Post {
            id,
            title: self.title,
            body: self.body,
            author: self.author,
        }
    }
}

impl PostPatch {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Supplied fields must be non-empty; omitted fields are fine.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let empty = |field: &Option<String>| field.as_deref().is_some_and(str::is_empty);
        ValidationError::collect([
            ("title", empty(&self.title)),
            ("body", empty(&self.body)),
            ("author", empty(&self.author)),
        ])
    }

    /// Overwrite the supplied fields of `post`. The id is left alone.
    pub(crate) fn apply_to(self, post: &mut Post) {
        if let Some(title) = self.title {
            post.title = title;
        }
        if let Some(body) = self.body {
            post.body = body;
        }
        if let Some(author) = self.author {
            post.author = author;
        }
    }
}

/// A payload carried one or more empty fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    fields: Vec<&'static str>,
}

impl ValidationError {
    fn collect<const N: usize>(checks: [(&'static str, bool); N]) -> Result<(), Self> {
        let fields: Vec<&'static str> = checks
            .into_iter()
            .filter(|(_, failed)| *failed)
            .map(|(name, _)| name)
            .collect();
        if fields.is_empty() {
            Ok(())
        } else {
            Err(Self { fields })
        }
    }

    /// Names of the offending fields, in declaration order.
    pub fn fields(&self) -> &[&'static str] {
        &self.fields
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} must not be empty", self.fields.join(", "))
    }
}

impl std::error::Error for ValidationError {}
