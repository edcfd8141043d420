use serde::{Deserialize, Serialize};

/// Separator used when rendering a tag list into the export column.
pub const TAG_SEPARATOR: &str = ", ";

/// A tag and the normalized keywords that trigger it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRule {
    pub tag: String,
    #[serde(default)]
    pub description: Option<String>,
    pub keywords: Vec<String>,
}

impl TagRule {
    pub fn new<I, S>(tag: impl Into<String>, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tag: tag.into(),
            description: None,
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Ordered, duplicate-free list of tags for one contact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    tags: Vec<String>,
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a tag unless it is empty or already present.
    ///
    /// Returns `true` when the tag was added.
    pub fn push(&mut self, tag: impl Into<String>) -> bool {
        let tag = tag.into();
        if tag.is_empty() || self.contains(&tag) {
            return false;
        }
        self.tags.push(tag);
        true
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|existing| existing == tag)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.tags
    }

    /// True when the set holds exactly one tag equal to `tag`.
    pub fn is_only(&self, tag: &str) -> bool {
        self.tags.len() == 1 && self.tags[0] == tag
    }

    /// Joins the tags with [`TAG_SEPARATOR`]; an empty set renders as `""`.
    pub fn render(&self) -> String {
        self.tags.join(TAG_SEPARATOR)
    }
}

impl<S: Into<String>> Extend<S> for TagSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for tag in iter {
            self.push(tag);
        }
    }
}
