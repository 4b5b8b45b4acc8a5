use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A blog post record as supplied by the hosting CMS for one render pass.
/// Immutable for the duration of the pass.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: i64,
    /// Display title.
    pub name: String,
    pub absolute_url: String,
    #[serde(default)]
    pub featured_image: Option<String>,
    #[serde(default)]
    pub featured_image_alt_text: String,
    #[serde(default)]
    pub blog_author: BlogAuthor,
    /// Ordered; duplicate slugs are tolerated.
    #[serde(default)]
    pub tag_list: Vec<Tag>,
    pub publish_date: NaiveDateTime,
    /// Localized by the data provider; rendered verbatim.
    #[serde(default)]
    pub publish_date_localized: String,
    /// Rendered content body, excerpted for the listing description.
    #[serde(default)]
    pub post_list_content: String,
    /// Base URL source for author and tag archive links.
    #[serde(default)]
    pub parent_blog: Option<ParentBlog>,
}

impl BlogPost {
    /// Base URL for author/tag archive links, empty when the post has no
    /// parent blog reference.
    pub fn listing_base_url(&self) -> &str {
        self.parent_blog
            .as_ref()
            .map(|blog| blog.absolute_url.as_str())
            .unwrap_or("")
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct BlogAuthor {
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub slug: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Tag {
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ParentBlog {
    pub absolute_url: String,
}
