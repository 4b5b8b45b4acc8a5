use serde::{Deserialize, Deserializer, Serialize};

use crate::models::post::BlogPost;
use crate::models::style::StyleGroups;

/// One renderable sub-element of a post entry. The configured display
/// list decides which of these appear for every post.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum DisplayItem {
    Title,
    AuthorName,
    AuthorImage,
    Tags,
    PublishDate,
    Description,
    Button,
    Image,
}

/// Listing layout mode. Unrecognized values deserialize to [`Layout::Unknown`],
/// which applies no extra layout styling instead of failing the render.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum Layout {
    #[default]
    Grid,
    SideBySide,
    Unknown,
}

impl<'de> Deserialize<'de> for Layout {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.as_str() {
            "grid" => Layout::Grid,
            "sideBySide" => Layout::SideBySide,
            _ => Layout::Unknown,
        })
    }
}

/// Default accessibility strings, prefixed to per-post data in aria labels.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct DefaultText {
    pub featured_image_text: String,
    pub author_alt_text: String,
    pub read_full_post_text: String,
}

impl Default for DefaultText {
    fn default() -> Self {
        DefaultText {
            featured_image_text: "Featured image:".to_string(),
            author_alt_text: "Author avatar".to_string(),
            read_full_post_text: "Read full post:".to_string(),
        }
    }
}

/// Full module configuration as supplied by the hosting CMS.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct ModuleConfig {
    pub button_text: String,
    pub group_default_text: DefaultText,
    pub display_for_each_list_item: Vec<DisplayItem>,
    pub layout: Layout,
    /// Grid column count. Not validated; an out-of-range value selects a
    /// column class with no matching rule.
    pub columns: u8,
    /// Alternate the image side per post, side-by-side layout only.
    pub alternate_image: bool,
    /// Use the featured image as the post background, grid layout only.
    pub full_image: bool,
    pub group_style: StyleGroups,
}

impl Default for ModuleConfig {
    fn default() -> Self {
        ModuleConfig {
            button_text: "Read more".to_string(),
            group_default_text: DefaultText::default(),
            display_for_each_list_item: vec![
                DisplayItem::Image,
                DisplayItem::Title,
                DisplayItem::AuthorName,
                DisplayItem::Tags,
                DisplayItem::PublishDate,
                DisplayItem::Description,
                DisplayItem::Button,
            ],
            layout: Layout::Grid,
            columns: 3,
            alternate_image: false,
            full_image: false,
            group_style: StyleGroups::default(),
        }
    }
}

impl ModuleConfig {
    pub fn shows(&self, item: DisplayItem) -> bool {
        self.display_for_each_list_item.contains(&item)
    }
}

/// Complete render input as the host supplies it: the module
/// configuration plus the post records, one object.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ModuleContext {
    #[serde(flatten)]
    pub config: ModuleConfig,
    #[serde(default)]
    pub blog_posts: Vec<BlogPost>,
}

/// Static descriptor presented by the hosting CMS in its authoring UI.
/// Pure data, no behavior.
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ModuleMeta {
    pub label: &'static str,
    pub host_template_types: &'static [&'static str],
    pub icon: &'static str,
    pub categories: &'static [&'static str],
}

/// Module identity registered with the hosting CMS.
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ModuleIdentity {
    pub module_name: &'static str,
    pub version: u32,
}

pub fn meta() -> ModuleMeta {
    ModuleMeta {
        label: "Blog posts",
        host_template_types: &["BLOG_LISTING"],
        icon: "blog.svg",
        categories: &["blog"],
    }
}

pub fn identity() -> ModuleIdentity {
    ModuleIdentity {
        module_name: "blog_posts",
        version: 0,
    }
}
