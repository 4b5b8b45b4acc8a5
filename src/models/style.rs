//! Style configuration tree.
//!
//! A fixed-shape tree of per-element style groups supplied by the hosting
//! CMS. Every leaf is absent-capable: an unconfigured field is `None` and
//! contributes nothing to the derived styles.

use serde::{Deserialize, Serialize};

/// A configured color: either a hex value with an opacity percentage or
/// named r/g/b/a channels.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ColorField {
    /// Hex string, e.g. `#ff8800`.
    pub color: Option<String>,
    /// Percentage, 0–100.
    pub opacity: Option<f64>,
    pub r: Option<u8>,
    pub g: Option<u8>,
    pub b: Option<u8>,
    /// Alpha channel, 0–1.
    pub a: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct FontField {
    /// Font family name.
    pub font: Option<String>,
    pub size: Option<f64>,
    /// Unit for `size`; `px` when unspecified.
    pub size_unit: Option<String>,
    /// Hex color, passed through verbatim.
    pub color: Option<String>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub underline: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct BorderField {
    /// Width in px.
    pub width: Option<f64>,
    /// Line style, e.g. `solid`, `dashed`.
    pub style: Option<String>,
    pub color: ColorField,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct BoxEdges {
    pub top: Option<f64>,
    pub right: Option<f64>,
    pub bottom: Option<f64>,
    pub left: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SpacingField {
    pub margin: Option<BoxEdges>,
    pub padding: Option<BoxEdges>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CornerField {
    /// Radius in px. Image and button styling only apply it when `>= 0`.
    pub radius: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AlignmentField {
    /// `LEFT`, `CENTER` or `RIGHT`.
    pub horizontal_align: Option<String>,
}

// Wrapper groups shared between elements.

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct TextGroup {
    pub font: FontField,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct BackgroundGroup {
    pub color: ColorField,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct BorderGroup {
    pub border: BorderField,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SpacingGroup {
    pub spacing: SpacingField,
}

/// The full per-element style tree.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleGroups {
    pub group_post: PostStyle,
    pub group_content: ContentStyle,
    pub group_title: TitleStyle,
    pub group_author: AuthorStyle,
    pub group_tags: TagStyle,
    pub group_publish_date: PublishDateStyle,
    pub group_description: DescriptionStyle,
    pub group_button: ButtonStyle,
    pub group_image: ImageStyle,
    pub group_background_image: BackgroundImageStyle,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct PostStyle {
    pub group_background: BackgroundGroup,
    pub group_border: BorderGroup,
    pub group_corner: CornerField,
    pub group_spacing: PostSpacing,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct PostSpacing {
    pub spacing: SpacingField,
    /// Grid gap between posts, px.
    pub space_between_posts: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentStyle {
    pub spacing: SpacingField,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct TitleStyle {
    /// Heading level 1–6. Not validated; out-of-range values surface in
    /// the markup as-is.
    pub heading_level: u8,
    pub group_text: TextGroup,
    pub group_spacing: SpacingGroup,
    pub group_hover: TextHover,
}

impl Default for TitleStyle {
    fn default() -> Self {
        TitleStyle {
            heading_level: 3,
            group_text: TextGroup::default(),
            group_spacing: SpacingGroup::default(),
            group_hover: TextHover::default(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct TextHover {
    pub group_text: TextGroup,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthorStyle {
    pub group_text: TextGroup,
    pub group_spacing: SpacingGroup,
    pub group_hover: TextHover,
    pub group_image: AuthorImageGroup,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthorImageGroup {
    /// Avatar wrapper width, px.
    pub size: Option<f64>,
    pub group_corner: CornerField,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct TagStyle {
    pub group_text: TextGroup,
    pub group_background: BackgroundGroup,
    pub group_border: BorderGroup,
    pub group_corner: CornerField,
    pub group_spacing: TagSpacing,
    pub group_hover: HoverGroup,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct TagSpacing {
    pub spacing: SpacingField,
    /// Gap between adjacent tags, px.
    pub space_between_tags: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct HoverGroup {
    pub group_text: TextGroup,
    pub group_background: BackgroundGroup,
    pub group_border: BorderGroup,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct PublishDateStyle {
    pub group_text: TextGroup,
    pub group_spacing: SpacingGroup,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct DescriptionStyle {
    pub group_text: TextGroup,
    pub group_spacing: SpacingGroup,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ButtonStyle {
    pub group_text: TextGroup,
    pub group_background: BackgroundGroup,
    pub group_border: BorderGroup,
    pub group_corner: CornerField,
    pub group_spacing: SpacingGroup,
    pub group_alignment: AlignmentField,
    pub group_hover: HoverGroup,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageStyle {
    pub group_size: ImageSizeGroup,
    pub group_spacing: ImageSpacing,
    pub group_corner: CornerField,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageSizeGroup {
    /// Image width as a percentage of the post, side-by-side layout only.
    pub width: Option<f64>,
    /// CSS aspect-ratio value, e.g. `16/9`.
    pub aspect_ratio: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageSpacing {
    pub spacing: SpacingField,
    /// Gap between the image and the post content, px.
    pub between_image_and_content: Option<f64>,
}

/// Styling for the full-image-as-background treatment: the overlay color
/// sits between the background image and the post content.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct BackgroundImageStyle {
    pub color: ColorField,
    pub spacing: SpacingField,
}
