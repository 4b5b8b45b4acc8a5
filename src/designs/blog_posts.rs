//! Blog post listing module.
//!
//! Renders a collection of post summaries in a grid or side-by-side
//! layout. Sub-elements (image, title, author, tags, publish date,
//! description, button) are included per the configured display list,
//! and the configured styling is emitted as a class-scoped style block
//! alongside the markup.

use crate::models::module::{DisplayItem, Layout, ModuleConfig, ModuleContext};
use crate::models::post::BlogPost;
use crate::models::style::{
    AuthorStyle, BackgroundImageStyle, ButtonStyle, ImageStyle, PostStyle, StyleGroups, TagStyle,
};
use crate::render::{archive_url, excerpt, html_escape};
use crate::styles::{
    self, alignment_style, border_hover_style, border_style, font_hover_style, font_style, px,
    rgba_color, spacing_style, StyleMap,
};

const DESCRIPTION_MAX_CHARS: usize = 100;

/// Output of one render pass: the listing markup and its scoped style
/// block. The hosting CMS injects both into the page.
#[derive(Debug, Clone)]
pub struct RenderedModule {
    pub html: String,
    pub css: String,
}

impl RenderedModule {
    /// Markup with the style block inlined ahead of the section, for
    /// hosts without a separate style registry.
    pub fn into_fragment(self) -> String {
        format!("<style>\n{}</style>\n{}", self.css, self.html)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ImageSide {
    Left,
    Right,
}

/// Render the listing for the supplied posts. Pure: identical inputs
/// produce identical output, and an empty collection still yields the
/// section and style block.
pub fn render_list(config: &ModuleConfig, posts: &[BlogPost]) -> RenderedModule {
    let show_post_image = config.shows(DisplayItem::Image);
    let has_alternating_image =
        show_post_image && config.layout == Layout::SideBySide && config.alternate_image;
    let use_image_as_background =
        show_post_image && config.layout != Layout::SideBySide && config.full_image;

    if config.layout == Layout::Unknown {
        log::warn!("unrecognized listing layout; rendering without layout styling");
    }
    log::debug!(
        "rendering blog post listing: {} posts, layout {:?}",
        posts.len(),
        config.layout
    );

    let scope = styles::scope_class(&config.group_style);
    let css = scoped_style_block(&scope, &config.group_style);

    let mut section_class = format!("{} blog-post-listing", scope);
    if config.layout == Layout::Grid {
        section_class.push_str(" blog-post-grid");
    }

    let mut html = format!("<section class=\"{}\">", section_class);
    for (loop_index, post) in posts.iter().enumerate() {
        html.push_str(&render_post(
            config,
            post,
            loop_index,
            show_post_image,
            has_alternating_image,
            use_image_as_background,
        ));
    }
    html.push_str("</section>");

    RenderedModule { html, css }
}

/// Render from a single host-supplied context object.
pub fn render_module(context: &ModuleContext) -> RenderedModule {
    render_list(&context.config, &context.blog_posts)
}

// ── Layout selection ──

fn image_side(has_alternating_image: bool, loop_index: usize) -> ImageSide {
    if !has_alternating_image {
        return ImageSide::Left;
    }
    if loop_index % 2 == 0 {
        ImageSide::Left
    } else {
        ImageSide::Right
    }
}

fn layout_styles(layout: Layout, style: &StyleGroups) -> StyleMap {
    match layout {
        Layout::Grid => grid_styles(&style.group_post),
        Layout::SideBySide => side_by_side_styles(&style.group_image),
        Layout::Unknown => StyleMap::new(),
    }
}

/// Wrapper overrides forced by the side-by-side layout: the post becomes
/// a row flex container and the content wrapper renders after the image.
/// Other layouts leave both unset.
fn wrapper_styles(layout: Layout) -> (StyleMap, StyleMap) {
    let mut post_wrapper = StyleMap::new();
    let mut content_wrapper = StyleMap::new();
    if layout == Layout::SideBySide {
        post_wrapper.set("display", "flex");
        post_wrapper.set("flex-direction", "row");
        content_wrapper.set("order", "1");
    }
    (post_wrapper, content_wrapper)
}

/// Post width custom properties for 2/3/4 grid columns, each subtracting
/// the column's share of the configured gap.
fn grid_styles(post_style: &PostStyle) -> StyleMap {
    let mut map = StyleMap::new();
    match post_style.group_spacing.space_between_posts {
        Some(gap) => {
            map.set("--grid-post-width", format!("calc(50% - {}px)", gap / 2.0));
            map.set("--grid-space-between-posts", px(gap));
            map.set(
                "--grid-post-width-three-column",
                format!("calc(33.3% - {}px)", gap * 2.0 / 3.0),
            );
            map.set(
                "--grid-post-width-four-column",
                format!("calc(25% - {}px)", gap * 3.0 / 4.0),
            );
        }
        None => {
            map.set("--grid-post-width", "calc(50% - 0.5rem)");
            map.set("--grid-space-between-posts", "1rem");
            map.set("--grid-post-width-three-column", "calc(33.3% - 0.66rem)");
            map.set("--grid-post-width-four-column", "calc(25% - 0.75rem)");
        }
    }
    map
}

/// Complementary image/content widths for the side-by-side layout. The
/// two always sum to 100% minus the image-to-content gap; unconfigured
/// width falls back to a 40/60 split, unconfigured gap to 0.5rem.
fn side_by_side_styles(image_style: &ImageStyle) -> StyleMap {
    let width = image_style.group_size.width;
    let gap = image_style.group_spacing.between_image_and_content;

    let mut map = StyleMap::new();
    match (width, gap) {
        (Some(width), Some(gap)) => {
            map.set(
                "--image-wrapper-width",
                format!("calc({}% - {}px)", width, gap / 2.0),
            );
            map.set(
                "--content-wrapper-width",
                format!("calc({}% - {}px)", 100.0 - width, gap / 2.0),
            );
        }
        (Some(width), None) => {
            map.set("--image-wrapper-width", format!("calc({}% - 0.5rem)", width));
            map.set(
                "--content-wrapper-width",
                format!("calc({}% - 0.5rem)", 100.0 - width),
            );
        }
        (None, Some(gap)) => {
            map.set("--image-wrapper-width", format!("calc(40% - {}px)", gap / 2.0));
            map.set(
                "--content-wrapper-width",
                format!("calc(60% - {}px)", gap / 2.0),
            );
        }
        (None, None) => {
            map.set("--image-wrapper-width", "calc(40% - 0.5rem)");
            map.set("--content-wrapper-width", "calc(60% - 0.5rem)");
        }
    }
    map
}

fn post_image_styles(image_style: &ImageStyle, side: ImageSide) -> StyleMap {
    let margin = match image_style.group_spacing.between_image_and_content {
        Some(gap) => px(gap),
        None => "1rem".to_string(),
    };

    let mut map = spacing_style(&image_style.group_spacing.spacing);
    match side {
        ImageSide::Left => {
            map.set("--margin-right", margin);
            map.set("--order", "1");
        }
        ImageSide::Right => {
            map.set("--margin-left", margin);
            map.set("--order", "2");
        }
    }
    if let Some(ratio) = &image_style.group_size.aspect_ratio {
        map.set("--aspect-ratio", ratio.clone());
    }
    if let Some(radius) = image_style.group_corner.radius {
        if radius >= 0.0 {
            map.set("--border-radius", px(radius));
        }
    }
    map
}

/// Background layer plus color overlay for the image-as-background
/// treatment. The overlay defaults to half-transparent white when no
/// color is configured.
fn image_overlay_styles(
    background_style: &BackgroundImageStyle,
    featured_image: &str,
) -> (StyleMap, StyleMap) {
    let mut background = StyleMap::new();
    background.set("background-image", format!("url({})", featured_image));
    background.set("background-size", "cover");
    background.set("background-repeat", "no-repeat");
    background.set("display", "flex");
    background.set("height", "100%");

    let mut overlay = StyleMap::new();
    overlay.set(
        "background-color",
        rgba_color(&background_style.color)
            .unwrap_or_else(|| "rgba(255, 255, 255, 0.5)".to_string()),
    );

    (background, overlay)
}

// ── Element style derivation ──

fn post_styles(post_style: &PostStyle) -> StyleMap {
    let mut map = StyleMap::new();
    map.set_opt(
        "background-color",
        rgba_color(&post_style.group_background.color),
    );
    if let Some(radius) = post_style.group_corner.radius {
        map.set("border-radius", px(radius));
    }
    map.merge(border_style(&post_style.group_border.border));
    map.merge(spacing_style(&post_style.group_spacing.spacing));
    map
}

fn title_styles(style: &StyleGroups) -> StyleMap {
    let title = &style.group_title;
    let mut map = font_style(&title.group_text.font);
    map.merge(font_hover_style(&title.group_hover.group_text.font));
    map.merge(spacing_style(&title.group_spacing.spacing));
    map
}

fn author_styles(author: &AuthorStyle) -> StyleMap {
    let mut map = font_style(&author.group_text.font);
    map.merge(font_hover_style(&author.group_hover.group_text.font));
    map.merge(spacing_style(&author.group_spacing.spacing));
    map
}

fn tag_styles(tags: &TagStyle) -> StyleMap {
    let mut map = StyleMap::new();
    map.set_opt("background-color", rgba_color(&tags.group_background.color));
    if let Some(radius) = tags.group_corner.radius {
        map.set("border-radius", px(radius));
    }
    map.set_opt(
        "hover-background-color",
        rgba_color(&tags.group_hover.group_background.color),
    );
    map.merge(font_style(&tags.group_text.font));
    map.merge(font_hover_style(&tags.group_hover.group_text.font));
    map.merge(border_style(&tags.group_border.border));
    map.merge(border_hover_style(&tags.group_hover.group_border.border));
    map.merge(spacing_style(&tags.group_spacing.spacing));
    map
}

fn publish_date_styles(style: &StyleGroups) -> StyleMap {
    let date = &style.group_publish_date;
    let mut map = font_style(&date.group_text.font);
    map.merge(spacing_style(&date.group_spacing.spacing));
    map
}

fn description_styles(style: &StyleGroups) -> StyleMap {
    let description = &style.group_description;
    let mut map = font_style(&description.group_text.font);
    map.merge(spacing_style(&description.group_spacing.spacing));
    map
}

fn button_styles(button: &ButtonStyle) -> StyleMap {
    let mut map = StyleMap::new();
    if let Some(radius) = button.group_corner.radius {
        if radius >= 0.0 {
            map.set("border-radius", px(radius));
        }
    }
    map.set_opt(
        "background-color",
        rgba_color(&button.group_background.color),
    );
    map.set_opt(
        "hover-background-color",
        rgba_color(&button.group_hover.group_background.color),
    );
    map.merge(font_style(&button.group_text.font));
    map.merge(font_hover_style(&button.group_hover.group_text.font));
    map.merge(border_style(&button.group_border.border));
    map.merge(border_hover_style(&button.group_hover.group_border.border));
    map.merge(spacing_style(&button.group_spacing.spacing));
    map
}

/// One scoped rule per styled element class, hover rules included.
fn scoped_style_block(scope: &str, style: &StyleGroups) -> String {
    let mut css = String::new();
    css.push_str(&styles::scoped_rule(scope, "blog-post", &post_styles(&style.group_post)));
    css.push_str(&styles::scoped_rule(
        scope,
        "blog-post-content",
        &spacing_style(&style.group_content.spacing),
    ));
    css.push_str(&styles::scoped_rule(scope, "blog-post-title", &title_styles(style)));
    css.push_str(&styles::scoped_rule(
        scope,
        "blog-post-author",
        &author_styles(&style.group_author),
    ));
    css.push_str(&styles::scoped_rule(scope, "blog-post-tag", &tag_styles(&style.group_tags)));
    css.push_str(&styles::scoped_rule(
        scope,
        "blog-post-publish-date",
        &publish_date_styles(style),
    ));
    css.push_str(&styles::scoped_rule(
        scope,
        "blog-post-description",
        &description_styles(style),
    ));
    css.push_str(&styles::scoped_rule(
        scope,
        "blog-post-button",
        &button_styles(&style.group_button),
    ));
    css
}

// ── Markup composition ──

fn style_attr(map: &StyleMap) -> String {
    if map.is_empty() {
        String::new()
    } else {
        format!(" style=\"{}\"", html_escape(&map.inline()))
    }
}

fn render_post(
    config: &ModuleConfig,
    post: &BlogPost,
    loop_index: usize,
    show_post_image: bool,
    has_alternating_image: bool,
    use_image_as_background: bool,
) -> String {
    let style = &config.group_style;
    let (post_wrapper_styles, content_wrapper_styles) = wrapper_styles(config.layout);
    let layout_style = layout_styles(config.layout, style);

    let post_class = if config.layout == Layout::Grid {
        format!("blog-post blog-post-column-{}", config.columns)
    } else {
        "blog-post".to_string()
    };

    if use_image_as_background {
        let featured_image = post.featured_image.as_deref().unwrap_or("");
        let (background_styles, overlay_styles) =
            image_overlay_styles(&style.group_background_image, featured_image);

        let mut article_styles = background_styles;
        article_styles.merge(post_wrapper_styles);
        article_styles.merge(layout_style);

        let mut inner_styles = spacing_style(&style.group_background_image.spacing);
        inner_styles.merge(overlay_styles);

        return format!(
            "<article class=\"{class}\"{article_style}><div{inner_style}>{content}</div></article>",
            class = post_class,
            article_style = style_attr(&article_styles),
            inner_style = style_attr(&inner_styles),
            content = render_content(config, post, &content_wrapper_styles),
        );
    }

    let mut article_styles = post_wrapper_styles;
    article_styles.merge(layout_style);

    let image_html = if show_post_image && post.featured_image.is_some() {
        render_image(config, post, loop_index, has_alternating_image)
    } else {
        String::new()
    };

    format!(
        "<article class=\"{class}\"{article_style}>{image}{content}</article>",
        class = post_class,
        article_style = style_attr(&article_styles),
        image = image_html,
        content = render_content(config, post, &content_wrapper_styles),
    )
}

fn render_content(
    config: &ModuleConfig,
    post: &BlogPost,
    content_wrapper_styles: &StyleMap,
) -> String {
    let base_url = post.listing_base_url();

    let show_title = config.shows(DisplayItem::Title);
    let show_author_name = config.shows(DisplayItem::AuthorName);
    let show_author_image = config.shows(DisplayItem::AuthorImage);
    let show_tags = config.shows(DisplayItem::Tags);
    let show_publish_date = config.shows(DisplayItem::PublishDate);
    let show_description = config.shows(DisplayItem::Description);
    let show_button = config.shows(DisplayItem::Button);

    let content_class = if config.layout == Layout::SideBySide {
        "blog-post-content blog-post-content-side-by-side"
    } else {
        "blog-post-content"
    };

    let mut html = format!(
        "<div class=\"{}\"{}>",
        content_class,
        style_attr(content_wrapper_styles)
    );
    if show_title {
        html.push_str(&render_title(config, post));
    }
    if show_author_name || show_author_image {
        html.push_str(&render_author(
            config,
            post,
            show_author_name,
            show_author_image,
            base_url,
        ));
    }
    if show_tags {
        html.push_str(&render_tags(config, post, base_url));
    }
    if show_publish_date {
        html.push_str(&render_publish_date(post));
    }
    if show_description {
        html.push_str(&render_description(post));
    }
    if show_button {
        html.push_str(&render_button(config, post));
    }
    html.push_str("</div>");
    html
}

fn render_image(
    config: &ModuleConfig,
    post: &BlogPost,
    loop_index: usize,
    has_alternating_image: bool,
) -> String {
    let featured_image = post.featured_image.as_deref().unwrap_or("");
    let aria_label = format!(
        "{} {}",
        config.group_default_text.featured_image_text, post.featured_image_alt_text
    );
    let side = image_side(has_alternating_image, loop_index);
    let image_styles = post_image_styles(&config.group_style.group_image, side);

    let wrapper_class = if config.layout == Layout::SideBySide {
        "blog-post-image-wrapper blog-post-image-wrapper-side-by-side"
    } else {
        "blog-post-image-wrapper"
    };

    format!(
        "<a class=\"{class}\"{style} href=\"{href}\" aria-label=\"{label}\">\
         <img class=\"blog-post-image\" src=\"{src}\" alt=\"{alt}\"></a>",
        class = wrapper_class,
        style = style_attr(&image_styles),
        href = html_escape(&post.absolute_url),
        label = html_escape(&aria_label),
        src = html_escape(featured_image),
        alt = html_escape(&post.featured_image_alt_text),
    )
}

fn render_title(config: &ModuleConfig, post: &BlogPost) -> String {
    let level = config.group_style.group_title.heading_level;
    format!(
        "<h{level} class=\"blog-post-title\">\
         <a class=\"blog-post-title\" href=\"{href}\">{name}</a></h{level}>",
        level = level,
        href = html_escape(&post.absolute_url),
        name = html_escape(&post.name),
    )
}

fn render_author(
    config: &ModuleConfig,
    post: &BlogPost,
    show_name: bool,
    show_image: bool,
    base_url: &str,
) -> String {
    let author = &post.blog_author;
    let image_group = &config.group_style.group_author.group_image;

    let mut html = String::from("<div class=\"blog-post-author\">");

    if show_image {
        if let Some(avatar) = &author.avatar {
            let mut wrapper_styles = StyleMap::new();
            wrapper_styles.set_opt("width", image_group.size.map(px));

            let mut avatar_styles = StyleMap::new();
            avatar_styles.set_opt("border-radius", image_group.group_corner.radius.map(px));

            html.push_str(&format!(
                "<div class=\"blog-post-author-image-wrapper\"{wrapper_style}>\
                 <img class=\"blog-post-author-image\" src=\"{src}\" loading=\"lazy\" \
                 alt=\"{alt}\"{avatar_style}></div>",
                wrapper_style = style_attr(&wrapper_styles),
                src = html_escape(avatar),
                alt = html_escape(&config.group_default_text.author_alt_text),
                avatar_style = style_attr(&avatar_styles),
            ));
        }
    }

    if show_name {
        html.push_str(&format!(
            "<a class=\"blog-post-author\" href=\"{href}\">{name}</a>",
            href = html_escape(&archive_url(base_url, "author", &author.slug)),
            name = html_escape(&author.display_name),
        ));
    }

    html.push_str("</div>");
    html
}

fn render_tags(config: &ModuleConfig, post: &BlogPost, base_url: &str) -> String {
    let mut tag_variables = StyleMap::new();
    tag_variables.set_opt(
        "--spacing-between-tags",
        config
            .group_style
            .group_tags
            .group_spacing
            .space_between_tags
            .map(px),
    );
    let tag_style_attr = style_attr(&tag_variables);

    let mut html = String::from("<div class=\"blog-post-tags\">");
    for tag in &post.tag_list {
        html.push_str(&format!(
            "<a class=\"blog-post-tag\"{style} href=\"{href}\">{name}</a>",
            style = tag_style_attr,
            href = html_escape(&archive_url(base_url, "tag", &tag.slug)),
            name = html_escape(&tag.name),
        ));
    }
    html.push_str("</div>");
    html
}

fn render_publish_date(post: &BlogPost) -> String {
    format!(
        "<time class=\"blog-post-publish-date\" datetime=\"{datetime}\">{display}</time>",
        datetime = post.publish_date.format("%Y-%m-%d"),
        display = html_escape(&post.publish_date_localized),
    )
}

fn render_description(post: &BlogPost) -> String {
    format!(
        "<p class=\"blog-post-description\">{}</p>",
        html_escape(&excerpt(&post.post_list_content, DESCRIPTION_MAX_CHARS))
    )
}

fn render_button(config: &ModuleConfig, post: &BlogPost) -> String {
    let aria_label = format!(
        "{} {}",
        config.group_default_text.read_full_post_text, post.name
    );
    let alignment = alignment_style(&config.group_style.group_button.group_alignment);

    format!(
        "<div class=\"blog-post-button-wrapper\"{align}>\
         <a class=\"blog-post-button button\" href=\"{href}\" aria-label=\"{label}\">{text}</a></div>",
        align = style_attr(&alignment),
        href = html_escape(&post.absolute_url),
        label = html_escape(&aria_label),
        text = html_escape(&config.button_text),
    )
}

/// Structural stylesheet shared by every instance. Configured styling is
/// layered on top through the scoped block each render pass emits.
pub fn css() -> &'static str {
    r#"
/* Blog post listing */
.blog-post-listing {
    display: flex;
    flex-direction: column;
    width: 100%;
}
.blog-post-grid {
    flex-direction: row;
    flex-wrap: wrap;
}
.blog-post {
    display: flex;
    flex-direction: column;
    box-sizing: border-box;
    min-width: 0;
}
.blog-post-grid .blog-post {
    margin-bottom: var(--grid-space-between-posts, 1rem);
}
.blog-post-column-2 {
    width: var(--grid-post-width, calc(50% - 0.5rem));
}
.blog-post-column-3 {
    width: var(--grid-post-width-three-column, calc(33.3% - 0.66rem));
}
.blog-post-column-4 {
    width: var(--grid-post-width-four-column, calc(25% - 0.75rem));
}

/* Featured image */
.blog-post-image-wrapper {
    display: block;
    order: var(--order, 1);
    margin-right: var(--margin-right, 0);
    margin-left: var(--margin-left, 0);
    border-radius: var(--border-radius, 0);
    overflow: hidden;
}
.blog-post-image {
    display: block;
    width: 100%;
    height: auto;
    aspect-ratio: var(--aspect-ratio, auto);
    object-fit: cover;
}
.blog-post-image-wrapper-side-by-side {
    width: var(--image-wrapper-width, calc(40% - 0.5rem));
    flex-shrink: 0;
}

/* Post content */
.blog-post-content {
    display: flex;
    flex-direction: column;
    min-width: 0;
}
.blog-post-content-side-by-side {
    width: var(--content-wrapper-width, calc(60% - 0.5rem));
}
.blog-post-title a {
    text-decoration: none;
    color: inherit;
}
.blog-post-author {
    display: flex;
    align-items: center;
    gap: 8px;
    text-decoration: none;
}
.blog-post-author-image-wrapper {
    flex-shrink: 0;
}
.blog-post-author-image {
    display: block;
    width: 100%;
    height: auto;
}
.blog-post-tags {
    display: flex;
    flex-wrap: wrap;
}
.blog-post-tag {
    margin-right: var(--spacing-between-tags, 0.5rem);
    text-decoration: none;
}
.blog-post-button {
    display: inline-block;
    text-decoration: none;
    cursor: pointer;
}

@media (max-width: 768px) {
    .blog-post-grid {
        flex-direction: column;
    }
    .blog-post-column-2,
    .blog-post-column-3,
    .blog-post-column-4 {
        width: 100%;
    }
}
"#
}
