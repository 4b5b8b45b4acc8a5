//! Blog post listing theme module.
//!
//! Renders a collection of blog post summaries for a hosting CMS:
//! configurable grid or side-by-side layout, per-post field visibility,
//! and style options translated into a class-scoped style block plus
//! inline styles. Rendering is a pure function of the supplied posts and
//! configuration; data loading and style injection belong to the host.

pub mod designs;
pub mod models;
pub mod render;
pub mod styles;


pub use designs::blog_posts::{css, render_list, render_module, RenderedModule};
pub use models::module::{
    identity, meta, DisplayItem, Layout, ModuleConfig, ModuleContext, ModuleMeta,
};
pub use models::post::{BlogAuthor, BlogPost, ParentBlog, Tag};
