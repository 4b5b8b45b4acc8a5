//! Design modules: one renderer per theme component.

pub mod blog_posts;
