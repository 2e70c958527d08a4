//! Holiday table extraction from rendered state pages.
//!
//! [`page`] drives a [`RenderContext`](crate::renderer::RenderContext) to a
//! state's page and runs the embedded table script; [`table`] turns the raw
//! cell text it returns into [`Holiday`](crate::holiday::Holiday) records.

pub mod page;
pub mod table;

pub use page::PageExtractor;
