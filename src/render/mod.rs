//! Renderer module: trait-based format dispatch.

pub mod json;
pub mod text;

use crate::model::Summary;
use anyhow::{anyhow, Result};

/// Trait for rendering a Summary into a specific output format.
pub trait Renderer {
    fn render(&self, summary: &Summary) -> Result<String>;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "text" | "txt" => Ok(Box::new(text::TextRenderer)),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(anyhow!("unknown format: {}. Use text or json", format)),
    }
}
