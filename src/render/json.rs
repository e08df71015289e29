//! JSON renderer: structured output for binding generators.

use crate::model::Summary;
use crate::render::Renderer;
use anyhow::{Context, Result};

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, summary: &Summary) -> Result<String> {
        let mut out =
            serde_json::to_string_pretty(summary).context("failed to serialize summary")?;
        out.push('\n');
        Ok(out)
    }
}
