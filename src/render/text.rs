//! Plain text renderer: one fact per line.
//!
//! Line order: function, first parameter, function docs, parameter docs,
//! size identifier. Multi-paragraph docs keep their blank-line separators.

use crate::model::Summary;
use crate::render::Renderer;
use anyhow::Result;

pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn render(&self, summary: &Summary) -> Result<String> {
        let mut out = String::new();
        for line in [
            &summary.function,
            &summary.parameter,
            &summary.description,
            &summary.parameter_doc,
            &summary.size,
        ] {
            out.push_str(line);
            out.push('\n');
        }
        Ok(out)
    }
}
