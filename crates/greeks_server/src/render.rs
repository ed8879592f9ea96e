//! HTML page rendering
//!
//! Templates are compiled into the binary with `include_str!` and carry
//! `{{ name }}` slots that are substituted per request.

use thiserror::Error;

/// Errors raised while producing chart or page output
#[derive(Debug, Error, PartialEq)]
pub enum RenderError {
    /// No template registered under the requested name
    #[error("unknown template: {0}")]
    UnknownTemplate(String),

    /// A template slot was left without a value
    #[error("unresolved template slot: {{{{ {name} }}}}")]
    UnresolvedSlot {
        /// Slot name as written in the template
        name: String,
    },

    /// The x and y series passed to the chart differ in length
    #[error("series length mismatch: {xs} x-values vs {ys} y-values")]
    SeriesLengthMismatch {
        /// Number of x-values
        xs: usize,
        /// Number of y-values
        ys: usize,
    },

    /// The chart backend failed to draw
    #[error("chart rendering failed: {0}")]
    Chart(String),
}

/// Look up a compiled-in template by name.
pub fn page_template(name: &str) -> Result<&'static str, RenderError> {
    match name {
        "index" => Ok(include_str!("../templates/index.html")),
        other => Err(RenderError::UnknownTemplate(other.to_string())),
    }
}

/// Substitute `{{ name }}` slots in a template.
///
/// Every slot in the template must have a value in `slots`; a leftover
/// slot is an error rather than a blank spot in the served page.
/// Unused entries in `slots` are ignored.
pub fn render_page(template: &str, slots: &[(&str, &str)]) -> Result<String, RenderError> {
    let mut page = template.to_string();
    for (name, value) in slots {
        page = page.replace(&format!("{{{{ {} }}}}", name), value);
    }

    if let Some(start) = page.find("{{") {
        let rest = &page[start..];
        let name = rest
            .find("}}")
            .map(|end| rest[2..end].trim().to_string())
            .unwrap_or_default();
        return Err(RenderError::UnresolvedSlot { name });
    }

    Ok(page)
}
