//! SVG document rendering for the word cloud.
//!
//! The document is produced from a bundled `MiniJinja` template so the
//! markup stays out of the Rust source. Words are plain alphanumeric tokens
//! by the time they reach the template, so no markup escaping is required.

use minijinja::{Environment, context};

use super::error::RenderError;
use super::layout::{CanvasSpec, PlacedWord};

/// Bundled SVG template; `build.rs` keeps rebuilds honest when it changes.
const CLOUD_TEMPLATE: &str = include_str!("../../templates/word_cloud.svg.jinja");

/// Background colour of the rendered cloud.
const BACKGROUND: &str = "#ffffff";

/// Font family requested for the cloud text.
const FONT_FAMILY: &str = "sans-serif";

/// Renders the placed words into an SVG document.
///
/// # Errors
///
/// Returns [`RenderError::Template`] when the bundled template fails to
/// parse or render.
pub fn render_svg(words: &[PlacedWord], canvas: CanvasSpec) -> Result<String, RenderError> {
    let template_error = |error: minijinja::Error| RenderError::Template {
        message: error.to_string(),
    };

    let mut env = Environment::new();
    env.add_template("word_cloud", CLOUD_TEMPLATE)
        .map_err(template_error)?;

    let template = env.get_template("word_cloud").map_err(template_error)?;
    template
        .render(context! {
            width => canvas.width,
            height => canvas.height,
            background => BACKGROUND,
            font_family => FONT_FAMILY,
            words => words,
        })
        .map_err(template_error)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn placed(text: &str, size: u32) -> PlacedWord {
        PlacedWord {
            text: text.to_owned(),
            x: 10,
            y: 40,
            size,
            colour: "#1f77b4",
        }
    }

    #[rstest]
    fn svg_document_carries_canvas_dimensions() {
        let svg = render_svg(&[], CanvasSpec::default()).expect("should render empty cloud");

        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"width="800""#));
        assert!(svg.contains(r#"height="500""#));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[rstest]
    fn svg_document_draws_each_word_at_its_size() {
        let words = vec![placed("blender", 64), placed("kettle", 14)];
        let svg = render_svg(&words, CanvasSpec::default()).expect("should render words");

        assert!(svg.contains(">blender</text>"));
        assert!(svg.contains(">kettle</text>"));
        assert!(svg.contains(r#"font-size="64""#));
        assert!(svg.contains(r#"font-size="14""#));
    }
}
