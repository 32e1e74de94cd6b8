use color_lib::Gradient;
use svg::node::element::{Definitions, Element, Group, LinearGradient, Rectangle, Stop};
use svg::node::Text as TextNode;
use svg::{Document, Node};

use crate::AvatarOptions;

const GRADIENT_ID: &str = "gradient";
const TEXT_FILL: &str = "#fff";

// Fraction of the canvas a caption may span before it is shrunk.
const TEXT_WIDTH: f64 = 0.9;
// Smallest caption, as a fraction of the canvas.
const MIN_TEXT: f64 = 0.25;

/// Font size for a caption: fill 90% of the width, but never go below a
/// quarter of the canvas.
pub fn font_size(size: u32, text: &str) -> f64 {
    let size = size as f64;
    let len = text.chars().count().max(1) as f64;
    (size * TEXT_WIDTH / len).max(size * MIN_TEXT)
}

// Diagonal, top left to bottom right.
fn make_gradient(gradient: &Gradient) -> LinearGradient {
    LinearGradient::new()
        .set("id", GRADIENT_ID)
        .set("x1", 0)
        .set("y1", 0)
        .set("x2", 1)
        .set("y2", 1)
        .add(
            Stop::new()
                .set("offset", "0%")
                .set("stop-color", gradient.from_color.as_str()),
        )
        .add(
            Stop::new()
                .set("offset", "100%")
                .set("stop-color", gradient.to_color.as_str()),
        )
}

fn make_background(size: u32, rounded: u32) -> Rectangle {
    Rectangle::new()
        .set("fill", format!("url(#{})", GRADIENT_ID))
        .set("x", 0)
        .set("y", 0)
        .set("width", size)
        .set("height", size)
        .set("rx", rounded)
        .set("ry", rounded)
}

fn make_caption(size: u32, text: &str) -> Element {
    let mut caption = Element::new("text");
    caption.assign("x", "50%");
    caption.assign("y", "50%");
    caption.assign("alignment-baseline", "central");
    caption.assign("dominant-baseline", "central");
    caption.assign("text-anchor", "middle");
    caption.assign("fill", TEXT_FILL);
    caption.assign("font-family", "inherit");
    caption.assign("font-size", font_size(size, text));
    caption.append(TextNode::new(text));
    caption
}

pub fn make_document(options: &AvatarOptions, gradient: &Gradient) -> Document {
    let AvatarOptions {
        name,
        text,
        size,
        rounded,
    } = options;

    let mut group = Group::new()
        .add(Definitions::new().add(make_gradient(gradient)))
        .add(make_background(*size, *rounded));
    if !text.is_empty() {
        group = group.add(make_caption(*size, text));
    }

    Document::new()
        .set("width", *size)
        .set("height", *size)
        .set("viewBox", (0, 0, *size, *size))
        .set("version", "1.1")
        .set("xmlns", "http://www.w3.org/2000/svg")
        .set("role", "img")
        .set("aria-label", format!("{} avatar", name))
        .add(group)
}

/// The SVG document as markup, for callers that inline it directly.
pub fn render_svg(options: &AvatarOptions, gradient: &Gradient) -> String {
    make_document(options, gradient).to_string()
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use itertools::iproduct;

    use super::*;

    fn gradient() -> Gradient {
        Gradient::new("#336699", "#993366")
    }

    #[test]
    fn test_font_size() {
        assert_abs_diff_eq!(57.6, font_size(128, "JD"), epsilon = 1e-9);
        assert_abs_diff_eq!(32.0, font_size(128, &"x".repeat(100)), epsilon = 1e-9);
        assert_abs_diff_eq!(115.2, font_size(128, "J"), epsilon = 1e-9);
        // Counted in characters, not bytes.
        assert_abs_diff_eq!(57.6, font_size(128, "山田"), epsilon = 1e-9);
    }

    #[test]
    fn test_font_size_floor() {
        for (size, len) in iproduct!([1, 16, 128, 1000], 1..40) {
            let text = "a".repeat(len);
            let fs = font_size(size, &text);
            assert!(fs >= size as f64 / 4.0, "{} {}", size, len);
            assert!(fs <= size as f64 * 0.9 + 1e-9, "{} {}", size, len);
        }
    }

    #[test]
    fn test_text_omitted() {
        let svg = render_svg(&AvatarOptions::new("John Doe", ""), &gradient());
        assert!(!svg.contains("<text"), "{}", svg);
    }

    #[test]
    fn test_text_present() {
        let svg = render_svg(&AvatarOptions::new("John Doe", "JD"), &gradient());
        assert_eq!(1, svg.matches("<text").count(), "{}", svg);
        assert!(svg.contains("JD"));
        assert!(svg.contains(r##"fill="#fff""##));
        assert!(svg.contains(r#"font-size="57.6""#));
        assert!(svg.contains(r#"text-anchor="middle""#));
        assert!(svg.contains(r#"dominant-baseline="central""#));
    }

    #[test]
    fn test_structure() {
        let options = AvatarOptions::new("John Doe", "JD")
            .with_size(64)
            .with_rounded(8);
        let svg = render_svg(&options, &gradient());

        assert!(svg.starts_with("<svg"), "{}", svg);
        assert!(svg.contains(r#"viewBox="0 0 64 64""#));
        assert!(svg.contains(r#"width="64""#));
        assert!(svg.contains(r#"height="64""#));
        assert!(svg.contains(r#"rx="8""#));
        assert!(svg.contains(r#"ry="8""#));
        assert!(svg.contains(r#"role="img""#));
        assert!(svg.contains(r#"aria-label="John Doe avatar""#));
        assert!(svg.contains(r##"fill="url(#gradient)""##));

        assert_eq!(1, svg.matches("<linearGradient").count());
        assert_eq!(2, svg.matches("<stop").count());
        assert!(svg.contains(r##"stop-color="#336699""##));
        assert!(svg.contains(r##"stop-color="#993366""##));
        assert!(svg.contains(r#"x2="1""#));
        assert!(svg.contains(r#"y2="1""#));
    }
}
