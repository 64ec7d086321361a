//! SVG preview of a gallery layout.
//!
//! Draws the container outline and one labelled box per placed frame, so
//! row bucketing and justification can be checked by eye.
//!
//! # Example
//!
//! ```
//! use zenjustify::{Frame, Gallery, svg::render_gallery_svg};
//!
//! let frames = [Frame::new(1000, 360), Frame::new(400, 600), Frame::new(600, 400)];
//! let gallery = Gallery::new(800, 360).spacing(10).compute(&frames).unwrap();
//!
//! let svg = render_gallery_svg(&gallery);
//! assert!(svg.starts_with("<svg"));
//! ```

use crate::gallery::GalleryLayout;

/// Margin around the gallery.
const MARGIN: f64 = 20.0;
/// Minimum box size before a label is drawn inside it.
const LABEL_MIN_W: u32 = 60;
const LABEL_MIN_H: u32 = 24;

/// Render a complete SVG document showing every placement in `gallery`.
///
/// Coordinates are in layout pixels, offset by a fixed margin.
pub fn render_gallery_svg(gallery: &GalleryLayout) -> String {
    if gallery.layout.is_empty() {
        return String::from(r#"<svg xmlns="http://www.w3.org/2000/svg" width="1" height="1"/>"#);
    }

    let size = gallery.size();
    let total_w = size.width as f64 + 2.0 * MARGIN;
    let total_h = size.height as f64 + 2.0 * MARGIN;

    let mut svg = String::with_capacity(1024 + 256 * gallery.layout.frame_count());

    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        total_w as u32, total_h as u32, total_w, total_h
    ));
    svg.push('\n');

    svg.push_str(
        r##"<style>
  text { font-family: "Consolas", "DejaVu Sans Mono", "Courier New", monospace; }
  .label { font-size: 11px; fill: #fff; }
  .container { fill: #e8e8e8; stroke: #999; stroke-width: 1; }
  .frame { fill: #6ba3d6; stroke: #2c6faa; stroke-width: 1; }
  @media (prefers-color-scheme: dark) {
    .label { fill: #e0e0e0; }
    .container { fill: #2d2d2d; stroke: #555; }
    .frame { fill: #3a72a4; stroke: #5a9fd4; }
  }
</style>
"##,
    );

    svg.push_str(&format!(
        r#"<rect x="{:.1}" y="{:.1}" width="{}" height="{}" class="container"/>"#,
        MARGIN, MARGIN, size.width, size.height
    ));
    svg.push('\n');

    for p in gallery.placements() {
        let x = MARGIN + p.x as f64;
        let y = MARGIN + p.y as f64;
        svg.push_str(&format!(
            r#"<rect x="{:.1}" y="{:.1}" width="{}" height="{}" class="frame"/>"#,
            x, y, p.frame.width, p.frame.height
        ));
        svg.push('\n');

        if p.frame.width >= LABEL_MIN_W && p.frame.height >= LABEL_MIN_H {
            let label = format!(
                "{},{}  {}×{}",
                p.row, p.column, p.frame.width, p.frame.height
            );
            svg.push_str(&format!(
                r#"<text x="{:.1}" y="{:.1}" class="label">{}</text>"#,
                x + 4.0,
                y + 14.0,
                escape_xml(&label)
            ));
            svg.push('\n');
        }
    }

    svg.push_str("</svg>\n");
    svg
}

/// Escape special characters for XML text content.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Frame, Gallery};

    fn firefly() -> GalleryLayout {
        let frames = [
            Frame::new(1000, 360),
            Frame::new(400, 600),
            Frame::new(600, 400),
            Frame::new(600, 400),
            Frame::new(300, 400),
            Frame::new(300, 400),
        ];
        Gallery::new(800, 360).spacing(10).compute(&frames).unwrap()
    }

    #[test]
    fn empty_gallery_renders_placeholder() {
        let gallery = Gallery::new(800, 360).compute(&[]).unwrap();
        let svg = render_gallery_svg(&gallery);
        assert_eq!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="1" height="1"/>"#
        );
    }

    #[test]
    fn one_rect_per_frame_plus_container() {
        let svg = render_gallery_svg(&firefly());
        assert_eq!(svg.matches(r#"class="frame""#).count(), 6);
        assert_eq!(svg.matches(r#"class="container""#).count(), 1);
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn document_size_includes_margin() {
        let svg = render_gallery_svg(&firefly());
        // 819×866 gallery plus 20px margin on each side
        assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="859" height="906""#));
    }

    #[test]
    fn labels_carry_position_and_size() {
        let svg = render_gallery_svg(&firefly());
        assert!(svg.contains("0,0  800×288"));
        assert!(svg.contains("1,2  327×218"));
        assert!(svg.contains(r#"<rect x="512.0" y="308.0" width="327" height="218" class="frame"/>"#));
    }

    #[test]
    fn escape_xml_special_chars() {
        assert_eq!(escape_xml("a<b>&\"c"), "a&lt;b&gt;&amp;&quot;c");
    }
}
