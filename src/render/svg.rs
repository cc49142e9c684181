//! SVG emitter for finished paintings

use crate::io::configuration::{BORDER_STROKE_WIDTH, LINE_STROKE_WIDTH};
use crate::render::Painting;
use std::fmt::Write;

/// Render a painting as a standalone SVG document
///
/// Faces are filled first, then every interior cut is stroked, then a frame
/// is drawn around the whole canvas in place of the four border lines.
pub fn render_svg(painting: &Painting) -> String {
    let (width, height) = (painting.width, painting.height);
    let mut svg = String::with_capacity(256 + 96 * painting.faces.len());

    svg.push_str(
        r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" "#,
    );
    let _ = write!(svg, r#"width="{width}" height="{height}">"#);
    let _ = write!(
        svg,
        "<defs><style type=\"text/css\"><![CDATA[line {{stroke: #000;stroke-width: {LINE_STROKE_WIDTH}px;fill: none;}}]]></style></defs>"
    );

    for face in &painting.faces {
        let mut path = String::new();
        for (i, vertex) in face.polygon.vertices().iter().enumerate() {
            let command = if i == 0 { "M" } else { " L" };
            let _ = write!(
                path,
                "{command}{},{}",
                painting.scale_x(vertex.x),
                painting.scale_y(vertex.y)
            );
        }
        path.push_str(" Z");
        let _ = write!(
            svg,
            r#"<path d="{path}" style="fill: {}"/>"#,
            face.color.svg_name()
        );
    }

    for cut in &painting.cuts {
        let (start, end) = (cut.origin, cut.end());
        let _ = write!(
            svg,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}"/>"#,
            painting.scale_x(start.x),
            painting.scale_y(start.y),
            painting.scale_x(end.x),
            painting.scale_y(end.y)
        );
    }

    let _ = write!(
        svg,
        r#"<g fill="none" stroke="black"><path stroke-width="{BORDER_STROKE_WIDTH}" d="M0,0l{width},0l0,{height}l-{width},0l0,-{height}"/></g></svg>"#
    );

    svg
}
