//! PDF report export
//!
//! Assembles a report document (point plot + parameter listing) as Typst
//! markup and compiles it to PDF bytes entirely in memory. The plot is drawn
//! natively in Typst, so no temporary image files are involved, and the
//! embedded fonts mean no font downloads either.

use crate::error::{Error, Result};
use crate::render::{self, PlotOptions};
use crate::source::PointsResponse;
use std::fmt::Write;

/// Side of the square plot area on the report page, in centimeters
const PLOT_SIZE_CM: f64 = 15.0;

/// Number of grid divisions per axis
const GRID_DIVISIONS: usize = 5;

/// Author and free-text metadata included in the report
#[derive(Debug, Clone, Default)]
pub struct ReportMeta {
    /// Author name
    pub author: String,
    /// Author contact (email / phone)
    pub contact: String,
    /// Optional free-text note
    pub note: String,
}

/// Build the report and compile it to PDF bytes
pub fn build_report(
    response: &PointsResponse,
    options: &PlotOptions,
    meta: &ReportMeta,
) -> Result<Vec<u8>> {
    // Validate the color up front; the hex string is embedded verbatim
    render::parse_color(&options.color)?;

    let source = build_typst_source(response, options, meta);
    compile_pdf(&source)
}

/// Generate the Typst source for the report
///
/// Page one holds the plot (points, optional center marker, optional index
/// labels, optional gridlines); page two lists the parameters, data source,
/// author info, and note.
pub fn build_typst_source(
    response: &PointsResponse,
    options: &PlotOptions,
    meta: &ReportMeta,
) -> String {
    let center = options.show_center.then(|| response.spec.center());
    let (x_range, y_range) = render::plot_bounds(&response.points, center);
    let span = x_range.end - x_range.start;

    let to_dx = |x: f64| (x - x_range.start) / span * PLOT_SIZE_CM;
    let to_dy = |y: f64| (y_range.end - y) / span * PLOT_SIZE_CM;

    let mut doc = String::new();
    doc.push_str("#set page(paper: \"a4\", margin: 2cm)\n");
    doc.push_str("#set text(size: 11pt)\n\n");
    doc.push_str("= Circle point report\n\n#v(5mm)\n\n");

    // Plot box
    doc.push_str("#align(center)[\n");
    let _ = writeln!(
        doc,
        "#box(width: {size}cm, height: {size}cm, stroke: 0.5pt + luma(120))[",
        size = PLOT_SIZE_CM
    );

    if options.grid {
        for i in 0..=GRID_DIVISIONS {
            let offset = PLOT_SIZE_CM * i as f64 / GRID_DIVISIONS as f64;
            let _ = writeln!(
                doc,
                "#place(top + left, dx: {offset:.4}cm, dy: 0cm, line(angle: 90deg, length: {size}cm, stroke: 0.3pt + luma(210)))",
                size = PLOT_SIZE_CM
            );
            let _ = writeln!(
                doc,
                "#place(top + left, dx: 0cm, dy: {offset:.4}cm, line(length: {size}cm, stroke: 0.3pt + luma(210)))",
                size = PLOT_SIZE_CM
            );
        }
    }

    for point in &response.points {
        let _ = writeln!(
            doc,
            "#place(top + left, dx: {:.4}cm, dy: {:.4}cm, circle(radius: 1.5pt, fill: rgb(\"{}\")))",
            to_dx(point.x),
            to_dy(point.y),
            options.color
        );
    }

    if let Some(c) = center {
        let _ = writeln!(
            doc,
            "#place(top + left, dx: {:.4}cm, dy: {:.4}cm, circle(radius: 2.5pt, stroke: 1pt + black))",
            to_dx(c.x),
            to_dy(c.y)
        );
    }

    if options.label_indices {
        for (i, point) in response.points.iter().enumerate() {
            let _ = writeln!(
                doc,
                "#place(top + left, dx: {:.4}cm, dy: {:.4}cm, text(size: 6pt)[{}])",
                to_dx(point.x) + 0.1,
                to_dy(point.y) + 0.1,
                i
            );
        }
    }

    doc.push_str("]\n\n#v(2mm)\n");

    let unit_suffix = if options.units.is_empty() {
        String::new()
    } else {
        format!(" {}", escape_typst(&options.units))
    };
    let _ = writeln!(
        doc,
        "#text(size: 9pt)[x: {:.4} to {:.4}{unit_suffix}, y: {:.4} to {:.4}{unit_suffix}]",
        x_range.start, x_range.end, y_range.start, y_range.end
    );
    doc.push_str("]\n\n#pagebreak()\n\n");

    // Parameters page
    doc.push_str("== Parameters\n\n");
    let _ = writeln!(
        doc,
        "- Center: ({:.4}, {:.4}){unit_suffix}",
        response.spec.center_x, response.spec.center_y
    );
    let _ = writeln!(doc, "- Radius: {:.4}{unit_suffix}", response.spec.radius);
    let _ = writeln!(doc, "- Point count: {}", response.points.len());
    let _ = writeln!(doc, "- Point color: `{}`", options.color);
    let _ = writeln!(doc, "- Data source: {}", response.source);
    let _ = writeln!(
        doc,
        "- Created: {}",
        response.timestamp.format("%Y-%m-%d %H:%M UTC")
    );
    if let Some(warning) = &response.warning {
        let _ = writeln!(doc, "- Warning: {}", escape_typst(warning));
    }

    doc.push_str("\n== Author\n\n");
    let _ = writeln!(doc, "- Name: {}", escape_typst(&meta.author));
    let _ = writeln!(doc, "- Contact: {}", escape_typst(&meta.contact));

    if !meta.note.is_empty() {
        doc.push_str("\n== Note\n\n");
        doc.push_str(&escape_typst(&meta.note));
        doc.push('\n');
    }

    doc
}

/// Compile Typst source to PDF bytes
fn compile_pdf(source: &str) -> Result<Vec<u8>> {
    use typst_as_lib::{typst_kit_options::TypstKitFontOptions, TypstEngine};

    let engine = TypstEngine::builder()
        .main_file(source)
        .search_fonts_with(
            TypstKitFontOptions::default()
                .include_system_fonts(true)
                .include_embedded_fonts(true),
        )
        .build();

    let compiled = engine.compile();

    for warning in &compiled.warnings {
        tracing::warn!("typst warning: {:?}", warning);
    }

    let document = compiled
        .output
        .map_err(|e| Error::Report(format!("typst compilation failed: {:?}", e)))?;

    typst_pdf::pdf(&document, &typst_pdf::PdfOptions::default())
        .map_err(|e| Error::Report(format!("pdf generation failed: {:?}", e)))
}

/// Escape user-supplied text for safe embedding in Typst markup
fn escape_typst(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' | '#' | '$' | '*' | '_' | '`' | '@' | '<' | '>' | '[' | ']' | '~' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circle::CircleSpec;
    use crate::source::{select_active, PointsResponse, Upload};

    fn create_test_response(count: usize) -> PointsResponse {
        let spec = CircleSpec::new(0.0, 0.0, 1.0, count);
        let selection = select_active(&Upload::Absent, false, &spec);
        PointsResponse::new(spec, selection)
    }

    fn meta() -> ReportMeta {
        ReportMeta {
            author: "Test Author".to_string(),
            contact: "test@example.com".to_string(),
            note: "A note".to_string(),
        }
    }

    #[test]
    fn test_typst_source_structure() {
        let response = create_test_response(8);
        let source = build_typst_source(&response, &PlotOptions::default(), &meta());

        assert!(source.contains("#set page(paper: \"a4\""));
        assert!(source.contains("= Circle point report"));
        assert!(source.contains("== Parameters"));
        assert!(source.contains("- Point count: 8"));
        assert!(source.contains("- Data source: generated"));
        assert!(source.contains("Test Author"));
        assert!(source.contains("#pagebreak()"));
        // One placed circle per point
        assert_eq!(source.matches("circle(radius: 1.5pt").count(), 8);
    }

    #[test]
    fn test_typst_source_toggles() {
        let response = create_test_response(4);
        let options = PlotOptions {
            grid: false,
            show_center: true,
            label_indices: true,
            ..PlotOptions::default()
        };
        let source = build_typst_source(&response, &options, &meta());

        assert!(!source.contains("luma(210)"));
        assert!(source.contains("circle(radius: 2.5pt, stroke: 1pt + black)"));
        assert!(source.contains("text(size: 6pt)[3]"));
    }

    #[test]
    fn test_typst_source_zero_points() {
        let mut response = create_test_response(4);
        response.points.clear();
        let source = build_typst_source(&response, &PlotOptions::default(), &meta());

        assert!(source.contains("- Point count: 0"));
        assert!(!source.contains("circle(radius: 1.5pt"));
    }

    #[test]
    fn test_escape_typst() {
        assert_eq!(escape_typst("a#b"), "a\\#b");
        assert_eq!(escape_typst("[x] *y* _z_"), "\\[x\\] \\*y\\* \\_z\\_");
        assert_eq!(escape_typst("plain text"), "plain text");
    }

    #[test]
    fn test_note_is_escaped() {
        let response = create_test_response(1);
        let meta = ReportMeta {
            note: "#import \"evil\"".to_string(),
            ..ReportMeta::default()
        };
        let source = build_typst_source(&response, &PlotOptions::default(), &meta);
        assert!(source.contains("\\#import"));
    }

    #[test]
    fn test_build_report_rejects_bad_color() {
        let response = create_test_response(1);
        let options = PlotOptions {
            color: "red\")]#evil".to_string(),
            ..PlotOptions::default()
        };
        assert!(build_report(&response, &options, &meta()).is_err());
    }

    #[test]
    fn test_build_report_produces_pdf() {
        let response = create_test_response(12);
        let pdf = build_report(&response, &PlotOptions::default(), &meta()).unwrap();
        assert!(pdf.starts_with(b"%PDF"));
    }
}
