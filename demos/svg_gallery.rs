//! Renders each boolean operation on a few operand pairs as SVG files.
//!
//! Run with: cargo run --example svg_gallery
//! Set RUST_LOG=polyset=trace to see which contour pairs were dropped.

use polyset::hull::convex_boolean_operation;
use polyset::io::{contours_to_svg_document, parse_svg_contours, SvgLayer};
use polyset::{boolean_operation, Contour, Operation};

use std::fs;
use std::path::Path;

const WIDTH: f64 = 240.0;
const HEIGHT: f64 = 240.0;
const OUT_DIR: &str = "screenshots";

/// Operand pairs as SVG path data: (name, A, B).
const SCENES: &[(&str, &str, &str)] = &[
    (
        "squares",
        "M 40 40 L 140 40 L 140 140 L 40 140 Z",
        "M 90 90 L 190 90 L 190 190 L 90 190 Z",
    ),
    (
        "concave",
        "M 30 30 L 200 30 L 200 90 L 90 90 L 90 200 L 30 200 Z",
        "M 60 60 L 160 60 L 160 160 L 60 160 Z",
    ),
    (
        "multi",
        "M 20 20 h 80 v 80 h -80 z M 130 130 h 80 v 80 h -80 z",
        "M 60 60 L 180 60 L 180 180 L 60 180 Z",
    ),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    fs::create_dir_all(OUT_DIR)?;

    for &(name, a, b) in SCENES {
        let a: Vec<Contour<f64>> = parse_svg_contours(a)?;
        let b: Vec<Contour<f64>> = parse_svg_contours(b)?;

        for op in Operation::ALL {
            let result = boolean_operation(&a, &b, op);
            write_scene(&format!("{name}_{op}.svg"), &a, &b, &result)?;

            if let (Some(first_a), Some(first_b)) = (a.first(), b.first()) {
                let hull = vec![convex_boolean_operation(first_a, first_b, op)];
                write_scene(&format!("{name}_{op}_convex.svg"), &a, &b, &hull)?;
            }
        }
    }

    println!("Generated all screenshots in {OUT_DIR}/");
    Ok(())
}

fn write_scene(
    file: &str,
    a: &[Contour<f64>],
    b: &[Contour<f64>],
    result: &[Contour<f64>],
) -> std::io::Result<()> {
    let svg = contours_to_svg_document(
        &[
            SvgLayer {
                contours: a,
                fill: "#4a90d9",
            },
            SvgLayer {
                contours: b,
                fill: "#d94a4a",
            },
            SvgLayer {
                contours: result,
                fill: "#f5c542",
            },
        ],
        WIDTH,
        HEIGHT,
    );
    fs::write(Path::new(OUT_DIR).join(file), svg)
}
