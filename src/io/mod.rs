//! Reading and writing contours as SVG path data.

mod svg;

pub use svg::{
    contours_to_svg_document, contours_to_svg_path, parse_svg_contours, SvgLayer, SvgParseError,
};
