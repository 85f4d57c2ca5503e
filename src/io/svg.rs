//! SVG path parsing and export for straight-edged contours.
//!
//! # Supported Commands
//!
//! - `M`/`m` - Move to (absolute/relative); extra pairs are implicit line-tos
//! - `L`/`l` - Line to
//! - `H`/`h` - Horizontal line to
//! - `V`/`v` - Vertical line to
//! - `Z`/`z` - Close path
//!
//! Curve and arc commands are rejected: contours have straight edges only.
//! Every subpath becomes one [`Contour`], closed or not.
//!
//! # Example
//!
//! ```
//! use polyset::io::{contours_to_svg_path, parse_svg_contours};
//!
//! let contours = parse_svg_contours::<f64>("M 0 0 L 10 0 L 10 10 Z m 20 0 h 5 v 5 z").unwrap();
//! assert_eq!(contours.len(), 2);
//! assert_eq!(contours[1].points[0].x, 20.0);
//!
//! let d = contours_to_svg_path(&contours[..1]);
//! assert_eq!(d, "M 0 0 L 10 0 L 10 10 Z");
//! ```

use crate::contour::Contour;
use crate::primitives::Point2;
use num_traits::Float;
use std::fmt::{self, Write};
use std::str::FromStr;
use thiserror::Error;

/// Error type for SVG path parsing. Positions are byte offsets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SvgParseError {
    /// Unexpected character encountered.
    #[error("unexpected character '{0}' at position {1}")]
    UnexpectedChar(char, usize),
    /// Expected a number but found something else.
    #[error("expected number at position {0}")]
    ExpectedNumber(usize),
    /// Invalid number format.
    #[error("invalid number '{0}' at position {1}")]
    InvalidNumber(String, usize),
    /// A curve, arc or unknown command letter.
    #[error("unsupported command '{0}' at position {1}")]
    UnsupportedCommand(char, usize),
    /// Drawing started before any move-to.
    #[error("path must start with a move-to, found a drawing command at position {0}")]
    MissingMoveTo(usize),
}

/// One filled group in an SVG document.
#[derive(Debug, Clone, Copy)]
pub struct SvgLayer<'a, F> {
    /// Contours drawn as a single `<path>`.
    pub contours: &'a [Contour<F>],
    /// Any SVG colour, e.g. `"#3a7bd5"` or `"none"`.
    pub fill: &'a str,
}

/// Parses SVG path data into contours, one per subpath.
///
/// A final point repeating the first point of its subpath (within
/// tolerance) is dropped, since contours close implicitly.
pub fn parse_svg_contours<F: Float + FromStr>(d: &str) -> Result<Vec<Contour<F>>, SvgParseError> {
    SvgPathParser::new(d).parse()
}

/// Writes contours as path data: `M x y L x y ... Z` per non-empty contour.
pub fn contours_to_svg_path<F: Float + fmt::Display>(contours: &[Contour<F>]) -> String {
    let mut result = String::new();

    for contour in contours.iter().filter(|c| !c.is_empty()) {
        if !result.is_empty() {
            result.push(' ');
        }
        for (i, p) in contour.points.iter().enumerate() {
            let cmd = if i == 0 { "M" } else { " L" };
            // Writing to a String cannot fail
            let _ = write!(result, "{cmd} {} {}", p.x, p.y);
        }
        result.push_str(" Z");
    }

    result
}

/// Writes a standalone SVG document with one even-odd filled path per layer.
///
/// ```
/// use polyset::io::{contours_to_svg_document, SvgLayer};
/// use polyset::{Contour, Point2};
///
/// let tri = vec![Contour::new(vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(10.0, 0.0),
///     Point2::new(0.0, 10.0),
/// ])];
/// let svg = contours_to_svg_document(&[SvgLayer { contours: &tri, fill: "teal" }], 20.0, 20.0);
/// assert!(svg.starts_with("<svg"));
/// assert!(svg.contains(r#"fill="teal""#));
/// ```
pub fn contours_to_svg_document<F: Float + fmt::Display>(
    layers: &[SvgLayer<'_, F>],
    width: f64,
    height: f64,
) -> String {
    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    );

    for layer in layers {
        let d = contours_to_svg_path(layer.contours);
        if d.is_empty() {
            continue;
        }
        let _ = writeln!(
            svg,
            r#"  <path d="{d}" fill="{}" fill-opacity="0.6" fill-rule="evenodd" stroke="black" stroke-width="1"/>"#,
            layer.fill
        );
    }

    svg.push_str("</svg>\n");
    svg
}

// ============================================================================
// Internal implementation
// ============================================================================

/// Streaming parser that builds contours as commands are read.
struct SvgPathParser<'a> {
    input: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
}

/// Drawing state between commands.
struct PathBuilder<F> {
    contours: Vec<Contour<F>>,
    current: Vec<Point2<F>>,
    position: Point2<F>,
    subpath_start: Point2<F>,
    started: bool,
}

impl<F: Float> PathBuilder<F> {
    fn new() -> Self {
        Self {
            contours: Vec::new(),
            current: Vec::new(),
            position: Point2::origin(),
            subpath_start: Point2::origin(),
            started: false,
        }
    }

    fn move_to(&mut self, p: Point2<F>) {
        self.finish_subpath();
        self.position = p;
        self.subpath_start = p;
        self.current.push(p);
        self.started = true;
    }

    fn line_to(&mut self, p: Point2<F>, pos: usize) -> Result<(), SvgParseError> {
        if !self.started {
            return Err(SvgParseError::MissingMoveTo(pos));
        }
        if self.current.is_empty() {
            // Drawing after a close-path continues from the subpath start
            self.current.push(self.subpath_start);
        }
        self.position = p;
        self.current.push(p);
        Ok(())
    }

    fn close(&mut self, pos: usize) -> Result<(), SvgParseError> {
        if !self.started {
            return Err(SvgParseError::MissingMoveTo(pos));
        }
        self.finish_subpath();
        self.position = self.subpath_start;
        Ok(())
    }

    fn finish_subpath(&mut self) {
        if self.current.is_empty() {
            return;
        }

        let mut points = std::mem::take(&mut self.current);
        if points.len() > 1 && points[points.len() - 1].approx_eq(points[0]) {
            points.pop();
        }
        self.contours.push(Contour::new(points));
    }

    fn finish(mut self) -> Vec<Contour<F>> {
        self.finish_subpath();
        self.contours
    }
}

impl<'a> SvgPathParser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
        }
    }

    fn parse<F: Float + FromStr>(&mut self) -> Result<Vec<Contour<F>>, SvgParseError> {
        let mut builder = PathBuilder::new();

        while let Some(&(pos, c)) = self.chars.peek() {
            if c.is_whitespace() || c == ',' {
                self.chars.next();
                continue;
            }

            if c.is_ascii_alphabetic() {
                self.chars.next();
                self.parse_command(c, pos, &mut builder)?;
            } else {
                return Err(SvgParseError::UnexpectedChar(c, pos));
            }
        }

        Ok(builder.finish())
    }

    fn parse_command<F: Float + FromStr>(
        &mut self,
        cmd: char,
        pos: usize,
        builder: &mut PathBuilder<F>,
    ) -> Result<(), SvgParseError> {
        match cmd {
            'M' | 'm' => {
                let (x, y) = self.parse_coordinate_pair()?;
                let target = if cmd == 'm' {
                    Point2::new(builder.position.x + x, builder.position.y + y)
                } else {
                    Point2::new(x, y)
                };
                builder.move_to(target);
                // Subsequent pairs are implicit line-tos of the same kind
                while self.has_number() {
                    let (x, y) = self.parse_coordinate_pair()?;
                    let target = if cmd == 'm' {
                        Point2::new(builder.position.x + x, builder.position.y + y)
                    } else {
                        Point2::new(x, y)
                    };
                    builder.line_to(target, pos)?;
                }
            }
            'L' | 'l' => loop {
                let (x, y) = self.parse_coordinate_pair()?;
                let target = if cmd == 'l' {
                    Point2::new(builder.position.x + x, builder.position.y + y)
                } else {
                    Point2::new(x, y)
                };
                builder.line_to(target, pos)?;
                if !self.has_number() {
                    break;
                }
            },
            'H' | 'h' => loop {
                let x: F = self.parse_number()?;
                let x = if cmd == 'h' { builder.position.x + x } else { x };
                builder.line_to(Point2::new(x, builder.position.y), pos)?;
                if !self.has_number() {
                    break;
                }
            },
            'V' | 'v' => loop {
                let y: F = self.parse_number()?;
                let y = if cmd == 'v' { builder.position.y + y } else { y };
                builder.line_to(Point2::new(builder.position.x, y), pos)?;
                if !self.has_number() {
                    break;
                }
            },
            'Z' | 'z' => builder.close(pos)?,
            other => return Err(SvgParseError::UnsupportedCommand(other, pos)),
        }

        Ok(())
    }

    fn skip_whitespace_and_commas(&mut self) {
        while let Some(&(_, c)) = self.chars.peek() {
            if c.is_whitespace() || c == ',' {
                self.chars.next();
            } else {
                break;
            }
        }
    }

    fn has_number(&mut self) -> bool {
        self.skip_whitespace_and_commas();
        if let Some(&(_, c)) = self.chars.peek() {
            c.is_ascii_digit() || c == '-' || c == '+' || c == '.'
        } else {
            false
        }
    }

    fn parse_number<F: Float + FromStr>(&mut self) -> Result<F, SvgParseError> {
        self.skip_whitespace_and_commas();

        let start = self
            .chars
            .peek()
            .map(|&(i, _)| i)
            .unwrap_or(self.input.len());
        let mut end = start;

        if let Some(&(i, c)) = self.chars.peek() {
            if c == '-' || c == '+' {
                end = i + 1;
                self.chars.next();
            }
        }

        let mut digits = 0;
        self.take_digits(&mut end, &mut digits);

        if let Some(&(i, '.')) = self.chars.peek() {
            end = i + 1;
            self.chars.next();
            self.take_digits(&mut end, &mut digits);
        }

        if digits == 0 {
            return Err(SvgParseError::ExpectedNumber(start));
        }

        if let Some(&(i, c)) = self.chars.peek() {
            if c == 'e' || c == 'E' {
                end = i + 1;
                self.chars.next();
                if let Some(&(i, c)) = self.chars.peek() {
                    if c == '-' || c == '+' {
                        end = i + 1;
                        self.chars.next();
                    }
                }
                self.take_digits(&mut end, &mut digits);
            }
        }

        let num_str = &self.input[start..end];
        num_str
            .parse()
            .map_err(|_| SvgParseError::InvalidNumber(num_str.to_string(), start))
    }

    fn take_digits(&mut self, end: &mut usize, digits: &mut usize) {
        while let Some(&(i, c)) = self.chars.peek() {
            if c.is_ascii_digit() {
                *end = i + 1;
                *digits += 1;
                self.chars.next();
            } else {
                break;
            }
        }
    }

    fn parse_coordinate_pair<F: Float + FromStr>(&mut self) -> Result<(F, F), SvgParseError> {
        let x = self.parse_number()?;
        let y = self.parse_number()?;
        Ok((x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_absolute_square() {
        let contours = parse_svg_contours::<f64>("M0,0 L10,0 L10,10 L0,10 Z").unwrap();
        assert_eq!(contours.len(), 1);
        assert_eq!(contours[0].len(), 4);
        assert!(!contours[0].is_hole);
    }

    #[test]
    fn test_parse_drops_explicit_closing_point() {
        let contours = parse_svg_contours::<f64>("M 0 0 L 4 0 L 4 4 L 0 0 Z").unwrap();
        assert_eq!(contours[0].len(), 3);
    }

    #[test]
    fn test_parse_relative_and_axis_commands() {
        let contours = parse_svg_contours::<f64>("m 1 1 h 4 v 4 h -4 z").unwrap();
        assert_eq!(
            contours[0].points,
            vec![
                Point2::new(1.0, 1.0),
                Point2::new(5.0, 1.0),
                Point2::new(5.0, 5.0),
                Point2::new(1.0, 5.0),
            ]
        );
    }

    #[test]
    fn test_parse_implicit_line_to_after_move() {
        let contours = parse_svg_contours::<f64>("M 0 0 3 0 3 3").unwrap();
        assert_eq!(contours[0].len(), 3);

        let rel = parse_svg_contours::<f64>("m 1 1 2 0 0 2").unwrap();
        assert_eq!(rel[0].points[2], Point2::new(3.0, 3.0));
    }

    #[test]
    fn test_parse_multiple_subpaths() {
        let contours =
            parse_svg_contours::<f64>("M0 0 L1 0 L1 1 Z M5 5 L6 5 L6 6 Z").unwrap();
        assert_eq!(contours.len(), 2);
        assert_eq!(contours[1].points[0], Point2::new(5.0, 5.0));
    }

    #[test]
    fn test_parse_numbers() {
        let contours = parse_svg_contours::<f64>("M-1.5e1,.5 L+2-3").unwrap();
        assert_eq!(contours[0].points[0], Point2::new(-15.0, 0.5));
        assert_eq!(contours[0].points[1], Point2::new(2.0, -3.0));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse_svg_contours::<f64>("M 0 0 C 1 1 2 2 3 3"),
            Err(SvgParseError::UnsupportedCommand('C', 6))
        );
        assert_eq!(
            parse_svg_contours::<f64>("L 1 1"),
            Err(SvgParseError::MissingMoveTo(0))
        );
        assert_eq!(
            parse_svg_contours::<f64>("M 0 x"),
            Err(SvgParseError::ExpectedNumber(4))
        );
        assert_eq!(
            parse_svg_contours::<f64>("M 0 0 # 1"),
            Err(SvgParseError::UnexpectedChar('#', 6))
        );
        assert_eq!(
            parse_svg_contours::<f64>("M 0 -"),
            Err(SvgParseError::ExpectedNumber(4))
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_svg_contours::<f64>("  ").unwrap().is_empty());
        assert_eq!(contours_to_svg_path::<f64>(&[]), "");
    }

    #[test]
    fn test_export_round_trip() {
        let d = "M 0 0 L 10 0 L 10 10 Z M 20 20 L 30 20 L 25 30 Z";
        let contours = parse_svg_contours::<f64>(d).unwrap();
        assert_eq!(contours_to_svg_path(&contours), d);
    }

    #[test]
    fn test_document_skips_empty_layers() {
        let empty: Vec<Contour<f64>> = Vec::new();
        let svg = contours_to_svg_document(
            &[SvgLayer {
                contours: &empty,
                fill: "red",
            }],
            10.0,
            10.0,
        );
        assert!(!svg.contains("<path"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }
}
