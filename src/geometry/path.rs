//! Path-description parsing.
//!
//! Tokenizes the compact path command language (`M/L/H/V/C/S/Q/T/A/Z`,
//! lowercase for relative) into a flat sequence of [`Command`]s with every
//! coordinate already absolute. The running current point and subpath start
//! are threaded through a local cursor so the parser stays a pure function
//! of its input string.

use crate::error::ParseError;
use crate::geometry::limits;
use crate::geometry::math;
use crate::model::Command;

/// Parse a full path-description string. Fails atomically: any unknown
/// command letter, truncated argument list or unparsable number rejects the
/// whole string.
pub fn parse(path_data: &str) -> Result<Vec<Command>, ParseError> {
    if path_data.len() > limits::MAX_PATH_DATA_BYTES {
        return Err(ParseError::LimitExceeded {
            limit: "path data bytes",
            got: path_data.len(),
        });
    }
    let mut lex = Lexer {
        bytes: path_data.as_bytes(),
        pos: 0,
    };
    let mut pen = Pen::default();
    let mut out: Vec<Command> = Vec::new();
    let mut subpaths = 0usize;

    loop {
        lex.skip_separators();
        if lex.done() {
            break;
        }
        let at = lex.pos;
        let letter = lex.bytes[lex.pos];
        if !letter.is_ascii_alphabetic() {
            return Err(ParseError::UnknownCommand {
                letter: letter as char,
                at,
            });
        }
        lex.pos += 1;
        let relative = letter.is_ascii_lowercase();
        match letter.to_ascii_uppercase() {
            b'M' => {
                subpaths += 1;
                if subpaths > limits::MAX_SUBPATHS {
                    return Err(ParseError::LimitExceeded {
                        limit: "subpaths",
                        got: subpaths,
                    });
                }
                let (x, y) = lex.coord_pair(letter, relative, &pen, at)?;
                pen.move_to(x, y);
                out.push(Command::MoveTo { x, y });
                // Extra coordinate pairs after a moveto are linetos.
                while lex.has_more_arguments() {
                    let (x, y) = lex.coord_pair(letter, relative, &pen, at)?;
                    pen.line_to(x, y);
                    out.push(Command::LineTo { x, y });
                }
            }
            b'L' => loop {
                let (x, y) = lex.coord_pair(letter, relative, &pen, at)?;
                pen.line_to(x, y);
                out.push(Command::LineTo { x, y });
                if !lex.has_more_arguments() {
                    break;
                }
            },
            b'H' => loop {
                let mut x = lex.number(letter)?;
                if relative {
                    x += pen.cur.0;
                }
                check_coord(x, at)?;
                pen.line_to(x, pen.cur.1);
                out.push(Command::HorizontalLineTo { x });
                if !lex.has_more_arguments() {
                    break;
                }
            },
            b'V' => loop {
                let mut y = lex.number(letter)?;
                if relative {
                    y += pen.cur.1;
                }
                check_coord(y, at)?;
                pen.line_to(pen.cur.0, y);
                out.push(Command::VerticalLineTo { y });
                if !lex.has_more_arguments() {
                    break;
                }
            },
            b'C' => loop {
                let (x1, y1) = lex.coord_pair(letter, relative, &pen, at)?;
                let (x2, y2) = lex.coord_pair(letter, relative, &pen, at)?;
                let (x, y) = lex.coord_pair(letter, relative, &pen, at)?;
                pen.cubic_to(x2, y2, x, y);
                out.push(Command::CubicCurveTo { x1, y1, x2, y2, x, y });
                if !lex.has_more_arguments() {
                    break;
                }
            },
            b'S' => loop {
                let (x1, y1) = pen.reflected_cubic_control();
                let (x2, y2) = lex.coord_pair(letter, relative, &pen, at)?;
                let (x, y) = lex.coord_pair(letter, relative, &pen, at)?;
                pen.cubic_to(x2, y2, x, y);
                out.push(Command::CubicCurveTo { x1, y1, x2, y2, x, y });
                if !lex.has_more_arguments() {
                    break;
                }
            },
            b'Q' => loop {
                let (x1, y1) = lex.coord_pair(letter, relative, &pen, at)?;
                let (x, y) = lex.coord_pair(letter, relative, &pen, at)?;
                pen.quad_to(x1, y1, x, y);
                out.push(Command::QuadraticCurveTo { x1, y1, x, y });
                if !lex.has_more_arguments() {
                    break;
                }
            },
            b'T' => loop {
                let (x1, y1) = pen.reflected_quad_control();
                let (x, y) = lex.coord_pair(letter, relative, &pen, at)?;
                pen.quad_to(x1, y1, x, y);
                out.push(Command::QuadraticCurveTo { x1, y1, x, y });
                if !lex.has_more_arguments() {
                    break;
                }
            },
            b'A' => loop {
                let rx = lex.number(letter)?;
                let ry = lex.number(letter)?;
                let rot = lex.number(letter)?;
                let large_arc = lex.flag(letter)?;
                let sweep = lex.flag(letter)?;
                let (x, y) = lex.coord_pair(letter, relative, &pen, at)?;
                let (x0, y0) = pen.cur;
                let chain = math::arc_to_cubics(x0, y0, rx, ry, rot, large_arc, sweep, x, y);
                if chain.is_empty() {
                    // Degenerate arc draws a straight line to the endpoint.
                    out.push(Command::LineTo { x, y });
                } else {
                    for (x1, y1, x2, y2, ex, ey) in chain {
                        out.push(Command::CubicCurveTo { x1, y1, x2, y2, x: ex, y: ey });
                    }
                }
                pen.line_to(x, y);
                if !lex.has_more_arguments() {
                    break;
                }
            },
            b'Z' => {
                pen.close();
                out.push(Command::ClosePath);
            }
            _ => {
                return Err(ParseError::UnknownCommand {
                    letter: letter as char,
                    at,
                });
            }
        }
        if out.len() > limits::MAX_COMMANDS {
            return Err(ParseError::LimitExceeded {
                limit: "commands",
                got: out.len(),
            });
        }
    }
    Ok(out)
}

/// Current point, subpath start and smooth-command reflection state.
#[derive(Default)]
struct Pen {
    cur: (f32, f32),
    start: (f32, f32),
    prev_cubic_ctrl: Option<(f32, f32)>,
    prev_quad_ctrl: Option<(f32, f32)>,
}

impl Pen {
    fn move_to(&mut self, x: f32, y: f32) {
        self.cur = (x, y);
        self.start = (x, y);
        self.prev_cubic_ctrl = None;
        self.prev_quad_ctrl = None;
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.cur = (x, y);
        self.prev_cubic_ctrl = None;
        self.prev_quad_ctrl = None;
    }

    fn cubic_to(&mut self, x2: f32, y2: f32, x: f32, y: f32) {
        self.cur = (x, y);
        self.prev_cubic_ctrl = Some((x2, y2));
        self.prev_quad_ctrl = None;
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.cur = (x, y);
        self.prev_cubic_ctrl = None;
        self.prev_quad_ctrl = Some((x1, y1));
    }

    fn close(&mut self) {
        self.cur = self.start;
        self.prev_cubic_ctrl = None;
        self.prev_quad_ctrl = None;
    }

    // A smooth command without a preceding curve of the matching kind uses
    // the current point as its first control point.
    fn reflected_cubic_control(&self) -> (f32, f32) {
        match self.prev_cubic_ctrl {
            Some((cx, cy)) => (2.0 * self.cur.0 - cx, 2.0 * self.cur.1 - cy),
            None => self.cur,
        }
    }

    fn reflected_quad_control(&self) -> (f32, f32) {
        match self.prev_quad_ctrl {
            Some((cx, cy)) => (2.0 * self.cur.0 - cx, 2.0 * self.cur.1 - cy),
            None => self.cur,
        }
    }
}

struct Lexer<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Lexer<'a> {
    fn done(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    // Commas and whitespace are interchangeable separators.
    fn skip_separators(&mut self) {
        while let Some(&c) = self.bytes.get(self.pos) {
            if c == b' ' || c == b'\t' || c == b'\n' || c == b'\r' || c == b',' {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    // True when the next token starts another argument rather than a
    // command letter. A sign starts a fresh number even with no separator.
    fn has_more_arguments(&mut self) -> bool {
        self.skip_separators();
        matches!(
            self.bytes.get(self.pos).copied(),
            Some(b'0'..=b'9') | Some(b'.') | Some(b'+') | Some(b'-')
        )
    }

    /// Scan one decimal number: optional sign, digits, optional fraction,
    /// optional exponent. The position only advances on success, so error
    /// offsets always point at the offending token.
    fn number(&mut self, command: u8) -> Result<f32, ParseError> {
        self.skip_separators();
        let bytes = self.bytes;
        let start = self.pos;
        let mut i = start;
        if matches!(bytes.get(i).copied(), Some(b'+') | Some(b'-')) {
            i += 1;
        }
        let mut int_digits = 0usize;
        while matches!(bytes.get(i), Some(c) if c.is_ascii_digit()) {
            i += 1;
            int_digits += 1;
        }
        let mut frac_digits = 0usize;
        if bytes.get(i) == Some(&b'.') {
            i += 1;
            while matches!(bytes.get(i), Some(c) if c.is_ascii_digit()) {
                i += 1;
                frac_digits += 1;
            }
        }
        if int_digits == 0 && frac_digits == 0 {
            // A lone sign or dot is a malformed number; nothing at all is a
            // missing argument.
            return if i > start {
                Err(ParseError::InvalidNumber { at: start })
            } else {
                Err(ParseError::MissingArgument {
                    command: command as char,
                    at: start,
                })
            };
        }
        // Only consume an exponent marker when digits follow it.
        if matches!(bytes.get(i).copied(), Some(b'e') | Some(b'E')) {
            let mut j = i + 1;
            if matches!(bytes.get(j).copied(), Some(b'+') | Some(b'-')) {
                j += 1;
            }
            let mut exp_digits = 0usize;
            while matches!(bytes.get(j), Some(c) if c.is_ascii_digit()) {
                j += 1;
                exp_digits += 1;
            }
            if exp_digits > 0 {
                i = j;
            }
        }
        let text = std::str::from_utf8(&bytes[start..i])
            .map_err(|_| ParseError::InvalidNumber { at: start })?;
        let value: f32 = text
            .parse()
            .map_err(|_| ParseError::InvalidNumber { at: start })?;
        if !value.is_finite() {
            return Err(ParseError::InvalidNumber { at: start });
        }
        self.pos = i;
        Ok(value)
    }

    /// Arc flags are single `0`/`1` characters and may be glued to the
    /// neighboring token per the grammar.
    fn flag(&mut self, command: u8) -> Result<bool, ParseError> {
        self.skip_separators();
        let at = self.pos;
        match self.bytes.get(self.pos).copied() {
            Some(b'0') => {
                self.pos += 1;
                Ok(false)
            }
            Some(b'1') => {
                self.pos += 1;
                Ok(true)
            }
            Some(_) => Err(ParseError::InvalidArcFlag { at }),
            None => Err(ParseError::MissingArgument {
                command: command as char,
                at,
            }),
        }
    }

    /// Read an x/y pair, resolving relative coordinates against the pen.
    fn coord_pair(
        &mut self,
        command: u8,
        relative: bool,
        pen: &Pen,
        at: usize,
    ) -> Result<(f32, f32), ParseError> {
        let mut x = self.number(command)?;
        let mut y = self.number(command)?;
        if relative {
            x += pen.cur.0;
            y += pen.cur.1;
        }
        check_coord(x, at)?;
        check_coord(y, at)?;
        Ok((x, y))
    }
}

fn check_coord(v: f32, at: usize) -> Result<(), ParseError> {
    if limits::in_coord_bounds(v) {
        Ok(())
    } else {
        Err(ParseError::CoordinateOutOfBounds { at })
    }
}
