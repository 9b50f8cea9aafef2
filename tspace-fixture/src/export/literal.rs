//! Rust-literal dump of tangent-space results
//!
//! Each result becomes one `Result::new(..),` line, so the whole dump can be
//! pasted into an array literal of a test that compares against it.

use glam::Vec3;
use std::io::Write;
use std::str::FromStr;

use super::FLOAT_PRECISION;
use crate::error::FixtureError;
use crate::query::TangentResult;

const PREFIX: &str = "Result::new(";
const SUFFIX: &str = "),";

/// Write one literal line per result, in slice order
pub fn write_results<W: Write>(
    results: &[TangentResult],
    out: &mut W,
) -> Result<(), FixtureError> {
    for r in results {
        writeln!(
            out,
            "{PREFIX}{}, {}, {:.prec$}, {:.prec$}, {}, {}, {}{SUFFIX}",
            Vec3Literal(r.tangent),
            Vec3Literal(r.bi_tangent),
            r.mag_s,
            r.mag_t,
            r.is_orientation_preserving,
            r.face,
            r.vert,
            prec = FLOAT_PRECISION
        )?;
    }
    Ok(())
}

/// Parse a dump written by [`write_results`]
///
/// Blank lines are skipped; errors carry the 1-based line number.
pub fn parse_results(text: &str) -> Result<Vec<TangentResult>, FixtureError> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| parse_line(line, i + 1))
        .collect()
}

impl FromStr for TangentResult {
    type Err = FixtureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_line(s, 1)
    }
}

/// `[x, y, z]` with fixed precision
struct Vec3Literal(Vec3);

impl std::fmt::Display for Vec3Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let v = self.0;
        write!(
            f,
            "[{:.prec$}, {:.prec$}, {:.prec$}]",
            v.x,
            v.y,
            v.z,
            prec = FLOAT_PRECISION
        )
    }
}

fn parse_line(line: &str, line_no: usize) -> Result<TangentResult, FixtureError> {
    let err = |message: &str| FixtureError::parse(line_no, message);

    let inner = line
        .trim()
        .strip_prefix(PREFIX)
        .and_then(|s| s.strip_suffix(SUFFIX))
        .ok_or_else(|| err("expected `Result::new(...),`"))?;

    let (tangent, rest) = split_vec3(inner, line_no)?;
    let rest = rest
        .strip_prefix(',')
        .ok_or_else(|| err("expected ',' after tangent"))?;
    let (bi_tangent, rest) = split_vec3(rest.trim_start(), line_no)?;
    let rest = rest
        .strip_prefix(',')
        .ok_or_else(|| err("expected ',' after bitangent"))?;

    let fields: Vec<&str> = rest.split(',').map(str::trim).collect();
    let [mag_s, mag_t, preserving, face, vert] = fields[..] else {
        return Err(err("expected magS, magT, orientation, face and vert"));
    };

    Ok(TangentResult::new(
        tangent,
        bi_tangent,
        parse_field(mag_s, "magS", line_no)?,
        parse_field(mag_t, "magT", line_no)?,
        parse_field(preserving, "orientation flag", line_no)?,
        parse_field(face, "face", line_no)?,
        parse_field(vert, "vert", line_no)?,
    ))
}

/// Split a leading `[x, y, z]` off `s`
fn split_vec3(s: &str, line_no: usize) -> Result<(Vec3, &str), FixtureError> {
    let body = s
        .strip_prefix('[')
        .ok_or_else(|| FixtureError::parse(line_no, "expected '['"))?;
    let end = body
        .find(']')
        .ok_or_else(|| FixtureError::parse(line_no, "unterminated vector"))?;

    let components: Vec<&str> = body[..end].split(',').map(str::trim).collect();
    let [x, y, z] = components[..] else {
        return Err(FixtureError::parse(line_no, "vector needs 3 components"));
    };

    let v = Vec3::new(
        parse_field(x, "x", line_no)?,
        parse_field(y, "y", line_no)?,
        parse_field(z, "z", line_no)?,
    );
    Ok((v, &body[end + 1..]))
}

fn parse_field<T: FromStr>(token: &str, name: &str, line_no: usize) -> Result<T, FixtureError> {
    token
        .parse()
        .map_err(|_| FixtureError::parse(line_no, format!("invalid {name} '{token}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TangentResult {
        TangentResult::new(
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::new(0.0, 0.70710677, 0.70710677),
            1.0,
            0.5,
            true,
            3,
            2,
        )
    }

    fn dump(results: &[TangentResult]) -> String {
        let mut buf = Vec::new();
        write_results(results, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn formats_fixed_point_literal() {
        assert_eq!(
            dump(&[sample()]),
            "Result::new([0.00000000, 0.00000000, -1.00000000], \
             [0.00000000, 0.70710677, 0.70710677], 1.00000000, 0.50000000, true, 3, 2),\n"
        );
    }

    #[test]
    fn never_uses_scientific_notation() {
        let mut r = sample();
        r.mag_s = 1.0e-12;
        r.mag_t = 12345.0;
        r.is_orientation_preserving = false;

        let text = dump(&[r]);
        assert!(!text.contains("e-") && !text.contains("e+"), "{text}");
        assert!(text.contains(", 0.00000000, 12345.00000000, false, 3, 2),"));
    }

    #[test]
    fn parses_back_written_lines() {
        let mut second = sample();
        second.face = 23;
        second.vert = 0;
        second.is_orientation_preserving = false;

        let parsed = parse_results(&dump(&[sample(), second])).unwrap();
        assert_eq!(parsed, vec![sample(), second]);
    }

    #[test]
    fn from_str_reads_single_line() {
        let line = "Result::new([1.0, 0.0, 0.0], [0.0, 1.0, 0.0], 2.0, 3.0, false, 4, 1),";
        let r: TangentResult = line.parse().unwrap();
        assert_eq!(r.tangent, Vec3::X);
        assert_eq!(r.bi_tangent, Vec3::Y);
        assert_eq!(r.mag_s, 2.0);
        assert_eq!(r.mag_t, 3.0);
        assert!(!r.is_orientation_preserving);
        assert_eq!((r.face, r.vert), (4, 1));
    }

    #[test]
    fn reports_line_of_malformed_entry() {
        let text = "\
Result::new([1.0, 0.0, 0.0], [0.0, 1.0, 0.0], 2.0, 3.0, false, 4, 1),

Result::new([1.0, 0.0], [0.0, 1.0, 0.0], 2.0, 3.0, false, 4, 1),
";
        match parse_results(text) {
            Err(FixtureError::Parse { line, message }) => {
                assert_eq!(line, 3);
                assert!(message.contains("3 components"), "{message}");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_bad_orientation_flag() {
        let line = "Result::new([1.0, 0.0, 0.0], [0.0, 1.0, 0.0], 2.0, 3.0, yes, 4, 1),";
        assert!(line.parse::<TangentResult>().is_err());
    }
}
