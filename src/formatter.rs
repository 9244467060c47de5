//! The format-spec dispatcher for placeholder values.
//! Implements the closed set of custom format specs (boolean tags, `len`,
//! `bbimg`, `layout`, wrap and center) plus chaining, with a minimal
//! generic fallback for plain width/alignment specs. Spec matching is an
//! explicit priority list: chain split first, then the fixed patterns,
//! then the generic grammar; anything else is rejected.

use crate::error::{NfoError, NfoResult};
use crate::value::{ImageRef, Scalar, Value};
use regex::Regex;
use std::sync::LazyLock;

static LAYOUT_SPEC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^layout,(\d+)x(\d+)x(\d+)$").unwrap());
static WRAP_SPEC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^>>(\d+)x(\d+)$").unwrap());
static CENTER_SPEC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\^>(\d+)x(\d+)$").unwrap());
static GENERIC_SPEC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:(.)?([<^>]))?(0)?([0-9]+)?$").unwrap());

fn text(s: String) -> Value {
    Value::Scalar(Scalar::Str(s))
}

/// Applies a format spec (possibly a `:`-chained pipeline) to a value.
///
/// Each chained stage receives the previous stage's output, so e.g.
/// `bbimg:layout,2x2x0` first converts image refs to BBCode tags and
/// then lays the resulting sequence out in a 2x2 grid.
///
/// # Arguments
/// * `value` - The resolved context value
/// * `spec` - A single spec token or a `:`-separated chain
///
/// # Returns
/// * `NfoResult<Value>` - The formatted value; a `Scalar` substitutes
///   verbatim, a sequence triggers prefix-aligned multi-line placement
pub fn apply(value: Value, spec: &str) -> NfoResult<Value> {
    if spec.contains(':') {
        let mut value = value;
        for stage in spec.split(':') {
            value = apply(value, stage)?;
        }
        return Ok(value);
    }
    match spec {
        "true" | "!false" => Ok(text(if value.truthy() { "1" } else { "0" }.to_string())),
        "false" | "!true" => Ok(text(if value.truthy() { "0" } else { "1" }.to_string())),
        "len" => length(&value),
        "bbimg" => bbimg(value),
        _ => {
            if let Some(caps) = LAYOUT_SPEC.captures(spec) {
                let w = parse_num(&caps[1], spec)?;
                let h = parse_num(&caps[2], spec)?;
                let spacing = parse_num(&caps[3], spec)?;
                layout(value, w, h, spacing, spec)
            } else if let Some(caps) = WRAP_SPEC.captures(spec) {
                wrap(value, parse_num(&caps[1], spec)?, parse_num(&caps[2], spec)?)
            } else if let Some(caps) = CENTER_SPEC.captures(spec) {
                center(value, parse_num(&caps[1], spec)?, parse_num(&caps[2], spec)?)
            } else {
                generic(value, spec)
            }
        }
    }
}

// The grammar only bounds dimensions to \d+, so a value can still
// exceed usize.
fn parse_num(digits: &str, spec: &str) -> NfoResult<usize> {
    digits
        .parse()
        .map_err(|_| NfoError::InvalidFormatSpec { spec: spec.to_string() })
}

/// `len`: element count of a sequence as a decimal string.
fn length(value: &Value) -> NfoResult<Value> {
    let count = match value {
        Value::Sequence(items) => items.len(),
        Value::Images(items) => items.len(),
        Value::Nested(groups) => groups.len(),
        other => {
            return Err(NfoError::TypeMismatch { spec: "len", actual: other.type_name() });
        }
    };
    Ok(text(count.to_string()))
}

/// `bbimg`: BBCode image markup for one or more image references.
/// Bare URL strings double as both the link target and the thumb source.
/// A single result collapses to a scalar so it never multi-line joins.
fn bbimg(value: Value) -> NfoResult<Value> {
    let refs: Vec<ImageRef> = match value {
        Value::Scalar(Scalar::Str(s)) => vec![ImageRef { url: s.clone(), src: s }],
        Value::Image(image) => vec![image],
        Value::Images(images) => images,
        Value::Sequence(items) => items
            .into_iter()
            .map(|item| match item {
                Scalar::Str(s) => Ok(ImageRef { url: s.clone(), src: s }),
                other => Err(NfoError::TypeMismatch {
                    spec: "bbimg",
                    actual: Value::Scalar(other).type_name(),
                }),
            })
            .collect::<NfoResult<_>>()?,
        other => {
            return Err(NfoError::TypeMismatch { spec: "bbimg", actual: other.type_name() });
        }
    };

    let mut tags: Vec<Scalar> = refs
        .into_iter()
        .map(|image| Scalar::Str(format!("[URL={}][IMG]{}[/IMG][/URL]", image.url, image.src)))
        .collect();

    if tags.len() == 1 {
        return Ok(Value::Scalar(tags.remove(0)));
    }
    Ok(Value::Sequence(tags))
}

/// `layout,WxHxS`: lays a flat sequence out as a row-major grid.
/// Items within a row are joined by `spacing` spaces, rows by
/// `spacing + 1` newlines (`spacing` blank lines between rows).
/// Grids need at least one column and one row.
fn layout(value: Value, w: usize, h: usize, spacing: usize, spec: &str) -> NfoResult<Value> {
    let expected = w
        .checked_mul(h)
        .filter(|&count| count > 0)
        .ok_or_else(|| NfoError::InvalidFormatSpec { spec: spec.to_string() })?;

    let items: Vec<String> = match value {
        Value::Scalar(Scalar::Str(s)) => vec![s],
        Value::Sequence(items) => items.iter().map(Scalar::to_string).collect(),
        other => {
            return Err(NfoError::TypeMismatch { spec: "layout", actual: other.type_name() });
        }
    };
    if items.len() != expected {
        return Err(NfoError::LayoutCountMismatch { expected, actual: items.len() });
    }

    let item_sep = " ".repeat(spacing);
    let row_sep = "\n".repeat(spacing + 1);
    let rows: Vec<String> = items.chunks(w).map(|row| row.join(&item_sep)).collect();
    Ok(text(rows.join(&row_sep)))
}

/// `>>IxW`: indent-aware wrap.
/// Sequences join with a newline plus `indent` spaces; a scalar string
/// is word-wrapped to `width` columns with the same continuation prefix.
/// Nested sequences only ever carry a single inner group; anything else
/// would silently drop data, so it is rejected.
fn wrap(value: Value, indent: usize, width: usize) -> NfoResult<Value> {
    let prefix = " ".repeat(indent);
    match value {
        Value::Nested(groups) => {
            if groups.len() != 1 {
                return Err(NfoError::TypeMismatch {
                    spec: "wrap (>>)",
                    actual: "a multi-group nested sequence",
                });
            }
            let lines: Vec<String> = groups[0].iter().map(Scalar::to_string).collect();
            Ok(text(lines.join(&format!("\n{}", prefix))))
        }
        Value::Sequence(items) => {
            let lines: Vec<String> = items.iter().map(Scalar::to_string).collect();
            Ok(text(lines.join(&format!("\n{}", prefix))))
        }
        Value::Scalar(Scalar::Str(s)) => {
            let options = textwrap::Options::new(width).subsequent_indent(&prefix);
            Ok(text(textwrap::fill(&s, options)))
        }
        other => Err(NfoError::TypeMismatch { spec: "wrap (>>)", actual: other.type_name() }),
    }
}

/// `^>CxW`: word-wrap a scalar string to `wrap_width` columns and center
/// each resulting line within `center_width` columns (odd space right).
fn center(value: Value, center_width: usize, wrap_width: usize) -> NfoResult<Value> {
    let Value::Scalar(Scalar::Str(s)) = value else {
        return Err(NfoError::TypeMismatch { spec: "center (^>)", actual: value.type_name() });
    };
    let lines: Vec<String> = textwrap::wrap(&s, wrap_width)
        .iter()
        .map(|line| format!("{:^width$}", line, width = center_width))
        .collect();
    Ok(text(lines.join("\n")))
}

/// Generic fallback: plain conversion, `[fill][<^>]width` alignment, or
/// zero-padded integer width. Applies to scalars only; any spec outside
/// this grammar is an error.
fn generic(value: Value, spec: &str) -> NfoResult<Value> {
    let Some(caps) = GENERIC_SPEC.captures(spec) else {
        return Err(NfoError::InvalidFormatSpec { spec: spec.to_string() });
    };
    let Value::Scalar(scalar) = value else {
        return Err(NfoError::TypeMismatch { spec: "format", actual: value.type_name() });
    };

    let fill = caps.get(1).map(|m| m.as_str().chars().next().unwrap_or(' ')).unwrap_or(' ');
    let align = caps.get(2).map(|m| m.as_str());
    let zero = caps.get(3).is_some();
    let width = match caps.get(4) {
        Some(m) => Some(parse_num(m.as_str(), spec)?),
        None => None,
    };

    let Some(width) = width else {
        // No width means nothing to do beyond plain conversion.
        return Ok(text(scalar.to_string()));
    };

    if zero {
        if let Scalar::Int(n) = scalar {
            return Ok(text(format!("{:0width$}", n, width = width)));
        }
    }

    let rendered = scalar.to_string();
    let align = align.unwrap_or(match scalar {
        // Numbers right-align by default, text left-aligns.
        Scalar::Int(_) => ">",
        _ => "<",
    });
    Ok(text(pad(&rendered, fill, align, width)))
}

fn pad(s: &str, fill: char, align: &str, width: usize) -> String {
    let len = s.chars().count();
    if len >= width {
        return s.to_string();
    }
    let margin = width - len;
    let (left, right) = match align {
        ">" => (margin, 0),
        "^" => (margin / 2, margin - margin / 2),
        _ => (0, margin),
    };
    let mut out = String::with_capacity(width);
    out.extend(std::iter::repeat(fill).take(left));
    out.push_str(s);
    out.extend(std::iter::repeat(fill).take(right));
    out
}
