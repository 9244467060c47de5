//! Template parsing and substitution.
//! Two passes over the raw template text: placeholder substitution
//! (`{name}` / `{name:spec}`, with `{{`/`}}` escapes and prefix-aligned
//! multi-line placement) and the conditional block pass
//! (`<?name?body?>`, kept or stripped on the variable's truthiness).

use crate::context::Context;
use crate::error::{NfoError, NfoResult};
use crate::formatter;
use crate::value::{Scalar, Value};
use regex::Regex;
use std::sync::LazyLock;

// Non-greedy body capture: the first `?>` terminates the block, so
// nested conditional blocks are not supported.
static CONDITIONAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<\?(\w+)\?(.*?)\?>").unwrap());

/// Substitutes every placeholder in `template` against `context`.
///
/// Literal braces are escaped by doubling. A sequence-valued result is
/// joined with a newline plus the text already emitted on the current
/// output line before the placeholder, so continuation lines align under
/// the column where the placeholder started.
///
/// # Errors
/// * `NfoError::UndefinedVariable` if a placeholder names a variable
///   absent from the context
/// * `NfoError::TemplateError` on unclosed placeholders or stray braces
pub fn substitute(template: &str, context: &Context) -> NfoResult<String> {
    let mut out = String::new();
    let mut chars = template.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '{' => {
                if chars.peek() == Some(&'{') {
                    chars.next();
                    out.push('{');
                    continue;
                }
                let mut token = String::new();
                let mut closed = false;
                for c in chars.by_ref() {
                    match c {
                        '}' => {
                            closed = true;
                            break;
                        }
                        '{' => {
                            return Err(NfoError::TemplateError(
                                "nested '{' inside placeholder".to_string(),
                            ));
                        }
                        _ => token.push(c),
                    }
                }
                if !closed {
                    return Err(NfoError::TemplateError(format!(
                        "unclosed placeholder {{{}",
                        token
                    )));
                }
                expand_placeholder(&token, context, &mut out)?;
            }
            '}' => {
                if chars.peek() == Some(&'}') {
                    chars.next();
                    out.push('}');
                    continue;
                }
                return Err(NfoError::TemplateError("single '}' in template".to_string()));
            }
            _ => out.push(ch),
        }
    }

    Ok(out)
}

/// Resolves one `name[:spec]` token and appends its rendering to `out`.
fn expand_placeholder(token: &str, context: &Context, out: &mut String) -> NfoResult<()> {
    let (name, spec) = match token.split_once(':') {
        Some((name, spec)) => (name, Some(spec)),
        None => (token, None),
    };
    if name.is_empty() {
        return Err(NfoError::TemplateError(format!("empty placeholder name in {{{}}}", token)));
    }

    let value = context
        .get(name)
        .cloned()
        .ok_or_else(|| NfoError::UndefinedVariable { name: name.to_string() })?;
    let value = match spec {
        Some(spec) => formatter::apply(value, spec)?,
        None => value,
    };

    // Alignment prefix: whatever this output line holds so far.
    let prefix = current_line_prefix(out).to_string();
    match value {
        Value::Scalar(scalar) => out.push_str(&scalar.to_string()),
        Value::Sequence(items) => {
            let sep = format!("\n{}", prefix);
            let lines: Vec<String> = items.iter().map(Scalar::to_string).collect();
            out.push_str(&lines.join(&sep));
        }
        Value::Nested(groups) => {
            let sep = format!("\n{}", prefix);
            let blocks: Vec<String> = groups
                .iter()
                .map(|group| {
                    group.iter().map(Scalar::to_string).collect::<Vec<_>>().join(&sep)
                })
                .collect();
            out.push_str(&blocks.join(&sep));
        }
        // Image refs must pass through bbimg before they can be placed.
        other => {
            return Err(NfoError::TypeMismatch {
                spec: "substitution",
                actual: other.type_name(),
            });
        }
    }
    Ok(())
}

fn current_line_prefix(out: &str) -> &str {
    match out.rfind('\n') {
        Some(idx) => &out[idx + 1..],
        None => out,
    }
}

/// Evaluates every `<?name?body?>` block in already-substituted text.
///
/// The body is kept when `name` is truthy in the original context and
/// stripped otherwise. Names are looked up against the caller-supplied
/// context, never against the rendered text.
///
/// # Errors
/// * `NfoError::UndefinedVariable` if a block names a variable absent
///   from the context
pub fn apply_conditionals(text: &str, context: &Context) -> NfoResult<String> {
    let mut out = String::new();
    let mut last = 0;

    for caps in CONDITIONAL.captures_iter(text) {
        let span = caps.get(0).map(|m| (m.start(), m.end())).unwrap_or((last, last));
        let name = &caps[1];
        let value = context
            .get(name)
            .ok_or_else(|| NfoError::UndefinedVariable { name: name.to_string() })?;

        out.push_str(&text[last..span.0]);
        if value.truthy() {
            out.push_str(&caps[2]);
        }
        last = span.1;
    }
    out.push_str(&text[last..]);

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(entries: Vec<(&str, Value)>) -> Context {
        entries.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
    }

    #[test]
    fn test_escaped_braces() {
        let ctx = context(vec![("x", Value::from("v"))]);
        assert_eq!(substitute("{{x}} {x}", &ctx).unwrap(), "{x} v");
    }

    #[test]
    fn test_unclosed_placeholder() {
        let ctx = context(vec![]);
        assert!(matches!(substitute("{name", &ctx), Err(NfoError::TemplateError(_))));
        assert!(matches!(substitute("oops }", &ctx), Err(NfoError::TemplateError(_))));
    }

    #[test]
    fn test_sequence_aligns_under_placeholder_column() {
        let ctx = context(vec![(
            "t",
            Value::Sequence(vec![Scalar::from("A"), Scalar::from("B")]),
        )]);
        assert_eq!(substitute("  {t}", &ctx).unwrap(), "  A\n  B");
    }

    #[test]
    fn test_nested_sequence_flattens_with_alignment() {
        let ctx = context(vec![(
            "tracks",
            Value::Nested(vec![
                vec![Scalar::from("a1"), Scalar::from("a2")],
                vec![Scalar::from("b1")],
            ]),
        )]);
        assert_eq!(substitute("> {tracks}", &ctx).unwrap(), "> a1\n> a2\n> b1");
    }

    #[test]
    fn test_conditional_kept_and_stripped() {
        let ctx = context(vec![("x", Value::from(3_i64)), ("y", Value::from(0_i64))]);
        assert_eq!(apply_conditionals("<?x?Yes?>", &ctx).unwrap(), "Yes");
        assert_eq!(apply_conditionals("<?y?Yes?>", &ctx).unwrap(), "");
    }

    #[test]
    fn test_conditional_undefined_name_is_fatal() {
        let ctx = context(vec![]);
        assert!(matches!(
            apply_conditionals("<?missing?body?>", &ctx),
            Err(NfoError::UndefinedVariable { .. })
        ));
    }
}
