//! Placeholder substitution for transformed sources.
//!
//! Transformed sources reference answers with `${name}` syntax:
//!
//! - `${name}` is replaced with the answer's printed form
//! - `$${name}` produces a literal `${name}` in the output
//!
//! A placeholder naming an answer that was never committed fails the
//! substitution; the generation executor turns that into a fatal error.

use crate::answers::Answers;

/// A parsed piece of a transformed source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text, emitted unchanged.
    Literal(String),
    /// `${name}` reference to an answer.
    Placeholder(String),
}

/// Split `input` into literal and placeholder segments.
pub fn parse_segments(input: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '$' {
            literal.push(c);
            continue;
        }
        match chars.peek() {
            // $${...} escapes to a literal ${...}
            Some('$') => {
                chars.next();
                if chars.peek() == Some(&'{') {
                    literal.push('$');
                    while let Some(&next) = chars.peek() {
                        chars.next();
                        literal.push(next);
                        if next == '}' {
                            break;
                        }
                    }
                } else {
                    literal.push('$');
                }
            }
            Some('{') => {
                chars.next();
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                let mut name = String::new();
                while let Some(&next) = chars.peek() {
                    chars.next();
                    if next == '}' {
                        break;
                    }
                    name.push(next);
                }
                segments.push(Segment::Placeholder(name));
            }
            _ => literal.push(c),
        }
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    segments
}

/// Substitute every placeholder with its answer's printed form.
///
/// Fails with a message naming the first placeholder that has no committed
/// answer.
pub fn substitute(input: &str, answers: &Answers) -> Result<String, String> {
    let mut result = String::with_capacity(input.len());
    for segment in parse_segments(input) {
        match segment {
            Segment::Literal(text) => result.push_str(&text),
            Segment::Placeholder(name) => match answers.get(&name) {
                Some(answer) => result.push_str(&answer.printed()),
                None => return Err(format!("unresolved placeholder ${{{name}}}")),
            },
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::Answer;

    fn sample_answers() -> Answers {
        let mut answers = Answers::new();
        answers
            .commit("app_name", Answer::Text("shop".into()))
            .unwrap();
        answers.commit("database", Answer::Choice(1)).unwrap();
        answers.commit("docker", Answer::Bool(true)).unwrap();
        answers
    }

    #[test]
    fn parse_literal_only() {
        assert_eq!(
            parse_segments("fn main() {}"),
            vec![Segment::Literal("fn main() {}".into())]
        );
    }

    #[test]
    fn parse_placeholder_with_surrounding_text() {
        assert_eq!(
            parse_segments("name = \"${app_name}\""),
            vec![
                Segment::Literal("name = \"".into()),
                Segment::Placeholder("app_name".into()),
                Segment::Literal("\"".into()),
            ]
        );
    }

    #[test]
    fn parse_adjacent_placeholders() {
        assert_eq!(
            parse_segments("${a}${b}"),
            vec![
                Segment::Placeholder("a".into()),
                Segment::Placeholder("b".into()),
            ]
        );
    }

    #[test]
    fn parse_escaped_placeholder_stays_literal() {
        assert_eq!(
            parse_segments("$${HOME}"),
            vec![Segment::Literal("${HOME}".into())]
        );
    }

    #[test]
    fn parse_bare_dollar_is_literal() {
        assert_eq!(
            parse_segments("costs $5"),
            vec![Segment::Literal("costs $5".into())]
        );
    }

    #[test]
    fn substitute_uses_printed_forms() {
        let result = substitute(
            "app=${app_name} db=${database} docker=${docker}",
            &sample_answers(),
        )
        .unwrap();
        assert_eq!(result, "app=shop db=2 docker=y");
    }

    #[test]
    fn substitute_leaves_literal_text_intact() {
        let source = "# ${app_name}\nplain line\n$${keep}\n";
        let result = substitute(source, &sample_answers()).unwrap();
        assert_eq!(result, "# shop\nplain line\n${keep}\n");
    }

    #[test]
    fn substitute_fails_on_unknown_placeholder() {
        let err = substitute("${missing}", &sample_answers()).unwrap_err();
        assert!(err.contains("${missing}"));
    }
}
