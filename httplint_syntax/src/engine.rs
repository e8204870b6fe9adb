//! Recursive-descent interpreter for `Grammar` values
//!
//! Parsing is total: malformed input is an ordinary `Err`, never a
//! panic, and every failure carries the byte offset where recognition
//! stopped. The engine is stateless and reentrant; one grammar value
//! may be applied concurrently to any number of inputs.
//!
//! Whitespace handling follows HTTP's optional-whitespace convention:
//! every rule skips leading OWS, sequences therefore tolerate OWS
//! between parts, and comma lists trim OWS around each element.
//!
//! Alternation is ordered choice without backtracking across consumed
//! input: each alternative is tried from the shared starting point and
//! must consume the whole remaining input to win, so declaration order
//! encodes precedence.

use crate::cursor::{is_digit, is_tchar, split_top_level_commas, ValueCursor};
use crate::grammar::ast::{Parsed, ParsedValue};
use crate::grammar::error::{ParseFailure, ParseResult};
use crate::grammar::Grammar;
use crate::span::Span;
use chrono::{DateTime, NaiveDateTime};

/// Nesting limit for grammar application; grammar values are finite
/// literals, so hitting this indicates a malformed grammar, not input.
const MAX_GRAMMAR_DEPTH: usize = 64;

fn is_ows_char(ch: char) -> bool {
    ch == ' ' || ch == '\t'
}

/// Apply a grammar to one raw header value.
///
/// Succeeds with the typed parse result and any unconsumed trailing
/// input; the caller decides whether trailing input is a problem.
pub fn parse(grammar: &Grammar, input: &str) -> ParseResult<Parsed> {
    let mut cursor = ValueCursor::new(input);
    cursor.skip_ows();
    let start = cursor.pos();
    let value = parse_value(grammar, &mut cursor, 0)?;
    let end = cursor.pos();
    cursor.skip_ows();
    Ok(Parsed {
        value,
        span: Span::new(start, end),
        rest: cursor.rest().to_string(),
    })
}

/// Apply a grammar and additionally require full consumption.
pub fn parse_complete(grammar: &Grammar, input: &str) -> ParseResult<Parsed> {
    let parsed = parse(grammar, input)?;
    if !parsed.rest.is_empty() {
        return Err(ParseFailure::trailing_input(&parsed.rest, parsed.span.end));
    }
    Ok(parsed)
}

fn parse_value(
    grammar: &Grammar,
    cursor: &mut ValueCursor<'_>,
    depth: usize,
) -> ParseResult<ParsedValue> {
    if depth > MAX_GRAMMAR_DEPTH {
        return Err(ParseFailure::malformed(
            "grammar nesting exceeds supported depth",
            cursor.offset(),
        ));
    }
    cursor.skip_ows();

    match grammar {
        Grammar::Token => parse_token(cursor),
        Grammar::Integer => parse_integer(cursor),
        Grammar::Anything => {
            let text = cursor.take_rest();
            Ok(ParsedValue::Opaque(
                text.trim_end_matches(is_ows_char).to_string(),
            ))
        }
        Grammar::QuotedString => parse_quoted(cursor).map(ParsedValue::Quoted),
        Grammar::HttpDate => parse_http_date(cursor),
        Grammar::EntityTag => parse_entity_tag(cursor),
        Grammar::Literal {
            text,
            case_insensitive,
        } => parse_literal(cursor, text, *case_insensitive),
        Grammar::Directive { known } => parse_directive(cursor, known, depth),
        Grammar::Sequence(parts) => {
            let mut values = Vec::with_capacity(parts.len());
            for part in parts {
                values.push(parse_value(part, cursor, depth + 1)?);
            }
            Ok(ParsedValue::Sequence(values))
        }
        Grammar::Alternation(alternatives) => parse_alternation(cursor, alternatives, depth),
        Grammar::CommaList { item, min_count } => {
            parse_comma_list(cursor, item, *min_count, depth)
        }
    }
}

fn parse_token(cursor: &mut ValueCursor<'_>) -> ParseResult<ParsedValue> {
    let start = cursor.offset();
    let text = cursor.take_while(is_tchar);
    if text.is_empty() {
        return Err(ParseFailure::expected("token", start));
    }
    Ok(ParsedValue::Token(text.to_string()))
}

fn parse_integer(cursor: &mut ValueCursor<'_>) -> ParseResult<ParsedValue> {
    let start = cursor.offset();
    let digits = cursor.take_while(is_digit);
    if digits.is_empty() {
        return Err(ParseFailure::expected("integer", start));
    }
    let value = digits
        .parse::<u64>()
        .map_err(|_| ParseFailure::malformed("integer is too large", start))?;
    Ok(ParsedValue::Integer(value))
}

fn parse_quoted(cursor: &mut ValueCursor<'_>) -> ParseResult<String> {
    let start = cursor.offset();
    if !cursor.eat(b'"') {
        return Err(ParseFailure::expected("quoted-string", start));
    }
    let mut content = String::new();
    loop {
        let mut chars = cursor.rest().chars();
        match chars.next() {
            None => {
                return Err(ParseFailure::malformed(
                    "unterminated quoted-string",
                    cursor.offset(),
                ))
            }
            Some('"') => {
                cursor.advance(1);
                return Ok(content);
            }
            Some('\\') => match chars.next() {
                None => {
                    return Err(ParseFailure::malformed(
                        "quoted-string ends with a bare backslash",
                        cursor.offset(),
                    ))
                }
                Some(escaped) => {
                    content.push(escaped);
                    cursor.advance(1 + escaped.len_utf8());
                }
            },
            Some(ch) => {
                content.push(ch);
                cursor.advance(ch.len_utf8());
            }
        }
    }
}

/// IMF-fixdate is recognized through the RFC 2822 parser; the obsolete
/// RFC 850 and asctime forms are accepted afterwards and flagged.
fn parse_http_date(cursor: &mut ValueCursor<'_>) -> ParseResult<ParsedValue> {
    let start = cursor.offset();
    let text = cursor.take_rest().trim_end_matches(is_ows_char);
    if text.is_empty() {
        return Err(ParseFailure::expected("HTTP-date", start));
    }
    if let Ok(value) = DateTime::parse_from_rfc2822(text) {
        return Ok(ParsedValue::Date {
            value,
            obsolete_format: false,
        });
    }
    // RFC 850: Sunday, 06-Nov-94 08:49:37 GMT
    if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%A, %d-%b-%y %H:%M:%S GMT") {
        return Ok(ParsedValue::Date {
            value: naive.and_utc().fixed_offset(),
            obsolete_format: true,
        });
    }
    // asctime: Sun Nov  6 08:49:37 1994
    if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%a %b %e %H:%M:%S %Y") {
        return Ok(ParsedValue::Date {
            value: naive.and_utc().fixed_offset(),
            obsolete_format: true,
        });
    }
    Err(ParseFailure::expected("HTTP-date", start))
}

fn parse_entity_tag(cursor: &mut ValueCursor<'_>) -> ParseResult<ParsedValue> {
    let start = cursor.offset();
    let weak = if cursor.rest().starts_with("W/") {
        cursor.advance(2);
        true
    } else {
        false
    };
    if !cursor.eat(b'"') {
        return Err(ParseFailure::expected("entity-tag", start));
    }
    // etagc admits no escaping, unlike quoted-string
    let opaque = cursor.take_while(|b| b != b'"').to_string();
    if !cursor.eat(b'"') {
        return Err(ParseFailure::malformed(
            "unterminated entity-tag",
            cursor.offset(),
        ));
    }
    Ok(ParsedValue::EntityTag { weak, opaque })
}

fn parse_literal(
    cursor: &mut ValueCursor<'_>,
    text: &str,
    case_insensitive: bool,
) -> ParseResult<ParsedValue> {
    let start = cursor.offset();
    let rest = cursor.rest();
    let matched = if case_insensitive {
        rest.get(..text.len())
            .map_or(false, |head| head.eq_ignore_ascii_case(text))
    } else {
        rest.starts_with(text)
    };
    if !matched {
        return Err(ParseFailure::expected(
            &format!("literal {:?}", text),
            start,
        ));
    }
    let as_written = rest[..text.len()].to_string();
    cursor.advance(text.len());
    Ok(ParsedValue::Literal(as_written))
}

fn parse_directive(
    cursor: &mut ValueCursor<'_>,
    known: &[(String, Grammar)],
    depth: usize,
) -> ParseResult<ParsedValue> {
    let start = cursor.offset();
    let name = cursor.take_while(is_tchar);
    if name.is_empty() {
        return Err(ParseFailure::expected("directive name", start));
    }
    let name = name.to_string();
    cursor.skip_ows();

    let argument = if cursor.eat(b'=') {
        cursor.skip_ows();
        let folded = name.to_ascii_lowercase();
        let value = match known.iter().find(|(known_name, _)| *known_name == folded) {
            Some((_, grammar)) => parse_value(grammar, cursor, depth + 1)?,
            None => {
                // untyped directives take token / quoted-string
                if cursor.peek() == Some(b'"') {
                    ParsedValue::Quoted(parse_quoted(cursor)?)
                } else {
                    let text = cursor.take_while(is_tchar);
                    if text.is_empty() {
                        return Err(ParseFailure::expected(
                            "directive argument",
                            cursor.offset(),
                        ));
                    }
                    ParsedValue::Token(text.to_string())
                }
            }
        };
        Some(Box::new(value))
    } else {
        None
    };

    Ok(ParsedValue::Directive { name, argument })
}

fn parse_alternation(
    cursor: &mut ValueCursor<'_>,
    alternatives: &[Grammar],
    depth: usize,
) -> ParseResult<ParsedValue> {
    let start = cursor.offset();
    let origin = cursor.clone();
    let mut reasons = Vec::with_capacity(alternatives.len());

    for alternative in alternatives {
        let mut attempt = origin.clone();
        match parse_value(alternative, &mut attempt, depth + 1) {
            Ok(value) => {
                attempt.skip_ows();
                if attempt.is_at_end() {
                    *cursor = attempt;
                    return Ok(value);
                }
                reasons.push(format!(
                    "{}: trailing input {:?}",
                    alternative.describe(),
                    attempt.rest()
                ));
            }
            Err(failure) => reasons.push(format!("{}: {}", alternative.describe(), failure)),
        }
    }

    Err(ParseFailure::no_alternative(reasons.join("; "), start))
}

fn parse_comma_list(
    cursor: &mut ValueCursor<'_>,
    item: &Grammar,
    min_count: usize,
    depth: usize,
) -> ParseResult<ParsedValue> {
    let base = cursor.offset();
    let input = cursor.take_rest();
    let mut items = Vec::new();

    for (span, raw) in split_top_level_commas(input) {
        let leading = raw.len() - raw.trim_start_matches(is_ows_char).len();
        let element = raw.trim_matches(is_ows_char);
        if element.is_empty() {
            // empty elements between commas are tolerated
            continue;
        }
        let value = parse_element(item, element, base + span.start + leading, depth + 1)?;
        items.push(value);
    }

    if items.len() < min_count {
        return Err(ParseFailure::too_few_items(min_count, items.len(), base));
    }
    Ok(ParsedValue::List(items))
}

/// Parse one list element in isolation, requiring full consumption.
fn parse_element(
    grammar: &Grammar,
    text: &str,
    base: usize,
    depth: usize,
) -> ParseResult<ParsedValue> {
    let mut cursor = ValueCursor::with_base(text, base);
    let value = parse_value(grammar, &mut cursor, depth)?;
    cursor.skip_ows();
    if !cursor.is_at_end() {
        return Err(ParseFailure::trailing_input(cursor.rest(), cursor.offset()));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::{
        alternation, anything, comma_list, comma_list1, directive_with, entity_tag, http_date,
        integer, literal, quoted_string, sequence, token,
    };
    use assert_matches::assert_matches;

    #[test]
    fn token_parses_and_reports_trailing_input() {
        let parsed = parse(&token(), "gzip;q=1").unwrap();
        assert_eq!(parsed.value, ParsedValue::Token("gzip".into()));
        assert_eq!(parsed.rest, ";q=1");
        assert_eq!(parsed.span, Span::new(0, 4));
    }

    #[test]
    fn parse_complete_rejects_trailing_input() {
        let failure = parse_complete(&token(), "gzip;q=1").unwrap_err();
        assert_matches!(failure, ParseFailure::TrailingInput { .. });
    }

    #[test]
    fn integer_rejects_non_digits_and_overflow() {
        assert_eq!(
            parse(&integer(), "  1234").unwrap().value,
            ParsedValue::Integer(1234)
        );
        assert_matches!(
            parse(&integer(), "abc").unwrap_err(),
            ParseFailure::Expected { .. }
        );
        assert_matches!(
            parse(&integer(), "99999999999999999999999").unwrap_err(),
            ParseFailure::Malformed { .. }
        );
    }

    #[test]
    fn comma_list_skips_empty_elements() {
        let parsed = parse(&comma_list1(integer()), "1, 2,,3").unwrap();
        assert_eq!(
            parsed.value,
            ParsedValue::List(vec![
                ParsedValue::Integer(1),
                ParsedValue::Integer(2),
                ParsedValue::Integer(3),
            ])
        );
    }

    #[test]
    fn comma_list_min_count_one_rejects_empty_input() {
        let failure = parse(&comma_list1(integer()), "").unwrap_err();
        assert_matches!(
            failure,
            ParseFailure::TooFewItems {
                min_count: 1,
                found: 0,
                ..
            }
        );
        // commas with nothing between them are still an empty list
        let failure = parse(&comma_list1(integer()), " , ,").unwrap_err();
        assert_matches!(failure, ParseFailure::TooFewItems { .. });
    }

    #[test]
    fn comma_list_min_count_zero_accepts_empty_input() {
        let parsed = parse(&comma_list(token()), "").unwrap();
        assert_eq!(parsed.value, ParsedValue::List(vec![]));
    }

    #[test]
    fn comma_list_failure_offset_points_into_original_value() {
        let failure = parse(&comma_list1(integer()), "1, x, 3").unwrap_err();
        assert_eq!(failure.offset(), 3);
    }

    #[test]
    fn alternation_falls_through_to_later_branch() {
        // entity-tag is tried before HTTP-date; a date still parses
        let grammar = alternation(vec![entity_tag(), http_date()]);
        let parsed = parse(&grammar, "Sun, 06 Nov 1994 08:49:37 GMT").unwrap();
        assert_matches!(
            parsed.value,
            ParsedValue::Date {
                obsolete_format: false,
                ..
            }
        );

        let parsed = parse(&grammar, "W/\"xyzzy\"").unwrap();
        assert_eq!(
            parsed.value,
            ParsedValue::EntityTag {
                weak: true,
                opaque: "xyzzy".into()
            }
        );
    }

    #[test]
    fn alternation_wildcard_wins_over_list_branch() {
        let grammar = alternation(vec![literal("*"), comma_list1(entity_tag())]);
        let parsed = parse(&grammar, "*").unwrap();
        assert_eq!(parsed.value, ParsedValue::Literal("*".into()));

        let parsed = parse(&grammar, "\"a\", W/\"b\"").unwrap();
        assert_eq!(
            parsed.value,
            ParsedValue::List(vec![
                ParsedValue::EntityTag {
                    weak: false,
                    opaque: "a".into()
                },
                ParsedValue::EntityTag {
                    weak: true,
                    opaque: "b".into()
                },
            ])
        );
    }

    #[test]
    fn alternation_reports_every_branch_on_failure() {
        let grammar = alternation(vec![literal("*"), comma_list1(entity_tag())]);
        let failure = parse(&grammar, "not-a-tag").unwrap_err();
        assert_matches!(failure, ParseFailure::NoAlternative { .. });
        let message = failure.to_string();
        assert!(message.contains("literal"));
        assert!(message.contains("entity-tag"));
    }

    #[test]
    fn sequence_tolerates_whitespace_between_parts() {
        let grammar = sequence(vec![token(), literal("/"), token(), anything()]);
        let parsed = parse(&grammar, "text / html;q=0.9").unwrap();
        assert_eq!(
            parsed.value,
            ParsedValue::Sequence(vec![
                ParsedValue::Token("text".into()),
                ParsedValue::Literal("/".into()),
                ParsedValue::Token("html".into()),
                ParsedValue::Opaque(";q=0.9".into()),
            ])
        );
        assert!(parsed.rest.is_empty());
    }

    #[test]
    fn quoted_string_resolves_escapes() {
        let parsed = parse(&quoted_string(), r#""a\"b,c""#).unwrap();
        assert_eq!(parsed.value, ParsedValue::Quoted("a\"b,c".into()));

        let failure = parse(&quoted_string(), "\"unterminated").unwrap_err();
        assert_matches!(failure, ParseFailure::Malformed { .. });
    }

    #[test]
    fn http_date_flags_obsolete_formats() {
        let imf = parse(&http_date(), "Sun, 06 Nov 1994 08:49:37 GMT").unwrap();
        let rfc850 = parse(&http_date(), "Sunday, 06-Nov-94 08:49:37 GMT").unwrap();
        let asctime = parse(&http_date(), "Sun Nov  6 08:49:37 1994").unwrap();

        let timestamps: Vec<i64> = [&imf, &rfc850, &asctime]
            .iter()
            .map(|parsed| match parsed.value {
                ParsedValue::Date { value, .. } => value.timestamp(),
                _ => panic!("expected a date"),
            })
            .collect();
        assert_eq!(timestamps[0], timestamps[1]);
        assert_eq!(timestamps[0], timestamps[2]);

        assert_matches!(
            imf.value,
            ParsedValue::Date {
                obsolete_format: false,
                ..
            }
        );
        assert_matches!(
            rfc850.value,
            ParsedValue::Date {
                obsolete_format: true,
                ..
            }
        );
        assert_matches!(
            asctime.value,
            ParsedValue::Date {
                obsolete_format: true,
                ..
            }
        );
    }

    #[test]
    fn http_date_rejects_garbage() {
        assert_matches!(
            parse(&http_date(), "yesterday").unwrap_err(),
            ParseFailure::Expected { .. }
        );
    }

    #[test]
    fn directive_list_parses_typed_arguments() {
        let grammar = comma_list1(directive_with(vec![
            ("max-age", integer()),
            ("no-cache", quoted_string()),
        ]));
        let parsed = parse(&grammar, "max-age=60, no-cache, private=\"x\"").unwrap();
        let items = parsed.value.as_list().unwrap();
        assert_eq!(
            items[0],
            ParsedValue::Directive {
                name: "max-age".into(),
                argument: Some(Box::new(ParsedValue::Integer(60))),
            }
        );
        assert_eq!(
            items[1],
            ParsedValue::Directive {
                name: "no-cache".into(),
                argument: None,
            }
        );
        assert_eq!(
            items[2],
            ParsedValue::Directive {
                name: "private".into(),
                argument: Some(Box::new(ParsedValue::Quoted("x".into()))),
            }
        );
    }

    #[test]
    fn directive_typed_argument_must_match_its_grammar() {
        let grammar = comma_list1(directive_with(vec![("max-age", integer())]));
        assert!(parse(&grammar, "max-age=abc").is_err());
        // directive names match case-insensitively
        let parsed = parse(&grammar, "Max-Age=60").unwrap();
        assert_eq!(
            parsed.value.as_list().unwrap()[0],
            ParsedValue::Directive {
                name: "Max-Age".into(),
                argument: Some(Box::new(ParsedValue::Integer(60))),
            }
        );
    }

    #[test]
    fn quoted_commas_do_not_split_directive_lists() {
        let grammar = comma_list1(directive_with(vec![]));
        let parsed = parse(&grammar, "no-cache=\"set-cookie,age\", private").unwrap();
        assert_eq!(parsed.value.as_list().unwrap().len(), 2);
    }

    #[test]
    fn anything_accepts_arbitrary_bytes() {
        let parsed = parse(&anything(), "  100-continue, weird stuff ").unwrap();
        assert_eq!(
            parsed.value,
            ParsedValue::Opaque("100-continue, weird stuff".into())
        );
        assert!(parsed.rest.is_empty());
    }
}
