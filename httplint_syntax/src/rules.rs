//! Named value grammars for the registered header fields
//!
//! Each function builds the grammar one header's table entry refers
//! to, composed from the combinators in [`crate::grammar`]. Rules that
//! would need a full foreign-RFC grammar (URIs, language tags, product
//! comments) are deliberate approximations over `Token`/`Anything`:
//! the registry contract requires a grammar reference for the value,
//! not RFC-complete recognition of sub-syntax this crate does not own.
//!
//! Every alternation documents its precedence at the definition site;
//! ordered choice makes declaration order load-bearing.

use crate::grammar::{
    alternation, anything, comma_list, comma_list1, directive_with, entity_tag, http_date,
    integer, literal, literal_ci, quoted_string, sequence, token, Grammar,
};

/// A bare token value
pub fn token_value() -> Grammar {
    token()
}

/// A non-negative integer value (Age, Content-Length, Max-Forwards)
pub fn integer_value() -> Grammar {
    integer()
}

/// An opaque value this checker does not interpret (Expect, From)
pub fn opaque_value() -> Grammar {
    anything()
}

/// HTTP-date (Date, Expires, If-Modified-Since, ...)
pub fn http_date_value() -> Grammar {
    http_date()
}

/// A single entity-tag (ETag)
pub fn entity_tag_value() -> Grammar {
    entity_tag()
}

/// `*` or a non-empty entity-tag list (If-Match, If-None-Match).
/// The wildcard is tried first: `*` is also a valid token, so the
/// list branch must not get a chance to claim it.
pub fn entity_tag_or_wildcard() -> Grammar {
    alternation(vec![literal("*"), comma_list1(entity_tag())])
}

/// If-Range: entity-tag before HTTP-date, the legacy and current
/// syntaxes overlap and the entity-tag reading takes precedence.
pub fn if_range() -> Grammar {
    alternation(vec![entity_tag(), http_date()])
}

/// Retry-After: HTTP-date before delta-seconds; a date string never
/// parses as a bare integer, the reverse ordering would be ambiguous
/// for values starting with digits.
pub fn retry_after() -> Grammar {
    alternation(vec![http_date(), integer()])
}

/// `*` or a non-empty field-name list (Vary). Wildcard first, as for
/// entity-tag lists.
pub fn wildcard_or_field_names() -> Grammar {
    alternation(vec![literal("*"), comma_list1(token())])
}

/// Allow: possibly-empty method list
pub fn method_list() -> Grammar {
    comma_list(token())
}

/// Trailer: non-empty field-name list
pub fn field_name_list() -> Grammar {
    comma_list1(token())
}

/// Connection: non-empty connection-option list
pub fn connection_option_list() -> Grammar {
    comma_list1(token())
}

/// Content-Encoding: non-empty content-coding list
pub fn content_coding_list() -> Grammar {
    comma_list1(token())
}

/// Content-Language: non-empty language-tag list. A language tag is
/// token-shaped for this checker's purposes (RFC 5646 subtag structure
/// is not modeled here).
pub fn language_tag_list() -> Grammar {
    comma_list1(token())
}

/// Transfer-Encoding: non-empty transfer-coding list; codings may
/// carry parameters, swallowed opaquely after the coding name
pub fn transfer_coding_list() -> Grammar {
    comma_list1(sequence(vec![token(), anything()]))
}

/// TE: possibly-empty t-codings list with optional rank parameters
pub fn t_codings_list() -> Grammar {
    comma_list(sequence(vec![token(), anything()]))
}

/// Upgrade: non-empty protocol list; `HTTP/2.0` is a protocol name,
/// an optional `/version` swallowed after the name token
pub fn protocol_list() -> Grammar {
    comma_list1(sequence(vec![token(), anything()]))
}

/// Via: non-empty list of received-protocol entries with opaque
/// received-by and comment portions
pub fn via_list() -> Grammar {
    comma_list1(sequence(vec![token(), anything()]))
}

/// media-type with opaque parameters (Content-Type)
pub fn media_type() -> Grammar {
    sequence(vec![token(), literal("/"), token(), anything()])
}

/// Accept: possibly-empty media-range list with accept-params
pub fn accept() -> Grammar {
    comma_list(media_type())
}

/// Accept-Charset: non-empty charset list with optional weights;
/// `*` is itself a token, so no dedicated wildcard branch is needed
pub fn accept_charset() -> Grammar {
    comma_list1(sequence(vec![token(), anything()]))
}

/// Accept-Encoding: possibly-empty codings list with optional weights
pub fn accept_encoding() -> Grammar {
    comma_list(sequence(vec![token(), anything()]))
}

/// Accept-Language: non-empty language-range list with weights
pub fn accept_language() -> Grammar {
    comma_list1(sequence(vec![token(), anything()]))
}

/// Accept-Ranges: `none` or a non-empty range-unit list. The literal
/// is tried first; `none` would otherwise parse as a one-element list.
pub fn acceptable_ranges() -> Grammar {
    alternation(vec![literal_ci("none"), comma_list1(token())])
}

/// Range: `unit=ranges` with the range set kept opaque
pub fn range() -> Grammar {
    sequence(vec![token(), literal("="), anything()])
}

/// Content-Range: unit followed by the opaque range/length portion
pub fn content_range() -> Grammar {
    sequence(vec![token(), anything()])
}

/// Server / User-Agent: product tokens and comments, kept opaque
/// (RFC 7230 comment nesting is not modeled here)
pub fn product_list() -> Grammar {
    anything()
}

/// Location: URI-reference, kept opaque (RFC 3986 is not modeled here)
pub fn uri_reference() -> Grammar {
    anything()
}

/// Content-Location / Referer: absolute-URI / partial-URI, opaque
pub fn absolute_or_partial_uri() -> Grammar {
    anything()
}

/// Host: uri-host with optional port, kept opaque
pub fn host() -> Grammar {
    anything()
}

/// Cache-Control: directive list with typed arguments for the
/// directives RFC 7234 gives argument syntax
pub fn cache_directive_list() -> Grammar {
    comma_list1(directive_with(vec![
        ("max-age", integer()),
        ("s-maxage", integer()),
        ("max-stale", integer()),
        ("min-fresh", integer()),
        ("stale-while-revalidate", integer()),
        ("stale-if-error", integer()),
        ("no-cache", quoted_string()),
        ("private", quoted_string()),
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::parse_complete;
    use crate::grammar::ast::ParsedValue;
    use assert_matches::assert_matches;

    #[test]
    fn if_range_prefers_entity_tag_but_accepts_dates() {
        let grammar = if_range();
        assert_matches!(
            parse_complete(&grammar, "\"v2.1\"").unwrap().value,
            ParsedValue::EntityTag { weak: false, .. }
        );
        assert_matches!(
            parse_complete(&grammar, "Tue, 15 Nov 1994 08:12:31 GMT")
                .unwrap()
                .value,
            ParsedValue::Date { .. }
        );
    }

    #[test]
    fn retry_after_accepts_both_forms() {
        let grammar = retry_after();
        assert_eq!(
            parse_complete(&grammar, "120").unwrap().value,
            ParsedValue::Integer(120)
        );
        assert_matches!(
            parse_complete(&grammar, "Fri, 31 Dec 1999 23:59:59 GMT")
                .unwrap()
                .value,
            ParsedValue::Date { .. }
        );
    }

    #[test]
    fn entity_tag_wildcard_takes_the_literal_branch() {
        let parsed = parse_complete(&entity_tag_or_wildcard(), "*").unwrap();
        assert_eq!(parsed.value, ParsedValue::Literal("*".into()));
    }

    #[test]
    fn vary_accepts_wildcard_or_names() {
        let grammar = wildcard_or_field_names();
        assert_eq!(
            parse_complete(&grammar, "*").unwrap().value,
            ParsedValue::Literal("*".into())
        );
        let parsed = parse_complete(&grammar, "Accept-Encoding, User-Agent").unwrap();
        assert_eq!(parsed.value.as_list().unwrap().len(), 2);
    }

    #[test]
    fn acceptable_ranges_recognizes_none_case_insensitively() {
        let grammar = acceptable_ranges();
        assert_eq!(
            parse_complete(&grammar, "None").unwrap().value,
            ParsedValue::Literal("None".into())
        );
        let parsed = parse_complete(&grammar, "bytes").unwrap();
        assert_eq!(parsed.value.as_list().unwrap().len(), 1);
    }

    #[test]
    fn media_type_splits_type_and_subtype() {
        let parsed = parse_complete(&media_type(), "text/html; charset=utf-8").unwrap();
        match parsed.value {
            ParsedValue::Sequence(parts) => {
                assert_eq!(parts[0], ParsedValue::Token("text".into()));
                assert_eq!(parts[2], ParsedValue::Token("html".into()));
            }
            other => panic!("unexpected node {:?}", other),
        }
    }

    #[test]
    fn accept_tolerates_an_empty_value() {
        let parsed = parse_complete(&accept(), "").unwrap();
        assert_eq!(parsed.value, ParsedValue::List(vec![]));
    }

    #[test]
    fn accept_parses_ranges_with_weights() {
        let parsed =
            parse_complete(&accept(), "text/html, application/xml;q=0.9, */*;q=0.8").unwrap();
        assert_eq!(parsed.value.as_list().unwrap().len(), 3);
    }

    #[test]
    fn range_requires_the_equals_sign() {
        assert!(parse_complete(&range(), "bytes=0-499").is_ok());
        assert!(parse_complete(&range(), "bytes 0-499").is_err());
    }

    #[test]
    fn cache_control_accepts_typical_response_values() {
        let grammar = cache_directive_list();
        let parsed =
            parse_complete(&grammar, "public, max-age=31536000, stale-while-revalidate=60")
                .unwrap();
        assert_eq!(parsed.value.as_list().unwrap().len(), 3);
        // a malformed typed argument fails the whole list
        assert!(parse_complete(&grammar, "max-age=forever").is_err());
    }

    #[test]
    fn transfer_encoding_accepts_parameterized_codings() {
        let parsed = parse_complete(&transfer_coding_list(), "gzip, chunked").unwrap();
        assert_eq!(parsed.value.as_list().unwrap().len(), 2);
    }
}
