//! The standard header table
//!
//! One row per registered header field, carrying its citations and
//! whatever attributes are known about it. Attributes are asserted
//! only where a source says so: an omitted flag stays absent, which
//! is not the same as asserting it false.

use crate::cardinality::Rule;
use crate::citation::Citation;
use crate::entry::{EntrySpec, IanaStatus};
use crate::schema::AttrKey;
use httplint_syntax::rules;

fn w3c_appformats() -> Citation {
    Citation::document(
        "W3C Web Application Formats Working Group",
        "http://www.w3.org/2006/appformats/",
    )
}

fn w3c_mwbp() -> Citation {
    Citation::document(
        "W3C Mobile Web Best Practices Working Group",
        "http://www.w3.org/2005/MWI/BPWG/",
    )
}

/// Every row of the table, in registry order.
pub fn entries() -> Vec<EntrySpec> {
    vec![
        EntrySpec::new("A-IM", vec![Citation::rfc(4229)]),
        EntrySpec::new("Accept", vec![Citation::rfc_section(7231, "5.3.2")])
            .flag(AttrKey::ForRequest, true)
            .flag(AttrKey::ForResponse, false)
            .status(IanaStatus::Standard)
            .parser(rules::accept())
            .flag(AttrKey::Precondition, false)
            .flag(AttrKey::ProactiveConneg, true)
            .rule(Rule::Multi),
        EntrySpec::new("Accept-Additions", vec![Citation::rfc(4229)]),
        EntrySpec::new("Accept-Charset", vec![Citation::rfc_section(7231, "5.3.3")])
            .flag(AttrKey::ForRequest, true)
            .flag(AttrKey::ForResponse, false)
            .status(IanaStatus::Standard)
            .parser(rules::accept_charset())
            .flag(AttrKey::Precondition, false)
            .flag(AttrKey::ProactiveConneg, true)
            .rule(Rule::Multi),
        EntrySpec::new("Accept-Datetime", vec![Citation::rfc(7089)])
            .status(IanaStatus::Informational),
        EntrySpec::new(
            "Accept-Encoding",
            vec![
                Citation::rfc_section(7231, "5.3.4"),
                Citation::rfc_section(7694, "3"),
            ],
        )
        .flag(AttrKey::ForRequest, true)
        // response use per RFC 7694
        .flag(AttrKey::ForResponse, true)
        .status(IanaStatus::Standard)
        .parser(rules::accept_encoding())
        .flag(AttrKey::Precondition, false)
        .flag(AttrKey::ProactiveConneg, true)
        .rule(Rule::Multi),
        EntrySpec::new("Accept-Features", vec![Citation::rfc(4229)]),
        EntrySpec::new("Accept-Language", vec![Citation::rfc_section(7231, "5.3.5")])
            .flag(AttrKey::ForRequest, true)
            .flag(AttrKey::ForResponse, false)
            .status(IanaStatus::Standard)
            .parser(rules::accept_language())
            .flag(AttrKey::Precondition, false)
            .flag(AttrKey::ProactiveConneg, true)
            .rule(Rule::Multi),
        EntrySpec::new("Accept-Patch", vec![Citation::rfc(5789)]),
        EntrySpec::new("Accept-Ranges", vec![Citation::rfc_section(7233, "2.3")])
            .flag(AttrKey::ForRequest, false)
            .flag(AttrKey::ForResponse, true)
            .status(IanaStatus::Standard)
            .parser(rules::acceptable_ranges())
            .rule(Rule::Single),
        EntrySpec::new("Age", vec![Citation::rfc_section(7234, "5.1")])
            .flag(AttrKey::BadForConnection, true)
            .flag(AttrKey::BadForTrailer, true)
            .flag(AttrKey::ForRequest, false)
            .flag(AttrKey::ForResponse, true)
            .status(IanaStatus::Standard)
            .parser(rules::integer_value())
            .rule(Rule::Single),
        EntrySpec::new("Allow", vec![Citation::rfc_section(7231, "7.4.1")])
            .flag(AttrKey::ForRequest, false)
            .flag(AttrKey::ForResponse, true)
            .status(IanaStatus::Standard)
            .parser(rules::method_list())
            .rule(Rule::Multi),
        EntrySpec::new("ALPN", vec![Citation::rfc_section(7639, "2")])
            .status(IanaStatus::Standard),
        EntrySpec::new("Alternates", vec![Citation::rfc(4229)]),
        EntrySpec::new("Apply-To-Redirect-Ref", vec![Citation::rfc(4437)]),
        EntrySpec::new("Authentication-Info", vec![Citation::rfc_section(7615, "3")])
            .status(IanaStatus::Standard),
        EntrySpec::new("Authorization", vec![Citation::rfc_section(7235, "4.2")])
            .flag(AttrKey::BadForTrailer, true)
            .status(IanaStatus::Standard),
        EntrySpec::new("C-Ext", vec![Citation::rfc(4229)]),
        EntrySpec::new("C-Man", vec![Citation::rfc(4229)]),
        EntrySpec::new("C-Opt", vec![Citation::rfc(4229)]),
        EntrySpec::new("C-PEP", vec![Citation::rfc(4229)]),
        EntrySpec::new("C-PEP-Info", vec![Citation::rfc(4229)]),
        EntrySpec::new("Cache-Control", vec![Citation::rfc_section(7234, "5.2")])
            .flag(AttrKey::BadForConnection, true)
            .flag(AttrKey::BadForTrailer, true)
            .flag(AttrKey::ForRequest, true)
            .flag(AttrKey::ForResponse, true)
            .status(IanaStatus::Standard)
            .parser(rules::cache_directive_list())
            .flag(AttrKey::Precondition, false)
            .flag(AttrKey::ProactiveConneg, false)
            .rule(Rule::DirectiveList),
        EntrySpec::new("CalDAV-Timezones", vec![]).status(IanaStatus::Standard),
        EntrySpec::new("Close", vec![Citation::rfc_section(7230, "8.1")])
            .status(IanaStatus::Reserved),
        EntrySpec::new("Connection", vec![Citation::rfc_section(7230, "6.1")])
            .flag(AttrKey::ForRequest, true)
            .flag(AttrKey::ForResponse, true)
            .status(IanaStatus::Standard)
            .parser(rules::connection_option_list())
            .flag(AttrKey::Precondition, false)
            .flag(AttrKey::ProactiveConneg, false)
            .rule(Rule::Multi),
        EntrySpec::new("Content-Base", vec![Citation::rfc(2068), Citation::rfc(2616)])
            .status(IanaStatus::Obsoleted),
        EntrySpec::new("Content-Disposition", vec![Citation::rfc(6266)])
            .status(IanaStatus::Standard),
        EntrySpec::new(
            "Content-Encoding",
            vec![Citation::rfc_section(7231, "3.1.2.2")],
        )
        .flag(AttrKey::BadForConnection, true)
        .flag(AttrKey::BadForTrailer, true)
        .status(IanaStatus::Standard)
        .parser(rules::content_coding_list())
        .flag(AttrKey::Precondition, false)
        .flag(AttrKey::ProactiveConneg, false)
        .flag(AttrKey::RepresentationMetadata, true)
        .rule(Rule::Multi),
        EntrySpec::new("Content-ID", vec![Citation::rfc(4229)]),
        EntrySpec::new(
            "Content-Language",
            vec![Citation::rfc_section(7231, "3.1.3.2")],
        )
        .flag(AttrKey::BadForConnection, true)
        .status(IanaStatus::Standard)
        .parser(rules::language_tag_list())
        .flag(AttrKey::Precondition, false)
        .flag(AttrKey::ProactiveConneg, false)
        .flag(AttrKey::RepresentationMetadata, true)
        .rule(Rule::Multi),
        EntrySpec::new("Content-Length", vec![Citation::rfc_section(7230, "3.3.2")])
            .flag(AttrKey::BadForTrailer, true)
            .flag(AttrKey::ForRequest, true)
            .flag(AttrKey::ForResponse, true)
            .status(IanaStatus::Standard)
            .parser(rules::integer_value())
            .flag(AttrKey::Precondition, false)
            .flag(AttrKey::ProactiveConneg, false)
            .rule(Rule::Single),
        EntrySpec::new(
            "Content-Location",
            vec![Citation::rfc_section(7231, "3.1.4.2")],
        )
        .status(IanaStatus::Standard)
        .parser(rules::absolute_or_partial_uri())
        .flag(AttrKey::Precondition, false)
        .flag(AttrKey::ProactiveConneg, false)
        .flag(AttrKey::RepresentationMetadata, true)
        .rule(Rule::Single),
        EntrySpec::new("Content-MD5", vec![Citation::rfc(4229)]),
        EntrySpec::new("Content-Range", vec![Citation::rfc_section(7233, "4.2")])
            .flag(AttrKey::BadForConnection, true)
            .flag(AttrKey::BadForTrailer, true)
            .flag(AttrKey::ForRequest, false)
            .flag(AttrKey::ForResponse, true)
            .status(IanaStatus::Standard)
            .parser(rules::content_range())
            .rule(Rule::Single),
        EntrySpec::new("Content-Script-Type", vec![Citation::rfc(4229)]),
        EntrySpec::new("Content-Style-Type", vec![Citation::rfc(4229)]),
        EntrySpec::new("Content-Type", vec![Citation::rfc_section(7231, "3.1.1.5")])
            .flag(AttrKey::BadForTrailer, true)
            .status(IanaStatus::Standard)
            .parser(rules::media_type())
            .flag(AttrKey::Precondition, false)
            .flag(AttrKey::ProactiveConneg, false)
            .flag(AttrKey::RepresentationMetadata, true)
            .rule(Rule::Single),
        EntrySpec::new("Content-Version", vec![Citation::rfc(4229)]),
        EntrySpec::new("Cookie", vec![Citation::rfc(6265)]).status(IanaStatus::Standard),
        EntrySpec::new("Cookie2", vec![Citation::rfc(2965), Citation::rfc(6265)])
            .status(IanaStatus::Obsoleted),
        EntrySpec::new("DASL", vec![Citation::rfc(5323)]).status(IanaStatus::Standard),
        EntrySpec::new("DAV", vec![Citation::rfc(4918)]).status(IanaStatus::Standard),
        EntrySpec::new("Date", vec![Citation::rfc_section(7231, "7.1.1.2")])
            .flag(AttrKey::BadForTrailer, true)
            .flag(AttrKey::ForRequest, true)
            .flag(AttrKey::ForResponse, true)
            .status(IanaStatus::Standard)
            .flag(AttrKey::Precondition, false)
            .flag(AttrKey::ProactiveConneg, false)
            .parser(rules::http_date_value())
            .rule(Rule::Single),
        EntrySpec::new("Default-Style", vec![Citation::rfc(4229)]),
        EntrySpec::new("Delta-Base", vec![Citation::rfc(4229)]),
        EntrySpec::new("Depth", vec![Citation::rfc(4918)]).status(IanaStatus::Standard),
        EntrySpec::new("Derived-From", vec![Citation::rfc(4229)]),
        EntrySpec::new("Destination", vec![Citation::rfc(4918)]).status(IanaStatus::Standard),
        EntrySpec::new("Differential-ID", vec![Citation::rfc(4229)]),
        EntrySpec::new("Digest", vec![Citation::rfc(4229)]),
        EntrySpec::new("ETag", vec![Citation::rfc_section(7232, "2.3")])
            .flag(AttrKey::BadForConnection, true)
            .flag(AttrKey::ForRequest, false)
            .flag(AttrKey::ForResponse, true)
            .status(IanaStatus::Standard)
            .parser(rules::entity_tag_value())
            .flag(AttrKey::RepresentationMetadata, true)
            .rule(Rule::Single),
        EntrySpec::new("Expect", vec![Citation::rfc_section(7231, "5.1.1")])
            .flag(AttrKey::BadForTrailer, true)
            .flag(AttrKey::ForRequest, true)
            .flag(AttrKey::ForResponse, false)
            .status(IanaStatus::Standard)
            .parser(rules::opaque_value())
            .flag(AttrKey::Precondition, false)
            .flag(AttrKey::ProactiveConneg, false)
            .rule(Rule::Single),
        EntrySpec::new("Expires", vec![Citation::rfc_section(7234, "5.3")])
            .flag(AttrKey::BadForConnection, true)
            .flag(AttrKey::BadForTrailer, true)
            .flag(AttrKey::ForRequest, false)
            .flag(AttrKey::ForResponse, true)
            .status(IanaStatus::Standard)
            .parser(rules::http_date_value())
            .rule(Rule::Single),
        EntrySpec::new("Ext", vec![Citation::rfc(4229)]),
        EntrySpec::new("Forwarded", vec![Citation::rfc(7239)]).status(IanaStatus::Standard),
        EntrySpec::new("From", vec![Citation::rfc_section(7231, "5.5.1")])
            .flag(AttrKey::ForRequest, true)
            .flag(AttrKey::ForResponse, false)
            .status(IanaStatus::Standard)
            // the full RFC 5322 mailbox grammar is not modelled
            .parser(rules::opaque_value())
            .flag(AttrKey::Precondition, false)
            .flag(AttrKey::ProactiveConneg, false)
            .rule(Rule::Single),
        EntrySpec::new("GetProfile", vec![Citation::rfc(4229)]),
        EntrySpec::new("Hobareg", vec![Citation::rfc_section(7486, "6.1.1")])
            .status(IanaStatus::Experimental),
        EntrySpec::new("Host", vec![Citation::rfc_section(7230, "5.4")])
            .flag(AttrKey::BadForTrailer, true)
            .flag(AttrKey::ForRequest, true)
            .flag(AttrKey::ForResponse, false)
            .status(IanaStatus::Standard)
            .parser(rules::host())
            .flag(AttrKey::Precondition, false)
            .flag(AttrKey::ProactiveConneg, false)
            .rule(Rule::Single),
        EntrySpec::new("HTTP2-Settings", vec![Citation::rfc_section(7540, "3.2.1")])
            .status(IanaStatus::Standard),
        EntrySpec::new("IM", vec![Citation::rfc(4229)]),
        EntrySpec::new("If", vec![Citation::rfc_section(4918, "10.4")])
            .flag(AttrKey::BadForTrailer, true)
            .status(IanaStatus::Standard)
            .flag(AttrKey::Precondition, true),
        EntrySpec::new("If-Match", vec![Citation::rfc_section(7232, "3.1")])
            .flag(AttrKey::BadForTrailer, true)
            .flag(AttrKey::ForRequest, true)
            .flag(AttrKey::ForResponse, false)
            .status(IanaStatus::Standard)
            .parser(rules::entity_tag_or_wildcard())
            .flag(AttrKey::Precondition, true)
            .flag(AttrKey::ProactiveConneg, false)
            .rule(Rule::Single),
        EntrySpec::new("If-Modified-Since", vec![Citation::rfc_section(7232, "3.3")])
            .flag(AttrKey::BadForTrailer, true)
            .flag(AttrKey::ForRequest, true)
            .flag(AttrKey::ForResponse, false)
            .status(IanaStatus::Standard)
            .parser(rules::http_date_value())
            .flag(AttrKey::Precondition, true)
            .flag(AttrKey::ProactiveConneg, false)
            .rule(Rule::Single),
        EntrySpec::new("If-None-Match", vec![Citation::rfc_section(7232, "3.2")])
            .flag(AttrKey::BadForTrailer, true)
            .flag(AttrKey::ForRequest, true)
            .flag(AttrKey::ForResponse, false)
            .status(IanaStatus::Standard)
            .parser(rules::entity_tag_or_wildcard())
            .flag(AttrKey::Precondition, true)
            .flag(AttrKey::ProactiveConneg, false)
            .rule(Rule::Single),
        EntrySpec::new("If-Range", vec![Citation::rfc_section(7233, "3.2")])
            .flag(AttrKey::BadForTrailer, true)
            .flag(AttrKey::ForRequest, true)
            .flag(AttrKey::ForResponse, false)
            .status(IanaStatus::Standard)
            .parser(rules::if_range())
            .flag(AttrKey::Precondition, false)
            .flag(AttrKey::ProactiveConneg, false)
            .rule(Rule::Single),
        EntrySpec::new(
            "If-Schedule-Tag-Match",
            vec![Citation::rfc_section(6638, "8.3")],
        )
        .flag(AttrKey::BadForTrailer, true)
        .status(IanaStatus::Standard)
        .flag(AttrKey::Precondition, true),
        EntrySpec::new(
            "If-Unmodified-Since",
            vec![Citation::rfc_section(7232, "3.4")],
        )
        .flag(AttrKey::BadForTrailer, true)
        .flag(AttrKey::ForRequest, true)
        .flag(AttrKey::ForResponse, false)
        .status(IanaStatus::Standard)
        .parser(rules::http_date_value())
        .flag(AttrKey::Precondition, true)
        .flag(AttrKey::ProactiveConneg, false)
        .rule(Rule::Single),
        EntrySpec::new("Keep-Alive", vec![Citation::rfc(4229)]),
        EntrySpec::new("Label", vec![Citation::rfc(4229)]),
        EntrySpec::new("Last-Modified", vec![Citation::rfc_section(7232, "2.2")])
            .flag(AttrKey::BadForConnection, true)
            .flag(AttrKey::ForRequest, false)
            .flag(AttrKey::ForResponse, true)
            .status(IanaStatus::Standard)
            .parser(rules::http_date_value())
            .flag(AttrKey::RepresentationMetadata, true)
            .rule(Rule::Single),
        EntrySpec::new("Link", vec![Citation::rfc(5988)]),
        EntrySpec::new("Location", vec![Citation::rfc_section(7231, "7.1.2")])
            .flag(AttrKey::BadForTrailer, true)
            .flag(AttrKey::ForRequest, false)
            .flag(AttrKey::ForResponse, true)
            .status(IanaStatus::Standard)
            .parser(rules::uri_reference())
            .rule(Rule::Single),
        EntrySpec::new("Lock-Token", vec![Citation::rfc(4918)]).status(IanaStatus::Standard),
        EntrySpec::new("Man", vec![Citation::rfc(4229)]),
        EntrySpec::new("Max-Forwards", vec![Citation::rfc_section(7231, "5.1.2")])
            .flag(AttrKey::BadForTrailer, true)
            .flag(AttrKey::ForRequest, true)
            .flag(AttrKey::ForResponse, false)
            .status(IanaStatus::Standard)
            .parser(rules::integer_value())
            .flag(AttrKey::Precondition, false)
            .flag(AttrKey::ProactiveConneg, false)
            .rule(Rule::Single),
        EntrySpec::new("Memento-Datetime", vec![Citation::rfc(7089)])
            .status(IanaStatus::Informational),
        EntrySpec::new("Meter", vec![Citation::rfc(4229)]),
        EntrySpec::new("MIME-Version", vec![Citation::rfc_appendix(7231, "A.1")])
            .status(IanaStatus::Standard)
            .flag(AttrKey::Precondition, false)
            .flag(AttrKey::ProactiveConneg, false),
        EntrySpec::new("Negotiate", vec![Citation::rfc(4229)]),
        EntrySpec::new("Opt", vec![Citation::rfc(4229)]),
        EntrySpec::new("Ordering-Type", vec![Citation::rfc(4229)]).status(IanaStatus::Standard),
        EntrySpec::new("Origin", vec![Citation::rfc(6454)]).status(IanaStatus::Standard),
        EntrySpec::new("Overwrite", vec![Citation::rfc(4918)]).status(IanaStatus::Standard),
        EntrySpec::new("P3P", vec![Citation::rfc(4229)]),
        EntrySpec::new("PEP", vec![Citation::rfc(4229)]),
        EntrySpec::new("PICS-Label", vec![Citation::rfc(4229)]),
        EntrySpec::new("Pep-Info", vec![Citation::rfc(4229)]),
        EntrySpec::new("Position", vec![Citation::rfc(4229)]).status(IanaStatus::Standard),
        EntrySpec::new("Pragma", vec![Citation::rfc_section(7234, "5.4")])
            .flag(AttrKey::BadForTrailer, true)
            .status(IanaStatus::Standard)
            .flag(AttrKey::Precondition, false)
            .flag(AttrKey::ProactiveConneg, false),
        EntrySpec::new("Prefer", vec![Citation::rfc(7240)]).status(IanaStatus::Standard),
        EntrySpec::new("Preference-Applied", vec![Citation::rfc(7240)])
            .status(IanaStatus::Standard),
        EntrySpec::new("ProfileObject", vec![Citation::rfc(4229)]),
        EntrySpec::new("Protocol", vec![Citation::rfc(4229)]),
        EntrySpec::new("Protocol-Info", vec![Citation::rfc(4229)]),
        EntrySpec::new("Protocol-Query", vec![Citation::rfc(4229)]),
        EntrySpec::new("Protocol-Request", vec![Citation::rfc(4229)]),
        EntrySpec::new("Proxy-Authenticate", vec![Citation::rfc_section(7235, "4.3")])
            .status(IanaStatus::Standard),
        EntrySpec::new(
            "Proxy-Authentication-Info",
            vec![Citation::rfc_section(7615, "4")],
        )
        .status(IanaStatus::Standard),
        EntrySpec::new(
            "Proxy-Authorization",
            vec![Citation::rfc_section(7235, "4.4")],
        )
        .flag(AttrKey::BadForTrailer, true)
        .status(IanaStatus::Standard),
        EntrySpec::new("Proxy-Features", vec![Citation::rfc(4229)]),
        EntrySpec::new("Proxy-Instruction", vec![Citation::rfc(4229)]),
        EntrySpec::new("Public", vec![Citation::rfc(4229)]),
        EntrySpec::new("Public-Key-Pins", vec![Citation::rfc(7469)])
            .status(IanaStatus::Standard),
        EntrySpec::new("Public-Key-Pins-Report-Only", vec![Citation::rfc(7469)])
            .status(IanaStatus::Standard),
        EntrySpec::new("Range", vec![Citation::rfc_section(7233, "3.1")])
            .flag(AttrKey::BadForTrailer, true)
            .flag(AttrKey::ForRequest, true)
            .flag(AttrKey::ForResponse, false)
            .status(IanaStatus::Standard)
            .parser(rules::range())
            .flag(AttrKey::Precondition, false)
            .flag(AttrKey::ProactiveConneg, false)
            .rule(Rule::Single),
        EntrySpec::new("Redirect-Ref", vec![Citation::rfc(4437)]),
        EntrySpec::new("Referer", vec![Citation::rfc_section(7231, "5.5.2")])
            .flag(AttrKey::ForRequest, true)
            .flag(AttrKey::ForResponse, false)
            .status(IanaStatus::Standard)
            .parser(rules::absolute_or_partial_uri())
            .flag(AttrKey::Precondition, false)
            .flag(AttrKey::ProactiveConneg, false)
            .rule(Rule::Single),
        EntrySpec::new("Retry-After", vec![Citation::rfc_section(7231, "7.1.3")])
            .flag(AttrKey::BadForTrailer, true)
            .flag(AttrKey::ForRequest, false)
            .flag(AttrKey::ForResponse, true)
            .status(IanaStatus::Standard)
            .parser(rules::retry_after())
            .rule(Rule::Single),
        EntrySpec::new("Safe", vec![Citation::rfc(4229)]),
        EntrySpec::new("Schedule-Reply", vec![Citation::rfc(6638)])
            .status(IanaStatus::Standard),
        EntrySpec::new("Schedule-Tag", vec![Citation::rfc(6638)]).status(IanaStatus::Standard),
        EntrySpec::new("Sec-WebSocket-Accept", vec![Citation::rfc(6455)])
            .status(IanaStatus::Standard),
        EntrySpec::new("Sec-WebSocket-Extensions", vec![Citation::rfc(6455)])
            .status(IanaStatus::Standard),
        EntrySpec::new("Sec-WebSocket-Key", vec![Citation::rfc(6455)])
            .status(IanaStatus::Standard),
        EntrySpec::new("Sec-WebSocket-Protocol", vec![Citation::rfc(6455)])
            .status(IanaStatus::Standard),
        EntrySpec::new("Sec-WebSocket-Version", vec![Citation::rfc(6455)])
            .status(IanaStatus::Standard),
        EntrySpec::new("Security-Scheme", vec![Citation::rfc(4229)]),
        EntrySpec::new("Server", vec![Citation::rfc_section(7231, "7.4.2")])
            .flag(AttrKey::ForRequest, false)
            .flag(AttrKey::ForResponse, true)
            .status(IanaStatus::Standard)
            .parser(rules::product_list())
            .rule(Rule::Single),
        EntrySpec::new("Set-Cookie", vec![Citation::rfc(6265)])
            .status(IanaStatus::Standard)
            .rule(Rule::SetCookie),
        EntrySpec::new("Set-Cookie2", vec![Citation::rfc(2965), Citation::rfc(6265)])
            .status(IanaStatus::Obsoleted),
        EntrySpec::new("SetProfile", vec![Citation::rfc(4229)]),
        EntrySpec::new("SLUG", vec![Citation::rfc(5023)]).status(IanaStatus::Standard),
        EntrySpec::new("SoapAction", vec![Citation::rfc(4229)]),
        EntrySpec::new("Status-URI", vec![Citation::rfc(4229)]),
        EntrySpec::new("Strict-Transport-Security", vec![Citation::rfc(6797)])
            .status(IanaStatus::Standard),
        EntrySpec::new("Surrogate-Capability", vec![Citation::rfc(4229)]),
        EntrySpec::new("Surrogate-Control", vec![Citation::rfc(4229)]),
        EntrySpec::new("TCN", vec![Citation::rfc(4229)]),
        EntrySpec::new("TE", vec![Citation::rfc_section(7230, "4.3")])
            .flag(AttrKey::BadForTrailer, true)
            .flag(AttrKey::ForRequest, true)
            .flag(AttrKey::ForResponse, false)
            .status(IanaStatus::Standard)
            .parser(rules::t_codings_list())
            .flag(AttrKey::Precondition, false)
            .flag(AttrKey::ProactiveConneg, false)
            .rule(Rule::Multi),
        EntrySpec::new("Timeout", vec![Citation::rfc(4918)]).status(IanaStatus::Standard),
        EntrySpec::new("Trailer", vec![Citation::rfc_section(7230, "4.4")])
            .flag(AttrKey::BadForTrailer, true)
            .status(IanaStatus::Standard)
            .parser(rules::field_name_list())
            .flag(AttrKey::Precondition, false)
            .flag(AttrKey::ProactiveConneg, false)
            .rule(Rule::Multi),
        EntrySpec::new(
            "Transfer-Encoding",
            vec![Citation::rfc_section(7230, "3.3.1")],
        )
        .flag(AttrKey::BadForTrailer, true)
        .flag(AttrKey::ForRequest, true)
        .flag(AttrKey::ForResponse, true)
        .status(IanaStatus::Standard)
        .parser(rules::transfer_coding_list())
        .flag(AttrKey::Precondition, false)
        .flag(AttrKey::ProactiveConneg, false)
        .rule(Rule::Multi),
        EntrySpec::new("URI", vec![Citation::rfc(4229)]),
        EntrySpec::new("Upgrade", vec![Citation::rfc_section(7230, "6.7")])
            .flag(AttrKey::ForRequest, true)
            .flag(AttrKey::ForResponse, true)
            .status(IanaStatus::Standard)
            .parser(rules::protocol_list())
            .flag(AttrKey::Precondition, false)
            .flag(AttrKey::ProactiveConneg, false)
            .rule(Rule::Multi),
        EntrySpec::new("User-Agent", vec![Citation::rfc_section(7231, "5.5.3")])
            .flag(AttrKey::ForRequest, true)
            .flag(AttrKey::ForResponse, false)
            .status(IanaStatus::Standard)
            .parser(rules::product_list())
            .flag(AttrKey::Precondition, false)
            .flag(AttrKey::ProactiveConneg, false)
            .rule(Rule::Single),
        EntrySpec::new("Variant-Vary", vec![Citation::rfc(4229)]),
        EntrySpec::new("Vary", vec![Citation::rfc_section(7231, "7.1.4")])
            .flag(AttrKey::BadForConnection, true)
            .flag(AttrKey::BadForTrailer, true)
            .flag(AttrKey::ForRequest, false)
            .flag(AttrKey::ForResponse, true)
            .status(IanaStatus::Standard)
            .parser(rules::wildcard_or_field_names())
            .rule(Rule::Single),
        EntrySpec::new("Via", vec![Citation::rfc_section(7230, "5.7.1")])
            .flag(AttrKey::ForRequest, true)
            .flag(AttrKey::ForResponse, true)
            .status(IanaStatus::Standard)
            .parser(rules::via_list())
            .flag(AttrKey::Precondition, false)
            .flag(AttrKey::ProactiveConneg, false)
            .rule(Rule::Multi),
        EntrySpec::new("WWW-Authenticate", vec![Citation::rfc_section(7235, "4.1")])
            .status(IanaStatus::Standard),
        EntrySpec::new("Want-Digest", vec![Citation::rfc(4229)]),
        EntrySpec::new("Warning", vec![Citation::rfc_section(7234, "5.5")])
            .flag(AttrKey::BadForConnection, true)
            .flag(AttrKey::BadForTrailer, true)
            .status(IanaStatus::Standard),
        EntrySpec::new("X-Frame-Options", vec![Citation::rfc(7034)])
            .status(IanaStatus::Informational),
        EntrySpec::new("Access-Control", vec![w3c_appformats()])
            .status(IanaStatus::Deprecated),
        EntrySpec::new("Access-Control-Allow-Credentials", vec![w3c_appformats()]),
        EntrySpec::new("Access-Control-Allow-Headers", vec![w3c_appformats()]),
        EntrySpec::new("Access-Control-Allow-Methods", vec![w3c_appformats()]),
        EntrySpec::new("Access-Control-Allow-Origin", vec![w3c_appformats()]),
        EntrySpec::new("Access-Control-Max-Age", vec![w3c_appformats()]),
        EntrySpec::new("Access-Control-Request-Method", vec![w3c_appformats()]),
        EntrySpec::new("Access-Control-Request-Headers", vec![w3c_appformats()]),
        EntrySpec::new("Compliance", vec![Citation::rfc(4229)]),
        EntrySpec::new("Content-Transfer-Encoding", vec![Citation::rfc(4229)]),
        EntrySpec::new("Cost", vec![Citation::rfc(4229)]),
        EntrySpec::new("EDIINT-Features", vec![Citation::rfc(6017)]),
        EntrySpec::new("Message-ID", vec![Citation::rfc(4229)]),
        EntrySpec::new("Method-Check", vec![w3c_appformats()]).status(IanaStatus::Deprecated),
        EntrySpec::new("Method-Check-Expires", vec![w3c_appformats()])
            .status(IanaStatus::Deprecated),
        EntrySpec::new("Non-Compliance", vec![Citation::rfc(4229)]),
        EntrySpec::new("Optional", vec![Citation::rfc(4229)]),
        EntrySpec::new("Referer-Root", vec![w3c_appformats()]).status(IanaStatus::Deprecated),
        EntrySpec::new("Resolution-Hint", vec![Citation::rfc(4229)]),
        EntrySpec::new("Resolver-Location", vec![Citation::rfc(4229)]),
        EntrySpec::new("SubOK", vec![Citation::rfc(4229)]),
        EntrySpec::new("Subst", vec![Citation::rfc(4229)]),
        EntrySpec::new("Title", vec![Citation::rfc(4229)]),
        EntrySpec::new("UA-Color", vec![Citation::rfc(4229)]),
        EntrySpec::new("UA-Media", vec![Citation::rfc(4229)]),
        EntrySpec::new("UA-Pixels", vec![Citation::rfc(4229)]),
        EntrySpec::new("UA-Resolution", vec![Citation::rfc(4229)]),
        EntrySpec::new("UA-Windowpixels", vec![Citation::rfc(4229)]),
        EntrySpec::new("Version", vec![Citation::rfc(4229)]),
        EntrySpec::new("X-Device-Accept", vec![w3c_mwbp()]),
        EntrySpec::new("X-Device-Accept-Charset", vec![w3c_mwbp()]),
        EntrySpec::new("X-Device-Accept-Encoding", vec![w3c_mwbp()]),
        EntrySpec::new("X-Device-Accept-Language", vec![w3c_mwbp()]),
        EntrySpec::new("X-Device-User-Agent", vec![w3c_mwbp()]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::KnownHeaders;
    use crate::schema::declared_schema;
    use httplint_syntax::Grammar;

    #[test]
    fn table_folds_into_a_registry() {
        let reg = KnownHeaders::build(entries(), declared_schema()).unwrap();
        assert_eq!(reg.len(), entries().len());
    }

    #[test]
    fn names_are_unique_case_insensitively() {
        let mut names: Vec<String> = entries().iter().map(|e| e.name.folded()).collect();
        names.sort_unstable();
        let before = names.len();
        names.dedup();
        assert_eq!(names.len(), before);
    }

    #[test]
    fn every_row_with_a_parser_also_has_a_rule() {
        for spec in entries() {
            let has_parser = spec
                .attrs
                .iter()
                .any(|(key, _)| *key == AttrKey::Parser);
            let has_rule = spec.attrs.iter().any(|(key, _)| *key == AttrKey::Rule);
            assert!(
                !has_parser || has_rule,
                "{} has a parser but no rule",
                spec.name
            );
        }
    }

    #[test]
    fn representative_rows_carry_their_attributes() {
        let reg = KnownHeaders::build(entries(), declared_schema()).unwrap();

        let accept = reg.get("accept");
        assert_eq!(accept.for_request, Some(true));
        assert_eq!(accept.for_response, Some(false));
        assert_eq!(accept.proactive_conneg, Some(true));
        assert_eq!(accept.rule, Some(Rule::Multi));

        let cache_control = reg.get("Cache-Control");
        assert_eq!(cache_control.rule, Some(Rule::DirectiveList));
        assert!(matches!(
            cache_control.parser,
            Some(Grammar::CommaList { min_count: 1, .. })
        ));

        let set_cookie = reg.get("SET-COOKIE");
        assert_eq!(set_cookie.rule, Some(Rule::SetCookie));
        assert!(set_cookie.parser.is_none());

        // A-IM is listed but carries no attributes at all
        let a_im = reg.get("A-IM");
        assert_eq!(a_im.citations.len(), 1);
        assert_eq!(a_im.iana_status, None);
        assert_eq!(a_im.rule, None);
    }

    #[test]
    fn caldav_timezones_has_no_citations() {
        let reg = KnownHeaders::build(entries(), declared_schema()).unwrap();
        let entry = reg.get("CalDAV-Timezones");
        assert!(entry.citations.is_empty());
        assert_eq!(entry.iana_status, Some(IanaStatus::Standard));
    }
}
