//! `format` (§4.2 String). Draft 4 treats `format` as an assertion only for
//! the names this crate recognizes; an unrecognized name is a schema error
//! (§4.2), not a silent no-op.
//!
//! The per-format checkers below are lifted verbatim from the source's own
//! regex sources and splitting rules (§4.2 "kept verbatim because the test
//! suite is calibrated against them") rather than reimplemented against a
//! general-purpose parser (`std::net`, `chrono`, ...) — a semantically
//! "more correct" IPv4/date-time/email checker would disagree with the
//! conformance tests these patterns were calibrated against on edge cases
//! like leading zeros or digit-class month ranges.
use crate::{
    context::CompilationContext,
    error::{ErrorRecord, SchemaError, SchemaErrorKind},
    keyword::Keyword,
    path::Path,
    program::{CompiledRule, Rule},
    value::{Tag, APPLIES_STRING},
};
use lazy_static::lazy_static;
use regex::Regex;
use serde_json::{Map, Value};

lazy_static! {
    static ref DATE_TIME_RE: Regex = Regex::new(
        r"^\d{4}-[01]\d-[0-3]\d(t|T)[0-2]\d:[0-5]\d:[0-5]\d(?:\.\d+)?(?:[+-][0-2]\d:[0-5]\d|[+-][0-2]\d[0-5]\d|z|Z)\z"
    )
    .expect("static regex is valid");
    static ref BAD_EMAIL_NAME_RE: Regex =
        Regex::new(r"(^[^a-zA-Z0-9])|([^a-zA-Z0-9._+-])+|([._\-+]{2,})|([^a-zA-Z0-9]$)")
            .expect("static regex is valid");
    static ref BAD_EMAIL_DOMAIN_RE: Regex =
        Regex::new(r"(^[^a-zA-Z0-9])|([^a-zA-Z0-9.-]+)|([.-]{2,})|([a-zA-Z0-9-]{65,})|([^a-zA-Z0-9.]$)")
            .expect("static regex is valid");
    static ref BAD_URI_SCHEME_RE: Regex =
        Regex::new(r"(^[^a-zA-Z])|([^a-zA-Z0-9.+-])+").expect("static regex is valid");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Format {
    DateTime,
    Email,
    Hostname,
    Ipv4,
    Ipv6,
    Uri,
}

impl Format {
    fn name(self) -> &'static str {
        match self {
            Format::DateTime => "date-time",
            Format::Email => "email",
            Format::Hostname => "hostname",
            Format::Ipv4 => "ipv4",
            Format::Ipv6 => "ipv6",
            Format::Uri => "uri",
        }
    }

    fn from_name(name: &str) -> Option<Format> {
        match name {
            "date-time" => Some(Format::DateTime),
            "email" => Some(Format::Email),
            "hostname" => Some(Format::Hostname),
            "ipv4" => Some(Format::Ipv4),
            "ipv6" => Some(Format::Ipv6),
            "uri" => Some(Format::Uri),
            _ => None,
        }
    }

    fn check(self, text: &str) -> bool {
        match self {
            Format::DateTime => DATE_TIME_RE.is_match(text),
            Format::Email => check_email(text),
            Format::Hostname => !BAD_EMAIL_DOMAIN_RE.is_match(text),
            Format::Ipv4 => check_ipv4(text),
            Format::Ipv6 => check_ipv6(text),
            Format::Uri => check_uri(text),
        }
    }
}

/// Split on the first `@`; both halves non-empty and neither matches its
/// "bad" pattern (§4.2 `format: email`).
fn check_email(text: &str) -> bool {
    match text.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !BAD_EMAIL_NAME_RE.is_match(local)
                && !BAD_EMAIL_DOMAIN_RE.is_match(domain)
        }
        None => false,
    }
}

/// Split on the first `:`; scheme and hier-part both non-empty, scheme not
/// matching its "bad" pattern (§4.2 `format: uri`).
fn check_uri(text: &str) -> bool {
    match text.split_once(':') {
        Some((scheme, hier_part)) => {
            !scheme.is_empty() && !hier_part.is_empty() && !BAD_URI_SCHEME_RE.is_match(scheme)
        }
        None => false,
    }
}

/// Exactly 4 dot-separated decimal octets, each in `0..=255`, no leading
/// zero on a multi-digit octet (§4.2 `format: ipv4`).
fn check_ipv4(text: &str) -> bool {
    let parts: Vec<&str> = text.split('.').collect();
    if parts.len() != 4 {
        return false;
    }
    parts.iter().all(|part| is_valid_octet(part))
}

fn is_valid_octet(part: &str) -> bool {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    if part.len() > 1 && part.starts_with('0') {
        return false;
    }
    part.parse::<u16>().map_or(false, |n| n <= 255)
}

/// At most 8 colon-separated groups, each empty or 1-4 hex digits with no
/// leading zero on a multi-digit group; at most 3 empty groups overall, and
/// at most 1 when there are more than 4 groups total (§4.2 `format: ipv6`).
fn check_ipv6(text: &str) -> bool {
    let parts: Vec<&str> = text.split(':').collect();
    if parts.len() > 8 {
        return false;
    }
    if !parts.iter().all(|part| is_valid_hex_group(part)) {
        return false;
    }
    let empties = parts.iter().filter(|part| part.is_empty()).count();
    if empties > 3 {
        return false;
    }
    if parts.len() > 4 && empties > 1 {
        return false;
    }
    true
}

fn is_valid_hex_group(part: &str) -> bool {
    if part.is_empty() {
        return true;
    }
    if part.len() > 4 || !part.bytes().all(|b| b.is_ascii_hexdigit()) {
        return false;
    }
    !(part.len() > 1 && part.starts_with('0'))
}

pub(crate) struct FormatKw {
    format: Format,
}

pub(crate) fn construct(
    value: &Value,
    path: &Path,
    _siblings: &Map<String, Value>,
    _depth: usize,
    _ctx: &CompilationContext,
) -> Result<Keyword, SchemaError> {
    let name = value
        .as_str()
        .ok_or_else(|| SchemaError::new(path.clone(), SchemaErrorKind::InvalidKeyword))?;
    let format = Format::from_name(name)
        .ok_or_else(|| SchemaError::new(path.clone(), SchemaErrorKind::UnknownVariant(name.to_string())))?;
    Ok(Keyword::Format(FormatKw { format }))
}

impl FormatKw {
    pub(crate) fn applicability(&self) -> &'static [Tag] {
        APPLIES_STRING
    }

    pub(crate) fn compile(&self) -> Result<Option<Rule>, SchemaError> {
        let format = self.format;
        Ok(Some(CompiledRule::new(move |path, instance, errors| {
            if let Some(text) = instance.as_str() {
                if !format.check(text) {
                    errors.push(ErrorRecord {
                        path: path.clone(),
                        keyword: "format",
                        value: Value::String(format.name().to_string()),
                    });
                }
            }
        })))
    }
}

#[cfg(test)]
mod tests {
    use crate::validator::Validator;
    use serde_json::json;
    use test_case::test_case;

    #[test_case("date-time", "2021-01-02T15:04:05Z", true)]
    #[test_case("date-time", "2021-01-02t15:04:05+02:00", true)]
    #[test_case("date-time", "not a date", false)]
    #[test_case("email", "user@example.com", true)]
    #[test_case("email", "not-an-email", false)]
    #[test_case("email", ".user@example.com", false)]
    #[test_case("hostname", "example.com", true)]
    #[test_case("hostname", "-bad.com", false)]
    #[test_case("ipv4", "192.168.0.1", true)]
    #[test_case("ipv4", "999.0.0.1", false)]
    #[test_case("ipv4", "01.2.3.4", false)]
    #[test_case("ipv4", "1.2.3.4", true)]
    #[test_case("ipv6", "1:2:3:4:5:6:7:8", true)]
    #[test_case("ipv6", "::1", true)]
    #[test_case("ipv6", "not-ipv6", false)]
    #[test_case("uri", "https://example.com/a", true)]
    #[test_case("uri", "not a uri", false)]
    fn format_checks(format: &str, text: &str, valid: bool) {
        let validator = Validator::compile(&json!({"format": format})).unwrap();
        assert_eq!(validator.is_valid(&json!(text)), valid);
    }

    #[test]
    fn unrecognized_format_name_is_a_schema_error() {
        assert!(Validator::compile(&json!({"format": "made-up"})).is_err());
    }
}
