// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use url::Url;

use crate::{EventId, ParsedReference};

/// Keys that may carry the event id in structured data, highest priority first.
const STRUCTURED_EVENT_KEYS: [&str; 2] = ["event", "event_agenda"];

/// Classify a scanned payload.
///
/// Formats are tried in a fixed order and the first match wins; some of them
/// are substrings of others, so the order is part of the contract:
///
/// 1. check-in link, `/api/events/{id}/check-in`
/// 2. registration link, `/register/{id}/`
/// 3. structured data, `KEY:VALUE|KEY:VALUE` with an `event` or `event_agenda` key
/// 4. absolute URL with `/event/{id}` or `/events/{id}` in its path
/// 5. a bare number, surrounding whitespace and byte order marks ignored
///
/// Anything else is [`ParsedReference::Unrecognized`]. This never fails.
///
/// ## Examples
///
/// ```
/// # use gatepass_payload::{ParsedReference, classify};
/// let reference = classify("https://host/api/events/42/check-in");
/// assert_eq!(reference.event_id().map(|id| id.as_str()), Some("42"));
///
/// let reference = classify("not a qr code at all");
/// assert!(!reference.is_recognized());
/// ```
#[must_use]
pub fn classify(raw: &str) -> ParsedReference {
    let reference = match_check_in(raw)
        .or_else(|| match_registration_url(raw))
        .or_else(|| match_structured_data(raw))
        .or_else(|| match_event_url(raw))
        .or_else(|| match_numeric_id(raw))
        .unwrap_or_else(|| ParsedReference::Unrecognized {
            raw_data: raw.to_string(),
        });

    tracing::debug!(kind = %reference.kind(), event_id = ?reference.event_id(), "payload classified");
    reference
}

fn match_check_in(raw: &str) -> Option<ParsedReference> {
    const RE: &str = r"/api/events/([0-9]+)/check-in";
    static REGEX: OnceLock<Regex> = OnceLock::new();

    if !(raw.contains("/api/events/") && raw.contains("/check-in")) {
        return None;
    }

    let re = REGEX.get_or_init(|| Regex::new(RE).unwrap());
    capture_event_id(re, raw).map(|event_id| ParsedReference::CheckIn { event_id })
}

fn match_registration_url(raw: &str) -> Option<ParsedReference> {
    const RE: &str = r"/register/([0-9]+)/";
    static REGEX: OnceLock<Regex> = OnceLock::new();

    if !raw.contains("/register/") {
        return None;
    }

    let re = REGEX.get_or_init(|| Regex::new(RE).unwrap());
    capture_event_id(re, raw).map(|event_id| ParsedReference::RegistrationUrl {
        event_id,
        raw_url: raw.to_string(),
    })
}

fn match_structured_data(raw: &str) -> Option<ParsedReference> {
    if !(raw.contains('|') && raw.contains(':')) {
        return None;
    }

    let fields = parse_fields(raw);
    let value = STRUCTURED_EVENT_KEYS
        .iter()
        .filter_map(|key| fields.get(*key))
        .find(|value| !value.is_empty())?;

    match EventId::new(value.as_str()) {
        Ok(event_id) => Some(ParsedReference::StructuredData { event_id, fields }),
        Err(e) => {
            tracing::trace!(error = %e, "structured data carries no usable event id");
            None
        }
    }
}

/// Split `KEY:VALUE|KEY:VALUE` into a map keyed by the lower-cased key.
///
/// Values keep everything after the first colon. Segments without a colon
/// carry no pair and are skipped; a repeated key keeps its last value.
fn parse_fields(raw: &str) -> BTreeMap<String, String> {
    raw.split('|')
        .filter_map(|segment| segment.split_once(':'))
        .map(|(key, value)| (key.to_lowercase(), value.to_string()))
        .collect()
}

fn match_event_url(raw: &str) -> Option<ParsedReference> {
    const RE: &str = r"/events?/([0-9]+)";
    static REGEX: OnceLock<Regex> = OnceLock::new();

    let url = match Url::parse(raw) {
        Ok(url) if url.has_host() => url,
        Ok(_) => return None,
        Err(e) => {
            tracing::trace!(error = %e, "payload is not an absolute URL");
            return None;
        }
    };

    let re = REGEX.get_or_init(|| Regex::new(RE).unwrap());
    capture_event_id(re, url.path()).map(|event_id| ParsedReference::EventUrl {
        event_id,
        raw_url: raw.to_string(),
    })
}

fn match_numeric_id(raw: &str) -> Option<ParsedReference> {
    // Some scanners prefix the decoded text with U+FEFF, which `str::trim` keeps.
    let trimmed = raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    EventId::new(trimmed)
        .ok()
        .map(|event_id| ParsedReference::NumericId { event_id })
}

/// The first capture group of `re` in `haystack`, as an event id.
fn capture_event_id(re: &Regex, haystack: &str) -> Option<EventId> {
    re.captures(haystack)
        .and_then(|captures| captures.get(1))
        .and_then(|m| EventId::new(m.as_str()).ok())
}
