//! Per-request context.

use std::collections::BTreeMap;

use crate::types::ServerUrl;

/// Case-insensitive HTTP header multimap.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HttpHeaders(BTreeMap<String, Vec<String>>);

impl HttpHeaders {
    /// An empty header map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a header value. Names are matched case-insensitively.
    pub fn insert(&mut self, name: impl AsRef<str>, value: impl Into<String>) {
        self.0
            .entry(name.as_ref().to_ascii_lowercase())
            .or_default()
            .push(value.into());
    }

    /// The first value for `name`, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// All values for `name`.
    pub fn get_all(&self, name: &str) -> &[String] {
        self.0
            .get(&name.to_ascii_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Iterate over all `(name, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .flat_map(|(name, values)| values.iter().map(move |v| (name.as_str(), v.as_str())))
    }
}

/// The requester's language preferences, from `Accept-Language`.
///
/// Localized string extractors receive this to pick a translation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Language {
    tags: Vec<String>,
}

impl Language {
    /// Parse an `Accept-Language` header value.
    ///
    /// Quality weights are used for ordering only; wildcards are dropped.
    pub fn parse(header: &str) -> Self {
        let mut weighted: Vec<(String, f32)> = header
            .split(',')
            .filter_map(|part| {
                let part = part.trim();
                let (tag, q) = match part.split_once(';') {
                    Some((tag, params)) => {
                        let q = params
                            .trim()
                            .strip_prefix("q=")
                            .and_then(|v| v.parse().ok())
                            .unwrap_or(1.0);
                        (tag.trim(), q)
                    }
                    None => (part, 1.0),
                };
                if tag.is_empty() || tag == "*" {
                    None
                } else {
                    Some((tag.to_string(), q))
                }
            })
            .collect();

        // Stable sort keeps the header order for equal weights.
        weighted.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        Self {
            tags: weighted.into_iter().map(|(tag, _)| tag).collect(),
        }
    }

    /// The highest-ranked language tag, if any.
    pub fn preferred(&self) -> Option<&str> {
        self.tags.first().map(String::as_str)
    }

    /// Tags in preference order.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// True if `tag` is accepted, comparing full tags or primary subtags.
    pub fn accepts(&self, tag: &str) -> bool {
        let primary = primary_subtag(tag);
        self.tags
            .iter()
            .any(|t| t.eq_ignore_ascii_case(tag) || primary_subtag(t).eq_ignore_ascii_case(primary))
    }
}

fn primary_subtag(tag: &str) -> &str {
    tag.split('-').next().unwrap_or(tag)
}

/// Immutable context derived from the inbound request.
///
/// Threaded through every resolution and mapper call.
#[derive(Clone, Debug)]
pub struct RequestInfo {
    server_url: ServerUrl,
    headers: HttpHeaders,
}

impl RequestInfo {
    /// Create a request context from the server URL and inbound headers.
    pub fn new(server_url: ServerUrl, headers: HttpHeaders) -> Self {
        Self {
            server_url,
            headers,
        }
    }

    /// The base server URL all generated links start from.
    pub fn server_url(&self) -> &ServerUrl {
        &self.server_url
    }

    /// The inbound HTTP headers.
    pub fn http_headers(&self) -> &HttpHeaders {
        &self.headers
    }

    /// Language preferences from the `Accept-Language` header.
    pub fn language(&self) -> Language {
        self.headers
            .get("accept-language")
            .map(Language::parse)
            .unwrap_or_default()
    }
}
