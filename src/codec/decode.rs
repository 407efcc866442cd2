use crate::collection::Collection;
use crate::compat::{Cow, String, ToString, Vec};
use crate::value::QueryValue;
use percent_encoding::percent_decode_str;

/// Bracket segments allowed in one key before the whole variable is dropped.
pub const MAX_NESTING_DEPTH: usize = 64;

/// Pairs read from one query string; the rest of the input is ignored.
pub const MAX_INPUT_VARS: usize = 1000;

/// Decode a form-encoded key or value.
///
/// `+` becomes a space before percent-decoding, so `%2B` still yields `+`.
/// Malformed escapes are kept as-is and invalid UTF-8 is replaced.
pub fn decode_component(input: &str) -> String {
    let spaced: Cow<'_, str> = if input.contains('+') {
        Cow::Owned(input.replace('+', " "))
    } else {
        Cow::Borrowed(input)
    };
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

/// Decode a query string (with or without leading `?`) into a parameter collection.
///
/// Keys of the form `name[a][b]` build nested maps under `name`; `name[]`
/// appends at the next integer index. A repeated plain key keeps its first
/// position and takes the last value. At most [`MAX_INPUT_VARS`] pairs are read.
pub fn decode(query: &str) -> Collection<QueryValue> {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut params = Collection::new();

    for (read, pair) in query.split('&').filter(|pair| !pair.is_empty()).enumerate() {
        if read >= MAX_INPUT_VARS {
            tracing::debug!(limit = MAX_INPUT_VARS, "ignoring query parameters past the input limit");
            break;
        }
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        register(&mut params, &decode_component(key), decode_component(value));
    }

    params
}

/// Parsed shape of a decoded key.
#[derive(Debug, PartialEq)]
struct KeyPath<'a> {
    base: String,
    /// `None` is an empty `[]` segment
    segments: Vec<Option<&'a str>>,
}

/// Why a decoded key was not stored.
#[derive(Debug, PartialEq)]
enum Rejected {
    EmptyName,
    /// More than [`MAX_NESTING_DEPTH`] segments; carries the sanitized base name
    TooDeep(String),
}

/// Split a decoded key into its base name and bracket segments.
fn parse_key(name: &str) -> Result<KeyPath<'_>, Rejected> {
    let name = name.trim_start_matches(' ');
    let (base, mut rest) = match memchr::memchr(b'[', name.as_bytes()) {
        Some(open) => (&name[..open], Some(&name[open..])),
        None => (name, None),
    };

    if base.is_empty() {
        return Err(Rejected::EmptyName);
    }

    let mut path = KeyPath {
        base: sanitize(base, b" ."),
        segments: Vec::new(),
    };

    // `rest` always starts at a '['
    while let Some(open) = rest {
        if path.segments.len() >= MAX_NESTING_DEPTH {
            return Err(Rejected::TooDeep(path.base));
        }

        let inner = &open[1..];
        let Some(close) = memchr::memchr(b']', inner.as_bytes()) else {
            // An unclosed first bracket is part of the name, later ones are ignored
            if path.segments.is_empty() {
                path.base.push('_');
                path.base.push_str(&sanitize(inner, b" .["));
            }
            break;
        };

        let index = &inner[..close];
        path.segments.push((!index.is_empty()).then_some(index));

        let after = &inner[close + 1..];
        rest = after.starts_with('[').then_some(after);
    }

    Ok(path)
}

/// Replace each byte of `chars` in `input` with `_`.
fn sanitize(input: &str, chars: &[u8]) -> String {
    input
        .chars()
        .map(|c| {
            if c.is_ascii() && chars.contains(&(c as u8)) {
                '_'
            } else {
                c
            }
        })
        .collect()
}

/// Canonical non-negative integer form of a key (`"7"`, not `"07"` or `"+7"`).
fn integer_key(key: &str) -> Option<u64> {
    let canonical = !key.is_empty()
        && key.bytes().all(|b| b.is_ascii_digit())
        && (key == "0" || !key.starts_with('0'));
    canonical.then(|| key.parse().ok()).flatten()
}

/// Key used by an empty `[]` segment: one past the largest integer key.
fn next_index(map: &Collection<QueryValue>) -> String {
    map.keys()
        .filter_map(integer_key)
        .max()
        .map_or(0, |n| n.saturating_add(1))
        .to_string()
}

fn segment_key(map: &Collection<QueryValue>, segment: Option<&str>) -> String {
    match segment {
        Some(key) => key.to_string(),
        None => next_index(map),
    }
}

/// Store one decoded pair, building nested maps as the key requires.
fn register(params: &mut Collection<QueryValue>, name: &str, value: String) {
    let path = match parse_key(name) {
        Ok(path) => path,
        Err(Rejected::EmptyName) => {
            tracing::debug!(key = name, "dropping query parameter with empty name");
            return;
        }
        Err(Rejected::TooDeep(base)) => {
            // The whole variable goes, including values stored by earlier pairs
            tracing::debug!(key = %base, "dropping query parameter nested too deeply");
            params.try_remove(&base);
            return;
        }
    };

    let slot = params.get_or_insert_with(path.base, QueryValue::default);
    assign(slot, &path.segments, value);
}

/// Write `value` at the end of `segments` below `slot`, turning strings on the
/// way into maps.
fn assign(slot: &mut QueryValue, segments: &[Option<&str>], value: String) {
    let Some((&segment, rest)) = segments.split_first() else {
        *slot = QueryValue::String(value);
        return;
    };

    if !slot.is_map() {
        *slot = QueryValue::Map(Collection::new());
    }
    if let QueryValue::Map(map) = slot {
        let key = segment_key(map, segment);
        let child = map.get_or_insert_with(key, QueryValue::default);
        assign(child, rest, value);
    }
}
