use crate::collection::Collection;
use crate::compat::String;
use crate::value::QueryValue;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Form component encode set: everything but ASCII alphanumerics and `-`, `_`, `.`
///
/// Space is part of the set and is rewritten to `+` by [`encode_component_into`].
pub const COMPONENT_SET: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

/// Write a form-encoded key or value directly to buffer
pub fn encode_component_into(buffer: &mut String, input: &str) {
    buffer.reserve(input.len());

    for chunk in utf8_percent_encode(input, COMPONENT_SET) {
        if chunk == "%20" {
            buffer.push('+');
        } else {
            buffer.push_str(chunk);
        }
    }
}

/// Serialize a parameter collection into `key=value&...` form.
///
/// Nested maps expand to one `key[sub]=value` pair per leaf. Empty maps emit
/// nothing. No leading `?` is written.
pub fn encode(params: &Collection<QueryValue>) -> String {
    let mut buffer = String::new();
    let mut prefix = String::new();
    for (key, value) in params {
        prefix.clear();
        encode_component_into(&mut prefix, key);
        encode_value(&mut buffer, &mut prefix, value);
    }
    buffer
}

/// `prefix` holds the encoded key path so far; it is restored before returning.
fn encode_value(buffer: &mut String, prefix: &mut String, value: &QueryValue) {
    match value {
        QueryValue::String(s) => {
            if !buffer.is_empty() {
                buffer.push('&');
            }
            buffer.push_str(prefix);
            buffer.push('=');
            encode_component_into(buffer, s);
        }
        QueryValue::Map(map) => {
            let len = prefix.len();
            for (key, child) in map {
                prefix.push('[');
                encode_component_into(prefix, key);
                prefix.push(']');
                encode_value(buffer, prefix, child);
                prefix.truncate(len);
            }
        }
    }
}
