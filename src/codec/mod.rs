//! Form-style query string codec with bracket-nested keys.
//!
//! Decoding follows the conventions of common server-side form decoders:
//! `+` is a space, `name[a][b]` nests, `name[]` appends, and the last
//! plain assignment to a key wins. Encoding is the inverse for everything
//! except empty maps, which have no textual form.

mod decode;
mod encode;

pub use decode::{MAX_INPUT_VARS, MAX_NESTING_DEPTH, decode, decode_component};
pub use encode::{COMPONENT_SET, encode, encode_component_into};
