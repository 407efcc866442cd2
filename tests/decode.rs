/// Decoder fixture suite
///
/// Runs the JSON cases in `decode/decode_cases.json` against the query
/// string decoder and encoder.
#[path = "decode/decode_loader.rs"]
mod decode_loader;

#[path = "decode/decode_runner.rs"]
mod decode_runner;
