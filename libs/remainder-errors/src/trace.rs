//! Correlation tokens attached to failed requests.

/// Length of a generated correlation token.
pub const TRACE_ID_LEN: usize = 8;

const ALPHABET: [char; 62] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i',
    'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z', 'A', 'B',
    'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U',
    'V', 'W', 'X', 'Y', 'Z',
];

/// Generate a fresh alphanumeric correlation token for support lookups.
#[must_use]
pub fn new_trace_id() -> String {
    nanoid::nanoid!(TRACE_ID_LEN, &ALPHABET)
}
