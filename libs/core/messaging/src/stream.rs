//! Stream definitions.
//!
//! Domains declare their streams as types implementing [`StreamDef`] so the
//! stream name and cap live next to the domain that owns them, rather than
//! as loose string constants at call sites.

/// A named, length-capped event stream.
pub trait StreamDef {
    /// Stream name (e.g. "users:events").
    const STREAM_NAME: &'static str;

    /// Maximum approximate stream length before old entries are trimmed.
    const MAX_LENGTH: i64 = 100_000;

    fn stream_name() -> &'static str {
        Self::STREAM_NAME
    }

    fn max_length() -> i64 {
        Self::MAX_LENGTH
    }
}
