//! Stream definitions for the users domain.

use messaging::StreamDef;

/// New-user events stream.
///
/// `UserService::create_user` appends one [`crate::UserCreatedEvent`] here
/// per successful creation. Consumers are external to this system.
pub struct UserEventStream;

impl StreamDef for UserEventStream {
    const STREAM_NAME: &'static str = "users:events";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_event_stream_def() {
        assert_eq!(UserEventStream::stream_name(), "users:events");
        assert_eq!(UserEventStream::max_length(), 100_000);
    }
}
