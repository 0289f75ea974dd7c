//! Precondition violations raised by the payload accessors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two alternatives of a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The success alternative.
    Ok,
    /// The failure alternative.
    Err,
}

impl Side {
    /// Returns the other alternative.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Ok => Self::Err,
            Self::Err => Self::Ok,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => formatter.write_str("ok"),
            Self::Err => formatter.write_str("err"),
        }
    }
}

/// A payload was requested from the side that is not live.
///
/// This is a programmer error, distinct from the failure channel of the
/// result itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("requested the {requested} payload of a result holding {}", .requested.opposite())]
pub struct AccessViolation {
    requested: Side,
}

impl AccessViolation {
    /// Create a violation for a request against `requested`.
    #[must_use]
    pub const fn new(requested: Side) -> Self {
        Self { requested }
    }

    /// The side the caller asked for.
    #[must_use]
    pub const fn requested(self) -> Side {
        self.requested
    }

    /// The side that was actually live.
    #[must_use]
    pub const fn live(self) -> Side {
        self.requested.opposite()
    }
}

/// Report a violated accessor precondition and abort the current thread.
#[cold]
#[track_caller]
#[expect(
    clippy::panic,
    reason = "wrong-side access is a contract violation, not a recoverable failure"
)]
pub(crate) fn violated(requested: Side) -> ! {
    let violation = AccessViolation::new(requested);
    tracing::error!(
        requested = %violation.requested(),
        live = %violation.live(),
        "result accessor precondition violated"
    );
    panic!("{violation}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::panic;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl CapturedLog {
        fn contents(&self) -> String {
            self.0
                .lock()
                .map(|buffer| String::from_utf8_lossy(&buffer).into_owned())
                .unwrap_or_default()
        }
    }

    impl io::Write for CapturedLog {
        fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
            let mut buffer = self
                .0
                .lock()
                .map_err(|_| io::Error::other("log buffer poisoned"))?;
            buffer.extend_from_slice(bytes);
            Ok(bytes.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn access_violation_message_names_both_sides() {
        let violation = AccessViolation::new(Side::Ok);
        assert_eq!(
            violation.to_string(),
            "requested the ok payload of a result holding err"
        );
        assert_eq!(violation.live(), Side::Err);

        let violation = AccessViolation::new(Side::Err);
        assert_eq!(
            violation.to_string(),
            "requested the err payload of a result holding ok"
        );
    }

    #[test]
    fn side_opposite_is_an_involution() {
        for side in [Side::Ok, Side::Err] {
            assert_ne!(side.opposite(), side);
            assert_eq!(side.opposite().opposite(), side);
        }
    }

    #[test]
    #[should_panic(expected = "requested the err payload of a result holding ok")]
    fn violated_panics_with_the_violation_message() {
        violated(Side::Err);
    }

    #[test]
    fn violation_is_logged_before_the_panic() {
        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        let outcome = tracing::subscriber::with_default(subscriber, || {
            panic::catch_unwind(|| {
                violated(Side::Ok);
            })
        });

        assert!(outcome.is_err());
        let contents = log.contents();
        assert!(
            contents.contains("result accessor precondition violated"),
            "log was: {contents}"
        );
        assert!(contents.contains("requested=ok"), "log was: {contents}");
        assert!(contents.contains("live=err"), "log was: {contents}");
    }

    #[test]
    fn side_serializes_as_lowercase_name() -> Result<(), serde_json::Error> {
        assert_eq!(serde_json::to_string(&Side::Ok)?, "\"ok\"");
        let parsed: Side = serde_json::from_str("\"err\"")?;
        assert_eq!(parsed, Side::Err);
        Ok(())
    }
}
