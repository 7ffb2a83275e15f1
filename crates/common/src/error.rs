use std::fmt::Display;

/// Error types that can be built from a plain message string.
pub trait FromMessage: Sized {
    fn from_message(message: String) -> Self;
}

/// Attach a message to a failure and convert it into any [`FromMessage`]
/// error.
///
/// The target error type is picked by the caller's return type:
///
/// ```ignore
/// use strata_common::Context;
///
/// fn parse(body: &str) -> Result<Listing, Error> {
///     serde_json::from_str(body).context("failed to parse listing")
/// }
/// ```
pub trait Context<T> {
    /// `Err(source)` becomes `"{context}: {source}"`; `None` becomes `context`.
    fn context<E: FromMessage>(self, context: impl Into<String>) -> Result<T, E>;

    /// Like [`Context::context`], building the message only on failure.
    fn with_context<E, C>(self, f: impl FnOnce() -> C) -> Result<T, E>
    where
        E: FromMessage,
        C: Into<String>;
}

impl<T, S: Display> Context<T> for Result<T, S> {
    fn context<E: FromMessage>(self, context: impl Into<String>) -> Result<T, E> {
        self.with_context(|| context)
    }

    fn with_context<E, C>(self, f: impl FnOnce() -> C) -> Result<T, E>
    where
        E: FromMessage,
        C: Into<String>,
    {
        self.map_err(|source| {
            let context: String = f().into();
            E::from_message(format!("{context}: {source}"))
        })
    }
}

impl<T> Context<T> for Option<T> {
    fn context<E: FromMessage>(self, context: impl Into<String>) -> Result<T, E> {
        self.with_context(|| context)
    }

    fn with_context<E, C>(self, f: impl FnOnce() -> C) -> Result<T, E>
    where
        E: FromMessage,
        C: Into<String>,
    {
        self.ok_or_else(|| E::from_message(f().into()))
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("{0}")]
    struct Error(String);

    impl FromMessage for Error {
        fn from_message(message: String) -> Self {
            Self(message)
        }
    }

    #[test]
    fn result_context_prefixes_source() {
        let parsed: Result<u8, Error> = "x".parse::<u8>().context("bad level");
        assert_eq!(parsed.unwrap_err().to_string(), "bad level: invalid digit found in string");
    }

    #[test]
    fn ok_passes_through_untouched() {
        let parsed: Result<u8, Error> = "7".parse::<u8>().context("bad level");
        assert_eq!(parsed.unwrap(), 7);
    }

    #[test]
    fn option_with_context_is_lazy() {
        let missing: Option<u8> = None;
        let err: Error = missing.with_context(|| format!("missing {}", "key")).unwrap_err();
        assert_eq!(err.to_string(), "missing key");

        let present: Result<u8, Error> = Some(1).with_context(|| -> String {
            panic!("message built for a present value")
        });
        assert_eq!(present.unwrap(), 1);
    }
}
