use std::fmt::{Debug, Display};

/// Log and discard the error side of a best-effort operation.
pub trait OrLog {
    fn or_log(&self, context: impl Display);
}

impl<T, E: Debug> OrLog for Result<T, E> {
    fn or_log(&self, context: impl Display) {
        if let Err(e) = &self {
            tracing::debug!("Error: {:?} ({})", e, context);
        }
    }
}
