//! Error types for document persistence and value conversion.
//!
//! The failure taxonomy of this crate is deliberately small. Lookups that
//! can miss ([`Value`](crate::Value) accessors, [`Arguments::get`](crate::Arguments::get),
//! [`Properties::get`](crate::Properties::get)) report absence through
//! `Option` rather than an error, and removals report a missing index or
//! key as `None`. The only operations that can genuinely fail are the
//! ones that touch the outside world (writing a rendered document to a
//! file or an `io::Write` destination) and the strict `TryFrom<Value>`
//! conversions.

use std::fmt;
use thiserror::Error;

/// Represents all possible errors this crate can produce.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error while writing a rendered document to its destination
    #[error("IO error: {0}")]
    Io(String),

    /// Generic message, used by fallible value conversions
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates an I/O error for file or writer failures.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kdl_tree::Error;
    ///
    /// let err = Error::io("permission denied");
    /// assert!(err.to_string().contains("permission denied"));
    /// ```
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates an error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kdl_tree::Error;
    ///
    /// let err = Error::custom("expected integer, found string");
    /// assert!(err.to_string().contains("expected integer"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
