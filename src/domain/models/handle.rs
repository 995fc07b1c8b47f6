use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

macro_rules! opaque_handle {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Accept a raw identifier from a request, rejecting absent or blank values.
            /// The id itself is kept byte-for-byte.
            pub fn parse(raw: Option<&str>) -> Result<Self, DomainError> {
                match raw {
                    Some(id) if !id.trim().is_empty() => Ok(Self(id.to_string())),
                    _ => Err(DomainError::validation(concat!($label, " is required"))),
                }
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

opaque_handle!(
    /// Identifier of an upstream-owned conversation (an assistant "thread").
    ConversationHandle,
    "thread_id"
);

opaque_handle!(
    /// Identifier of an upstream-owned run over a conversation.
    RunHandle,
    "run_id"
);
