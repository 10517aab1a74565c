//! Operation outcomes
//!
//! Every public storage operation reports through an [`Outcome`]: either the
//! produced value or the list of messages explaining why it failed.

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::error::StorageError;

/// Success with data, or failure with the collected messages in reporting order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Success(T),
    Failure(Vec<String>),
}

impl<T> Outcome<T> {
    pub fn success(data: T) -> Self {
        Outcome::Success(data)
    }

    /// Failure carrying a single message.
    pub fn failure(message: impl Into<String>) -> Self {
        Outcome::Failure(vec![message.into()])
    }

    pub fn failures(messages: Vec<String>) -> Self {
        Outcome::Failure(messages)
    }

    /// Success when no error was collected, failure with all of them otherwise.
    pub fn from_errors(errors: Vec<String>, data: T) -> Self {
        if errors.is_empty() {
            Outcome::Success(data)
        } else {
            Outcome::Failure(errors)
        }
    }

    /// Failure copying the messages of `other`, whatever its payload type.
    pub fn clone_failure_from<U>(other: &Outcome<U>) -> Self {
        Outcome::Failure(other.errors().to_vec())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Messages of a failure; empty on success.
    pub fn errors(&self) -> &[String] {
        match self {
            Outcome::Success(_) => &[],
            Outcome::Failure(errors) => errors,
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Outcome::Success(data) => Some(data),
            Outcome::Failure(_) => None,
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            Outcome::Success(data) => Some(data),
            Outcome::Failure(_) => None,
        }
    }

    pub fn into_result(self) -> Result<T, Vec<String>> {
        match self {
            Outcome::Success(data) => Ok(data),
            Outcome::Failure(errors) => Err(errors),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U> {
        match self {
            Outcome::Success(data) => Outcome::Success(f(data)),
            Outcome::Failure(errors) => Outcome::Failure(errors),
        }
    }
}

impl Outcome<()> {
    /// Success without data.
    pub fn done() -> Self {
        Outcome::Success(())
    }
}

impl<T> From<StorageError> for Outcome<T> {
    fn from(error: StorageError) -> Self {
        Outcome::failure(error.to_string())
    }
}

/// Serialized as the `{ success, errors, data }` envelope.
impl<T: Serialize> Serialize for Outcome<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Outcome", 3)?;
        state.serialize_field("success", &self.is_success())?;
        state.serialize_field("errors", self.errors())?;
        state.serialize_field("data", &self.data())?;
        state.end()
    }
}
