// src/query/mutation.rs - Mutation executor

//! Create/update/delete/status-change calls share one contract: at most one
//! in-flight mutation per handle, cache invalidation only after the success
//! response, 422 maps onto per-field messages, and everything else becomes
//! one generic message. The form keeps the user's input on failure.

use std::future::Future;

use dioxus::prelude::*;
use tracing::warn;

use crate::error::{Error, ErrorKind, FieldErrors};
use crate::query::{use_query_cache, QueryCache, ResourceKind};

/// How a failed mutation surfaces to the user.
#[derive(Debug, PartialEq)]
pub(crate) enum Failure {
    /// Field-keyed messages attach to their inputs.
    Fields(FieldErrors),
    /// One generic notification; the view stays interactive.
    Message(String),
    /// The global 401 handler already redirected; show nothing here.
    Unauthorized,
}

pub(crate) fn classify_failure(error: &Error) -> Failure {
    match &error.kind {
        ErrorKind::Unauthorized => Failure::Unauthorized,
        ErrorKind::Validation { errors } => Failure::Fields(errors.clone()),
        _ => Failure::Message(error.message.clone()),
    }
}

#[derive(Clone, Copy)]
pub struct Mutation {
    cache: QueryCache,
    /// True while a call is in flight; submit controls disable on this.
    pub pending: Signal<bool>,
    pub field_errors: Signal<FieldErrors>,
    pub error: Signal<Option<String>>,
}

pub fn use_mutation() -> Mutation {
    let cache = use_query_cache();
    Mutation {
        cache,
        pending: use_signal(|| false),
        field_errors: use_signal(FieldErrors::new),
        error: use_signal(|| None),
    }
}

impl Mutation {
    /// Runs the mutation future. Re-entrant calls while pending are dropped,
    /// preventing duplicate submissions. On success every named resource is
    /// invalidated (so mounted lists refetch) before `on_success` runs.
    pub fn execute<T, F>(
        &self,
        invalidates: &[ResourceKind],
        fut: F,
        on_success: impl FnOnce(T) + 'static,
    ) where
        F: Future<Output = crate::error::Result<T>> + 'static,
        T: 'static,
    {
        if *self.pending.peek() {
            return;
        }

        let cache = self.cache;
        let invalidates = invalidates.to_vec();
        let mut pending = self.pending;
        let mut field_errors = self.field_errors;
        let mut error = self.error;

        pending.set(true);
        spawn(async move {
            match fut.await {
                Ok(value) => {
                    field_errors.set(FieldErrors::new());
                    error.set(None);
                    for resource in &invalidates {
                        cache.invalidate(*resource);
                    }
                    on_success(value);
                }
                Err(e) => match classify_failure(&e) {
                    Failure::Fields(fields) => {
                        field_errors.set(fields);
                        error.set(None);
                    }
                    Failure::Message(message) => {
                        warn!(error = %e, "mutation failed");
                        field_errors.set(FieldErrors::new());
                        error.set(Some(message));
                    }
                    Failure::Unauthorized => {}
                },
            }
            pending.set(false);
        });
    }

    /// Applies client-side validation results without a server round-trip.
    pub fn reject(&self, fields: FieldErrors) {
        let mut field_errors = self.field_errors;
        field_errors.set(fields);
    }

    pub fn clear_errors(&self) {
        let mut field_errors = self.field_errors;
        field_errors.set(FieldErrors::new());
        let mut error = self.error;
        error.set(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_failure_maps_to_fields() {
        let mut fields = FieldErrors::new();
        fields.push("name", "Name is required");
        let outcome = classify_failure(&Error::validation(fields.clone()));
        assert_eq!(outcome, Failure::Fields(fields));
    }

    #[test]
    fn test_generic_failure_maps_to_message() {
        let outcome = classify_failure(&Error::http(500, "/seller/coupons", "Server error"));
        assert_eq!(outcome, Failure::Message("Server error".to_string()));

        let outcome = classify_failure(&Error::network("/seller/coupons", "offline"));
        assert_eq!(outcome, Failure::Message("offline".to_string()));
    }

    #[test]
    fn test_unauthorized_is_silent_here() {
        let outcome = classify_failure(&Error::unauthorized());
        assert_eq!(outcome, Failure::Unauthorized);
    }
}
