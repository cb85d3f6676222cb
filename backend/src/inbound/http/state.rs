//! Shared HTTP adapter state.
//!
//! Handlers receive this via `web::Data` so they depend only on domain ports
//! and stay testable without a running store.

use std::sync::Arc;

use odata_support::EdmModel;

use super::odata::book_model;
use crate::domain::ports::BooksQuery;

/// Response to a lookup that matches no book.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NotFoundPolicy {
    /// Success status with an empty body.
    #[default]
    Permissive,
    /// 404 with the standard error payload.
    Strict,
}

impl NotFoundPolicy {
    /// Map the `strict_not_found` switch onto a policy.
    #[must_use]
    pub const fn from_strict(strict: bool) -> Self {
        if strict { Self::Strict } else { Self::Permissive }
    }
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Catalogue reads.
    pub books: Arc<dyn BooksQuery>,
    /// Entity model rendered by the service root and `$metadata`.
    pub model: Arc<EdmModel>,
    /// Behaviour for lookups that match nothing.
    pub not_found: NotFoundPolicy,
}

impl HttpState {
    /// Build state around the books port with the permissive policy.
    pub fn new(books: Arc<dyn BooksQuery>) -> Self {
        Self {
            books,
            model: Arc::new(book_model()),
            not_found: NotFoundPolicy::default(),
        }
    }

    /// Replace the not-found policy.
    #[must_use]
    pub fn with_not_found_policy(mut self, policy: NotFoundPolicy) -> Self {
        self.not_found = policy;
        self
    }
}
