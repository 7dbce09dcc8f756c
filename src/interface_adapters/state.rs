use std::sync::Arc;

use crate::domain::{Authorizer, QrEncoder};

#[derive(Clone)]
pub struct AppState {
    // Arc<dyn Trait> so tests can swap in fake collaborators.
    pub encoder: Arc<dyn QrEncoder>,
    pub authorizer: Arc<dyn Authorizer>,
    // Path the editor widget posts preview refreshes to.
    pub refresh_url: Arc<str>,
    // Nonce embedded into rendered widgets, if one is configured.
    pub widget_nonce: Option<Arc<str>>,
}

// Accepts callers presenting the shared nonce configured for this deployment.
#[derive(Clone)]
pub struct SharedNonceAuthorizer {
    expected: String,
}

impl SharedNonceAuthorizer {
    pub fn new(expected: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl Authorizer for SharedNonceAuthorizer {
    fn is_authorized(&self, nonce: Option<&str>) -> bool {
        nonce.is_some_and(|nonce| !nonce.is_empty() && nonce == self.expected)
    }
}

// Used when the host already gates access in front of this service.
#[derive(Clone, Copy, Default)]
pub struct AllowAllAuthorizer;

impl Authorizer for AllowAllAuthorizer {
    fn is_authorized(&self, _nonce: Option<&str>) -> bool {
        true
    }
}
