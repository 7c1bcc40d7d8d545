use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::error::WebError;

/// The household's shared password, expected as a bearer token on
/// mutating endpoints.
#[derive(Clone)]
pub struct SharedPassword {
    password: String,
}

impl SharedPassword {
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
        }
    }

    /// An empty configured password never matches; writes stay locked
    /// rather than open.
    pub fn verify(&self, candidate: &str) -> bool {
        !self.password.is_empty() && self.password == candidate
    }
}

pub async fn require_auth(
    State(password): State<SharedPassword>,
    req: Request,
    next: Next,
) -> Result<Response, WebError> {
    let token = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    match token {
        Some(token) if password.verify(token) => Ok(next.run(req).await),
        _ => {
            tracing::warn!("Rejected request with missing or invalid password");
            Err(WebError::Unauthorized)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_exact_match() {
        let password = SharedPassword::new("hunter2");
        assert!(password.verify("hunter2"));
    }

    #[test]
    fn test_verify_rejects_mismatch() {
        let password = SharedPassword::new("hunter2");
        assert!(!password.verify("hunter"));
        assert!(!password.verify("HUNTER2"));
    }

    #[test]
    fn test_empty_password_never_matches() {
        let password = SharedPassword::new("");
        assert!(!password.verify(""));
        assert!(!password.verify("anything"));
    }
}
