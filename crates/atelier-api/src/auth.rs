//! Admin gate for mutating routes.
//!
//! Every gated request carries the admin password in the `x-admin-pass`
//! header; there is no session state on the server. Comparison is
//! constant-time.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use subtle::ConstantTimeEq;

use crate::constants::ADMIN_PASS_HEADER;
use crate::error::HttpAppError;
use atelier_core::AppError;

#[derive(Clone)]
pub struct AdminAuthState {
    pub admin_password: String,
}

pub fn secure_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

pub async fn admin_auth_middleware(
    State(auth_state): State<Arc<AdminAuthState>>,
    request: Request,
    next: Next,
) -> Response {
    let provided = match request
        .headers()
        .get(ADMIN_PASS_HEADER)
        .and_then(|h| h.to_str().ok())
    {
        Some(h) => h,
        None => {
            return HttpAppError(AppError::Unauthorized(
                "Missing admin password header".to_string(),
            ))
            .into_response();
        }
    };

    if !secure_compare(provided, &auth_state.admin_password) {
        return HttpAppError(AppError::Unauthorized(
            "Invalid admin password".to_string(),
        ))
        .into_response();
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secure_compare() {
        assert!(secure_compare("hunter22", "hunter22"));
        assert!(!secure_compare("hunter22", "hunter23"));
        assert!(!secure_compare("hunter22", "hunter2"));
        assert!(!secure_compare("", "hunter22"));
    }
}
