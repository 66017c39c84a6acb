//! Notification headers attached to write responses.
//!
//! A frontend reads `X-<app>-alert` (success message) or `X-<app>-error`
//! (translation key) together with `X-<app>-params` to show a toast after
//! a create, update or delete.

use axum::http::header::{HeaderMap, HeaderName, HeaderValue, InvalidHeaderName};
use salesboard_core::types::DbId;

/// Pre-built header names for one application prefix.
#[derive(Debug, Clone)]
pub struct AlertHeaders {
    alert: HeaderName,
    error: HeaderName,
    params: HeaderName,
}

impl AlertHeaders {
    /// Build the header names `X-{app}-alert`, `X-{app}-error` and `X-{app}-params`.
    ///
    /// Fails if `app` contains characters not allowed in a header name.
    pub fn new(app: &str) -> Result<Self, InvalidHeaderName> {
        Ok(Self {
            alert: HeaderName::try_from(format!("x-{app}-alert"))?,
            error: HeaderName::try_from(format!("x-{app}-error"))?,
            params: HeaderName::try_from(format!("x-{app}-params"))?,
        })
    }

    /// All header names, for CORS `expose_headers`.
    pub fn names(&self) -> [HeaderName; 3] {
        [self.alert.clone(), self.error.clone(), self.params.clone()]
    }

    pub fn alert(&self, message: String, param: String) -> HeaderMap {
        let mut headers = HeaderMap::new();
        insert(&mut headers, &self.alert, message);
        insert(&mut headers, &self.params, param);
        headers
    }

    pub fn entity_creation(&self, entity: &str, id: DbId) -> HeaderMap {
        self.alert(
            format!("A new {entity} is created with identifier {id}"),
            id.to_string(),
        )
    }

    pub fn entity_update(&self, entity: &str, id: DbId) -> HeaderMap {
        self.alert(
            format!("A {entity} is updated with identifier {id}"),
            id.to_string(),
        )
    }

    pub fn entity_deletion(&self, entity: &str, id: DbId) -> HeaderMap {
        self.alert(
            format!("A {entity} is deleted with identifier {id}"),
            id.to_string(),
        )
    }

    /// Headers for a rejected write; `error_key` becomes `error.{error_key}`.
    pub fn failure(&self, entity: &str, error_key: &str, message: &str) -> HeaderMap {
        tracing::warn!(entity, error_key, message, "Entity operation rejected");
        let mut headers = HeaderMap::new();
        insert(&mut headers, &self.error, format!("error.{error_key}"));
        insert(&mut headers, &self.params, entity.to_string());
        headers
    }
}

fn insert(headers: &mut HeaderMap, name: &HeaderName, value: String) {
    match HeaderValue::try_from(value) {
        Ok(value) => {
            headers.insert(name.clone(), value);
        }
        Err(e) => tracing::warn!(header = %name, error = %e, "Dropping invalid header value"),
    }
}
