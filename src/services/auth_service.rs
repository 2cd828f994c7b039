use gloo_net::http::Request;
use web_sys::AbortController;

use crate::errors::ProfileError;
use crate::models::UserRecord;
use crate::state::LoadAbort;

/// Source of the currently authenticated user.
#[allow(async_fn_in_trait)]
pub trait CurrentUserApi {
    /// Single-shot fetch of the user owning `token`. No retry, no timeout.
    async fn fetch_current_user(&self, token: &str, abort: &LoadAbort) -> Result<UserRecord, ProfileError>;
}

/// `GET <endpoint>` with `Authorization: Bearer <token>` via gloo-net.
#[derive(Debug, Clone)]
pub struct HttpUserApi {
    endpoint: String,
}

impl HttpUserApi {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }
}

impl CurrentUserApi for HttpUserApi {
    async fn fetch_current_user(&self, token: &str, abort: &LoadAbort) -> Result<UserRecord, ProfileError> {
        let controller = AbortController::new().map_err(|e| ProfileError::from_js(&e))?;
        let signal = controller.signal();
        // El hook se desregistra al terminar la request
        let _registration = abort.on_abort(move || controller.abort());

        log::info!("👤 [AUTH] Obteniendo usuario actual: {}", self.endpoint);

        let response = Request::get(&self.endpoint)
            .header("Authorization", &bearer(token))
            .abort_signal(Some(&signal))
            .send()
            .await
            .map_err(|e| {
                if abort.is_aborted() {
                    ProfileError::Aborted
                } else {
                    ProfileError::Network(e.to_string())
                }
            })?;

        if !response.ok() {
            return Err(ProfileError::Status {
                status: response.status(),
                status_text: response.status_text(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ProfileError::Network(e.to_string()))?;

        UserRecord::from_body(&body)
    }
}

/// Valor del header Authorization
pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_header_value() {
        assert_eq!(bearer("abc.def"), "Bearer abc.def");
    }
}
