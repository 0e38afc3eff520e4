//! Classification of failed API calls.
//!
//! Views only care about three outcomes: the session is gone (forced
//! logout), the backend refused the request (show its message), or the call
//! never produced a usable answer.

use crate::requests::ApiErrorBody;

/// Exact message the backend sends with a 403 for deactivated accounts.
pub const DEACTIVATED_MESSAGE: &str = "Usuário desativado";

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("sessão expirada")]
    Unauthorized,
    #[error("{DEACTIVATED_MESSAGE}")]
    Deactivated,
    #[error("{}", .message.as_deref().unwrap_or("requisição recusada"))]
    Rejected { status: u16, message: Option<String> },
    #[error("falha de rede: {0}")]
    Network(String),
    #[error("resposta inválida: {0}")]
    Decode(String),
}

/// Why the client dropped the cached session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoutReason {
    Expired,
    Inactive,
}

impl LogoutReason {
    /// Public page the browser is sent to after the session is cleared.
    pub fn redirect_path(self) -> &'static str {
        match self {
            LogoutReason::Expired => "/",
            LogoutReason::Inactive => "/?reason=inactive",
        }
    }
}

impl ApiError {
    /// Maps a non-2xx response to an error.
    ///
    /// A 401 always ends the session; a 403 only does when the backend says
    /// the account was deactivated.
    pub fn from_response(status: u16, body: &ApiErrorBody) -> Self {
        let message = body.text();
        let deactivated = message.as_deref() == Some(DEACTIVATED_MESSAGE);
        match status {
            401 if deactivated => ApiError::Deactivated,
            401 => ApiError::Unauthorized,
            403 if deactivated => ApiError::Deactivated,
            _ => ApiError::Rejected { status, message },
        }
    }

    pub fn logout_reason(&self) -> Option<LogoutReason> {
        match self {
            ApiError::Unauthorized => Some(LogoutReason::Expired),
            ApiError::Deactivated => Some(LogoutReason::Inactive),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized => Some(401),
            ApiError::Deactivated => Some(403),
            ApiError::Rejected { status, .. } => Some(*status),
            ApiError::Network(_) | ApiError::Decode(_) => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Text for a toast or inline alert: the backend's own message when it
    /// sent one, the caller's generic text otherwise.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Rejected { message: Some(message), .. } => message.clone(),
            ApiError::Deactivated => DEACTIVATED_MESSAGE.to_string(),
            _ => fallback.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(message: &str) -> ApiErrorBody {
        ApiErrorBody { message: Some(message.to_string()), error: None }
    }

    #[test]
    fn unauthorized_forces_logout_to_home() {
        let error = ApiError::from_response(401, &ApiErrorBody::default());
        assert_eq!(error, ApiError::Unauthorized);
        assert_eq!(error.logout_reason().map(LogoutReason::redirect_path), Some("/"));
    }

    #[test]
    fn deactivated_forbidden_forces_logout_with_reason() {
        let error = ApiError::from_response(403, &body(DEACTIVATED_MESSAGE));
        assert_eq!(error, ApiError::Deactivated);
        assert_eq!(
            error.logout_reason().map(LogoutReason::redirect_path),
            Some("/?reason=inactive")
        );
    }

    #[test]
    fn other_forbidden_keeps_session() {
        let error = ApiError::from_response(403, &body("Acesso negado"));
        assert_eq!(error.logout_reason(), None);
        assert_eq!(error.user_message("Erro."), "Acesso negado");
    }

    #[test]
    fn user_message_falls_back_without_backend_text() {
        let error = ApiError::from_response(500, &ApiErrorBody::default());
        assert_eq!(error.user_message("Erro ao salvar alterações."), "Erro ao salvar alterações.");
        assert_eq!(ApiError::Network("offline".into()).user_message("Falhou"), "Falhou");
        assert!(ApiError::from_response(404, &ApiErrorBody::default()).is_not_found());
    }
}
