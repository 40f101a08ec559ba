use corkboard_core::BoardError;
use serde::Serialize;

/// Success/failure envelope every handler returns.
///
/// Failures carry the machine-readable reason (`not_member`,
/// `list_not_found`, ...) so clients can branch without parsing prose.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(error: &BoardError) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(error.reason().to_string()),
        }
    }
}
