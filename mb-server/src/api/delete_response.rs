use serde::Serialize;

/// Response returned after a successful delete
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
}
