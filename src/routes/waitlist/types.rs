#[derive(serde::Deserialize)]
pub struct SaveWaitlistRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    // Sent by the client for bookkeeping, not persisted.
    pub user_agent: Option<String>,
    pub timestamp: Option<String>,
}

#[derive(serde::Serialize)]
pub struct SaveWaitlistResponse {
    pub success: bool,
}

#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
