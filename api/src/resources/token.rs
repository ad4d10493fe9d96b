use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct TenantId(pub String);

/// Short-lived bearer token handed out in exchange for an API key.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Token(pub String);

#[derive(Debug, Clone, Serialize)]
pub(crate) struct TokenQuery<'request> {
    pub tenant: &'request str,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TokenResponse {
    pub token: Token,
}
