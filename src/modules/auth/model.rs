use serde::{Deserialize, Serialize};

// Sign-in page query parameters
#[derive(Debug, Deserialize)]
pub struct SignInQuery {
    #[serde(rename = "redirectTo")]
    pub redirect_to: Option<String>,
}

// Sign-in page data
#[derive(Debug, Serialize)]
pub struct SignInPage {
    /// Validated return target, echoed back to the client for use after
    /// authentication.
    pub redirect_to: Option<String>,
}
