// Client-side session holder

/// Holds the bearer token between requests, the way the browser keeps it
/// in local storage. Owned entirely by the client; the server never stores
/// sessions.
#[derive(Debug, Default, Clone)]
pub struct SessionHolder {
    token: Option<String>,
}

impl SessionHolder {
    pub fn new() -> Self {
        Self { token: None }
    }

    /// Retain a token issued at login.
    pub fn store(&mut self, token: String) {
        self.token = Some(token);
    }

    /// Value for the `Authorization` header, if a session is held.
    pub fn authorization(&self) -> Option<String> {
        self.token.as_ref().map(|token| format!("Bearer {}", token))
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Logout: drop the token. The next protected navigation is anonymous.
    pub fn clear(&mut self) {
        self.token = None;
    }

    pub fn is_anonymous(&self) -> bool {
        self.token.is_none()
    }
}
