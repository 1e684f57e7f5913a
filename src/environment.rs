use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Base URL used when no override is configured.
pub const LOCAL_BACKEND_URL: &str = "http://localhost:8000/api";

/// Represents the backend deployments the admin client can talk to.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// Local development backend.
    #[default]
    Local,
    /// Backend at an operator-supplied base URL.
    Custom { backend_url: String },
}

impl Environment {
    /// Resolves the environment from an optional base URL override.
    ///
    /// An empty or whitespace-only override counts as absent.
    pub fn from_override(backend_url: Option<&str>) -> Self {
        match backend_url.map(str::trim) {
            Some(url) if !url.is_empty() => url.parse().unwrap_or_default(),
            _ => Environment::Local,
        }
    }

    /// Returns the backend API base URL associated with the environment.
    pub fn backend_url(&self) -> String {
        match self {
            Environment::Local => LOCAL_BACKEND_URL.to_string(),
            Environment::Custom { backend_url } => backend_url.clone(),
        }
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(());
        }
        if s.eq_ignore_ascii_case("local") || s == LOCAL_BACKEND_URL {
            return Ok(Environment::Local);
        }
        Ok(Environment::Custom {
            backend_url: s.to_string(),
        })
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
            Environment::Custom { .. } => write!(f, "Custom"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.backend_url())
    }
}
