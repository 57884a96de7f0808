//! Fragment parameters for the hash router.
//!
//! Routing lives after `#`, so cross-application signals travel as a
//! query string inside the fragment: `#/?logout=true&from=dashboard`.
//! Parsing never fails; anything unrecognized is "no signal".

#[cfg(test)]
#[path = "fragment_test.rs"]
mod fragment_test;

/// A parsed `#/path?query` fragment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HashLocation {
    path: String,
    params: Vec<(String, String)>,
}

impl HashLocation {
    /// Parse `window.location.hash`. Accepts the value with or without `#`.
    #[must_use]
    pub fn parse(hash: &str) -> Self {
        let raw = hash.strip_prefix('#').unwrap_or(hash);
        let (path, query) = raw.split_once('?').unwrap_or((raw, ""));
        let params = url::form_urlencoded::parse(query.as_bytes()).into_owned().collect();
        Self { path: normalize_path(path), params }
    }

    /// Route path, always starting with `/`.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// First value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn has_params(&self) -> bool {
        !self.params.is_empty()
    }

    /// The fragment with its query removed: `#/?logout=true` becomes `#/`.
    #[must_use]
    pub fn without_params(&self) -> String {
        format!("#{}", self.path)
    }
}

fn normalize_path(path: &str) -> String {
    if path.is_empty() {
        "/".to_owned()
    } else if path.starts_with('/') {
        path.to_owned()
    } else {
        format!("/{path}")
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogoutParams {
    /// Which application initiated the logout (`dashboard`, `frontend`).
    pub from: Option<String>,
    /// `error=true`: the initiator failed part of its own cleanup.
    pub has_error: bool,
    /// Cache-busting `t` value, logged only.
    pub timestamp: Option<String>,
}

/// Cross-application signal carried in the fragment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FragmentSignal {
    None,
    Logout(LogoutParams),
    /// `auth=failed&from=dashboard`: the dashboard rejected a handed-off token.
    AuthFailed,
}

impl FragmentSignal {
    #[must_use]
    pub fn from_location(location: &HashLocation) -> Self {
        if location.get("logout") == Some("true") {
            return Self::Logout(LogoutParams {
                from: location.get("from").map(str::to_owned),
                has_error: location.get("error") == Some("true"),
                timestamp: location.get("t").map(str::to_owned),
            });
        }
        if location.get("auth") == Some("failed") && location.get("from") == Some("dashboard") {
            return Self::AuthFailed;
        }
        Self::None
    }

    #[must_use]
    pub fn from_hash(hash: &str) -> Self {
        Self::from_location(&HashLocation::parse(hash))
    }
}
