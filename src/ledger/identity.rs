//! Owner identity resolution.
//!
//! The account service is an external collaborator: given a ledger address
//! it may or may not know a profile. Absence is a normal outcome, so the
//! resolver never fails; it falls back to an abbreviation of the address.

use serde::Deserialize;
use tracing::debug;

/// Profile data an account service may hold for an address.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Account {
    #[serde(default)]
    pub handle: Option<String>,
    #[serde(default)]
    pub profile: Profile,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Profile {
    #[serde(default, rename = "handleName")]
    pub handle_name: Option<String>,
}

/// Account lookup boundary.
pub trait IdentityLookup {
    /// Look up the account registered for `address`, if any.
    fn account(&self, address: &str) -> Option<Account>;
}

/// HTTP-backed lookup against a JSON account service.
pub struct HttpIdentityLookup {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl HttpIdentityLookup {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl IdentityLookup for HttpIdentityLookup {
    fn account(&self, address: &str) -> Option<Account> {
        let url = format!("{}/{}", self.endpoint.trim_end_matches('/'), address);
        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .ok()?;

        if !response.status().is_success() {
            debug!(%address, status = %response.status(), "no account for address");
            return None;
        }

        response.json().ok()
    }
}

/// Abbreviate a ledger address as its first five characters, an ellipsis of
/// three dots and its last five characters.
pub fn abbreviate_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 10 {
        return address.to_string();
    }

    let head: String = chars[..5].iter().collect();
    let tail: String = chars[chars.len() - 5..].iter().collect();
    format!("{head}...{tail}")
}

/// Resolve the display name for an owner address.
///
/// Preference order: the profile's handle name, the account's raw handle,
/// then the abbreviated address. Empty handles count as absent.
pub fn resolve_creator(lookup: &dyn IdentityLookup, address: &str) -> String {
    let handle = lookup.account(address).and_then(|account| {
        account
            .profile
            .handle_name
            .filter(|name| !name.is_empty())
            .or(account.handle.filter(|name| !name.is_empty()))
    });

    handle.unwrap_or_else(|| abbreviate_address(address))
}
