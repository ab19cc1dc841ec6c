//! DummyJSON users endpoint
//!
//! `GET {url}?limit={n}` returns `{ "users": [...], "total", "skip", "limit" }`.
//! Only the fields an employee needs are decoded; everything else is ignored.

use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::domain::entities::SourceRecord;
use crate::domain::ports::{EmployeeSource, SourceError};
use crate::domain::value_objects::EmployeeId;

pub const DEFAULT_SOURCE_URL: &str = "https://dummyjson.com/users";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Deserialize)]
struct UsersPage {
    users: Vec<RemoteUser>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RemoteUser {
    id: u32,
    first_name: String,
    last_name: String,
    email: String,
    age: u32,
    phone: String,
    address: RemoteAddress,
}

#[derive(Debug, Deserialize)]
struct RemoteAddress {
    address: String,
    city: String,
}

impl From<RemoteUser> for SourceRecord {
    fn from(user: RemoteUser) -> Self {
        SourceRecord {
            id: EmployeeId::new(user.id),
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            age: user.age,
            street: user.address.address,
            city: user.address.city,
            phone: user.phone,
        }
    }
}

/// Decode a users page body into source records, in upstream order.
pub fn decode_users(body: &str) -> Result<Vec<SourceRecord>, SourceError> {
    let page: UsersPage = serde_json::from_str(body).map_err(|e| SourceError::Malformed {
        message: e.to_string(),
    })?;
    Ok(page.users.into_iter().map(SourceRecord::from).collect())
}

pub struct HttpEmployeeSource {
    url: String,
    timeout: Duration,
}

impl HttpEmployeeSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for HttpEmployeeSource {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE_URL)
    }
}

impl EmployeeSource for HttpEmployeeSource {
    fn fetch(&self, limit: usize) -> Result<Vec<SourceRecord>, SourceError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| SourceError::Transport {
                message: e.to_string(),
            })?;

        debug!(url = %self.url, limit, "GET users");
        let response = client
            .get(&self.url)
            .query(&[("limit", limit)])
            .send()
            .map_err(|e| SourceError::Transport {
                message: e.to_string(),
            })?;

        let status = response.status();
        let body = response.text().map_err(|e| SourceError::Transport {
            message: format!("failed to read response: {e}"),
        })?;

        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        decode_users(&body)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
