//! The HTTP client for the remote task service
//!
//! All paths are joined onto the configured base URL; every authenticated request
//! carries the bearer token handed out by the [`SessionGuard`], and any 401/403
//! response expires the session before the error is returned to the caller (so the
//! caller never mistakes it for success).

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::StatusCode;
use serde::Deserialize;
use url::Url;

use crate::comment::{Comment, NewComment};
use crate::config::Config;
use crate::editor::{CreateTask, UpdateTask};
use crate::error::{Error, Result};
use crate::person::Person;
use crate::session::SessionGuard;
use crate::task::{StatusCounts, Task};
use crate::traits::RemoteSource;

/// The wire speaks JavaScript `Date.getMonth()` months (0-11); the Rust API speaks
/// chrono months (1-12). The conversion lives here and nowhere else.
fn wire_month(month: u32) -> u32 {
    month - 1
}

pub struct Client {
    http: reqwest::Client,
    base_url: Url,
    session: Arc<SessionGuard>,
}

#[derive(Deserialize)]
struct VerifyOtpResponse {
    token: String,
}

impl Client {
    pub fn new(config: &Config, session: Arc<SessionGuard>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.clone(),
            session,
        }
    }

    pub fn session(&self) -> &Arc<SessionGuard> {
        &self.session
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    /// Ask the server to email a one-time password. Unauthenticated
    pub async fn send_otp(&self, email: &str) -> Result<()> {
        let url = self.endpoint("users/send-otp")?;
        let mut body = HashMap::new();
        body.insert("email", email);
        let response = self.http.post(url).json(&body).send().await?;
        check_public(response).await?;
        Ok(())
    }

    /// Trade the emailed code for a bearer token, and store it in the session.
    /// Unauthenticated; a rejected code is an `Api` error, not a session expiry
    pub async fn verify_otp(&self, email: &str, otp: &str) -> Result<String> {
        let url = self.endpoint("users/verify-otp")?;
        let mut body = HashMap::new();
        body.insert("email", email);
        body.insert("otp", otp);
        let response = self.http.post(url).json(&body).send().await?;
        let parsed: VerifyOtpResponse = check_public(response).await?.json().await?;
        self.session.login(&parsed.token);
        Ok(parsed.token)
    }

    /// Map 401/403 to a session expiry, any other non-success to `Error::Api`
    async fn check(&self, response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            self.session.expire();
            return Err(Error::Unauthorized);
        }
        fail_on_status(response, status).await
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, String)],
    ) -> Result<T> {
        let token = self.session.bearer()?;
        let response = self
            .http
            .get(url)
            .query(query)
            .bearer_auth(token)
            .send()
            .await?;
        Ok(self.check(response).await?.json().await?)
    }
}

/// Status check for the unauthenticated login endpoints: no session to expire
async fn check_public(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    fail_on_status(response, status).await
}

async fn fail_on_status(
    response: reqwest::Response,
    status: StatusCode,
) -> Result<reqwest::Response> {
    if status.is_success() {
        Ok(response)
    } else {
        let message = response.text().await.unwrap_or_default();
        Err(Error::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl RemoteSource for Client {
    async fn tasks_for_month(&self, year: i32, month: u32) -> Result<Vec<Task>> {
        let url = self.endpoint("tasks")?;
        self.get_json(
            url,
            &[
                ("month", wire_month(month).to_string()),
                ("year", year.to_string()),
            ],
        )
        .await
    }

    async fn task_counts(&self, year: i32, month: u32) -> Result<HashMap<NaiveDate, StatusCounts>> {
        let url = self.endpoint("tasks/counts")?;
        self.get_json(
            url,
            &[
                ("month", wire_month(month).to_string()),
                ("year", year.to_string()),
            ],
        )
        .await
    }

    async fn tasks_for_day(&self, date: NaiveDate) -> Result<Vec<Task>> {
        let url = self.endpoint("tasks/day")?;
        self.get_json(url, &[("date", date.format("%Y-%m-%d").to_string())])
            .await
    }

    async fn create_task(&self, body: &CreateTask) -> Result<Task> {
        let url = self.endpoint("tasks")?;
        let token = self.session.bearer()?;
        let response = self.http.post(url).bearer_auth(token).json(body).send().await?;
        Ok(self.check(response).await?.json().await?)
    }

    async fn update_task(&self, task_id: &str, body: &UpdateTask) -> Result<Task> {
        let url = self.endpoint(&format!("tasks/{}", task_id))?;
        let token = self.session.bearer()?;
        let response = self.http.patch(url).bearer_auth(token).json(body).send().await?;
        Ok(self.check(response).await?.json().await?)
    }

    async fn search_users(&self, query: &str) -> Result<Vec<Person>> {
        let url = self.endpoint("users/search")?;
        self.get_json(url, &[("q", query.to_string())]).await
    }

    async fn comments(&self, task_id: &str) -> Result<Vec<Comment>> {
        let url = self.endpoint(&format!("comment/{}", task_id))?;
        self.get_json(url, &[]).await
    }

    async fn add_comment(&self, task_id: &str, description: &str) -> Result<Comment> {
        let url = self.endpoint("comment")?;
        let token = self.session.bearer()?;
        let body = NewComment {
            description: description.trim().to_string(),
            task_id: task_id.to_string(),
        };
        let response = self.http.post(url).bearer_auth(token).json(&body).send().await?;
        Ok(self.check(response).await?.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn months_are_zero_based_on_the_wire() {
        assert_eq!(wire_month(1), 0);
        assert_eq!(wire_month(12), 11);
    }

    #[test]
    fn endpoints_join_onto_the_base_url() {
        let config = Config::new(Url::parse("http://localhost:3003/").unwrap());
        let sink = Arc::new(crate::notify::MemorySink::new());
        let store = Arc::new(crate::session::MemoryTokenStore::new());
        let session = Arc::new(SessionGuard::new(store, sink));
        let client = Client::new(&config, session);

        assert_eq!(client.endpoint("tasks").unwrap().as_str(), "http://localhost:3003/tasks");
        assert_eq!(
            client.endpoint("comment/42").unwrap().as_str(),
            "http://localhost:3003/comment/42"
        );
    }
}
