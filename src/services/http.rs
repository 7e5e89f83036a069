use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{RequestBuilder, Response, StatusCode, Url};
use serde_json::Value;

use super::{AuthService, BookingsService, ContactService};
use crate::errors::ApiError;
use crate::models::{
    AvailableTimes, Booking, BookingStatus, ContactMessage, LoginRequest, NewBooking,
    NewContactMessage, StatusUpdate, TokenResponse,
};
use crate::session::{BearerToken, Session};

/// `reqwest` client for the backend REST API rooted at `<base_url>/api`.
pub struct HttpApi {
    base_url: Url,
    client: reqwest::Client,
}

impl HttpApi {
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("invalid backend url: {base_url}"))?;
        anyhow::ensure!(
            !base_url.cannot_be_a_base(),
            "backend url must be hierarchical: {base_url}"
        );
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self { base_url, client })
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().push("api").extend(segments);
        }
        url
    }

    fn authorized(
        &self,
        request: RequestBuilder,
        session: &Session,
    ) -> Result<RequestBuilder, ApiError> {
        let token = session.token().ok_or(ApiError::Unauthorized)?;
        Ok(request.bearer_auth(token.as_str()))
    }
}

/// Map a non-success response to an `ApiError`. A 401 always means the
/// session is no longer accepted.
async fn ensure_success(resp: Response) -> Result<Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    if status == StatusCode::UNAUTHORIZED {
        return Err(ApiError::Unauthorized);
    }
    Err(rejection(resp).await)
}

async fn rejection(resp: Response) -> ApiError {
    let status = resp.status().as_u16();
    let body: Option<Value> = resp.json().await.ok();
    ApiError::Rejected {
        status,
        detail: body.as_ref().and_then(error_detail),
    }
}

/// Pull the human-readable message out of an error body. Validation
/// failures carry a list of `{msg}` objects; the first one wins.
pub fn error_detail(body: &Value) -> Option<String> {
    match body.get("detail")? {
        Value::String(detail) => Some(detail.clone()),
        Value::Array(items) => items
            .first()?
            .get("msg")?
            .as_str()
            .map(|s| s.to_string()),
        _ => None,
    }
}

#[async_trait]
impl AuthService for HttpApi {
    async fn login(&self, email: &str, password: &str) -> Result<BearerToken, ApiError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let resp = self
            .client
            .post(self.endpoint(&["auth", "login"]))
            .json(&body)
            .send()
            .await?;

        // A 401 here is a bad credential, not an expired session.
        if !resp.status().is_success() {
            return Err(rejection(resp).await);
        }

        let token: TokenResponse = resp.json().await?;
        Ok(BearerToken::new(token.access_token))
    }

    async fn verify(&self, session: &Session) -> Result<(), ApiError> {
        let request = self.client.get(self.endpoint(&["auth", "verify"]));
        let resp = self.authorized(request, session)?.send().await?;
        ensure_success(resp).await?;
        Ok(())
    }
}

#[async_trait]
impl BookingsService for HttpApi {
    async fn available_times(&self, date: NaiveDate) -> Result<Vec<String>, ApiError> {
        let date = date.format("%Y-%m-%d").to_string();
        let resp = self
            .client
            .get(self.endpoint(&["available-times"]))
            .query(&[("date", date.as_str())])
            .send()
            .await?;
        let times: AvailableTimes = ensure_success(resp).await?.json().await?;
        Ok(times.available_times)
    }

    async fn create(&self, booking: &NewBooking) -> Result<(), ApiError> {
        let resp = self
            .client
            .post(self.endpoint(&["bookings"]))
            .json(booking)
            .send()
            .await?;
        ensure_success(resp).await?;
        Ok(())
    }

    async fn list(&self, session: &Session) -> Result<Vec<Booking>, ApiError> {
        let request = self.client.get(self.endpoint(&["bookings"]));
        let resp = self.authorized(request, session)?.send().await?;
        Ok(ensure_success(resp).await?.json().await?)
    }

    async fn update_status(
        &self,
        session: &Session,
        id: &str,
        status: BookingStatus,
    ) -> Result<(), ApiError> {
        let request = self
            .client
            .patch(self.endpoint(&["bookings", id]))
            .json(&StatusUpdate { status });
        let resp = self.authorized(request, session)?.send().await?;
        ensure_success(resp).await?;
        Ok(())
    }

    async fn delete(&self, session: &Session, id: &str) -> Result<(), ApiError> {
        let request = self.client.delete(self.endpoint(&["bookings", id]));
        let resp = self.authorized(request, session)?.send().await?;
        ensure_success(resp).await?;
        Ok(())
    }
}

#[async_trait]
impl ContactService for HttpApi {
    async fn create(&self, message: &NewContactMessage) -> Result<(), ApiError> {
        let resp = self
            .client
            .post(self.endpoint(&["contact"]))
            .json(message)
            .send()
            .await?;
        ensure_success(resp).await?;
        Ok(())
    }

    async fn list(&self, session: &Session) -> Result<Vec<ContactMessage>, ApiError> {
        let request = self.client.get(self.endpoint(&["contact"]));
        let resp = self.authorized(request, session)?.send().await?;
        Ok(ensure_success(resp).await?.json().await?)
    }

    async fn delete(&self, session: &Session, id: &str) -> Result<(), ApiError> {
        let request = self.client.delete(self.endpoint(&["contact", id]));
        let resp = self.authorized(request, session)?.send().await?;
        ensure_success(resp).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_endpoint_joins_segments() {
        let api = HttpApi::new("http://backend.local:8001/", Duration::from_secs(1)).unwrap();
        assert_eq!(
            api.endpoint(&["bookings", "abc-123"]).as_str(),
            "http://backend.local:8001/api/bookings/abc-123"
        );

        let api = HttpApi::new("http://backend.local/prefix", Duration::from_secs(1)).unwrap();
        assert_eq!(
            api.endpoint(&["auth", "login"]).as_str(),
            "http://backend.local/prefix/api/auth/login"
        );
    }

    #[test]
    fn test_endpoint_escapes_ids() {
        let api = HttpApi::new("http://backend.local", Duration::from_secs(1)).unwrap();
        assert_eq!(
            api.endpoint(&["contact", "a/b"]).as_str(),
            "http://backend.local/api/contact/a%2Fb"
        );
    }

    #[test]
    fn test_rejects_bad_base_url() {
        assert!(HttpApi::new("not a url", Duration::from_secs(1)).is_err());
        assert!(HttpApi::new("mailto:someone@example.com", Duration::from_secs(1)).is_err());
    }

    #[test]
    fn test_error_detail() {
        assert_eq!(
            error_detail(&json!({"detail": "Invalid credentials"})).as_deref(),
            Some("Invalid credentials")
        );
        assert_eq!(
            error_detail(&json!({"detail": [{"msg": "value is not a valid email address"}]}))
                .as_deref(),
            Some("value is not a valid email address")
        );
        assert_eq!(error_detail(&json!({"error": "nope"})), None);
    }

    #[tokio::test]
    async fn test_authenticated_call_without_token_never_hits_network() {
        // Port 9 is discard; an actual request would fail with a transport error.
        let api = HttpApi::new("http://127.0.0.1:9", Duration::from_millis(200)).unwrap();
        let err = BookingsService::list(&api, &Session::Absent).await.unwrap_err();
        assert!(err.is_unauthorized());
        let err = ContactService::delete(&api, &Session::Expired, "m1").await.unwrap_err();
        assert!(err.is_unauthorized());
    }
}
