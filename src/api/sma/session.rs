use chrono::{DateTime, TimeDelta, Utc};
use http::{HeaderMap, HeaderValue, header};
use reqwest::Method;

use crate::{
    api::sma::{
        Client,
        endpoint::Endpoint,
        error::{Error, Result},
        models::AuthTokenInfo,
        transport::{Body, Request, SESSION_COOKIE, Transport},
    },
    prelude::{debug, info, instrument, warn},
};

/// Tokens closer than this to the expiration get refreshed proactively.
const REFRESH_MARGIN_SECS: i64 = 300;

/// What [`Client::login`] had to do.
#[derive(Copy, Clone, Debug, PartialEq, Eq, derive_more::Display)]
pub enum LoginOutcome {
    #[display("already logged in")]
    AlreadyLoggedIn,

    #[display("token refreshed")]
    TokenRefreshed,

    #[display("new token")]
    NewToken,
}

/// The token and the session cookie only ever exist together.
#[derive(Clone, Debug, Default)]
pub enum Session {
    #[default]
    NoSession,

    Authenticated {
        token: AuthTokenInfo,
        session_id: String,
    },
}

/// Next login step, decided without any I/O.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) enum LoginPlan {
    AlreadyLoggedIn,
    Refresh { refresh_token: String, session_id: String },
    PasswordGrant,
}

impl Session {
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    pub(super) fn plan(&self, now: DateTime<Utc>) -> LoginPlan {
        match self {
            Self::NoSession => LoginPlan::PasswordGrant,
            Self::Authenticated { token, .. }
                if token.time_until_expiration_at(now) > TimeDelta::seconds(REFRESH_MARGIN_SECS) =>
            {
                LoginPlan::AlreadyLoggedIn
            }
            Self::Authenticated { token, session_id } => LoginPlan::Refresh {
                refresh_token: token.refresh_token().to_owned(),
                session_id: session_id.clone(),
            },
        }
    }

    /// `Authorization` and `Cookie` headers of an authenticated request.
    pub(super) fn auth_headers(&self) -> Result<HeaderMap> {
        let Self::Authenticated { token, session_id } = self else {
            return Err(Error::NoSession);
        };
        let mut headers = session_cookie(session_id)?;
        let authorization = sensitive(&format!("Bearer {}", token.access_token()))?;
        headers.insert(header::AUTHORIZATION, authorization);
        Ok(headers)
    }
}

fn session_cookie(session_id: &str) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(header::COOKIE, sensitive(&format!("{SESSION_COOKIE}={session_id}"))?);
    Ok(headers)
}

fn sensitive(value: &str) -> Result<HeaderValue> {
    let mut value = HeaderValue::from_str(value).map_err(|_| {
        Error::Client("the appliance returned a token or cookie with invalid characters".to_owned())
    })?;
    value.set_sensitive(true);
    Ok(value)
}

fn form_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/x-www-form-urlencoded"),
    );
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
    headers
}

impl<T: Transport> Client<T> {
    /// Make sure there is a usable session.
    ///
    /// Keeps a token which is valid for more than 5 minutes, tries to refresh one that is about
    /// to expire, and falls back to the password grant when that fails or there is no session.
    #[instrument(skip_all, fields(host = self.config.authority()))]
    pub async fn login(&mut self) -> Result<LoginOutcome> {
        match self.session.plan(Utc::now()) {
            LoginPlan::AlreadyLoggedIn => {
                debug!("already logged in");
                return Ok(LoginOutcome::AlreadyLoggedIn);
            }
            LoginPlan::Refresh { refresh_token, session_id } => {
                debug!("refreshing the token…");
                match self.refresh_token(&refresh_token, &session_id).await {
                    Ok(session) => {
                        self.session = session;
                        info!("refreshed the token");
                        return Ok(LoginOutcome::TokenRefreshed);
                    }
                    Err(error) => {
                        warn!("failed to refresh the token, logging in again: {error:#}");
                        self.session = Session::NoSession;
                    }
                }
            }
            LoginPlan::PasswordGrant => {}
        }
        info!("logging in…");
        self.session = self.request_new_token().await?;
        info!("logged in");
        Ok(LoginOutcome::NewToken)
    }

    /// Revoke the refresh token and forget the session.
    ///
    /// Revocation is best effort: the local session gets cleared even when the appliance fails.
    #[instrument(skip_all, fields(host = self.config.authority()))]
    pub async fn logout(&mut self) -> Result {
        let Session::Authenticated { token, .. } = &self.session else {
            return Err(Error::NoSession);
        };
        info!("logging out…");
        let url = Endpoint::RevokeRefreshToken { refresh_token: token.refresh_token() }
            .url(&self.base_url)?;
        let request = Request::new(Method::DELETE, url)
            .with_headers(self.origin_headers.clone())
            .with_headers(self.session.auth_headers()?);
        if let Err(error) = self.send(request).await {
            warn!("failed to revoke the refresh token, ignoring: {error:#}");
        }
        self.session = Session::NoSession;
        Ok(())
    }

    async fn request_new_token(&self) -> Result<Session> {
        let (Some(username), Some(password)) = (&self.config.username, &self.config.password)
        else {
            return Err(Error::Configuration("username and password are required to log in"));
        };
        let request = Request::new(Method::POST, Endpoint::Token.url(&self.base_url)?)
            .with_headers(self.origin_headers.clone())
            .with_headers(form_headers())
            .with_body(Body::Form(vec![
                ("grant_type", "password".to_owned()),
                ("username", username.clone()),
                ("password", password.clone()),
            ]));
        self.send_parsed(request, |response| {
            let session_id = response.session_id.ok_or_else(|| {
                Error::Client(format!("`{SESSION_COOKIE}` cookie is missing in the token response"))
            })?;
            let token = AuthTokenInfo::from_json(&response.body)?;
            Ok(Session::Authenticated { token, session_id })
        })
        .await
    }

    /// The session cookie stays the same unless the appliance sets a new one.
    async fn refresh_token(&self, refresh_token: &str, session_id: &str) -> Result<Session> {
        let request = Request::new(Method::POST, Endpoint::Token.url(&self.base_url)?)
            .with_headers(self.origin_headers.clone())
            .with_headers(form_headers())
            .with_headers(session_cookie(session_id)?)
            .with_body(Body::Form(vec![
                ("grant_type", "refresh_token".to_owned()),
                ("refresh_token", refresh_token.to_owned()),
            ]));
        self.send_parsed(request, |response| {
            let token = AuthTokenInfo::from_json(&response.body)?;
            let session_id = response.session_id.unwrap_or_else(|| session_id.to_owned());
            Ok(Session::Authenticated { token, session_id })
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::api::sma::{
        testing::{ScriptedTransport, client, token_response},
        transport::Response,
    };

    fn token(expires_in: i64) -> AuthTokenInfo {
        AuthTokenInfo::new("access".to_owned(), "refresh".to_owned(), "Bearer".to_owned(), expires_in)
    }

    fn form(request: &Request) -> Vec<(&'static str, String)> {
        match &request.body {
            Body::Form(form) => form.clone(),
            body => panic!("not a form: {body:?}"),
        }
    }

    fn header_value<'a>(request: &'a Request, name: header::HeaderName) -> Option<&'a str> {
        request.headers.get(name).and_then(|value| value.to_str().ok())
    }

    #[test]
    fn test_plan_without_session_ok() {
        assert_eq!(Session::NoSession.plan(Utc::now()), LoginPlan::PasswordGrant);
    }

    #[test]
    fn test_plan_fresh_token_ok() {
        let session = Session::Authenticated { token: token(3600), session_id: "s".to_owned() };
        assert_eq!(session.plan(Utc::now()), LoginPlan::AlreadyLoggedIn);
    }

    #[test]
    fn test_plan_expiring_token_ok() {
        let token = token(3600);
        let now = token.granted_at() + TimeDelta::seconds(3600 - REFRESH_MARGIN_SECS);
        let session = Session::Authenticated { token, session_id: "s".to_owned() };
        assert_eq!(
            session.plan(now),
            LoginPlan::Refresh { refresh_token: "refresh".to_owned(), session_id: "s".to_owned() },
        );
    }

    #[test]
    fn test_plan_expired_token_ok() {
        let token = token(30);
        let now = token.granted_at() + TimeDelta::hours(1);
        let session = Session::Authenticated { token, session_id: "s".to_owned() };
        assert!(matches!(session.plan(now), LoginPlan::Refresh { .. }));
    }

    #[test]
    fn test_auth_headers_ok() -> Result {
        let session = Session::Authenticated { token: token(3600), session_id: "s".to_owned() };
        let headers = session.auth_headers()?;
        assert_eq!(headers[header::AUTHORIZATION], "Bearer access");
        assert_eq!(headers[header::COOKIE], "JSESSIONID=s");
        assert!(headers[header::AUTHORIZATION].is_sensitive());
        Ok(())
    }

    #[test]
    fn test_auth_headers_without_session_err() {
        assert!(matches!(Session::NoSession.auth_headers(), Err(Error::NoSession)));
    }

    #[tokio::test]
    async fn test_login_lifecycle_ok() -> Result {
        let transport = ScriptedTransport::default()
            .reply(Ok(token_response("access-1", "refresh-1", 30, Some("session-1"))))
            .reply(Ok(token_response("access-2", "refresh-2", 3600, None)));
        let mut client = client(transport.clone());

        assert_eq!(client.login().await?, LoginOutcome::NewToken);
        assert_eq!(client.login().await?, LoginOutcome::TokenRefreshed);
        assert_eq!(client.login().await?, LoginOutcome::AlreadyLoggedIn);

        let requests = transport.requests();
        assert_eq!(requests.len(), 2);

        let password_grant = &requests[0];
        assert_eq!(password_grant.method, Method::POST);
        assert_eq!(password_grant.url.as_str(), "http://sma.local/api/v1/token");
        assert_eq!(
            form(password_grant),
            [
                ("grant_type", "password".to_owned()),
                ("username", "test".to_owned()),
                ("password", "test123".to_owned()),
            ],
        );
        assert_eq!(header_value(password_grant, header::ORIGIN), Some("http://sma.local/api/v1"));
        assert_eq!(header_value(password_grant, header::HOST), Some("sma.local"));
        assert_eq!(
            header_value(password_grant, header::CONTENT_TYPE),
            Some("application/x-www-form-urlencoded"),
        );
        assert_eq!(header_value(password_grant, header::ACCEPT), Some("application/json"));
        assert_eq!(header_value(password_grant, header::COOKIE), None);

        let refresh = &requests[1];
        assert_eq!(
            form(refresh),
            [("grant_type", "refresh_token".to_owned()), ("refresh_token", "refresh-1".to_owned())],
        );
        assert_eq!(header_value(refresh, header::COOKIE), Some("JSESSIONID=session-1"));

        // The refresh response did not set a new cookie.
        let Session::Authenticated { token, session_id } = &client.session else {
            panic!("not authenticated");
        };
        assert_eq!(token.access_token(), "access-2");
        assert_eq!(session_id, "session-1");
        Ok(())
    }

    #[tokio::test]
    async fn test_failed_refresh_falls_back_to_password_ok() -> Result {
        let transport = ScriptedTransport::default()
            .reply(Ok(token_response("access-1", "refresh-1", 30, Some("session-1"))))
            .reply(Err(Error::Authentication { endpoint: "/api/v1/token".to_owned() }))
            .reply(Ok(token_response("access-2", "refresh-2", 3600, Some("session-2"))));
        let mut client = client(transport.clone());

        assert_eq!(client.login().await?, LoginOutcome::NewToken);
        assert_eq!(client.login().await?, LoginOutcome::NewToken);

        let requests = transport.requests();
        assert_eq!(requests.len(), 3);
        assert_eq!(form(&requests[2])[0], ("grant_type", "password".to_owned()));
        let Session::Authenticated { session_id, .. } = &client.session else {
            panic!("not authenticated");
        };
        assert_eq!(session_id, "session-2");
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_credentials_err() {
        let transport = ScriptedTransport::default();
        let config = crate::api::sma::ClientConfig::builder()
            .host("sma.local")
            .use_ssl(false)
            .username("test")
            .build();
        let mut client = Client::with_transport(config, transport.clone()).unwrap();

        let error = client.login().await.unwrap_err();
        assert!(matches!(error, Error::Configuration(_)), "{error}");
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_missing_session_cookie_err() {
        let transport = ScriptedTransport::default()
            .reply(Ok(token_response("access", "refresh", 3600, None)))
            .reply(Ok(token_response("access", "refresh", 3600, None)))
            .reply(Ok(token_response("access", "refresh", 3600, None)))
            .reply(Ok(token_response("access", "refresh", 3600, None)));
        let mut client = client(transport.clone());

        let error = client.login().await.unwrap_err();
        assert!(matches!(error, Error::Client(_)), "{error}");
        assert!(error.to_string().contains("JSESSIONID"), "{error}");
        assert!(!client.session.is_authenticated());
        assert_eq!(transport.requests().len(), 4);
    }

    #[tokio::test]
    async fn test_malformed_token_response_err() {
        let malformed = || {
            Ok(Response {
                body: json!({"access_token": "access"}),
                session_id: Some("session".to_owned()),
            })
        };
        let transport = ScriptedTransport::default()
            .reply(malformed())
            .reply(malformed())
            .reply(malformed())
            .reply(malformed());
        let mut client = client(transport.clone());

        let error = client.login().await.unwrap_err();
        assert!(matches!(error, Error::Parsing { .. }), "{error}");
        assert_eq!(transport.requests().len(), 4, "1 + 3 attempts");
    }

    #[tokio::test]
    async fn test_malformed_token_response_is_retried_ok() -> Result {
        let transport = ScriptedTransport::default()
            .reply(Ok(Response { body: json!({"access_token": "access"}), session_id: Some("session".to_owned()) }))
            .reply(Ok(token_response("access", "refresh", 3600, Some("session"))));
        let mut client = client(transport.clone());

        assert_eq!(client.login().await?, LoginOutcome::NewToken);
        assert!(client.session.is_authenticated());
        assert_eq!(transport.requests().len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_logout_ok() -> Result {
        let transport = ScriptedTransport::default()
            .reply(Ok(token_response("access", "a+b/c=", 3600, Some("session"))))
            .reply(Err(Error::Status {
                endpoint: "/api/v1/refreshtoken".to_owned(),
                status: reqwest::StatusCode::NOT_FOUND,
            }))
            .reply(Err(Error::Status {
                endpoint: "/api/v1/refreshtoken".to_owned(),
                status: reqwest::StatusCode::NOT_FOUND,
            }))
            .reply(Err(Error::Status {
                endpoint: "/api/v1/refreshtoken".to_owned(),
                status: reqwest::StatusCode::NOT_FOUND,
            }))
            .reply(Err(Error::Status {
                endpoint: "/api/v1/refreshtoken".to_owned(),
                status: reqwest::StatusCode::NOT_FOUND,
            }));
        let mut client = client(transport.clone());
        client.login().await?;

        // Revocation failures are swallowed.
        client.logout().await?;
        assert!(!client.session.is_authenticated());

        let requests = transport.requests();
        assert_eq!(requests.len(), 5, "one login and four revocation attempts");
        assert_eq!(requests[1].method, Method::DELETE);
        assert_eq!(
            requests[1].url.as_str(),
            "http://sma.local/api/v1/refreshtoken?refreshToken=a%2Bb%2Fc%3D",
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_logout_without_session_err() {
        let mut client = client(ScriptedTransport::default());
        assert!(matches!(client.logout().await, Err(Error::NoSession)));
    }
}
