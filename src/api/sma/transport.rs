use std::time::Duration;

use async_trait::async_trait;
use http::{HeaderMap, header};
use reqwest::{Method, StatusCode, Url};

use crate::{
    api::sma::error::{Error, Result},
    prelude::{Level, debug, instrument},
};

/// Session cookie set by the `token` endpoint.
pub const SESSION_COOKIE: &str = "JSESSIONID";

#[derive(Clone, Debug)]
pub enum Body {
    Empty,
    Json(serde_json::Value),

    /// `application/x-www-form-urlencoded`.
    Form(Vec<(&'static str, String)>),
}

#[must_use]
#[derive(Clone, derive_more::Debug)]
pub struct Request {
    pub method: Method,
    pub url: Url,

    #[debug(skip)]
    pub headers: HeaderMap,

    #[debug(skip)]
    pub body: Body,
}

impl Request {
    pub fn new(method: Method, url: Url) -> Self {
        Self { method, url, headers: HeaderMap::new(), body: Body::Empty }
    }

    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers.extend(headers);
        self
    }

    pub fn with_body(mut self, body: Body) -> Self {
        self.body = body;
        self
    }

    /// Path only: the query may carry a refresh token.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.url.path()
    }
}

#[must_use]
#[derive(Clone, Debug, Default)]
pub struct Response {
    /// `null` for an empty body.
    pub body: serde_json::Value,

    /// Value of the session cookie, if the response sets one.
    pub session_id: Option<String>,
}

/// Single HTTP exchange with the appliance, no retries.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: Request) -> Result<Response>;
}

/// [`Transport`] over [`reqwest`].
///
/// The client is built without a cookie store, so nothing gets cached between requests:
/// the session cookie is read from `Set-Cookie` and replayed explicitly.
pub struct HttpTransport(reqwest::Client);

impl HttpTransport {
    pub fn new(timeout: Duration, verify_ssl: bool) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .danger_accept_invalid_certs(!verify_ssl)
            .build()
            .map_err(|error| Error::Client(format!("failed to build the HTTP client: {error}")))?;
        Ok(Self(client))
    }

    fn classify(endpoint: &str, error: reqwest::Error) -> Error {
        let error = error.without_url();
        if error.is_timeout() {
            Error::Communication { endpoint: endpoint.to_owned(), message: "timed out".to_owned() }
        } else if error.is_connect() || error.is_request() || error.is_body() {
            Error::Communication { endpoint: endpoint.to_owned(), message: format!("{error:#}") }
        } else {
            Error::Client(format!("failed to call `{endpoint}`: {error:#}"))
        }
    }

    fn find_session_id(headers: &HeaderMap) -> Option<String> {
        headers
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .filter_map(|cookie| cookie.split(';').next()?.split_once('='))
            .find(|(name, _)| name.trim() == SESSION_COOKIE)
            .map(|(_, value)| value.trim().to_owned())
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(
        skip_all,
        level = Level::DEBUG,
        fields(method = %request.method, endpoint = request.endpoint()),
    )]
    async fn send(&self, request: Request) -> Result<Response> {
        let endpoint = request.endpoint().to_owned();
        let builder = self.0.request(request.method, request.url).headers(request.headers);
        let builder = match request.body {
            Body::Empty => builder,
            Body::Json(body) => builder.json(&body),
            Body::Form(form) => builder.form(&form),
        };
        let response =
            builder.send().await.map_err(|error| Self::classify(&endpoint, error))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            debug!(%status, "unauthorized");
            return Err(Error::Authentication { endpoint });
        }
        if !status.is_success() {
            return Err(Error::Status { endpoint, status });
        }

        let session_id = Self::find_session_id(response.headers());
        let bytes = response.bytes().await.map_err(|error| Self::classify(&endpoint, error))?;
        let body = if bytes.iter().all(u8::is_ascii_whitespace) {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).map_err(|error| Error::parsing("response body", error))?
        };
        debug!(%status, n_bytes = bytes.len(), "received");
        Ok(Response { body, session_id })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::{
        Mock,
        MockServer,
        ResponseTemplate,
        matchers::{body_json, body_string, header, method, path},
    };

    use super::*;

    fn transport() -> HttpTransport {
        HttpTransport::new(Duration::from_secs(5), true).unwrap()
    }

    fn url(server: &MockServer, path: &str) -> Url {
        Url::parse(&format!("{}{path}", server.uri())).unwrap()
    }

    #[tokio::test]
    async fn test_json_and_session_cookie_ok() -> Result {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/token"))
            .and(header("content-type", "application/x-www-form-urlencoded"))
            .and(body_string("grant_type=password&username=test&password=test123"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("Set-Cookie", "JSESSIONID=session-id; Path=/; HttpOnly")
                    .set_body_json(json!({"access_token": "abc"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let request = Request::new(Method::POST, url(&server, "/api/v1/token")).with_body(
            Body::Form(vec![
                ("grant_type", "password".to_owned()),
                ("username", "test".to_owned()),
                ("password", "test123".to_owned()),
            ]),
        );
        let response = transport().send(request).await?;
        assert_eq!(response.session_id.as_deref(), Some("session-id"));
        assert_eq!(response.body, json!({"access_token": "abc"}));
        Ok(())
    }

    #[tokio::test]
    async fn test_json_body_ok() -> Result {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/measurements/live"))
            .and(body_json(json!([{"componentId": "Plant:1"}])))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let request = Request::new(Method::POST, url(&server, "/api/v1/measurements/live"))
            .with_body(Body::Json(json!([{"componentId": "Plant:1"}])));
        let response = transport().send(request).await?;
        assert_eq!(response.body, json!([]));
        assert_eq!(response.session_id, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_empty_body_ok() -> Result {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let request = Request::new(Method::DELETE, url(&server, "/api/v1/refreshtoken"));
        assert_eq!(transport().send(request).await?.body, serde_json::Value::Null);
        Ok(())
    }

    #[tokio::test]
    async fn test_unauthorized_err() {
        let server = MockServer::start().await;
        Mock::given(path("/api/v1/navigation"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;
        Mock::given(path("/api/v1/widgets/deviceinfo"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        for endpoint in ["/api/v1/navigation", "/api/v1/widgets/deviceinfo"] {
            let request = Request::new(Method::GET, url(&server, endpoint));
            let error = transport().send(request).await.unwrap_err();
            assert!(error.is_authentication(), "{error}");
        }
    }

    #[tokio::test]
    async fn test_server_error_err() {
        let server = MockServer::start().await;
        Mock::given(path("/api/v1/navigation"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let request = Request::new(Method::GET, url(&server, "/api/v1/navigation"));
        match transport().send(request).await {
            Err(Error::Status { status, .. }) => assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_invalid_json_err() {
        let server = MockServer::start().await;
        Mock::given(path("/api/v1/navigation"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let request = Request::new(Method::GET, url(&server, "/api/v1/navigation"));
        let error = transport().send(request).await.unwrap_err();
        assert!(matches!(error, Error::Parsing { .. }), "{error}");
    }

    #[tokio::test]
    async fn test_timeout_err() {
        let server = MockServer::start().await;
        Mock::given(path("/api/v1/navigation"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
            .mount(&server)
            .await;

        let transport = HttpTransport::new(Duration::from_millis(100), true).unwrap();
        let request = Request::new(Method::GET, url(&server, "/api/v1/navigation"));
        let error = transport.send(request).await.unwrap_err();
        assert!(matches!(error, Error::Communication { .. }), "{error}");
    }

    #[tokio::test]
    async fn test_connection_refused_err() {
        // Bind and drop to get a port nobody listens on.
        let port = std::net::TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port();
        let request = Request::new(
            Method::GET,
            Url::parse(&format!("http://127.0.0.1:{port}/api/v1/navigation")).unwrap(),
        );
        let error = transport().send(request).await.unwrap_err();
        assert!(matches!(error, Error::Communication { .. }), "{error}");
    }

    #[test]
    fn test_find_session_id_ok() {
        let mut headers = HeaderMap::new();
        headers.append(http::header::SET_COOKIE, "lang=en; Path=/".parse().unwrap());
        headers.append(http::header::SET_COOKIE, "JSESSIONID=abc123; Path=/; Secure".parse().unwrap());
        assert_eq!(HttpTransport::find_session_id(&headers).as_deref(), Some("abc123"));
        assert_eq!(HttpTransport::find_session_id(&HeaderMap::new()), None);
    }
}
