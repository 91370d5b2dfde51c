use http::{HeaderMap, HeaderValue, header};
use reqwest::Method;

use crate::{
    api::sma::{
        Client,
        endpoint::Endpoint,
        error::Result,
        transport::{Body, Request, Response, Transport},
    },
    prelude::{debug, info, instrument, warn},
};

impl<T: Transport> Client<T> {
    /// Send the request, repeating it on transient failures.
    ///
    /// Makes at most `1 + request_retries` attempts back to back. Never re-authenticates,
    /// which makes it safe for the token endpoints themselves.
    pub(super) async fn send(&self, request: Request) -> Result<Response> {
        self.send_parsed(request, Ok).await
    }

    /// Send the request and parse the response, repeating both on transient failures.
    ///
    /// A response of an unexpected shape counts as a failed attempt and uses the same budget.
    pub(super) async fn send_parsed<R>(
        &self,
        request: Request,
        parse: impl Fn(Response) -> Result<R> + Send + Sync,
    ) -> Result<R> {
        let mut n_retries = 0;
        loop {
            match self.transport.send(request.clone()).await.and_then(&parse) {
                Err(error) if error.is_transient() && n_retries < self.config.request_retries => {
                    n_retries += 1;
                    warn!(
                        endpoint = request.endpoint(),
                        n_retries,
                        "request failed, retrying: {error:#}"
                    );
                }
                result => break result,
            }
        }
    }

    /// Send an authenticated request and return the response body.
    pub(super) async fn execute(
        &mut self,
        method: Method,
        endpoint: Endpoint<'_>,
        body: Body,
    ) -> Result<serde_json::Value> {
        self.execute_parsed(method, endpoint, body, |body| Ok(body.clone())).await
    }

    /// Send an authenticated request and parse the response body.
    ///
    /// On an authentication failure, logs out and in again and repeats the request once.
    /// If that does not help, the original failure is returned. Transient failures,
    /// including unexpected response shapes, are retried independently of that.
    #[instrument(skip_all, fields(%method, %endpoint))]
    pub(super) async fn execute_parsed<R>(
        &mut self,
        method: Method,
        endpoint: Endpoint<'_>,
        body: Body,
        parse: impl Fn(&serde_json::Value) -> Result<R> + Send + Sync,
    ) -> Result<R> {
        let url = endpoint.url(&self.base_url)?;
        let mut original_error = None;
        loop {
            let request = Request::new(method.clone(), url.clone())
                .with_headers(self.origin_headers.clone())
                .with_headers(json_headers())
                .with_headers(self.session.auth_headers()?)
                .with_body(body.clone());
            match self.send_parsed(request, |response| parse(&response.body)).await {
                Ok(parsed) => break Ok(parsed),
                Err(error) if error.is_authentication() && !endpoint.is_token() => {
                    if let Some(original_error) = original_error.take() {
                        debug!("still unauthorized after re-authenticating: {error:#}");
                        break Err(original_error);
                    }
                    info!("unauthorized, re-authenticating…");
                    if let Err(reauth_error) = self.reauthenticate().await {
                        warn!("failed to re-authenticate: {reauth_error:#}");
                        break Err(error);
                    }
                    original_error = Some(error);
                }
                Err(error) => break Err(error),
            }
        }
    }

    async fn reauthenticate(&mut self) -> Result {
        if self.session.is_authenticated() {
            self.logout().await?;
        }
        self.login().await?;
        Ok(())
    }
}

fn json_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
    headers
}
