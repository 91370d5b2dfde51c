//! Scripted in-memory transport for the client tests.

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use serde_json::json;

use crate::api::sma::{
    Client,
    ClientConfig,
    error::Result,
    transport::{Request, Response, Transport},
};

/// Replies in the scripted order and records every request.
///
/// Clones share the script, so a test can keep one to inspect the requests.
#[derive(Clone, Default)]
pub struct ScriptedTransport(Arc<Mutex<Script>>);

#[derive(Default)]
struct Script {
    replies: VecDeque<Result<Response>>,
    requests: Vec<Request>,
}

impl ScriptedTransport {
    #[must_use]
    pub fn reply(self, reply: Result<Response>) -> Self {
        self.0.lock().unwrap().replies.push_back(reply);
        self
    }

    pub fn requests(&self) -> Vec<Request> {
        self.0.lock().unwrap().requests.clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, request: Request) -> Result<Response> {
        let mut script = self.0.lock().unwrap();
        script.requests.push(request.clone());
        script.replies.pop_front().unwrap_or_else(|| panic!("unexpected request: {request:?}"))
    }
}

pub fn client(transport: ScriptedTransport) -> Client<ScriptedTransport> {
    let config = ClientConfig::builder()
        .host("sma.local")
        .use_ssl(false)
        .username("test")
        .password("test123")
        .build();
    Client::with_transport(config, transport).unwrap()
}

pub fn ok(body: serde_json::Value) -> Result<Response> {
    Ok(Response { body, session_id: None })
}

pub fn token_response(
    access_token: &str,
    refresh_token: &str,
    expires_in: i64,
    session_id: Option<&str>,
) -> Response {
    Response {
        body: json!({
            "access_token": access_token,
            "refresh_token": refresh_token,
            "token_type": "Bearer",
            "expires_in": expires_in,
        }),
        session_id: session_id.map(ToOwned::to_owned),
    }
}
