use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::error::CoreError;

use super::protocol::{check_status, decode_body, Request, Response};
use super::RpcTransport;

/// A mock transport for testing. Replays canned `(status, body)` replies
/// through the same status policy as the HTTP client and records every
/// request it receives.
pub struct MockTransport {
    replies: Mutex<VecDeque<(StatusCode, String)>>,
    requests: Mutex<Vec<Request>>,
}

impl MockTransport {
    pub fn builder() -> MockTransportBuilder {
        MockTransportBuilder {
            replies: VecDeque::new(),
        }
    }

    /// Requests sent so far, oldest first.
    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().expect("mock lock poisoned").clone()
    }
}

pub struct MockTransportBuilder {
    replies: VecDeque<(StatusCode, String)>,
}

impl MockTransportBuilder {
    pub fn with_reply(mut self, status: StatusCode, body: impl Into<String>) -> Self {
        self.replies.push_back((status, body.into()));
        self
    }

    /// Shorthand for a `200 OK` reply.
    pub fn with_ok(self, body: impl Into<String>) -> Self {
        self.with_reply(StatusCode::OK, body)
    }

    pub fn build(self) -> MockTransport {
        MockTransport {
            replies: Mutex::new(self.replies),
            requests: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl RpcTransport for MockTransport {
    async fn send<T>(&self, request: Request) -> Result<Response<T>, CoreError>
    where
        T: DeserializeOwned + Send + 'static,
    {
        self.requests
            .lock()
            .expect("mock lock poisoned")
            .push(request);
        let (status, body) = self
            .replies
            .lock()
            .expect("mock lock poisoned")
            .pop_front()
            .expect("mock transport ran out of canned replies");
        check_status(status)?;
        decode_body(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(flavor = "multi_thread")]
    async fn replays_replies_in_order_and_records_requests() {
        let rpc = MockTransport::builder()
            .with_ok(r#"{"id":"","result":1}"#)
            .with_ok(r#"{"id":"","result":2}"#)
            .build();

        let first: Response<u64> = rpc.execute("a", Vec::new()).await.unwrap();
        let second: Response<u64> = rpc.execute("b", Vec::new()).await.unwrap();
        assert_eq!(first.result, Some(1));
        assert_eq!(second.result, Some(2));

        let methods: Vec<String> = rpc
            .requests()
            .iter()
            .map(|req| req.method().to_owned())
            .collect();
        assert_eq!(methods, vec!["a", "b"]);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn rejects_non_500_failure_status() {
        let rpc = MockTransport::builder()
            .with_reply(StatusCode::NOT_FOUND, r#"{"id":"","result":1}"#)
            .build();
        let err = rpc
            .execute::<u64>("getblockcount", Vec::new())
            .await
            .unwrap_err();
        assert!(err.is_transport());
    }
}
