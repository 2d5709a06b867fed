// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Vinay Associates

//! Tests for the transport module, plus the mock transport shared by the
//! other test modules.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use va_core::protocol::{CallEnvelope, ClientRequest, ServerReply};
use va_core::Caller;

use super::transport::{Transport, TransportError, TransportResult, WebSocketTransport};

/// Mock transport for testing without real sockets.
///
/// Clones share state, so tests can keep a handle for scripting replies
/// and inspecting recorded calls after the original moves into a client.
#[derive(Clone)]
pub struct MockTransport {
    connected: Arc<Mutex<bool>>,
    /// Scripted outcomes returned by call(), in order.
    replies: Arc<Mutex<VecDeque<TransportResult<ServerReply>>>>,
    /// Envelopes that were sent via call().
    calls: Arc<Mutex<Vec<CallEnvelope>>>,
    /// Whether the next connect should fail.
    connect_should_fail: Arc<Mutex<bool>>,
}

impl MockTransport {
    pub fn new() -> Self {
        MockTransport {
            connected: Arc::new(Mutex::new(false)),
            replies: Arc::new(Mutex::new(VecDeque::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
            connect_should_fail: Arc::new(Mutex::new(false)),
        }
    }

    /// Script the reply for the next unanswered call.
    pub fn queue_reply(&self, reply: ServerReply) {
        self.replies.lock().unwrap().push_back(Ok(reply));
    }

    /// Script a transport failure for the next unanswered call.
    pub fn queue_failure(&self, error: TransportError) {
        self.replies.lock().unwrap().push_back(Err(error));
    }

    /// All envelopes sent so far.
    pub fn calls(&self) -> Vec<CallEnvelope> {
        self.calls.lock().unwrap().clone()
    }

    /// The requests sent so far, without their envelopes.
    pub fn requests(&self) -> Vec<ClientRequest> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|env| env.request.clone())
            .collect()
    }

    /// Set whether connect should fail.
    pub fn set_connect_fail(&self, fail: bool) {
        *self.connect_should_fail.lock().unwrap() = fail;
    }
}

impl Transport for MockTransport {
    fn connect(
        &mut self,
        _url: &str,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = TransportResult<()>> + Send + '_>> {
        Box::pin(async move {
            if *self.connect_should_fail.lock().unwrap() {
                Err(TransportError::ConnectionFailed("mock failure".into()))
            } else {
                *self.connected.lock().unwrap() = true;
                Ok(())
            }
        })
    }

    fn disconnect(
        &mut self,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = TransportResult<()>> + Send + '_>> {
        Box::pin(async move {
            *self.connected.lock().unwrap() = false;
            Ok(())
        })
    }

    fn call(
        &mut self,
        envelope: CallEnvelope,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = TransportResult<ServerReply>> + Send + '_>,
    > {
        let calls = Arc::clone(&self.calls);
        let replies = Arc::clone(&self.replies);
        Box::pin(async move {
            calls.lock().unwrap().push(envelope);
            replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(TransportError::ReceiveFailed("no scripted reply".into())))
        })
    }

    fn is_connected(&self) -> bool {
        *self.connected.lock().unwrap()
    }
}

#[tokio::test]
async fn websocket_disconnect_without_connection_is_ok() {
    let mut transport = WebSocketTransport::new();
    assert!(!transport.is_connected());
    transport.disconnect().await.unwrap();
    assert!(!transport.is_connected());
}

#[tokio::test]
async fn mock_transport_connect() {
    let mut transport = MockTransport::new();
    assert!(!transport.is_connected());

    transport.connect("ws://localhost:7410").await.unwrap();
    assert!(transport.is_connected());

    transport.disconnect().await.unwrap();
    assert!(!transport.is_connected());
}

#[tokio::test]
async fn mock_transport_call_records_envelope() {
    let mut transport = MockTransport::new();
    transport.connect("ws://localhost:7410").await.unwrap();

    transport.queue_reply(ServerReply::pong(42));

    let envelope = CallEnvelope::new(Caller::Anonymous, ClientRequest::Ping { id: 42 });
    let reply = transport.call(envelope).await.unwrap();
    assert!(matches!(reply, ServerReply::Pong { id: 42 }));

    let calls = transport.calls();
    assert_eq!(calls.len(), 1);
    assert!(matches!(calls[0].request, ClientRequest::Ping { id: 42 }));
}

#[tokio::test]
async fn mock_transport_unscripted_call_fails() {
    let mut transport = MockTransport::new();
    transport.connect("ws://localhost:7410").await.unwrap();

    let envelope = CallEnvelope::new(Caller::Anonymous, ClientRequest::IsCallerAdmin);
    let result = transport.call(envelope).await;
    assert!(matches!(result, Err(TransportError::ReceiveFailed(_))));
}

#[tokio::test]
async fn mock_transport_connect_fail() {
    let mut transport = MockTransport::new();
    transport.set_connect_fail(true);

    let result = transport.connect("ws://localhost:7410").await;
    assert!(result.is_err());
    assert!(!transport.is_connected());
}

#[tokio::test]
async fn mock_transport_clones_share_state() {
    let transport = MockTransport::new();
    let handle = transport.clone();

    let mut moved = transport;
    moved.connect("ws://localhost:7410").await.unwrap();
    assert!(handle.is_connected());

    handle.queue_reply(ServerReply::Ack);
    let envelope = CallEnvelope::new(Caller::Anonymous, ClientRequest::RequestApproval);
    moved.call(envelope).await.unwrap();
    assert_eq!(handle.calls().len(), 1);
}
