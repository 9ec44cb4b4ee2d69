#[cfg(test)]
mod session_tests {
    use std::sync::Arc;
    use std::time::Duration;
    use crate::exchange::test_transport::{tracker, Reply, ScriptedDialer, ScriptedTransport};
    use crate::scrape::enums::scrape_error::ScrapeError;
    use crate::session::enums::session_state::SessionState;
    use crate::session::structs::session::Session;
    use crate::session::structs::session_manager::SessionManager;
    use crate::udp::enums::request::Request;
    use crate::udp::enums::response::Response;
    use crate::udp::structs::connect_response::ConnectResponse;
    use crate::udp::structs::connection_id::ConnectionId;
    use crate::udp::structs::transaction_id::TransactionId;
    use crate::udp::udp::PROTOCOL_IDENTIFIER;

    const CONNECTION_ID: u64 = 0x0123_4567_89ab_cdef;

    fn manager(transports: Vec<Arc<ScriptedTransport>>) -> (SessionManager, Arc<ScriptedDialer>) {
        let dialer = Arc::new(ScriptedDialer::new(transports));
        let manager = SessionManager::new(String::from("tracker.example:6969"), dialer.clone())
            .with_timeout(Duration::from_millis(50));
        (manager, dialer)
    }

    fn healthy() -> Arc<ScriptedTransport> {
        Arc::new(ScriptedTransport::new(tracker(CONNECTION_ID, vec![])))
    }

    #[test]
    fn test_session_freshness() {
        let session = Session::new(ConnectionId(1), TransactionId(2));
        assert!(session.is_fresh(Duration::from_secs(60)));
        assert!(!session.is_fresh(Duration::ZERO));
    }

    #[tokio::test]
    async fn test_ensure_runs_handshake() {
        let transport = healthy();
        let (manager, dialer) = manager(vec![transport.clone()]);
        assert_eq!(manager.state().await, SessionState::NoSession);

        let session = manager.ensure().await.unwrap();
        assert_eq!(session.connection_id, ConnectionId(CONNECTION_ID));
        assert_eq!(manager.state().await, SessionState::Fresh);
        assert_eq!(dialer.dials(), 1);

        let sent = transport.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].len(), 16);
        assert_eq!(&sent[0][0..8], &PROTOCOL_IDENTIFIER.to_be_bytes());
        match Request::from_bytes(&sent[0]).unwrap() {
            Request::Connect(r) => assert_eq!(r.transaction_id, session.handshake_transaction_id),
            other => panic!("Expected Connect, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_ensure_reuses_fresh_session() {
        let transport = healthy();
        let (manager, dialer) = manager(vec![transport.clone()]);

        let first = manager.ensure().await.unwrap();
        let second = manager.ensure().await.unwrap();
        assert_eq!(first.connection_id, second.connection_id);
        assert_eq!(first.handshake_transaction_id, second.handshake_transaction_id);
        assert_eq!(dialer.dials(), 1);
        assert_eq!(transport.sends(), 1);
    }

    #[tokio::test]
    async fn test_ensure_renews_stale_session() {
        let (manager, dialer) = manager(vec![healthy(), healthy()]);
        let manager = manager.with_lifetime(Duration::ZERO);

        manager.ensure().await.unwrap();
        assert_eq!(manager.state().await, SessionState::Stale);
        manager.ensure().await.unwrap();
        assert_eq!(dialer.dials(), 2);
    }

    #[tokio::test]
    async fn test_handshake_wrong_action_leaves_no_session() {
        let broken = Arc::new(ScriptedTransport::new(|datagram| match Request::from_bytes(datagram) {
            Ok(request) => {
                let mut reply = Response::from(ConnectResponse {
                    connection_id: ConnectionId(9),
                    transaction_id: request.transaction_id(),
                }).write_to_vec().unwrap();
                reply[3] = 2;
                Reply::Datagram(reply)
            }
            Err(_) => Reply::TimedOut,
        }));
        let (manager, dialer) = manager(vec![broken, healthy()]);

        let result = manager.ensure().await;
        assert!(matches!(result, Err(ScrapeError::InvalidAction { action: 2 })));
        assert_eq!(manager.state().await, SessionState::NoSession);

        let session = manager.ensure().await.unwrap();
        assert_eq!(session.connection_id, ConnectionId(CONNECTION_ID));
        assert_eq!(dialer.dials(), 2);
    }

    #[tokio::test]
    async fn test_handshake_checks_sent_transaction_id() {
        let foreign = Arc::new(ScriptedTransport::new(|datagram| match Request::from_bytes(datagram) {
            Ok(request) => Reply::Datagram(Response::from(ConnectResponse {
                connection_id: ConnectionId(9),
                transaction_id: TransactionId(request.transaction_id().0.wrapping_add(1)),
            }).write_to_vec().unwrap()),
            Err(_) => Reply::TimedOut,
        }));
        let (manager, _) = manager(vec![foreign.clone()]);

        let result = manager.ensure().await;
        match result {
            Err(ScrapeError::InvalidTransactionID { sent, received }) => {
                assert_eq!(received.0, sent.0.wrapping_add(1));
            }
            Err(other) => panic!("Expected InvalidTransactionID, got {:?}", other),
            Ok(_) => panic!("Expected InvalidTransactionID, got a session"),
        }
        assert_eq!(foreign.sends(), 1);
        assert_eq!(manager.state().await, SessionState::NoSession);
    }

    #[tokio::test]
    async fn test_handshake_short_response() {
        let short = Arc::new(ScriptedTransport::new(|_| Reply::Datagram(vec![0u8; 12])));
        let (manager, _) = manager(vec![short]);
        assert!(matches!(manager.ensure().await, Err(ScrapeError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn test_handshake_retry_exhaustion() {
        let silent = Arc::new(ScriptedTransport::new(|_| Reply::TimedOut));
        let (manager, _) = manager(vec![silent.clone()]);
        manager.set_retry_limit(2);

        let result = manager.ensure().await;
        assert!(matches!(result, Err(ScrapeError::RetryLimitExceeded { attempts: 3 })));
        assert_eq!(silent.sends(), 3);
        assert_eq!(manager.state().await, SessionState::NoSession);
    }

    #[tokio::test]
    async fn test_dial_failure_is_propagated() {
        let (manager, dialer) = manager(vec![]);
        match manager.ensure().await {
            Err(ScrapeError::Io(error)) => assert_eq!(error.kind(), std::io::ErrorKind::ConnectionRefused),
            Err(other) => panic!("Expected Io, got {:?}", other),
            Ok(_) => panic!("Expected Io, got a session"),
        }
        assert_eq!(dialer.dials(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_ensure_handshakes_once() {
        let transport = healthy();
        let (manager, dialer) = manager(vec![transport.clone()]);

        let (first, second) = tokio::join!(manager.ensure(), manager.ensure());
        assert_eq!(first.unwrap().connection_id, second.unwrap().connection_id);
        assert_eq!(dialer.dials(), 1);
        assert_eq!(transport.sends(), 1);
    }

    #[tokio::test]
    async fn test_invalidate() {
        let (manager, dialer) = manager(vec![healthy(), healthy()]);
        manager.ensure().await.unwrap();
        manager.invalidate().await;
        assert_eq!(manager.state().await, SessionState::NoSession);
        manager.ensure().await.unwrap();
        assert_eq!(dialer.dials(), 2);
    }

    #[tokio::test]
    async fn test_unsettled_transport_is_replaced() {
        let (manager, dialer) = manager(vec![healthy(), healthy()]);
        manager.ensure().await.unwrap();

        manager.mark_unsettled();
        assert_eq!(manager.state().await, SessionState::NoSession);
        manager.ensure().await.unwrap();
        assert_eq!(manager.state().await, SessionState::Fresh);
        assert_eq!(dialer.dials(), 2);

        manager.mark_unsettled();
        manager.mark_settled();
        manager.ensure().await.unwrap();
        assert_eq!(dialer.dials(), 2);
    }
}
