// Server loop module
// Accepts connections until shutdown is requested, then drains in-flight ones

use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

use super::connection::accept_connection;
use crate::config::AppState;
use crate::logger;

/// How long shutdown waits for open connections before giving up
const DRAIN_TIMEOUT: Duration = Duration::from_secs(5);
const DRAIN_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Accept connections until `state.shutdown_signal` fires
pub async fn start_server_loop(listener: TcpListener, state: Arc<AppState>) {
    let shutdown = Arc::clone(&state.shutdown_signal);

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => accept_connection(stream, peer_addr, &state),
                    Err(e) => logger::log_error(&format!("Failed to accept connection: {e}")),
                }
            }

            () = shutdown.notified() => break,
        }
    }

    // Stop accepting before waiting on in-flight requests
    drop(listener);
    logger::log_server_stop(state.connection_count());
    drain_connections(&state, DRAIN_TIMEOUT).await;
}

/// Wait until every connection task has finished or `timeout` elapses
async fn drain_connections(state: &AppState, timeout: Duration) -> bool {
    let deadline = tokio::time::Instant::now() + timeout;

    while state.connection_count() > 0 {
        if tokio::time::Instant::now() >= deadline {
            logger::log_warning(&format!(
                "Shutdown drain timed out with {} connection(s) open",
                state.connection_count()
            ));
            return false;
        }
        tokio::time::sleep(DRAIN_POLL_INTERVAL).await;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::server::create_reusable_listener;
    use std::sync::atomic::Ordering;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    fn test_state() -> Arc<AppState> {
        let mut config = Config::default_for_tests();
        config.logging.access_log = false;
        Arc::new(AppState::new(&config))
    }

    #[tokio::test]
    async fn test_drain_returns_when_idle() {
        let state = test_state();
        assert!(drain_connections(&state, Duration::from_millis(10)).await);
    }

    #[tokio::test]
    async fn test_drain_times_out() {
        let state = test_state();
        state.active_connections.fetch_add(1, Ordering::SeqCst);
        assert!(!drain_connections(&state, Duration::from_millis(120)).await);
    }

    #[tokio::test]
    async fn test_serves_health_over_tcp_then_stops() {
        let state = test_state();
        let listener = create_reusable_listener("127.0.0.1:0".parse().unwrap()).unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(start_server_loop(listener, Arc::clone(&state)));

        let mut stream = tokio::net::TcpStream::connect(addr).await.unwrap();
        stream
            .write_all(b"GET /health HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
            .await
            .unwrap();
        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();
        assert!(response.starts_with("HTTP/1.1 200 OK"));
        assert!(response.contains("\"status\": \"ok\""));

        state.shutdown_signal.notify_one();
        tokio::time::timeout(Duration::from_secs(6), server)
            .await
            .unwrap()
            .unwrap();
    }
}
