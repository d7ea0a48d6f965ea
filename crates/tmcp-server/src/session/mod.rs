//! Session Management
//!
//! Tracks SSE sessions. Each session owns the channel feeding its event
//! stream and the cancellation tokens of its in-flight requests.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use serde_json::Value;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use uuid::Uuid;

/// One SSE client connection
#[derive(Debug)]
pub struct Session {
    id: String,
    sender: mpsc::UnboundedSender<String>,
    /// Cancelled when the session ends; parent of every request token
    token: CancellationToken,
    in_flight: DashMap<String, (u64, CancellationToken)>,
    next_request: AtomicU64,
}

/// Registration of one in-flight request
///
/// Finishing through the handle only forgets this registration, never a
/// later request that reused the same id.
#[derive(Debug)]
pub struct InFlightRequest {
    key: String,
    generation: u64,
    token: CancellationToken,
}

impl InFlightRequest {
    /// Token cancelled by `notifications/cancelled` or session close
    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }
}

impl Session {
    /// Session identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Queue a serialized message for the event stream
    ///
    /// Returns `false` when the stream has already closed.
    pub fn send(&self, message: String) -> bool {
        self.sender.send(message).is_ok()
    }

    /// Register an in-flight request
    ///
    /// Returns `None` while another request with the same id is running.
    pub fn begin_request(&self, request_id: &Value) -> Option<InFlightRequest> {
        let key = request_key(request_id);
        match self.in_flight.entry(key.clone()) {
            Entry::Occupied(_) => None,
            Entry::Vacant(slot) => {
                let generation = self.next_request.fetch_add(1, Ordering::Relaxed);
                let token = self.token.child_token();
                slot.insert((generation, token.clone()));
                Some(InFlightRequest {
                    key,
                    generation,
                    token,
                })
            }
        }
    }

    /// Forget a finished request
    pub fn finish_request(&self, request: &InFlightRequest) {
        self.in_flight
            .remove_if(&request.key, |_, (generation, _)| {
                *generation == request.generation
            });
    }

    /// Cancel an in-flight request
    ///
    /// Returns `false` when no such request is running.
    pub fn cancel_request(&self, request_id: &Value) -> bool {
        match self.in_flight.remove(&request_key(request_id)) {
            Some((_, (_, token))) => {
                token.cancel();
                true
            }
            None => false,
        }
    }

    /// Number of requests still running
    pub fn in_flight_count(&self) -> usize {
        self.in_flight.len()
    }

    /// Whether the session has ended
    pub fn is_closed(&self) -> bool {
        self.token.is_cancelled()
    }

    fn close(&self) {
        self.token.cancel();
    }
}

fn request_key(request_id: &Value) -> String {
    request_id.to_string()
}

/// Session manager for tracking SSE connections
#[derive(Debug, Default)]
pub struct SessionManager {
    sessions: DashMap<String, Arc<Session>>,
}

impl SessionManager {
    /// Create a new session manager
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    /// Open a session
    ///
    /// The receiver yields every message sent to the session, in order.
    pub fn create(&self) -> (Arc<Session>, mpsc::UnboundedReceiver<String>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let session = Arc::new(Session {
            id: Uuid::new_v4().to_string(),
            sender,
            token: CancellationToken::new(),
            in_flight: DashMap::new(),
            next_request: AtomicU64::new(0),
        });
        self.sessions
            .insert(session.id.clone(), Arc::clone(&session));
        info!(session_id = %session.id, "SSE session opened");
        (session, receiver)
    }

    /// Get a session if it exists
    pub fn get(&self, session_id: &str) -> Option<Arc<Session>> {
        self.sessions.get(session_id).map(|r| Arc::clone(r.value()))
    }

    /// Remove a session and cancel its in-flight requests
    pub fn remove(&self, session_id: &str) -> Option<Arc<Session>> {
        let (_, session) = self.sessions.remove(session_id)?;
        session.close();
        info!(
            session_id,
            cancelled = session.in_flight_count(),
            "SSE session closed"
        );
        Some(session)
    }

    /// Get the number of active sessions
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }
}

/// Removes its session when dropped
///
/// Held by the event stream, so the session ends when the client
/// disconnects.
pub struct SessionGuard {
    manager: Arc<SessionManager>,
    session_id: String,
}

impl SessionGuard {
    /// Guard `session_id` in `manager`
    pub fn new(manager: Arc<SessionManager>, session_id: impl Into<String>) -> Self {
        Self {
            manager,
            session_id: session_id.into(),
        }
    }
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        debug!(session_id = %self.session_id, "SSE stream dropped");
        self.manager.remove(&self.session_id);
    }
}

/// Create a shared session manager
pub fn create_session_manager() -> Arc<SessionManager> {
    Arc::new(SessionManager::new())
}
