//! Session-gated flow control.
//!
//! The [`FlowController`] holds the authoritative in-memory session state and
//! decides which UI flow the surrounding application renders: the sign-in
//! flow while unauthenticated, the notes flow once a user is logged in, and
//! nothing at all while the persisted session is still being restored at
//! startup.
//!
//! The controller is an explicit owned object; consumers receive it by
//! reference. There is no ambient global session state.

use crate::Result;
use crate::auth::{SessionManager, User};

/// In-memory session state.
///
/// `Restoring` holds only between construction and the completion of the
/// startup [`restore`](FlowController::restore) call.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum SessionState {
    /// The persisted session pointer has not been read yet.
    #[default]
    Restoring,
    /// No user is logged in.
    Unauthenticated,
    /// A user is logged in.
    Authenticated(User),
}

/// The UI flow the application should render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow<'a> {
    /// Sign-in / registration screens.
    Auth,
    /// The protected notes screens, with the current user.
    Protected(&'a User),
}

/// State machine gating the application between its unauthenticated and
/// authenticated flows.
///
/// Transitions:
/// - `Restoring` → `Authenticated` / `Unauthenticated` via [`restore`](Self::restore)
/// - `Unauthenticated` → `Authenticated` via [`login`](Self::login) or
///   [`register`](Self::register)
/// - `Authenticated` → `Unauthenticated` via [`logout`](Self::logout)
///
/// Self-loops (logging in while logged in, logging out while logged out) are
/// idempotent no-ops.
#[derive(Debug)]
pub struct FlowController {
    manager: SessionManager,
    state: SessionState,
}

impl FlowController {
    /// Create a controller in the `Restoring` state.
    ///
    /// Call [`restore`](Self::restore) once at startup before rendering.
    pub fn new(manager: SessionManager) -> Self {
        Self {
            manager,
            state: SessionState::Restoring,
        }
    }

    /// Read the persisted session pointer and leave the `Restoring` state.
    ///
    /// A restorable session yields `Authenticated`; an absent pointer — or a
    /// failed read, which the storage layer logs and reports as absent —
    /// yields `Unauthenticated`. Never fatal. There is no timeout: if the
    /// store never resolves, the controller stays in `Restoring`.
    pub async fn restore(&mut self) {
        self.state = match self.manager.restore_session().await {
            Some(user) => {
                tracing::debug!(user_id = %user.id, "Restored persisted session");
                SessionState::Authenticated(user)
            }
            None => SessionState::Unauthenticated,
        };
    }

    /// Register a new user; on success the flow switches to authenticated.
    ///
    /// On rejection or storage failure the state is unchanged.
    pub async fn register(&mut self, username: &str, email: &str, password: &str) -> Result<User> {
        let user = self.manager.register(username, email, password).await?;
        self.state = SessionState::Authenticated(user.clone());
        Ok(user)
    }

    /// Log in; on success the flow switches to authenticated.
    ///
    /// On rejection the state is unchanged.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<User> {
        let user = self.manager.login(email, password).await?;
        self.state = SessionState::Authenticated(user.clone());
        Ok(user)
    }

    /// Log out and return to the unauthenticated flow.
    ///
    /// Logout is optimistic: the in-memory context is cleared even when the
    /// storage-level removal fails, so the UI always returns to the sign-in
    /// flow. The storage error is still returned so the caller can display
    /// it.
    pub async fn logout(&mut self) -> Result<()> {
        let result = self.manager.logout().await;
        if let Err(e) = &result {
            tracing::warn!(error = %e, "Session removal failed; clearing in-memory session anyway");
        }
        self.state = SessionState::Unauthenticated;
        result
    }

    /// The flow to render, or `None` while the session is still restoring.
    pub fn flow(&self) -> Option<Flow<'_>> {
        match &self.state {
            SessionState::Restoring => None,
            SessionState::Unauthenticated => Some(Flow::Auth),
            SessionState::Authenticated(user) => Some(Flow::Protected(user)),
        }
    }

    /// The currently authenticated user, if any.
    pub fn current_user(&self) -> Option<&User> {
        match &self.state {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// The current session state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The underlying session manager.
    pub fn manager(&self) -> &SessionManager {
        &self.manager
    }
}
