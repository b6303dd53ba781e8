use tracing::{debug, info, warn};

use crate::api::{ApiClient, ApiError};
use crate::auth::credentials::{CredentialKey, CredentialStore};
use crate::auth::guard::{self, Access, AccessPolicy};
use crate::models::{Registration, User};

/// In-memory session state for the current process.
///
/// Lifecycle: construct, run `bootstrap` once, then mutate only through
/// `login`, `register`, and `logout`. Consumers keep the session wherever
/// the application holds shared state and re-read `current_user` on every
/// guarded render rather than caching it.
///
/// Operations take `&mut self`, so overlapping calls on one session value
/// cannot interleave. Two sessions over the same data directory share the
/// credential file with no coordination; the last writer wins.
pub struct Session {
    credentials: CredentialStore,
    api: ApiClient,
    current_user: Option<User>,
    loading: bool,
}

impl Session {
    pub fn new(credentials: CredentialStore, api: ApiClient) -> Self {
        Self {
            credentials,
            api,
            current_user: None,
            loading: true,
        }
    }

    /// Restore a session from persisted credentials.
    ///
    /// With no stored access token the session settles anonymous without
    /// touching the network. With one, a single `me/` fetch decides between
    /// restoring the user and wiping the stale credential triple. Errors
    /// never surface here - a dead token just means starting logged out.
    ///
    /// Runs once; calling again after completion is a no-op.
    pub async fn bootstrap(&mut self) {
        if !self.loading {
            return;
        }

        if self.credentials.get(CredentialKey::AccessToken).is_some() {
            match self.api.current_user().await {
                Ok(user) => {
                    debug!(username = %user.username, "Session restored from stored token");
                    self.current_user = Some(user);
                }
                Err(e) => {
                    debug!(error = %e, "Stored token rejected, clearing credentials");
                    if let Err(e) = self.credentials.clear() {
                        warn!(error = %e, "Failed to clear credentials");
                    }
                }
            }
        }

        self.loading = false;
    }

    /// Authenticate and load the account behind the credentials.
    ///
    /// The token pair and the caller-supplied username are persisted as a
    /// triple before the follow-up user fetch. If that fetch fails the
    /// operation fails without touching `current_user`, but the tokens stay
    /// on disk and the next startup can restore the session from them.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<(), ApiError> {
        let tokens = self.api.login(username, password).await?;

        if let Err(e) = self
            .credentials
            .store_login(&tokens.access, &tokens.refresh, username)
        {
            warn!(error = %e, "Failed to persist credentials");
        }

        let user = self.api.current_user().await?;
        info!(username = %user.username, "Login successful");
        self.current_user = Some(user);
        Ok(())
    }

    /// Create an account, then log straight into it.
    ///
    /// A login failure after a successful registration surfaces the login's
    /// error; the account exists server-side either way and a later login
    /// can claim it.
    pub async fn register(&mut self, registration: &Registration) -> Result<(), ApiError> {
        self.api.register(registration).await?;
        self.login(&registration.username, &registration.password)
            .await
    }

    /// Drop the session. Purely local, never fails, and is idempotent.
    pub fn logout(&mut self) {
        if let Err(e) = self.credentials.clear() {
            warn!(error = %e, "Failed to clear credentials");
        }
        self.current_user = None;
        info!("Logged out");
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }

    /// True only until the initial `bootstrap` completes. Guarded views must
    /// not render while this holds.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Classify the current user against a policy. Evaluated fresh on every
    /// call, so a logout elsewhere is reflected immediately.
    pub fn check_access(&self, policy: AccessPolicy) -> Access {
        guard::check_access(self.current_user(), policy)
    }
}
