//! Session and role state.
//!
//! The session is the pair of an opaque token and a cached user profile,
//! both held in the local store under the `token` and `userInfo` slots.
//! Everything here derives from the store alone; no network calls are made.
//! A stored token with a missing or corrupt profile counts as logged in but
//! profile-less: `user_profile` returns `None` and UI gating keys off the
//! profile.

use crate::events::EventBus;
use crate::storage::{LocalStore, slots};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Role tag gating menu visibility and UI affordances.
///
/// The wire spelling for [`Role::Operator`] is `operation`; the legacy
/// `teacher` spelling is accepted when deserializing stored profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "admin")]
    Admin,
    #[serde(rename = "operation", alias = "teacher")]
    Operator,
    #[serde(rename = "user")]
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Operator => "operation",
            Role::User => "user",
        }
    }

    /// Human-readable label for dropdowns and headers.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Operator => "Operator",
            Role::User => "User",
        }
    }

    /// Parse a role tag, accepting the legacy `teacher` spelling.
    pub fn parse(tag: &str) -> Option<Role> {
        match tag {
            "admin" => Some(Role::Admin),
            "operation" | "teacher" => Some(Role::Operator),
            "user" => Some(Role::User),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cached user profile as stored in the `userInfo` slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub role: Role,
}

impl UserProfile {
    pub fn new(username: impl Into<String>, role: Role) -> Self {
        Self {
            username: username.into(),
            nickname: None,
            avatar: None,
            role,
        }
    }

    /// Preferred label for the header dropdown.
    pub fn display_name(&self) -> &str {
        self.nickname.as_deref().unwrap_or(&self.username)
    }
}

/// Events published by the session store.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    UserInfoUpdated { user_info: UserProfile },
}

/// Session helper over the local store. Cloning yields another handle to
/// the same store and event bus.
#[derive(Clone)]
pub struct SessionStore {
    store: LocalStore,
    events: Arc<EventBus<SessionEvent>>,
}

impl SessionStore {
    pub fn new(store: LocalStore) -> Self {
        Self {
            store,
            events: Arc::new(EventBus::new()),
        }
    }

    /// Bus carrying [`SessionEvent::UserInfoUpdated`] notifications,
    /// delivered synchronously from [`set_user_profile`].
    ///
    /// [`set_user_profile`]: SessionStore::set_user_profile
    pub fn events(&self) -> Arc<EventBus<SessionEvent>> {
        self.events.clone()
    }

    /// True iff a token is present in the store.
    pub fn is_logged_in(&self) -> bool {
        self.store.contains(slots::TOKEN)
    }

    pub fn token(&self) -> Option<String> {
        self.store.get(slots::TOKEN)
    }

    pub fn set_token(&self, token: &str) {
        self.store.set(slots::TOKEN, token);
    }

    /// Parse the stored profile. Absent or malformed JSON yields `None`;
    /// malformed input is logged and never propagated to the caller.
    pub fn user_profile(&self) -> Option<UserProfile> {
        let raw = self.store.get(slots::USER_INFO)?;
        match serde_json::from_str::<UserProfile>(&raw) {
            Ok(profile) => Some(profile),
            Err(e) => {
                log::warn!("stored user profile is malformed, treating as absent: {e}");
                None
            }
        }
    }

    /// Store the profile and publish `UserInfoUpdated` before returning.
    pub fn set_user_profile(&self, profile: &UserProfile) {
        match serde_json::to_string(profile) {
            Ok(raw) => {
                self.store.set(slots::USER_INFO, raw);
                self.events.publish(&SessionEvent::UserInfoUpdated {
                    user_info: profile.clone(),
                });
            }
            Err(e) => log::error!("failed to serialize user profile: {e}"),
        }
    }

    /// Tear the session down. Token and profile are removed together.
    pub fn clear(&self) {
        self.store.remove_many(&[slots::TOKEN, slots::USER_INFO]);
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.user_profile().is_some_and(|p| p.role == role)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(Role::Admin)
    }

    pub fn is_operator(&self) -> bool {
        self.has_role(Role::Operator)
    }

    pub fn is_user(&self) -> bool {
        self.has_role(Role::User)
    }

    /// Whether the current profile may enter the admin area.
    pub fn has_admin_access(&self) -> bool {
        self.is_admin() || self.is_operator()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::slots;
    use claims::{assert_none, assert_some};
    use std::sync::Mutex;

    fn session() -> SessionStore {
        SessionStore::new(LocalStore::in_memory())
    }

    #[test]
    fn logged_in_tracks_token_slot() {
        let session = session();
        assert!(!session.is_logged_in());
        session.set_token("tok-1");
        assert!(session.is_logged_in());
    }

    #[test]
    fn malformed_profile_yields_none_without_panicking() {
        let store = LocalStore::in_memory();
        store.set(slots::USER_INFO, "{not valid json");
        let session = SessionStore::new(store);
        assert_none!(session.user_profile());
    }

    #[test]
    fn token_without_profile_counts_as_logged_in() {
        let session = session();
        session.set_token("tok-1");
        assert!(session.is_logged_in());
        assert_none!(session.user_profile());
        assert!(!session.has_admin_access());
    }

    #[test]
    fn profile_round_trip_and_predicates() {
        let session = session();
        let mut profile = UserProfile::new("li_lei", Role::Operator);
        profile.nickname = Some("Li Lei".to_string());
        session.set_user_profile(&profile);

        let loaded = assert_some!(session.user_profile());
        assert_eq!(loaded, profile);
        assert_eq!(loaded.display_name(), "Li Lei");
        assert!(session.is_operator());
        assert!(!session.is_admin());
        assert!(session.has_admin_access());
    }

    #[test]
    fn legacy_teacher_spelling_is_accepted() {
        let store = LocalStore::in_memory();
        store.set(
            slots::USER_INFO,
            r#"{"username":"old","role":"teacher"}"#,
        );
        let session = SessionStore::new(store);
        let profile = assert_some!(session.user_profile());
        assert_eq!(profile.role, Role::Operator);
    }

    #[test]
    fn clear_removes_token_and_profile_together() {
        let session = session();
        session.set_token("tok-1");
        session.set_user_profile(&UserProfile::new("anna", Role::Admin));

        session.clear();
        assert!(!session.is_logged_in());
        assert_none!(session.user_profile());
    }

    #[test]
    fn profile_update_is_published_synchronously() {
        let session = session();
        let seen = std::sync::Arc::new(Mutex::new(Vec::new()));

        let sink = seen.clone();
        session.events().subscribe(move |event| {
            let SessionEvent::UserInfoUpdated { user_info } = event;
            sink.lock().unwrap().push(user_info.username.clone());
        });

        session.set_user_profile(&UserProfile::new("anna", Role::Admin));
        assert_eq!(*seen.lock().unwrap(), vec!["anna".to_string()]);
    }

    #[test]
    fn role_parse_and_labels() {
        assert_eq!(Role::parse("teacher"), Some(Role::Operator));
        assert_eq!(Role::parse("admin"), Some(Role::Admin));
        assert_none!(Role::parse("root"));
        assert_eq!(Role::Admin.display_name(), "Administrator");
        assert_eq!(Role::Operator.to_string(), "operation");
    }
}
