use parking_lot::Mutex;
use tracing::debug;

use crate::{
    models::{NewUser, UserFilter, UserPage, UserPatch, UserRecord, UserType, ALL_USER_TYPES},
    storage::{MemoryUserStore, UserStore},
};

struct RegistryState<S> {
    store: S,
    last_id: u64,
}

/// Live collection of user records plus the id counter.
///
/// Ids are handed out from `last_id`, which only ever grows, so ids of
/// deleted records are never reissued.
pub struct UserRegistry<S: UserStore = MemoryUserStore> {
    state: Mutex<RegistryState<S>>,
}

impl UserRegistry<MemoryUserStore> {
    pub fn new() -> Self {
        Self::with_store(MemoryUserStore::new())
    }

    /// Registry preloaded with the demo population used by the admin UI.
    pub fn seeded() -> Self {
        let registry = Self::new();
        for (username, user_type) in DEMO_USERS {
            registry.add(NewUser {
                username: username.to_string(),
                user_type,
            });
        }
        registry
    }
}

impl Default for UserRegistry<MemoryUserStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: UserStore> UserRegistry<S> {
    pub fn with_store(store: S) -> Self {
        let last_id = store.scan().iter().map(|record| record.id).max().unwrap_or(0);
        Self {
            state: Mutex::new(RegistryState { store, last_id }),
        }
    }

    pub fn list(&self, filter: &UserFilter) -> UserPage {
        let needle = filter
            .username
            .as_deref()
            .filter(|value| !value.is_empty())
            .map(str::to_lowercase);
        let user_type = filter
            .user_type
            .as_deref()
            .filter(|value| *value != ALL_USER_TYPES);

        let data: Vec<UserRecord> = self
            .state
            .lock()
            .store
            .scan()
            .into_iter()
            .filter(|record| {
                needle
                    .as_deref()
                    .map_or(true, |needle| record.username.to_lowercase().contains(needle))
            })
            .filter(|record| user_type.map_or(true, |wanted| record.user_type.as_str() == wanted))
            .collect();

        UserPage {
            total: data.len(),
            data,
        }
    }

    pub fn add(&self, user: NewUser) -> UserRecord {
        let mut state = self.state.lock();
        state.last_id += 1;
        let record = UserRecord {
            id: state.last_id,
            username: user.username,
            user_type: user.user_type,
        };
        state.store.put(record.clone());
        debug!(id = record.id, "user added");
        record
    }

    pub fn update(&self, id: u64, patch: UserPatch) -> Option<UserRecord> {
        let mut state = self.state.lock();
        let mut record = state.store.get(id)?;
        if let Some(username) = patch.username {
            record.username = username;
        }
        if let Some(user_type) = patch.user_type {
            record.user_type = user_type;
        }
        state.store.put(record.clone());
        Some(record)
    }

    pub fn delete(&self, id: u64) -> Option<UserRecord> {
        self.state.lock().store.delete(id)
    }

    pub fn len(&self) -> usize {
        self.state.lock().store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The declared account classes, independent of who is registered.
pub fn user_types() -> Vec<&'static str> {
    UserType::ALL.iter().map(|user_type| user_type.as_str()).collect()
}

const DEMO_USERS: [(&str, UserType); 10] = [
    ("root", UserType::Superadmin),
    ("alice", UserType::Admin),
    ("bob", UserType::Admin),
    ("charlie", UserType::Admin),
    ("user01", UserType::User),
    ("User02", UserType::User),
    ("USER_ops", UserType::User),
    ("dave", UserType::User),
    ("erin", UserType::User),
    ("frank_user", UserType::User),
];
