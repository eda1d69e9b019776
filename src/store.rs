//! In-memory user list shared by the commands of one invocation.

use chrono::Utc;
use tracing::debug;

use crate::types::{Address, Company, FormRecord, Geo, User, UserId};
use crate::validation::{validate_form_record, ErrorMap};

#[derive(Debug, Default)]
pub struct UserStore {
    users: Vec<User>,
    is_loading: bool,
    error: Option<String>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_users(&mut self, users: Vec<User>) {
        self.users = users;
    }

    /// New users go to the front of the list.
    pub fn add_user(&mut self, user: User) {
        self.users.insert(0, user);
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn find(&self, raw_id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id.matches(raw_id))
    }

    /// An id derived from `candidate` that no stored user has yet.
    pub fn next_id(&self, candidate: u64) -> UserId {
        let mut id = candidate;
        while self.users.iter().any(|u| u.id == UserId::Number(id)) {
            id += 1;
        }
        UserId::Number(id)
    }
}

/// Build the user described by a form. Fields are copied verbatim; the
/// location is a placeholder.
pub fn user_from_form(id: UserId, form: &FormRecord) -> User {
    User {
        id,
        name: form.name.clone(),
        username: form.username.clone(),
        email: form.email.clone(),
        phone: form.phone.clone(),
        website: form.website.clone(),
        address: Address {
            street: form.street.clone(),
            suite: form.suite.clone(),
            city: form.city.clone(),
            zipcode: form.zipcode.clone(),
            // Placeholder coordinates for users created locally
            geo: Geo {
                lat: "0".to_string(),
                lng: "0".to_string(),
            },
        },
        company: Company {
            name: form.company_name.clone(),
            catch_phrase: form.catch_phrase.clone(),
            bs: form.bs.clone(),
        },
    }
}

/// Validate `form` and, if it passes, prepend the resulting user to `store`.
///
/// On failure the store is left untouched and the field errors are returned.
pub fn submit_form(store: &mut UserStore, form: &FormRecord) -> Result<User, ErrorMap> {
    let outcome = validate_form_record(form);
    if !outcome.is_valid {
        debug!(fields = outcome.errors.len(), "form rejected");
        return Err(outcome.errors);
    }

    let millis = u64::try_from(Utc::now().timestamp_millis()).unwrap_or_default();
    let user = user_from_form(store.next_id(millis), form);
    debug!(id = %user.id, "user created");
    store.add_user(user.clone());
    Ok(user)
}
