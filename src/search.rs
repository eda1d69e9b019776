use crate::types::User;

/// Keep the users whose name or email contains `term`, ignoring case.
///
/// A term that is empty after trimming disables the filter. Otherwise the
/// term is matched as typed, surrounding whitespace included.
pub fn filter_users<'a>(users: &'a [User], term: &str) -> Vec<&'a User> {
    if term.trim().is_empty() {
        return users.iter().collect();
    }

    let q = term.to_lowercase();
    users
        .iter()
        .filter(|u| u.name.to_lowercase().contains(&q) || u.email.to_lowercase().contains(&q))
        .collect()
}

/// Current search box contents.
#[derive(Debug, Default, Clone)]
pub struct Search {
    term: String,
}

impl Search {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_term(&self) -> &str {
        &self.term
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.term = term.into();
    }

    pub fn is_active(&self) -> bool {
        !self.term.trim().is_empty()
    }

    pub fn filtered<'a>(&self, users: &'a [User]) -> Vec<&'a User> {
        filter_users(users, &self.term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UserId;

    fn mk_user(id: u64, name: &str, email: &str) -> User {
        User {
            id: UserId::Number(id),
            name: name.to_string(),
            username: String::new(),
            email: email.to_string(),
            address: Default::default(),
            phone: String::new(),
            website: String::new(),
            company: Default::default(),
        }
    }

    fn ids(users: &[&User]) -> Vec<UserId> {
        users.iter().map(|u| u.id.clone()).collect()
    }

    fn sample() -> Vec<User> {
        vec![
            mk_user(1, "Leanne Graham", "Sincere@april.biz"),
            mk_user(2, "Ervin Howell", "Shanna@melissa.tv"),
            mk_user(3, "Jane Smith", "x@y.com"),
            mk_user(4, "Bob Johnson", "jane.fan@example.com"),
        ]
    }

    #[test]
    fn test_blank_term_returns_everything_in_order() {
        let users = sample();
        for term in ["", "   ", "\t"] {
            let found = filter_users(&users, term);
            assert_eq!(found.len(), users.len());
            assert_eq!(
                ids(&found),
                users.iter().map(|u| u.id.clone()).collect::<Vec<_>>()
            );
        }
    }

    #[test]
    fn test_matches_name_or_email_case_insensitive() {
        let users = sample();
        let found = filter_users(&users, "JANE");
        assert_eq!(ids(&found), vec![UserId::Number(3), UserId::Number(4)]);

        let found = filter_users(&users, "melissa");
        assert_eq!(ids(&found), vec![UserId::Number(2)]);
    }

    #[test]
    fn test_single_name_match() {
        let users = vec![mk_user(7, "Jane Smith", "x@y.com")];
        let found = filter_users(&users, "JANE");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Jane Smith");
    }

    #[test]
    fn test_term_is_not_trimmed_for_matching() {
        let users = sample();
        // " Smith" appears inside "Jane Smith" with its leading space.
        assert_eq!(ids(&filter_users(&users, " Smith")), vec![UserId::Number(3)]);
        // A trailing space matches nothing here.
        assert!(filter_users(&users, "Smith ").is_empty());
    }

    #[test]
    fn test_no_match_yields_empty() {
        let users = sample();
        assert!(filter_users(&users, "zzz").is_empty());
        assert!(filter_users(&[], "anything").is_empty());
    }

    #[test]
    fn test_search_state() {
        let users = sample();
        let mut search = Search::new();
        assert!(!search.is_active());
        assert_eq!(search.filtered(&users).len(), 4);

        search.set_search_term("ervin");
        assert!(search.is_active());
        assert_eq!(search.search_term(), "ervin");
        assert_eq!(ids(&search.filtered(&users)), vec![UserId::Number(2)]);
    }
}
