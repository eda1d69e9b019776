use tabled::builder::Builder;
use tracing::debug;

use crate::cli::{ListArgs, OutputFormat};
use crate::names::format_name;
use crate::output;
use crate::search::Search;
use crate::sort::{UserSortKey, UserSorter};
use crate::store::UserStore;
use crate::types::User;

/// Columns of the user table and the key each header sorts by.
const COLUMNS: [(&str, UserSortKey); 3] = [
    ("Name", UserSortKey::FormattedName),
    ("Username", UserSortKey::Username),
    ("Email", UserSortKey::Email),
];

/// Query state of the user table.
#[derive(Debug, Default)]
pub struct UserQuery {
    pub search: Search,
    pub sorter: UserSorter,
}

impl UserQuery {
    pub fn from_args(args: &ListArgs) -> Self {
        let mut query = Self::default();
        if let Some(term) = &args.search {
            query.search.set_search_term(term.clone());
        }
        for &key in &args.sort {
            query.sorter.handle_sort(key);
        }
        query
    }

    /// Filter, then sort.
    pub fn apply<'a>(&self, users: &'a [User]) -> Vec<&'a User> {
        self.sorter.sorted_users(self.search.filtered(users))
    }
}

pub fn list(store: &UserStore, args: &ListArgs) {
    let query = UserQuery::from_args(args);
    let users = query.apply(store.users());
    debug!(
        total = store.users().len(),
        shown = users.len(),
        sort = ?query.sorter.sort_field(),
        "listing users"
    );
    print_users(&users, &query.sorter);
}

pub fn print_users(users: &[&User], sorter: &UserSorter) {
    if users.is_empty() && !output::is_json_output() {
        output::print_message("No users found");
        return;
    }

    match output::format() {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(users).unwrap_or_default());
        }
        OutputFormat::Compact => {
            for user in users {
                println!("{}", compact_line(user));
            }
        }
        OutputFormat::Table => println!("{}", render_user_table(users, sorter)),
    }
}

fn compact_line(user: &User) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        user.id,
        format_name(&user.name),
        user.username,
        user.email
    )
}

/// Table with sort arrows in the headers.
pub fn render_user_table(users: &[&User], sorter: &UserSorter) -> String {
    let mut builder = Builder::default();
    let mut header = vec!["ID".to_string()];
    header.extend(
        COLUMNS
            .iter()
            .map(|(title, key)| format!("{title}{}", sorter.sort_icon(*key))),
    );
    builder.push_record(header);

    for user in users {
        builder.push_record([
            user.id.to_string(),
            output::truncate(&format_name(&user.name), 40),
            user.username.clone(),
            user.email.clone(),
        ]);
    }

    builder.build().with(tabled::settings::Style::rounded()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UserId;

    fn mk_user(id: u64, name: &str, email: &str) -> User {
        User {
            id: UserId::Number(id),
            name: name.to_string(),
            username: name.to_lowercase().replace(' ', "."),
            email: email.to_string(),
            address: Default::default(),
            phone: String::new(),
            website: String::new(),
            company: Default::default(),
        }
    }

    fn sample() -> Vec<User> {
        vec![
            mk_user(1, "Jane Smith", "jane@example.com"),
            mk_user(2, "Bob Johnson", "bob@example.com"),
            mk_user(3, "John Doe", "john@sample.org"),
        ]
    }

    fn names(users: &[&User]) -> Vec<String> {
        users.iter().map(|u| u.name.clone()).collect()
    }

    #[test]
    fn test_query_filters_then_sorts() {
        let users = sample();
        let args = ListArgs {
            search: Some("EXAMPLE".to_string()),
            sort: vec![UserSortKey::FormattedName],
        };
        let query = UserQuery::from_args(&args);
        assert_eq!(names(&query.apply(&users)), vec!["Bob Johnson", "Jane Smith"]);
    }

    #[test]
    fn test_query_second_click_reverses() {
        let users = sample();
        let args = ListArgs {
            search: None,
            sort: vec![UserSortKey::FormattedName, UserSortKey::FormattedName],
        };
        let query = UserQuery::from_args(&args);
        assert_eq!(
            names(&query.apply(&users)),
            vec!["Jane Smith", "Bob Johnson", "John Doe"]
        );
    }

    #[test]
    fn test_query_without_options_is_identity() {
        let users = sample();
        let query = UserQuery::from_args(&ListArgs::default());
        assert_eq!(
            names(&query.apply(&users)),
            vec!["Jane Smith", "Bob Johnson", "John Doe"]
        );
    }

    #[test]
    fn test_table_headers_show_sort_arrow() {
        let users = sample();
        let refs: Vec<&User> = users.iter().collect();
        let mut sorter = UserSorter::new();
        sorter.handle_sort(UserSortKey::Email);

        let table = render_user_table(&refs, &sorter);
        assert!(table.contains("Email ↑"));
        assert!(table.contains("Smith, Jane"));
        assert!(!table.contains("Name ↑"));
    }

    #[test]
    fn test_compact_line_uses_formatted_name() {
        let user = mk_user(9, "Dr. Jane Smith", "jane@example.com");
        assert_eq!(
            compact_line(&user),
            "9\tSmith, Jane\tdr..jane.smith\tjane@example.com"
        );
    }
}
