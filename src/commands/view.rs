use colored::Colorize;

use crate::error::{Result, UserDirError};
use crate::names::format_name;
use crate::output::{self, detail_line};
use crate::store::UserStore;
use crate::types::User;

pub fn view(store: &UserStore, id: &str) -> Result<()> {
    let user = store
        .find(id)
        .ok_or_else(|| UserDirError::UserNotFound(id.to_string()))?;

    output::print_item(user, |user| println!("{}", render_details(user)));
    Ok(())
}

/// Full details of one user, grouped into sections.
pub fn render_details(user: &User) -> String {
    let sections: [(&str, Vec<(&str, &str)>); 3] = [
        (
            "Basic Information",
            vec![
                ("Name", user.name.as_str()),
                ("Username", user.username.as_str()),
                ("Email", user.email.as_str()),
                ("Phone", user.phone.as_str()),
                ("Website", user.website.as_str()),
            ],
        ),
        (
            "Address",
            vec![
                ("Street", user.address.street.as_str()),
                ("Suite", user.address.suite.as_str()),
                ("City", user.address.city.as_str()),
                ("Zipcode", user.address.zipcode.as_str()),
            ],
        ),
        (
            "Company",
            vec![
                ("Name", user.company.name.as_str()),
                ("Catch Phrase", user.company.catch_phrase.as_str()),
                ("Business", user.company.bs.as_str()),
            ],
        ),
    ];

    let mut out = format!(
        "{} {}\n",
        format_name(&user.name).bold(),
        format!("(#{})", user.id).bright_black()
    );
    for (title, lines) in sections {
        out.push('\n');
        out.push_str(&format!("{}\n", title.underline()));
        for (label, value) in lines {
            out.push_str(&format!("  {}\n", detail_line(label, value)));
        }
    }
    out
}
