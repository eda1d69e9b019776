use std::io::{self, BufRead, Write};
use std::time::Duration;

use colored::Colorize;
use tracing::{debug, info, warn};

use crate::cli::AddArgs;
use crate::commands::view::render_details;
use crate::error::{Result, UserDirError};
use crate::output;
use crate::store::{submit_form, UserStore};
use crate::types::{FormField, FormRecord};
use crate::validation::FormValidation;

pub async fn add(store: &mut UserStore, args: &AddArgs, delay: Duration) -> Result<()> {
    let mut form = args.to_form();

    if args.interactive {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut out = io::stdout();
        fill_form(&mut form, &mut input, &mut out)?;
    }

    let mut validation = FormValidation::new();
    if !validation.validate_form(&form) {
        warn!(fields = validation.errors().len(), "add-user form is invalid");
        output::print_errors(validation.errors());
        return Err(UserDirError::Validation {
            errors: validation.errors().clone(),
        });
    }

    debug!(delay_ms = delay.as_millis() as u64, "submitting user");
    tokio::time::sleep(delay).await;

    let user = submit_form(store, &form).map_err(|errors| UserDirError::Validation { errors })?;
    info!(id = %user.id, total = store.users().len(), "user added");

    output::print_item(&user, |user| println!("{}", render_details(user)));
    output::print_message(&format!(
        "Added user #{} ({} users in directory)",
        user.id,
        store.users().len()
    ));
    Ok(())
}

/// Prompt for form fields until the form validates or input runs out.
///
/// The first pass asks for every field. Later passes only ask for fields
/// that still have an error, showing the message. An empty answer keeps the
/// current value.
pub fn fill_form<R: BufRead, W: Write>(
    form: &mut FormRecord,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    let mut validation = FormValidation::new();
    let mut pending: Vec<FormField> = FormField::ALL.to_vec();

    loop {
        for field in pending {
            write!(out, "{}", prompt_text(form, field, validation.errors().get(field)))?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                return Ok(());
            }

            let value = line.trim_end_matches(['\r', '\n']);
            if !value.is_empty() {
                form.set(field, value);
                validation.clear_error(field);
            }
        }

        if validation.validate_form(form) {
            return Ok(());
        }

        writeln!(
            out,
            "{}",
            format!("{} field(s) need attention.", validation.errors().len()).yellow()
        )?;
        pending = validation.errors().fields().collect();
    }
}

fn prompt_text(form: &FormRecord, field: FormField, error: Option<&str>) -> String {
    let mut text = field.label().to_string();
    if field.is_optional() {
        text.push_str(" (optional)");
    }
    if let Some(error) = error {
        text.push_str(&format!(" - {}", error.red()));
    }
    let current = form.get(field);
    if !current.is_empty() {
        text.push_str(&format!(" [{current}]"));
    }
    text.push_str(": ");
    text
}
