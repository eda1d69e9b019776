use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use crate::config::API_URL_ENV;
use crate::sort::UserSortKey;
use crate::types::{FormField, FormRecord};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Compact,
}

#[derive(Parser)]
#[command(name = "userdir")]
#[command(about = "Browse, search and sort a remote user directory", version)]
#[command(after_help = "EXAMPLES:
    userdir list                          List all users
    userdir list --search jane            Users whose name or email contains \"jane\"
    userdir list --sort formatted-name    Sort by \"Last, First\"
    userdir view 3                        Show every detail of user 3
    userdir add -i                        Fill in the add-user form interactively")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json, compact)
    #[arg(long, short = 'o', global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Output as JSON (alias for --format json)
    #[arg(long, global = true, hide = true)]
    pub json: bool,

    /// Suppress success messages
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Show debug logs and detailed error information
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Users endpoint (overrides the config file)
    #[arg(long, env = API_URL_ENV, global = true)]
    pub api_url: Option<String>,
}

impl Cli {
    /// Get the effective output format, considering --json flag
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.format
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List users
    #[command(
        alias = "ls",
        after_help = "EXAMPLES:
    userdir list --search example.com
    userdir list --sort email
    userdir list --sort email --sort email    (second click: descending)"
    )]
    List(ListArgs),
    /// Show all details of one user
    #[command(after_help = "EXAMPLES:
    userdir view 1")]
    View {
        /// User id
        id: String,
    },
    /// Add a user to the in-memory directory
    #[command(after_help = "EXAMPLES:
    userdir add --name \"Jane Smith\" --username jane --email jane@example.com \\
        --phone 555-0100 --street \"1 Main St\" --city Springfield \\
        --zipcode 12345 --company-name Acme
    userdir add --interactive")]
    Add(AddArgs),
    /// Generate shell completions
    #[command(after_help = "EXAMPLES:
    userdir completions bash > ~/.bash_completion.d/userdir
    userdir completions zsh > ~/.zfunc/_userdir")]
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
    /// Initialize configuration file interactively
    Init,
}

#[derive(Args, Clone, Default)]
pub struct ListArgs {
    /// Only users whose name or email contains this text (case-insensitive)
    #[arg(long, short)]
    pub search: Option<String>,

    /// Column header to click; repeat to toggle direction
    #[arg(long, value_enum)]
    pub sort: Vec<UserSortKey>,
}

#[derive(Args, Clone, Default)]
pub struct AddArgs {
    /// Prompt for every field
    #[arg(long, short)]
    pub interactive: bool,

    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub username: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    /// Must start with http:// or https://
    #[arg(long)]
    pub website: Option<String>,
    #[arg(long)]
    pub street: Option<String>,
    #[arg(long)]
    pub suite: Option<String>,
    #[arg(long)]
    pub city: Option<String>,
    #[arg(long)]
    pub zipcode: Option<String>,
    #[arg(long)]
    pub company_name: Option<String>,
    #[arg(long)]
    pub catch_phrase: Option<String>,
    /// Company business line
    #[arg(long)]
    pub bs: Option<String>,
}

impl AddArgs {
    /// Form pre-filled with whatever was given on the command line.
    pub fn to_form(&self) -> FormRecord {
        let mut form = FormRecord::default();
        for field in FormField::ALL {
            if let Some(value) = self.value(field) {
                form.set(field, value);
            }
        }
        form
    }

    fn value(&self, field: FormField) -> Option<&str> {
        let value = match field {
            FormField::Name => &self.name,
            FormField::Username => &self.username,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::Website => &self.website,
            FormField::Street => &self.street,
            FormField::Suite => &self.suite,
            FormField::City => &self.city,
            FormField::Zipcode => &self.zipcode,
            FormField::CompanyName => &self.company_name,
            FormField::CatchPhrase => &self.catch_phrase,
            FormField::Bs => &self.bs,
        };
        value.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_api_url_falls_back_to_env() {
        let cmd = Cli::command();
        let arg = cmd
            .get_arguments()
            .find(|a| a.get_id() == "api_url")
            .unwrap();
        assert_eq!(arg.get_env(), Some(std::ffi::OsStr::new("USERDIR_API_URL")));
        assert!(arg.is_global_set());
    }

    #[test]
    fn test_repeated_sort_flags_keep_order() {
        let cli = Cli::parse_from([
            "userdir",
            "list",
            "--sort",
            "email",
            "--sort",
            "formattedName",
            "--sort",
            "formatted-name",
        ]);
        let Commands::List(args) = cli.command else {
            panic!("expected list command");
        };
        assert_eq!(
            args.sort,
            vec![
                UserSortKey::Email,
                UserSortKey::FormattedName,
                UserSortKey::FormattedName
            ]
        );
    }

    #[test]
    fn test_json_flag_overrides_format() {
        let cli = Cli::parse_from(["userdir", "--json", "list"]);
        assert_eq!(cli.output_format(), OutputFormat::Json);
        let cli = Cli::parse_from(["userdir", "list", "-o", "compact"]);
        assert_eq!(cli.output_format(), OutputFormat::Compact);
    }

    #[test]
    fn test_add_args_fill_form() {
        let cli = Cli::parse_from([
            "userdir",
            "add",
            "--name",
            "Jane Smith",
            "--company-name",
            "Acme",
        ]);
        let Commands::Add(args) = cli.command else {
            panic!("expected add command");
        };
        let form = args.to_form();
        assert_eq!(form.name, "Jane Smith");
        assert_eq!(form.company_name, "Acme");
        assert_eq!(form.email, "");
    }
}
