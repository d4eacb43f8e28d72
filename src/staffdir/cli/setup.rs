use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "staffdir", bin_name = "staffdir", version)]
#[command(about = "Employee directory with local persistence", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the data files (overrides STAFFDIR_HOME)
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Language for this invocation only
    #[arg(long, global = true, value_enum, help_heading = "Options")]
    pub lang: Option<LangArg>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LangArg {
    En,
    Tr,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LangChoice {
    En,
    Tr,
    Toggle,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List employees, one page at a time
    #[command(alias = "ls", display_order = 1)]
    List {
        /// Page to show (1-based)
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Rows per page (defaults to the configured page size)
        #[arg(long)]
        page_size: Option<usize>,

        /// Column to sort by (e.g. last-name, email, date-of-birth)
        #[arg(short, long)]
        sort: Option<String>,

        /// Sort descending
        #[arg(long, requires = "sort")]
        desc: bool,
    },

    /// Show one employee
    #[command(alias = "v", display_order = 2)]
    Show {
        /// Employee id or unique prefix
        id: String,
    },

    /// Add an employee
    #[command(alias = "n", display_order = 3)]
    Add {
        #[command(flatten)]
        fields: EmployeeArgs,
    },

    /// Change fields of an employee
    #[command(alias = "e", display_order = 4)]
    Edit {
        /// Employee id or unique prefix
        id: String,

        #[command(flatten)]
        fields: EmployeeArgs,
    },

    /// Delete one or more employees
    #[command(alias = "rm", display_order = 5)]
    Delete {
        /// Employee ids or unique prefixes
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Remove every employee
    #[command(display_order = 10)]
    Clear {
        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Add randomly generated sample employees
    #[command(display_order = 11)]
    Seed {
        /// How many employees to generate
        #[arg(default_value_t = 25)]
        count: usize,
    },

    /// Show or change the interface language
    #[command(display_order = 20)]
    Lang {
        #[arg(value_enum)]
        choice: Option<LangChoice>,
    },

    /// Get or set configuration
    #[command(display_order = 21)]
    Config {
        /// Configuration key (page-size, departments, positions)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

/// Employee fields. Dates take `YYYY-MM-DD` or the active language's display
/// format.
#[derive(Args, Debug, Default, Clone)]
pub struct EmployeeArgs {
    #[arg(long)]
    pub first_name: Option<String>,

    #[arg(long)]
    pub last_name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    /// Date of birth
    #[arg(long, value_name = "DATE")]
    pub birth: Option<String>,

    /// Date of employment
    #[arg(long, value_name = "DATE")]
    pub employed: Option<String>,

    #[arg(long)]
    pub department: Option<String>,

    #[arg(long)]
    pub position: Option<String>,
}
