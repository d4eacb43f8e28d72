//! # CLI Layer
//!
//! This module is **one possible UI client** for staffdir, not the application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Installs a log subscriber
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Context Setup**: Resolve the data directory and build `AppContext`
//! 3. **API Dispatch**: Call the appropriate `StaffApi` method
//! 4. **Output Formatting**: Convert `CmdResult` into terminal output
//!
//! Logging is off unless asked for: `STAFFDIR_LOG` takes an `EnvFilter`
//! directive (default `warn`) and `--verbose` forces `debug`. Logs go to stderr.

use super::print::{print_config, print_employee, print_employee_page, print_messages};
use super::setup::{Cli, Commands, EmployeeArgs, LangArg, LangChoice};
use clap::Parser;
use colored::Colorize;
use staffdir::api::{ConfigAction, LanguageAction, ListQuery, StaffApi};
use staffdir::config::DirectoryConfig;
use staffdir::error::{Result, StaffError};
use staffdir::i18n::Language;
use staffdir::init::{env_home, initialize, resolve_data_dir};
use staffdir::listing::SortOrder;
use staffdir::model::{EmployeeData, EmployeePatch, Field};
use staffdir::store::fs_backend::FsBackend;
use staffdir::validation::parse_date;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "STAFFDIR_LOG";

struct AppContext {
    api: StaffApi<FsBackend>,
    config: DirectoryConfig,
    lang: Language,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List {
            page,
            page_size,
            sort,
            desc,
        }) => handle_list(&mut ctx, page, page_size, sort, desc),
        Some(Commands::Show { id }) => handle_show(&mut ctx, &id),
        Some(Commands::Add { fields }) => handle_add(&mut ctx, fields),
        Some(Commands::Edit { id, fields }) => handle_edit(&mut ctx, &id, fields),
        Some(Commands::Delete { ids }) => handle_delete(&mut ctx, ids),
        Some(Commands::Clear { yes }) => handle_clear(&mut ctx, yes),
        Some(Commands::Seed { count }) => handle_seed(&mut ctx, count),
        Some(Commands::Lang { choice }) => handle_lang(&mut ctx, choice),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => handle_list(&mut ctx, 1, None, None, false),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli.data_dir.clone(), env_home())?;
    let ctx = initialize(data_dir);

    let lang = match cli.lang {
        Some(LangArg::En) => Language::En,
        Some(LangArg::Tr) => Language::Tr,
        None => ctx.api.language(),
    };
    debug!(%lang, "context ready");

    Ok(AppContext {
        api: ctx.api,
        config: ctx.config,
        lang,
    })
}

fn handle_list(
    ctx: &mut AppContext,
    page: usize,
    page_size: Option<usize>,
    sort: Option<String>,
    desc: bool,
) -> Result<()> {
    let page_size = page_size.unwrap_or(ctx.config.page_size);
    if page_size == 0 {
        return Err(StaffError::Api("Page size must be at least 1".to_string()));
    }

    let sort = match sort {
        Some(name) => {
            let field: Field = name.parse().map_err(StaffError::Api)?;
            Some(if desc {
                SortOrder::desc(field)
            } else {
                SortOrder::asc(field)
            })
        }
        None => None,
    };

    let result = ctx.api.list_employees(ListQuery {
        sort,
        page,
        page_size,
    })?;
    print_messages(&result.messages);
    if let Some(page) = &result.page {
        print_employee_page(page, ctx.lang);
    }
    Ok(())
}

fn handle_show(ctx: &mut AppContext, id: &str) -> Result<()> {
    let result = ctx.api.show_employee(id)?;
    for employee in &result.listed_employees {
        print_employee(employee, ctx.lang);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(ctx: &mut AppContext, fields: EmployeeArgs) -> Result<()> {
    let lang = ctx.lang;
    let data = EmployeeData {
        first_name: fields.first_name.unwrap_or_default(),
        last_name: fields.last_name.unwrap_or_default(),
        email: fields.email.unwrap_or_default(),
        phone: fields.phone.unwrap_or_default(),
        date_of_birth: fields
            .birth
            .map(|d| normalize_date(lang, d))
            .transpose()?
            .unwrap_or_default(),
        date_of_employment: fields
            .employed
            .map(|d| normalize_date(lang, d))
            .transpose()?
            .unwrap_or_default(),
        department: fields.department.unwrap_or_default(),
        position: fields.position.unwrap_or_default(),
    };

    let result = ctx.api.add_employee(data).inspect_err(print_report)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, id: &str, fields: EmployeeArgs) -> Result<()> {
    let lang = ctx.lang;
    let patch = EmployeePatch {
        id: None,
        first_name: fields.first_name,
        last_name: fields.last_name,
        email: fields.email,
        phone: fields.phone,
        date_of_birth: fields
            .birth
            .map(|d| normalize_date(lang, d))
            .transpose()?,
        date_of_employment: fields
            .employed
            .map(|d| normalize_date(lang, d))
            .transpose()?,
        department: fields.department,
        position: fields.position,
    };

    let result = ctx
        .api
        .update_employee(id, &patch)
        .inspect_err(print_report)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, ids: Vec<String>) -> Result<()> {
    let result = ctx.api.delete_employees(&ids)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_clear(ctx: &mut AppContext, yes: bool) -> Result<()> {
    if !yes {
        println!("{}", ctx.lang.t("confirmClearData"));
        println!("{}", "Re-run with --yes to clear.".yellow());
        return Ok(());
    }
    let result = ctx.api.clear_employees()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_seed(ctx: &mut AppContext, count: usize) -> Result<()> {
    let result = ctx.api.seed_employees(count)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_lang(ctx: &mut AppContext, choice: Option<LangChoice>) -> Result<()> {
    let action = match choice {
        None => LanguageAction::Show,
        Some(LangChoice::En) => LanguageAction::Set(Language::En),
        Some(LangChoice::Tr) => LanguageAction::Set(Language::Tr),
        Some(LangChoice::Toggle) => LanguageAction::Toggle,
    };

    let result = ctx.api.set_language(action)?;
    if matches!(action, LanguageAction::Show) {
        if let Some(language) = result.language {
            println!("{}", language);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let show_all = key.is_none();
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

/// Dates typed in the active display format become `YYYY-MM-DD`. ISO dates
/// pass through, as does an empty value so validation can flag it as
/// required. Anything else that is not a real calendar day is rejected.
fn normalize_date(lang: Language, value: String) -> Result<String> {
    if value.trim().is_empty() || parse_date(&value).is_some() {
        return Ok(value);
    }
    lang.parse_display_date(&value)
        .ok_or_else(|| StaffError::Api(format!("Invalid date: {}", value)))
}

/// One line per rejected field, before the summary error reaches `main`.
fn print_report(err: &StaffError) {
    if let StaffError::Validation(report) = err {
        for (field, message) in report.messages() {
            eprintln!("  {}: {}", field.to_string().bold(), message.red());
        }
    }
}
