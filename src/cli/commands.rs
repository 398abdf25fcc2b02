use dialoguer::{theme::ColorfulTheme, Input, Password, Select};

use crate::cli::context::{CliMode, CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::{Availability, CommandEntry, CommandRegistry};
use crate::core::format::format_amount;
use crate::core::services::{EntryService, SummaryService};
use crate::ledger::Category;
use crate::utils::build_info;

pub fn build_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    registry.register(CommandEntry::new(
        "login",
        "Unlock the account book",
        "login <username> <password>",
        Availability::BeforeLogin,
        cmd_login,
    ));
    registry.register(CommandEntry::new(
        "income",
        "Record money received",
        "income <amount> <description...>",
        Availability::AfterLogin,
        cmd_income,
    ));
    registry.register(CommandEntry::new(
        "paid",
        "Record money spent",
        "paid <amount> <description...>",
        Availability::AfterLogin,
        cmd_paid,
    ));
    registry.register(CommandEntry::new(
        "enter",
        "Record an entry, prompting for missing fields",
        "enter [income|paid] [amount] [description...]",
        Availability::AfterLogin,
        cmd_enter,
    ));
    registry.register(CommandEntry::new(
        "show",
        "Display the account book",
        "show",
        Availability::AfterLogin,
        cmd_show,
    ));
    registry.register(CommandEntry::new(
        "history",
        "List this month's transactions, newest first",
        "history",
        Availability::AfterLogin,
        cmd_history,
    ));
    registry.register(CommandEntry::new(
        "summary",
        "Print totals and the monthly figures",
        "summary [--json]",
        Availability::AfterLogin,
        cmd_summary,
    ));
    registry.register(CommandEntry::new(
        "version",
        "Show build information",
        "version",
        Availability::Always,
        cmd_version,
    ));
    registry.register(CommandEntry::new(
        "help",
        "List available commands",
        "help [command]",
        Availability::Always,
        cmd_help,
    ));
    registry.register(CommandEntry::new(
        "exit",
        "Leave the shell",
        "exit",
        Availability::Always,
        cmd_exit,
    ));
    registry.alias("quit", "exit");
    registry
}

fn cmd_login(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [username, password] => context.login(username, password),
        [] if context.mode == CliMode::Interactive => {
            let theme = ColorfulTheme::default();
            let username: String = Input::with_theme(&theme)
                .with_prompt("USERNAME")
                .allow_empty(true)
                .interact_text()?;
            let password = Password::with_theme(&theme)
                .with_prompt("PASSWORD")
                .allow_empty_password(true)
                .interact()?;
            context.login(&username, &password)
        }
        _ => Err(CommandError::InvalidArguments(
            "Usage: login <username> <password>".into(),
        )),
    }
}

fn cmd_income(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    record_entry(context, Category::Income, args)
}

fn cmd_paid(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    record_entry(context, Category::Paid, args)
}

fn cmd_enter(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some((category, rest)) = args.split_first() {
        let category: Category = category.parse()?;
        return record_entry(context, category, rest);
    }
    if context.mode != CliMode::Interactive {
        return Err(CommandError::InvalidArguments(
            "Usage: enter <income|paid> <amount> <description...>".into(),
        ));
    }

    let theme = ColorfulTheme::default();
    let choices = [Category::Income, Category::Paid];
    let selected = Select::with_theme(&theme)
        .with_prompt("Category")
        .items(&choices)
        .default(0)
        .interact()?;
    let amount: String = Input::with_theme(&theme)
        .with_prompt("Amount")
        .interact_text()?;
    let description: String = Input::with_theme(&theme)
        .with_prompt("Description")
        .allow_empty(true)
        .interact_text()?;
    submit(context, choices[selected], &amount, &description)
}

fn record_entry(context: &mut ShellContext, category: Category, args: &[&str]) -> CommandResult {
    let Some((amount, description)) = args.split_first() else {
        return Err(CommandError::InvalidArguments(format!(
            "Usage: {} <amount> <description...>",
            category.to_string().to_lowercase()
        )));
    };
    if description.is_empty() {
        return Err(CommandError::InvalidArguments(
            "Description is required".into(),
        ));
    }
    submit(context, category, amount, &description.join(" "))
}

fn submit(
    context: &mut ShellContext,
    category: Category,
    amount: &str,
    description: &str,
) -> CommandResult {
    let entry = EntryService::submit(
        &mut context.ledger,
        amount,
        &category.to_string(),
        description,
    )?;
    output::success(format!(
        "{} {} recorded: {}",
        entry.category,
        format_amount(&context.config.currency_symbol, entry.amount),
        entry.description
    ));
    context.render_account_book();
    Ok(())
}

fn cmd_show(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.render_account_book();
    Ok(())
}

fn cmd_history(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let dashboard = SummaryService::current(&context.ledger);
    output::lines(context.view().history(&dashboard.history));
    Ok(())
}

fn cmd_summary(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let dashboard = SummaryService::current(&context.ledger);
    match args {
        [] => {
            let view = context.view();
            output::lines(view.header(&dashboard));
            output::lines(view.monthly(&dashboard));
            Ok(())
        }
        ["--json"] => {
            println!("{}", serde_json::to_string_pretty(&dashboard)?);
            Ok(())
        }
        _ => Err(CommandError::InvalidArguments(
            "Usage: summary [--json]".into(),
        )),
    }
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::info(build_info::current().summary());
    Ok(())
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(name) = args.first() {
        let Some(entry) = context.registry.get(&name.to_lowercase()) else {
            return Err(CommandError::InvalidArguments(format!(
                "Unknown command `{name}`."
            )));
        };
        output::info(format!("{} - {}", entry.usage, entry.description));
        return Ok(());
    }

    let width = context
        .registry
        .list()
        .iter()
        .map(|entry| entry.usage.len())
        .max()
        .unwrap_or(0);
    let rows: Vec<String> = context
        .registry
        .list()
        .into_iter()
        .map(|entry| format!("  {:<width$}  {}", entry.usage, entry.description))
        .collect();
    output::lines(rows);
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::info("Goodbye.");
    Err(CommandError::ExitRequested)
}
