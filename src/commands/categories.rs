use crate::catalog::CategoryColors;
use crate::cli::CategoryCommand;
use crate::commands::terminal_color;
use crate::context::AppContext;
use crate::error::Result;
use colored::Colorize;
use prettytable::{format, Table};

/// Handle category commands
pub async fn handle_categories(ctx: &AppContext, command: CategoryCommand) -> Result<()> {
    match command {
        CategoryCommand::List => {
            ctx.session().require_auth()?;

            let mut store = ctx.category_store();
            store.fetch_categories().await?;

            if store.categories().is_empty() {
                println!("{}", "No categories found.".yellow());
                return Ok(());
            }

            let colors = ctx.category_colors();
            let mut table = Table::new();
            table.set_format(*format::consts::FORMAT_BORDERS_ONLY);
            table.add_row(prettytable::row!["Slug".bold(), "Name".bold()]);

            for slug in store.categories() {
                let color = terminal_color(&colors.get_color(slug));
                table.add_row(prettytable::row![
                    slug,
                    CategoryColors::format_name(slug).color(color)
                ]);
            }

            println!("\nCategories:");
            table.printstd();
            println!();
        }
        CategoryCommand::Colors => {
            let assignments = ctx.category_colors().assignments();
            if assignments.is_empty() {
                println!("{}", "No category colors assigned yet.".yellow());
                return Ok(());
            }

            let mut table = Table::new();
            table.set_format(*format::consts::FORMAT_BORDERS_ONLY);
            table.add_row(prettytable::row!["Category".bold(), "Color".bold()]);

            for (category, token) in &assignments {
                table.add_row(prettytable::row![
                    CategoryColors::format_name(category).color(terminal_color(token)),
                    token
                ]);
            }

            table.printstd();
        }
    }

    Ok(())
}
