use crate::catalog::pagination::{page_to_skip, total_pages};
use crate::catalog::{CategoryColors, Product, ProductDraft, ProductQuery};
use crate::cli::ProductCommand;
use crate::commands::terminal_color;
use crate::context::AppContext;
use crate::error::Result;
use anyhow::Context;
use colored::Colorize;
use prettytable::{format, Table};
use std::path::Path;

/// Handle product commands
pub async fn handle_products(ctx: &AppContext, command: ProductCommand) -> Result<()> {
    ctx.session().require_auth()?;
    let mut store = ctx.product_store();

    match command {
        ProductCommand::List {
            page,
            per_page,
            search,
            category,
            sort_by,
            order,
            stock,
            json,
        } => {
            let per_page = per_page.unwrap_or(ctx.config().pagination.per_page);
            let query = ProductQuery {
                limit: per_page,
                skip: page_to_skip(page, per_page),
                search: search.unwrap_or_default(),
                category,
                sort_by: sort_by.unwrap_or_default(),
                order,
            };

            store.fetch_products(&query).await?;
            let products: Vec<&Product> = store
                .products()
                .iter()
                .filter(|product| stock.matches(product))
                .collect();

            if json {
                println!("{}", serde_json::to_string_pretty(&products)?);
                return Ok(());
            }

            if products.is_empty() {
                println!("{}", "No products found.".yellow());
                return Ok(());
            }

            print_product_table(ctx, &products);
            println!(
                "Page {} of {} ({} products)",
                page.max(1),
                total_pages(store.total(), per_page),
                store.total()
            );
        }
        ProductCommand::Show { id } => {
            let product = store.fetch_single_product(id).await?;
            print_product_details(ctx, &product);
        }
        ProductCommand::Add { file } => {
            let draft = read_draft(&file)?;
            let product = store.add_product(&draft).await?;
            println!(
                "{}",
                format!("Added product {} ({})", product.id, product.title).green()
            );
        }
        ProductCommand::Update { id, file } => {
            let draft = read_draft(&file)?;
            let product = store.update_product(id, &draft).await?;
            println!(
                "{}",
                format!("Updated product {} ({})", product.id, product.title).green()
            );
        }
        ProductCommand::Delete { id } => {
            store.delete_product(id).await?;
            println!("{}", format!("Deleted product {}", id).green());
        }
    }

    Ok(())
}

fn read_draft(path: &Path) -> Result<ProductDraft> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let draft = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse product fields in {}", path.display()))?;
    Ok(draft)
}

fn print_product_table(ctx: &AppContext, products: &[&Product]) {
    let colors = ctx.category_colors();
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BORDERS_ONLY);
    table.add_row(prettytable::row![
        "ID".bold(),
        "Title".bold(),
        "Category".bold(),
        "Price".bold(),
        "Stock".bold(),
        "Rating".bold()
    ]);

    for product in products {
        let title = if product.title.chars().count() > 40 {
            format!("{}...", product.title.chars().take(37).collect::<String>())
        } else {
            product.title.clone()
        };
        let color = terminal_color(&colors.get_color(&product.category));

        table.add_row(prettytable::row![
            product.id.to_string().cyan(),
            title,
            CategoryColors::format_name(&product.category).color(color),
            format!("{:.2}", product.price),
            product.stock,
            format!("{:.2}", product.rating)
        ]);
    }

    println!();
    table.printstd();
}

fn print_product_details(ctx: &AppContext, product: &Product) {
    let colors = ctx.category_colors();
    let color = terminal_color(&colors.get_color(&product.category));

    println!("{} {}", format!("#{}", product.id).cyan(), product.title.bold());
    println!(
        "{} {}",
        "Category:".bold(),
        CategoryColors::format_name(&product.category).color(color)
    );
    if let Some(brand) = &product.brand {
        println!("{} {}", "Brand:".bold(), brand);
    }
    println!(
        "{} {:.2} ({:.2}% off)",
        "Price:".bold(),
        product.price,
        product.discount_percentage
    );
    println!("{} {}", "Stock:".bold(), product.stock);
    if let Some(status) = &product.availability_status {
        println!("{} {}", "Availability:".bold(), status);
    }
    println!("{} {:.2}", "Rating:".bold(), product.rating);
    if !product.tags.is_empty() {
        println!("{} {}", "Tags:".bold(), product.tags.join(", "));
    }
    if !product.description.is_empty() {
        println!();
        println!("{}", product.description);
    }
}
