//! # Category Handlers

use shared::utils::{format_amount, truncate_text};
use shared::Category;

use super::require;
use crate::app::commands::CategoryCommand;
use crate::core::error::Result;
use crate::core::service::ExpenseApi;

pub(crate) async fn handle_category_command(api: &dyn ExpenseApi, command: CategoryCommand) -> Result<String> {
    match command {
        CategoryCommand::List => {
            let categories = api.list_categories().await?;
            Ok(format_category_list(&categories))
        }
        CategoryCommand::Show { id } => {
            let category = api.get_category(id).await?;
            Ok(format_category_details(&category))
        }
        CategoryCommand::Add { title, description } => {
            require(&title, "Title")?;
            let category = api.create_category(title, description).await?;
            Ok(format!("Created category {}: {}", category.category_id, category.title))
        }
        CategoryCommand::Edit { id, title, description } => handle_edit(api, id, title, description).await,
        CategoryCommand::Delete { id } => {
            api.delete_category(id).await?;
            Ok(format!("Deleted category {}", id))
        }
    }
}

/// Update replaces both fields, so missing ones are read from the server first.
async fn handle_edit(
    api: &dyn ExpenseApi,
    id: i64,
    title: Option<String>,
    description: Option<String>,
) -> Result<String> {
    let (title, description) = match (title, description) {
        (Some(title), Some(description)) => (title, description),
        (title, description) => {
            let current = api.get_category(id).await?;
            (
                title.unwrap_or(current.title),
                description.or(current.description).unwrap_or_default(),
            )
        }
    };
    require(&title, "Title")?;

    api.update_category(id, title, description).await?;
    Ok(format!("Updated category {}", id))
}

pub(crate) fn format_category_list(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories".to_string();
    }

    let mut lines = vec![format!("{:>6}  {:<24}  {:>12}  {}", "ID", "TITLE", "TOTAL", "DESCRIPTION")];
    lines.extend(categories.iter().map(|c| {
        format!(
            "{:>6}  {:<24}  {:>12}  {}",
            c.category_id,
            truncate_text(&c.title, 24),
            format_amount(c.total_expense.unwrap_or(0.0)),
            c.description.as_deref().unwrap_or("")
        )
        .trim_end()
        .to_string()
    }));
    lines.join("\n")
}

fn format_category_details(category: &Category) -> String {
    format!(
        "Category {}\nTitle:       {}\nDescription: {}\nTotal:       {}",
        category.category_id,
        category.title,
        category.description.as_deref().unwrap_or(""),
        format_amount(category.total_expense.unwrap_or(0.0))
    )
}
