//! # Transaction Handlers
//!
//! Edit reads the stored transaction into a [`TransactionForm`], applies the given
//! overrides and sends the whole form back.

use lib_utils::{epoch_millis_to_date, today_utc};
use shared::utils::format_amount;
use shared::Transaction;

use crate::app::commands::TransactionCommand;
use crate::core::error::Result;
use crate::core::service::ExpenseApi;
use crate::services::api::TransactionForm;
use crate::ui::{render_bars, BarSeries};

pub(crate) async fn handle_transaction_command(
    api: &dyn ExpenseApi,
    command: TransactionCommand,
    chart_width: usize,
) -> Result<String> {
    match command {
        TransactionCommand::List { category, chart } => {
            let transactions = api.list_transactions(category).await?;
            let mut output = format_transaction_list(&transactions)?;
            if !transactions.is_empty() {
                let series = BarSeries::transaction_series(&transactions);
                output.push_str(&format!("\nTotal: {}", format_amount(series.total())));
                if chart {
                    output.push_str("\n\n");
                    output.push_str(&render_bars(&series, chart_width));
                }
            }
            Ok(output)
        }
        TransactionCommand::Show { category, id } => {
            let transaction = api.get_transaction(category, id).await?;
            format_transaction_details(&transaction)
        }
        TransactionCommand::Add {
            category,
            amount,
            note,
            date,
        } => {
            let form = TransactionForm::new(amount, note, date.unwrap_or_else(today_utc));
            let created = api.create_transaction(category, &form).await?;
            Ok(format!(
                "Created transaction {} in category {}",
                created.transaction_id, category
            ))
        }
        TransactionCommand::Edit {
            category,
            id,
            amount,
            note,
            date,
        } => {
            let current = api.get_transaction(category, id).await?;
            let mut form = TransactionForm::from_transaction(&current)?;
            if let Some(amount) = amount {
                form.amount = amount;
            }
            if let Some(note) = note {
                form.note = note;
            }
            if let Some(date) = date {
                form.transaction_date = date;
            }

            api.update_transaction(category, id, &form).await?;
            Ok(format!("Updated transaction {}", id))
        }
        TransactionCommand::Delete { category, id } => {
            api.delete_transaction(category, id).await?;
            Ok(format!("Deleted transaction {}", id))
        }
    }
}

fn format_transaction_list(transactions: &[Transaction]) -> Result<String> {
    if transactions.is_empty() {
        return Ok("No transactions".to_string());
    }

    let mut lines = vec![format!("{:>6}  {:<10}  {:>12}  {}", "ID", "DATE", "AMOUNT", "NOTE")];
    for t in transactions {
        lines.push(
            format!(
                "{:>6}  {:<10}  {:>12}  {}",
                t.transaction_id,
                epoch_millis_to_date(t.transaction_date)?,
                format_amount(t.amount),
                t.note.as_deref().unwrap_or("")
            )
            .trim_end()
            .to_string(),
        );
    }
    Ok(lines.join("\n"))
}

fn format_transaction_details(transaction: &Transaction) -> Result<String> {
    Ok(format!(
        "Transaction {}\nDate:   {}\nAmount: {}\nNote:   {}",
        transaction.transaction_id,
        epoch_millis_to_date(transaction.transaction_date)?,
        format_amount(transaction.amount),
        transaction.note.as_deref().unwrap_or("")
    ))
}
