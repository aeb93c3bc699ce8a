use std::fmt::Write as _;
use std::io::Write as _;

use chrono::Local;
use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::adapters::wait_api::WaitApiClient;
use crate::app::config::{AppConfig, OutputFormat};
use crate::app::error::AppError;
use crate::domain::calendar_date::WaitingDate;
use crate::domain::models::{Office, OfficeWaitingTimes, StatusRecord, Statuses};

#[derive(Debug, Parser)]
#[command(name = "st_wait", version, about = "Query office waiting times from the st-wait backend")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// List all offices known to the backend.
    Offices,
    /// Print the status id to label mapping.
    Statuses,
    /// Status samples of one office for one day.
    WaitingTimes {
        office_id: i64,
        /// Day to query as YYYY-MM-DD, sent as given. Defaults to today.
        #[arg(long)]
        date: Option<String>,
        /// Resolve status ids to labels (fetches /statuses as well).
        #[arg(long)]
        with_labels: bool,
    },
    /// Status samples of every office for one day.
    AllWaitingTimes {
        #[arg(long)]
        date: Option<String>,
    },
}

#[derive(Debug, Serialize, PartialEq)]
struct LabelledRecord<'a> {
    captured_at: &'a str,
    status_id: i64,
    status: Option<&'a str>,
}

pub fn run(config: AppConfig, cli: Cli) -> Result<(), AppError> {
    let client = WaitApiClient::new()?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(AppError::runtime)?;

    let rendered = runtime.block_on(execute(&client, cli.command, config.output))?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;

    Ok(())
}

pub async fn execute(
    client: &WaitApiClient,
    command: Command,
    format: OutputFormat,
) -> Result<String, AppError> {
    tracing::info!(command = ?command, base_url = %client.base_url(), "executing command");

    match command {
        Command::Offices => {
            let offices = client.get_offices().await?;
            render(format, offices.as_slice(), render_offices)
        }
        Command::Statuses => {
            let statuses = client.get_statuses().await?;
            render(format, &statuses, render_statuses)
        }
        Command::WaitingTimes {
            office_id,
            date,
            with_labels,
        } => {
            let records = client
                .get_waiting_times(office_id, resolve_date(date))
                .await?;

            if with_labels {
                let statuses = client.get_statuses().await?;
                let labelled = label_records(&records, &statuses);
                render(format, labelled.as_slice(), render_labelled_records)
            } else {
                render(format, records.as_slice(), render_records)
            }
        }
        Command::AllWaitingTimes { date } => {
            let grouped = client.get_all_waiting_times(resolve_date(date)).await?;
            render(format, &grouped, render_grouped)
        }
    }
}

fn resolve_date(date: Option<String>) -> WaitingDate {
    date.map(WaitingDate::from)
        .unwrap_or_else(|| WaitingDate::from(Local::now()))
}

fn label_records<'a>(records: &'a [StatusRecord], statuses: &'a Statuses) -> Vec<LabelledRecord<'a>> {
    records
        .iter()
        .map(|record| LabelledRecord {
            captured_at: &record.captured_at,
            status_id: record.status_id,
            status: statuses.label_for(record.status_id),
        })
        .collect()
}

fn render<T, F>(format: OutputFormat, value: &T, as_text: F) -> Result<String, AppError>
where
    T: Serialize + ?Sized,
    F: Fn(&T) -> String,
{
    match format {
        OutputFormat::Text => Ok(as_text(value)),
        OutputFormat::Json => serde_json::to_string_pretty(value)
            .map(|mut json| {
                json.push('\n');
                json
            })
            .map_err(AppError::runtime),
    }
}

fn render_offices(offices: &[Office]) -> String {
    let mut out = String::new();
    for office in offices {
        let _ = writeln!(out, "{}\t{}\t{}", office.id, office.label, office.url);
    }
    out
}

fn render_statuses(statuses: &Statuses) -> String {
    let mut out = String::new();
    for (id, label) in statuses.sorted_by_id() {
        let _ = writeln!(out, "{id}\t{label}");
    }
    out
}

fn render_records(records: &[StatusRecord]) -> String {
    let mut out = String::new();
    for record in records {
        let _ = writeln!(out, "{}\t{}", record.captured_at, record.status_id);
    }
    out
}

fn render_labelled_records(records: &[LabelledRecord<'_>]) -> String {
    let mut out = String::new();
    for record in records {
        let _ = writeln!(
            out,
            "{}\t{}\t{}",
            record.captured_at,
            record.status_id,
            record.status.unwrap_or("unknown")
        );
    }
    out
}

fn render_grouped(grouped: &OfficeWaitingTimes) -> String {
    let mut out = String::new();
    for (office_id, records) in grouped {
        let _ = writeln!(out, "office {office_id}");
        for record in records {
            let _ = writeln!(out, "  {}\t{}", record.captured_at, record.status_id);
        }
    }
    out
}
