use std::{fs, io, sync::OnceLock};

use application::{args::Command, Args, Config, Service};
use service::{
    domain::employee,
    infra::Snapshot,
    query,
    read::Pending,
    Query as _,
};
use tracing as log;
use tracing_subscriber::{
    filter::filter_fn,
    layer::{Layer as _, SubscriberExt as _},
    util::SubscriberInitExt as _,
};

const STDERR_LEVELS: &[log::Level] = &[log::Level::WARN, log::Level::ERROR];

static LOG_LEVEL: OnceLock<log::Level> = OnceLock::new();

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_writer(io::stdout)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (!STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::INFO)
                                >= *meta.level()
                })),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_writer(io::stderr)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::INFO)
                                >= *meta.level()
                })),
        )
        .init();

    _ = start().await;
}

async fn start() -> Result<(), ()> {
    let Args { config, command } = Args::parse().map_err(|e| {
        log::error!("failed to parse command line arguments: {e}");
    })?;

    let Config { snapshot, log } = Config::new(config).map_err(|e| {
        log::error!("failed to load `Config`: {e}");
    })?;

    LOG_LEVEL
        .set(log.level.into())
        .unwrap_or_else(|_| unreachable!("first initialization"));

    let mut source = Snapshot::new();

    let employees = fs::read_to_string(&snapshot.employees).map_err(|e| {
        log::error!("failed to read `{}`: {e}", snapshot.employees);
    })?;
    source.load_employees(&employees).map_err(|e| {
        log::error!("failed to load employees snapshot: {e}");
    })?;

    let invoices = fs::read_to_string(&snapshot.invoices).map_err(|e| {
        log::error!("failed to read `{}`: {e}", snapshot.invoices);
    })?;
    source.load_invoices(&invoices).map_err(|e| {
        log::error!("failed to load invoices snapshot: {e}");
    })?;

    let service = Service::new(source);

    match command {
        Command::EmployeeStatus { dni } => {
            let dni = dni.parse::<employee::Dni>().map_err(|e| {
                log::error!("`{dni}` is not a valid DNI: {e}");
            })?;

            let employee = service
                .execute(query::employee::ByDni(dni))
                .await
                .map_err(|e| log::error!("query failed: {e}"))?;

            println!(
                "{} {} ({})",
                employee.first_name, employee.last_name, employee.dni,
            );
            println!("employed since: {}", employee.employed_since);
            println!("current role:   {}", employee.current_role());
            println!(
                "active:         {}",
                if employee.is_active() { "yes" } else { "no" },
            );
            if let Some(end) = employee.availabilities.latest().expected_end {
                println!("current availability expected to end on {end}");
            }
        }

        Command::PendingInvoices { from, to, supplier } => {
            let supplier = supplier
                .map(|name| {
                    name.parse::<service::domain::supplier::Name>().map_err(
                        |e| {
                            log::error!(
                                "`{name}` is not a valid supplier name: {e}",
                            );
                        },
                    )
                })
                .transpose()?;

            let output = service
                .execute(query::report::PendingInvoices { from, to, supplier })
                .await
                .map_err(|e| log::error!("query failed: {e}"))?;

            for Pending(invoice) in &output.rows {
                println!(
                    "{}  {:>12}  order #{} from {}",
                    invoice.issued_on,
                    invoice.amount.to_string(),
                    invoice.order.number,
                    invoice.order.supplier.name,
                );
            }
            println!("{} invoice(s) awaiting payment", output.rows.len());
        }

        Command::InvoiceYears => {
            let years = service
                .execute(query::report::InvoiceYears)
                .await
                .map_err(|e| log::error!("query failed: {e}"))?;

            println!("invoices issued between {} and {}", years.min, years.max);
        }
    }

    Ok(())
}
