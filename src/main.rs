use std::path::Path;
use std::process;

use tracing::error;

use vendtrix::analytics::enrich::enrich;
use vendtrix::charts::LogAdapter;
use vendtrix::config::Config;
use vendtrix::dashboard::{Dashboard, SummaryFigures};
use vendtrix::logging::init_logging;
use vendtrix::services::dataset::load_records;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    init_logging();

    let config = Config::default();
    let raw_records = match load_records(Path::new(&config.dataset_path)) {
        Ok(records) => records,
        Err(err) => {
            error!(error = %err, path = %config.dataset_path, "dataset load failed");
            eprintln!("dataset load failed: {}", err);
            process::exit(1);
        }
    };

    let records = enrich(raw_records)?;
    let mut dashboard = Dashboard::new(records, LogAdapter::new())?;

    println!("Unfiltered dataset:");
    print_summary(dashboard.summary());

    let options = dashboard.options();
    if let Some(machine) = options.machines.first().cloned() {
        dashboard.select_machine(&machine)?;
        println!();
        println!("Machine {}:", machine);
        print_summary(dashboard.summary());
    }

    if let Some(month) = options.months.first() {
        dashboard.select_month(&month.value.to_string())?;
        println!();
        println!("Machine + {}:", month.name);
        print_summary(dashboard.summary());
    }

    Ok(())
}

fn print_summary(summary: &SummaryFigures) {
    println!("  Total Sales: {}", summary.total_sales);
    println!("  Quantity Sold: {}", summary.quantity_sold);
    println!("  Total Products: {}", summary.total_products);
}
