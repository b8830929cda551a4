// Rust Date Picker
// Prints one month of the picker grid to the terminal

use anyhow::{bail, Context, Result};
use rust_date_picker::models::day::{CalendarDay, Relative};
use rust_date_picker::services::calendar::CalendarController;
use rust_date_picker::services::grid::week_day_headers;
use rust_date_picker::services::settings::SettingsStore;
use rust_date_picker::utils::date::parse_date;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let mut month_arg = None;
    let mut json = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            other if month_arg.is_none() => month_arg = Some(other.to_string()),
            other => bail!("unexpected argument {:?}; usage: rust-date-picker [YYYY-MM] [--json]", other),
        }
    }

    let store = SettingsStore::open_default();
    let settings = store.load()?;
    log::info!("Starting Rust Date Picker in {} mode", settings.mode.as_str());

    let mut controller = CalendarController::builder().settings(settings).build()?;

    if let Some(month) = month_arg {
        let parsed = parse_date(&format!("{}-1", month), "-")
            .with_context(|| format!("invalid month {:?}, expected YYYY-MM", month))?;
        if !(0..12).contains(&parsed.month) {
            bail!("month out of range in {:?}", month);
        }
        controller.show_month(parsed.year, parsed.month as u32);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(controller.weeks())?);
        return Ok(());
    }

    println!("{:^28}", controller.title());
    let headers: Vec<String> = week_day_headers().iter().map(|c| format!("{:>3} ", c)).collect();
    println!("{}", headers.concat());
    for week in controller.weeks() {
        let cells: Vec<String> = week.iter().map(|cell| render_cell(cell.as_ref())).collect();
        println!("{}", cells.concat());
    }
    Ok(())
}

/// Three columns for the day plus a marker: `*` today, `x` disabled.
fn render_cell(cell: Option<&CalendarDay>) -> String {
    match cell {
        None => "    ".to_string(),
        Some(day) => {
            let marker = if day.disabled {
                'x'
            } else if day.relative == Relative::Now {
                '*'
            } else {
                ' '
            };
            format!("{:>3}{}", day.day, marker)
        }
    }
}
