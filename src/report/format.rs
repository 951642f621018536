//! Terminal formatting for fetch results and the command table.

use crate::domain::{Process, Record, RecordValue};
use crate::provider::{FetchOutput, Granularity, Provider};

/// Header line plus row counts for a fetch.
pub fn format_fetch_summary(output: &FetchOutput) -> String {
    let mut out = String::new();
    out.push_str(&format!("=== eia - {} ===\n", output.model));
    match output.total {
        Some(total) => out.push_str(&format!("Rows: {} of {total} available\n", output.records.len())),
        None => out.push_str(&format!("Rows: {}\n", output.records.len())),
    }
    out
}

/// Fixed-width table of records, one per line, in upstream order.
pub fn format_records(records: &[Record]) -> String {
    let mut out = String::new();
    out.push_str(
        format!(
            "{:<8} {:<6} {:<28} {:<6} {:<20} {:>14} {:<10}",
            "period", "area", "area_name", "proc", "series", "value", "units"
        )
        .trim_end(),
    );
    out.push('\n');
    out.push_str(
        format!(
            "{:-<8} {:-<6} {:-<28} {:-<6} {:-<20} {:-<14} {:-<10}",
            "", "", "", "", "", "", ""
        )
        .trim_end(),
    );
    out.push('\n');

    for r in records {
        out.push_str(
            format!(
                "{:<8} {:<6} {:<28} {:<6} {:<20} {:>14} {:<10}",
                truncate(&r.period, 8),
                truncate(&r.area, 6),
                truncate(&r.area_name, 28),
                truncate(&r.process, 6),
                truncate(&r.series, 20),
                fmt_value(r.value.as_ref()),
                truncate(&r.units, 10),
            )
            .trim_end(),
        );
        out.push('\n');
    }

    out
}

/// Every registered command (path, granularity, model, description), then the
/// process codes `--process` accepts.
pub fn format_routes(provider: &Provider) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Provider: {} - {} ({})\n",
        provider.name, provider.description, provider.website
    ));
    out.push_str(&format!("Credentials: {}\n\n", provider.credentials.join(", ")));

    for route in provider.routes() {
        let endpoint = provider.fetcher(route.model).map(|f| f.endpoint());
        let annual = endpoint.is_some_and(|e| e.granularity == Granularity::AnnualOnly);
        out.push_str(
            format!(
                "{:<62} {:<8} {}",
                route.path,
                if annual { "annual" } else { "any" },
                route.model
            )
            .trim_end(),
        );
        out.push('\n');
        if let Some(e) = endpoint {
            out.push_str(&format!("    {}\n", e.description));
        }
    }

    out.push_str("\nProcess codes (--process):\n");
    for p in Process::ALL {
        out.push_str(&format!("  {}  {}\n", p.code(), p.label()));
    }
    out
}

fn fmt_value(v: Option<&RecordValue>) -> String {
    match v {
        Some(RecordValue::Number(x)) => format!("{x:.3}"),
        Some(RecordValue::Text(s)) => truncate(s, 14),
        None => "-".to_string(),
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('.');
    out
}
