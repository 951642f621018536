//! Frequency guard for endpoints that only publish annual data.
//!
//! Runs on raw arguments, before `Query::from_args`, so the query's own
//! validation still applies to whatever the guard leaves behind.

use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::query::RawArgs;

const UNSUPPORTED: &str = "This data point does not support monthly frequency.";

/// Downgrade monthly requests to annual.
///
/// - `frequency=monthly` becomes `annual`
/// - a `start_date`/`end_date` containing `-` is cut to its year
///
/// Each adjustment yields one diagnostic.
pub fn annual_only(mut args: RawArgs) -> (RawArgs, Vec<Diagnostic>) {
    let mut diagnostics = Vec::new();

    if args
        .get("frequency")
        .is_some_and(|f| f.trim().eq_ignore_ascii_case("monthly"))
    {
        diagnostics.push(Diagnostic::new(
            DiagnosticKind::FrequencyDowngraded,
            format!("{UNSUPPORTED} Changing frequency to annual."),
        ));
        args.insert("frequency", "annual");
    }

    for key in ["start_date", "end_date"] {
        let Some(value) = args.get(key).map(str::to_string) else {
            continue;
        };
        if !value.contains('-') {
            continue;
        }
        let year = value.split('-').next().unwrap_or_default().to_string();
        diagnostics.push(Diagnostic::new(
            DiagnosticKind::DateTruncated,
            format!("{UNSUPPORTED} Changing {key} from {value} to {year}."),
        ));
        args.insert(key, year);
    }

    (args, diagnostics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Frequency, Query};

    #[test]
    fn monthly_frequency_is_downgraded_once() {
        let (args, diags) = annual_only(RawArgs::new().with("frequency", "monthly"));
        let q = Query::from_args(&args).unwrap();
        assert_eq!(q.frequency, Frequency::Annual);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].kind, DiagnosticKind::FrequencyDowngraded);
    }

    #[test]
    fn month_dates_are_cut_to_year() {
        let args = RawArgs::new().with("start_date", "2019-06").with("end_date", "2021");
        let (args, diags) = annual_only(args);
        let q = Query::from_args(&args).unwrap();
        assert_eq!(q.start_date.as_deref(), Some("2019"));
        assert_eq!(q.end_date.as_deref(), Some("2021"));
        assert_eq!(diags.len(), 1);
        assert!(diags[0].message.contains("start_date from 2019-06 to 2019"));
    }

    #[test]
    fn annual_args_pass_through_untouched() {
        let input = RawArgs::new()
            .with("frequency", "annual")
            .with("start_date", "2010")
            .with("filter_by_area", "NUS");
        let (args, diags) = annual_only(input.clone());
        assert_eq!(args, input);
        assert!(diags.is_empty());
    }

    #[test]
    fn guard_does_not_validate() {
        // Left for Query::from_args to reject.
        let (args, diags) = annual_only(RawArgs::new().with("frequency", "weekly"));
        assert!(diags.is_empty());
        assert!(Query::from_args(&args).is_err());
    }
}
