//! Panel selection parsing and per-panel report formatting

use aurum_charts::{PanelKind, PanelOutcome, PanelReport};

/// Resolve `--panel` arguments into panel kinds
///
/// No arguments selects every panel in dashboard order; duplicates are
/// collapsed while keeping first-mention order.
pub fn parse_panels(names: &[String]) -> Result<Vec<PanelKind>, String> {
    if names.is_empty() {
        return Ok(PanelKind::ALL.to_vec());
    }

    let mut kinds = Vec::new();
    for name in names {
        let kind: PanelKind = name.parse()?;
        if !kinds.contains(&kind) {
            kinds.push(kind);
        }
    }
    Ok(kinds)
}

/// One human-readable status line per panel
pub fn format_report_line(report: &PanelReport) -> String {
    match &report.outcome {
        PanelOutcome::Rendered(path) => {
            format!("[ ok ] {:<20} {}", report.panel.to_string(), path.display())
        }
        PanelOutcome::Skipped(message) => {
            format!("[skip] {:<20} {}", report.panel.to_string(), message)
        }
        PanelOutcome::Empty(notice) => {
            format!("[none] {:<20} {}", report.panel.to_string(), notice)
        }
        PanelOutcome::Failed(message) => {
            format!("[FAIL] {:<20} {}", report.panel.to_string(), message)
        }
    }
}

/// Exit-code policy: failures are per-panel, so the process only fails
/// when every requested panel failed
pub fn exit_code(reports: &[PanelReport]) -> i32 {
    if !reports.is_empty() && reports.iter().all(|r| r.outcome.is_failed()) {
        1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn report(panel: PanelKind, outcome: PanelOutcome) -> PanelReport {
        PanelReport { panel, outcome }
    }

    #[test]
    fn test_parse_panels_empty_selects_all() {
        let kinds = parse_panels(&[]).unwrap();
        assert_eq!(kinds, PanelKind::ALL.to_vec());
    }

    #[test]
    fn test_parse_panels_dedups_in_order() {
        let names = vec![
            "reserves".to_string(),
            "price-trend".to_string(),
            "reserves".to_string(),
        ];
        let kinds = parse_panels(&names).unwrap();
        assert_eq!(kinds, vec![PanelKind::Reserves, PanelKind::PriceTrend]);
    }

    #[test]
    fn test_parse_panels_unknown_name() {
        let names = vec!["scatter".to_string()];
        let err = parse_panels(&names).unwrap_err();
        assert!(err.contains("unknown panel 'scatter'"));
    }

    #[test]
    fn test_format_lines() {
        let line = format_report_line(&report(
            PanelKind::Reserves,
            PanelOutcome::Rendered(PathBuf::from("out/reserves.png")),
        ));
        assert!(line.starts_with("[ ok ] reserves"));
        assert!(line.ends_with("out/reserves.png"));

        let line = format_report_line(&report(
            PanelKind::HeadlineCloud,
            PanelOutcome::Empty("no displayable headline content for 'Norway'".to_string()),
        ));
        assert!(line.starts_with("[none] headline-cloud"));
        assert!(line.contains("Norway"));
    }

    #[test]
    fn test_exit_code_policy() {
        let failed = PanelOutcome::Failed("boom".to_string());
        let ok = PanelOutcome::Rendered(PathBuf::from("x.png"));
        let skip = PanelOutcome::Skipped("missing".to_string());

        assert_eq!(exit_code(&[]), 0);
        assert_eq!(
            exit_code(&[report(PanelKind::Reserves, failed.clone())]),
            1
        );
        assert_eq!(
            exit_code(&[
                report(PanelKind::Reserves, failed.clone()),
                report(PanelKind::PriceTrend, ok),
            ]),
            0
        );
        // Skipped panels are not failures
        assert_eq!(exit_code(&[report(PanelKind::Reserves, skip)]), 0);
    }
}
