//! End-to-end dashboard composition tests

use aurum_charts::{Composer, Controls, PanelKind, PanelOutcome};
use aurum_config::Settings;
use std::io::Write;
use std::path::Path;

fn write_file(path: &Path, content: &str) {
    let mut file = std::fs::File::create(path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
}

fn settings_with_sources(dir: &Path) -> Settings {
    let mut settings = Settings::default();
    settings.sources.prices = dir.join("prices.csv");
    settings.sources.usage = dir.join("usage.csv");
    settings.sources.investment = dir.join("investment.csv");
    settings.sources.headlines = dir.join("headlines.csv");
    settings.sources.reserves = dir.join("reserves.csv");
    settings
}

fn write_all_sources(dir: &Path) {
    write_file(
        &dir.join("prices.csv"),
        "date,price\n2022-01,1797.6\n2022-07,1732.9\n2023-01,1898.4\n2023-07,1951.7\n2024-01,2063.7\n",
    );
    write_file(
        &dir.join("usage.csv"),
        "sector,tonnes\nJewellery,2093.0\nTechnology,330.2\nInvestment,1107.5\nCentral banks,1037.4\n",
    );
    write_file(
        &dir.join("investment.csv"),
        "region,year,volume\nAsia,2022,310.0\nAsia,2023,280.0\nEurope,2022,150.0\nAmericas,2023,90.0\n",
    );
    write_file(
        &dir.join("headlines.csv"),
        "country,headline\nEgypt,Gold demand climbs as jewellery sales boom\nEgypt,Central bank adds to gold reserves\nTurkey,Inflation drives gold buying\n",
    );
    write_file(
        &dir.join("reserves.csv"),
        "country,tonnes\n United States ,8133.5\nGermany,3352.6\nItaly,2451.8\nFrance,2437.0\n",
    );
}

#[test]
fn full_dashboard_renders_every_panel() {
    let dir = tempfile::tempdir().unwrap();
    write_all_sources(dir.path());

    let composer = Composer::new(settings_with_sources(dir.path()))
        .with_controls(Controls {
            country: "Egypt".to_string(),
            window_years: 20,
        })
        .with_reference_year(2025);

    let out_dir = dir.path().join("out");
    let reports = composer.render_all(&out_dir).unwrap();

    assert_eq!(reports.len(), PanelKind::ALL.len());
    for report in &reports {
        match &report.outcome {
            PanelOutcome::Rendered(path) => {
                assert!(path.exists(), "{} missing output file", report.panel);
                assert!(std::fs::metadata(path).unwrap().len() > 0);
            }
            other => panic!("panel {} did not render: {:?}", report.panel, other),
        }
    }
}

#[test]
fn broken_source_fails_only_its_own_panel() {
    let dir = tempfile::tempdir().unwrap();
    write_all_sources(dir.path());
    // Poison the investment table with a duplicate pivot key
    write_file(
        &dir.path().join("investment.csv"),
        "region,year,volume\nAsia,2022,310.0\nAsia,2022,280.0\n",
    );

    let composer = Composer::new(settings_with_sources(dir.path()))
        .with_controls(Controls {
            country: "Egypt".to_string(),
            window_years: 20,
        })
        .with_reference_year(2025);

    let out_dir = dir.path().join("out");
    let reports = composer.render_all(&out_dir).unwrap();

    for report in &reports {
        if report.panel == PanelKind::InvestmentHeatmap {
            assert!(report.outcome.is_failed());
        } else {
            assert!(
                report.outcome.is_rendered(),
                "panel {} should be unaffected: {:?}",
                report.panel,
                report.outcome
            );
        }
    }
}

#[test]
fn missing_source_skips_only_its_own_panel() {
    let dir = tempfile::tempdir().unwrap();
    write_all_sources(dir.path());
    std::fs::remove_file(dir.path().join("reserves.csv")).unwrap();

    let composer = Composer::new(settings_with_sources(dir.path()))
        .with_controls(Controls {
            country: "Egypt".to_string(),
            window_years: 20,
        })
        .with_reference_year(2025);

    let out_dir = dir.path().join("out");
    let reports = composer.render_all(&out_dir).unwrap();

    for report in &reports {
        if report.panel == PanelKind::Reserves {
            match &report.outcome {
                PanelOutcome::Skipped(message) => {
                    assert!(message.contains("Missing source 'reserves'"))
                }
                other => panic!("expected Skipped, got {:?}", other),
            }
        } else {
            assert!(report.outcome.is_rendered());
        }
    }
}

#[test]
fn country_control_changes_only_the_cloud() {
    let dir = tempfile::tempdir().unwrap();
    write_all_sources(dir.path());

    let composer = Composer::new(settings_with_sources(dir.path()))
        .with_controls(Controls {
            country: "Turkey".to_string(),
            window_years: 20,
        })
        .with_reference_year(2025);

    // Re-rendering a single panel leaves the rest of the output untouched
    let out_dir = dir.path().join("out");
    let reports = composer
        .render_panels(&[PanelKind::HeadlineCloud], &out_dir)
        .unwrap();
    assert_eq!(reports.len(), 1);
    assert!(reports[0].outcome.is_rendered());
    assert!(!out_dir.join(PanelKind::PriceTrend.filename()).exists());
}
