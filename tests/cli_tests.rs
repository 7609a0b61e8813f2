use std::fs;
use tipagens::{run, CliOptions, Command};

#[test]
fn check_accepts_the_embedded_chart() {
    run(CliOptions {
        command: Command::Check { chart_path: None },
    })
    .unwrap();
}

#[test]
fn check_reports_a_malformed_chart_file() {
    let path = std::env::temp_dir().join(format!("tipagens-bad-chart-{}.json", std::process::id()));
    fs::write(&path, r#"[{"tipo": "agua", "defesa": []}]"#).unwrap();

    let err = run(CliOptions {
        command: Command::Check {
            chart_path: Some(path.clone()),
        },
    })
    .unwrap_err();
    let msg = format!("{err:#}");
    assert!(msg.contains("Invalid chart in"), "{msg}");
    assert!(msg.contains("row 'agua' has no entry for 'normal'"), "{msg}");
    fs::remove_file(&path).ok();
}

#[test]
fn check_reports_a_missing_chart_file() {
    let path = std::env::temp_dir().join("tipagens-no-such-chart.json");
    let err = run(CliOptions {
        command: Command::Check {
            chart_path: Some(path),
        },
    })
    .unwrap_err();
    assert!(format!("{err:#}").contains("Failed to read chart file"));
}
