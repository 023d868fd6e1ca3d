use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use gexboard::model::Category;
use gexboard::pipeline::{self, schema::SheetSchema};
use gexboard::source::CsvWorkbook;

// ── Helpers ─────────────────────────────────────────────────────────

fn scratch_dir(tag: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .subsec_nanos();
    let dir = std::env::temp_dir().join(format!(
        "gexboard-{tag}-{}-{nanos}",
        std::process::id()
    ));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

const CHART_DATA: &str = "\
Strike,GEX-OI,ABS-OI,GEX-VOL,ABS-VOL,,Label,QQQ,NQ,,,,,,OI Gauge,,VOL Gauge
100,5,10,2,1,,PG-OI,432.5,101.37,,,,,,0.234,,-0.125
101,-3,20,-4,2,,ABS-OI,1,2,,,,,,,,
102,0,30,0,3,,FR-TT,3,101.4,,,,,,,,
";

const VOLUME: &str = "\
Call Volume,Put Volume
10,20
11,21
12,22
";

// ── Tests ───────────────────────────────────────────────────────────

#[test]
fn loads_a_csv_workbook_end_to_end() {
    let dir = scratch_dir("e2e");
    std::fs::write(dir.join("ChartData.csv"), CHART_DATA).unwrap();
    std::fs::write(dir.join("Volume.csv"), VOLUME).unwrap();

    let workbook = CsvWorkbook::open(&dir).unwrap();
    let shaped = pipeline::shape(&workbook, &SheetSchema::default()).unwrap();

    assert_eq!(shaped.strikes, vec![100.0, 101.0, 102.0]);
    assert_eq!(shaped.pos_gex_oi, vec![5.0, 0.0, 0.0]);
    assert_eq!(shaped.neg_gex_oi, vec![0.0, -3.0, 0.0]);
    assert_eq!(shaped.abs_oi, vec![10.0, 20.0, 30.0]);
    assert_eq!(shaped.call_vol, Some(vec![10.0, 11.0, 12.0]));
    assert_eq!(shaped.put_vol, Some(vec![20.0, 21.0, 22.0]));

    // Spot shares the first summary row's QQQ cell in this layout.
    assert!((shaped.spot - 432.5).abs() < 1e-9);
    assert!((shaped.gex_oi_gauge - 23.4).abs() < 1e-9);
    assert!((shaped.gex_vol_gauge - -12.5).abs() < 1e-9);

    let labels: Vec<&str> = shaped.summary.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels, vec!["PG-OI", "ABS-OI", "FR-TT"]);
    assert_eq!(shaped.summary[0].category, Category::Bullish);
    assert_eq!(shaped.summary[1].category, Category::Highlight);
    assert!((shaped.summary[0].nq - 101.25).abs() < 1e-9);
    assert!((shaped.summary[2].nq - 101.5).abs() < 1e-9);

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn sheet_names_come_from_file_stems() {
    let dir = scratch_dir("names");
    std::fs::write(dir.join("ChartData.csv"), CHART_DATA).unwrap();
    std::fs::write(dir.join("notes.txt"), "not a sheet").unwrap();

    let workbook = CsvWorkbook::open(&dir).unwrap();
    let mut names: Vec<&str> = workbook.sheet_names().collect();
    names.sort();
    assert_eq!(names, vec!["ChartData"]);

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn missing_directory_is_a_fatal_error() {
    let dir = std::env::temp_dir().join("gexboard-does-not-exist-12345");
    assert!(CsvWorkbook::open(&dir).is_err());
}

#[test]
fn directory_without_csv_sheets_is_a_fatal_error() {
    let dir = scratch_dir("empty");
    std::fs::write(dir.join("notes.txt"), "nothing tabular here").unwrap();

    assert!(CsvWorkbook::open(&dir).is_err());

    std::fs::remove_dir_all(&dir).ok();
}
