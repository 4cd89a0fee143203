use std::sync::Mutex;

use caption_stack::{merge_screenshots, MergeCfg};
use image::{ImageBuffer, Rgb, RgbImage};
use log::{Level, LevelFilter, Log, Metadata, Record};

//Collects every "merge" record so the summary can be inspected.
struct MergeRecords(Mutex<Vec<(Level, String)>>);

impl Log for MergeRecords {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.target() == "merge"
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.0
                .lock()
                .unwrap()
                .push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static RECORDS: MergeRecords = MergeRecords(Mutex::new(Vec::new()));

#[test]
fn test_summary_is_logged_by_the_merge() {
    log::set_logger(&RECORDS).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let input = tempfile::tempdir().unwrap();
    let out_dir = tempfile::tempdir().unwrap();
    let output = out_dir.path().join("merged.png");

    let shot: RgbImage = ImageBuffer::from_pixel(70, 140, Rgb([1, 2, 3]));
    shot.save(input.path().join("x.png")).unwrap();
    shot.save(input.path().join("y.png")).unwrap();

    let (_canvas, report) =
        merge_screenshots(&MergeCfg::new(input.path(), &output).subtitle_ratio(3.5)).unwrap();

    let records = RECORDS.0.lock().unwrap();
    let info_lines = records
        .iter()
        .filter(|(level, _)| *level == Level::Info)
        .map(|(_, line)| line.as_str())
        .collect::<Vec<_>>();

    //every line of the report shows up, in order, at info level.
    let summary = report.to_string();
    let summary_lines = summary.lines().collect::<Vec<_>>();
    assert_eq!(summary_lines.len(), 4);
    assert!(info_lines.ends_with(&summary_lines));

    assert!(info_lines.iter().any(|l| l.contains("x.png, y.png")));
    assert!(info_lines.iter().any(|l| l.contains("70x180")));
    assert!(info_lines.iter().any(|l| l.contains("40 px (1/3.5")));
}
