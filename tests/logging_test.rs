//! Log output of an interactive session.
//!
//! Runs in its own test binary as it installs a global logger.

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::io::Cursor;
use std::sync::Mutex;
use subnet_calculator::{config::Config, interactive};

struct RecordingLogger(Mutex<Vec<(Level, String)>>);

impl Log for RecordingLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut records) = self.0.lock() {
            records.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: RecordingLogger = RecordingLogger(Mutex::new(Vec::new()));

#[test]
fn test_session_log_levels() {
    log::set_logger(&LOGGER).expect("Logger already set");
    log::set_max_level(LevelFilter::Trace);

    // one rejected attempt, then a non-contiguous mask accepted
    let mut input =
        Cursor::new(b"300.1.1.1\n255.255.255.0\n192.168.1.1\n255.255.0.255\n".to_vec());
    let mut out = Vec::new();
    interactive::run(&Config::default(), &mut input, &mut out).expect("Interactive run failed");

    let records = LOGGER.0.lock().expect("Logger lock poisoned").clone();

    // nothing a normal session does reaches the warn console appender
    let loud: Vec<_> = records.iter().filter(|(level, _)| *level <= Level::Warn).collect();
    assert!(loud.is_empty(), "Unexpected warn/error records: {loud:?}");

    assert!(records
        .iter()
        .any(|(level, msg)| *level == Level::Info && msg.contains("rejected")));
    assert!(records
        .iter()
        .any(|(level, msg)| *level == Level::Info && msg.contains("not contiguous")));
    assert!(records.iter().any(|(level, _)| *level == Level::Trace));

    let json = records
        .iter()
        .filter(|(level, _)| *level == Level::Debug)
        .find_map(|(_, msg)| msg.strip_prefix("result="))
        .expect("Result JSON debug record");
    let value: serde_json::Value = serde_json::from_str(json).expect("Debug record is JSON");
    assert_eq!(value["prefix_len"], 24);
    assert_eq!(value["mask"], "255.255.0.255");
}
