use log::kv::{self, Key, Source, Value, VisitSource};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::cell::RefCell;
use std::sync::Once;

#[derive(Debug, Clone, PartialEq)]
pub struct CapturedRecord {
    pub level: Level,
    pub target: String,
    pub message: String,
    pub fields: Vec<(String, String)>,
}

impl CapturedRecord {
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

// Records are kept per thread so tests running in parallel do not see each
// other's output. `#[tokio::test]` runs on the test's own thread.
thread_local! {
    static RECORDS: RefCell<Vec<CapturedRecord>> = const { RefCell::new(Vec::new()) };
}

struct CaptureLogger;

struct FieldCollector(Vec<(String, String)>);

impl<'kvs> VisitSource<'kvs> for FieldCollector {
    fn visit_pair(&mut self, key: Key<'kvs>, value: Value<'kvs>) -> Result<(), kv::Error> {
        self.0.push((key.to_string(), value.to_string()));
        Ok(())
    }
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let mut fields = FieldCollector(Vec::new());
        let _ = record.key_values().visit(&mut fields);

        RECORDS.with(|records| {
            records.borrow_mut().push(CapturedRecord {
                level: record.level(),
                target: record.target().to_string(),
                message: record.args().to_string(),
                fields: fields.0,
            })
        });
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static INIT: Once = Once::new();

/// Installs the capturing logger (once per process) and clears this thread's records.
pub fn capture() {
    INIT.call_once(|| {
        log::set_logger(&LOGGER).expect("another logger is already installed");
        log::set_max_level(LevelFilter::Trace);
    });
    RECORDS.with(|records| records.borrow_mut().clear());
}

/// Drains this thread's records for `target`.
pub fn take(target: &str) -> Vec<CapturedRecord> {
    RECORDS.with(|records| {
        records
            .borrow_mut()
            .drain(..)
            .filter(|record| record.target == target)
            .collect()
    })
}
