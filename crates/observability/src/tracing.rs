//! Tracing/logging initialization.
//!
//! JSON lines with system-time timestamps, filtered by an `EnvFilter`.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Initialize tracing from `RUST_LOG`, falling back to `info`.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    install(filter);
}

/// Initialize tracing from explicit directives.
///
/// Invalid directives fall back to `info`.
pub fn init_with_filter(directives: &str) {
    let filter = EnvFilter::try_new(directives)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    install(filter);
}

fn install(filter: EnvFilter) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use serde_json::Value;
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::util::SubscriberInitExt;

    use cclkit_record::{DataType, Structure, record_factory};
    use cclkit_transfer::file_request_factory;

    /// In-memory sink for formatted log lines.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn events(&self) -> Vec<Value> {
            let bytes = self.0.lock().unwrap().clone();
            String::from_utf8(bytes)
                .unwrap()
                .lines()
                .map(|line| serde_json::from_str(line).unwrap())
                .collect()
        }
    }

    fn find_event<'a>(events: &'a [Value], message: &str) -> &'a Value {
        events
            .iter()
            .find(|e| e["fields"]["message"] == message)
            .unwrap_or_else(|| panic!("no {message:?} event in {events:?}"))
    }

    #[test]
    fn init_is_idempotent() {
        super::init();
        super::init();
        super::init_with_filter("debug");
    }

    #[test]
    fn factories_emit_debug_events_with_fields() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new("cclkit_transfer=debug,cclkit_record=debug"))
            .json()
            .with_writer(move || writer.clone())
            .finish();

        {
            let _guard = subscriber.set_default();

            file_request_factory::create_from_str(
                "file:/c:/temp/test.txt",
                "/temp/target/target.txt",
            )
            .unwrap();

            let structure = Structure::builder().add("id", DataType::F8).build().unwrap();
            record_factory::create(Some("rec".to_string()), Some(Arc::new(structure))).unwrap();
        }

        let events = captured.events();

        let request = find_event(&events, "file request created");
        assert_eq!(request["level"], "DEBUG");
        assert_eq!(request["fields"]["source"], "file:/c:/temp/test.txt");
        assert_eq!(request["fields"]["target"], "/temp/target/target.txt");

        let record = find_event(&events, "record created");
        assert_eq!(record["level"], "DEBUG");
        assert_eq!(record["fields"]["record"], "rec");
        assert_eq!(record["fields"]["fields"], 1);
    }

    #[test]
    fn failed_creates_emit_nothing() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new("cclkit_transfer=debug,cclkit_record=debug"))
            .json()
            .with_writer(move || writer.clone())
            .finish();

        {
            let _guard = subscriber.set_default();
            assert!(file_request_factory::create(None, None).is_err());
            assert!(record_factory::create(Some("rec".to_string()), None).is_err());
        }

        assert!(captured.events().is_empty());
    }

    #[test]
    fn invalid_directives_fall_back() {
        super::init_with_filter("=[not a filter");
    }
}
