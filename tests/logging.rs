use std::collections::HashSet;
use std::sync::{Mutex, Once};

use career_candles::domain::errors::{AppError, DomResult};
use career_candles::domain::logging::{LogComponent, LogEntry, LogLevel, Logger, init_logger};
use career_candles::domain::story::{ScrollHost, StoryNavigator};
use career_candles::{log_error, log_info, log_warn};

static ENTRIES: Mutex<Vec<(LogLevel, String, String)>> = Mutex::new(Vec::new());

struct Recorder;

impl Logger for Recorder {
    fn log(&self, entry: LogEntry) {
        ENTRIES.lock().unwrap().push((entry.level, entry.component.to_string(), entry.message));
    }
}

fn install() {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| init_logger(Box::new(Recorder)));
}

fn recorded(needle: &str) -> Vec<(LogLevel, String, String)> {
    ENTRIES.lock().unwrap().iter().filter(|(_, _, m)| m.contains(needle)).cloned().collect()
}

struct BlockedHistory;

impl ScrollHost for BlockedHistory {
    fn scroll_to_anchor(&self, _id: &str) -> DomResult<()> {
        Ok(())
    }

    fn replace_fragment(&self, _id: &str) -> DomResult<()> {
        Err(AppError::HistoryError("SecurityError".to_string()))
    }
}

#[test]
fn macros_reach_the_installed_logger() {
    install();
    log_info!(LogComponent::Presentation("Chart"), "mounted {} glyphs", 10);
    log_warn!(LogComponent::Infrastructure("BodyOverflow"), "overflow not set: {}", "readonly");
    log_error!(LogComponent::Infrastructure("Events"), "resize listener not attached: {}", "TypeError");

    assert_eq!(
        recorded("mounted 10 glyphs"),
        [(LogLevel::Info, "PRE:Chart".to_string(), "mounted 10 glyphs".to_string())]
    );
    assert_eq!(recorded("overflow not set")[0].0, LogLevel::Warn);
    assert_eq!(recorded("overflow not set")[0].1, "INF:BodyOverflow");
    assert_eq!(recorded("listener not attached")[0].0, LogLevel::Error);
}

#[cfg(debug_assertions)]
#[test]
fn swallowed_fragment_failure_is_logged_at_debug() {
    install();
    let anchors: HashSet<&str> = ["story-2021"].into_iter().collect();
    let navigator = StoryNavigator::new(anchors, BlockedHistory);

    assert_eq!(navigator.navigate("2021", None).as_deref(), Some("story-2021"));

    let lines = recorded("fragment #story-2021");
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].0, LogLevel::Debug);
    assert!(lines[0].2.contains("SecurityError"));
}
