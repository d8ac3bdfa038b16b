use std::cell::RefCell;
use std::collections::HashSet;

use career_candles::domain::career::Direction;
use career_candles::domain::errors::{AppError, DomResult};
use career_candles::domain::story::{ScrollHost, StoryNavigator};

#[derive(Default)]
struct RecordingScroll {
    calls: RefCell<Vec<String>>,
    history_fails: bool,
}

impl ScrollHost for RecordingScroll {
    fn scroll_to_anchor(&self, id: &str) -> DomResult<()> {
        self.calls.borrow_mut().push(format!("scroll:{}", id));
        Ok(())
    }

    fn replace_fragment(&self, id: &str) -> DomResult<()> {
        if self.history_fails {
            return Err(AppError::HistoryError("SecurityError".to_string()));
        }
        self.calls.borrow_mut().push(format!("hash:#{}", id));
        Ok(())
    }
}

fn page() -> HashSet<&'static str> {
    ["story-2025", "story-2022-2023"].into_iter().collect()
}

#[test]
fn navigate_scrolls_then_updates_fragment() {
    let scroll = RecordingScroll::default();
    let navigator = StoryNavigator::new(page(), &scroll);

    let id = navigator.navigate("2022-23", Some(Direction::Up));

    assert_eq!(id.as_deref(), Some("story-2022-2023"));
    assert_eq!(*scroll.calls.borrow(), ["scroll:story-2022-2023", "hash:#story-2022-2023"]);
}

#[test]
fn missing_story_touches_nothing() {
    let scroll = RecordingScroll::default();
    let navigator = StoryNavigator::new(page(), &scroll);

    assert_eq!(navigator.navigate("2021", None), None);
    assert!(!navigator.has_story("2021", Some(Direction::Down)));
    assert!(scroll.calls.borrow().is_empty());
}

#[test]
fn fragment_failure_is_swallowed() {
    let scroll = RecordingScroll { history_fails: true, ..Default::default() };
    let navigator = StoryNavigator::new(page(), &scroll);

    assert_eq!(navigator.navigate("2025", Some(Direction::Down)).as_deref(), Some("story-2025"));
    assert_eq!(*scroll.calls.borrow(), ["scroll:story-2025"]);
}

#[test]
fn navigate_to_id_skips_resolution() {
    let scroll = RecordingScroll::default();
    let navigator = StoryNavigator::new(HashSet::<String>::new(), &scroll);

    navigator.navigate_to_id("story-2024");
    assert_eq!(scroll.calls.borrow().len(), 2);
}
