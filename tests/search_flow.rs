use country_search::core::{InputState, MockLookup, SearchSession, SearchView};
use country_search::tui::{AppEvent, Focus, SearchScreen};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver};

const DEBOUNCE: Duration = Duration::from_millis(500);

fn screen(lookup: &MockLookup, leading_edge: bool) -> (SearchScreen, UnboundedReceiver<AppEvent>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let screen = SearchScreen::new(
        SearchSession::default(),
        Arc::new(lookup.clone()),
        DEBOUNCE,
        leading_edge,
        tx,
    );
    (screen, rx)
}

fn press(screen: &mut SearchScreen, code: KeyCode) {
    screen.handle_event(AppEvent::Input(KeyEvent::new(code, KeyModifiers::NONE)));
}

fn type_text(screen: &mut SearchScreen, text: &str) {
    for c in text.chars() {
        press(screen, KeyCode::Char(c));
    }
}

/// Feeds events back into the screen until the channel goes quiet.
async fn settle(screen: &mut SearchScreen, rx: &mut UnboundedReceiver<AppEvent>) {
    while let Ok(Some(event)) = tokio::time::timeout(DEBOUNCE * 4, rx.recv()).await {
        screen.handle_event(event);
    }
}

#[tokio::test(start_paused = true)]
async fn typing_burst_fetches_once_and_shows_names() {
    let lookup = MockLookup::new().with_names(["India", "Indonesia"]);
    let (mut screen, mut rx) = screen(&lookup, false);

    type_text(&mut screen, "ind");
    assert!(rx.try_recv().is_err());

    settle(&mut screen, &mut rx).await;

    assert_eq!(lookup.queries(), vec!["ind"]);
    assert_eq!(screen.view().suggestions(), ["India", "Indonesia"]);
    assert!(!screen.view().no_suggestions_visible());
    assert_eq!(screen.session().state(), InputState::Showing);
}

#[tokio::test(start_paused = true)]
async fn failed_fetch_shows_indicator() {
    let lookup = MockLookup::new().with_failure("HTTP 404");
    let (mut screen, mut rx) = screen(&lookup, false);

    type_text(&mut screen, "zzzzz");
    settle(&mut screen, &mut rx).await;

    assert!(screen.view().suggestions().is_empty());
    assert!(screen.view().no_suggestions_visible());
    assert_eq!(screen.session().state(), InputState::ShowingNoSuggestions);
}

#[tokio::test(start_paused = true)]
async fn leading_edge_fetches_first_and_last() {
    let lookup = MockLookup::new()
        .with_names(["Iceland", "India"])
        .with_names(["India", "Indonesia"]);
    let (mut screen, mut rx) = screen(&lookup, true);

    type_text(&mut screen, "ind");
    settle(&mut screen, &mut rx).await;

    assert_eq!(lookup.queries(), vec!["i", "ind"]);
    assert_eq!(screen.view().suggestions(), ["India", "Indonesia"]);
}

#[tokio::test(start_paused = true)]
async fn deleting_all_text_clears_without_fetching() {
    let lookup = MockLookup::new().with_names(["India"]);
    let (mut screen, mut rx) = screen(&lookup, false);

    type_text(&mut screen, "i");
    settle(&mut screen, &mut rx).await;
    assert_eq!(screen.view().suggestions(), ["India"]);

    press(&mut screen, KeyCode::Backspace);
    settle(&mut screen, &mut rx).await;

    assert_eq!(lookup.query_count(), 1);
    assert!(screen.view().suggestions().is_empty());
    assert_eq!(screen.session().state(), InputState::Idle);
}

#[tokio::test(start_paused = true)]
async fn escape_clears_immediately_and_cancels_pending_search() {
    let lookup = MockLookup::new().with_names(["India"]);
    let (mut screen, mut rx) = screen(&lookup, false);

    type_text(&mut screen, "ind");
    press(&mut screen, KeyCode::Esc);
    settle(&mut screen, &mut rx).await;

    assert_eq!(lookup.query_count(), 0);
    assert!(screen.view().input().is_empty());
    assert!(screen.view().suggestions().is_empty());
    assert_eq!(screen.session().state(), InputState::Idle);
}

#[tokio::test(start_paused = true)]
async fn selecting_a_suggestion_logs_history() {
    let lookup = MockLookup::new().with_names(["India", "Indonesia"]);
    let (mut screen, mut rx) = screen(&lookup, false);

    type_text(&mut screen, "ind");
    settle(&mut screen, &mut rx).await;
    press(&mut screen, KeyCode::Enter);

    let history = screen.session().history();
    assert_eq!(history.len(), 1);
    assert_eq!(history.list()[0].value, "India");
    assert_eq!(screen.view().input().text(), "India");
    assert!(screen.view().suggestions().is_empty());
    assert_eq!(screen.view().history_rows(), history.list());
}

#[tokio::test(start_paused = true)]
async fn arrow_keys_choose_which_suggestion_is_selected() {
    let lookup = MockLookup::new().with_names(["India", "Indonesia"]);
    let (mut screen, mut rx) = screen(&lookup, false);

    type_text(&mut screen, "ind");
    settle(&mut screen, &mut rx).await;
    press(&mut screen, KeyCode::Down);
    press(&mut screen, KeyCode::Enter);

    assert_eq!(screen.session().history().list()[0].value, "Indonesia");
}

#[tokio::test(start_paused = true)]
async fn history_delete_and_clear_all() {
    let lookup = MockLookup::new()
        .with_names(["India"])
        .with_names(["India"])
        .with_names(["Chile"]);
    let (mut screen, mut rx) = screen(&lookup, false);

    for query in ["ind", "ind", "chi"] {
        press(&mut screen, KeyCode::Esc);
        type_text(&mut screen, query);
        settle(&mut screen, &mut rx).await;
        press(&mut screen, KeyCode::Enter);
    }
    assert_eq!(screen.session().history().len(), 3);

    press(&mut screen, KeyCode::Tab);
    assert_eq!(screen.view().focus(), Focus::History);

    press(&mut screen, KeyCode::Char('d'));
    let values: Vec<&str> = screen
        .session()
        .history()
        .list()
        .iter()
        .map(|r| r.value.as_str())
        .collect();
    assert_eq!(values, ["India", "Chile"]);

    press(&mut screen, KeyCode::Char('C'));
    assert!(screen.session().history().is_empty());
    assert!(screen.view().history_rows().is_empty());
    assert_eq!(screen.view().focus(), Focus::Input);
}
