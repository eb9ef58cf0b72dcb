use trivia_insights::DashboardApp;
use trivia_insights::app::{ChartState, DashboardEvent, PickerEvent, Selection};
use trivia_insights::config::SourceConfig;
use trivia_insights::data::parse_questions;
use trivia_insights::model::Difficulty;

const PAYLOAD: &str = r#"{
    "response_code": 0,
    "results": [
        {"category":"History","difficulty":"easy","type":"multiple","question":"Q1"},
        {"category":"History","difficulty":"easy","type":"multiple","question":"Q2"},
        {"category":"Science","difficulty":"medium","type":"boolean","question":"Q3"},
        {"category":"History","difficulty":"Easy","type":"multiple","question":"Q4"},
        {"category":"Science","difficulty":"medium","type":"boolean","question":"Q5"},
        {"category":"History","difficulty":"hard","type":"multiple","question":"Q6"},
        {"category":"Science","difficulty":"MEDIUM","type":"boolean","question":"Q7"},
        {"category":"History","difficulty":"easy","type":"multiple","question":"Q8"},
        {"category":"Science","difficulty":"medium","type":"boolean","question":"Q9"},
        {"category":"History","difficulty":"hard","type":"multiple","question":"Q10"}
    ]
}"#;

fn loaded_app() -> DashboardApp {
    let mut app = DashboardApp::with_config(SourceConfig::default());
    let questions = parse_questions(PAYLOAD).expect("payload");
    app.dispatch(DashboardEvent::FetchCompleted(Ok(questions)));
    app
}

fn picker(app: &mut DashboardApp, event: PickerEvent) {
    app.dispatch(DashboardEvent::Picker(event));
}

#[test]
fn starts_loading_with_fetch_pending() {
    let app = DashboardApp::with_config(SourceConfig::default());
    assert!(app.loading);
    assert!(app.is_fetch_requested());
    assert_eq!(app.chart_state(), ChartState::Loading);
    assert_eq!(app.picker_summary(), "Loading...");
}

#[test]
fn nothing_selected_shows_placeholder_but_keeps_all_questions() {
    let app = loaded_app();
    assert_eq!(app.filtered_questions().len(), 10);
    assert_eq!(app.chart_state(), ChartState::NothingSelected);
    assert_eq!(app.picker_summary(), "Select Categories");
}

#[test]
fn selecting_history_only() {
    let mut app = loaded_app();
    let history = app
        .dataset
        .categories
        .iter()
        .find(|c| c.name == "History")
        .map(|c| c.id)
        .expect("History category");

    picker(&mut app, PickerEvent::ToggleOpen);
    picker(&mut app, PickerEvent::ToggleCategory(history));

    assert_eq!(app.chart_state(), ChartState::Ready);
    assert_eq!(app.picker_summary(), "History");
    assert_eq!(app.filtered_questions().len(), 6);

    let by_category = app.category_data();
    assert_eq!(by_category.len(), 1);
    assert_eq!(
        (by_category[0].name.as_str(), by_category[0].count, by_category[0].percentage),
        ("History", 6, 100)
    );

    let by_difficulty: Vec<(Difficulty, usize)> = app
        .difficulty_data()
        .iter()
        .map(|d| (d.difficulty, d.count))
        .collect();
    assert_eq!(
        by_difficulty,
        vec![
            (Difficulty::Easy, 4),
            (Difficulty::Medium, 0),
            (Difficulty::Hard, 2)
        ]
    );
}

#[test]
fn select_all_then_clear() {
    let mut app = loaded_app();
    picker(&mut app, PickerEvent::ToggleSelectAll);
    assert_eq!(app.selected, Selection::from([1, 2]));
    assert_eq!(app.picker_summary(), "All Categories");

    let by_category = app.category_data();
    let total: usize = by_category.iter().map(|c| c.count).sum();
    assert_eq!(total, 10);
    assert_eq!(by_category[0].percentage, 60);
    assert_eq!(by_category[1].percentage, 40);

    picker(&mut app, PickerEvent::ToggleSelectAll);
    assert!(app.selected.is_empty());
    assert_eq!(app.chart_state(), ChartState::NothingSelected);
}

#[test]
fn search_narrows_options_not_select_all() {
    let mut app = DashboardApp::with_config(SourceConfig::default());
    let questions = parse_questions(
        r#"{"results":[
            {"category":"History","difficulty":"easy"},
            {"category":"Science","difficulty":"hard"},
            {"category":"Sports","difficulty":"medium"}
        ]}"#,
    )
    .expect("payload");
    app.dispatch(DashboardEvent::FetchCompleted(Ok(questions)));

    picker(&mut app, PickerEvent::ToggleOpen);
    picker(&mut app, PickerEvent::SearchChanged("sci".into()));
    let visible: Vec<&str> = app
        .picker
        .visible_options(&app.dataset.categories)
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(visible, vec!["Science"]);

    picker(&mut app, PickerEvent::ToggleSelectAll);
    assert_eq!(app.selected, Selection::from([1, 2, 3]));
}

#[test]
fn hover_is_shared_and_does_not_change_data() {
    let mut app = loaded_app();
    picker(&mut app, PickerEvent::ToggleSelectAll);
    let before = app.category_data();
    app.dispatch(DashboardEvent::HoverCategory(Some("Science".into())));
    app.dispatch(DashboardEvent::HoverDifficulty(Some(Difficulty::Medium)));
    assert_eq!(app.category_data(), before);
    assert_eq!(app.hover.category.as_deref(), Some("Science"));
    app.dispatch(DashboardEvent::HoverCategory(None));
    assert_eq!(app.hover.category, None);
}
