// Integration tests for the performance screen view state
//
// These walk the interaction flows the UI drives end to end:
// 1. Filter the session history by kind
// 2. Select sessions for comparison (cap at two, insertion order)
// 3. Enter and leave comparison mode
// 4. Read trend data for the selected metric

use swinglab::metrics::{MetricKey, sample_trends};
use swinglab::performance::{COMPARISON_CAPACITY, FilterType, PerformanceViewState, TabKey};
use swinglab::session::{SessionKind, sample_sessions};
use swinglab::{SwingLabError, TimeRange};

#[test]
fn test_full_comparison_flow() {
    let sessions = sample_sessions();
    let view = PerformanceViewState::new();

    // select the first session: no comparison yet
    let view = view.toggle_session_selection("1");
    assert_eq!(view.selection().len(), 1);
    assert!(!view.comparison_visible());

    // second distinct session enters comparison mode automatically
    let view = view.toggle_session_selection("3");
    assert!(view.comparison_visible());

    let selected = view.selected_sessions(&sessions);
    assert_eq!(selected.len(), COMPARISON_CAPACITY);
    assert_eq!(selected[0].title, "Launch Angle Ladder");
    assert_eq!(selected[1].title, "Exit Velocity Builder");

    // a third session is ignored while the comparison is full
    let view = view.toggle_session_selection("2");
    let ids: Vec<&str> = view.selection().ids().iter().map(String::as_str).collect();
    assert_eq!(ids, ["1", "3"]);
    assert!(view.comparison_visible());

    // closing the comparison resets everything
    let view = view.close_comparison();
    assert!(view.selection().is_empty());
    assert!(!view.comparison_visible());
    assert!(view.selected_sessions(&sessions).is_empty());
}

#[test]
fn test_selection_survives_kind_filter_changes() {
    let sessions = sample_sessions();

    // select a practice session, then filter the list to games only
    let view = PerformanceViewState::new()
        .toggle_session_selection("1")
        .set_filter_type(FilterType::Game);

    let filtered = view.filtered_sessions(&sessions);
    assert!(filtered.iter().all(|s| s.kind == SessionKind::Game));
    assert!(!filtered.iter().any(|s| s.id == "1"));

    // the selection projects over the full list, not the filtered one
    let selected = view.selected_sessions(&sessions);
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].id, "1");
}

#[test]
fn test_filter_returns_original_order() {
    let sessions = sample_sessions();
    let view = PerformanceViewState::new().set_filter_type(FilterType::All);

    let ids: Vec<&str> = view
        .filtered_sessions(&sessions)
        .iter()
        .map(|s| s.id.as_str())
        .collect();
    assert_eq!(ids, ["1", "2", "3", "4", "5"]);
}

#[test]
fn test_trend_lookup_for_every_offered_metric() {
    let trends = sample_trends();
    let mut view = PerformanceViewState::new();

    for metric in MetricKey::ALL {
        view = view.set_selected_metric(metric).unwrap();
        let series = view.trend_series_for(&trends).unwrap();
        assert_eq!(series.metric, metric);
    }
}

#[test]
fn test_missing_series_is_surfaced() {
    let mut trends = sample_trends();
    trends.remove(&MetricKey::Distance);

    let view = PerformanceViewState::new()
        .set_selected_metric(MetricKey::Distance)
        .unwrap();

    assert!(matches!(
        view.trend_series_for(&trends),
        Err(SwingLabError::MissingSeries {
            metric: MetricKey::Distance
        })
    ));
}

#[test]
fn test_rejected_operations_leave_the_flow_intact() {
    // a screen variant that only offers two tabs and one metric
    let view = PerformanceViewState::with_configuration(
        vec![TabKey::Contact, TabKey::Progress],
        vec![MetricKey::ExitVelocity],
    )
    .unwrap()
    .toggle_session_selection("1")
    .toggle_session_selection("2");
    assert!(view.comparison_visible());

    // both rejected operations fail fast without touching the receiver
    assert!(matches!(
        view.set_active_tab(TabKey::Consistency),
        Err(SwingLabError::InvalidTabKind { .. })
    ));
    assert!(matches!(
        view.set_selected_metric(MetricKey::Distance),
        Err(SwingLabError::UnknownMetric { .. })
    ));
    assert_eq!(view.active_tab(), TabKey::Contact);
    assert_eq!(view.selected_metric(), MetricKey::ExitVelocity);
    assert!(view.comparison_visible());

    // and the flow continues from the same state
    let view = view.set_active_tab(TabKey::Progress).unwrap();
    let view = view.set_time_filter(TimeRange::Month);
    assert_eq!(view.active_tab(), TabKey::Progress);
    assert_eq!(view.time_filter(), TimeRange::Month);
    assert!(view.comparison_visible());
}
