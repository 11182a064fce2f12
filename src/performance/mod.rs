use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::SwingLabError;
use crate::metrics::{MetricKey, MetricSeries, TimeRange};
use crate::session::Session;

pub mod selection;
pub use selection::{COMPARISON_CAPACITY, SelectionSet};

/// Session-kind filter applied to the session history list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterType {
    All,
    Practice,
    Game,
}

impl FilterType {
    pub const ALL_FILTERS: [FilterType; 3] =
        [FilterType::All, FilterType::Practice, FilterType::Game];

    pub fn matches(&self, kind: crate::session::SessionKind) -> bool {
        match self {
            FilterType::All => true,
            FilterType::Practice => kind == crate::session::SessionKind::Practice,
            FilterType::Game => kind == crate::session::SessionKind::Game,
        }
    }
}

impl std::fmt::Display for FilterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterType::All => write!(f, "All"),
            FilterType::Practice => write!(f, "Practice"),
            FilterType::Game => write!(f, "Game"),
        }
    }
}

/// Visualization tabs of the performance screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TabKey {
    Contact,
    Consistency,
    Impact,
    Progress,
}

impl TabKey {
    pub const ALL: [TabKey; 4] = [
        TabKey::Contact,
        TabKey::Consistency,
        TabKey::Impact,
        TabKey::Progress,
    ];
}

impl std::fmt::Display for TabKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TabKey::Contact => write!(f, "Contact Quality"),
            TabKey::Consistency => write!(f, "Consistency"),
            TabKey::Impact => write!(f, "Impact"),
            TabKey::Progress => write!(f, "Progress"),
        }
    }
}

/// Interaction state of the performance screen.
///
/// Single source of truth for filter type, active tab, selected metric, time
/// range, and the session multi-select workflow. Transitions are pure and
/// synchronous: every operation takes `&self` and returns a fresh snapshot,
/// so an invalid operation can never leave a half-applied state behind and
/// observers never see `selection` and `comparison_visible` disagree.
///
/// Comparison mode is entered automatically the moment a second distinct
/// session is selected; there is no explicit "compare" action. Closing the
/// comparison always resets the selection.
#[derive(Clone, Debug, PartialEq)]
pub struct PerformanceViewState {
    tabs: Vec<TabKey>,
    metric_keys: Vec<MetricKey>,
    filter_type: FilterType,
    active_tab: TabKey,
    selected_metric: MetricKey,
    time_filter: TimeRange,
    selection: SelectionSet,
    comparison_visible: bool,
}

impl PerformanceViewState {
    /// Screen state with the full closed tab and metric sets and the default
    /// field values: all sessions shown, first tab active, first metric
    /// selected, weekly range, nothing selected.
    pub fn new() -> Self {
        Self {
            tabs: TabKey::ALL.to_vec(),
            metric_keys: MetricKey::ALL.to_vec(),
            filter_type: FilterType::All,
            active_tab: TabKey::ALL[0],
            selected_metric: MetricKey::ALL[0],
            time_filter: TimeRange::Week,
            selection: SelectionSet::new(),
            comparison_visible: false,
        }
    }

    /// Screen state restricted to the given tab set and the metric keys the
    /// data source supports. The first member of each set becomes the
    /// default. Empty sets are an integration bug and rejected fail-fast.
    pub fn with_configuration(
        tabs: Vec<TabKey>,
        metric_keys: Vec<MetricKey>,
    ) -> Result<Self, SwingLabError> {
        let Some(&first_tab) = tabs.first() else {
            return Err(SwingLabError::InvalidScreenConfiguration {
                reason: "tab set is empty".to_string(),
            });
        };
        let Some(&first_metric) = metric_keys.first() else {
            return Err(SwingLabError::InvalidScreenConfiguration {
                reason: "metric set is empty".to_string(),
            });
        };
        Ok(Self {
            tabs,
            metric_keys,
            filter_type: FilterType::All,
            active_tab: first_tab,
            selected_metric: first_metric,
            time_filter: TimeRange::Week,
            selection: SelectionSet::new(),
            comparison_visible: false,
        })
    }

    pub fn tabs(&self) -> &[TabKey] {
        &self.tabs
    }

    pub fn metric_keys(&self) -> &[MetricKey] {
        &self.metric_keys
    }

    pub fn filter_type(&self) -> FilterType {
        self.filter_type
    }

    pub fn active_tab(&self) -> TabKey {
        self.active_tab
    }

    pub fn selected_metric(&self) -> MetricKey {
        self.selected_metric
    }

    pub fn time_filter(&self) -> TimeRange {
        self.time_filter
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn comparison_visible(&self) -> bool {
        self.comparison_visible
    }

    /// Replace the session-kind filter. No other field changes.
    pub fn set_filter_type(&self, kind: FilterType) -> Self {
        let mut next = self.clone();
        next.filter_type = kind;
        next
    }

    /// Activate a tab from the configured tab set.
    pub fn set_active_tab(&self, tab: TabKey) -> Result<Self, SwingLabError> {
        if !self.tabs.contains(&tab) {
            return Err(SwingLabError::InvalidTabKind { tab });
        }
        let mut next = self.clone();
        next.active_tab = tab;
        Ok(next)
    }

    /// Select the metric to chart; must be supported by the data source.
    pub fn set_selected_metric(&self, metric: MetricKey) -> Result<Self, SwingLabError> {
        if !self.metric_keys.contains(&metric) {
            return Err(SwingLabError::UnknownMetric { metric });
        }
        let mut next = self.clone();
        next.selected_metric = metric;
        Ok(next)
    }

    /// Replace the time range the host renders data for.
    pub fn set_time_filter(&self, range: TimeRange) -> Self {
        let mut next = self.clone();
        next.time_filter = range;
        next
    }

    /// Toggle a session in or out of the comparison selection.
    ///
    /// An already-selected id is removed; otherwise the id is appended when
    /// there is room. With two distinct sessions already selected a third id
    /// is deliberately ignored until one is deselected. The comparison view
    /// becomes visible in the same transition that fills the selection, and
    /// hidden in the one that shrinks it.
    pub fn toggle_session_selection(&self, session_id: &str) -> Self {
        let mut next = self.clone();
        if !next.selection.remove(session_id) {
            next.selection.push(session_id);
        }
        next.comparison_visible = next.selection.is_full();
        next
    }

    /// Empty the selection and hide the comparison view.
    pub fn clear_selection(&self) -> Self {
        let mut next = self.clone();
        next.selection.clear();
        next.comparison_visible = false;
        next
    }

    /// Close the comparison view. Always resets the selection; there is no
    /// hide-but-keep-selection mode.
    pub fn close_comparison(&self) -> Self {
        self.clear_selection()
    }

    /// Sessions currently selected for comparison, in the order they were
    /// selected (not the order of `sessions`). At most two.
    pub fn selected_sessions<'s>(&self, sessions: &'s [Session]) -> Vec<&'s Session> {
        self.selection
            .ids()
            .iter()
            .filter_map(|id| sessions.iter().find(|session| &session.id == id))
            .collect()
    }

    /// Sessions passing the active kind filter, input order preserved.
    pub fn filtered_sessions<'s>(&self, sessions: &'s [Session]) -> Vec<&'s Session> {
        sessions
            .iter()
            .filter(|session| self.filter_type.matches(session.kind))
            .collect()
    }

    /// Trend series for the selected metric.
    ///
    /// The supplied map must cover every metric key the screen offers; a
    /// missing entry is a data bug surfaced immediately.
    pub fn trend_series_for<'m>(
        &self,
        all_series: &'m HashMap<MetricKey, MetricSeries>,
    ) -> Result<&'m MetricSeries, SwingLabError> {
        all_series
            .get(&self.selected_metric)
            .ok_or(SwingLabError::MissingSeries {
                metric: self.selected_metric,
            })
    }
}

impl Default for PerformanceViewState {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::session::{SessionKind, SessionMetrics};
    use proptest::prelude::*;
    use std::collections::HashSet;

    // Generators for property-based testing

    #[derive(Clone, Debug)]
    enum Op {
        Toggle(String),
        Clear,
        Close,
        Filter(FilterType),
        Tab(TabKey),
        Metric(MetricKey),
        Time(TimeRange),
    }

    fn arb_filter_type() -> impl Strategy<Value = FilterType> {
        prop_oneof![
            Just(FilterType::All),
            Just(FilterType::Practice),
            Just(FilterType::Game),
        ]
    }

    fn arb_tab() -> impl Strategy<Value = TabKey> {
        prop_oneof![
            Just(TabKey::Contact),
            Just(TabKey::Consistency),
            Just(TabKey::Impact),
            Just(TabKey::Progress),
        ]
    }

    fn arb_metric() -> impl Strategy<Value = MetricKey> {
        prop_oneof![
            Just(MetricKey::ExitVelocity),
            Just(MetricKey::LaunchAngle),
            Just(MetricKey::BarrelPercentage),
            Just(MetricKey::Distance),
        ]
    }

    fn arb_time_range() -> impl Strategy<Value = TimeRange> {
        prop_oneof![
            Just(TimeRange::Week),
            Just(TimeRange::Month),
            Just(TimeRange::Year),
            Just(TimeRange::All),
        ]
    }

    fn arb_op() -> impl Strategy<Value = Op> {
        prop_oneof![
            // small id pool so toggles collide often
            (0u8..6).prop_map(|n| Op::Toggle(format!("s{n}"))),
            Just(Op::Clear),
            Just(Op::Close),
            arb_filter_type().prop_map(Op::Filter),
            arb_tab().prop_map(Op::Tab),
            arb_metric().prop_map(Op::Metric),
            arb_time_range().prop_map(Op::Time),
        ]
    }

    fn arb_sessions() -> impl Strategy<Value = Vec<Session>> {
        proptest::collection::vec(any::<bool>(), 0..12).prop_map(|kinds| {
            kinds
                .into_iter()
                .enumerate()
                .map(|(i, practice)| {
                    Session::new(
                        format!("s{i}"),
                        "May 1",
                        "9:00 AM",
                        if practice {
                            SessionKind::Practice
                        } else {
                            SessionKind::Game
                        },
                        format!("Session {i}"),
                        SessionMetrics::default(),
                    )
                })
                .collect()
        })
    }

    fn apply(view: PerformanceViewState, op: Op) -> PerformanceViewState {
        match op {
            Op::Toggle(id) => view.toggle_session_selection(&id),
            Op::Clear => view.clear_selection(),
            Op::Close => view.close_comparison(),
            Op::Filter(kind) => view.set_filter_type(kind),
            // the default configuration carries the full sets, so these
            // setters cannot fail here
            Op::Tab(tab) => view.set_active_tab(tab).unwrap(),
            Op::Metric(metric) => view.set_selected_metric(metric).unwrap(),
            Op::Time(range) => view.set_time_filter(range),
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn prop_selection_invariants_hold_after_every_transition(
            ops in proptest::collection::vec(arb_op(), 0..40)
        ) {
            let mut view = PerformanceViewState::new();
            for op in ops {
                view = apply(view, op);

                let ids = view.selection().ids();
                prop_assert!(ids.len() <= COMPARISON_CAPACITY);

                let unique: HashSet<&String> = ids.iter().collect();
                prop_assert_eq!(unique.len(), ids.len(), "duplicate ids in selection");

                prop_assert_eq!(
                    view.comparison_visible(),
                    ids.len() == COMPARISON_CAPACITY,
                    "comparison visibility out of sync with selection size"
                );
            }
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_filtered_sessions_stable_and_total(
            sessions in arb_sessions(),
            filter in arb_filter_type()
        ) {
            let view = PerformanceViewState::new().set_filter_type(filter);
            let filtered = view.filtered_sessions(&sessions);

            // only matching sessions survive
            for session in &filtered {
                prop_assert!(filter.matches(session.kind));
            }

            // input order is preserved
            let positions: Vec<usize> = filtered
                .iter()
                .map(|f| sessions.iter().position(|s| s.id == f.id).unwrap())
                .collect();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));

            // total: every matching session is returned
            let expected = sessions.iter().filter(|s| filter.matches(s.kind)).count();
            prop_assert_eq!(filtered.len(), expected);
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_selected_sessions_match_selection_order(
            sessions in arb_sessions(),
            toggles in proptest::collection::vec(0usize..12, 0..10)
        ) {
            let mut view = PerformanceViewState::new();
            for index in toggles {
                if let Some(session) = sessions.get(index) {
                    view = view.toggle_session_selection(&session.id);
                }
            }

            let selected = view.selected_sessions(&sessions);
            prop_assert!(selected.len() <= COMPARISON_CAPACITY);

            // projection order is the selection's insertion order
            let ids: Vec<&str> = selected.iter().map(|s| s.id.as_str()).collect();
            let expected: Vec<&str> = view
                .selection()
                .ids()
                .iter()
                .map(|id| id.as_str())
                .collect();
            prop_assert_eq!(ids, expected);
        }
    }
}
