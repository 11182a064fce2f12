use serde::{Deserialize, Serialize};

/// Whether a session was recorded during practice or live game play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionKind {
    Practice,
    Game,
}

impl std::fmt::Display for SessionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionKind::Practice => write!(f, "Practice"),
            SessionKind::Game => write!(f, "Game"),
        }
    }
}

/// Aggregate swing metrics for one completed session.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionMetrics {
    /// Number of swings recorded
    pub swing_count: u32,
    /// Average exit velocity in mph
    pub avg_exit_velocity: f32,
    /// Average launch angle in degrees
    pub avg_launch_angle: f32,
    /// Share of barreled balls, 0-100
    pub barrel_percentage: f32,
}

impl Default for SessionMetrics {
    fn default() -> Self {
        Self {
            swing_count: 0,
            avg_exit_velocity: 0.,
            avg_launch_angle: 0.,
            barrel_percentage: 0.,
        }
    }
}

/// One recorded practice or game session.
///
/// Sessions are produced upstream by the capture pipeline and are immutable
/// here; the performance screen only ever references them by `id`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Stable unique identifier
    pub id: String,
    /// Display-formatted date, treated as opaque
    pub date: String,
    /// Display-formatted time of day, treated as opaque
    pub time: String,
    pub kind: SessionKind,
    pub title: String,
    pub metrics: SessionMetrics,
}

impl Session {
    pub fn new(
        id: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
        kind: SessionKind,
        title: impl Into<String>,
        metrics: SessionMetrics,
    ) -> Self {
        Self {
            id: id.into(),
            date: date.into(),
            time: time.into(),
            kind,
            title: title.into(),
            metrics,
        }
    }
}

/// Built-in session history used by the demo binary and tests.
pub fn sample_sessions() -> Vec<Session> {
    vec![
        Session::new(
            "1",
            "Today",
            "2:30 PM",
            SessionKind::Practice,
            "Launch Angle Ladder",
            SessionMetrics {
                swing_count: 48,
                avg_exit_velocity: 87.,
                avg_launch_angle: 15.,
                barrel_percentage: 32.,
            },
        ),
        Session::new(
            "2",
            "Yesterday",
            "5:15 PM",
            SessionKind::Game,
            "Spray Chart Challenge",
            SessionMetrics {
                swing_count: 25,
                avg_exit_velocity: 89.,
                avg_launch_angle: 17.,
                barrel_percentage: 36.,
            },
        ),
        Session::new(
            "3",
            "May 15",
            "3:45 PM",
            SessionKind::Practice,
            "Exit Velocity Builder",
            SessionMetrics {
                swing_count: 55,
                avg_exit_velocity: 85.,
                avg_launch_angle: 14.,
                barrel_percentage: 29.,
            },
        ),
        Session::new(
            "4",
            "May 12",
            "4:30 PM",
            SessionKind::Game,
            "Consistency Gauntlet",
            SessionMetrics {
                swing_count: 30,
                avg_exit_velocity: 86.,
                avg_launch_angle: 16.,
                barrel_percentage: 30.,
            },
        ),
        Session::new(
            "5",
            "May 10",
            "1:15 PM",
            SessionKind::Practice,
            "Zone Mastery",
            SessionMetrics {
                swing_count: 50,
                avg_exit_velocity: 84.,
                avg_launch_angle: 13.,
                barrel_percentage: 28.,
            },
        ),
    ]
}
