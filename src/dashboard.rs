use crate::session::Session;

/// Headline numbers for the dashboard's quick-stats strip.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct QuickStats {
    pub total_swings: u32,
    pub avg_exit_velocity: f32,
    pub avg_launch_angle: f32,
}

impl QuickStats {
    /// Aggregate session metrics, weighting each session's averages by its
    /// swing count so short sessions don't skew the totals.
    pub fn from_sessions(sessions: &[Session]) -> Self {
        let total_swings: u32 = sessions.iter().map(|s| s.metrics.swing_count).sum();
        if total_swings == 0 {
            return Self::default();
        }

        let weighted = |value: fn(&Session) -> f32| -> f32 {
            sessions
                .iter()
                .map(|s| value(s) * s.metrics.swing_count as f32)
                .sum::<f32>()
                / total_swings as f32
        };

        Self {
            total_swings,
            avg_exit_velocity: weighted(|s| s.metrics.avg_exit_velocity),
            avg_launch_angle: weighted(|s| s.metrics.avg_launch_angle),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{SessionKind, SessionMetrics};

    fn session(swings: u32, exit_velocity: f32, launch_angle: f32) -> Session {
        Session::new(
            format!("s{swings}"),
            "May 1",
            "9:00 AM",
            SessionKind::Practice,
            "Test",
            SessionMetrics {
                swing_count: swings,
                avg_exit_velocity: exit_velocity,
                avg_launch_angle: launch_angle,
                barrel_percentage: 0.,
            },
        )
    }

    #[test]
    fn test_quick_stats_weight_by_swing_count() {
        let sessions = vec![session(10, 80., 10.), session(30, 90., 20.)];
        let stats = QuickStats::from_sessions(&sessions);
        assert_eq!(stats.total_swings, 40);
        assert!((stats.avg_exit_velocity - 87.5).abs() < 0.01);
        assert!((stats.avg_launch_angle - 17.5).abs() < 0.01);
    }

    #[test]
    fn test_quick_stats_empty_sessions() {
        let stats = QuickStats::from_sessions(&[]);
        assert_eq!(stats, QuickStats::default());
    }

    #[test]
    fn test_quick_stats_zero_swings() {
        let sessions = vec![session(0, 80., 10.)];
        let stats = QuickStats::from_sessions(&sessions);
        assert_eq!(stats.total_swings, 0);
        assert_eq!(stats.avg_exit_velocity, 0.);
    }
}
