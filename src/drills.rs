use serde::{Deserialize, Serialize};

use crate::errors::SwingLabError;
use crate::icons::IconKind;

/// How a drill feeds balls to the hitter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrillKind {
    Tee,
    SoftToss,
}

impl std::fmt::Display for DrillKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DrillKind::Tee => write!(f, "Tee"),
            DrillKind::SoftToss => write!(f, "Soft Toss"),
        }
    }
}

/// Which swing metrics a drill tracks while it runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrillMetricFlags {
    pub launch_angle: bool,
    pub exit_velocity: bool,
    pub sweet_spot: bool,
    pub spray_angle: bool,
}

/// One practice drill with its setup and target checklist.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Drill {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Short focus label shown on the drill card
    pub focus: String,
    /// Display-formatted duration, e.g. "15 min"
    pub duration: String,
    pub kind: DrillKind,
    pub setup: Vec<String>,
    pub targets: Vec<String>,
    pub metrics: DrillMetricFlags,
}

/// A group of related drills shown as one practice category.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DrillCategory {
    pub id: String,
    pub title: String,
    pub icon: IconKind,
    pub drills: Vec<Drill>,
}

/// Static practice catalog.
///
/// Drill content is fixed product data, not runtime state; the catalog is
/// built once and only read afterwards.
pub struct DrillCatalog {
    categories: Vec<DrillCategory>,
}

impl DrillCatalog {
    pub fn new() -> Self {
        Self {
            categories: Self::build_catalog(),
        }
    }

    pub fn categories(&self) -> &[DrillCategory] {
        &self.categories
    }

    /// Look up a category by id.
    pub fn category(&self, id: &str) -> Result<&DrillCategory, SwingLabError> {
        self.categories
            .iter()
            .find(|category| category.id == id)
            .ok_or_else(|| SwingLabError::UnknownDrillCategory {
                category: id.to_string(),
            })
    }

    /// Look up a drill by id across all categories.
    pub fn drill(&self, id: &str) -> Option<&Drill> {
        self.categories
            .iter()
            .flat_map(|category| category.drills.iter())
            .find(|drill| drill.id == id)
    }

    fn build_catalog() -> Vec<DrillCategory> {
        vec![
            DrillCategory {
                id: "launch-angle".to_string(),
                title: "Launch Angle / Swing Plane".to_string(),
                icon: IconKind::TrendingUp,
                drills: vec![
                    Drill {
                        id: "launch-angle-ladder".to_string(),
                        title: "Launch Angle Ladder".to_string(),
                        description: "Build consistent launch angles within ideal hitting range"
                            .to_string(),
                        focus: "Launch Control".to_string(),
                        duration: "15 min".to_string(),
                        kind: DrillKind::Tee,
                        setup: vec![
                            "Position tee at belt height".to_string(),
                            "Place alignment rod parallel to target line".to_string(),
                            "Set up launch angle feedback system".to_string(),
                            "Mark three distances: 10ft, 20ft, 30ft".to_string(),
                        ],
                        targets: vec![
                            "Achieve 3 consecutive hits at each angle".to_string(),
                            "Maintain exit velocity above 85 mph".to_string(),
                            "Keep spray angle within ±10 degrees".to_string(),
                            "Progress only after mastering current angle".to_string(),
                        ],
                        metrics: DrillMetricFlags {
                            launch_angle: true,
                            exit_velocity: true,
                            sweet_spot: false,
                            spray_angle: true,
                        },
                    },
                    Drill {
                        id: "line-drive-builder".to_string(),
                        title: "Line Drive Builder".to_string(),
                        description: "Groove swings for optimal line drive launch angles (10°–20°)"
                            .to_string(),
                        focus: "Line Drives".to_string(),
                        duration: "20 min".to_string(),
                        kind: DrillKind::Tee,
                        setup: vec![
                            "Set tee at belt height".to_string(),
                            "Place target net at optimal line drive height".to_string(),
                            "Set up launch angle feedback system".to_string(),
                        ],
                        targets: vec![
                            "Maintain launch angle between 10-20°".to_string(),
                            "Exit velocity > 85 mph".to_string(),
                            "80% sweet spot contact rate".to_string(),
                        ],
                        metrics: DrillMetricFlags {
                            launch_angle: true,
                            exit_velocity: true,
                            sweet_spot: true,
                            spray_angle: false,
                        },
                    },
                ],
            },
            DrillCategory {
                id: "exit-velocity".to_string(),
                title: "Exit Velocity / Power Training".to_string(),
                icon: IconKind::Zap,
                drills: vec![Drill {
                    id: "exit-velocity-builder".to_string(),
                    title: "Exit Velocity Builder".to_string(),
                    description: "Increase average and max exit velo through focused reps"
                        .to_string(),
                    focus: "Power".to_string(),
                    duration: "20 min".to_string(),
                    kind: DrillKind::SoftToss,
                    setup: vec![
                        "Partner positioned 45° angle, 3-4 feet away".to_string(),
                        "Use weighted balls for warm-up sets".to_string(),
                        "Set up velocity measurement device".to_string(),
                        "Mark target field direction".to_string(),
                    ],
                    targets: vec![
                        "Achieve 90+ mph exit velocity on 5 swings".to_string(),
                        "Maintain launch angle between 15-25°".to_string(),
                        "Keep at least 80% of hits on target line".to_string(),
                        "Progressive increase in average exit velocity".to_string(),
                    ],
                    metrics: DrillMetricFlags {
                        launch_angle: true,
                        exit_velocity: true,
                        sweet_spot: true,
                        spray_angle: true,
                    },
                }],
            },
            DrillCategory {
                id: "strike-zone".to_string(),
                title: "Strike Zone Mastery".to_string(),
                icon: IconKind::Target,
                drills: vec![Drill {
                    id: "zone-coverage".to_string(),
                    title: "Strike Zone Coverage".to_string(),
                    description: "Improve hitting in all 9 zones of the strike zone".to_string(),
                    focus: "Zone Control".to_string(),
                    duration: "25 min".to_string(),
                    kind: DrillKind::SoftToss,
                    setup: vec![
                        "Set up 3x3 zone grid".to_string(),
                        "Partner tosses to specific zones".to_string(),
                        "Track contact quality by zone".to_string(),
                    ],
                    targets: vec![
                        "Hit each zone with >80% success rate".to_string(),
                        "Maintain consistent exit velocity across zones".to_string(),
                        "Achieve proper launch angle for each zone".to_string(),
                    ],
                    metrics: DrillMetricFlags {
                        launch_angle: true,
                        exit_velocity: true,
                        sweet_spot: true,
                        spray_angle: false,
                    },
                }],
            },
        ]
    }
}

impl Default for DrillCatalog {
    fn default() -> Self {
        Self::new()
    }
}
