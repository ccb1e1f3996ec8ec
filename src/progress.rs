//! Monument badge stages derived from a completion percentage

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stage {
    pub threshold: f64,
    pub label: &'static str,
    /// How strongly the monument is drawn, in percent.
    pub intensity: u8,
}

pub const STAGES: [Stage; 5] = [
    Stage { threshold: 0.0, label: "Foundation", intensity: 20 },
    Stage { threshold: 25.0, label: "Base Structure", intensity: 40 },
    Stage { threshold: 50.0, label: "Walls Rising", intensity: 60 },
    Stage { threshold: 75.0, label: "Nearly Complete", intensity: 80 },
    Stage { threshold: 100.0, label: "Magnificent!", intensity: 100 },
];

/// Highest stage whose threshold the progress has reached.
pub fn stage_for(progress: f64) -> Stage {
    STAGES
        .iter()
        .rev()
        .find(|stage| progress >= stage.threshold)
        .copied()
        .unwrap_or(STAGES[0])
}

#[derive(Debug, Clone, Deserialize)]
pub struct MonumentProgress {
    pub name: String,
    pub progress: f64,
    pub total_gems: u32,
    pub current_gems: u32,
}

impl MonumentProgress {
    pub fn stage(&self) -> Stage {
        stage_for(self.progress)
    }

    pub fn is_earned(&self) -> bool {
        self.progress >= 100.0
    }

    pub fn status_text(&self) -> String {
        if self.is_earned() {
            "🏆 Earned!".to_string()
        } else {
            format!("{}% Complete", self.progress.round())
        }
    }
}
