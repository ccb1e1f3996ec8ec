//! Subjects and quest descriptors shown on the home map

use serde::Deserialize;

use crate::rewards::GemKind;

/// Title of the quest backed by the interactive circuit puzzle.
pub const CIRCUIT_QUEST_TITLE: &str = "Electric Circuits";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Subject {
    Physics,
    Chemistry,
    Biology,
    Mathematics,
}

impl Subject {
    pub const ALL: [Subject; 4] = [
        Subject::Physics,
        Subject::Chemistry,
        Subject::Biology,
        Subject::Mathematics,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Subject::Physics => "Physics",
            Subject::Chemistry => "Chemistry",
            Subject::Biology => "Biology",
            Subject::Mathematics => "Mathematics",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Subject::Physics => "⚡",
            Subject::Chemistry => "🧪",
            Subject::Biology => "🌱",
            Subject::Mathematics => "🔢",
        }
    }

    /// Region of the adventure map the subject lives in.
    pub fn region(self) -> &'static str {
        match self {
            Subject::Physics => "Bhubaneswar",
            Subject::Chemistry => "Cuttack",
            Subject::Biology => "Puri",
            Subject::Mathematics => "Rourkela",
        }
    }

    pub fn gem(self) -> GemKind {
        match self {
            Subject::Physics => GemKind::Ruby,
            Subject::Chemistry => GemKind::Sapphire,
            Subject::Biology => GemKind::Emerald,
            Subject::Mathematics => GemKind::Topaz,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Quest {
    pub title: String,
    pub chapter: String,
    pub difficulty: u8,
    pub unlocked: bool,
    pub completed: bool,
    #[serde(default)]
    pub progress: u8,
    pub gem_reward: u32,
    pub estimated_time: String,
}

/// What activating a quest card leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestAction {
    OpenCircuitPuzzle,
    /// No interactive content exists for this quest yet.
    Started,
    Locked,
}

impl Quest {
    /// Three star slots, the first `difficulty` of them filled.
    pub fn difficulty_stars(&self) -> [bool; 3] {
        let filled = self.difficulty.min(3) as usize;
        let mut stars = [false; 3];
        stars[..filled].iter_mut().for_each(|s| *s = true);
        stars
    }

    pub fn action_label(&self) -> &'static str {
        if self.completed {
            "Review Quest"
        } else if !self.unlocked {
            "Complete Previous Quest"
        } else if self.progress > 0 {
            "Continue Quest"
        } else {
            "Start Quest"
        }
    }

    pub fn shows_progress_bar(&self) -> bool {
        self.unlocked && !self.completed && self.progress > 0
    }

    pub fn activate(&self) -> QuestAction {
        if !self.unlocked {
            return QuestAction::Locked;
        }
        if self.title == CIRCUIT_QUEST_TITLE {
            QuestAction::OpenCircuitPuzzle
        } else {
            tracing::info!("Starting quest: {}", self.title);
            QuestAction::Started
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quest(title: &str, unlocked: bool, completed: bool, progress: u8) -> Quest {
        Quest {
            title: title.to_string(),
            chapter: "Chapter".to_string(),
            difficulty: 2,
            unlocked,
            completed,
            progress,
            gem_reward: 10,
            estimated_time: "20 min".to_string(),
        }
    }

    #[test]
    fn test_action_labels() {
        assert_eq!(quest("A", true, true, 100).action_label(), "Review Quest");
        assert_eq!(quest("A", true, false, 60).action_label(), "Continue Quest");
        assert_eq!(quest("A", true, false, 0).action_label(), "Start Quest");
        assert_eq!(
            quest("A", false, false, 0).action_label(),
            "Complete Previous Quest"
        );
    }

    #[test]
    fn test_progress_bar_only_for_quests_in_progress() {
        assert!(quest("A", true, false, 30).shows_progress_bar());
        assert!(!quest("A", true, false, 0).shows_progress_bar());
        assert!(!quest("A", true, true, 100).shows_progress_bar());
        assert!(!quest("A", false, false, 30).shows_progress_bar());
    }

    #[test]
    fn test_difficulty_stars() {
        let mut q = quest("A", true, false, 0);
        assert_eq!(q.difficulty_stars(), [true, true, false]);
        q.difficulty = 3;
        assert_eq!(q.difficulty_stars(), [true, true, true]);
        q.difficulty = 1;
        assert_eq!(q.difficulty_stars(), [true, false, false]);
    }

    #[test]
    fn test_activation_routes_circuit_quest() {
        assert_eq!(
            quest(CIRCUIT_QUEST_TITLE, true, true, 100).activate(),
            QuestAction::OpenCircuitPuzzle
        );
        assert_eq!(
            quest("Magnetic Fields", true, false, 60).activate(),
            QuestAction::Started
        );
        assert_eq!(
            quest("Wave Optics", false, false, 0).activate(),
            QuestAction::Locked
        );
    }

    #[test]
    fn test_subject_gems_and_regions() {
        assert_eq!(Subject::Physics.gem(), GemKind::Ruby);
        assert_eq!(Subject::Biology.gem(), GemKind::Emerald);
        assert_eq!(Subject::Mathematics.region(), "Rourkela");
    }
}
