//! Class analytics shown on the teacher dashboard

use ratatui::style::Color;
use serde::Deserialize;

use crate::quest::Subject;

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ClassStats {
    pub total_students: u32,
    pub active_today: u32,
    pub average_progress: u8,
    pub struggling_students: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StudentStatus {
    Excellent,
    Good,
    NeedsHelp,
}

impl StudentStatus {
    pub fn label(self) -> &'static str {
        match self {
            StudentStatus::Excellent => "excellent",
            StudentStatus::Good => "good",
            StudentStatus::NeedsHelp => "needs help",
        }
    }

    pub fn color(self) -> Color {
        match self {
            StudentStatus::Excellent => Color::Green,
            StudentStatus::Good => Color::Blue,
            StudentStatus::NeedsHelp => Color::Red,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StudentRecord {
    pub name: String,
    pub progress: u8,
    pub status: StudentStatus,
    pub gems: u32,
    pub last_active: String,
}

impl StudentRecord {
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DifficultyBand {
    High,
    Medium,
    Low,
}

impl DifficultyBand {
    pub fn color(self) -> Color {
        match self {
            DifficultyBand::High => Color::Red,
            DifficultyBand::Medium => Color::Yellow,
            DifficultyBand::Low => Color::Green,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TopicDifficulty {
    pub topic: String,
    pub difficulty: u8,
    pub subject: Subject,
    pub struggling_count: u32,
}

impl TopicDifficulty {
    pub fn band(&self) -> DifficultyBand {
        if self.difficulty > 80 {
            DifficultyBand::High
        } else if self.difficulty > 60 {
            DifficultyBand::Medium
        } else {
            DifficultyBand::Low
        }
    }
}

/// Suggests extra practice for the two hardest topics.
pub fn recommendation(topics: &[TopicDifficulty]) -> Option<String> {
    let mut ranked: Vec<&TopicDifficulty> = topics.iter().collect();
    ranked.sort_by(|a, b| b.difficulty.cmp(&a.difficulty));
    match ranked.as_slice() {
        [] => None,
        [only] => Some(format!(
            "Consider creating additional practice quests for {}, as it shows the highest difficulty level.",
            only.topic
        )),
        [first, second, ..] => Some(format!(
            "Consider creating additional practice quests for {} and {}, as these topics show the highest difficulty levels.",
            first.topic, second.topic
        )),
    }
}
