use serde::Deserialize;

use crate::dashboard::{ClassStats, StudentRecord, TopicDifficulty};
use crate::progress::MonumentProgress;
use crate::quest::{Quest, Subject};
use crate::rewards::GemCounts;

/// All sample data the app displays. Read-only once loaded.
#[derive(Debug, Deserialize)]
pub struct Dataset {
    pub student: StudentProfile,
    #[serde(rename = "quest")]
    pub quests: Vec<QuestEntry>,
    pub class: ClassStats,
    #[serde(rename = "roster")]
    pub students: Vec<StudentRecord>,
    #[serde(rename = "topic")]
    pub topics: Vec<TopicDifficulty>,
}

impl Dataset {
    pub fn quests_for(&self, subject: Subject) -> impl Iterator<Item = &Quest> {
        self.quests
            .iter()
            .filter(move |entry| entry.subject == subject)
            .map(|entry| &entry.quest)
    }
}

#[derive(Debug, Deserialize)]
pub struct StudentProfile {
    pub name: String,
    pub level: u32,
    pub streak_days: u32,
    pub gems: GemCounts,
    #[serde(default, rename = "monument")]
    pub monuments: Vec<MonumentProgress>,
}

#[derive(Debug, Deserialize)]
pub struct QuestEntry {
    pub subject: Subject,
    #[serde(flatten)]
    pub quest: Quest,
}
