//! EduGems: the collectible reward tokens

use ratatui::style::Color;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GemKind {
    Ruby,
    Emerald,
    Sapphire,
    Topaz,
}

impl GemKind {
    pub const ALL: [GemKind; 4] = [
        GemKind::Ruby,
        GemKind::Emerald,
        GemKind::Sapphire,
        GemKind::Topaz,
    ];

    /// Subject the gem is earned in.
    pub fn label(self) -> &'static str {
        match self {
            GemKind::Ruby => "Physics",
            GemKind::Emerald => "Biology",
            GemKind::Sapphire => "Chemistry",
            GemKind::Topaz => "Mathematics",
        }
    }

    pub fn color(self) -> Color {
        match self {
            GemKind::Ruby => Color::Red,
            GemKind::Emerald => Color::Green,
            GemKind::Sapphire => Color::Blue,
            GemKind::Topaz => Color::Yellow,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct GemCounts {
    pub ruby: u32,
    pub emerald: u32,
    pub sapphire: u32,
    pub topaz: u32,
}

impl GemCounts {
    pub fn get(&self, kind: GemKind) -> u32 {
        match kind {
            GemKind::Ruby => self.ruby,
            GemKind::Emerald => self.emerald,
            GemKind::Sapphire => self.sapphire,
            GemKind::Topaz => self.topaz,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (GemKind, u32)> + '_ {
        GemKind::ALL.into_iter().map(|kind| (kind, self.get(kind)))
    }

    pub fn total(&self) -> u32 {
        self.iter().map(|(_, count)| count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_sums_all_kinds() {
        let gems = GemCounts {
            ruby: 45,
            emerald: 32,
            sapphire: 38,
            topaz: 51,
        };
        assert_eq!(gems.total(), 166);
    }

    #[test]
    fn test_iter_order_is_fixed() {
        let gems = GemCounts {
            ruby: 1,
            emerald: 2,
            sapphire: 3,
            topaz: 4,
        };
        let order: Vec<_> = gems.iter().collect();
        assert_eq!(
            order,
            vec![
                (GemKind::Ruby, 1),
                (GemKind::Emerald, 2),
                (GemKind::Sapphire, 3),
                (GemKind::Topaz, 4)
            ]
        );
    }

    #[test]
    fn test_gem_subjects() {
        assert_eq!(GemKind::Ruby.label(), "Physics");
        assert_eq!(GemKind::Sapphire.label(), "Chemistry");
    }
}
