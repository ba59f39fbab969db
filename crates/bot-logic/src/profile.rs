//! Bot roster and identity
//!
//! "Sarah" is the always-available study partner the arena falls back to
//! when no human opponent is around. Her declared stats are cosmetic; the
//! numbers that matter for gameplay come from the difficulty adapter.

use serde::{Deserialize, Serialize};

/// Declared difficulty of a bot opponent
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyLevel {
    Easy,
    Medium,
    Hard,
    /// Tracks the human opponent's level and recent performance
    Adaptive,
}

/// Profile of a simulated opponent
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BotProfile {
    pub id: String,
    pub display_name: String,
    pub first_name: String,
    pub level: String,
    pub xp: u32,
    pub difficulty_level: DifficultyLevel,
    pub avatar: String,
    pub bio: String,
    pub subjects: Vec<String>,
    /// min, max in milliseconds
    pub response_time_range: (u64, u64),
    /// 0-1 probability of a correct answer
    pub accuracy: f64,
    pub personality: String,
}

/// Sarah — the AI study companion
///
/// Base accuracy 70%, 2-4 s simulated think time. Both are starting points:
/// the difficulty adapter re-derives them per match.
pub fn sarah_bot() -> BotProfile {
    BotProfile {
        id: "bot-sarah-001".to_string(),
        display_name: "Sarah (AI Study Partner)".to_string(),
        first_name: "Sarah".to_string(),
        level: "Adaptive AI".to_string(),
        xp: 2500,
        difficulty_level: DifficultyLevel::Adaptive,
        avatar: "👩‍🎓".to_string(),
        bio: "Hi! I'm Sarah, your AI study partner. I'll adjust my difficulty \
              to match your level and help you improve!"
            .to_string(),
        subjects: [
            "Mathematics",
            "English",
            "Science",
            "Integrated Science",
            "Social Studies",
            "French",
            "ICT",
            "RME",
            "Ghanaian Language",
            "Creative Arts",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
        response_time_range: (2000, 4000),
        accuracy: 0.70,
        personality: "Friendly and encouraging, celebrates your wins and \
                      motivates you after losses"
            .to_string(),
    }
}

/// Get all available bots
pub fn all_bots() -> Vec<BotProfile> {
    vec![sarah_bot()]
}

/// Get bot by ID
pub fn bot_by_id(bot_id: &str) -> Option<BotProfile> {
    all_bots().into_iter().find(|bot| bot.id == bot_id)
}

/// Check if a user ID belongs to a bot
pub fn is_bot(user_id: &str) -> bool {
    user_id.starts_with("bot-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_bot() {
        assert!(is_bot("bot-sarah-001"));
        assert!(is_bot("bot-"));
        assert!(!is_bot("user-1234"));
        assert!(!is_bot(""));
        assert!(!is_bot("sarah-bot-001"));
    }

    #[test]
    fn test_bot_by_id() {
        let sarah = bot_by_id("bot-sarah-001").unwrap();
        assert_eq!(sarah.first_name, "Sarah");
        assert_eq!(sarah.difficulty_level, DifficultyLevel::Adaptive);

        assert!(bot_by_id("bot-unknown").is_none());
    }

    #[test]
    fn test_sarah_base_parameters() {
        let sarah = sarah_bot();
        assert_eq!(sarah.accuracy, 0.70);
        assert_eq!(sarah.response_time_range, (2000, 4000));
        assert!(is_bot(&sarah.id));
    }
}
