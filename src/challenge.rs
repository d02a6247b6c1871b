//! Built-in challenge catalog
//!
//! Cards are consumed read-only by the compose screen; the catalog exists so
//! the binary has challenges to compose against without any backend.

use serde::Serialize;

/// A challenge a post can be submitted to
#[derive(Debug, Clone, Serialize)]
pub struct ChallengeCard {
    /// Stable challenge identifier
    pub id: &'static str,
    /// Display title (also drives theme resolution)
    pub title: &'static str,
    /// Short subtitle shown under the title
    pub subtitle: &'static str,
    /// Icon/emoji string
    pub icon: &'static str,
    /// Two-color gradient pair (hex strings)
    pub gradient: (&'static str, &'static str),
}

impl ChallengeCard {
    /// Find a card by id or by a case-insensitive title match
    pub fn find(query: &str) -> Option<&'static ChallengeCard> {
        let q = query.trim();
        if q.is_empty() {
            return None;
        }

        if let Some(card) = KNOWN_CHALLENGES.iter().find(|c| c.id == q) {
            return Some(card);
        }

        let q = q.to_lowercase();
        KNOWN_CHALLENGES
            .iter()
            .find(|c| c.title.to_lowercase().contains(&q))
    }
}

/// Catalog of active challenges
pub static KNOWN_CHALLENGES: &[ChallengeCard] = &[
    ChallengeCard {
        id: "morning-meditation",
        title: "Morning Meditation Challenge",
        subtitle: "Start each day with ten quiet minutes",
        icon: "🧘",
        gradient: ("#7F7FD5", "#91EAE4"),
    },
    ChallengeCard {
        id: "weekend-explorer",
        title: "Weekend Explorer",
        subtitle: "Find one place you have never been",
        icon: "🧭",
        gradient: ("#F2994A", "#F2C94C"),
    },
    ChallengeCard {
        id: "gratitude-journal",
        title: "7 Days of Gratitude",
        subtitle: "Write down one thing you are thankful for",
        icon: "🙏",
        gradient: ("#FF9A9E", "#FECFEF"),
    },
    ChallengeCard {
        id: "daily-sketch",
        title: "Create Something Daily",
        subtitle: "A sketch, a song, or a paragraph. Anything",
        icon: "🎨",
        gradient: ("#A18CD1", "#FBC2EB"),
    },
    ChallengeCard {
        id: "30-day-workout",
        title: "30 Day Workout Streak",
        subtitle: "Move for twenty minutes, every day",
        icon: "💪",
        gradient: ("#56AB2F", "#A8E063"),
    },
    ChallengeCard {
        id: "mindful-monday",
        title: "Mindful Monday",
        subtitle: "One mindful pause before the week starts",
        icon: "🌿",
        gradient: ("#43C6AC", "#F8FFAE"),
    },
    ChallengeCard {
        id: "random-acts",
        title: "Random Acts of Kindness",
        subtitle: "Do something small for someone else",
        icon: "💝",
        gradient: ("#FDC830", "#F37335"),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_by_id() {
        let card = ChallengeCard::find("morning-meditation").unwrap();
        assert_eq!(card.title, "Morning Meditation Challenge");
    }

    #[test]
    fn find_by_partial_title_case_insensitive() {
        let card = ChallengeCard::find("gratitude").unwrap();
        assert_eq!(card.id, "gratitude-journal");
        assert!(ChallengeCard::find("WORKOUT").is_some());
    }

    #[test]
    fn find_rejects_blank_query() {
        assert!(ChallengeCard::find("   ").is_none());
    }

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<_> = KNOWN_CHALLENGES.iter().map(|c| c.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), KNOWN_CHALLENGES.len());
    }
}
