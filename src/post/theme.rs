//! Themed copy for the compose screen
//!
//! The copy bundle shown while composing is picked by keyword-matching the
//! challenge title. Matching is case-insensitive substring search against an
//! ordered rule table; the first rule with any keyword hit wins and unmatched
//! titles fall back to the generic bundle.

use serde::Serialize;

/// Which copy bundle a title resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeKind {
    Peace,
    Adventure,
    Gratitude,
    Creative,
    Fitness,
    Generic,
}

impl std::fmt::Display for ThemeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeKind::Peace => write!(f, "Peace"),
            ThemeKind::Adventure => write!(f, "Adventure"),
            ThemeKind::Gratitude => write!(f, "Gratitude"),
            ThemeKind::Creative => write!(f, "Creative"),
            ThemeKind::Fitness => write!(f, "Fitness"),
            ThemeKind::Generic => write!(f, "Generic"),
        }
    }
}

/// Display copy for the compose screen
#[derive(Debug, Clone, Serialize)]
pub struct ThemeCopy {
    /// Page heading above the form
    pub heading: &'static str,
    /// Label over the text input
    pub input_label: &'static str,
    /// Placeholder shown while the text input is empty
    pub placeholder: &'static str,
    /// Tip shown when posting as an individual
    pub individual_tip: &'static str,
    /// Tip shown when posting as a team
    pub team_tip: &'static str,
}

/// A resolved theme: kind tag plus its copy bundle
#[derive(Debug, Clone, Serialize)]
pub struct PostTheme {
    pub kind: ThemeKind,
    pub copy: ThemeCopy,
}

struct ThemeRule {
    keywords: &'static [&'static str],
    theme: PostTheme,
}

// Evaluated top to bottom; order is the tie-break.
static THEME_RULES: &[ThemeRule] = &[
    ThemeRule {
        keywords: &["peace", "meditation", "mindful"],
        theme: PostTheme {
            kind: ThemeKind::Peace,
            copy: ThemeCopy {
                heading: "Share your moment of calm",
                input_label: "How did it feel to slow down?",
                placeholder: "A quiet thought, a breath, a small stillness...",
                individual_tip: "Even one mindful minute counts. Describe it simply.",
                team_tip: "Tell your team what helped you find calm today.",
            },
        },
    },
    ThemeRule {
        keywords: &["adventure", "explore", "journey"],
        theme: PostTheme {
            kind: ThemeKind::Adventure,
            copy: ThemeCopy {
                heading: "Share your adventure",
                input_label: "Where did today take you?",
                placeholder: "A new street, a new trail, a new view...",
                individual_tip: "Small detours count as adventures too.",
                team_tip: "Drop a pin in words so your team can follow.",
            },
        },
    },
    ThemeRule {
        keywords: &["gratitude", "thankful", "appreciate"],
        theme: PostTheme {
            kind: ThemeKind::Gratitude,
            copy: ThemeCopy {
                heading: "Share what you're grateful for",
                input_label: "What made you pause and appreciate?",
                placeholder: "A person, a moment, something easy to overlook...",
                individual_tip: "One sentence of thanks is plenty.",
                team_tip: "Gratitude is contagious. Your team will catch it.",
            },
        },
    },
    ThemeRule {
        keywords: &["creative", "art", "create"],
        theme: PostTheme {
            kind: ThemeKind::Creative,
            copy: ThemeCopy {
                heading: "Share what you made",
                input_label: "What did you create today?",
                placeholder: "A sketch, a verse, a melody, a wild idea...",
                individual_tip: "Unfinished work is welcome here.",
                team_tip: "Show your team the messy middle, not just the result.",
            },
        },
    },
    ThemeRule {
        keywords: &["fitness", "workout", "health"],
        theme: PostTheme {
            kind: ThemeKind::Fitness,
            copy: ThemeCopy {
                heading: "Share your workout",
                input_label: "How did you move today?",
                placeholder: "Reps, laps, a walk around the block...",
                individual_tip: "Consistency beats intensity. Log the small days.",
                team_tip: "Your check-in keeps the team streak alive.",
            },
        },
    },
];

static GENERIC_THEME: PostTheme = PostTheme {
    kind: ThemeKind::Generic,
    copy: ThemeCopy {
        heading: "Share your progress",
        input_label: "How did it go?",
        placeholder: "Tell everyone about your experience...",
        individual_tip: "Every update counts, however small.",
        team_tip: "Keep your team posted. They're in this with you.",
    },
};

/// Resolve a challenge title to its themed copy.
///
/// Total: any title (including empty) resolves to something.
pub fn resolve(title: &str) -> &'static PostTheme {
    let title = title.to_lowercase();
    THEME_RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| title.contains(kw)))
        .map(|rule| &rule.theme)
        .unwrap_or(&GENERIC_THEME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_keyword_anywhere_in_title() {
        assert_eq!(
            resolve("Morning Meditation Challenge").kind,
            ThemeKind::Peace
        );
        assert_eq!(resolve("30 Day Workout Streak").kind, ThemeKind::Fitness);
        assert_eq!(resolve("The Journey Home").kind, ThemeKind::Adventure);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(resolve("MINDFUL Monday").kind, ThemeKind::Peace);
        assert_eq!(resolve("cReAtE something").kind, ThemeKind::Creative);
    }

    #[test]
    fn unmatched_titles_fall_back_to_generic() {
        assert_eq!(resolve("Random Challenge").kind, ThemeKind::Generic);
        assert_eq!(resolve("").kind, ThemeKind::Generic);
    }

    #[test]
    fn first_rule_wins_when_two_groups_match() {
        // "peace" (rule 1) and "adventure" (rule 2) both appear.
        assert_eq!(resolve("Peaceful Adventure").kind, ThemeKind::Peace);
        // "thankful" (rule 3) and "art" (rule 4) both appear.
        assert_eq!(resolve("Thankful for Art").kind, ThemeKind::Gratitude);
    }

    #[test]
    fn resolution_is_idempotent() {
        let a = resolve("Gratitude Week");
        let b = resolve("Gratitude Week");
        assert_eq!(a.kind, b.kind);
        assert_eq!(a.copy.heading, b.copy.heading);
        assert_eq!(a.copy.input_label, b.copy.input_label);
        assert_eq!(a.copy.placeholder, b.copy.placeholder);
        assert_eq!(a.copy.individual_tip, b.copy.individual_tip);
        assert_eq!(a.copy.team_tip, b.copy.team_tip);
    }

    #[test]
    fn every_rule_resolves_to_its_own_kind() {
        for rule in THEME_RULES {
            for kw in rule.keywords {
                assert_eq!(resolve(kw).kind, rule.theme.kind, "keyword {kw}");
            }
        }
    }
}
