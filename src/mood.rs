// Mood-to-presentation mapping
//
// Two independent lookup tables, each an ordered list of (predicate, result)
// pairs evaluated first-match-wins. Order matters: earlier rules shadow later
// ones, e.g. an "anxious and sad" mood hits the anxious rule before the sad
// one. Both lookups are pure; mood text is matched lower-cased.

/// One background rule: predicate over (lower-cased mood, energy level)
struct BackgroundRule {
    matches: fn(mood: &str, energy: &str) -> bool,
    color: &'static str,
}

const BACKGROUND_RULES: &[BackgroundRule] = &[
    BackgroundRule {
        matches: |mood, _| mood.contains("anxious") || mood.contains("stressed"),
        color: "#fdecea", // soft reddish / calming red
    },
    BackgroundRule {
        matches: |mood, _| mood.contains("sad") || mood.contains("down"),
        color: "#e6f0ff", // gentle blue
    },
    BackgroundRule {
        matches: |mood, _| mood.contains("happy") || mood.contains("excited"),
        color: "#fff9c4", // warm happy yellow
    },
    BackgroundRule {
        matches: |_, energy| energy == "high",
        color: "#fff0f5", // soft pink
    },
    BackgroundRule {
        matches: |_, energy| energy == "low",
        color: "#f5f5f5", // neutral gray
    },
];

/// Fallback when no rule matches
const DEFAULT_BACKGROUND: &str = "#f0f8ff"; // pale blue

struct TipRule {
    matches: fn(mood: &str, energy: &str) -> bool,
    tip: &'static str,
}

const TIP_RULES: &[TipRule] = &[
    TipRule {
        matches: |mood, energy| energy == "high" && mood.contains("stressed"),
        tip: "Try some deep breathing or a short walk to calm down.",
    },
    TipRule {
        matches: |mood, energy| energy == "low" && mood.contains("sad"),
        tip: "Consider listening to upbeat music, or talking to a friend.",
    },
    TipRule {
        matches: |mood, _| mood.contains("anxious"),
        tip: "Try grounding techniques: focus on your breath or surroundings for a minute.",
    },
];

const DEFAULT_TIP: &str = "Enjoy the journey, every step has its own magic.";

/// Pick the page background color for a decoded intent.
pub fn background_color(mood: &str, energy_level: &str) -> &'static str {
    let mood = mood.to_lowercase();
    BACKGROUND_RULES
        .iter()
        .find(|rule| (rule.matches)(&mood, energy_level))
        .map(|rule| rule.color)
        .unwrap_or(DEFAULT_BACKGROUND)
}

/// Pick the mental-health tip for a decoded intent.
pub fn mental_health_tip(mood: &str, energy_level: &str) -> &'static str {
    let mood = mood.to_lowercase();
    TIP_RULES
        .iter()
        .find(|rule| (rule.matches)(&mood, energy_level))
        .map(|rule| rule.tip)
        .unwrap_or(DEFAULT_TIP)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anxious_shadows_sad() {
        // Rule 1 precedes rule 2 regardless of energy level
        assert_eq!(background_color("I feel anxious and sad", "low"), "#fdecea");
        assert_eq!(background_color("I feel anxious and sad", "high"), "#fdecea");
    }

    #[test]
    fn test_mood_matching_is_case_insensitive() {
        assert_eq!(background_color("Stressed about finals", "medium"), "#fdecea");
        assert_eq!(background_color("HAPPY", "medium"), "#fff9c4");
    }

    #[test]
    fn test_sad_and_down() {
        assert_eq!(background_color("feeling down", "medium"), "#e6f0ff");
        assert_eq!(background_color("a bit sad", "medium"), "#e6f0ff");
    }

    #[test]
    fn test_energy_rules_only_apply_without_keyword_match() {
        // No keyword: energy decides
        assert_eq!(background_color("neutral", "high"), "#fff0f5");
        assert_eq!(background_color("neutral", "low"), "#f5f5f5");
        // Keyword match wins over energy
        assert_eq!(background_color("excited", "low"), "#fff9c4");
    }

    #[test]
    fn test_default_background() {
        assert_eq!(background_color("neutral", "medium"), "#f0f8ff");
        assert_eq!(background_color("", ""), "#f0f8ff");
    }

    #[test]
    fn test_tip_high_stressed_wins_over_sad() {
        let tip = mental_health_tip("I am stressed and sad", "high");
        assert_eq!(tip, "Try some deep breathing or a short walk to calm down.");
    }

    #[test]
    fn test_tip_low_sad() {
        let tip = mental_health_tip("pretty sad today", "low");
        assert_eq!(
            tip,
            "Consider listening to upbeat music, or talking to a friend."
        );
    }

    #[test]
    fn test_tip_anxious_any_energy() {
        let tip = mental_health_tip("anxious about tomorrow", "medium");
        assert!(tip.contains("grounding"));
    }

    #[test]
    fn test_tip_default() {
        assert_eq!(
            mental_health_tip("content", "medium"),
            "Enjoy the journey, every step has its own magic."
        );
    }

    #[test]
    fn test_mapping_is_idempotent() {
        let a = background_color("anxious", "high");
        let b = background_color("anxious", "high");
        assert_eq!(a, b);
        let t1 = mental_health_tip("sad", "low");
        let t2 = mental_health_tip("sad", "low");
        assert_eq!(t1, t2);
    }
}
