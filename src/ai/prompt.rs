// System prompt for the Moodify emotion analyst
//
// This prompt configures the model to translate a free-text emotional state
// into a music intent, returned as bare JSON (no markdown, no prose).

/// Allowed song-count range for a single request
pub const MIN_SONGS: u8 = 3;
pub const MAX_SONGS: u8 = 15;
pub const DEFAULT_SONGS: u8 = 5;

pub const SYSTEM_PROMPT: &str = r#"You are an AI that translates emotions into music intent to help people with their mental health.

Analyze the user's emotional state and output with only valid JSON
with the following fields:

- mood: short description of emotional state
- energy_level: low | medium | high
- music_goal: what the music should do emotionally
- youtube_search: a YouTube search phrase for a playlist
- song_recommendations: a JSON list of objects, each with "title" and "artist" keys (match the requested number)

Rules:
- Do NOT include explanations
- Do NOT include markdown
- Output JSON only
- Only suggest songs that are popular or well-known, from currently active artists
- Avoid classical composers, long-dead artists, or very experimental tracks
- The songs should still match the mood and energy level
"#;

/// Assemble the full request text for one submission.
///
/// Pure string formatting; callers are responsible for rejecting
/// empty/whitespace-only input before getting here.
pub fn build_prompt(user_input: &str, num_songs: u8) -> String {
    format!(
        "{}\nUser input: {}\nNumber of songs requested: {}",
        SYSTEM_PROMPT, user_input, num_songs
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_contains_user_text_once() {
        let prompt = build_prompt("I'm stressed about finals", 5);
        let hits = prompt.matches("I'm stressed about finals").count();
        assert_eq!(hits, 1);
    }

    #[test]
    fn test_prompt_contains_requested_count_once() {
        for n in MIN_SONGS..=MAX_SONGS {
            let prompt = build_prompt("feeling fine", n);
            let needle = format!("Number of songs requested: {}", n);
            assert_eq!(prompt.matches(&needle).count(), 1);
        }
    }

    #[test]
    fn test_prompt_starts_with_system_instructions() {
        let prompt = build_prompt("tired", 3);
        assert!(prompt.starts_with(SYSTEM_PROMPT));
        assert!(prompt.contains("Output JSON only"));
    }
}
