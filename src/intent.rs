// Music intent decoding
//
// The model is asked for bare JSON, but its output is untrusted: it may wrap
// the payload in markdown fences, pad it with prose, drop per-song fields, or
// return a different number of songs than requested. Decoding defends against
// all of that; only a fundamentally wrong shape is an error.

use serde::{Deserialize, Serialize};

const UNKNOWN_TITLE: &str = "Unknown Title";
const UNKNOWN_ARTIST: &str = "Unknown Artist";

/// One recommended song. Missing fields default rather than failing the
/// whole decode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SongRef {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_artist")]
    pub artist: String,
}

fn default_title() -> String {
    UNKNOWN_TITLE.to_string()
}

fn default_artist() -> String {
    UNKNOWN_ARTIST.to_string()
}

/// Structured music intent decoded from the model's response.
///
/// All five top-level fields are required. `energy_level` is kept as a plain
/// string (expected "low" / "medium" / "high") because the external service
/// is not guaranteed to honor the enumeration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MusicIntent {
    pub mood: String,
    pub energy_level: String,
    pub music_goal: String,
    pub youtube_search: String,
    pub song_recommendations: Vec<SongRef>,
}

/// Decode raw response text into a `MusicIntent`.
///
/// Trims whitespace and strips a markdown code fence if present, then parses
/// as JSON. Any decode failure is returned as a plain error string for the
/// caller to surface; it never panics.
pub fn parse_intent(raw: &str) -> Result<MusicIntent, String> {
    let json_text = extract_json(raw.trim())?;
    serde_json::from_str::<MusicIntent>(&json_text)
        .map_err(|e| format!("Failed to parse music intent: {}", e))
}

/// Extract JSON from response text (handles markdown code blocks)
fn extract_json(text: &str) -> Result<String, String> {
    // Try to find JSON in markdown code block
    if let Some(start) = text.find("```json") {
        let json_start = start + 7; // Skip "```json"
        if let Some(end) = text[json_start..].find("```") {
            let json_end = json_start + end;
            return Ok(text[json_start..json_end].trim().to_string());
        }
    }

    // Try generic code block
    if let Some(start) = text.find("```\n") {
        let json_start = start + 4;
        if let Some(end) = text[json_start..].find("```") {
            let json_end = json_start + end;
            return Ok(text[json_start..json_end].trim().to_string());
        }
    }

    // Try to find raw JSON object. The closing brace must come after the
    // opening one; "} oops {" has both but holds no object.
    if let Some(start) = text.find('{') {
        if let Some(end) = text.rfind('}') {
            if start <= end {
                return Ok(text[start..=end].trim().to_string());
            }
        }
    }

    Err("No JSON found in response".to_string())
}
