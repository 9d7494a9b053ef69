// HTTP routes for the Moodify page
//
// One page, one pipeline endpoint. Each /api/generate call is independent:
// build the prompt, make one model call, decode, map mood to presentation,
// attach search links. Nothing is kept between submissions.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::Html,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::AppState;
use crate::ai::{build_prompt, DEFAULT_SONGS, MAX_SONGS, MIN_SONGS};
use crate::intent::parse_intent;
use crate::links;
use crate::mood;

/// The single-page UI, compiled into the binary
const INDEX_HTML: &str = include_str!("../../assets/index.html");

/// Shown when the model's response cannot be decoded
const DECODE_ERROR_MESSAGE: &str = "Something went wrong. Try again.";

// ---- Request/Response types ----

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub text: String,
    #[serde(default = "default_num_songs")]
    pub num_songs: u8,
}

fn default_num_songs() -> u8 {
    DEFAULT_SONGS
}

/// One recommended song with its search link
#[derive(Debug, Serialize)]
pub struct SongLink {
    pub title: String,
    pub artist: String,
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub mood: String,
    pub energy_level: String,
    pub music_goal: String,
    pub background_color: &'static str,
    pub tip: &'static str,
    pub playlist_url: String,
    pub songs: Vec<SongLink>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize)]
pub struct StatusResponse {
    pub name: String,
    pub version: String,
    pub model: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

// ---- Route registration ----

pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(get_index))
        .route("/api/status", get(get_status))
        .route("/api/generate", post(generate))
}

// ---- Handlers ----

async fn get_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn get_status(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        name: "Moodify".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        model: state.client.model().to_string(),
    })
}

/// Check one submission before anything is sent to the model.
/// Returns the trimmed text on success.
fn validate_submission(text: &str, num_songs: u8) -> Result<String, String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err("Describe how you're feeling first.".to_string());
    }
    if !(MIN_SONGS..=MAX_SONGS).contains(&num_songs) {
        return Err(format!(
            "Song count must be between {} and {}.",
            MIN_SONGS, MAX_SONGS
        ));
    }
    Ok(trimmed.to_string())
}

async fn generate(
    State(state): State<Arc<AppState>>,
    Json(body): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    // Invalid input never reaches the model
    let text = validate_submission(&body.text, body.num_songs)
        .map_err(|e| api_error(StatusCode::UNPROCESSABLE_ENTITY, e))?;

    let prompt = build_prompt(&text, body.num_songs);

    // One model call per submission; transport/API failures are surfaced as
    // a retry-able message instead of tearing the page down
    let raw = state.client.generate(&prompt).await.map_err(|e| {
        eprintln!("[moodify] Model call failed: {}", e);
        api_error(
            StatusCode::BAD_GATEWAY,
            "Could not reach the music service. Try again.",
        )
    })?;

    // Decode failures are likewise non-fatal; the next submission starts clean
    let intent = parse_intent(&raw).map_err(|e| {
        eprintln!("[moodify] Decode failed: {}", e);
        api_error(StatusCode::BAD_GATEWAY, DECODE_ERROR_MESSAGE)
    })?;

    let background_color = mood::background_color(&intent.mood, &intent.energy_level);
    let tip = mood::mental_health_tip(&intent.mood, &intent.energy_level);
    let playlist_url = links::search_url(&intent.youtube_search);

    let songs = intent
        .song_recommendations
        .iter()
        .map(|song| SongLink {
            title: song.title.clone(),
            artist: song.artist.clone(),
            url: links::song_search_url(&song.title, &song.artist),
        })
        .collect();

    Ok(Json(GenerateResponse {
        mood: intent.mood,
        energy_level: intent.energy_level,
        music_goal: intent.music_goal,
        background_color,
        tip,
        playlist_url,
        songs,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_is_rejected() {
        assert!(validate_submission("", 5).is_err());
        assert!(validate_submission("   \n\t ", 5).is_err());
    }

    #[test]
    fn test_out_of_range_count_is_rejected() {
        assert!(validate_submission("feeling fine", 2).is_err());
        assert!(validate_submission("feeling fine", 16).is_err());
        assert!(validate_submission("feeling fine", 0).is_err());
    }

    #[test]
    fn test_valid_submission_is_trimmed() {
        let text = validate_submission("  feeling fine  ", 3).unwrap();
        assert_eq!(text, "feeling fine");
        assert!(validate_submission("ok", 15).is_ok());
    }

    #[test]
    fn test_num_songs_defaults_to_five() {
        let body: GenerateRequest = serde_json::from_str(r#"{"text":"hi"}"#).unwrap();
        assert_eq!(body.num_songs, 5);
    }

    #[test]
    fn test_index_page_is_embedded() {
        assert!(INDEX_HTML.contains("Moodify"));
        assert!(INDEX_HTML.contains("/api/generate"));
    }
}
