// AI module for Gemini API integration
//
// This module provides:
// - Gemini API client for one-shot JSON generation
// - The fixed system prompt and per-submission prompt assembly

pub mod gemini_client;
pub mod prompt;

// Re-export commonly used types
pub use gemini_client::GeminiClient;
pub use prompt::{build_prompt, DEFAULT_SONGS, MAX_SONGS, MIN_SONGS, SYSTEM_PROMPT};
