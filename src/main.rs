// Moodify entry point
//
// Reads the Gemini credential once at startup (fatal if absent), then serves
// the single-page UI until Ctrl-C.

use moodify::ai::GeminiClient;
use moodify::server;

#[tokio::main]
async fn main() {
    // Load variables from .env if present
    dotenv::dotenv().ok();

    let api_key = match std::env::var("GEMINI_API_KEY") {
        Ok(key) if !key.trim().is_empty() => key,
        _ => {
            eprintln!("[moodify] GEMINI_API_KEY not found");
            std::process::exit(1);
        }
    };

    let port = std::env::var("MOODIFY_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(server::DEFAULT_PORT);

    let client = GeminiClient::new(api_key);

    if let Err(e) = server::start_server(port, client).await {
        eprintln!("[moodify] {}", e);
        std::process::exit(1);
    }
}
