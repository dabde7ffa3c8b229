use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    // --- Chat LLM Provider Args ---
    /// Upstream LLM provider for chat completion (gemini, yi)
    #[arg(long, env = "CHAT_PROVIDER", default_value = "gemini")]
    pub provider: String,

    /// API Key for the Google Gemini API
    #[arg(long, env = "GEMINI_KEY")]
    pub gemini_key: String,

    /// API Key for the Lingyiwanwu (Yi) API
    #[arg(long, env = "YI_KEY")]
    pub yi_key: String,

    /// Model name for chat completion (e.g., gemini-1.0-pro-latest, yi-large)
    #[arg(long, env = "CHAT_MODEL")] // No default, rely on provider defaults if None
    pub chat_model: Option<String>,

    /// Base URL override for the provider API
    #[arg(long, env = "CHAT_BASE_URL")]
    pub chat_base_url: Option<String>,

    // --- General App Args ---
    /// Persona text prepended to every prompt; a built-in default is used if unset
    #[arg(long, env = "PERSONA")]
    pub persona: Option<String>,

    /// Host address and port for the server to listen on.
    #[arg(long, env = "SERVER_ADDR", default_value = "0.0.0.0:8080")]
    pub server_addr: String,

    /// Path of the append-only log file.
    #[arg(long, env = "LOG_FILE", default_value = "app.log")]
    pub log_file: String,
}
