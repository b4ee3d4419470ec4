#[derive(Clone)]
pub struct AppConfig {
    /// Base URL of the Supabase project, e.g. `https://xyz.supabase.co`.
    pub supabase_url: String,
    /// Anonymous (publishable) API key sent with every request.
    pub supabase_anon_key: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub log_level: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("supabase_url", &self.supabase_url)
            .field("supabase_anon_key", &"[redacted]")
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("log_level", &self.log_level)
            .finish()
    }
}
