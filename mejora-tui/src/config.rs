/// Default intake service URL for local development, matching the
/// backend's default bind address and router prefix.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000/api/solicitudes";

/// Determine the server URL to use based on priority:
/// 1. CLI argument (highest priority)
/// 2. Environment variable MEJORA_SERVER_URL
/// 3. Default local development URL
pub fn determine_server_url(cli_override: Option<String>) -> String {
    if let Some(url) = cli_override {
        return url;
    }

    if let Ok(url) = std::env::var("MEJORA_SERVER_URL") {
        return url;
    }

    DEFAULT_SERVER_URL.to_string()
}

// Load environment variables from a .env file if one is present.
// This allows MEJORA_SERVER_URL to be set without command-line args.
pub fn load_env() {
    let _ = dotenv::dotenv();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    // Single test so the env var manipulation cannot race a sibling.
    #[test]
    fn test_server_url_priority() {
        let original = env::var("MEJORA_SERVER_URL").ok();
        env::remove_var("MEJORA_SERVER_URL");

        // Default when nothing is configured
        assert_eq!(determine_server_url(None), DEFAULT_SERVER_URL);

        // Environment variable beats the default
        env::set_var("MEJORA_SERVER_URL", "http://env-override:8000/api/solicitudes");
        assert_eq!(
            determine_server_url(None),
            "http://env-override:8000/api/solicitudes"
        );

        // CLI argument beats the environment variable
        assert_eq!(
            determine_server_url(Some("http://cli-override:8000".to_string())),
            "http://cli-override:8000"
        );

        match original {
            Some(value) => env::set_var("MEJORA_SERVER_URL", value),
            None => env::remove_var("MEJORA_SERVER_URL"),
        }
    }
}
