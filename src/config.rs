// Server configuration, resolved once at startup from flags or environment

use clap::Parser;

use crate::gemini::DEFAULT_MODEL;

/// Turn Jira Epics into user stories and test cases with Gemini
#[derive(Debug, Clone, Parser)]
#[command(name = "epicgen", version)]
pub struct ServerConfig {
    /// Base URL of the Jira instance (e.g. https://yourteam.atlassian.net)
    #[arg(long, env = "JIRA_BASE_URL")]
    pub jira_base_url: String,

    /// Account email for Jira basic auth
    #[arg(long, env = "JIRA_USER_EMAIL")]
    pub jira_user_email: String,

    /// Jira API token paired with the account email
    #[arg(long, env = "JIRA_API_TOKEN", hide_env_values = true)]
    pub jira_api_token: String,

    /// Project whose epics are listed
    #[arg(long, env = "JIRA_PROJECT_KEY")]
    pub jira_project_key: String,

    /// Generative Language API key
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: String,

    /// Model used for story generation
    #[arg(long, env = "GEMINI_MODEL", default_value = DEFAULT_MODEL)]
    pub gemini_model: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub bind: String,

    /// Allowed CORS origin (repeatable); permissive when unset
    #[arg(long = "cors-origin", value_name = "ORIGIN")]
    pub cors_origins: Vec<String>,
}
