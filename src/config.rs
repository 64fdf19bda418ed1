use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::client::{ClientConfig, Provider};

// CLI argument structure
#[derive(Parser, Debug, Clone)]
#[command(name = "nexus")]
#[command(about = "Generate React websites from a prompt and keep a local history")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the generation endpoint (mock, or relay when an upstream is set)
    Serve(ServeArgs),
    /// Generate a site for a prompt and add it to history
    Generate(GenerateArgs),
    /// Inspect or prune the local history
    History(HistoryArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    // Interface to bind
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    // Port to run the server on
    #[arg(short, long, default_value_t = 5555)]
    pub port: u16,

    // OpenAI-compatible upstream, e.g. "https://api.openai.com"
    #[arg(long, env = "NEXUS_UPSTREAM_URL")]
    pub upstream_url: Option<String>,

    // Path on the upstream, defaults to /v1/chat/completions
    #[arg(long)]
    pub upstream_path: Option<String>,

    #[arg(long, env = "NEXUS_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(long, env = "NEXUS_MODEL", default_value = "gpt-4o")]
    pub model: String,

    // Relay cache TTL in seconds
    #[arg(short, long, default_value_t = 30)]
    pub cache_ttl: u64,
}

#[derive(Args, Debug, Clone)]
pub struct ClientArgs {
    // Generation endpoint base url
    #[arg(long, env = "NEXUS_BASE_URL", default_value = "http://localhost:5555")]
    pub base_url: String,

    // Path on the endpoint, defaults per provider
    #[arg(long)]
    pub path: Option<String>,

    #[arg(long, value_enum, env = "NEXUS_PROVIDER", default_value_t = Provider::Relay)]
    pub provider: Provider,

    #[arg(long, env = "NEXUS_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(long, env = "NEXUS_MODEL", default_value = "gpt-4o")]
    pub model: String,
}

impl ClientArgs {
    pub fn to_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            path: self
                .path
                .clone()
                .unwrap_or_else(|| self.provider.default_path().to_string()),
            provider: self.provider,
            api_key: self.api_key.clone(),
            model: self.model.clone(),
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct StorageArgs {
    // Where history is kept, defaults to <data dir>/nexus
    #[arg(long, env = "NEXUS_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,
}

impl StorageArgs {
    pub fn resolve(&self) -> PathBuf {
        match &self.data_dir {
            Some(dir) => dir.clone(),
            None => dirs::data_dir()
                .map(|d| d.join("nexus"))
                .unwrap_or_else(|| PathBuf::from(".nexus")),
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Description of the site to build
    #[arg(required = true, trailing_var_arg = true)]
    pub prompt: Vec<String>,

    #[command(flatten)]
    pub client: ClientArgs,

    #[command(flatten)]
    pub storage: StorageArgs,

    // Write the component source here instead of printing it
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    // Print the whole history entry as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct HistoryArgs {
    #[command(subcommand)]
    pub action: HistoryAction,

    #[command(flatten)]
    pub storage: StorageArgs,
}

#[derive(Subcommand, Debug, Clone)]
pub enum HistoryAction {
    /// List remembered generations, newest first
    List,
    /// Show one entry
    Show {
        id: i64,
        // Print only the component source
        #[arg(long)]
        code: bool,
    },
    /// Forget one entry
    Remove { id: i64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_args_join_prompt_and_pick_path() {
        let cli = Cli::try_parse_from([
            "nexus", "generate", "--provider", "openai", "--base-url", "http://llm:8000", "A", "bakery",
        ])
        .unwrap();
        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.prompt.join(" "), "A bakery");
        let config = args.client.to_config();
        assert_eq!(config.endpoint(), "http://llm:8000/v1/chat/completions");
        assert_eq!(config.provider, Provider::Openai);
    }

    #[test]
    fn history_remove_parses_id() {
        let cli = Cli::try_parse_from(["nexus", "history", "--data-dir", "/tmp/x", "remove", "17"]).unwrap();
        let Command::History(args) = cli.command else {
            panic!("expected history");
        };
        assert!(matches!(args.action, HistoryAction::Remove { id: 17 }));
        assert_eq!(args.storage.resolve(), PathBuf::from("/tmp/x"));
    }

    #[test]
    fn data_dir_accepted_after_history_action() {
        let cli = Cli::try_parse_from(["nexus", "history", "remove", "17", "--data-dir", "/tmp/y"]).unwrap();
        let Command::History(args) = cli.command else {
            panic!("expected history");
        };
        assert!(matches!(args.action, HistoryAction::Remove { id: 17 }));
        assert_eq!(args.storage.resolve(), PathBuf::from("/tmp/y"));
    }

    #[test]
    fn serve_defaults_to_mock_port() {
        let cli = Cli::try_parse_from(["nexus", "serve"]).unwrap();
        let Command::Serve(args) = cli.command else {
            panic!("expected serve");
        };
        assert_eq!(args.port, 5555);
        assert_eq!(args.cache_ttl, 30);
    }
}
