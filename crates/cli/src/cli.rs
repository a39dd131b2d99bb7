use carbon_txt_domain::CliOverrides;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "carbon-txt")]
#[command(version)]
#[command(about = "Find and validate carbon.txt files")]
pub struct Cli {
    /// Path to configuration file (default: ./carbon-txt.toml if present)
    #[arg(short = 'c', long, global = true)]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Timeout in seconds for each HTTP request
    #[arg(long, global = true)]
    pub http_timeout: Option<f64>,

    /// User-Agent sent with every HTTP request
    #[arg(long, global = true)]
    pub user_agent: Option<String>,

    /// Comma-separated document processors to run on valid files
    #[arg(long, global = true, value_delimiter = ',', env = "ACTIVE_CARBON_TXT_PLUGINS")]
    pub active_plugins: Option<Vec<String>>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate carbon.txt files, either online, or locally
    #[command(subcommand)]
    Validate(ValidateTarget),

    /// Show where the carbon.txt file for a domain or URI lives, without
    /// validating it
    Resolve {
        /// Domain (example.com) or absolute URI
        target: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print the JSON schema of a carbon.txt file
    Schema,

    /// List active document processors
    Plugins,

    /// Run the validation HTTP API
    Serve {
        /// Address to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ValidateTarget {
    /// Discover and validate the carbon.txt file of a domain
    Domain {
        domain: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Validate a local file, or '-' to read from STDIN
    File {
        path: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Validate the carbon.txt file at an http(s) URL
    Url {
        url: String,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args, Debug, Clone, Copy, Default)]
pub struct OutputArgs {
    /// Print the full result as JSON instead of a summary
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn overrides(&self) -> CliOverrides {
        let (bind_address, port) = match &self.command {
            Command::Serve { host, port } => (host.clone(), *port),
            _ => (None, None),
        };

        CliOverrides {
            http_timeout: self.http_timeout,
            user_agent: self.user_agent.clone(),
            log_level: self.log_level.clone(),
            bind_address,
            port,
            active_plugins: self.active_plugins.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_domain() {
        let cli = Cli::try_parse_from(["carbon-txt", "validate", "domain", "example.com"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Validate(ValidateTarget::Domain { ref domain, .. }) if domain == "example.com"
        ));
    }

    #[test]
    fn test_validate_file_from_stdin_with_json() {
        let cli = Cli::try_parse_from(["carbon-txt", "validate", "file", "-", "--json"]).unwrap();
        match cli.command {
            Command::Validate(ValidateTarget::File { path, output }) => {
                assert_eq!(path, "-");
                assert!(output.json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_become_overrides() {
        let cli = Cli::try_parse_from([
            "carbon-txt",
            "resolve",
            "example.com",
            "--http-timeout",
            "2.5",
            "--user-agent",
            "probe/1.0",
            "--active-plugins",
            "disclosure_validity,other",
        ])
        .unwrap();

        let overrides = cli.overrides();
        assert_eq!(overrides.http_timeout, Some(2.5));
        assert_eq!(overrides.user_agent.as_deref(), Some("probe/1.0"));
        assert_eq!(
            overrides.active_plugins,
            Some(vec!["disclosure_validity".to_string(), "other".to_string()])
        );
        assert_eq!(overrides.port, None);
    }

    #[test]
    fn test_serve_binding_overrides() {
        let cli = Cli::try_parse_from(["carbon-txt", "serve", "--host", "0.0.0.0", "-p", "9000"]).unwrap();

        let overrides = cli.overrides();
        assert_eq!(overrides.bind_address.as_deref(), Some("0.0.0.0"));
        assert_eq!(overrides.port, Some(9000));
    }

    #[test]
    fn test_schema_and_plugins_commands() {
        let schema = Cli::try_parse_from(["carbon-txt", "schema"]).unwrap();
        assert!(matches!(schema.command, Command::Schema));

        let plugins = Cli::try_parse_from([
            "carbon-txt",
            "plugins",
            "--active-plugins",
            "disclosure_validity",
        ])
        .unwrap();
        assert!(matches!(plugins.command, Command::Plugins));
        assert_eq!(
            plugins.overrides().active_plugins,
            Some(vec!["disclosure_validity".to_string()])
        );
    }

    #[test]
    fn test_subcommand_is_required() {
        assert!(Cli::try_parse_from(["carbon-txt"]).is_err());
    }
}
