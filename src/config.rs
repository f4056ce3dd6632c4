//! Server configuration, read from command-line flags or environment.

use clap::Parser;

/// Runtime settings for the `student-registry` server.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "student-registry", version, about = "In-memory student record service", long_about = None)]
pub struct ServerConfig {
    /// Interface to bind.
    #[arg(long, env = "STUDENT_REGISTRY_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind.
    #[arg(short, long, env = "STUDENT_REGISTRY_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Start with an empty store instead of the seed record.
    #[arg(long, env = "STUDENT_REGISTRY_NO_SEED", default_value_t = false)]
    pub no_seed: bool,

    /// Default to debug-level logs when `RUST_LOG` is unset.
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl ServerConfig {
    /// The `host:port` string to bind.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Log filter used when `RUST_LOG` is not set.
    pub fn default_log_filter(&self) -> &'static str {
        if self.verbose {
            "student_registry=debug"
        } else {
            "student_registry=info"
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            no_seed: false,
            verbose: false,
        }
    }
}
