use clap::{Args, Parser, Subcommand};

/// argolens — Argo CD application image viewer
#[derive(Parser, Debug)]
#[command(name = "argolens", version, about)]
pub struct Cli {
    /// Argo CD server URL (e.g., https://argocd.example.com)
    #[arg(long, env = "ARGOLENS_SERVER")]
    pub server: String,

    /// Bearer token passed through to the Argo CD API
    #[arg(long, env = "ARGOLENS_TOKEN")]
    pub token: Option<String>,

    /// Accept invalid TLS certificates (self-signed servers)
    #[arg(long, default_value_t = false)]
    pub insecure: bool,

    /// Keep applications whose name, image name, or image version contains this text
    #[arg(long)]
    pub filter: Option<String>,

    /// Keep applications with an image reference matching this regex
    #[arg(long)]
    pub pattern: Option<String>,

    /// Keep applications with this health status (e.g., Healthy, Degraded)
    #[arg(long)]
    pub health: Option<String>,

    /// Verbose output
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show each application with its container images
    List,
    /// Show the unique container images across all applications
    Images,
    /// Poll the server and re-render on an interval
    Watch(WatchArgs),
}

#[derive(Args, Debug)]
pub struct WatchArgs {
    /// Refresh interval in seconds
    #[arg(long, default_value_t = 300)]
    pub interval: u64,
}
