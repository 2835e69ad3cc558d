mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "kube-dock",
    about = "Edit Dockerfile directives from the command line"
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite EXPOSE and append ENV / ADD / COPY directives
    Dockerfile {
        /// Path to the Dockerfile (default: [dockerfile].path in kube-dock.toml, else ./Dockerfile)
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,
        /// New EXPOSE port; empty leaves it unchanged
        #[arg(long, short = 'x', default_value = "")]
        expose: String,
        /// Append an ENV directive (KEY=VALUE, repeatable)
        #[arg(long = "addenv", short = 'e', value_name = "KEY=VALUE")]
        env: Vec<String>,
        /// Append an ADD directive (SRC=DST, repeatable)
        #[arg(long, short = 'a', value_name = "SRC=DST")]
        add: Vec<String>,
        /// Append a COPY directive (SRC=DST, repeatable)
        #[arg(long = "copyfile", short = 'p', value_name = "SRC=DST")]
        copy: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                // arch-lint: allow(no-silent-result-drop) reason="unset or invalid RUST_LOG falls back to the info level"
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Dockerfile {
            config,
            expose,
            env,
            add,
            copy,
        } => commands::dockerfile(config.as_deref(), &expose, env, add, copy)?,
    }

    Ok(())
}
