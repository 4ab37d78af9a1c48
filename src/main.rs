use clap::{Parser, Subcommand};
use sortlab_engine::SortArgs;

#[derive(Parser)]
#[command(author, version, about, long_about = None, styles=get_styles())] // Read from `Cargo.toml`
struct Cli {
    #[command(subcommand)]
    commands: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Instrumented sorting algorithms
    Sort(SortArgs),
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr, filtered by RUST_LOG (e.g. `RUST_LOG=sortlab_engine=debug`).
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init();

    let cli = Cli::parse();

    match cli.commands {
        Commands::Sort(sort_args) => sort_args.run(),
    }
}

fn get_styles() -> clap::builder::Styles {
    use anstyle::{AnsiColor, Style};

    let heading = Style::new().bold().fg_color(Some(AnsiColor::Blue.into()));

    clap::builder::Styles::styled()
        .header(heading)
        .usage(heading.underline())
        .literal(Style::new().fg_color(Some(AnsiColor::Green.into())))
        .placeholder(Style::new().fg_color(Some(AnsiColor::Yellow.into())))
}

#[test]
fn verify_cli() {
    use clap::CommandFactory;
    Cli::command().debug_assert()
}

#[test]
fn parses_sort_commands() {
    let cli = Cli::try_parse_from(["sortlab", "sort", "run", "-a", "merge", "3,-1,2"]);
    assert!(cli.is_ok());

    let cli = Cli::try_parse_from(["sortlab", "sort", "demo", "--input", "1,2", "--random", "5"]);
    assert!(cli.is_err());

    let cli = Cli::try_parse_from(["sortlab", "sort", "run", "-a", "bogo", "1,2"]);
    assert!(cli.is_err());

    let cli = Cli::try_parse_from(["sortlab", "sort", "demo", "--preset", "reverse"]);
    assert!(cli.is_ok());

    let cli = Cli::try_parse_from(["sortlab", "sort", "demo", "--preset", "tiny", "-r", "4"]);
    assert!(cli.is_err());
}
