use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;
use orst_viz::{ExportArgs, PlayArgs, SummaryArgs};

#[derive(Parser)]
#[command(author, version, about, long_about = None, styles=get_styles())] // Read from `Cargo.toml`
struct Cli {
    /// Log more (-v info, -vv debug, -vvv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    commands: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Step through a sorting algorithm in the terminal
    Play(PlayArgs),

    /// Export the steps of a sorting algorithm to a document
    Export(ExportArgs),

    /// Compare how many steps and comparisons each algorithm takes
    Summary(SummaryArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match cli.commands {
        Commands::Play(play_args) => play_args.run(),
        Commands::Export(export_args) => export_args.run(),
        Commands::Summary(summary_args) => summary_args.run(),
    }
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn get_styles() -> clap::builder::Styles {
    use anstyle::{AnsiColor, Color, Style};

    let color = |ansi: AnsiColor| Some(Color::Ansi(ansi));
    clap::builder::Styles::styled()
        .usage(
            Style::new()
                .bold()
                .underline()
                .fg_color(color(AnsiColor::Magenta)),
        )
        .header(Style::new().bold().fg_color(color(AnsiColor::Magenta)))
        .literal(Style::new().fg_color(color(AnsiColor::Green)))
        .invalid(Style::new().bold().fg_color(color(AnsiColor::Red)))
        .error(Style::new().bold().fg_color(color(AnsiColor::Red)))
        .valid(
            Style::new()
                .bold()
                .underline()
                .fg_color(color(AnsiColor::Cyan)),
        )
        .placeholder(Style::new().fg_color(color(AnsiColor::Yellow)))
}
