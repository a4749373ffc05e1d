use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use nowplaying::{
    cli,
    config::{self, Settings},
    types::{ThemeStyle, ThemeType},
    warning,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the widget server
    Serve(ServeOptions),

    /// Print the track the widget would show right now
    Track,

    /// List available themes
    Themes,

    /// Render a single widget as SVG
    Render(RenderOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct ServeOptions {
    /// Address to bind, overrides SERVER_ADDRESS
    #[clap(long)]
    pub addr: Option<String>,

    /// Open the widget in the default browser once the server is up
    #[clap(long)]
    pub open: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct RenderOptions {
    /// Theme name
    #[clap(long, default_value = "default", value_parser = clap::value_parser!(ThemeType))]
    pub theme: ThemeType,

    /// Light or dark
    #[clap(long, default_value = "light", value_parser = clap::value_parser!(ThemeStyle))]
    pub style: ThemeStyle,

    /// Custom hex colour (default, vinyl and ipod only)
    #[clap(long)]
    pub color: Option<String>,

    /// Equalizer colour: hex, `rainbow` or `none`
    #[clap(long)]
    pub eq_color: Option<String>,

    /// Spin the album art
    #[clap(long)]
    pub spin: bool,

    /// Write to a file instead of stdout
    #[clap(long, short)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment file. Err: {}", e);
    }

    let cli = Cli::parse();
    let mut settings = Settings::from_env();

    match cli.command {
        Command::Serve(opt) => {
            if let Some(addr) = opt.addr {
                settings.server_addr = addr;
            }
            cli::serve(settings, opt.open).await
        }
        Command::Track => cli::track(settings).await,
        Command::Themes => cli::list_themes(),
        Command::Render(opt) => {
            cli::render(
                settings,
                cli::RenderOptions {
                    theme: Some(opt.theme.to_string()),
                    style: Some(opt.style.to_string()),
                    color: opt.color,
                    eq_color: opt.eq_color,
                    spin: opt.spin,
                    output: opt.output,
                },
            )
            .await
        }
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
