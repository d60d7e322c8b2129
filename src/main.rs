use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::info;
use tcw_place::url::Url;
use tcw_place::{defend, CanvasConfig, Coordinate, DefendOptions, RemoteCanvas, Unifont};

#[derive(Parser)]
#[command(name = "tcw-place", version, about = "Draw on a shared pixel canvas")]
struct Cli {
    /// TOML config file; defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Base address of the canvas service, overriding the config.
    #[arg(long)]
    url: Option<Url>,

    /// Keep repeating the command.
    #[arg(long)]
    defend: bool,

    /// Pause between repetitions, in milliseconds.
    #[arg(long, requires = "defend")]
    delay: Option<u64>,

    /// Number of repetitions.
    #[arg(long, requires = "defend")]
    retries: Option<u32>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the raw board state.
    Board,
    /// Paint the whole canvas.
    Clear { color: String },
    Pixel { x: i32, y: i32, color: String },
    /// Fill the rectangle from (x0, y0) up to but excluding (x1, y1).
    Rect {
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: String,
    },
    Text {
        text: String,
        x: i32,
        y: i32,
        color: String,
        #[arg(long)]
        background: Option<String>,
    },
    /// Render every line of a text file.
    File {
        path: PathBuf,
        x: i32,
        y: i32,
        color: String,
        #[arg(long)]
        background: Option<String>,
    },
}

async fn run(canvas: &RemoteCanvas, command: &Command) -> tcw_place::Result<()> {
    match command {
        Command::Board => {
            println!("{}", canvas.get_board().await?);
        }
        Command::Clear { color } => canvas.clear(color).await?,
        Command::Pixel { x, y, color } => {
            canvas
                .render_pixel(Coordinate::new(*x, *y), color)
                .await?
        }
        Command::Rect {
            x0,
            y0,
            x1,
            y1,
            color,
        } => {
            canvas
                .render_rectangle(Coordinate::new(*x0, *y0), Coordinate::new(*x1, *y1), color)
                .await?
        }
        Command::Text {
            text,
            x,
            y,
            color,
            background,
        } => {
            canvas
                .render_text(
                    text,
                    Coordinate::new(*x, *y),
                    &Unifont,
                    color,
                    background.as_deref(),
                )
                .await?
        }
        Command::File {
            path,
            x,
            y,
            color,
            background,
        } => {
            canvas
                .render_lines_from_file(
                    path,
                    Coordinate::new(*x, *y),
                    &Unifont,
                    color,
                    background.as_deref(),
                )
                .await?
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => CanvasConfig::load(path)?,
        None => CanvasConfig::default(),
    };
    if let Some(url) = cli.url.clone() {
        config.base_url = url;
    }
    let mut options = DefendOptions::from(config.defend);
    if let Some(delay) = cli.delay {
        options.delay = std::time::Duration::from_millis(delay);
    }
    if let Some(retries) = cli.retries {
        options.retries = retries;
    }

    info!("drawing on {}", config.base_url);
    let canvas = RemoteCanvas::new(config)?;
    let canvas = &canvas;
    let command = &cli.command;
    if cli.defend {
        info!(
            "defending every {:?}, {} times",
            options.delay, options.retries
        );
        defend(|| run(canvas, command), options).await?;
    } else {
        run(canvas, command).await?;
    }
    info!("done");
    Ok(())
}
