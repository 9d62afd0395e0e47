use clap::{Parser, Subcommand};
use ratio_crop::config::{self, CropConfig, Overrides};
use ratio_crop::crop::{self, CropError, CropRequest};
use ratio_crop::imaging::{AspectRatio, RustBackend};
use ratio_crop::output;
use ratio_crop::selection::{Notification, PromptSelection, SelectionUi};
use std::path::PathBuf;
use std::process::ExitCode;

fn version_string() -> &'static str {
    let on_tag = env!("RATIO_CROP_ON_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("RATIO_CROP_GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once; clap needs a static string
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

/// Ratio and quality flags shared by the commands that crop.
#[derive(clap::Args, Clone, Default)]
struct CropArgs {
    /// Target aspect ratio: 1:1 (square) or 3:2 (standard)
    #[arg(long, short)]
    ratio: Option<AspectRatio>,

    /// JPEG quality (1-100); other formats are written losslessly
    #[arg(long, short)]
    quality: Option<u32>,
}

impl CropArgs {
    fn overrides(&self) -> Overrides {
        Overrides {
            ratio: self.ratio,
            quality: self.quality,
        }
    }
}

#[derive(Parser)]
#[command(name = "ratio-crop")]
#[command(about = "Center-crop a photo to 1:1 or 3:2")]
#[command(long_about = "\
Center-crop a photo to 1:1 or 3:2

The largest centered region with the target ratio is kept and written next
to the source as <name>_cropped.<ext>. For 3:2 the full width is kept when
possible, otherwise the full height.

  photos/dawn.jpg (4032x3024) --ratio 1:1 → photos/dawn_cropped.jpg (3024x3024)
  photos/dawn.jpg (4032x3024) --ratio 3:2 → photos/dawn_cropped.jpg (4032x2688)

Without a command, the image and ratio are asked for interactively.
Run 'ratio-crop gen-config' to generate a documented config file.")]
#[command(version = version_string())]
struct Cli {
    /// Config file (TOML). No file is read unless given.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Crop one image
    Crop {
        /// Image to crop
        path: PathBuf,
        #[command(flatten)]
        args: CropArgs,
        /// Output path (default: <name>_cropped.<ext> next to the source)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Print the crop rectangle without writing anything
    Plan {
        /// Image to inspect
        path: PathBuf,
        /// Target aspect ratio: 1:1 (square) or 3:2 (standard)
        #[arg(long, short)]
        ratio: Option<AspectRatio>,
        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },
    /// Pick the image and ratio interactively (the default)
    Select {
        #[command(flatten)]
        args: CropArgs,
        /// Use native file and message dialogs
        #[cfg(feature = "dialog")]
        #[arg(long)]
        dialog: bool,
    },
    /// Print a stock config file with all options documented
    GenConfig,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Select {
        args: CropArgs::default(),
        #[cfg(feature = "dialog")]
        dialog: false,
    });

    let mut ui = make_ui(&command);
    match run(cli.config, command, ui.as_mut()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let cancelled = err.is_cancellation();
            ui.notify(&err.into_notification());
            if cancelled {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

#[cfg(feature = "dialog")]
fn make_ui(command: &Command) -> Box<dyn SelectionUi> {
    match command {
        Command::Select { dialog: true, .. } => {
            Box::new(ratio_crop::selection::DialogSelection::new())
        }
        _ => Box::new(PromptSelection::stdio()),
    }
}

#[cfg(not(feature = "dialog"))]
fn make_ui(_command: &Command) -> Box<dyn SelectionUi> {
    Box::new(PromptSelection::stdio())
}

/// Run one command. Errors are reported once by the caller.
fn run(
    config_path: Option<PathBuf>,
    command: Command,
    ui: &mut dyn SelectionUi,
) -> Result<(), CropError> {
    let backend = RustBackend::new();
    let base = config::load_config(config_path.as_deref())?;

    match command {
        Command::Crop { path, args, output } => {
            let config = base.with_overrides(&args.overrides())?;
            let request = CropRequest {
                output,
                ..CropRequest::new(path, config.ratio)
            };
            let plan = crop::run_crop(&backend, &config, &request)?;
            ui.notify(&Notification::Success(plan));
        }
        Command::Plan { path, ratio, json } => {
            let config: CropConfig = base.with_overrides(&Overrides {
                ratio,
                quality: None,
            })?;
            let plan = crop::run_plan(&backend, &config, &CropRequest::new(path, config.ratio))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else {
                output::print_plan(&plan);
            }
        }
        Command::Select { args, .. } => {
            let config = base.with_overrides(&args.overrides())?;
            let plan = crop::run_interactive(&backend, ui, &config, args.ratio)?;
            ui.notify(&Notification::Success(plan));
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
