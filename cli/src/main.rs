use clap::{CommandFactory, Parser};
use img2ascii::{DEFAULT_RAMP, ProcessingConfig, convert_file};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "img2ascii")]
#[command(about = "ASCII art converter")]
#[command(long_about = "\
Converts ordinary raster images (PNG, JPEG, GIF, ...) into ASCII art.

The image is resized to the requested width, sharpened and tone-adjusted,
then each pixel is mapped to a character from a brightness-ordered ramp
and written to the output file, one line per row.")]
struct Cli {
    /// Path to the source image
    source: Option<PathBuf>,

    /// Width of the output in columns
    #[arg(long, short = 'w', alias = "wx", default_value_t = 80)]
    width: u32,

    /// Height of the output in rows (0 = derive from width)
    #[arg(long, alias = "hx", default_value_t = 0)]
    height: u32,

    /// Preprocessing sharpening strength
    #[arg(long = "sharp", short = 's', alias = "vs", default_value_t = 5.0)]
    sharp: f64,

    /// Preprocessing brightness adjustment, in percent
    #[arg(long = "bright", short = 'b', alias = "vb", default_value_t = 5.0)]
    bright: f64,

    /// Preprocessing contrast adjustment, in percent
    #[arg(long, short = 'c', alias = "vc", default_value_t = 75.0)]
    contrast: f64,

    /// Destination file, created or truncated
    #[arg(long = "outputFilePath", short = 'o', default_value = "./output.txt")]
    output_file_path: PathBuf,

    /// Override the character ramp, darkest character first
    #[arg(long = "grayScaleAsciTable", default_value = DEFAULT_RAMP)]
    gray_scale_asci_table: String,

    /// Also stream the output to the terminal
    #[arg(long, short = 't')]
    term: bool,
}

impl Cli {
    fn processing_config(&self) -> ProcessingConfig {
        ProcessingConfig {
            width: self.width,
            height: self.height,
            sharpen: self.sharp,
            brightness: self.bright,
            contrast: self.contrast,
            ramp: self.gray_scale_asci_table.clone(),
        }
        .with_defaults()
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();

    // No source image: show help, exit cleanly
    let Some(source) = &cli.source else {
        let _ = Cli::command().print_help();
        return ExitCode::SUCCESS;
    };

    let config = cli.processing_config();
    if let Err(err) = convert_file(source, &cli.output_file_path, &config, cli.term) {
        log::error!("{err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
