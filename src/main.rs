use art_gallery::{config, output, pipeline, scan};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "art-gallery")]
#[command(about = "Build a single-page static art gallery")]
#[command(long_about = "\
Build a single-page static art gallery

Every image in the images folder becomes a thumbnail in a responsive grid.
Clicking one opens it in a Lightbox overlay with its caption.

Project structure:

  project/
  ├── config.toml              # Optional settings (see gen-config)
  ├── captions.txt             # filename<TAB>caption, one per line
  ├── dist/                    # Lightbox2 release (css/, js/)
  ├── assets/                  # Extra files copied to the output root
  └── input/
      ├── intro.md             # Markdown shown above the gallery
      └── images/
          ├── dawn.jpg
          └── harbour.png

Gallery order: images listed in captions.txt come first, in file order;
the rest follow sorted by filename. Captions may use Markdown.

Run 'art-gallery gen-config' to print a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Project root holding config.toml, captions.txt and input/
    #[arg(long, default_value = ".", global = true)]
    source: PathBuf,

    /// Output directory (deleted and recreated on every build)
    #[arg(long, default_value = "output", global = true)]
    output: PathBuf,

    /// Log progress details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the gallery into the output directory
    Build,
    /// Validate inputs and show the gallery order without writing anything
    Check,
    /// Print the scanned manifest as JSON
    Scan,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match cli.command {
        Command::Build => {
            let site_config = config::load_config(&cli.source)?;
            println!("==> Building {} \u{2192} {}", cli.source.display(), cli.output.display());
            let report = pipeline::build(&cli.source, &cli.output, &site_config)?;
            output::print_build_output(&report);
            println!("Gallery generated successfully.");
        }
        Command::Check => {
            let site_config = config::load_config(&cli.source)?;
            println!("==> Checking {}", cli.source.display());
            let manifest = scan::scan(&cli.source, &site_config)?;
            output::print_scan_output(&manifest);
            println!("==> Inputs are valid");
        }
        Command::Scan => {
            let site_config = config::load_config(&cli.source)?;
            let manifest = scan::scan(&cli.source, &site_config)?;
            println!("{}", serde_json::to_string_pretty(&manifest)?);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
