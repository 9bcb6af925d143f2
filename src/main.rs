use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tricrop::batch::{self, FailurePolicy};
use tricrop::config::ExportConfig;
use tricrop::imaging::RustBackend;
use tricrop::output;

#[derive(Parser)]
#[command(name = "tricrop")]
#[command(about = "Cut a banner into left, center and right square slots")]
#[command(long_about = "\
Cut a banner into left, center and right square slots

Each source is cropped to three fixed slots sized for a ~1280px wide banner
and every slot is resized to 450x450. For a source at DIR/name.ext, output
goes to DIR/name/:

  DIR/name/
  ├── name-1.png            # Left slot
  ├── name-1.jpg
  ├── name-1_ellipse.png    # Left slot, elliptical cutout with alpha
  ├── name-2.png            # Center slot
  ├── ...
  └── name-3_ellipse.png    # Right slot

Slot rectangles (left, top, right, bottom):
  Left:   328, 3,  778, 454
  Center: 556, 3, 1005, 454
  Right:  782, 3, 1232, 454

A source too small for a slot is an error; slots already written stay.
Failures are printed to stderr as `[file] Failed: <reason>` and make the
exit status non-zero.")]
#[command(version)]
struct Cli {
    /// Source images, processed in order
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Continue with the next file when one fails (exit status is still non-zero)
    #[arg(long)]
    keep_going: bool,

    /// Print a JSON report of written files instead of progress lines
    #[arg(long)]
    json: bool,

    /// Suppress progress lines
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let policy = if cli.keep_going {
        FailurePolicy::KeepGoing
    } else {
        FailurePolicy::Abort
    };
    let quiet = cli.quiet || cli.json;

    let outcome = batch::run_batch(
        &RustBackend::new(),
        &cli.files,
        &ExportConfig::default(),
        policy,
        |event| output::print_batch_event(&event, quiet),
    );

    if cli.json {
        println!("{}", output::format_json_report(&outcome.reports)?);
    } else if !cli.quiet {
        output::print_summary(&outcome);
    }

    Ok(if outcome.succeeded() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
