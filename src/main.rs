use clap::Parser;
use img2pdf::config::ScaleConfig;
use img2pdf::{batch, output};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

/// Release builds report the package version; anything else carries the
/// short git hash so a bug report can name the exact commit.
fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "img2pdf")]
#[command(about = "Convert directories of scanned page images into multi-page PDFs")]
#[command(long_about = "\
Convert directories of scanned page images into multi-page PDFs

Each directory becomes one PDF next to it (scans/book → scans/book.pdf),
one page per image, pages ordered by file name (case-insensitive, extension
included — use zero-padded numbering for sequential pages). Supported
image formats: bmp, gif, jpg, jpeg, png, tif, tiff; a directory must
contain at least two.

Pages are downscaled by the divisor and sized so they keep their physical
dimensions: scans made at --dpi and divided by --divisor produce pages at
dpi/divisor resolution. Both settings are prompted for when not given.

All directories are validated before any conversion starts. A conversion
failure in one directory is reported and skipped; the rest of the batch
still runs.")]
#[command(version = version_string())]
struct Cli {
    /// Source directories of scanned page images
    dirs: Vec<PathBuf>,

    /// Resolution of the original scans in DPI (prompted for when omitted)
    #[arg(long)]
    dpi: Option<f64>,

    /// Factor to divide image dimensions by (prompted for when omitted)
    #[arg(long)]
    divisor: Option<f64>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.dirs.is_empty() {
        println!("Usage: img2pdf <directory>...");
        println!("Run 'img2pdf --help' for details.");
        return ExitCode::SUCCESS;
    }

    let (dpi, divisor) = match resolve_settings(&cli) {
        Ok(values) => values,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };
    let scale = match ScaleConfig::new(dpi, divisor) {
        Ok(scale) => scale,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let (tx, rx) = std::sync::mpsc::channel();
    let printer = std::thread::spawn(move || {
        for event in rx {
            for line in output::format_event(&event) {
                println!("{line}");
            }
        }
    });

    let result = batch::run(&cli.dirs, &scale, Some(&tx));
    drop(tx);
    printer.join().unwrap();

    match result {
        Ok(summary) => {
            output::print_summary(&summary);
            if summary.all_completed() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Take scale settings from flags when present, otherwise prompt for them.
fn resolve_settings(cli: &Cli) -> std::io::Result<(f64, f64)> {
    let dpi = match cli.dpi {
        Some(value) => value,
        None => prompt_positive("Resolution of original images (DPI)")?,
    };
    let divisor = match cli.divisor {
        Some(value) => value,
        None => prompt_positive("Divide image dimensions by")?,
    };
    Ok((dpi, divisor))
}

/// Prompt on stdin until a positive finite number is entered.
fn prompt_positive(label: &str) -> std::io::Result<f64> {
    loop {
        print!("{label}: ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if std::io::stdin().read_line(&mut line)? == 0 {
            // stdin closed; retrying forever would spin
            return Err(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                format!("no input for '{label}'"),
            ));
        }
        match line.trim().parse::<f64>() {
            Ok(value) if value.is_finite() && value > 0.0 => return Ok(value),
            _ => continue,
        }
    }
}
