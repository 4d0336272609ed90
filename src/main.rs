use std::env;
use std::process;

use pgfont::{load_font, Advance, LayoutParams, TextLayout};

// Line width from the command line, in whole pixels.
fn parse_width(arg: &str) -> Result<Advance, String> {
    let pixels = arg.parse::<u32>().map_err(|err| err.to_string())?;
    Advance::checked_from_pixels(pixels)
        .ok_or_else(|| format!("at most {} px is supported", u32::MAX / 64))
}

fn main() {
    if env::var(env_logger::DEFAULT_FILTER_ENV).is_err() {
        env::set_var(env_logger::DEFAULT_FILTER_ENV, "info");
    }
    env_logger::init();

    let args = env::args().skip(1).collect::<Vec<String>>();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: pgfont <font.pgf> <text-to-wrap> [width-px]");
        process::exit(1);
    }

    let mut params = LayoutParams::default();
    if let Some(width) = args.get(2) {
        match parse_width(width) {
            Ok(advance) => params.width = advance,
            Err(err) => {
                eprintln!("Invalid width {:?}: {}", width, err);
                process::exit(1);
            }
        }
    }

    let font = match load_font(&args[0]) {
        Ok(font) => font,
        Err(err) => {
            eprintln!("Error loading font: {}", err);
            process::exit(1);
        }
    };

    let lines = match TextLayout::new(&font).wrap(&args[1], &params) {
        Ok(lines) => lines,
        Err(err) => {
            eprintln!("Error wrapping text: {}", err);
            process::exit(1);
        }
    };

    for line in lines {
        println!(
            "{:?} ({}px x {}px)",
            line.text(),
            line.width().to_pixels(),
            line.height()
        );
    }
}
