use std::env;
use std::process;

use pgfont::load_font;

// Shades from lightest to darkest for printing 8 bit samples.
const SHADES: &[u8] = b" .:-=+*#%@";

fn shade(sample: u8) -> char {
    SHADES[sample as usize * (SHADES.len() - 1) / 255] as char
}

fn main() {
    if env::var(env_logger::DEFAULT_FILTER_ENV).is_err() {
        env::set_var(env_logger::DEFAULT_FILTER_ENV, "info");
    }
    env_logger::init();

    let args = env::args().skip(1).collect::<Vec<String>>();
    if args.len() != 2 || args[1].chars().count() != 1 {
        eprintln!("Usage: print_glyph <font.pgf> <character>");
        process::exit(1);
    }

    let font = match load_font(&args[0]) {
        Ok(font) => font,
        Err(err) => {
            eprintln!("Error loading font: {}", err);
            process::exit(1);
        }
    };

    let chr = args[1].chars().next().unwrap_or(' ');
    let glyph = match font.glyph_for_char(chr) {
        Ok(glyph) => glyph,
        Err(err) => {
            eprintln!("Error decoding {:?}: {}", chr, err);
            process::exit(1);
        }
    };

    println!("{:?} in {}", chr, font.font_name());
    println!("{:?}", glyph.char_info());
    println!("{:?}", glyph.glyph_info());
    for row in glyph.bitmap().rows() {
        let line: String = row.iter().map(|&sample| shade(sample)).collect();
        println!("|{}|", line);
    }
}
