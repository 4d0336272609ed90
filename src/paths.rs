/// Module for finding paths to font files
use std::env;
use std::path::{Path, PathBuf};

// Environment variable holding extra directories to search for fonts, in the
// platform's usual path list syntax.
pub const FONT_PATH_VAR: &str = "PGF_FONT_PATH";
pub const DEFAULT_FONT_DIR: &str = "fonts";

lazy_static! {
    // The directories fonts are searched for in, worked out once per process.
    // Directories from $PGF_FONT_PATH come first, followed by ./fonts.
    static ref FONT_SEARCH_PATH: Vec<PathBuf> =
        font_search_path(env::var_os(FONT_PATH_VAR).as_deref());
}

fn font_search_path(env_value: Option<&std::ffi::OsStr>) -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = env_value
        .map(|value| {
            env::split_paths(value)
                .filter(|dir| !dir.as_os_str().is_empty())
                .collect()
        })
        .unwrap_or_default();
    dirs.push(PathBuf::from(DEFAULT_FONT_DIR));
    dirs
}

fn find_in_dirs(font_name: &str, dirs: &[PathBuf]) -> Option<PathBuf> {
    let direct = Path::new(font_name);
    if direct.is_file() {
        return Some(direct.to_path_buf());
    }

    let with_extension = format!("{}.pgf", font_name);
    dirs.iter()
        .flat_map(|dir| vec![dir.join(font_name), dir.join(&with_extension)])
        .find(|candidate| candidate.is_file())
}

/// Given a font name (like "ltn0" or "ltn0.pgf") or a path to a font file,
/// returns a path to the font if it can be found.
pub fn get_path_to_font(font_name: &str) -> Option<PathBuf> {
    find_in_dirs(font_name, &FONT_SEARCH_PATH)
}
