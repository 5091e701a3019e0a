mod settings;

pub use settings::{Dashboard, Logger, Server, Settings};

use std::path::PathBuf;
use std::{env, io};

pub(crate) fn normalize_path(path: &str) -> io::Result<PathBuf> {
    let path_buf = PathBuf::from(path);

    Ok(if path_buf.is_absolute() {
        path_buf
    } else {
        env::current_dir()?.join(&path_buf)
    })
}
