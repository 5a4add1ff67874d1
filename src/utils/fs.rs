use std::fs;
use std::io::Read;
use std::path::Path;
use std::time::SystemTime;

use crate::utils::error::BoxResult;

/// Read a file to string
pub fn read_file<P: AsRef<Path>>(path: P) -> BoxResult<String> {
    let mut file = fs::File::open(path.as_ref())?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Update a file's modification timestamp so an external watcher picks it up.
///
/// Failure to update the timestamp is swallowed and treated as "file does not
/// exist": the fallback creates an empty file instead. A failure of the
/// fallback itself propagates.
pub fn touch_file<P: AsRef<Path>>(path: P) -> BoxResult<()> {
    let touched = fs::File::options()
        .write(true)
        .open(path.as_ref())
        .and_then(|file| file.set_modified(SystemTime::now()));

    if touched.is_err() {
        fs::File::create(path.as_ref())?;
    }

    Ok(())
}
