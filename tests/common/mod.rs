#![allow(dead_code)]

pub use pollwatch_test_utils::builders;
pub use pollwatch_test_utils::clock::ManualClock;
pub use pollwatch_test_utils::fake_executor::FakeExecutor;
pub use pollwatch_test_utils::{init_tracing, with_timeout};

use std::fs::File;
use std::path::Path;
use std::time::{Duration, SystemTime};

/// Create (or overwrite) a file and back-date its mtime by `age`.
pub fn write_aged(path: &Path, age: Duration) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, b"content")?;
    let file = File::options().write(true).open(path)?;
    file.set_modified(SystemTime::now() - age)?;
    Ok(())
}
