//! Shared file writer for the file output layer

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::MakeWriter;

use crate::logger::config::FileConfig;
use crate::logger::error::LoggerError;

/// Cloneable handle to a single log file.
///
/// Each event writes through the mutex so lines from concurrent tasks never
/// interleave.
#[derive(Clone)]
pub struct LogFileWriter {
    file: Arc<Mutex<File>>,
}

impl LogFileWriter {
    /// Open the configured file, creating parent directories as needed.
    pub fn open(config: &FileConfig) -> Result<Self, LoggerError> {
        if let Some(parent) = config.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let mut options = OpenOptions::new();
        options.create(true);
        if config.append {
            options.append(true);
        } else {
            options.write(true).truncate(true);
        }

        Ok(Self {
            file: Arc::new(Mutex::new(options.open(&config.path)?)),
        })
    }
}

impl Write for LogFileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?
            .write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?
            .flush()
    }
}

impl<'a> MakeWriter<'a> for LogFileWriter {
    type Writer = LogFileWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::config::LogFormat;
    use tempfile::TempDir;

    fn file_config(dir: &TempDir, append: bool) -> FileConfig {
        FileConfig {
            enabled: true,
            path: dir.path().join("nested/dir/app.log"),
            append,
            format: LogFormat::Json,
        }
    }

    #[test]
    fn test_open_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let config = file_config(&dir, true);

        let mut writer = LogFileWriter::open(&config).unwrap();
        writer.write_all(b"first line\n").unwrap();
        writer.flush().unwrap();

        let content = std::fs::read_to_string(&config.path).unwrap();
        assert_eq!(content, "first line\n");
    }

    #[test]
    fn test_append_mode_keeps_existing_content() {
        let dir = TempDir::new().unwrap();
        let config = file_config(&dir, true);

        LogFileWriter::open(&config).unwrap().write_all(b"a\n").unwrap();
        LogFileWriter::open(&config).unwrap().write_all(b"b\n").unwrap();

        assert_eq!(std::fs::read_to_string(&config.path).unwrap(), "a\nb\n");
    }

    #[test]
    fn test_truncate_mode_discards_existing_content() {
        let dir = TempDir::new().unwrap();
        let config = file_config(&dir, false);

        LogFileWriter::open(&config).unwrap().write_all(b"old\n").unwrap();
        LogFileWriter::open(&config).unwrap().write_all(b"new\n").unwrap();

        assert_eq!(std::fs::read_to_string(&config.path).unwrap(), "new\n");
    }

    #[test]
    fn test_clones_share_the_same_file() {
        let dir = TempDir::new().unwrap();
        let config = file_config(&dir, true);

        let writer = LogFileWriter::open(&config).unwrap();
        writer.make_writer().write_all(b"one\n").unwrap();
        writer.make_writer().write_all(b"two\n").unwrap();

        assert_eq!(std::fs::read_to_string(&config.path).unwrap(), "one\ntwo\n");
    }
}
