use env_logger::{Builder, Env, Target};
use std::error::Error;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};

/// Duplicates every log line to the log file and stderr.
struct Tee {
    file: File,
}

impl Write for Tee {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write_all(buf)?;
        io::stderr().write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()?;
        io::stderr().flush()
    }
}

pub fn init(log_file: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
    let file = OpenOptions::new().create(true).append(true).open(log_file)?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(Tee { file })))
        .init();

    Ok(())
}
