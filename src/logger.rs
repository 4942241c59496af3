use std::io::{Result, Write};

/// Controls where logs for a specific channel are routed to
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Policy {
    Stdout,
    Stderr,
}

pub struct Policies {
    /// Count lines, one line per sorted file, and the summary.
    pub progress: Policy,
    /// The message printed when a run aborts.
    pub failure: Policy,
}

impl Default for Policies {
    fn default() -> Self {
        Self {
            progress: Policy::Stdout,
            failure: Policy::Stderr,
        }
    }
}

pub enum LogWriter<'a, OUT, ERR>
where
    OUT: Write,
    ERR: Write,
{
    Stdout(&'a mut OUT),
    Stderr(&'a mut ERR),
}
impl<'a, OUT, ERR> Write for LogWriter<'a, OUT, ERR>
where
    OUT: Write,
    ERR: Write,
{
    fn write(&mut self, bytes: &[u8]) -> Result<usize> {
        match self {
            Self::Stdout(w) => w.write(bytes),
            Self::Stderr(w) => w.write(bytes),
        }
    }

    fn flush(&mut self) -> Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::Stderr(w) => w.flush(),
        }
    }
}

pub struct Logger<'a, OUT, ERR>
where
    OUT: Write,
    ERR: Write,
{
    pub stdout: &'a mut OUT,
    pub stderr: &'a mut ERR,
    pub pol: Policies,
}

impl<'a, OUT, ERR> Logger<'a, OUT, ERR>
where
    OUT: Write,
    ERR: Write,
{
    pub fn new(stdout: &'a mut OUT, stderr: &'a mut ERR) -> Self {
        Self {
            stdout,
            stderr,
            pol: Policies::default(),
        }
    }

    fn lw_for(&mut self, pol: Policy) -> LogWriter<'_, OUT, ERR> {
        match pol {
            Policy::Stdout => LogWriter::Stdout(self.stdout),
            Policy::Stderr => LogWriter::Stderr(self.stderr),
        }
    }

    pub fn progress(&mut self) -> LogWriter<'_, OUT, ERR> {
        self.lw_for(self.pol.progress)
    }

    pub fn failure(&mut self) -> LogWriter<'_, OUT, ERR> {
        self.lw_for(self.pol.failure)
    }
}
