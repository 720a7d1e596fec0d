//! Logger setup. The backend is picked by cargo feature: `sys` wins over
//! `env`, and `simple` is used only when neither is enabled.

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("logger already set {0}")]
    SetLogger(#[from] log::SetLoggerError),

    #[cfg(feature = "sys")]
    #[error("syslog error {0}")]
    Syslog(#[from] syslog::Error),
}

/// Installs the feature-selected logger for a binary's `main`. Panics if a
/// logger is already set.
///
/// ```
/// logger::init_logger!();
/// log::info!("starting");
/// assert!(logger::create_logger().is_err());
/// ```
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::create_logger().expect("init logger");
    };
}

/// Installs a logger that cooperates with the test harness's output capture.
/// Safe to call from every test.
pub fn init_test_logger() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Trace)
        .try_init();
}

#[cfg(all(feature = "simple", not(any(feature = "env", feature = "sys"))))]
pub mod simple {
    use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

    use crate::Error;

    pub fn create_logger() -> Result<(), Error> {
        TermLogger::init(
            LevelFilter::Info,
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        )?;
        Ok(())
    }
}

#[cfg(not(any(feature = "sys", all(feature = "simple", not(feature = "env")))))]
pub mod env {
    use crate::Error;

    /// Honours `RUST_LOG`.
    pub fn create_logger() -> Result<(), Error> {
        env_logger::try_init()?;
        Ok(())
    }
}

#[cfg(feature = "sys")]
pub mod sys {
    use log::LevelFilter;
    use syslog::Facility;

    use crate::Error;

    pub fn create_logger() -> Result<(), Error> {
        syslog::init(Facility::LOG_USER, LevelFilter::Trace, None)?;
        Ok(())
    }
}

#[cfg(all(feature = "simple", not(any(feature = "env", feature = "sys"))))]
pub use simple::*;

#[cfg(not(any(feature = "sys", all(feature = "simple", not(feature = "env")))))]
pub use env::*;

#[cfg(feature = "sys")]
pub use sys::*;
