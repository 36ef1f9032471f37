use tracing::level_filters::LevelFilter;

// Recognized verbosity levels for the command line driver
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    Debug,
    #[default]
    Off,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Off => LevelFilter::OFF,
        }
    }
}

pub type InitError = Box<dyn std::error::Error + Send + Sync + 'static>;

// Install the global subscriber. Events go to stderr so stdout only carries results.
pub fn init(level: LogLevel) -> Result<(), InitError> {
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::from(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
}
