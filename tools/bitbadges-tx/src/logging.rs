use clap::ValueEnum;

/// Log lines go to stderr; stdout carries the command output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

pub fn init(format: LogFormat) {
    let subscriber = tracing_subscriber::fmt().with_writer(std::io::stderr);

    match format {
        LogFormat::Json => subscriber.json().flatten_event(true).init(),
        LogFormat::Text => subscriber.compact().init(),
    }
}
