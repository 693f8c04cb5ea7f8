use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use error_stack::Result;
use tracing::error;

use crate::commands::{assemble, eip712, native, SubCommand};
use crate::error::Error;
use crate::logging::LogFormat;

mod commands;
mod error;
mod logging;
mod settings;

#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Config files to merge, later files override earlier ones
    #[arg(short, long, default_values_os_t = vec![PathBuf::from("~/.bitbadges/config.toml"), PathBuf::from("config.toml")])]
    pub config: Vec<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    #[clap(subcommand)]
    pub cmd: SubCommand,
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.log_format);

    let log_format = args.log_format;
    match run(args) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(report) => {
            error!(err = %report.current_context(), "{report:#}");

            if log_format == LogFormat::Text {
                eprintln!("{report:?}");
            }

            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<String, Error> {
    let cfg = settings::load(&args.config)?;

    match args.cmd {
        SubCommand::Native(args) => native::run(cfg, args),
        SubCommand::Eip712(args) => eip712::run(cfg, args),
        SubCommand::Assemble(args) => assemble::run(cfg, args),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::Parser;

    use super::{run, Args};
    use crate::commands::SubCommand;
    use crate::error::Error;
    use crate::logging::LogFormat;

    fn native_args(config: &str) -> Args {
        Args::try_parse_from([
            "bitbadges-tx",
            "--config",
            config,
            "native",
            "--kind",
            "MsgSend",
            "--args",
            r#"{"amount": 1, "denom": "ubadge", "from": "a", "to": "b"}"#,
        ])
        .unwrap()
    }

    #[test]
    fn args_should_parse_the_native_subcommand() {
        let args = Args::try_parse_from([
            "bitbadges-tx",
            "-l",
            "json",
            "native",
            "--kind",
            "MsgSend",
            "--args",
            "{}",
        ])
        .unwrap();

        assert_eq!(args.log_format, LogFormat::Json);
        assert!(matches!(args.cmd, SubCommand::Native(_)));
        assert_eq!(
            args.config,
            vec![
                PathBuf::from("~/.bitbadges/config.toml"),
                PathBuf::from("config.toml")
            ]
        );
    }

    #[test]
    fn run_should_dispatch_to_the_subcommand() {
        assert!(run(native_args("no/such/config.toml")).is_ok());
    }

    #[test]
    fn run_should_stop_when_the_config_is_malformed() {
        let path = std::env::temp_dir().join(format!(
            "bitbadges-tx-{}-main-malformed.toml",
            std::process::id()
        ));
        std::fs::write(&path, "memo = [").unwrap();

        let err = run(native_args(path.to_str().unwrap())).unwrap_err();

        assert_eq!(err.current_context(), &Error::LoadConfig);

        std::fs::remove_file(path).unwrap();
    }
}
