use std::path::PathBuf;

use clap::builder::TypedValueParser;
use clap::Parser;
use tracing_subscriber::filter::LevelFilter;

use crate::logging::parse_level;

/// rfgate: bridge GPIO inputs to RF transmit commands.
#[derive(Parser, Debug)]
#[command(name = "rfgate", version, about)]
pub struct Args {
    /// YAML file describing inputs, pins and commands.
    #[arg(long, default_value = rfgate_config::DEFAULT_INPUTS_FILE)]
    pub inputspins: PathBuf,

    /// Log level: DEBUG, INFO, WARNING, ERROR or CRITICAL.
    #[arg(long, default_value = "CRITICAL", value_parser = parse_level)]
    pub log: LevelFilter,

    /// Log file; logs go to the console when omitted or empty.
    #[arg(long, value_parser = clap::builder::OsStringValueParser::new().map(PathBuf::from))]
    pub logfile: Option<PathBuf>,

    /// Directory relative paths are resolved against (defaults to the
    /// executable's directory).
    #[arg(long)]
    pub base_dir: Option<PathBuf>,

    /// Seconds to wait after start before touching the hardware.
    #[arg(long, default_value_t = crate::boot::WARMUP.as_secs())]
    pub warmup: u64,
}

impl Args {
    /// Log file, treating an empty path as "console".
    pub fn logfile(&self) -> Option<&PathBuf> {
        self.logfile
            .as_ref()
            .filter(|p| !p.as_os_str().is_empty())
    }
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["rfgate"]).unwrap();
        assert_eq!(args.inputspins, PathBuf::from("inputs_pins_command.yml"));
        assert_eq!(args.log, LevelFilter::ERROR);
        assert!(args.logfile().is_none());
        assert!(args.base_dir.is_none());
        assert_eq!(args.warmup, 60);
    }

    #[test]
    fn all_options() {
        let args = Args::try_parse_from([
            "rfgate",
            "--inputspins",
            "/etc/rfgate/inputs.yml",
            "--log",
            "info",
            "--logfile",
            "rfgate.log",
            "--base-dir",
            "/opt/rfgate",
            "--warmup",
            "0",
        ])
        .unwrap();
        assert_eq!(args.inputspins, PathBuf::from("/etc/rfgate/inputs.yml"));
        assert_eq!(args.log, LevelFilter::INFO);
        assert_eq!(args.logfile(), Some(&PathBuf::from("rfgate.log")));
        assert_eq!(args.base_dir, Some(PathBuf::from("/opt/rfgate")));
        assert_eq!(args.warmup, 0);
    }

    #[test]
    fn empty_logfile_means_console() {
        let args = Args::try_parse_from(["rfgate", "--logfile", ""]).unwrap();
        assert!(args.logfile().is_none());
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        assert!(Args::try_parse_from(["rfgate", "--log", "LOUD"]).is_err());
    }
}
