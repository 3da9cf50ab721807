//! Dispatch of parsed commands to the range functions.

use crate::cli::Command;
use crate::models::{convert_cidrs, resolve_cidr, Interval};
use crate::output::{format_all, OutputMode};
use crate::processing::{check_membership, subtract};
use std::net::Ipv4Addr;
use std::process::ExitCode;

/// Text to show the user and whether the command succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub message: String,
    pub success: bool,
}

impl Report {
    pub fn success(message: impl Into<String>) -> Report {
        Report {
            message: message.into(),
            success: true,
        }
    }

    pub fn failure(message: impl Into<String>) -> Report {
        Report {
            message: message.into(),
            success: false,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.success {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

/// Run one command. Parse failures and "not in range" become failure reports.
pub fn execute(command: &Command, mode: OutputMode) -> Report {
    log::debug!("execute({command:?}, {mode:?})");
    match command {
        Command::Range {
            target,
            minrange,
            maxrange,
        } => check_range(*target, *minrange, *maxrange),
        Command::Cidr { target, range } => check_cidr(*target, range),
        Command::Convert { ranges } => convert(ranges, mode),
        Command::Subtract {
            minuend,
            subtrahend,
        } => subtract_cidr(minuend, subtrahend, mode),
    }
}

fn check_range(target: Ipv4Addr, min: Ipv4Addr, max: Ipv4Addr) -> Report {
    let membership = check_membership(&Interval::new(min, max), target);
    Report {
        message: membership.to_string(),
        success: membership.is_in_range(),
    }
}

fn check_cidr(target: Ipv4Addr, range: &str) -> Report {
    match resolve_cidr(range) {
        Ok(interval) => check_range(target, interval.min, interval.max),
        Err(e) => {
            log::warn!("cidr {range}: {e}");
            Report::failure(format!("Could not parse CIDR range: {e}"))
        }
    }
}

fn convert(ranges: &[String], mode: OutputMode) -> Report {
    match convert_cidrs(ranges) {
        Ok(intervals) => Report::success(format_all(&intervals, mode)),
        Err(e) => {
            log::warn!("convert {ranges:?}: {e}");
            Report::failure(format!("Could not parse CIDR range: {e}"))
        }
    }
}

fn subtract_cidr(minuend: &str, subtrahend: &str, mode: OutputMode) -> Report {
    let minuend = match resolve_cidr(minuend) {
        Ok(interval) => interval,
        Err(e) => return Report::failure(format!("Could not parse minuend CIDR: {e}")),
    };
    let subtrahend = match resolve_cidr(subtrahend) {
        Ok(interval) => interval,
        Err(e) => return Report::failure(format!("Could not parse subtrahend CIDR: {e}")),
    };
    Report::success(format_all(&subtract(minuend, subtrahend), mode))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ip(text: &str) -> Ipv4Addr {
        text.parse().unwrap()
    }

    #[test]
    fn test_execute_range() {
        let cmd = Command::Range {
            target: ip("10.0.0.5"),
            minrange: ip("10.0.0.1"),
            maxrange: ip("10.0.0.9"),
        };
        assert_eq!(
            execute(&cmd, OutputMode::Pair),
            Report::success("IP in range")
        );

        let cmd = Command::Range {
            target: ip("10.0.1.5"),
            minrange: ip("10.0.0.1"),
            maxrange: ip("10.0.0.9"),
        };
        assert_eq!(
            execute(&cmd, OutputMode::Pair),
            Report::failure("IP not in range")
        );
    }

    #[test]
    fn test_execute_cidr() {
        let cmd = Command::Cidr {
            target: ip("192.168.1.42"),
            range: "192.168.1.0/24".to_string(),
        };
        assert!(execute(&cmd, OutputMode::Pair).success);

        let cmd = Command::Cidr {
            target: ip("192.168.2.1"),
            range: "192.168.1.0/24".to_string(),
        };
        assert_eq!(
            execute(&cmd, OutputMode::Pair),
            Report::failure("IP not in range")
        );

        let cmd = Command::Cidr {
            target: ip("192.168.2.1"),
            range: "192.168.1.0/40".to_string(),
        };
        let report = execute(&cmd, OutputMode::Pair);
        assert!(!report.success);
        assert!(report.message.starts_with("Could not parse CIDR range"));
    }

    #[test]
    fn test_execute_convert() {
        let cmd = Command::Convert {
            ranges: vec!["10.0.0.0/24".to_string(), "10.1.0.0/16".to_string()],
        };
        assert_eq!(
            execute(&cmd, OutputMode::Pair),
            Report::success("10.0.0.0 - 10.0.0.255\n10.1.0.0 - 10.1.255.255")
        );
        assert_eq!(
            execute(&cmd, OutputMode::Boundaries),
            Report::success("10.0.0.0\n10.0.0.255\n10.1.0.0\n10.1.255.255")
        );

        let cmd = Command::Convert {
            ranges: vec!["10.0.0.0/24".to_string(), "10.1.0.0".to_string()],
        };
        let report = execute(&cmd, OutputMode::Pair);
        assert!(!report.success);
        assert!(report.message.starts_with("Could not parse CIDR range"));
    }

    #[test]
    fn test_execute_subtract() {
        let cmd = Command::Subtract {
            minuend: "10.0.0.0/24".to_string(),
            subtrahend: "10.0.0.64/26".to_string(),
        };
        assert_eq!(
            execute(&cmd, OutputMode::Pair),
            Report::success("10.0.0.0 - 10.0.0.63\n10.0.0.128 - 10.0.0.255")
        );

        let cmd = Command::Subtract {
            minuend: "10.0.0.0/24".to_string(),
            subtrahend: "10.0.0.0/24".to_string(),
        };
        assert_eq!(execute(&cmd, OutputMode::Pair), Report::success(""));
    }

    #[test]
    fn test_execute_subtract_bad_input() {
        let cmd = Command::Subtract {
            minuend: "10.0.0/24".to_string(),
            subtrahend: "10.0.0.64/26".to_string(),
        };
        let report = execute(&cmd, OutputMode::Pair);
        assert!(!report.success);
        assert!(report.message.starts_with("Could not parse minuend CIDR"));

        let cmd = Command::Subtract {
            minuend: "10.0.0.0/24".to_string(),
            subtrahend: "10.0.0.64".to_string(),
        };
        let report = execute(&cmd, OutputMode::Pair);
        assert!(!report.success);
        assert!(report.message.starts_with("Could not parse subtrahend CIDR"));
    }
}
