use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed; parse errors alone do not fail a run
/// - `Error` (2): Command failed due to internal error (config error, invalid arguments)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_code_values() {
        assert_eq!(
            format!("{:?}", ExitCode::from(ExitStatus::Success)),
            format!("{:?}", ExitCode::from(0u8))
        );
        assert_eq!(
            format!("{:?}", ExitCode::from(ExitStatus::Error)),
            format!("{:?}", ExitCode::from(2u8))
        );
    }
}
