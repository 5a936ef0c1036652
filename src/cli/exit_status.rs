use std::process::ExitCode;

/// Exit status of a langsync invocation.
///
/// - `Success` (0): the command did what was asked
/// - `Failure` (1): the command ran but hit a reportable condition
///   (e.g. `lookup` found no translation, `init` found an existing config)
/// - `Error` (2): the command failed (store, loader, file system, config)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    pub fn from_success(ok: bool) -> Self {
        if ok { Self::Success } else { Self::Failure }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
