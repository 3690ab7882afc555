//! Outbound notifications raised after a drop.

/// Payload of `on_process`: files that passed both checks.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessResult<F> {
    pub accepted_files: Vec<F>,
}

/// Payload of `on_error`: files rejected by the size check and by the type
/// check.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorResult<F> {
    pub invalid_size_files: Vec<F>,
    pub invalid_type_files: Vec<F>,
}

impl<F> ErrorResult<F> {
    pub fn rejected_count(&self) -> usize {
        self.invalid_size_files.len() + self.invalid_type_files.len()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DropNotification<F> {
    Process(ProcessResult<F>),
    Error(ErrorResult<F>),
}

impl<F> DropNotification<F> {
    /// Event name a web host would listen for.
    pub fn event_name(&self) -> &'static str {
        match self {
            DropNotification::Process(_) => "on-process",
            DropNotification::Error(_) => "on-error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_names() {
        let process: DropNotification<()> = DropNotification::Process(ProcessResult {
            accepted_files: vec![],
        });
        let error: DropNotification<()> = DropNotification::Error(ErrorResult {
            invalid_size_files: vec![(), ()],
            invalid_type_files: vec![()],
        });
        assert_eq!(process.event_name(), "on-process");
        assert_eq!(error.event_name(), "on-error");
        if let DropNotification::Error(result) = error {
            assert_eq!(result.rejected_count(), 3);
        }
    }
}
