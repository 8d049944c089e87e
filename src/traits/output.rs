#[cfg(test)]
use std::sync::Mutex;

/// Output message captured by MockOutput for testing
#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub enum OutputMessage {
    Info(String),
    Debug(String),
    Error(String),
    Command(String),
}

/// Trait for run log output to enable testing with mocks
pub trait Output: Send + Sync {
    /// Print an info message
    fn info(&self, message: &str);

    /// Print a debug message (hidden unless debug logging is on)
    fn debug(&self, message: &str);

    /// Report a fatal error
    fn error(&self, message: &str);

    /// Issue a runner workflow command
    fn command(&self, command: &str, properties: &[(&str, &str)], message: &str);
}

/// Output for runs inside GitHub Actions, expressed as workflow commands
pub struct WorkflowOutput;

impl Output for WorkflowOutput {
    fn info(&self, message: &str) {
        println!("{}", message);
    }

    fn debug(&self, message: &str) {
        self.command("debug", &[], message);
    }

    fn error(&self, message: &str) {
        self.command("error", &[], message);
    }

    fn command(&self, command: &str, properties: &[(&str, &str)], message: &str) {
        println!(
            "{}",
            crate::output::format_command(command, properties, message)
        );
    }
}

/// Styled terminal output for local runs
pub struct TerminalOutput {
    debug: bool,
}

impl TerminalOutput {
    pub fn new(debug: bool) -> Self {
        Self { debug }
    }
}

impl Output for TerminalOutput {
    fn info(&self, message: &str) {
        crate::output::info(message);
    }

    fn debug(&self, message: &str) {
        if self.debug {
            crate::output::dimmed(message);
        }
    }

    fn error(&self, message: &str) {
        crate::output::error(message);
    }

    fn command(&self, command: &str, properties: &[(&str, &str)], message: &str) {
        println!(
            "{}",
            crate::output::format_command(command, properties, message)
        );
    }
}

/// Mock output implementation for testing (captures output)
#[cfg(test)]
pub struct MockOutput {
    messages: Mutex<Vec<OutputMessage>>,
}

#[cfg(test)]
impl MockOutput {
    /// Create new mock output
    pub fn new() -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
        }
    }

    /// Get all captured messages
    pub fn get_messages(&self) -> Vec<OutputMessage> {
        self.messages.lock().unwrap().clone()
    }

    /// Check if a specific message was output
    pub fn contains_message(&self, message: &OutputMessage) -> bool {
        self.messages.lock().unwrap().contains(message)
    }

    /// Get all info messages
    pub fn get_infos(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .filter_map(|m| {
                if let OutputMessage::Info(msg) = m {
                    Some(msg.clone())
                } else {
                    None
                }
            })
            .collect()
    }

    /// Get all issued workflow commands, rendered as the runner would see them
    pub fn get_commands(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .filter_map(|m| {
                if let OutputMessage::Command(line) = m {
                    Some(line.clone())
                } else {
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
impl Default for MockOutput {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl Output for MockOutput {
    fn info(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(OutputMessage::Info(message.to_string()));
    }

    fn debug(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(OutputMessage::Debug(message.to_string()));
    }

    fn error(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(OutputMessage::Error(message.to_string()));
    }

    fn command(&self, command: &str, properties: &[(&str, &str)], message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(OutputMessage::Command(crate::output::format_command(
                command, properties, message,
            )));
    }
}
