use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === ENTRY MESSAGES ===
            Message::EntryAdded(line) => format!("Added: {}", line),
            Message::NoEntriesFound(timespan) => format!("Nothing logged for {}.", timespan),

            // === SUMMARY MESSAGES ===
            Message::SummaryHeader(timespan) => format!("Summary for {}", timespan),
            Message::TimeLogParseFailed(error) => format!("Could not read the time log: {}", error),

            // === EDIT MESSAGES ===
            Message::EditorNotSet => {
                "No editor configured. Pass --editor or set $EDITOR.".to_string()
            }
            Message::EditorFailed(status) => format!("Editor exited with {}", status),

            // === HOOK MESSAGES ===
            Message::HookFailed(name, reason) => format!("Hook '{}' failed: {}", name, reason),

            // === INFO MESSAGES ===
            Message::InfoConfigFile(path) => format!("config:   {}", path),
            Message::InfoTimefile(path) => format!("timefile: {}", path),
            Message::InfoHookdir(path) => format!("hookdir:  {}", path),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved(path) => format!("Configuration saved to {}", path),
            Message::ConfigDeleted(path) => format!("Configuration {} removed", path),
            Message::ConfigNotFound(path) => format!("No configuration at {}", path),
            Message::ConfigWizardHeader(path) => format!("Configuring ttrack ({})", path),
            Message::PromptTimefile => "Time log file".to_string(),
            Message::PromptHookdir => "Hook directory".to_string(),
            Message::PromptLogLevel => "Log level (error, warn, info, debug, trace)".to_string(),
        };
        write!(f, "{}", text)
    }
}
