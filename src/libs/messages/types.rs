/// Every user-facing message ttrack prints.
///
/// Text lives in the `Display` impl in `display.rs`; call sites only pick a
/// variant and its parameters.
#[derive(Debug, Clone)]
pub enum Message {
    // === ENTRY MESSAGES ===
    EntryAdded(String),   // line
    NoEntriesFound(String), // timespan

    // === SUMMARY MESSAGES ===
    SummaryHeader(String), // timespan
    TimeLogParseFailed(String),

    // === EDIT MESSAGES ===
    EditorNotSet,
    EditorFailed(String), // status

    // === HOOK MESSAGES ===
    HookFailed(String, String), // name, reason

    // === INFO MESSAGES ===
    InfoConfigFile(String),
    InfoTimefile(String),
    InfoHookdir(String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved(String),
    ConfigDeleted(String),
    ConfigNotFound(String),
    ConfigWizardHeader(String),
    PromptTimefile,
    PromptHookdir,
    PromptLogLevel,
}
