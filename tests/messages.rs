#[cfg(test)]
mod tests {
    use ttrack::libs::messages::Message;

    #[test]
    fn test_message_text() {
        assert_eq!(
            Message::EntryAdded("2024-03-04 1h x".into()).to_string(),
            "Added: 2024-03-04 1h x"
        );
        assert_eq!(
            Message::NoEntriesFound("today".into()).to_string(),
            "Nothing logged for today."
        );
        assert_eq!(
            Message::HookFailed("post-add".into(), "exit status: 1".into()).to_string(),
            "Hook 'post-add' failed: exit status: 1"
        );
        assert!(Message::EditorNotSet.to_string().contains("$EDITOR"));
    }
}
