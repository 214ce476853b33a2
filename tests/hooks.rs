#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use ttrack::libs::hooks::{matching_hooks, run_hooks, HookEvent};

    fn hooks(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_hooks_match_by_prefix_in_name_order() {
        let hooks = hooks(&[
            ("post-edit", "echo edited"),
            ("post-add-02-push", "git push"),
            ("post-add-01-commit", "git commit"),
            ("pre-edit", "git pull"),
        ]);
        let names: Vec<&str> = matching_hooks(&hooks, HookEvent::PostAdd)
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, vec!["post-add-01-commit", "post-add-02-push"]);
        assert_eq!(matching_hooks(&hooks, HookEvent::PreEdit), vec![("pre-edit", "git pull")]);
        assert!(matching_hooks(&BTreeMap::new(), HookEvent::PostEdit).is_empty());
    }

    #[test]
    fn test_event_prefixes() {
        assert_eq!(HookEvent::PostAdd.to_string(), "post-add");
        assert_eq!(HookEvent::PreEdit.prefix(), "pre-edit");
        assert_eq!(HookEvent::PostEdit.prefix(), "post-edit");
    }

    #[cfg(unix)]
    #[test]
    fn test_hooks_run_in_hook_directory() {
        let dir = tempfile::tempdir().unwrap();
        let hooks = hooks(&[
            ("post-add-01", "echo first > order.txt"),
            ("post-add-02", "echo second >> order.txt"),
            ("pre-edit", "touch never.txt"),
        ]);
        let runs = run_hooks(&hooks, HookEvent::PostAdd, dir.path());
        assert_eq!(runs.len(), 2);
        assert!(runs.iter().all(|run| run.success));
        let order = std::fs::read_to_string(dir.path().join("order.txt")).unwrap();
        assert_eq!(order, "first\nsecond\n");
        assert!(!dir.path().join("never.txt").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_hook_does_not_stop_the_rest() {
        let dir = tempfile::tempdir().unwrap();
        let hooks = hooks(&[("post-edit-01", "exit 3"), ("post-edit-02", "touch ran.txt")]);
        let runs = run_hooks(&hooks, HookEvent::PostEdit, dir.path());
        assert_eq!(runs.len(), 2);
        assert!(!runs[0].success);
        assert_eq!(runs[0].name, "post-edit-01");
        assert!(runs[1].success);
        assert!(dir.path().join("ran.txt").exists());
    }
}
