//! Tests for batch progress display lifecycle

#[cfg(test)]
mod tests {
    use std::path::Path;
    use wordgrid::io::progress::ProgressManager;

    #[test]
    fn test_full_lifecycle_does_not_panic() {
        let mut manager = ProgressManager::new();
        manager.initialize(3);

        for name in ["a.txt", "b.txt", "c.txt"] {
            manager.start_file(Path::new(name));
            manager.complete_file();
        }

        manager.finish();
    }

    #[test]
    fn test_uninitialized_manager_is_inert() {
        let mut manager = ProgressManager::default();
        manager.start_file(Path::new("orphan.txt"));
        manager.complete_file();
        manager.finish();
    }

    #[test]
    fn test_finish_is_idempotent() {
        let mut manager = ProgressManager::new();
        manager.initialize(1);
        manager.finish();
        manager.finish();
    }
}
