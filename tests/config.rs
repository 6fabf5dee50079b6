#[cfg(test)]
mod tests {
    use std::sync::{Mutex, MutexGuard};
    use taskdesk::libs::config::{Config, ConfigError, DbConfig, DEFAULT_BUSY_TIMEOUT_MS, ENV_DB_BUSY_TIMEOUT_MS, ENV_DB_PATH};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    // Tests in this file mutate process environment variables.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Points HOME/LOCALAPPDATA at a temporary directory and clears the
    /// TASKDESK_* variables for the duration of a test.
    struct ConfigTestContext {
        temp_dir: TempDir,
        _guard: MutexGuard<'static, ()>,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            std::env::remove_var(ENV_DB_PATH);
            std::env::remove_var(ENV_DB_BUSY_TIMEOUT_MS);
            ConfigTestContext { temp_dir, _guard: guard }
        }

        fn teardown(self) {
            std::env::remove_var(ENV_DB_PATH);
            std::env::remove_var(ENV_DB_BUSY_TIMEOUT_MS);
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_default_path_is_in_data_dir(ctx: &mut ConfigTestContext) {
        let config = Config::from_env().unwrap();

        assert!(config.db.path.starts_with(ctx.temp_dir.path()));
        assert!(config.db.path.ends_with("taskdesk.db"));
        assert!(config.db.path.parent().unwrap().exists());
        assert_eq!(config.db.busy_timeout_ms, DEFAULT_BUSY_TIMEOUT_MS);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_env_overrides(ctx: &mut ConfigTestContext) {
        let path = ctx.temp_dir.path().join("custom.db");
        std::env::set_var(ENV_DB_PATH, &path);
        std::env::set_var(ENV_DB_BUSY_TIMEOUT_MS, "250");

        let config = Config::from_env().unwrap();

        assert_eq!(config.db, DbConfig { path, busy_timeout_ms: 250 });
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_blank_path_falls_back_to_default(_ctx: &mut ConfigTestContext) {
        std::env::set_var(ENV_DB_PATH, "   ");

        let config = Config::from_env().unwrap();
        assert!(config.db.path.ends_with("taskdesk.db"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_invalid_busy_timeout_is_rejected(_ctx: &mut ConfigTestContext) {
        std::env::set_var(ENV_DB_BUSY_TIMEOUT_MS, "soon");

        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidNumber { ref value, .. } if value == "soon"));
    }

    #[test]
    fn test_db_config_new_uses_default_timeout() {
        let config = DbConfig::new("tasks.db");
        assert_eq!(config.busy_timeout().as_millis() as u64, DEFAULT_BUSY_TIMEOUT_MS);
    }
}
