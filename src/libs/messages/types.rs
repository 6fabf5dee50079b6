#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(i64, String),        // id, title
    TaskToggled(i64, bool),          // id, completed after toggle
    TaskDeleted(i64),                // id
    InvalidDueDate(String, String),  // input, parse error
    ConfirmDeleteTask(i64, String),  // id, title
    TasksLoadFailed(String),         // error
    NoTasksFound,
    ActiveTasksHeader(usize),        // count
    CompletedTasksHeader(usize),     // count
    PriorityHeader(i32, usize),      // priority, count
    OverdueTasksHeader(usize),       // count
    NoOverdueTasks,

    // === STORE MESSAGES ===
    StoreOpened(String),             // database path
    StoreOpenFailed(String),         // error

    // === CONFIGURATION MESSAGES ===
    ConfigLoadFailed(String),        // error

    // === GENERAL MESSAGES ===
    OperationCancelled,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),        // count
    RunningMigration(u32, String), // version, name
    MigrationCompleted(u32),       // version
    MigrationFailed(u32, String),  // version, error
    AllMigrationsCompleted,
    DatabaseUpToDate,
}
