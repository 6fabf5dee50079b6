use super::task::Task;
use chrono::{DateTime, Local, Utc};
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "PRIORITY", "DUE", "DONE", "CREATED"]);
        for task in tasks {
            table.add_row(row![
                task.id,
                task.title,
                task.priority,
                task.due_date.map(format_time).unwrap_or_else(|| "-".to_string()),
                if task.completed { "x" } else { "" },
                format_time(task.created_at)
            ]);
        }
        table.printstd();
    }
}

fn format_time(time: DateTime<Utc>) -> String {
    time.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}
