//! Menu flow for the to-do list tool.

use super::{another_operation, farewell, output, prompt::Prompter};
use crate::config::Profile;
use crate::errors::CoreResult;
use crate::tasks::{Task, TaskService, TaskStore};
use crate::timefmt;

const TOOL_NAME: &str = "Simple To-Do List Tool";

const MENU: [&str; 8] = [
    "Add New Task",
    "View All Tasks",
    "Mark Task as Complete",
    "Delete Task",
    "View Completed Tasks",
    "View Pending Tasks",
    "Clear All Tasks",
    "Exit",
];

pub fn run(store: &TaskStore, profile: &Profile, prompter: &Prompter) -> CoreResult<()> {
    println!("{}", profile.header("SIMPLE TO-DO LIST TOOL"));
    output::info("Welcome to the Simple To-Do List Tool!");
    output::info("This tool helps you manage your daily tasks efficiently.");

    loop {
        let Some(choice) = prompter.menu("To-Do List Options", &MENU)? else {
            break;
        };
        match choice {
            0 => add_task(store, prompter)?,
            1 => view_all(store),
            2 => complete_task(store, prompter)?,
            3 => delete_task(store, prompter)?,
            4 => view_completed(store),
            5 => view_pending(store),
            6 => clear_all(store, prompter)?,
            _ => break,
        }
        if !another_operation(prompter)? {
            break;
        }
    }
    farewell(profile, TOOL_NAME);
    Ok(())
}

fn add_task(store: &TaskStore, prompter: &Prompter) -> CoreResult<()> {
    output::section("ADD NEW TASK");
    let mut tasks = store.load();

    let Some(description) = prompter.nonempty_text("Enter task description")? else {
        return Ok(());
    };
    match TaskService::add(&mut tasks, &description) {
        Ok(id) => {
            if persist(store, &tasks) {
                output::success("Task added successfully!");
                output::separator();
                output::info(format!("Task ID: {}", id));
                output::info(format!("Description: {}", description));
                output::info("Status: PENDING");
                output::separator();
            }
        }
        Err(err) => output::error(err),
    }
    Ok(())
}

fn view_all(store: &TaskStore) {
    output::section("ALL TASKS");
    let tasks = store.load();
    if tasks.is_empty() {
        output::info("No tasks found! Add some tasks to get started.");
        return;
    }

    render_table(&tasks.iter().collect::<Vec<_>>());
    output::separator();
    let pending = TaskService::pending(&tasks).len();
    let completed = TaskService::completed(&tasks).len();
    output::info(format!(
        "Total Tasks: {} | Pending: {} | Completed: {}",
        tasks.len(),
        pending,
        completed
    ));
}

fn complete_task(store: &TaskStore, prompter: &Prompter) -> CoreResult<()> {
    output::section("MARK TASK AS COMPLETE");
    let mut tasks = store.load();
    if tasks.is_empty() {
        output::info("No tasks found! Add some tasks first.");
        return Ok(());
    }
    let pending = TaskService::pending(&tasks);
    if pending.is_empty() {
        output::info("All tasks are already completed!");
        return Ok(());
    }

    output::info("Pending Tasks:");
    for task in &pending {
        output::info(format!("ID {}: {}", task.id, task.description));
    }

    let Some(id) = prompter.integer("Enter task ID to mark as complete")? else {
        return Ok(());
    };
    match TaskService::complete(&mut tasks, id) {
        Ok(_) => {
            if persist(store, &tasks) {
                output::success("Task marked as complete!");
                output::separator();
                output::info(format!("Task ID: {}", id));
                output::info("Status: COMPLETED");
                output::separator();
            }
        }
        Err(err) => output::error(err),
    }
    Ok(())
}

fn delete_task(store: &TaskStore, prompter: &Prompter) -> CoreResult<()> {
    output::section("DELETE TASK");
    let mut tasks = store.load();
    if tasks.is_empty() {
        output::info("No tasks found! Add some tasks first.");
        return Ok(());
    }

    output::info("All Tasks:");
    for task in &tasks {
        output::info(format!(
            "ID {}: [{}] {}",
            task.id,
            task.status,
            task.description
        ));
    }

    let Some(id) = prompter.integer("Enter task ID to delete")? else {
        return Ok(());
    };
    let Some(description) = tasks
        .iter()
        .find(|task| task.id == id)
        .map(|task| task.description.clone())
    else {
        output::error(crate::errors::CoreError::TaskNotFound(id));
        return Ok(());
    };

    let confirmed = prompter
        .confirm(&format!("Are you sure you want to delete '{}'?", description))?
        .unwrap_or(false);
    if !confirmed {
        output::info("Task deletion cancelled!");
        return Ok(());
    }

    match TaskService::remove(&mut tasks, id) {
        Ok(removed) => {
            if persist(store, &tasks) {
                output::success("Task deleted successfully!");
                output::separator();
                output::info(format!("Deleted Task: {}", removed.description));
                output::separator();
            }
        }
        Err(err) => output::error(err),
    }
    Ok(())
}

fn view_completed(store: &TaskStore) {
    output::section("COMPLETED TASKS");
    let tasks = store.load();
    let completed = TaskService::completed(&tasks);
    if completed.is_empty() {
        output::info("No completed tasks found!");
        return;
    }
    render_table(&completed);
    output::separator();
    output::info(format!("Total Completed Tasks: {}", completed.len()));
}

fn view_pending(store: &TaskStore) {
    output::section("PENDING TASKS");
    let tasks = store.load();
    let pending = TaskService::pending(&tasks);
    if pending.is_empty() {
        output::info("No pending tasks! All tasks are completed.");
        return;
    }
    render_table(&pending);
    output::separator();
    output::info(format!("Total Pending Tasks: {}", pending.len()));
}

fn clear_all(store: &TaskStore, prompter: &Prompter) -> CoreResult<()> {
    output::section("CLEAR ALL TASKS");
    let tasks = store.load();
    if tasks.is_empty() {
        output::info("No tasks found! The list is already empty.");
        return Ok(());
    }

    output::warning(format!(
        "You are about to delete ALL {} tasks!",
        tasks.len()
    ));
    let confirmed = prompter
        .confirm("Are you sure you want to clear all tasks?")?
        .unwrap_or(false);
    if !confirmed {
        output::info("Operation cancelled!");
        return Ok(());
    }

    if persist(store, &[]) {
        output::success("All tasks cleared successfully!");
    }
    Ok(())
}

fn render_table(tasks: &[&Task]) {
    output::info(format!(
        "{:<4} {:<10} {:<20} {:<40}",
        "ID", "Status", "Date Added", "Description"
    ));
    output::separator();
    for task in tasks {
        let description: String = task.description.chars().take(38).collect();
        output::info(format!(
            "{:<4} {:<10} {:<20} {:<40}",
            task.id,
            task.status.as_str(),
            timefmt::format_stamp(&task.date),
            description
        ));
    }
}

fn persist(store: &TaskStore, tasks: &[Task]) -> bool {
    match store.save(tasks) {
        Ok(()) => true,
        Err(err) => {
            output::error(format!("Error saving tasks: {}", err));
            false
        }
    }
}
