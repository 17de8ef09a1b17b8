/*
[INPUT]:  Core flow state and user input via terminal prompts
[OUTPUT]: Interactive auth and task screens driving the core
[POS]:    Presentation layer - terminal client
[UPDATE]: When screens, prompts, or navigation change
*/

use std::sync::Arc;

use anyhow::{Context, Result};
use console::style;
use dialoguer::{Confirm, Input, Password, Select, theme::ColorfulTheme};
use taskdeck_adapter::{Task, TaskApiClient};

use taskdeck_core::auth::{LoginFlow, LoginOutcome, RegisterFlow, RegisterOutcome};
use taskdeck_core::config::AppConfig;
use taskdeck_core::error::{ErrorKind, StoreError};
use taskdeck_core::messages::{auth_message, task_message};
use taskdeck_core::session::{FileKvStore, SessionManager};
use taskdeck_core::tasks::{ConfirmDelete, TaskStore};

/// Delete confirmation backed by a terminal prompt
struct PromptConfirm<'a> {
    theme: &'a ColorfulTheme,
}

impl ConfirmDelete for PromptConfirm<'_> {
    fn confirm_delete(&self, task: &Task) -> bool {
        Confirm::with_theme(self.theme)
            .with_prompt(format!("Delete \"{}\"?", task.title))
            .default(false)
            .interact()
            .unwrap_or(false)
    }
}

/// Run the interactive client until the user quits
pub async fn run(config: AppConfig) -> Result<()> {
    let client = Arc::new(
        TaskApiClient::with_config_and_base_url(config.client_config(), &config.base_url)
            .context("build API client")?,
    );
    let session = SessionManager::new(Arc::new(FileKvStore::new(&config.session_dir)));
    let theme = ColorfulTheme::default();

    println!("{}", style("taskdeck").bold().cyan());
    println!("{}", style(format!("service: {}", config.base_url)).dim());

    loop {
        if !session.is_authenticated() {
            let signed_in = auth_screen(&theme, client.clone(), &session).await?;
            if !signed_in {
                return Ok(());
            }
        }

        // Returns when the user logs out or the session expires; the
        // store (and its collection) is dropped on the way out.
        tasks_screen(&theme, client.clone(), &session).await?;
    }
}

/// Auth menu: returns true once a session is established, false on quit
async fn auth_screen(
    theme: &ColorfulTheme,
    client: Arc<TaskApiClient>,
    session: &SessionManager,
) -> Result<bool> {
    let login = LoginFlow::new(client.clone(), session.clone());
    let register = RegisterFlow::new(client);

    loop {
        let actions = vec!["Sign in", "Create account", "Quit"];
        let selection = Select::with_theme(theme)
            .with_prompt("Welcome back")
            .items(&actions)
            .default(0)
            .interact()?;

        match selection {
            0 => {
                let email: String = Input::with_theme(theme)
                    .with_prompt("Email")
                    .allow_empty(true)
                    .interact_text()?;
                let password = Password::with_theme(theme)
                    .with_prompt("Password")
                    .allow_empty_password(true)
                    .interact()?;

                match login.submit(&email, &password).await {
                    LoginOutcome::LoggedIn => {
                        println!("{}", style("Signed in.").green());
                        return Ok(true);
                    }
                    LoginOutcome::Failed(kind) => {
                        println!("{}", style(auth_message(&kind)).red());
                        login.reset();
                    }
                    LoginOutcome::AlreadyInFlight => {}
                }
            }
            1 => {
                let email: String = Input::with_theme(theme)
                    .with_prompt("Email")
                    .allow_empty(true)
                    .interact_text()?;
                let password = Password::with_theme(theme)
                    .with_prompt("Password")
                    .allow_empty_password(true)
                    .interact()?;
                let confirm = Password::with_theme(theme)
                    .with_prompt("Confirm password")
                    .allow_empty_password(true)
                    .interact()?;

                match register.submit(&email, &password, &confirm).await {
                    RegisterOutcome::Registered => {
                        println!(
                            "{}",
                            style("Registration successful! Redirecting to login...").green()
                        );
                        register.redirect_grace().await;
                    }
                    RegisterOutcome::Failed(kind) => {
                        println!("{}", style(auth_message(&kind)).red());
                        register.reset();
                    }
                    RegisterOutcome::AlreadyInFlight => {}
                }
            }
            _ => return Ok(false),
        }
    }
}

/// Task menu: returns when the user logs out or the session expires
async fn tasks_screen(
    theme: &ColorfulTheme,
    client: Arc<TaskApiClient>,
    session: &SessionManager,
) -> Result<()> {
    let store = TaskStore::new(client, session.clone());

    if let Err(err) = store.load().await {
        if err.kind == ErrorKind::Unauthorized {
            println!("{}", style("Session expired, please sign in again.").yellow());
            return Ok(());
        }
        println!("{}", style(task_message(&err)).red());
    }

    loop {
        render_tasks(&store);

        let actions = vec![
            "Add task",
            "Toggle complete",
            "Edit task",
            "Delete task",
            "Refresh",
            "Log out",
        ];
        let selection = Select::with_theme(theme)
            .with_prompt("Task list")
            .items(&actions)
            .default(0)
            .interact()?;

        let result = match selection {
            0 => add_task(theme, &store).await,
            1 => toggle_task(theme, &store).await,
            2 => edit_task(theme, &store).await,
            3 => delete_task(theme, &store).await,
            4 => store.load().await.map(|_| ()),
            _ => {
                store.logout().await;
                println!("{}", style("Logged out.").green());
                return Ok(());
            }
        };

        if let Err(err) = result {
            if err.kind == ErrorKind::Unauthorized {
                println!("{}", style("Session expired, please sign in again.").yellow());
                return Ok(());
            }
            println!("{}", style(task_message(&err)).red());
        }
    }
}

fn render_tasks(store: &TaskStore) {
    let tasks = store.tasks();
    let pending = tasks.iter().filter(|task| !task.completed).count();

    println!();
    println!(
        "{} {}",
        style("Tasks").bold(),
        style(format!("({} total, {} pending)", tasks.len(), pending)).dim()
    );

    if tasks.is_empty() {
        println!("{}", style("No tasks yet. Create your first task!").dim());
        return;
    }

    for task in &tasks {
        let mark = if task.completed { "[x]" } else { "[ ]" };
        let title = if task.completed {
            style(task.title.as_str()).dim().strikethrough()
        } else {
            style(task.title.as_str())
        };
        let created = task.created_at.format("%Y-%m-%d");
        match &task.description {
            Some(description) => println!(
                "  {mark} {title} {} {}",
                style(format!("- {description}")).dim(),
                style(format!("({created})")).dim()
            ),
            None => println!("  {mark} {title} {}", style(format!("({created})")).dim()),
        }
    }
}

/// Pick one task by index; None when the collection is empty
fn select_task(
    theme: &ColorfulTheme,
    store: &TaskStore,
    prompt: &str,
) -> Result<Option<Task>> {
    let tasks = store.tasks();
    if tasks.is_empty() {
        println!("{}", style("No tasks to act on.").dim());
        return Ok(None);
    }

    let labels: Vec<String> = tasks
        .iter()
        .map(|task| {
            let mark = if task.completed { "[x]" } else { "[ ]" };
            format!("{mark} {}", task.title)
        })
        .collect();

    let selection = Select::with_theme(theme)
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(Some(tasks[selection].clone()))
}

async fn add_task(
    theme: &ColorfulTheme,
    store: &TaskStore,
) -> Result<(), StoreError> {
    let title: String = Input::with_theme(theme)
        .with_prompt("Title")
        .allow_empty(true)
        .interact_text()
        .unwrap_or_default();
    let description: String = Input::with_theme(theme)
        .with_prompt("Description (optional)")
        .allow_empty(true)
        .interact_text()
        .unwrap_or_default();

    store.create(&title, &description).await.map(|_| ())
}

async fn toggle_task(
    theme: &ColorfulTheme,
    store: &TaskStore,
) -> Result<(), StoreError> {
    let Some(task) = select_task(theme, store, "Toggle which task?").unwrap_or(None) else {
        return Ok(());
    };
    store.toggle_complete(&task).await.map(|_| ())
}

async fn edit_task(
    theme: &ColorfulTheme,
    store: &TaskStore,
) -> Result<(), StoreError> {
    let Some(task) = select_task(theme, store, "Edit which task?").unwrap_or(None) else {
        return Ok(());
    };

    store.start_edit(task.id);
    let edit = store.edit_session();
    let Some(buffer) = edit.buffer() else {
        return Ok(());
    };

    let title: String = Input::with_theme(theme)
        .with_prompt("Title")
        .with_initial_text(buffer.title)
        .allow_empty(true)
        .interact_text()
        .unwrap_or_default();
    let description: String = Input::with_theme(theme)
        .with_prompt("Description (blank for none)")
        .with_initial_text(buffer.description.unwrap_or_default())
        .allow_empty(true)
        .interact_text()
        .unwrap_or_default();

    edit.set_title(title);
    edit.set_description(if description.is_empty() {
        None
    } else {
        Some(description)
    });

    let save = Confirm::with_theme(theme)
        .with_prompt("Save changes?")
        .default(true)
        .interact()
        .unwrap_or(false);

    if save {
        store.save_edit().await
    } else {
        store.cancel_edit();
        Ok(())
    }
}

async fn delete_task(
    theme: &ColorfulTheme,
    store: &TaskStore,
) -> Result<(), StoreError> {
    let Some(task) = select_task(theme, store, "Delete which task?").unwrap_or(None) else {
        return Ok(());
    };
    store.delete(task.id, &PromptConfirm { theme }).await
}
