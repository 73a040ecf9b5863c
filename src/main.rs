mod api;
mod app;
mod config;
mod domain;
mod input;
mod logging;
mod ticker;
mod toast;
mod ui;

use anyhow::{bail, Context, Result};
use api::{HttpApi, TaskApi};
use app::{Action, AppState};
use clap::{Parser, Subcommand};
use config::{config_file, ensure_taskdesk_dir, load_config, save_config, Config};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use domain::{visible_page, PageView, Tab, Task, ViewState};
use input::KeyOutcome;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "taskdesk")]
#[command(about = "A terminal client for assigning and tracking team tasks", long_about = None)]
struct Cli {
    /// Server base URL, overrides the config file
    #[arg(long, global = true, env = "TASKDESK_SERVER")]
    server: Option<String>,

    /// Log filter, e.g. "debug" or "taskdesk=trace"
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the config file in the taskdesk directory
    Init,
    /// Sign in and print one page of tasks
    List {
        /// Show tasks you assigned instead of tasks assigned to you
        #[arg(long)]
        by_me: bool,
        /// Page to print (1-based)
        #[arg(short, long, default_value_t = 1)]
        page: usize,
        #[arg(long, env = "TASKDESK_EMAIL")]
        email: String,
        #[arg(long, env = "TASKDESK_PASSWORD", hide_env_values = true)]
        password: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    ensure_taskdesk_dir()?;
    let config_path = config_file()?;
    let mut config = load_config(&config_path)?;
    if let Some(server) = cli.server {
        config.server_url = server;
    }

    let _guard = logging::init_logging(cli.log_level.as_deref());
    info!(server = %config.server_url, "starting taskdesk");

    match cli.command {
        Some(Commands::Init) => {
            save_config(&config_path, &config)?;
            println!("Wrote {}", config_path.display());
            println!("Server: {}", config.server_url);
            Ok(())
        }
        Some(Commands::List {
            by_me,
            page,
            email,
            password,
        }) => {
            let tab = if by_me {
                Tab::AssignedByMe
            } else {
                Tab::AssignedToMe
            };
            print_tasks(&config, tab, page, &email, &password)
        }
        None => run_tui(config, &config_path),
    }
}

/// Non-interactive listing through the same filter and pagination as the TUI
fn print_tasks(config: &Config, tab: Tab, page: usize, email: &str, password: &str) -> Result<()> {
    let api = HttpApi::new(&config.server_url, config.request_timeout())?;
    api.login(email, password).context("Sign in failed")?;
    let Some(user) = api.me() else {
        bail!("Signed in but {} did not return a session", api.base_url());
    };

    let tasks = api.tasks();
    let current = select_page(&tasks, &user.id, tab, page, config.page_size)?;
    println!("{}", page_heading(tab, &current));
    for task in &current.tasks {
        println!("{}", task_row(task, tab));
    }
    Ok(())
}

/// Page `page` of `tab`; page 0 means the first, anything past the end is an error
fn select_page<'a>(
    tasks: &'a [Task],
    user_id: &str,
    tab: Tab,
    page: usize,
    page_size: usize,
) -> Result<PageView<'a>> {
    let mut view = ViewState::new(page_size);
    view.switch_tab(tab);
    let last = visible_page(tasks, user_id, &view).total_pages.max(1);
    if page > last {
        bail!("Page {} is out of range (1-{})", page, last);
    }
    view.page = page.max(1);
    Ok(visible_page(tasks, user_id, &view))
}

fn page_heading(tab: Tab, page: &PageView) -> String {
    format!(
        "{} ({}) - page {}/{}",
        tab.title(),
        page.filtered_count,
        page.page,
        page.total_pages.max(1)
    )
}

fn task_row(task: &Task, tab: Tab) -> String {
    let counterpart = match tab {
        Tab::AssignedToMe => format!("from {}", task.assigner_display()),
        Tab::AssignedByMe => format!("to {}", task.assignee_display()),
    };
    format!(
        "#{:<5} [P{} I{}] {:<40} {:<20} {:<12} {}",
        task.id,
        task.priority,
        task.importance,
        task.title,
        counterpart,
        task.deadline_label(),
        task.status.label()
    )
}

fn run_tui(config: Config, config_path: &std::path::Path) -> Result<()> {
    let api = HttpApi::new(&config.server_url, config.request_timeout())?;
    let mut app = AppState::new(Box::new(api), config.page_size, config.last_email.clone());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Remember the last signed-in email
    if let Some(email) = app.email_to_remember.take() {
        let config = Config {
            last_email: Some(email),
            ..config
        };
        if let Err(e) = save_config(config_path, &config) {
            eprintln!("Error saving config: {}", e);
        }
    }

    // Print any errors
    if let Err(err) = result {
        error!(error = %err, "terminal loop failed");
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    let tick_rate = ticker::tick_duration();

    run_action(terminal, app, Action::Init)?;

    loop {
        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with timeout for ticking
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    match input::handle_key(app, key) {
                        KeyOutcome::Quit => return Ok(()),
                        KeyOutcome::Dispatch(action) => run_action(terminal, app, action)?,
                        KeyOutcome::Continue => {}
                    }
                }
            }
        }

        // Tick timers
        app.tick();
    }
}

/// Show the in-flight label, run the blocking call, then discard keys
/// pressed while it ran so the pending control acts disabled
fn run_action(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
    action: Action,
) -> Result<()> {
    app.busy = action.busy_label();
    if app.busy.is_some() {
        terminal.draw(|f| ui::render(f, app))?;
    }

    app.dispatch(action);
    app.busy = None;

    while event::poll(Duration::ZERO)? {
        let _ = event::read()?;
    }
    Ok(())
}
