use crate::api::{LoginResponse, RegisterRequest, TaskApi};
use crate::domain::{visible_page, AuthMode, PageNav, PageView, Tab, Task, TaskStatus, UiMode, User, ViewState};
use crate::toast::ToastStack;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Everything the user can ask the controller to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Fetch the current user and, when signed in, the task list
    Init,
    Login { email: String, password: String },
    Register(RegisterRequest),
    SwitchTab(Tab),
    ChangePage(PageNav),
    SelectPrevious,
    SelectNext,
    CreateTask(String),
    OpenTask(i64),
    CloseModal,
    /// Move the modal's status control without submitting
    CycleStatus { forward: bool },
    UpdateStatus { task_id: i64, status: TaskStatus },
    Refresh,
    Logout,
}

impl Action {
    /// Variant name for logs; payloads may hold credentials
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Init => "init",
            Action::Login { .. } => "login",
            Action::Register(_) => "register",
            Action::SwitchTab(_) => "switch_tab",
            Action::ChangePage(_) => "change_page",
            Action::SelectPrevious => "select_previous",
            Action::SelectNext => "select_next",
            Action::CreateTask(_) => "create_task",
            Action::OpenTask(_) => "open_task",
            Action::CloseModal => "close_modal",
            Action::CycleStatus { .. } => "cycle_status",
            Action::UpdateStatus { .. } => "update_status",
            Action::Refresh => "refresh",
            Action::Logout => "logout",
        }
    }

    /// Label shown while the action's network call is in flight.
    /// `None` for purely local actions.
    pub fn busy_label(&self) -> Option<&'static str> {
        match self {
            Action::Login { .. } => Some("Signing in..."),
            Action::Register(_) => Some("Creating account..."),
            Action::CreateTask(_) => Some("Processing..."),
            Action::UpdateStatus { .. } => Some("Updating status..."),
            Action::Logout => Some("Signing out..."),
            Action::Init | Action::Refresh | Action::SwitchTab(_) | Action::ChangePage(_) => {
                Some("Loading...")
            }
            _ => None,
        }
    }
}

/// One labelled text input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub label: &'static str,
    pub value: String,
    pub secret: bool,
    pub required: bool,
}

impl FormField {
    fn new(label: &'static str, required: bool) -> Self {
        Self {
            label,
            value: String::new(),
            secret: false,
            required,
        }
    }

    fn secret(label: &'static str) -> Self {
        Self {
            secret: true,
            ..Self::new(label, true)
        }
    }
}

/// Login or register form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthForm {
    pub fields: Vec<FormField>,
    pub focused: usize,
}

impl AuthForm {
    pub fn login(email: Option<&str>) -> Self {
        let mut fields = vec![FormField::new("Email", true), FormField::secret("Password")];
        let mut focused = 0;
        if let Some(email) = email {
            fields[0].value = email.to_string();
            focused = 1;
        }
        Self { fields, focused }
    }

    pub fn register() -> Self {
        Self {
            fields: vec![
                FormField::new("First name", true),
                FormField::new("Last name", true),
                FormField::new("Email", true),
                FormField::secret("Password"),
                FormField::new("Position", false),
                FormField::new("Job description", false),
            ],
            focused: 0,
        }
    }

    pub fn value(&self, label: &str) -> &str {
        self.fields
            .iter()
            .find(|f| f.label == label)
            .map(|f| f.value.as_str())
            .unwrap_or("")
    }

    /// First required field left blank
    pub fn missing(&self) -> Option<&'static str> {
        self.fields
            .iter()
            .find(|f| f.required && f.value.trim().is_empty())
            .map(|f| f.label)
    }

    pub fn next_field(&mut self) {
        self.focused = (self.focused + 1) % self.fields.len();
    }

    pub fn previous_field(&mut self) {
        self.focused = (self.focused + self.fields.len() - 1) % self.fields.len();
    }

    pub fn push_char(&mut self, c: char) {
        if let Some(field) = self.fields.get_mut(self.focused) {
            field.value.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.fields.get_mut(self.focused) {
            field.value.pop();
        }
    }

    fn clear_secrets(&mut self) {
        for field in self.fields.iter_mut().filter(|f| f.secret) {
            field.value.clear();
        }
    }
}

/// Detail overlay for one task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskModal {
    pub task_id: i64,
    /// Value currently shown in the status control
    pub control: TaskStatus,
    /// Last value the server accepted; the control reverts here on failure
    pub committed: TaskStatus,
    /// Only the assignee may change status
    pub editable: bool,
}

/// Main application state
pub struct AppState {
    api: Box<dyn TaskApi>,
    pub user: Option<User>,
    /// Full snapshot from the last `/api/tasks` call
    pub tasks: Vec<Task>,
    pub view: ViewState,
    /// Row cursor within the current page
    pub selected: usize,
    pub ui_mode: UiMode,
    pub auth_mode: AuthMode,
    pub login_form: AuthForm,
    pub register_form: AuthForm,
    pub task_draft: String,
    pub modal: Option<TaskModal>,
    pub toasts: ToastStack,
    /// Set while a blocking call runs so the UI can show progress
    pub busy: Option<&'static str>,
    /// Email of the last successful login, waiting to be written to config
    pub email_to_remember: Option<String>,
    page_size: usize,
    remembered_email: Option<String>,
}

impl AppState {
    pub fn new(api: Box<dyn TaskApi>, page_size: usize, remembered_email: Option<String>) -> Self {
        Self {
            api,
            user: None,
            tasks: Vec::new(),
            view: ViewState::new(page_size),
            selected: 0,
            ui_mode: UiMode::Auth,
            auth_mode: AuthMode::Login,
            login_form: AuthForm::login(remembered_email.as_deref()),
            register_form: AuthForm::register(),
            task_draft: String::new(),
            modal: None,
            toasts: ToastStack::new(),
            busy: None,
            email_to_remember: None,
            page_size,
            remembered_email,
        }
    }

    /// The one place user intents are applied.
    /// Failures never escape: they become error toasts.
    pub fn dispatch(&mut self, action: Action) {
        debug!(action = action.kind(), "dispatch");
        match action {
            Action::Init => self.init(),
            Action::Login { email, password } => self.login(email, password),
            Action::Register(request) => self.register(request),
            Action::SwitchTab(tab) => {
                self.view.switch_tab(tab);
                self.selected = 0;
                self.load_tasks();
            }
            Action::ChangePage(nav) => {
                let total = self.current_page().total_pages;
                if self.view.navigate(nav, total) {
                    self.selected = 0;
                    self.load_tasks();
                }
            }
            Action::SelectPrevious => {
                self.selected = self.selected.saturating_sub(1);
            }
            Action::SelectNext => {
                let rows = self.current_page().tasks.len();
                if self.selected + 1 < rows {
                    self.selected += 1;
                }
            }
            Action::CreateTask(description) => self.create_task(description),
            Action::OpenTask(task_id) => self.open_task(task_id),
            Action::CloseModal => {
                self.modal = None;
                self.ui_mode = UiMode::Normal;
            }
            Action::CycleStatus { forward } => {
                if let Some(modal) = self.modal.as_mut().filter(|m| m.editable) {
                    modal.control = modal.control.cycle(forward);
                }
            }
            Action::UpdateStatus { task_id, status } => self.update_status(task_id, status),
            Action::Refresh => self.load_tasks(),
            Action::Logout => self.logout(),
        }
    }

    fn init(&mut self) {
        self.user = self.api.me();
        match self.user.as_ref().map(|u| u.id.clone()) {
            Some(user_id) => {
                info!(%user_id, "authenticated");
                self.view = ViewState::new(self.page_size);
                self.selected = 0;
                self.ui_mode = UiMode::Normal;
                self.load_tasks();
            }
            None => {
                self.tasks.clear();
                self.modal = None;
                self.ui_mode = UiMode::Auth;
            }
        }
    }

    fn login(&mut self, email: String, password: String) {
        match self.api.login(&email, &password) {
            Ok(response) => {
                self.login_form.clear_secrets();
                self.after_sign_in(response, email);
            }
            Err(e) => {
                warn!(error = %e, "login failed");
                self.toasts.error(e.to_string());
            }
        }
    }

    fn register(&mut self, request: RegisterRequest) {
        match self.api.register(&request) {
            Ok(response) => {
                self.register_form = AuthForm::register();
                self.login_form = AuthForm::login(Some(&request.email));
                self.auth_mode = AuthMode::Login;
                self.after_sign_in(response, request.email);
            }
            Err(e) => {
                warn!(error = %e, "registration failed");
                self.toasts.error(e.to_string());
            }
        }
    }

    /// The server accepted the credentials; the session cookie must now resolve
    fn after_sign_in(&mut self, response: LoginResponse, email: String) {
        let summary = response.user.unwrap_or_default();
        info!(message = %response.message, name = %summary.name, "signed in");
        let email = if summary.email.is_empty() {
            email
        } else {
            summary.email
        };
        self.email_to_remember = Some(email);
        self.init();
        if self.user.is_none() {
            warn!("credentials accepted but /api/me has no session");
            self.toasts.error("Signed in but no session was established");
        }
    }

    fn create_task(&mut self, description: String) {
        let description = description.trim().to_string();
        if description.is_empty() {
            return;
        }
        match self.api.create_task(&description) {
            Ok(outcome) => {
                self.toasts.success(outcome.toast_message());
                self.task_draft.clear();
                self.ui_mode = UiMode::Normal;
                self.load_tasks();
            }
            Err(e) => {
                warn!(error = %e, "task creation failed");
                self.toasts.error(format!("Error: {}", e));
            }
        }
    }

    fn open_task(&mut self, task_id: i64) {
        let Some(task) = self.tasks.iter().find(|t| t.id == task_id) else {
            return;
        };
        let editable = self
            .user
            .as_ref()
            .map(|u| task.is_assigned_to(&u.id))
            .unwrap_or(false);
        self.modal = Some(TaskModal {
            task_id,
            control: task.status,
            committed: task.status,
            editable,
        });
        self.ui_mode = UiMode::TaskModal;
    }

    fn update_status(&mut self, task_id: i64, status: TaskStatus) {
        let Some(modal) = self.modal.as_ref() else {
            return;
        };
        // Non-assignees never reach the server; it would refuse anyway
        if modal.task_id != task_id || !modal.editable {
            debug!(task_id, "status change not permitted");
            return;
        }
        if status == modal.committed || status == TaskStatus::Unknown {
            return;
        }

        match self.api.update_status(task_id, status) {
            Ok(message) => {
                if let Some(task) = self.tasks.iter_mut().find(|t| t.id == task_id) {
                    task.status = status;
                }
                if let Some(modal) = self.modal.as_mut() {
                    modal.control = status;
                    modal.committed = status;
                }
                self.toasts.success(message);
                self.load_tasks();
            }
            Err(e) => {
                warn!(task_id, error = %e, "status update failed");
                if let Some(modal) = self.modal.as_mut() {
                    modal.control = modal.committed;
                }
                self.toasts.error(format!("Error: {}", e));
            }
        }
    }

    /// Server is told first; locally this is a full reset, like reloading the page
    fn logout(&mut self) {
        if let Err(e) = self.api.logout() {
            warn!(error = %e, "logout request failed");
        }
        self.user = None;
        self.tasks.clear();
        self.view = ViewState::new(self.page_size);
        self.selected = 0;
        self.modal = None;
        self.task_draft.clear();
        self.toasts = ToastStack::new();
        self.auth_mode = AuthMode::Login;
        let email = self.email_to_remember.clone().or_else(|| self.remembered_email.clone());
        self.login_form = AuthForm::login(email.as_deref());
        self.register_form = AuthForm::register();
        self.init();
    }

    /// Re-fetch the full list. Failures show up as an empty list.
    fn load_tasks(&mut self) {
        self.tasks = self.api.tasks();
        let rows = self.current_page().tasks.len();
        if self.selected >= rows {
            self.selected = rows.saturating_sub(1);
        }
    }

    /// Tasks for the active tab and page
    pub fn current_page(&self) -> PageView<'_> {
        let user_id = self.user.as_ref().map(|u| u.id.as_str()).unwrap_or("");
        visible_page(&self.tasks, user_id, &self.view)
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.current_page().tasks.get(self.selected).copied()
    }

    /// Task shown in the modal, if any
    pub fn modal_task(&self) -> Option<&Task> {
        let modal = self.modal.as_ref()?;
        self.tasks.iter().find(|t| t.id == modal.task_id)
    }

    pub fn is_current_user(&self, user_id: &str) -> bool {
        self.user.as_ref().map(|u| u.id == user_id).unwrap_or(false)
    }

    pub fn active_form(&self) -> &AuthForm {
        match self.auth_mode {
            AuthMode::Login => &self.login_form,
            AuthMode::Register => &self.register_form,
        }
    }

    pub fn active_form_mut(&mut self) -> &mut AuthForm {
        match self.auth_mode {
            AuthMode::Login => &mut self.login_form,
            AuthMode::Register => &mut self.register_form,
        }
    }

    pub fn toggle_auth_mode(&mut self) {
        self.auth_mode = match self.auth_mode {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        };
    }

    /// Build the submit action for the visible auth form, or explain what is missing
    pub fn auth_submit_action(&mut self) -> Option<Action> {
        if let Some(label) = self.active_form().missing() {
            self.toasts.error(format!("{} is required", label));
            return None;
        }
        let form = self.active_form();
        let optional = |v: &str| {
            let v = v.trim();
            if v.is_empty() {
                None
            } else {
                Some(v.to_string())
            }
        };
        Some(match self.auth_mode {
            AuthMode::Login => Action::Login {
                email: form.value("Email").trim().to_string(),
                password: form.value("Password").to_string(),
            },
            AuthMode::Register => Action::Register(RegisterRequest {
                first_name: form.value("First name").trim().to_string(),
                last_name: form.value("Last name").trim().to_string(),
                email: form.value("Email").trim().to_string(),
                password: form.value("Password").to_string(),
                position: optional(form.value("Position")),
                job_description: optional(form.value("Job description")),
            }),
        })
    }

    pub fn start_compose(&mut self) {
        self.ui_mode = UiMode::ComposingTask;
    }

    /// Leave the composer; the draft is kept for next time
    pub fn cancel_compose(&mut self) {
        self.ui_mode = UiMode::Normal;
    }

    /// Drop expired toasts
    pub fn tick(&mut self) {
        self.toasts.prune(Instant::now());
    }
}
