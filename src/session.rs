//! UI session: store, router, drafts, and the notice banner
//!
//! All user-facing flows live here so HTTP handlers stay thin: a handler
//! takes the navigation ticket, runs one flow, and hands the outcome to
//! [`Session::settle`].

use std::sync::Arc;

use chrono::Local;
use tokio::sync::{Mutex, RwLock};

use crate::{
    backend::{Backend, LocalBackend},
    client::ApiClient,
    error::{AppError, AppResult},
    forms::{
        AssetDraft, AssignmentDraft, DepartmentDraft, FormController, FormDrafts, LicenseDraft,
        LoginDraft, MaintenanceDraft, SignupDraft, UserDraft,
    },
    models::{AccountProfile, Collection},
    services::{export::CsvReport, search::InventoryQuery, EntityStore},
    views::{ActionTable, Banner, RenderContext, Router, View},
};

pub struct Session {
    pub store: EntityStore,
    /// `None` when running on the in-memory backend
    client: Option<ApiClient>,
    router: Mutex<Router>,
    pub(crate) drafts: Mutex<FormDrafts>,
    banner: Mutex<Option<Banner>>,
    profile: RwLock<Option<AccountProfile>>,
    actions: ActionTable,
}

impl Session {
    /// Session backed by the REST API
    pub fn remote(client: ApiClient) -> Self {
        let initial = if client.is_authenticated() {
            View::Dashboard
        } else {
            View::Login
        };
        let backend: Arc<dyn Backend> = Arc::new(client.clone());
        Self::build(backend, Some(client), initial)
    }

    /// Standalone session with no network
    pub fn local(backend: Arc<LocalBackend>) -> Self {
        Self::build(backend, None, View::Dashboard)
    }

    fn build(backend: Arc<dyn Backend>, client: Option<ApiClient>, initial: View) -> Self {
        Self {
            store: EntityStore::new(backend),
            client,
            router: Mutex::new(Router::new(initial)),
            drafts: Mutex::new(FormDrafts::default()),
            banner: Mutex::new(None),
            profile: RwLock::new(None),
            actions: ActionTable::default(),
        }
    }

    pub fn client(&self) -> Option<&ApiClient> {
        self.client.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.client.as_ref().map_or(true, ApiClient::is_authenticated)
    }

    // --- Navigation ---

    pub async fn current_view(&self) -> View {
        self.router.lock().await.current()
    }

    pub async fn ticket(&self) -> u64 {
        self.router.lock().await.ticket()
    }

    pub async fn navigate(&self, view: View) -> u64 {
        self.router.lock().await.set_current_view(view)
    }

    /// Enter `view` for rendering, diverting to login when signed out
    pub async fn enter(&self, view: View) -> View {
        let view = if view.requires_auth() && !self.is_authenticated() {
            View::Login
        } else {
            view
        };
        self.navigate(view).await;
        view
    }

    /// Apply a flow's outcome. Failures become the banner; a requested view
    /// switch only happens if nothing navigated since `ticket`.
    pub async fn settle(&self, ticket: u64, outcome: AppResult<Option<View>>) -> View {
        match outcome {
            Ok(Some(view)) => {
                self.router.lock().await.navigate_if_current(ticket, view);
            }
            Ok(None) => {}
            Err(err) => self.report(&err).await,
        }
        self.current_view().await
    }

    // --- Banner ---

    pub async fn notify(&self, text: impl Into<String>) {
        *self.banner.lock().await = Some(Banner::success(text));
    }

    /// Surface a failure. Authentication failures force the login view.
    pub async fn report(&self, err: &AppError) {
        if err.is_unauthorized() {
            tracing::info!("Session is not authenticated, switching to login");
            *self.profile.write().await = None;
            self.navigate(View::Login).await;
        } else {
            tracing::warn!("Operation failed: {}", err);
        }
        *self.banner.lock().await = Some(Banner::error(err.user_message()));
    }

    pub async fn banner(&self) -> Option<Banner> {
        self.banner.lock().await.clone()
    }

    // --- Rendering ---

    /// Render `view`; the banner is shown once
    pub async fn render(&self, view: View, query: &InventoryQuery) -> String {
        let snapshot = self.store.snapshot().await;
        let drafts = self.drafts.lock().await.clone();
        let banner = self.banner.lock().await.take();
        let profile = self.profile.read().await.clone();

        let ctx = RenderContext {
            snapshot: &snapshot,
            drafts: &drafts,
            query,
            banner: banner.as_ref(),
            profile: profile.as_ref(),
            today: Local::now().date_naive(),
        };
        crate::views::render(view, &ctx)
    }

    // --- Account flows ---

    fn require_client(&self) -> AppResult<&ApiClient> {
        self.client
            .as_ref()
            .ok_or_else(|| AppError::BadRequest("Accounts are not available in local mode".into()))
    }

    pub async fn login(&self, draft: LoginDraft) -> AppResult<Option<View>> {
        self.drafts.lock().await.login = LoginDraft {
            email: draft.email.clone(),
            password: String::new(),
        };
        let form = draft.submit()?;
        let client = self.require_client()?;
        client.login(&form).await?;
        self.drafts.lock().await.login.reset();

        match client.me().await {
            Ok(profile) => *self.profile.write().await = Some(profile),
            Err(err) => tracing::warn!("Could not load account profile: {}", err),
        }
        if let Err(err) = self.store.refresh_all().await {
            self.report(&err).await;
        } else {
            self.notify("You have successfully logged in.").await;
        }
        Ok(Some(View::Dashboard))
    }

    pub async fn signup(&self, draft: SignupDraft) -> AppResult<Option<View>> {
        self.drafts.lock().await.signup = SignupDraft {
            password: String::new(),
            ..draft.clone()
        };
        let request = draft.submit()?;
        self.require_client()?.signup(&request).await?;
        self.drafts.lock().await.signup.reset();
        self.drafts.lock().await.login.email = request.email;
        self.notify("Account created. Please sign in.").await;
        Ok(Some(View::Login))
    }

    pub async fn logout(&self) -> AppResult<()> {
        if let Some(client) = &self.client {
            client.logout()?;
            *self.profile.write().await = None;
            *self.drafts.lock().await = FormDrafts::default();
            self.navigate(View::Login).await;
            self.notify("You have been signed out.").await;
        }
        Ok(())
    }

    // --- Form flows ---

    pub async fn submit_asset(&self, draft: AssetDraft) -> AppResult<Option<View>> {
        let editing = {
            let mut drafts = self.drafts.lock().await;
            drafts.asset = draft.clone();
            drafts.editing_asset.clone()
        };
        let payload = draft.submit()?;
        let message = match editing {
            Some(id) => {
                self.store.update_asset_details(&id, payload).await?;
                format!("Asset {} updated", id)
            }
            None => {
                let id = self.store.create_asset(payload).await?;
                format!("Asset {} created", id)
            }
        };
        self.drafts.lock().await.cancel_asset_edit();
        self.notify(message).await;
        Ok(Some(View::Inventory))
    }

    pub async fn cancel_asset_edit(&self) -> AppResult<Option<View>> {
        self.drafts.lock().await.cancel_asset_edit();
        Ok(Some(View::Inventory))
    }

    pub async fn submit_maintenance(&self, draft: MaintenanceDraft) -> AppResult<Option<View>> {
        self.drafts.lock().await.maintenance = draft.clone();
        let payload = draft.submit()?;
        self.store.create_maintenance(payload).await?;
        self.drafts.lock().await.maintenance.reset();
        self.notify("Maintenance record added").await;
        Ok(None)
    }

    pub async fn submit_license(&self, draft: LicenseDraft) -> AppResult<Option<View>> {
        self.drafts.lock().await.license = draft.clone();
        let payload = draft.submit()?;
        self.store.create_license(payload).await?;
        self.drafts.lock().await.license.reset();
        self.notify("License added").await;
        Ok(None)
    }

    /// Create, or update when an edit is in progress. A bad code is caught
    /// by the draft before anything is sent.
    pub async fn submit_department(&self, draft: DepartmentDraft) -> AppResult<Option<View>> {
        let editing = {
            let mut drafts = self.drafts.lock().await;
            drafts.department = draft.clone();
            drafts.editing_department.clone()
        };
        let payload = draft.submit()?;
        let message = match editing {
            Some(id) => {
                self.store.update_department(&id, payload).await?;
                "Department updated"
            }
            None => {
                self.store.create_department(payload).await?;
                "Department added"
            }
        };
        self.drafts.lock().await.cancel_department_edit();
        self.notify(message).await;
        Ok(None)
    }

    pub async fn cancel_department_edit(&self) -> AppResult<Option<View>> {
        self.drafts.lock().await.cancel_department_edit();
        Ok(Some(View::Departments))
    }

    pub async fn add_user(&self, draft: UserDraft) -> AppResult<Option<View>> {
        self.drafts.lock().await.user = draft.clone();
        let user = draft.submit()?;
        let name = user.name.clone();
        self.store.add_user(user).await?;
        self.drafts.lock().await.user.reset();
        self.notify(format!("User {} added", name)).await;
        Ok(None)
    }

    pub async fn assign(&self, draft: AssignmentDraft) -> AppResult<Option<View>> {
        self.drafts.lock().await.assignment = draft.clone();
        let request = draft.submit()?;
        self.store
            .assign_asset(&request.asset_id, &request.assignee, request.location)
            .await?;
        self.drafts.lock().await.assignment.reset();
        self.notify(format!("Asset {} assigned to {}", request.asset_id, request.assignee))
            .await;
        Ok(None)
    }

    // --- Row actions and data ---

    pub async fn run_action(
        &self,
        collection: Collection,
        action: &str,
        id: &str,
    ) -> AppResult<Option<View>> {
        self.actions.dispatch(self, action, collection, id).await
    }

    pub async fn refresh(&self, collection: Collection) -> AppResult<Option<View>> {
        self.store.refresh(collection).await?;
        Ok(None)
    }

    pub async fn export(&self, collection: Collection) -> AppResult<CsvReport> {
        let snapshot = self.store.snapshot().await;
        crate::services::export::export(collection, &snapshot)
    }
}
