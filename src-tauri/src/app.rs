//! Application state and initialization
//!
//! This module manages the central application state and lifecycle.
//! All services are initialized here and made available through AppState.

use crate::error::Result;
use crate::services::exchange::MockRateSource;
use crate::services::reminders::TauriScheduler;
use crate::services::{
    DashboardService, ExchangeService, ExpensesService, NotesService, NotificationScheduler,
    PreferencesService, ReminderFacade, SubscriptionsService, TodosService,
};
use crate::storage::{KvStore, Stores};
use std::sync::Arc;
use tauri::{App, Manager};

/// Central application state holding all services
#[derive(Clone)]
pub struct AppState {
    pub app_data_dir: std::path::PathBuf,
    pub notes_service: NotesService,
    pub todos_service: TodosService,
    pub subscriptions_service: SubscriptionsService,
    pub expenses_service: ExpensesService,
    pub preferences_service: PreferencesService,
    pub exchange_service: ExchangeService,
    pub dashboard_service: DashboardService,
}

impl AppState {
    pub fn new(
        app_data_dir: std::path::PathBuf,
        scheduler: Arc<dyn NotificationScheduler>,
    ) -> Self {
        let stores = Stores::new(KvStore::new(app_data_dir.clone()));
        let reminders = ReminderFacade::new(scheduler);
        let preferences_service = PreferencesService::new(stores.preferences);

        Self {
            app_data_dir,
            notes_service: NotesService::new(
                stores.notes.clone(),
                preferences_service.clone(),
                reminders.clone(),
            ),
            todos_service: TodosService::new(stores.todos.clone()),
            subscriptions_service: SubscriptionsService::new(
                stores.subscriptions.clone(),
                preferences_service.clone(),
                reminders.clone(),
            ),
            expenses_service: ExpensesService::new(
                stores.expenses.clone(),
                preferences_service.clone(),
                reminders,
            ),
            exchange_service: ExchangeService::new(
                stores.exchange_rates,
                preferences_service.clone(),
                Arc::new(MockRateSource),
            ),
            dashboard_service: DashboardService::new(
                stores.notes,
                stores.todos,
                stores.expenses,
                stores.subscriptions,
            ),
            preferences_service,
        }
    }
}

/// Application setup - called once on startup
pub fn setup(app: &mut App) -> Result<()> {
    tracing::info!("Initializing application");

    let app_data_dir = app.path().app_data_dir()?;
    tracing::info!("App data directory: {:?}", app_data_dir);

    std::fs::create_dir_all(&app_data_dir)?;

    let scheduler = TauriScheduler::new(app.handle().clone());
    scheduler.start_dispatch();

    let state = AppState::new(app_data_dir, Arc::new(scheduler));
    app.manage(state);

    tracing::info!("Application initialized successfully");

    Ok(())
}
