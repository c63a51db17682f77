// OneNest - personal organization desktop application
// Entry point and application setup

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod commands;
mod config;
mod error;
mod models;
mod services;
mod storage;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "onenest=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting OneNest application");

    tauri::Builder::default()
        .plugin(tauri_plugin_notification::init())
        .setup(|app| {
            tracing::info!("Running app setup");
            app::setup(app)?;
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::get_app_info,
            commands::list_notes,
            commands::save_note,
            commands::delete_note,
            commands::list_todos,
            commands::todo_stats,
            commands::save_todo,
            commands::toggle_todo,
            commands::delete_todo,
            commands::list_subscriptions,
            commands::subscription_overview,
            commands::save_subscription,
            commands::delete_subscription,
            commands::list_expenses,
            commands::expense_total,
            commands::expense_breakdown,
            commands::expense_report,
            commands::save_expense,
            commands::delete_expense,
            commands::get_preferences,
            commands::get_resolved_preferences,
            commands::update_preferences,
            commands::set_monthly_budget,
            commands::set_currency,
            commands::list_currencies,
            commands::get_exchange_rates,
            commands::refresh_exchange_rates,
            commands::convert_currency,
            commands::dashboard_summary,
            commands::upcoming_reminders,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
