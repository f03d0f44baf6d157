mod actions;
mod commands;
mod hotkey;
mod languages;
mod panel;
mod persistence;
mod platform;
mod speech;
mod state;

use state::AppState;
use tauri::{
    menu::{Menu, MenuItem, PredefinedMenuItem},
    tray::{MouseButton, MouseButtonState, TrayIconBuilder, TrayIconEvent},
    Manager,
};

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tracing_subscriber::fmt::init();

    tracing::info!("Starting Read Aloud v{}", env!("CARGO_PKG_VERSION"));

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_global_shortcut::Builder::new().build())
        .plugin(tauri_plugin_store::Builder::new().build())
        .manage(AppState::new())
        .manage(actions::ActionRegistry::with_builtin())
        .invoke_handler(tauri::generate_handler![
            commands::speech::read_selected_text,
            commands::speech::read_text,
            commands::speech::stop_reading,
            commands::speech::get_voices,
            commands::panel::get_settings_panel,
            commands::settings::get_settings,
            commands::settings::set_language,
            commands::settings::set_voice,
            commands::settings::set_pitch,
            commands::settings::set_speed,
            commands::settings::get_app_version,
        ])
        .setup(|app| {
            #[cfg(target_os = "macos")]
            {
                use objc2_app_kit::NSApplication;
                use objc2_app_kit::NSApplicationActivationPolicy;
                let mtm = unsafe { objc2::MainThreadMarker::new_unchecked() };
                let ns_app = NSApplication::sharedApplication(mtm);
                ns_app.setActivationPolicy(NSApplicationActivationPolicy::Accessory);
            }

            let loaded = persistence::load_settings(app.handle());
            {
                let state = app.state::<AppState>();
                *state.settings.lock().unwrap() = loaded;
                tracing::info!("Settings loaded from store");
            }

            // Bring up the platform synthesizer and warm the voice cache so
            // the first panel open and the first read see a populated list.
            match speech::system::SystemSynthesizer::new() {
                Ok(mut synth) => {
                    use speech::SpeechSynthesizer;
                    match synth.voices() {
                        Ok(voices) => tracing::info!("{} platform voices available", voices.len()),
                        Err(e) => tracing::warn!("Initial voice enumeration failed: {}", e),
                    }
                    let state = app.state::<AppState>();
                    *state.speech.lock().unwrap() = Some(Box::new(synth));
                }
                Err(e) => {
                    tracing::warn!("Speech service unavailable: {}. Read actions will no-op.", e);
                }
            }

            let read_item = MenuItem::with_id(
                app,
                actions::READ_SELECTED_TEXT,
                format!(
                    "Read Selected Text ({})",
                    hotkey::shortcut_display_label(hotkey::READ_SHORTCUT)
                ),
                true,
                None::<&str>,
            )?;
            let show_settings = MenuItem::with_id(
                app,
                "show_settings",
                "Preferences...",
                true,
                Some("CmdOrCtrl+,"),
            )?;
            let about = MenuItem::with_id(app, "about", "About Read Aloud", true, None::<&str>)?;
            let quit = MenuItem::with_id(app, "quit", "Quit", true, Some("CmdOrCtrl+Q"))?;

            let separator1 = PredefinedMenuItem::separator(app)?;
            let separator2 = PredefinedMenuItem::separator(app)?;

            let menu = Menu::with_items(
                app,
                &[
                    &read_item,
                    &separator1,
                    &show_settings,
                    &separator2,
                    &about,
                    &quit,
                ],
            )?;

            let tray_icon_bytes = include_bytes!("../icons/tray-icon.png");
            let tray_icon =
                tauri::image::Image::from_bytes(tray_icon_bytes).expect("Failed to load tray icon");
            let _tray = TrayIconBuilder::new()
                .icon(tray_icon)
                .icon_as_template(true)
                .menu(&menu)
                .tooltip("Read Aloud")
                .on_menu_event(|app, event| {
                    // The read item shares its menu id with the registered
                    // action, so it dispatches by identifier lookup.
                    let registry = app.state::<actions::ActionRegistry>();
                    if registry.invoke(app, event.id.as_ref()) {
                        return;
                    }
                    match event.id.as_ref() {
                        "show_settings" => {
                            if let Some(window) = app.get_webview_window("main") {
                                let _ = window.show();
                                let _ = window.set_focus();
                            }
                        }
                        "about" => {
                            tracing::info!("Read Aloud v{}", env!("CARGO_PKG_VERSION"));
                        }
                        "quit" => {
                            app.exit(0);
                        }
                        _ => {}
                    }
                })
                .on_tray_icon_event(|tray, event| {
                    if let TrayIconEvent::Click {
                        button: MouseButton::Left,
                        button_state: MouseButtonState::Up,
                        ..
                    } = event
                    {
                        let app = tray.app_handle();
                        if let Some(window) = app.get_webview_window("main") {
                            let _ = window.show();
                            let _ = window.set_focus();
                        }
                    }
                })
                .build(app)?;

            if let Err(e) = hotkey::register_read_shortcut(app.handle(), hotkey::READ_SHORTCUT) {
                tracing::error!("Failed to register read shortcut: {}", e);
            }

            if let Some(window) = app.get_webview_window("main") {
                let w = window.clone();
                window.on_window_event(move |event| {
                    if let tauri::WindowEvent::CloseRequested { api, .. } = event {
                        api.prevent_close();
                        let _ = w.hide();
                    }
                });
            }

            tracing::info!("App setup complete");

            Ok(())
        })
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
