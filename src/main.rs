//! CSR entry point: installs logging, validates configuration, mounts the
//! app. A bad deployment value fails fast here instead of composing a
//! malformed provider request at click time.

#[cfg(feature = "csr")]
fn main() {
    use leptos::prelude::*;

    use signup_web::app::App;
    use signup_web::config::AppConfig;
    use signup_web::pages::config_error::ConfigErrorPage;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    match AppConfig::from_build_env() {
        Ok(config) => {
            leptos::mount::mount_to_body(move || view! { <App config=config/> });
        }
        Err(err) => {
            log::error!("refusing to start: {err}");
            let message = err.to_string();
            leptos::mount::mount_to_body(move || view! { <ConfigErrorPage message=message/> });
        }
    }
}

#[cfg(not(feature = "csr"))]
fn main() {}
