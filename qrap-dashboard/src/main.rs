//! QRAP dashboard, client-side rendered with Leptos.
//!
//! Built with `trunk`; the bundle talks to `/api/v1/*` on its own origin
//! unless `QRAP_API_BASE` was set at build time.

mod app;
mod bridge;
mod pages;

use leptos::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(|| view! { <app::App/> });
}
