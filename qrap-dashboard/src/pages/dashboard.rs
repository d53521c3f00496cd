use crate::bridge;
use qrap_core::stats::DashboardStats;
use leptos::*;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let stats = create_rw_signal(DashboardStats::default());
    let loading = create_rw_signal(true);

    spawn_local(async move {
        match bridge::fetch_dashboard_stats().await {
            Ok(s) => stats.set(s),
            // Counters stay at zero; nothing is shown to the user.
            Err(e) => leptos::logging::warn!("dashboard stats unavailable: {e}"),
        }
        loading.set(false);
    });

    view! {
      <Show
        when=move || !loading.get()
        fallback=|| view! { <div class="qtn-loading">"Loading dashboard..."</div> }
      >
        <div class="qtn-dashboard">
          <h1>"Risk Assessment Dashboard"</h1>
          <div class="qtn-dashboard__grid">
            {move || {
                stats
                    .get()
                    .tiles()
                    .into_iter()
                    .map(|(label, value)| view! {
                      <div class="qtn-card">
                        <h3>{label}</h3>
                        <div class="qtn-stat">{value}</div>
                      </div>
                    })
                    .collect_view()
            }}
          </div>
        </div>
      </Show>
    }
}
