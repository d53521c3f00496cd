use crate::bridge;
use qrap_core::api::findings_link;
use qrap_core::dto::Assessment;
use qrap_core::load::{ListLoad, ListState, RequestSeq, NO_ASSESSMENTS};
use leptos::*;
use leptos_router::A;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn AssessmentsPage() -> impl IntoView {
    let assessments = create_rw_signal(ListLoad::<Assessment>::default());
    let seq = store_value(RequestSeq::default());

    let load = move || {
        let ticket = seq.with_value(RequestSeq::issue);
        assessments.update(ListLoad::begin);
        spawn_local(async move {
            let result = bridge::fetch_assessments().await;
            if !seq.try_with_value(|s| s.is_current(ticket)).unwrap_or(true) {
                leptos::logging::warn!("assessments: applying a response overtaken by a newer refresh");
            }
            if let Err(e) = &result {
                leptos::logging::warn!("assessments request failed: {e}");
            }
            assessments.update(|list| list.apply(result));
        });
    };

    load();

    view! {
      <div class="qtn-assessments-page">
        <div class="qtn-card">
          <div class="qtn-card__header">
            <h2>"Risk Assessments"</h2>
            <p>"Manage quantum risk assessments for your organisation"</p>
            <button class="qtn-btn qtn-btn--primary" on:click=move |_| load()>"Refresh"</button>
          </div>
          {move || match assessments.with(ListLoad::state) {
              ListState::Loading => view! { <div class="qtn-loading">"Loading..."</div> }.into_view(),
              ListState::Empty => view! { <p>{NO_ASSESSMENTS}</p> }.into_view(),
              ListState::Rows(_) => view! {
                <table class="qtn-table">
                  <thead>
                    <tr>
                      <th>"Name"</th>
                      <th>"Status"</th>
                      <th>"Risk Level"</th>
                      <th>"Score"</th>
                      <th>"Created"</th>
                      <th></th>
                    </tr>
                  </thead>
                  // Unkeyed: a refresh can change fields of a row whose id stays the same.
                  <tbody>
                    {assessments.with(|list| {
                        list.items()
                            .iter()
                            .map(|a| view! {
                              <tr>
                                <td>{a.name.clone()}</td>
                                <td>{a.status.clone()}</td>
                                <td>{a.risk_label().to_string()}</td>
                                <td>{a.score_label()}</td>
                                <td>{a.created_at.clone()}</td>
                                <td><A href=findings_link(&a.id)>"Findings"</A></td>
                              </tr>
                            })
                            .collect_view()
                    })}
                  </tbody>
                </table>
              }.into_view(),
          }}
        </div>
      </div>
    }
}
