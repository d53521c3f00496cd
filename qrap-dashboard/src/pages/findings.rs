use crate::bridge;
use qrap_core::dto::Finding;
use qrap_core::load::{
    findings_empty_message, identifier_from_query, FindingsTrigger, ListLoad, ListState,
    RequestSeq,
};
use leptos::*;
use leptos_router::use_query_map;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn FindingsPage() -> impl IntoView {
    let query = use_query_map();
    let findings = create_rw_signal(ListLoad::<Finding>::default());
    let assessment_id = create_rw_signal(String::new());
    let seq = store_value(RequestSeq::default());

    // Follows `?assessment_id=` on mount and on back/forward navigation.
    // Only a differing value is written, so the seed fetches once.
    create_effect(move |_| {
        let from_query = query.with(|q| q.get("assessment_id").cloned());
        let current = assessment_id.get_untracked();
        if let Some(id) = identifier_from_query(&current, from_query.as_deref()) {
            assessment_id.set(id);
        }
    });

    // No debounce and no cancellation: every identifier change issues its own
    // request and the last one to resolve wins.
    let load_for = move |id: String| match FindingsTrigger::for_id(&id) {
        FindingsTrigger::Clear => findings.update(ListLoad::clear),
        FindingsTrigger::Fetch(id) => {
            let ticket = seq.with_value(RequestSeq::issue);
            findings.update(ListLoad::begin);
            spawn_local(async move {
                let result = bridge::fetch_findings(&id).await;
                if !seq.try_with_value(|s| s.is_current(ticket)).unwrap_or(true) {
                    leptos::logging::warn!("findings for {id}: response arrived after a newer request");
                }
                if let Err(e) = &result {
                    leptos::logging::warn!("findings request for {id} failed: {e}");
                }
                findings.update(|list| list.apply(result));
            });
        }
    };

    create_effect(move |_| load_for(assessment_id.get()));

    view! {
      <div class="qtn-findings-page">
        <div class="qtn-card">
          <div class="qtn-card__header">
            <h2>"Findings"</h2>
            <p>"Browse findings from risk assessments"</p>
            <button
              class="qtn-btn qtn-btn--primary"
              on:click=move |_| load_for(assessment_id.get_untracked())
            >"Refresh"</button>
          </div>
          <div class="qtn-field">
            <label for="assessment-id">"Assessment ID: "</label>
            <input
              id="assessment-id"
              type="text"
              placeholder="Enter assessment UUID"
              prop:value=move || assessment_id.get()
              on:input=move |ev| assessment_id.set(event_target_value(&ev))
            />
          </div>
          {move || match findings.with(ListLoad::state) {
              ListState::Loading => view! { <div class="qtn-loading">"Loading..."</div> }.into_view(),
              ListState::Empty => view! {
                <p>{findings_empty_message(&assessment_id.get())}</p>
              }.into_view(),
              ListState::Rows(_) => view! {
                <table class="qtn-table">
                  <thead>
                    <tr>
                      <th>"Title"</th>
                      <th>"Category"</th>
                      <th>"Risk"</th>
                      <th>"Asset"</th>
                      <th>"Current"</th>
                      <th>"Recommended"</th>
                    </tr>
                  </thead>
                  <tbody>
                    {findings.with(|list| {
                        list.items()
                            .iter()
                            .map(|f| view! {
                              <tr>
                                <td title=f.description.clone()>{f.title.clone()}</td>
                                <td>{f.category.clone()}</td>
                                <td>{f.risk_level.clone()}</td>
                                <td>{f.affected_asset.clone()}</td>
                                <td>{f.current_algorithm_label().to_string()}</td>
                                <td>{f.recommended_algorithm_label().to_string()}</td>
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
