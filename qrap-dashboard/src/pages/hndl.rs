use crate::bridge;
use qrap_core::dto::{HndlRequest, HndlResult};
use qrap_core::hndl::{
    parse_shelf_life, SubmitState, ALGORITHMS, DEFAULT_ALGORITHM, DEFAULT_SHELF_LIFE_YEARS,
    SHELF_LIFE_MAX, SHELF_LIFE_MIN,
};
use leptos::*;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn HndlPage() -> impl IntoView {
    let algorithm = create_rw_signal(DEFAULT_ALGORITHM.to_string());
    let shelf_life = create_rw_signal(DEFAULT_SHELF_LIFE_YEARS);
    let result = create_rw_signal(None::<HndlResult>);
    let submit = create_rw_signal(SubmitState::default());

    let calculate = move || {
        let request = HndlRequest::new(algorithm.get_untracked(), shelf_life.get_untracked());
        submit.update(SubmitState::begin);
        spawn_local(async move {
            match bridge::calculate_hndl(&request).await {
                Ok(r) => result.set(Some(r)),
                Err(e) => {
                    leptos::logging::warn!("hndl calculation for {} failed: {e}", request.algorithm);
                    result.set(None);
                }
            }
            submit.update(SubmitState::finish);
        });
    };

    view! {
      <div class="qtn-hndl-page">
        <div class="qtn-card">
          <h2>"Harvest Now, Decrypt Later Analysis"</h2>
          <p>"Estimate HNDL risk based on algorithm and data shelf life"</p>
          <div class="qtn-form-row">
            <div>
              <label for="algorithm">"Algorithm: "</label>
              <select
                id="algorithm"
                on:change=move |ev| algorithm.set(event_target_value(&ev))
              >
                {ALGORITHMS
                    .iter()
                    .map(|&a| view! {
                      <option value=a selected=move || algorithm.get() == a>{a}</option>
                    })
                    .collect_view()}
              </select>
            </div>
            <div>
              <label for="shelf-life">"Data shelf life (years): "</label>
              <input
                id="shelf-life"
                type="number"
                min=SHELF_LIFE_MIN.to_string()
                max=SHELF_LIFE_MAX.to_string()
                prop:value=move || shelf_life.get().to_string()
                on:input=move |ev| shelf_life.set(parse_shelf_life(&event_target_value(&ev)))
              />
            </div>
            <button
              class="qtn-btn qtn-btn--primary"
              on:click=move |_| calculate()
              disabled=move || submit.get().is_disabled()
            >
              {move || submit.get().label()}
            </button>
          </div>

          {move || result.get().map(|r| view! {
            <div class="qtn-hndl-result">
              <div class="qtn-card">
                <h3>"Result"</h3>
                <table class="qtn-result-table">
                  <tbody>
                    {r.rows()
                        .into_iter()
                        .map(|(label, value)| view! {
                          <tr>
                            <td class="qtn-result-table__label">{label}</td>
                            <td>{value}</td>
                          </tr>
                        })
                        .collect_view()}
                  </tbody>
                </table>
              </div>
            </div>
          })}
        </div>
      </div>
    }
}
