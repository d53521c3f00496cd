use crate::pages::{AssessmentsPage, DashboardPage, FindingsPage, HndlPage};
use leptos::*;
use leptos_router::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
      <Router>
        <div class="qtn-app">
          <nav class="qtn-nav">
            <div class="qtn-nav__brand">"QRAP Dashboard"</div>
            <div class="qtn-nav__links">
              <A href="/" exact=true>"Dashboard"</A>
              <A href="/assessments">"Assessments"</A>
              <A href="/findings">"Findings"</A>
              <A href="/hndl">"HNDL Analysis"</A>
            </div>
          </nav>
          <main class="qtn-main">
            <Routes>
              <Route path="/" view=DashboardPage/>
              <Route path="/assessments" view=AssessmentsPage/>
              <Route path="/findings" view=FindingsPage/>
              <Route path="/hndl" view=HndlPage/>
            </Routes>
          </main>
        </div>
      </Router>
    }
}
