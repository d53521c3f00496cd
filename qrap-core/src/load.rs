use crate::api::should_fetch_findings;
use std::cell::Cell;

/// What a list page shows for its current `loading` flag and row count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListState {
    Loading,
    Empty,
    Rows(usize),
}

impl ListState {
    pub fn of(loading: bool, rows: usize) -> Self {
        match (loading, rows) {
            (true, _) => ListState::Loading,
            (false, 0) => ListState::Empty,
            (false, n) => ListState::Rows(n),
        }
    }
}

/// Rows plus loading flag for one list page.
///
/// Every applied response replaces the rows wholesale; nothing is merged by
/// identifier, so a refreshed row with an unchanged id still shows its new
/// fields.
#[derive(Clone, Debug, PartialEq)]
pub struct ListLoad<T> {
    items: Vec<T>,
    loading: bool,
}

impl<T> Default for ListLoad<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
        }
    }
}

impl<T> ListLoad<T> {
    pub fn begin(&mut self) {
        self.loading = true;
    }

    /// Empty list without a request, as for a blank findings identifier.
    pub fn clear(&mut self) {
        self.items.clear();
        self.loading = false;
    }

    /// Any failure leaves the list empty.
    pub fn apply<E>(&mut self, result: Result<Vec<T>, E>) {
        self.items = result.unwrap_or_default();
        self.loading = false;
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn state(&self) -> ListState {
        ListState::of(self.loading, self.items.len())
    }
}

/// What an identifier change on the findings page does.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FindingsTrigger {
    Clear,
    Fetch(String),
}

impl FindingsTrigger {
    pub fn for_id(assessment_id: &str) -> Self {
        if should_fetch_findings(assessment_id) {
            FindingsTrigger::Fetch(assessment_id.to_owned())
        } else {
            FindingsTrigger::Clear
        }
    }
}

/// New identifier to adopt after the `assessment_id` query parameter changed,
/// or `None` when it already matches. A missing parameter reads as empty.
pub fn identifier_from_query(current: &str, from_query: Option<&str>) -> Option<String> {
    let wanted = from_query.unwrap_or_default();
    (wanted != current).then(|| wanted.to_owned())
}

pub const NO_ASSESSMENTS: &str = "No assessments found. Create one using the API.";
pub const NO_FINDINGS: &str = "No findings for this assessment.";
pub const FINDINGS_PROMPT: &str = "Enter an assessment ID to view findings.";

pub fn findings_empty_message(assessment_id: &str) -> &'static str {
    if assessment_id.is_empty() {
        FINDINGS_PROMPT
    } else {
        NO_FINDINGS
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Numbers requests as they are issued.
///
/// Pages still apply responses in resolution order, so a slow older request
/// can overwrite a newer one; this only lets them notice when it happens.
#[derive(Debug, Default)]
pub struct RequestSeq {
    issued: Cell<u64>,
}

impl RequestSeq {
    pub fn issue(&self) -> Ticket {
        let next = self.issued.get() + 1;
        self.issued.set(next);
        Ticket(next)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.issued.get() == ticket.0
    }

}
