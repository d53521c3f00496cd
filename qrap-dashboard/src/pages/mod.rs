mod assessments;
mod dashboard;
mod findings;
mod hndl;

pub use assessments::AssessmentsPage;
pub use dashboard::DashboardPage;
pub use findings::FindingsPage;
pub use hndl::HndlPage;
