mod chat;
mod final_form;
mod profile;
mod state;
mod submissions;

#[cfg(test)]
pub(crate) mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use chat::ChatView;
pub use final_form::FinalForm;
pub use profile::ProfileChart;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use submissions::{SubmissionDetailView, SubmissionsView};
