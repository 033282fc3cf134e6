use esg_core::model::Speaker;
use services::SubmissionListItem;
use storage::repository::{ProfileSubmission, SubmissionId};

use crate::vm::profile_vm::{ProfileChartVm, map_profile_chart};
use crate::vm::time_fmt::format_datetime;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmissionCardVm {
    pub id: u64,
    pub submitted_at_str: String,
    pub scores: String,
    pub objective: &'static str,
    pub horizon: &'static str,
    pub product_count: usize,
}

#[must_use]
pub fn map_submission_cards(items: &[SubmissionListItem]) -> Vec<SubmissionCardVm> {
    items
        .iter()
        .map(|item| SubmissionCardVm {
            id: item.id.value(),
            submitted_at_str: format_datetime(item.submitted_at),
            scores: item.profile.summary_line(),
            objective: item.objective.label(),
            horizon: item.horizon.label(),
            product_count: item.product_count,
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranscriptLineVm {
    pub speaker: &'static str,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmissionDetailVm {
    pub id: u64,
    pub submitted_at_str: String,
    pub chart: ProfileChartVm,
    pub objective: &'static str,
    pub horizon: &'static str,
    pub products: Vec<&'static str>,
    pub transcript: Vec<TranscriptLineVm>,
}

#[must_use]
pub fn map_submission_detail(
    id: SubmissionId,
    submission: &ProfileSubmission,
) -> SubmissionDetailVm {
    let transcript = submission
        .transcript
        .entries()
        .iter()
        .map(|entry| TranscriptLineVm {
            speaker: match entry.speaker {
                Speaker::Bot => "Chatbot",
                Speaker::User => "Inversor",
            },
            text: entry.text.clone(),
        })
        .collect();

    SubmissionDetailVm {
        id: id.value(),
        submitted_at_str: format_datetime(submission.submitted_at),
        chart: map_profile_chart(&submission.profile),
        objective: submission.form.objective().label(),
        horizon: submission.form.horizon().label(),
        products: submission
            .form
            .products()
            .iter()
            .map(|product| product.label())
            .collect(),
        transcript,
    }
}
