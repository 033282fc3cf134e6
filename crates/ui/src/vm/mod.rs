mod chat_vm;
mod markdown_vm;
mod profile_vm;
mod submission_vm;
mod time_fmt;

pub use chat_vm::{ChatIntent, ChatMessageVm, ChatPhase, ChatVm, start_chat};
pub use markdown_vm::{markdown_to_html, sanitize_html};
pub use profile_vm::{
    CHART_HEIGHT, CHART_TITLE, CHART_WIDTH, CHART_Y_LABEL, ProfileBarVm, ProfileChartVm,
    map_profile_chart,
};
pub use submission_vm::{
    SubmissionCardVm, SubmissionDetailVm, TranscriptLineVm, map_submission_cards,
    map_submission_detail,
};
pub use time_fmt::format_datetime;
