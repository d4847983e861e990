//! Server-rendered screens. Each function is pure: state in, HTML out.

pub mod error;
pub mod input;
pub mod layout;
pub mod loading;
pub mod result;

use crate::evaluation::filter::StatusFilter;
use crate::session::controller::AppStep;

/// Renders the full page for `step`: exactly one screen, chosen by the step.
pub fn render_step(step: &AppStep, base_path: &str, filter: StatusFilter) -> String {
    let reset_action = format!("{base_path}/reset");
    match step {
        AppStep::Idle => {
            let action = format!("{base_path}/submit");
            layout::page(
                &input::render(&input::InputView {
                    action: &action,
                    name: "",
                    alert: None,
                }),
                None,
                Some(&reset_action),
            )
        }
        AppStep::Analyzing {
            candidate_name,
            file_name,
            ..
        } => layout::page(
            &loading::render(candidate_name, file_name, &reset_action),
            Some(loading::REFRESH_SECS),
            Some(&reset_action),
        ),
        AppStep::Succeeded {
            result: evaluation,
            ..
        } => layout::page(
            &result::render(&result::ResultView {
                result: evaluation,
                filter,
                base_path,
            }),
            None,
            Some(&reset_action),
        ),
        AppStep::Failed { message } => layout::page(
            &error::render(message, &reset_action),
            None,
            Some(&reset_action),
        ),
    }
}
