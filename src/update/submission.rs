//! Generate and download update handler
//!
//! Preconditions are checked before anything is sent. Completion clears the
//! in-flight flag whatever the outcome, so the generate control always comes
//! back.

use crate::commands::{Alert, Cmd};
use crate::messages::SubmissionMsg;
use crate::model::{AppModel, GeneratedDocument, DEFAULT_OUTPUT_NAME};

const NO_DEFAULT_DOCUMENT: &str =
    "No default PDF is available. Please add a PDF to the uploads folder.";
const MISSING_FILE_NAME: &str = "Please enter a file name for the generated PDF.";
const NO_ANNOTATIONS: &str = "No annotations entered. The PDF will be generated without bubbles.";
const GENERATED: &str = "PDF generated successfully. You can download it now.";
const NOTHING_TO_DOWNLOAD: &str = "No PDF available for download. Please generate one first.";

pub fn update_submission(model: &mut AppModel, msg: SubmissionMsg) -> Option<Cmd> {
    match msg {
        SubmissionMsg::Submit => submit(model),
        SubmissionMsg::Completed(result) => {
            model.submission.in_flight = false;
            let pending = model.submission.pending.take();

            let alert = match result {
                Ok(response) => {
                    let file_name = response
                        .announced_file_name()
                        .or_else(|| pending.map(|req| req.fallback_download_name()))
                        .unwrap_or_else(|| format!("{}.pdf", DEFAULT_OUTPUT_NAME));
                    tracing::info!(
                        "Generated {} ({} bytes)",
                        file_name,
                        response.payload.len()
                    );
                    model.submission.generated = Some(GeneratedDocument {
                        file_name,
                        payload: response.payload,
                    });
                    Alert::success(GENERATED)
                }
                Err(failure) => {
                    let message = failure.user_message();
                    tracing::warn!("Generation failed: {}", message);
                    Alert::danger(message)
                }
            };

            Some(Cmd::batch(vec![Cmd::ShowAlert(alert), Cmd::Render]))
        }
        SubmissionMsg::Download => match &model.submission.generated {
            Some(doc) => Some(Cmd::TriggerDownload {
                file_name: doc.file_name.clone(),
                payload: doc.payload.clone(),
            }),
            None => Some(Cmd::ShowAlert(Alert::warning(NOTHING_TO_DOWNLOAD))),
        },
    }
}

fn submit(model: &mut AppModel) -> Option<Cmd> {
    if model.submission.in_flight {
        tracing::debug!("Submission already in flight, ignoring");
        return None;
    }

    if !model.form.default_document_available {
        tracing::warn!("Submission rejected: no default document");
        return Some(Cmd::ShowAlert(Alert::danger(NO_DEFAULT_DOCUMENT)));
    }

    let request = model.generation_request();
    if request.file_name.is_empty() {
        tracing::warn!("Submission rejected: blank file name");
        return Some(Cmd::ShowAlert(Alert::warning(MISSING_FILE_NAME)));
    }

    let mut cmds = Vec::with_capacity(3);
    if model.form.markdown.trim().is_empty() {
        cmds.push(Cmd::ShowAlert(Alert::info(NO_ANNOTATIONS)));
    }

    tracing::info!(
        "Submitting generation request for {} ({} pages)",
        request.file_name,
        request.page_count
    );
    model.submission.in_flight = true;
    model.submission.pending = Some(request.clone());
    cmds.push(Cmd::SubmitGeneration(request));
    cmds.push(Cmd::Render);

    Some(Cmd::batch(cmds))
}
