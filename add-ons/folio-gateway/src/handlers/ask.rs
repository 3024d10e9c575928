//! Ask handler: one question in, one `{ "answer": ... }` out.
//!
//! All routing lives in [`folio_core::QuestionRouter`]; this module only maps the
//! router's [`Answer`] onto HTTP (200 for rule matches and searches, 500 when the
//! search collaborator failed).

use axum::{extract::State, http::StatusCode, Json};
use folio_core::{Answer, AnswerResponse, AskRequest};

use crate::AppState;

/// POST /ask
pub async fn ask(
    State(state): State<AppState>,
    Json(req): Json<AskRequest>,
) -> (StatusCode, Json<AnswerResponse>) {
    let answer = state.router.answer(req.question()).await;
    into_response(answer)
}

fn into_response(answer: Answer) -> (StatusCode, Json<AnswerResponse>) {
    let status = StatusCode::from_u16(answer.status.http_status())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(AnswerResponse { answer: answer.text }))
}
