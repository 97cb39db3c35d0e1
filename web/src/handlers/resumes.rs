//! Resume handlers
//!
//! Listing, viewing, creating and renaming resumes.

use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    Extension, Form as FormBody,
};
use serde_json::json;

use super::render;
use crate::domain::entities::{CurrentUser, ResumeId};
use crate::error::AppError;
use crate::forms::{Form, FormErrors, ResumeForm};
use crate::AppState;

/// GET /resumes/
///
/// The caller's resumes, by title, with their item counts.
pub async fn list_resumes(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Html<String>, AppError> {
    let summaries = state.resume_service.list_resumes(&user.id).await?;

    let resumes: Vec<_> = summaries
        .iter()
        .map(|s| {
            json!({
                "id": s.resume.id,
                "title": s.resume.title,
                "num_items": s.num_items,
            })
        })
        .collect();

    render(&state, "resume/resume_list.html", json!({ "resumes": resumes }))
}

/// GET /resumes/:id/
pub async fn view_resume(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> Result<Html<String>, AppError> {
    let (resume, items) = state
        .resume_service
        .get_resume_with_items(&user.id, &ResumeId(id))
        .await?;

    let resume_items: Vec<_> = items
        .iter()
        .map(|item| {
            json!({
                "id": item.id,
                "title": item.title,
                "company": item.company,
                "start_date": item.start_date,
                "end_date": item.end_date,
                "description": item.description,
                "is_current": item.is_current(),
                "label": item.label(&resume),
            })
        })
        .collect();

    render(
        &state,
        "resume/resume.html",
        json!({
            "resume_id": resume.id,
            "resume_title": resume.title,
            "resume_items": resume_items,
        }),
    )
}

/// GET /resumes/new/
pub async fn new_resume_form(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render(
        &state,
        "resume/resume_create.html",
        json!({ "form": ResumeForm::default(), "errors": FormErrors::default() }),
    )
}

/// POST /resumes/new/
///
/// Creates a resume owned by the caller. An invalid submission is not
/// re-rendered: it aborts the request with `InvalidResumeForm`.
pub async fn create_resume(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    FormBody(form): FormBody<ResumeForm>,
) -> Result<Response, AppError> {
    let title = form.clean().map_err(AppError::InvalidResumeForm)?;

    let resume = state.resume_service.create_resume(&user.id, title).await?;

    Ok(Redirect::to(&resume.url()).into_response())
}

/// GET /resumes/:id/edit/
pub async fn edit_resume_form(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> Result<Html<String>, AppError> {
    let resume = state.resume_service.get_resume(&user.id, &ResumeId(id)).await?;

    render(
        &state,
        "resume/resume_edit.html",
        json!({
            "resume": { "id": resume.id, "title": resume.title },
            "form": ResumeForm::from_resume(&resume),
            "errors": FormErrors::default(),
        }),
    )
}

/// POST /resumes/:id/edit/
///
/// A valid title is saved and the caller is sent back to the list. An
/// invalid one shows the submitted value again, without error messages.
pub async fn rename_resume(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
    FormBody(form): FormBody<ResumeForm>,
) -> Result<Response, AppError> {
    let resume = state.resume_service.get_resume(&user.id, &ResumeId(id)).await?;

    match form.clean() {
        Ok(title) => {
            state.resume_service.rename_resume(&resume, &title).await?;
            Ok(Redirect::to("/resumes/").into_response())
        }
        Err(errors) => {
            tracing::debug!(resume_id = %resume.id, errors = %errors, "Rename rejected");
            let page = render(
                &state,
                "resume/resume_edit.html",
                json!({
                    "resume": { "id": resume.id, "title": resume.title },
                    "form": form,
                    "errors": FormErrors::default(),
                }),
            )?;
            Ok(page.into_response())
        }
    }
}
