//! Resume item handlers
//!
//! Items are always addressed through their parent resume. The parent is
//! looked up first (a miss is a server error), then the item is looked up
//! within it (a miss is a 404).

use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    Extension, Form as FormBody,
};
use serde::Deserialize;
use serde_json::{json, Value};

use super::render;
use crate::domain::entities::{CurrentUser, ResumeId, ResumeItemId};
use crate::error::AppError;
use crate::forms::{Form, FormErrors, ResumeItemForm};
use crate::AppState;

/// Body of the item edit page. The delete button posts `delete`; the save
/// button posts the item fields.
#[derive(Debug, Deserialize)]
pub struct ItemEditSubmission {
    #[serde(default)]
    pub delete: Option<String>,
    #[serde(flatten)]
    pub form: ResumeItemForm,
}

fn item_create_context(resume_id: ResumeId, form: &ResumeItemForm, errors: &FormErrors) -> Value {
    json!({
        "resume_id": resume_id,
        "form": form,
        "errors": errors,
    })
}

fn item_edit_context(
    resume_id: ResumeId,
    item_id: ResumeItemId,
    form: &ResumeItemForm,
    errors: &FormErrors,
    message: Option<&str>,
) -> Value {
    json!({
        "resume_id": resume_id,
        "item_id": item_id,
        "form": form,
        "errors": errors,
        "message": message,
    })
}

/// GET /resumes/:id/items/new/
pub async fn new_item_form(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> Result<Html<String>, AppError> {
    let resume = state.resume_service.get_resume(&user.id, &ResumeId(id)).await?;

    render(
        &state,
        "resume/resume_item_create.html",
        item_create_context(resume.id, &ResumeItemForm::default(), &FormErrors::default()),
    )
}

/// POST /resumes/:id/items/new/
///
/// The new item always belongs to the resume in the path. On success the
/// caller lands on the new item's edit page.
pub async fn create_item(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
    FormBody(form): FormBody<ResumeItemForm>,
) -> Result<Response, AppError> {
    let resume = state.resume_service.get_resume(&user.id, &ResumeId(id)).await?;

    match form.clean() {
        Ok(fields) => {
            let item = state.resume_service.create_item(&resume, fields).await?;
            Ok(Redirect::to(&item.edit_url()).into_response())
        }
        Err(errors) => {
            let page = render(
                &state,
                "resume/resume_item_create.html",
                item_create_context(resume.id, &form, &errors),
            )?;
            Ok(page.into_response())
        }
    }
}

/// GET /resumes/:id/items/:item_id/edit/
pub async fn edit_item_form(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path((id, item_id)): Path<(i64, i64)>,
) -> Result<Html<String>, AppError> {
    let resume = state.resume_service.get_resume(&user.id, &ResumeId(id)).await?;
    let item = state
        .resume_service
        .get_item(&resume, &ResumeItemId(item_id))
        .await?;

    render(
        &state,
        "resume/resume_item_edit.html",
        item_edit_context(
            resume.id,
            item.id,
            &ResumeItemForm::from_item(&item),
            &FormErrors::default(),
            None,
        ),
    )
}

/// POST /resumes/:id/items/:item_id/edit/
///
/// Deletes the item when `delete` is present, otherwise saves the submitted
/// fields and stays on the page.
pub async fn submit_item_edit(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path((id, item_id)): Path<(i64, i64)>,
    FormBody(submission): FormBody<ItemEditSubmission>,
) -> Result<Response, AppError> {
    let resume = state.resume_service.get_resume(&user.id, &ResumeId(id)).await?;
    let item = state
        .resume_service
        .get_item(&resume, &ResumeItemId(item_id))
        .await?;

    if submission.delete.is_some() {
        state.resume_service.delete_item(&item).await?;
        return Ok(Redirect::to(&resume.url()).into_response());
    }

    let context = match submission.form.clean() {
        Ok(fields) => {
            let updated = state.resume_service.update_item(&item, &fields).await?;
            item_edit_context(
                resume.id,
                updated.id,
                &ResumeItemForm::from_item(&updated),
                &FormErrors::default(),
                Some("Resume item updated"),
            )
        }
        Err(errors) => item_edit_context(resume.id, item.id, &submission.form, &errors, None),
    };

    Ok(render(&state, "resume/resume_item_edit.html", context)?.into_response())
}
