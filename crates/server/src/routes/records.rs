use axum::{
    extract::{Path, State},
    http::{Method, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use minijinja::context;
use serde::Deserialize;
use service::records::domain::RecordInput;
use tracing::info;

use crate::errors::PageError;
use crate::routes::ServerState;

/// Body of `POST /crear`. Missing fields arrive as empty strings and fail validation.
#[derive(Debug, Default, Deserialize)]
pub struct CreateForm {
    #[serde(default, rename = "nuevoDato")]
    pub name: String,
    #[serde(default, rename = "materia")]
    pub subject: String,
    #[serde(default, rename = "nota")]
    pub score: String,
}

/// Body of `POST /editar/:id`.
#[derive(Debug, Default, Deserialize)]
pub struct EditForm {
    #[serde(default, rename = "nuevoNombre")]
    pub name: String,
    #[serde(default, rename = "nuevaMateria")]
    pub subject: String,
    #[serde(default, rename = "nuevaNota")]
    pub score: String,
}

impl From<CreateForm> for RecordInput {
    fn from(f: CreateForm) -> Self { RecordInput { name: f.name, subject: f.subject, score: f.score } }
}

impl From<EditForm> for RecordInput {
    fn from(f: EditForm) -> Self { RecordInput { name: f.name, subject: f.subject, score: f.score } }
}

fn not_found(state: &ServerState, id: i32) -> Result<Response, PageError> {
    let body = state.views.render("not_found.html", context! { id => id })?;
    Ok((StatusCode::NOT_FOUND, Html(body)).into_response())
}

pub async fn index(State(state): State<ServerState>) -> Result<Html<String>, PageError> {
    let rows = state.records.list_all().await?;
    Ok(Html(state.views.render("index.html", context! { datos => rows })?))
}

pub async fn new_form(State(state): State<ServerState>) -> Result<Html<String>, PageError> {
    Ok(Html(state.views.render("crear.html", context! {})?))
}

pub async fn create(State(state): State<ServerState>, Form(form): Form<CreateForm>) -> Result<Redirect, PageError> {
    state.records.create(form.into()).await?;
    Ok(Redirect::to("/"))
}

pub async fn show(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Response, PageError> {
    match state.records.get_by_id(id).await? {
        Some(alumno) => Ok(Html(state.views.render("detalles.html", context! { alumno => alumno })?).into_response()),
        None => not_found(&state, id),
    }
}

pub async fn edit_form(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Response, PageError> {
    match state.records.get_by_id(id).await? {
        Some(alumno) => Ok(Html(state.views.render("editar.html", context! { alumno => alumno })?).into_response()),
        None => not_found(&state, id),
    }
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Form(form): Form<EditForm>,
) -> Result<Redirect, PageError> {
    state.records.update(id, form.into()).await?;
    Ok(Redirect::to("/"))
}

/// Removes the student and its grades; unknown ids still redirect.
/// HEAD reaches this handler through the legacy GET alias and never deletes.
pub async fn delete(
    State(state): State<ServerState>,
    method: Method,
    Path(id): Path<i32>,
) -> Result<Response, PageError> {
    if method == Method::HEAD {
        return Ok(StatusCode::METHOD_NOT_ALLOWED.into_response());
    }
    let outcome = state.records.delete(id).await?;
    if !outcome.student_removed {
        info!(student_id = id, "delete requested for unknown student");
    }
    Ok(Redirect::to("/").into_response())
}
