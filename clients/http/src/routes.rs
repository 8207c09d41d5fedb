use actix_web::{delete, error::JsonPayloadError, get, post, put, web, HttpRequest, HttpResponse};
use database::{
    model::person::{Person, PersonPayload},
    persistence::PersonStore,
};

use crate::{error::ApiError, info};

/// Registers every endpoint, the JSON body rules and the unknown endpoint fallback
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(info::home)
        .service(info::info)
        .service(list_persons)
        .service(get_person)
        .service(create_person)
        .service(update_person)
        .service(delete_person)
        .default_service(web::to(unknown_endpoint));
}

/// Bodies that cannot be read as a person are reported like any other validation failure
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::Validation(format!("Invalid request body: {}", err)).into()
}

/// Absent results are the only failure handlers decide on themselves
fn found(person: Option<Person>, id: &str) -> Result<Person, ApiError> {
    person.ok_or_else(|| ApiError::NotFound(id.to_string()))
}

#[get("/api/persons")]
async fn list_persons(store: web::Data<dyn PersonStore>) -> Result<HttpResponse, ApiError> {
    let persons = store.find_all().await?;

    Ok(HttpResponse::Ok().json(persons))
}

#[get("/api/persons/{id}")]
async fn get_person(
    store: web::Data<dyn PersonStore>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let person = found(store.find_by_id(&id).await?, &id)?;

    Ok(HttpResponse::Ok().json(person))
}

#[post("/api/persons")]
async fn create_person(
    store: web::Data<dyn PersonStore>,
    payload: web::Json<PersonPayload>,
) -> Result<HttpResponse, ApiError> {
    let data = payload.into_inner().into_person_data()?;

    let person = store.create(data).await?;

    log::debug!("Created person {}", person.id);

    Ok(HttpResponse::Created().json(person))
}

#[put("/api/persons/{id}")]
async fn update_person(
    store: web::Data<dyn PersonStore>,
    id: web::Path<String>,
    payload: web::Json<PersonPayload>,
) -> Result<HttpResponse, ApiError> {
    let data = payload.into_inner().into_person_data()?;

    let person = found(store.update_by_id(&id, data).await?, &id)?;

    log::debug!("Updated person {}", person.id);

    Ok(HttpResponse::Ok().json(person))
}

#[delete("/api/persons/{id}")]
async fn delete_person(
    store: web::Data<dyn PersonStore>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let person = found(store.delete_by_id(&id).await?, &id)?;

    log::debug!("Deleted person {}", person.id);

    Ok(HttpResponse::NoContent().finish())
}

async fn unknown_endpoint() -> Result<HttpResponse, ApiError> {
    Err(ApiError::UnknownEndpoint)
}
