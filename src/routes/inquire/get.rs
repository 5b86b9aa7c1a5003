use actix_web::{HttpResponse, error::ErrorInternalServerError, http::header::ContentType, web};

use crate::{configuration::SiteSettings, form::FormState};

use super::page;

pub async fn inquiry_page(site: web::Data<SiteSettings>) -> Result<HttpResponse, actix_web::Error> {
    let body = page::render(&site, &FormState::default()).map_err(ErrorInternalServerError)?;
    Ok(HttpResponse::Ok().content_type(ContentType::html()).body(body))
}
