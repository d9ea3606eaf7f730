//
// Copyright (c) 2023 Nathan Fiedler
//
use actix_web::{
    delete, get, http::StatusCode, middleware, post, put, web, App, HttpResponse, HttpServer,
    Responder,
};
use anyhow::{anyhow, Error};
use employee_records::data::sources::DataSourceType;
use employee_records::domain::entities::{Notice, NoticeKind, Outcome};
use employee_records::service::{failure_notice, EmployeeForm, Operation, RecordService};
use log::{error, info};
use rustls::{Certificate, PrivateKey, ServerConfig};
use rustls_pemfile::{certs, pkcs8_private_keys};
use std::{env, fs::File, io::BufReader};

///
/// Build the response for a notice, with a status matching its category.
///
fn notice_response(notice: &Notice) -> HttpResponse {
    let status = match notice.kind {
        NoticeKind::Success => StatusCode::OK,
        NoticeKind::ValidationFailed => StatusCode::BAD_REQUEST,
        NoticeKind::NotFound => StatusCode::NOT_FOUND,
        NoticeKind::QueryFailed => StatusCode::INTERNAL_SERVER_ERROR,
    };
    HttpResponse::build(status).json(notice)
}

///
/// Respond to a create, update, or delete request that ran on the blocking
/// thread pool.
///
fn outcome_response<E: std::fmt::Display>(
    operation: Operation,
    result: Result<Result<Outcome, Notice>, E>,
) -> HttpResponse {
    match result {
        Ok(Ok(outcome)) => HttpResponse::Ok().json(outcome),
        Ok(Err(notice)) => notice_response(&notice),
        Err(err) => {
            error!("{} did not run: {}", operation, err);
            notice_response(&failure_notice(operation, &anyhow!("{}", err)))
        }
    }
}

#[get("/employees")]
async fn list_employees(service: web::Data<RecordService>) -> HttpResponse {
    let service = service.into_inner();
    match web::block(move || service.list()).await {
        Ok(Ok(employees)) => HttpResponse::Ok().json(employees),
        Ok(Err(notice)) => notice_response(&notice),
        Err(err) => {
            error!("list did not run: {}", err);
            notice_response(&failure_notice(Operation::List, &anyhow!("{}", err)))
        }
    }
}

#[post("/employees")]
async fn create_employee(
    service: web::Data<RecordService>,
    form: web::Form<EmployeeForm>,
) -> HttpResponse {
    let service = service.into_inner();
    let form = form.into_inner();
    let result = web::block(move || service.create(&form)).await;
    outcome_response(Operation::Create, result)
}

#[put("/employees/{id}")]
async fn update_employee(
    service: web::Data<RecordService>,
    path: web::Path<String>,
    form: web::Form<EmployeeForm>,
) -> HttpResponse {
    let service = service.into_inner();
    let mut form = form.into_inner();
    form.id = path.into_inner();
    let result = web::block(move || service.update(&form)).await;
    outcome_response(Operation::Update, result)
}

#[delete("/employees/{id}")]
async fn delete_employee(
    service: web::Data<RecordService>,
    path: web::Path<String>,
) -> HttpResponse {
    let service = service.into_inner();
    let form = EmployeeForm {
        id: path.into_inner(),
        ..Default::default()
    };
    let result = web::block(move || service.delete(&form)).await;
    outcome_response(Operation::Delete, result)
}

#[get("/status")]
async fn app_status() -> impl Responder {
    HttpResponse::Ok()
}

fn load_rustls_config() -> Result<rustls::ServerConfig, Error> {
    let config = ServerConfig::builder()
        .with_safe_defaults()
        .with_no_client_auth();
    let cert_path = env::var("CERT_FILE").unwrap_or_else(|_| "certs/cert.pem".to_owned());
    let key_path = env::var("KEY_FILE").unwrap_or_else(|_| "certs/key.pem".to_owned());
    let cert_file = &mut BufReader::new(File::open(cert_path)?);
    let key_file = &mut BufReader::new(File::open(key_path)?);
    let cert_chain = certs(cert_file)?.into_iter().map(Certificate).collect();
    let mut keys: Vec<PrivateKey> = pkcs8_private_keys(key_file)?
        .into_iter()
        .map(PrivateKey)
        .collect();
    if keys.is_empty() {
        return Err(anyhow!("could not find PKCS 8 private keys"));
    }
    Ok(config.with_single_cert(cert_chain, keys.remove(0))?)
}

fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(list_employees)
        .service(create_employee)
        .service(update_employee)
        .service(delete_employee)
        .service(app_status)
        .service(
            actix_files::Files::new("/", "static")
                .use_etag(true)
                .use_last_modified(true)
                .index_file("index.html"),
        );
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();
    let db_path = env::var("DB_PATH").unwrap_or_else(|_| "employees.db3".to_owned());
    info!("using database {}", db_path);
    let service = RecordService::with_data_source(DataSourceType::from_path(db_path))
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    let service = web::Data::new(service);
    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());
    let port = env::var("PORT").unwrap_or_else(|_| "3000".to_owned());
    let addr = format!("{}:{}", host, port);
    let protocol = env::var("PROTOCOL").unwrap_or_else(|_| "http".to_owned());
    if protocol == "https" {
        let rustls_config =
            load_rustls_config().map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        info!("listening on https://{}/...", addr);
        HttpServer::new(move || {
            App::new()
                .app_data(service.clone())
                .wrap(middleware::Logger::default())
                .configure(config)
        })
        .bind_rustls(addr, rustls_config)?
        .run()
        .await
    } else {
        info!("listening on http://{}/...", addr);
        HttpServer::new(move || {
            App::new()
                .app_data(service.clone())
                .wrap(middleware::Logger::default())
                .configure(config)
        })
        .bind(addr)?
        .run()
        .await
    }
}
