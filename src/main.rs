use actix_web::{web, App, HttpServer};
use tracing_subscriber::EnvFilter;

use orienta_server::models::directory::RoleDirectory;
use orienta_server::state::AppState;
use orienta_server::{admin, counselor, student, teacher};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let directory_path = std::env::var("DIRECTORY_FILE").expect("DIRECTORY_FILE not found");
    let directory = RoleDirectory::load(&directory_path).expect("Failed to load role directory");

    let state = web::Data::new(AppState::new(directory));

    let bind = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    tracing::info!(%bind, "support office server starting");

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            // student booking screens
            .service(web::scope("/student").configure(student::config))
            // psychologist dashboard
            .service(web::scope("/counselor").configure(counselor::config))
            // teacher dashboard
            .service(web::scope("/teacher").configure(teacher::config))
            // administration
            .service(web::scope("/admin").configure(admin::config))
    })
    .bind(&bind)?
    .run()
    .await
}
