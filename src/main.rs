use pagly_backend::settings::Settings;
use pagly_backend::telemetry;

#[rocket::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    telemetry::init();

    let settings = Settings::new()?;
    tracing::info!(
        session_ttl_secs = settings.session_ttl_secs,
        seed_products = settings.seed_products,
        "starting PAGLY backend"
    );

    let _rocket = pagly_backend::build(rocket::Config::figment(), settings)
        .launch()
        .await
        .map_err(|err| {
            tracing::error!(error = %err, "server stopped with an error");
            err
        })?;

    Ok(())
}
