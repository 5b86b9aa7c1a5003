use inquiry_desk::{
    configuration::get_configuration,
    startup::Application,
    telemetry::{get_subscriber, init_subscriber_as_global_default},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("inquiry_desk".into(), "info".into(), std::io::stdout);
    init_subscriber_as_global_default(subscriber);

    let configuration = get_configuration()?;
    let application = Application::build(configuration).await?;
    tracing::info!(port = application.port(), "Inquiry desk is listening");

    application.run_until_stopped().await?;
    Ok(())
}
