use crate::configuration::{Settings, SiteSettings};
use crate::{
    email_client::EmailClient,
    notification::OwnerNotifier,
    routes::{health_check, inquiry_page, json_config, send_inquiry, submit_inquiry},
};
use actix_web::{App, HttpServer, dev::Server, web};
use anyhow::Context;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

/// `Application` wraps actix_web's `dev::Server` together with the port it was bound to,
/// which `dev::Server` does not expose. Tests bind to port 0 and need to know the real one.
pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    /// Given a configuration of type `Settings`:
    /// 1. An email client is configured and wrapped in the owner notifier
    /// 2. A server is started with `run`, which can be accesed using `run_until_stopped`
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let sender_email = configuration
            .email_client
            .sender()
            .map_err(anyhow::Error::msg)
            .context("Invalid sender email address")?;
        let recipient_email = configuration
            .inquiry
            .recipient(&sender_email)
            .map_err(anyhow::Error::msg)
            .context("Invalid inquiry recipient email address")?;

        let timeout = configuration.email_client.timeout();
        let email_client = EmailClient::new(
            configuration.email_client.base_url,
            sender_email,
            configuration.email_client.authorization_token,
            timeout,
        )
        .context("Failed to build the email HTTP client")?;
        let notifier = OwnerNotifier::new(
            email_client,
            recipient_email,
            configuration.inquiry.subject,
        );

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();

        let server = run(listener, notifier, configuration.site)?;
        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// This function only returns when the application is stopped
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(
    listener: TcpListener,
    notifier: OwnerNotifier,
    site: SiteSettings,
) -> Result<Server, std::io::Error> {
    // web::Data wraps our state in an Arc<T>
    let notifier = web::Data::new(notifier);
    let site = web::Data::new(site);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/", web::get().to(inquiry_page))
            .route("/", web::post().to(submit_inquiry))
            .route("/health_check", web::get().to(health_check))
            .route("/api/sendInquiry", web::post().to(send_inquiry))
            .app_data(json_config())
            .app_data(notifier.clone())
            .app_data(site.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}
