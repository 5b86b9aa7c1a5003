use std::sync::LazyLock;

use inquiry_desk::{
    configuration::get_configuration,
    startup::Application,
    telemetry::{get_subscriber, init_subscriber_as_global_default},
};
use wiremock::MockServer;

// Ensure that the 'Tracing' stack is only initialized once using `LazyLock`
static TRACING: LazyLock<()> = LazyLock::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    // The sink is part of the type returned by `get_subscriber`, so the two branches
    // cannot share a variable.
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber_as_global_default(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber_as_global_default(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    pub email_server: MockServer,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub async fn post_inquiry(&self, body: &serde_json::Value) -> reqwest::Response {
        self.api_client
            .post(&format!("{}/api/sendInquiry", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_inquiry_form(&self, body: &serde_json::Value) -> reqwest::Response {
        self.api_client
            .post(&format!("{}/", &self.address))
            .form(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_inquiry_page_html(&self) -> String {
        self.api_client
            .get(&format!("{}/", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
            .text()
            .await
            .unwrap()
    }

    /// Parses the JSON body of the `n`-th request the email API received.
    pub async fn sent_email(&self, n: usize) -> serde_json::Value {
        let requests = self.email_server.received_requests().await.unwrap();
        serde_json::from_slice(&requests[n].body).unwrap()
    }
}

/// The inquiry every happy-path test starts from.
pub fn valid_inquiry() -> serde_json::Value {
    serde_json::json!({
        "name": "Jane Doe",
        "age": "30",
        "email": "jane@x.com",
        "contact": "09171234567",
        "location": "Makati",
        "visitDate": ""
    })
}

pub async fn spawn_app() -> TestApp {
    // The first time `initialize` is invoked the code in `TRACING` is executed.
    // All other invocations will instead skip execution.
    LazyLock::force(&TRACING);

    // Stands in for the transactional email API
    let email_server = MockServer::start().await;

    let configuration = {
        let mut c = get_configuration().expect("Failed to read configuration.");
        // Port 0 asks the OS for any free port
        c.application.port = 0;
        c.email_client.base_url = email_server.uri();
        c
    };

    let application = Application::build(configuration)
        .await
        .expect("Failed to build application.");
    let port = application.port();
    let address = format!("http://127.0.0.1:{}", port);
    // Launch the server as a background task
    let _ = tokio::spawn(application.run_until_stopped());

    TestApp {
        address,
        email_server,
        api_client: reqwest::Client::new(),
    }
}
