use wiremock::{
    Mock, ResponseTemplate,
    matchers::{any, method, path},
};

use crate::helpers::{spawn_app, valid_inquiry};

#[tokio::test]
async fn send_inquiry_returns_success_for_a_valid_inquiry() {
    // Arrange
    let app = spawn_app().await;

    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;

    // Act
    let response = app.post_inquiry(&valid_inquiry()).await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({"success": true}));
}

#[tokio::test]
async fn send_inquiry_emails_every_field_to_the_owner() {
    // Arrange
    let app = spawn_app().await;
    let mut inquiry = valid_inquiry();
    inquiry["visitDate"] = "2026-11-02".into();

    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;

    // Act
    app.post_inquiry(&inquiry).await;

    // Assert
    let email = app.sent_email(0).await;
    // Nobody configured a recipient, so the sender account mails itself
    assert_eq!(email["To"], email["From"]);
    assert_eq!(email["Subject"], "New DMCI Homes Inquiry");
    let html = email["HtmlBody"].as_str().unwrap();
    for expected in [
        "<p><strong>Name:</strong> Jane Doe</p>",
        "<p><strong>Age:</strong> 30</p>",
        "<p><strong>Email:</strong> jane@x.com</p>",
        "<p><strong>Contact:</strong> 09171234567</p>",
        "<p><strong>Preferred Location:</strong> Makati</p>",
        "<p><strong>Preferred Date:</strong> 2026-11-02</p>",
    ] {
        assert!(html.contains(expected), "missing `{}` in {}", expected, html);
    }
    let text = email["TextBody"].as_str().unwrap();
    assert!(text.contains("Name: Jane Doe"));
}

#[tokio::test]
async fn send_inquiry_accepts_a_numeric_age() {
    // Arrange
    let app = spawn_app().await;
    let mut inquiry = valid_inquiry();
    inquiry["age"] = 45.into();

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;

    // Act
    let response = app.post_inquiry(&inquiry).await;

    // Assert
    assert_eq!(200, response.status().as_u16());
}

#[tokio::test]
async fn send_inquiry_returns_a_400_when_fields_are_present_but_invalid() {
    // Arrange
    let app = spawn_app().await;
    let long_name = "a".repeat(51);
    let test_cases = vec![
        ("name", "", "empty name"),
        ("name", long_name.as_str(), "name too long"),
        ("age", "15", "too young"),
        ("age", "61", "too old"),
        ("age", "thirty", "non numeric age"),
        ("email", "definitely-not-an-email", "invalid email"),
        ("contact", "12345", "short contact number"),
        ("contact", "0917123456a", "contact number with a letter"),
        ("location", "Cebu", "unknown location"),
    ];

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    for (field, value, description) in test_cases {
        let mut inquiry = valid_inquiry();
        inquiry[field] = value.into();

        // Act
        let response = app.post_inquiry(&inquiry).await;

        // Assert
        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not return a 400 Bad Request when the payload had {}.",
            description
        );
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["success"], false);
        assert!(
            body["errors"][field].is_string(),
            "No error reported for `{}` when the payload had {}.",
            field,
            description
        );
    }
}

#[tokio::test]
async fn send_inquiry_reports_the_age_range_for_an_underage_visitor() {
    // Arrange
    let app = spawn_app().await;
    let mut inquiry = valid_inquiry();
    inquiry["age"] = "15".into();

    // Act
    let response = app.post_inquiry(&inquiry).await;

    // Assert
    assert_eq!(400, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["errors"]["age"], "Age must be between 18 and 60");
    assert!(app.email_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn send_inquiry_returns_a_400_when_data_is_missing() {
    // Arrange
    let app = spawn_app().await;
    let test_cases = vec![
        (serde_json::json!({"name": "Jane Doe"}), "only the name"),
        (serde_json::json!({}), "no fields at all"),
    ];

    for (invalid_body, description) in test_cases {
        // Act
        let response = app.post_inquiry(&invalid_body).await;

        // Assert
        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when the payload had {}",
            description
        );
    }
    assert!(app.email_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn send_inquiry_returns_a_400_for_malformed_json() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app
        .api_client
        .post(&format!("{}/api/sendInquiry", &app.address))
        .header("Content-Type", "application/json")
        .body("{\"name\": ")
        .send()
        .await
        .expect("Failed to execute request.");

    // Assert
    assert_eq!(400, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body,
        serde_json::json!({"success": false, "error": "Invalid request body"})
    );
}

#[tokio::test]
async fn send_inquiry_returns_a_500_if_the_email_cannot_be_sent() {
    // Arrange
    let app = spawn_app().await;

    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.email_server)
        .await;

    // Act
    let response = app.post_inquiry(&valid_inquiry()).await;

    // Assert
    assert_eq!(500, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body,
        serde_json::json!({"success": false, "error": "Failed to send email"})
    );
}

#[tokio::test]
async fn sending_the_same_inquiry_twice_sends_two_emails() {
    // Arrange
    let app = spawn_app().await;

    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&app.email_server)
        .await;

    // Act
    let response_1 = app.post_inquiry(&valid_inquiry()).await;
    let response_2 = app.post_inquiry(&valid_inquiry()).await;

    // Assert
    assert_eq!(200, response_1.status().as_u16());
    assert_eq!(200, response_2.status().as_u16());
}
