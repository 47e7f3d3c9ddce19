//! Tests for the outbound message service.

use super::{OutboundMessageService, OutboundRequest};
use crate::message::{
    adapters::memory::{InMemoryMessagePublisher, InMemoryMessageRepository},
    domain::{Broker, ChatId, MessageDirection, MessageStatus, OutboundMessage, SyncEvent},
    error::{OutboundError, PublishError},
    ports::{
        MessageRepository,
        publisher::{MessagePublisher, PublishResult},
    },
    validation::DefaultContentValidator,
};
use async_trait::async_trait;
use mockable::DefaultClock;
use mockall::mock;
use rstest::rstest;
use serde_json::json;
use std::sync::Arc;

mock! {
    Publisher {}

    #[async_trait]
    impl MessagePublisher for Publisher {
        async fn publish_outbound(&self, message: &OutboundMessage) -> PublishResult<()>;
        async fn publish_sync(&self, event: &SyncEvent) -> PublishResult<()>;
    }
}

fn service_with<P: MessagePublisher>(
    publisher: Arc<P>,
) -> (
    OutboundMessageService<DefaultContentValidator, InMemoryMessageRepository, P, DefaultClock>,
    Arc<InMemoryMessageRepository>,
) {
    let repo = Arc::new(InMemoryMessageRepository::new());
    let service = OutboundMessageService::new(
        Arc::new(DefaultContentValidator::new()),
        Arc::clone(&repo),
        publisher,
        Arc::new(DefaultClock),
    );
    (service, repo)
}

fn request(content: serde_json::Value) -> OutboundRequest {
    OutboundRequest::new(ChatId::new(), "+5511999999999", Broker::PontalTech, content)
}

#[rstest]
#[tokio::test]
async fn valid_request_is_stored_and_published() {
    let publisher = Arc::new(InMemoryMessagePublisher::with_exchange("rcs.outbound"));
    let (service, repo) = service_with(Arc::clone(&publisher));

    let record = service
        .submit(request(json!({
            "type": "rcs",
            "messageType": "text",
            "text": "Your code is 1234"
        })))
        .await
        .expect("submit");

    assert_eq!(record.status(), MessageStatus::Queued);
    assert_eq!(record.direction(), MessageDirection::Outbound);
    assert_eq!(
        repo.find_by_id(record.id()).await.expect("query"),
        Some(record.clone())
    );

    let published = publisher.published_to("rcs.pontal-tech");
    assert_eq!(published.len(), 1);
    assert_eq!(published[0].exchange, "rcs.outbound");
    assert_eq!(published[0].payload["messageId"], record.id().to_string());
    assert_eq!(published[0].payload["content"]["text"], "Your code is 1234");
}

#[rstest]
#[tokio::test]
async fn invalid_content_is_rejected_before_storage() {
    let mut publisher = MockPublisher::new();
    publisher.expect_publish_outbound().never();
    let (service, repo) = service_with(Arc::new(publisher));

    let err = service
        .submit(request(json!({
            "messageType": "image",
            "url": "not a url",
            "mimeType": "image/png",
            "fileName": "a.png"
        })))
        .await
        .expect_err("invalid url");

    let OutboundError::Validation(validation) = err else {
        panic!("expected validation error, got {err:?}");
    };
    assert_eq!(validation.fields(), vec!["url"]);
    assert!(repo.is_empty());
}

#[rstest]
#[tokio::test]
async fn publish_failure_marks_record_failed() {
    let mut publisher = MockPublisher::new();
    publisher
        .expect_publish_outbound()
        .times(1)
        .returning(|_| Err(PublishError::connection("broker unreachable")));
    let (service, repo) = service_with(Arc::new(publisher));

    let err = service
        .submit(request(json!({ "messageType": "text", "text": "hi" })))
        .await
        .expect_err("publish fails");

    let OutboundError::Publish { message_id, source } = err else {
        panic!("expected publish error, got {err:?}");
    };
    assert_eq!(source, PublishError::connection("broker unreachable"));

    let stored = repo
        .find_by_id(message_id)
        .await
        .expect("query")
        .expect("record kept");
    assert_eq!(stored.status(), MessageStatus::Failed);
    assert_eq!(
        stored.error_message(),
        Some("connection error: broker unreachable")
    );
}
