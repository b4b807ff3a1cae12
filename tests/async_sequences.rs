//! Asynchronous sequence guards: first-pull suspension, cooperative
//! cancellation, and item validation.

use std::time::Duration;

use futures::stream::{self, StreamExt};
use guardpost::{require, Error};
use tokio_util::sync::CancellationToken;

#[tokio::test]
async fn one_element_stream_passes_and_keeps_its_element() {
    let items = stream::iter(vec![7u32]);
    let probed = require::stream::not_null_or_empty(Some(items), "items").await.unwrap();
    assert_eq!(probed.collect::<Vec<_>>().await, vec![7]);
}

#[tokio::test]
async fn empty_stream_fails_validation() {
    let items = stream::iter(Vec::<u32>::new());
    let err = require::stream::not_null_or_empty(Some(items), "items").await.unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
}

#[tokio::test]
async fn cancellation_beats_a_stalled_producer() {
    let token = CancellationToken::new();
    let pending = stream::pending::<u32>();

    let check = require::stream::not_null_or_empty_with_cancellation(Some(pending), &token, "items");
    let cancel = async {
        tokio::time::sleep(Duration::from_millis(10)).await;
        token.cancel();
    };

    let (result, ()) = tokio::join!(check, cancel);
    assert!(matches!(result.unwrap_err(), Error::Canceled { .. }));
}

#[tokio::test]
async fn a_ready_producer_completes_before_cancellation_matters() {
    let token = CancellationToken::new();
    let items = stream::iter(vec![1u8, 2]);

    let probed = require::stream::not_null_or_empty_with_cancellation(Some(items), &token, "items")
        .await
        .unwrap();
    assert_eq!(probed.collect::<Vec<_>>().await, vec![1, 2]);
}

#[tokio::test]
async fn item_checks_validate_lazily_produced_elements() {
    let items = stream::iter(vec![Some("a"), Some("b")]).then(|item| async move {
        tokio::time::sleep(Duration::from_millis(1)).await;
        item
    });
    futures::pin_mut!(items);
    assert!(require::stream::items_not_null_or_empty(items, "items").await.is_ok());
}

#[tokio::test]
async fn item_checks_report_the_first_violation() {
    let items = stream::iter(vec![Some(1), None, Some(3)]);
    let err = require::stream::items_not_null(items, "items").await.unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { parameter, .. } if parameter == "items"));
}
