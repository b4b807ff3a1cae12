//! Asynchronous sequence guards
//!
//! Mirrors of the synchronous sequence checks for [`Stream`] producers.
//! Pulling the first element is the only suspension point in the crate; the
//! cancellation-aware variant races that pull against a
//! [`CancellationToken`] and reports
//! [`Error::Canceled`](crate::Error::Canceled) when the token fires first.

use std::pin::Pin;

use futures::{
    future::{self, Either},
    pin_mut,
    stream::{Peekable, Stream, StreamExt},
};
use tokio_util::sync::CancellationToken;

use crate::{require::string::is_white_space, Error, Result};

/// Fails when the stream is absent or completes without yielding, otherwise
/// returns a [`Peekable`] stream that still yields every element.
///
/// Suspends until the producer yields its first element or signals
/// completion.
///
/// # Arguments
/// * 'stream'    - The asynchronous sequence to be verified
/// * 'parameter' - Diagnostic label for the failing argument
///
/// # Errors
/// Returns [`Error::NullArgument`] when `stream` is [`None`], or
/// [`Error::InvalidArgument`](crate::Error::InvalidArgument) when the
/// producer completes without an element
///
/// # Examples
///
/// ```rust
/// use futures::stream::{self, StreamExt};
/// use guardpost::require::stream as seq;
///
/// # futures::executor::block_on(async {
/// let jobs = seq::not_null_or_empty(Some(stream::iter(vec![1u8])), "jobs").await?;
/// assert_eq!(jobs.collect::<Vec<_>>().await, vec![1]);
/// # Ok::<(), guardpost::Error>(())
/// # }).unwrap();
/// ```
pub async fn not_null_or_empty<S>(stream: Option<S>, parameter: &str) -> Result<Peekable<S>>
where
    S: Stream + Unpin,
{
    let Some(stream) = stream else {
        return Err(Error::null(parameter));
    };

    let mut stream = stream.peekable();
    if Pin::new(&mut stream).peek().await.is_none() {
        return Err(invalid_argument!(parameter, "must produce at least one element"));
    }

    Ok(stream)
}

/// [`not_null_or_empty`] with a cooperative cancellation signal.
///
/// The first pull races against `cancellation`; when the token fires before
/// the producer yields or completes, the pending pull is abandoned and
/// [`Error::Canceled`](crate::Error::Canceled) is surfaced instead of a
/// validation result.
///
/// # Errors
/// As [`not_null_or_empty`], plus
/// [`Error::Canceled`](crate::Error::Canceled) when the token fires first
pub async fn not_null_or_empty_with_cancellation<S>(
    stream: Option<S>,
    cancellation: &CancellationToken,
    parameter: &str,
) -> Result<Peekable<S>>
where
    S: Stream + Unpin,
{
    let Some(stream) = stream else {
        return Err(Error::null(parameter));
    };

    let mut stream = stream.peekable();
    let produced = {
        let cancelled = cancellation.cancelled();
        let first = Pin::new(&mut stream).peek();
        pin_mut!(cancelled, first);

        match future::select(cancelled, first).await {
            Either::Left(_) => return Err(Error::canceled(parameter)),
            Either::Right((first, _)) => first.is_some(),
        }
    };

    if !produced {
        return Err(invalid_argument!(parameter, "must produce at least one element"));
    }

    Ok(stream)
}

/// Fails when any element of the stream is [`None`]. Consumes the stream.
///
/// # Errors
/// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) when
/// an absent element is encountered
pub async fn items_not_null<S, T>(mut stream: S, parameter: &str) -> Result<()>
where
    S: Stream<Item = Option<T>> + Unpin,
{
    while let Some(item) = stream.next().await {
        if item.is_none() {
            return Err(invalid_argument!(parameter, "must not contain null elements"));
        }
    }

    Ok(())
}

/// Fails when any element is [`None`] or an empty string. Consumes the
/// stream.
///
/// # Errors
/// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) when
/// an absent or empty element is encountered
pub async fn items_not_null_or_empty<S, I>(mut stream: S, parameter: &str) -> Result<()>
where
    S: Stream<Item = Option<I>> + Unpin,
    I: AsRef<str>,
{
    while let Some(item) = stream.next().await {
        if item.map_or(true, |value| value.as_ref().is_empty()) {
            return Err(invalid_argument!(parameter, "must not contain null or empty elements"));
        }
    }

    Ok(())
}

/// Fails when any element is [`None`], empty, or whitespace-only. Consumes
/// the stream.
///
/// # Errors
/// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) when
/// an absent or blank element is encountered
pub async fn items_not_null_or_white_space<S, I>(mut stream: S, parameter: &str) -> Result<()>
where
    S: Stream<Item = Option<I>> + Unpin,
    I: AsRef<str>,
{
    while let Some(item) = stream.next().await {
        if item.map_or(true, |value| is_white_space(value.as_ref())) {
            return Err(invalid_argument!(parameter, "must not contain null or blank elements"));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::stream;

    #[tokio::test]
    async fn missing_stream_fails_with_the_null_kind() {
        let err = not_null_or_empty::<stream::Iter<std::vec::IntoIter<u8>>>(None, "items")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NullArgument { .. }));
    }

    #[tokio::test]
    async fn empty_stream_fails() {
        let items = stream::iter(Vec::<u32>::new());
        let err = not_null_or_empty(Some(items), "items").await.unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));
    }

    #[tokio::test]
    async fn probed_element_is_not_lost() {
        let items = stream::iter(vec!["x"]);
        let probed = not_null_or_empty(Some(items), "items").await.unwrap();
        assert_eq!(probed.collect::<Vec<_>>().await, vec!["x"]);
    }

    #[tokio::test]
    async fn pre_cancelled_token_wins_over_validation() {
        let token = CancellationToken::new();
        token.cancel();

        let items = stream::pending::<u32>();
        let err = not_null_or_empty_with_cancellation(Some(items), &token, "items")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Canceled { .. }));
    }

    #[tokio::test]
    async fn untriggered_token_does_not_interfere() {
        let token = CancellationToken::new();
        let items = stream::iter(vec![1u8]);
        let probed = not_null_or_empty_with_cancellation(Some(items), &token, "items")
            .await
            .unwrap();
        assert_eq!(probed.collect::<Vec<_>>().await, vec![1]);
    }

    #[tokio::test]
    async fn items_not_null_stops_at_the_first_none() {
        let items = stream::iter(vec![Some(1), None, Some(3)]);
        assert!(items_not_null(items, "items").await.is_err());

        let items = stream::iter(vec![Some(1), Some(2)]);
        assert!(items_not_null(items, "items").await.is_ok());
    }

    #[tokio::test]
    async fn string_item_checks_mirror_the_sync_ones() {
        let items = stream::iter(vec![Some("a"), Some("")]);
        assert!(items_not_null_or_empty(items, "items").await.is_err());

        let items = stream::iter(vec![Some("a"), Some("  ")]);
        assert!(items_not_null_or_white_space(items, "items").await.is_err());

        let items = stream::iter(vec![Some("a"), Some("b")]);
        assert!(items_not_null_or_white_space(items, "items").await.is_ok());
    }
}
