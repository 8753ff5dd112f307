mod common;

use link_shortener::prelude::*;
use std::collections::HashSet;

#[tokio::test]
async fn test_shorten_then_resolve_round_trip() {
    let (service, _repo) = common::memory_service();

    for url in [
        "https://example.com/page",
        "http://localhost:3000/test",
        "https://example.com/search?q=rust&lang=en",
        "http://192.168.1.1:8080/api",
    ] {
        let link = service.shorten(url).await.unwrap();
        let resolved = service.resolve(&link.short_id).await.unwrap();

        assert_eq!(resolved.original_url, url);
        assert_eq!(resolved, link);
    }
}

#[tokio::test]
async fn test_shorten_is_idempotent() {
    let (service, repo) = common::memory_service();

    let first = service.shorten("https://example.com/page").await.unwrap();
    let second = service.shorten("https://example.com/page").await.unwrap();
    let third = service.shorten("https://EXAMPLE.com:443/page").await.unwrap();

    assert_eq!(first.short_id, second.short_id);
    assert_eq!(first.short_id, third.short_id);
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_distinct_urls_get_distinct_codes() {
    let (service, _repo) = common::memory_service();

    let mut codes = HashSet::new();
    for i in 0..200 {
        let link = service
            .shorten(&format!("https://example.com/{i}"))
            .await
            .unwrap();
        codes.insert(link.short_id);
    }

    assert_eq!(codes.len(), 200);
}

#[tokio::test]
async fn test_malformed_urls_persist_nothing() {
    let (service, repo) = common::memory_service();

    for input in ["", "not a url", "example.com", "/relative/path", "mailto:a@b.c"] {
        assert!(matches!(
            service.shorten(input).await,
            Err(AppError::InvalidUrl(_))
        ));
    }

    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_unissued_codes_are_not_found() {
    let (service, _repo) = common::memory_service();
    service.shorten("https://example.com/page").await.unwrap();

    for code in ["doesnotexist", "AAAAAAA", "zzzzzzz", ""] {
        assert!(matches!(
            service.resolve(code).await,
            Err(AppError::NotFound(_))
        ));
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_shorten_yields_one_record() {
    let (service, repo) = common::memory_service();

    let handles: Vec<_> = (0..64)
        .map(|_| {
            let service = service.clone();
            tokio::spawn(async move {
                service
                    .shorten("https://concurrent.example/page")
                    .await
                    .unwrap()
                    .short_id
            })
        })
        .collect();

    let mut codes = HashSet::new();
    for handle in handles {
        codes.insert(handle.await.unwrap());
    }

    assert_eq!(codes.len(), 1);
    assert_eq!(repo.count().await.unwrap(), 1);
}
