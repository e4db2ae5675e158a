mod support;

use pokedex_api::{ApiError, ErrorKind, NameSearcher, PokeClient};
use support::*;

#[test]
fn test_search_finds_record_by_name() {
    let mock = MockTransport::new().respond(
        name_url("pikachu"),
        200,
        record_body(25, "pikachu", &["electric"]),
    );
    let client = PokeClient::new(mock, BASE);

    let record = NameSearcher::new(&client).search("pikachu").unwrap();
    assert_eq!(record.id, 25);
    assert_eq!(record.name, "pikachu");
    assert_eq!(record.types, vec!["electric"]);
}

#[test]
fn test_search_lowercases_and_trims() {
    let mock = MockTransport::new().respond(
        name_url("pikachu"),
        200,
        record_body(25, "pikachu", &["electric"]),
    );
    let client = PokeClient::new(&mock, BASE);

    let record = NameSearcher::new(&client).search("  PIKAchu ").unwrap();
    assert_eq!(record.id, 25);
    assert_eq!(mock.requests(), vec![name_url("pikachu")]);
}

#[test]
fn test_search_missing_is_not_found() {
    let client = PokeClient::new(MockTransport::new(), BASE);

    let err = NameSearcher::new(&client)
        .search("nonexistent-xyz")
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound { .. }));
    assert_eq!(err.kind(), ErrorKind::NotFound);
    insta::assert_snapshot!(err.to_string(), @"no record at http://api.test/v2/pokemon/nonexistent-xyz");
}

#[test]
fn test_search_unreachable_is_network_error() {
    let mock = MockTransport::new().unreachable(name_url("mew"));
    let client = PokeClient::new(mock, BASE);

    let err = NameSearcher::new(&client).search("mew").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Network);
    assert!(!err.is_not_found());
}

#[test]
fn test_search_server_error_is_not_not_found() {
    let mock = MockTransport::new().respond(name_url("mew"), 503, "unavailable");
    let client = PokeClient::new(mock, BASE);

    let err = NameSearcher::new(&client).search("mew").unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 503, .. }));
    assert_eq!(err.kind(), ErrorKind::Network);
}

#[test]
fn test_search_blank_name_makes_no_request() {
    let mock = MockTransport::new();
    let client = PokeClient::new(&mock, BASE);

    let err = NameSearcher::new(&client).search("   ").unwrap_err();
    assert!(matches!(err, ApiError::EmptyName));
    assert!(mock.requests().is_empty());
}

#[test]
fn test_search_and_catalog_records_share_shape() {
    let body = record_body(25, "pikachu", &["electric"]);
    let mock = MockTransport::new()
        .respond(name_url("pikachu"), 200, body.clone())
        .respond(detail_url(25), 200, body);
    let client = PokeClient::new(mock, BASE);

    let searched = NameSearcher::new(&client).search("pikachu").unwrap();
    let fetched = client.fetch_record(&detail_url(25)).unwrap();
    assert_eq!(searched, fetched);
}
