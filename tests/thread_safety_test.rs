// Concurrent read tests.
//
// The catalogue has no interior mutability, so an Arc<Catalogue> can be
// queried from many threads at once with no locking. These tests verify
// that concurrent readers all observe the same immutable data.

use countrydb::Catalogue;
use std::sync::Arc;
use std::thread;

#[test]
fn test_concurrent_queries_observe_identical_data() {
    let catalogue = Arc::new(Catalogue::bundled().unwrap());
    let expected_len = catalogue.len();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let catalogue = Arc::clone(&catalogue);
            thread::spawn(move || {
                for _ in 0..100 {
                    assert_eq!(catalogue.len(), expected_len);
                    assert_eq!(
                        catalogue.country_by_code(Some("BG")).unwrap().name,
                        "Bulgaria"
                    );
                    assert_eq!(catalogue.countries_by_codes(&["BG", "DE", "FR"]).len(), 3);
                    assert!(!catalogue.central_europe().is_empty());
                    assert!(catalogue.country_by_code(Some("XX")).is_none());
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("reader thread panicked");
    }
}

#[test]
fn test_catalogue_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Catalogue>();
}
