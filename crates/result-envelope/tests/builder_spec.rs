use result_envelope::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
struct ImportSummary {
    file: String,
    rows: u32,
}

#[test]
fn given_valid_data_when_building_minimal_envelope_then_succeeds() {
    let summary = ImportSummary {
        file: "orders.csv".to_string(),
        rows: 120,
    };

    let envelope = ResultEnvelope::builder().data(summary.clone()).build();

    assert_eq!(envelope.data(), Some(&summary));
    assert_eq!(envelope.status(), Status::Ok);
    assert!(envelope.events().is_empty());
}

#[test]
fn given_no_data_when_building_then_data_is_absent() {
    let envelope = ResultEnvelope::<ImportSummary>::builder()
        .add_error("fileMissing", "orders.csv does not exist")
        .build();

    assert!(envelope.data().is_none());
    assert_eq!(envelope.status(), Status::Error);
    assert_eq!(envelope.events().len(), 1);
    assert_eq!(envelope.events()[0].severity(), Severity::Error);
}

#[test]
fn given_mixed_events_when_building_then_applies_them_in_order() {
    let envelope = ResultEnvelope::builder()
        .data(ImportSummary {
            file: "orders.csv".to_string(),
            rows: 117,
        })
        .add_info("started", "Import started")
        .add_warning("rowSkipped", "Skipped 3 rows")
        .add_info("finished", "Import finished")
        .build();

    assert_eq!(envelope.status(), Status::Warn);
    assert_eq!(
        envelope.events(),
        &[
            Event::info("started", "Import started"),
            Event::warn("rowSkipped", "Skipped 3 rows"),
            Event::info("finished", "Import finished"),
        ]
    );
}

#[test]
fn given_event_batches_when_building_then_matches_direct_appends() {
    let batch = vec![
        Event::warn("a", "first"),
        Event::error("b", "second"),
        Event::info("c", "third"),
    ];

    let built = ResultEnvelope::builder()
        .data(1)
        .add_event(Event::info("seed", "seed"))
        .add_events(batch.clone())
        .build();

    let mut direct = ResultEnvelope::of(1);
    direct.add_event(Event::info("seed", "seed"));
    direct.add_events(batch);

    assert_eq!(built, direct);
    assert_eq!(built.status(), Status::Error);
}

#[test]
fn given_envelope_when_serializing_then_uses_uppercase_levels() {
    let envelope = ResultEnvelope::builder()
        .data("test")
        .add_warning("slow", "Took longer than expected")
        .build();

    let json = serde_json::to_string(&envelope).expect("Should serialize");
    assert!(json.contains("\"status\":\"WARN\""));
    assert!(json.contains("\"severity\":\"WARN\""));
    assert!(json.contains("\"data\":\"test\""));
}
