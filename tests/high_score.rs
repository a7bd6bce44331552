// Best-score record: decoding tolerance and the overwrite rule.

use dragonfolio::score::{HighScore, decode, encode};

#[test]
fn absent_record_defaults_to_zero() {
    let record = decode(None);
    assert_eq!(record, HighScore { score: 0, date: "N/A".to_string() });
}

#[test]
fn malformed_records_default_to_zero() {
    for raw in ["", "not json", "42", "{\"score\":\"ten\"}", "{\"points\":5}"] {
        assert_eq!(decode(Some(raw)).score, 0, "raw: {raw:?}");
        assert_eq!(decode(Some(raw)).date, "N/A");
    }
}

#[test]
fn valid_record_round_trips() {
    let record = HighScore {
        score: 120,
        date: "1/2/2026, 10:30:00 AM".to_string(),
    };
    assert_eq!(decode(Some(&encode(&record))), record);
}

#[test]
fn wire_shape_matches_the_stored_entry() {
    let record = HighScore {
        score: 60,
        date: "then".to_string(),
    };
    assert_eq!(encode(&record), r#"{"score":60,"date":"then"}"#);
}

#[test]
fn lower_run_leaves_the_record_alone() {
    let stored = HighScore {
        score: 50,
        date: "earlier".to_string(),
    };
    assert!(!stored.beaten_by(30));
    assert!(!stored.beaten_by(50)); // ties do not re-stamp the date
}

#[test]
fn higher_run_overwrites_with_a_fresh_date() {
    let stored = HighScore {
        score: 50,
        date: "earlier".to_string(),
    };
    assert!(stored.beaten_by(60));

    // The driver's merge: replace only when beaten.
    let updated = if stored.beaten_by(60) {
        HighScore {
            score: 60,
            date: "later".to_string(),
        }
    } else {
        stored.clone()
    };
    assert_eq!(updated.score, 60);
    assert_eq!(updated.date, "later");
}
