use regatta_model::{ResultRecord, Selection, Selections};

#[test]
fn records_serialize_camel_case_without_null_noise() {
    let record = ResultRecord {
        competitor: "Anna".into(),
        year: Some(2023),
        year_raw: "2023".into(),
        competition: "Landesmeisterschaft".into(),
        race: "Finale".into(),
        event: "K1 500 m".into(),
        raw_value: "1:51,02".into(),
        place: "1".into(),
        seconds: Some(111.02),
        display_time: Some("1:51,02".into()),
        result: None,
        unit: None,
    };

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["competitor"], "Anna");
    assert_eq!(json["yearRaw"], "2023");
    assert_eq!(json["displayTime"], "1:51,02");
    // Absent derived fields are omitted, not serialized as null.
    assert!(json.get("result").is_none());
    assert!(json.get("unit").is_none());
}

#[test]
fn selections_round_trip_through_json() {
    let selections = Selections {
        competitors: Selection::single("Anna".to_string()),
        years: Selection::only([2022, 2023]),
        ..Selections::default()
    };

    let json = serde_json::to_string(&selections).unwrap();
    let back: Selections = serde_json::from_str(&json).unwrap();
    assert_eq!(back, selections);

    // An adapter can omit unrestricted attributes entirely.
    let sparse: Selections = serde_json::from_str(r#"{"years":{"kind":"only","values":[2023]}}"#).unwrap();
    assert_eq!(sparse.years, Selection::only([2023]));
    assert_eq!(sparse.competitors, Selection::All);
}
