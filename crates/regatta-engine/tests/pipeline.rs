use pretty_assertions::assert_eq;

use regatta_engine::{build_view, Session, ViewOutcome};
use regatta_model::{normalize, CellValue, DatasetKind, RawTable, Selection, Selections};

fn text(value: &str) -> CellValue {
    CellValue::Text(value.to_string())
}

fn results_table(rows: &[(&str, &str, &str, &str, &str, &str)]) -> RawTable {
    RawTable::new(
        vec![
            "competitor".into(),
            "year".into(),
            "competition".into(),
            "race".into(),
            "distance".into(),
            "time".into(),
            "place".into(),
        ],
        rows.iter()
            .map(|(who, year, comp, race, dist, time)| {
                vec![
                    text(who),
                    text(year),
                    text(comp),
                    text(race),
                    text(dist),
                    text(time),
                    text("1"),
                ]
            })
            .collect(),
    )
}

#[test]
fn view_orders_rows_by_year_then_stage() {
    // Input order is deliberately scrambled.
    let table = results_table(&[
        ("Anna", "2023", "LM", "Finale", "K1 500 m", "1:51,00"),
        ("Anna", "2022", "Regatta", "Endlauf", "K1 500 m", "1:54,00"),
        ("Anna", "2023", "LM", "Vorlauf", "K1 500 m", "1:53,00"),
        ("Anna", "2022", "Regatta", "Vorlauf", "K1 500 m", "1:56,00"),
        ("Anna", "2023", "LM", "Halbfinale", "K1 500 m", "1:52,00"),
    ]);
    let dataset = normalize(&table, DatasetKind::Results).unwrap();

    let view = build_view(&dataset, &Selections::default());
    assert_eq!(view.outcome, ViewOutcome::Ready);

    let order: Vec<(Option<i32>, &str)> = view
        .rows
        .iter()
        .map(|r| (r.year, r.race.as_str()))
        .collect();
    assert_eq!(
        order,
        vec![
            (Some(2022), "Vorlauf"),
            (Some(2022), "Endlauf"),
            (Some(2023), "Vorlauf"),
            (Some(2023), "Halbfinale"),
            (Some(2023), "Finale"),
        ]
    );
}

#[test]
fn time_views_get_a_reversed_padded_axis() {
    let table = results_table(&[
        ("Anna", "2023", "LM", "Vorlauf", "K1 500 m", "1:01,20"),
        ("Anna", "2023", "LM", "Finale", "K1 500 m", "1:35,80"),
    ]);
    let dataset = normalize(&table, DatasetKind::Results).unwrap();

    let view = build_view(&dataset, &Selections::default());
    assert!(view.ticks.reversed);
    assert!(*view.ticks.positions.first().unwrap() <= 56.2);
    assert!(*view.ticks.positions.last().unwrap() >= 100.8);
}

#[test]
fn no_matching_rows_is_reported_not_failed() {
    let table = results_table(&[("Anna", "2023", "LM", "Finale", "K1 500 m", "1:51,00")]);
    let dataset = normalize(&table, DatasetKind::Results).unwrap();

    let view = build_view(
        &dataset,
        &Selections {
            competitors: Selection::single("Ben".to_string()),
            ..Selections::default()
        },
    );
    assert_eq!(view.outcome, ViewOutcome::NoRowsMatched);
    assert!(view.rows.is_empty());
    assert!(view.ticks.is_empty());
}

#[test]
fn matched_rows_without_plottable_values_are_distinct_from_no_rows() {
    let table = results_table(&[
        ("Anna", "2023", "LM", "Vorlauf", "K1 500 m", "disqualifiziert"),
        ("Anna", "2023", "LM", "Finale", "K1 500 m", "aufgegeben"),
    ]);
    let dataset = normalize(&table, DatasetKind::Results).unwrap();

    let view = build_view(&dataset, &Selections::default());
    assert_eq!(view.outcome, ViewOutcome::NothingToPlot);
    // The table view still shows the rows.
    assert_eq!(view.rows.len(), 2);
    assert!(view.ticks.is_empty());
}

#[test]
fn discipline_views_take_step_and_unit_from_the_discipline() {
    let table = RawTable::new(
        vec![
            "competitor".into(),
            "year".into(),
            "competition".into(),
            "race".into(),
            "discipline".into(),
            "result".into(),
            "place".into(),
        ],
        vec![
            vec![
                text("Ben"),
                text("2024"),
                text("Athletiktest"),
                text("Durchgang 1"),
                text("1500m"),
                text("310"),
                text("2"),
            ],
            vec![
                text("Ben"),
                text("2024"),
                text("Athletiktest"),
                text("Durchgang 2"),
                text("1500m"),
                text("335"),
                text("1"),
            ],
        ],
    );
    let dataset = normalize(&table, DatasetKind::MultiDisciplineTest).unwrap();

    let view = build_view(&dataset, &Selections::default());
    assert_eq!(view.outcome, ViewOutcome::Ready);
    assert!(!view.ticks.reversed);
    assert_eq!(view.ticks.positions, vec![310.0, 320.0, 330.0, 340.0]);
    assert_eq!(view.ticks.labels[0], "310 s");
}

#[test]
fn session_replaces_its_dataset_per_upload() {
    let mut session = Session::new();
    assert!(session.view(&Selections::default()).is_none());

    let first = results_table(&[("Anna", "2023", "LM", "Finale", "K1 500 m", "1:51,00")]);
    session.load(&first, DatasetKind::Results).unwrap();
    assert_eq!(session.dataset().unwrap().len(), 1);

    let second = results_table(&[
        ("Ben", "2024", "LM", "Vorlauf", "K1 200 m", "0:44,00"),
        ("Ben", "2024", "LM", "Finale", "K1 200 m", "0:42,50"),
    ]);
    session.load(&second, DatasetKind::Results).unwrap();
    assert_eq!(session.dataset().unwrap().len(), 2);
    assert_eq!(session.dataset().unwrap().records[0].competitor, "Ben");
}

#[test]
fn a_failed_upload_leaves_the_previous_dataset_installed() {
    let mut session = Session::new();
    let good = results_table(&[("Anna", "2023", "LM", "Finale", "K1 500 m", "1:51,00")]);
    session.load(&good, DatasetKind::Results).unwrap();

    let bad = RawTable::new(vec!["competitor".into()], Vec::new());
    assert!(session.load(&bad, DatasetKind::Results).is_err());

    let dataset = session.dataset().unwrap();
    assert_eq!(dataset.records[0].competitor, "Anna");
}
