use approx::assert_abs_diff_eq;
use cupid::aspects::{AspectCalculator, AspectKind, AspectMode};
use cupid::ephemeris::{Body, RawPosition, ZodiacSign};
use cupid::{
    BirthData, ChartAssembler, ChartError, ChartSettings, ElementalProfile, NatalChart,
    SynastryScorer,
};

mod common;

fn fixture() -> NatalChart {
    ChartAssembler::default()
        .assemble("1990-07-15", "12:00", "Lisbon, Portugal")
        .unwrap()
}

#[test]
fn test_fixture_angles_and_houses() {
    let chart = fixture();
    assert_eq!(chart.time_reference(), 2_448_088.0);

    let asc = chart.ascendant();
    assert_eq!(asc.longitude, 180.0);
    assert_eq!(asc.sign, ZodiacSign::Libra);
    assert_eq!(asc.house_number, 1);

    let mc = chart.midheaven();
    assert_abs_diff_eq!(mc.longitude, 192.689_938_4, epsilon = 1e-6);
    assert_eq!(mc.sign, ZodiacSign::Libra);
    assert_eq!(mc.house_number, 10);

    assert_eq!(chart.houses().len(), 12);
    assert_eq!(chart.houses()[0].sign, ZodiacSign::Libra);
}

#[test]
fn test_fixture_body_houses() {
    let chart = fixture();
    let houses: Vec<u8> = Body::ALL.iter().map(|b| chart.position(*b).house_number).collect();
    assert_eq!(houses, vec![10, 7, 11, 8, 6, 10, 4, 4, 4, 2]);
    assert_eq!(chart.position(Body::Sun).sign, ZodiacSign::Cancer);
    assert_eq!(chart.position(Body::Moon).sign, ZodiacSign::Aries);
}

#[test]
fn test_fixture_aspects() {
    let chart = fixture();
    let aspects = chart.aspects();
    assert_eq!(aspects.len(), 13);

    let first = aspects[0];
    assert_eq!(
        (first.body_a, first.body_b, first.kind),
        (Body::Sun, Body::Moon, AspectKind::Square)
    );
    assert_abs_diff_eq!(first.orb, 4.438_09, epsilon = 1e-4);

    let last = aspects[aspects.len() - 1];
    assert_eq!(
        (last.body_a, last.body_b, last.kind),
        (Body::Neptune, Body::Pluto, AspectKind::Sextile)
    );
}

#[test]
fn test_fixture_elemental_profile() {
    let chart = fixture();
    assert_eq!(
        *chart.elemental_profile(),
        ElementalProfile { fire: 30, earth: 23, air: 2, water: 45 }
    );
}

#[test]
fn test_assemble_is_idempotent() {
    let assembler = ChartAssembler::default();
    let a = assembler.assemble("1984-02-29", "03:17", "Reykjavik").unwrap();
    let b = assembler.assemble("1984-02-29", "03:17", "Reykjavik").unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_birth_place_does_not_move_chart() {
    let assembler = ChartAssembler::default();
    let a = assembler.assemble("1975-10-02", "18:30", "Tokyo").unwrap();
    let b = assembler.assemble("1975-10-02", "18:30", "Buenos Aires").unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_invalid_input_propagates() {
    let assembler = ChartAssembler::default();
    let err = assembler.assemble("1990-7-15x", "12:00", "").unwrap_err();
    assert!(err.is_invalid_input());
    assert!(matches!(err, ChartError::InvalidDate { .. }));

    let err = assembler.assemble("1990-07-15", "12h", "").unwrap_err();
    assert!(matches!(err, ChartError::InvalidTime { .. }));
}

#[test]
fn test_birth_data_defaults_to_noon() {
    let assembler = ChartAssembler::default();
    let birth: BirthData =
        serde_json::from_str(r#"{"birthDate": "1990-07-15", "birthPlace": "Porto"}"#).unwrap();
    assert_eq!(birth.birth_time, None);
    assert_eq!(assembler.assemble_birth(&birth).unwrap(), fixture());
}

#[test]
fn test_configured_default_time() {
    let settings = ChartSettings {
        default_birth_time: "06:00".to_string(),
        ..ChartSettings::default()
    };
    let birth = BirthData {
        birth_date: "1990-07-15".to_string(),
        birth_time: None,
        birth_place: String::new(),
    };
    let chart = ChartAssembler::new(settings).assemble_birth(&birth).unwrap();
    assert_eq!(chart.ascendant().longitude, 90.0);
}

#[test]
fn test_shortest_arc_mode_detects_more() {
    let literal = ChartAssembler::default();
    let folded = ChartAssembler::new(ChartSettings {
        aspect_mode: AspectMode::ShortestArc,
        ..ChartSettings::default()
    });
    let mut strictly_more = false;
    for year in 1950..2000 {
        let date = format!("{}-03-21", year);
        let a = literal.assemble(&date, "09:00", "").unwrap();
        let b = folded.assemble(&date, "09:00", "").unwrap();
        assert!(b.aspects().len() >= a.aspects().len());
        strictly_more |= b.aspects().len() > a.aspects().len();
    }
    assert!(strictly_more);
}

#[test]
fn test_from_raw_rejects_missing_body() {
    let raws: Vec<RawPosition> = Body::ALL[..9]
        .iter()
        .map(|b| common::raw(*b, 10.0, false))
        .collect();
    let err = NatalChart::from_raw(2_451_545.0, &raws, 0.0, 270.0, &AspectCalculator::new())
        .unwrap_err();
    assert!(matches!(err, ChartError::ComputationFailure { .. }));
    assert!(!err.is_invalid_input());
}

#[test]
fn test_from_raw_rejects_non_finite() {
    let mut raws: Vec<RawPosition> =
        Body::ALL.iter().map(|b| common::raw(*b, 10.0, false)).collect();
    raws[3].longitude = f64::NAN;
    let err = NatalChart::from_raw(2_451_545.0, &raws, 0.0, 270.0, &AspectCalculator::new())
        .unwrap_err();
    assert!(matches!(err, ChartError::ComputationFailure { .. }));
}

#[test]
fn test_serialized_field_names() {
    let value = serde_json::to_value(fixture()).unwrap();
    let sun = &value["bodies"]["sun"];
    assert_eq!(sun["sign"], "cancer");
    assert_eq!(sun["houseNumber"], 10);
    assert_eq!(sun["isRetrograde"], false);
    assert!(sun["degreeInSign"].as_f64().unwrap() < 30.0);
    assert_eq!(value["houses"][0]["number"], 1);
    assert!(value["houses"][0].get("degreeAtCusp").is_some());
    assert_eq!(value["aspects"][0]["kind"], "square");
    assert_eq!(value["aspects"][0]["bodyA"], "sun");
    assert_eq!(value["elementalProfile"]["water"], 45);

    let back: NatalChart = serde_json::from_value(value).unwrap();
    assert_eq!(back.position(Body::Sun).sign, ZodiacSign::Cancer);
    assert_eq!(back.aspects().len(), 13);
}

#[test]
fn test_stored_chart_must_hold_invariants() {
    let stored = serde_json::to_value(fixture()).unwrap();

    let mut missing_body = stored.clone();
    missing_body["bodies"].as_object_mut().unwrap().remove("venus");
    let err = serde_json::from_value::<NatalChart>(missing_body).unwrap_err();
    assert!(err.to_string().contains("missing position for venus"), "{}", err);

    let mut bad_house = stored.clone();
    bad_house["bodies"]["sun"]["houseNumber"] = 0.into();
    let err = serde_json::from_value::<NatalChart>(bad_house).unwrap_err();
    assert!(err.to_string().contains("house number 0"), "{}", err);

    let mut bad_profile = stored.clone();
    bad_profile["elementalProfile"]["fire"] = 900.into();
    let err = serde_json::from_value::<NatalChart>(bad_profile).unwrap_err();
    assert!(err.to_string().contains("elemental percentages"), "{}", err);

    let mut short_houses = stored.clone();
    short_houses["houses"].as_array_mut().unwrap().pop();
    assert!(serde_json::from_value::<NatalChart>(short_houses).is_err());

    let back: NatalChart = serde_json::from_value(stored).unwrap();
    let score = SynastryScorer::new().score(&back, &fixture());
    assert!(score.overall <= 100);
}

#[test]
fn test_assembler_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ChartAssembler>();
    assert_send_sync::<NatalChart>();

    let assembler = ChartAssembler::default();
    let charts: Vec<NatalChart> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| assembler.assemble("2001-09-09", "16:20", "").unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert!(charts.windows(2).all(|w| w[0] == w[1]));
}
