//! Integration tests for numen_rs.

use numen_rs::*;

fn john() -> Person {
    Person::parse("John Smith", "1990-05-15").unwrap()
}

#[test]
fn reading_assembles_every_module() {
    let on = parse_date("2024-05-15").unwrap();
    let r = reading(&john(), on);

    assert_eq!(r.profile.life_path, 3);
    assert_eq!(r.profile.destiny, 8);
    assert_eq!(r.profile.personality, 11);
    assert_eq!(r.hidden_passions, vec![1, 8, 2]);
    assert_eq!(r.cycles.personal_year, 1);
    assert_eq!(r.cycles.personal_day, 3);
    assert_eq!(r.karmic.lessons, vec![3, 7]);
    assert_eq!(r.name_number.system, LetterSystem::Pythagorean);
    assert_eq!(r.name_number.value, 8);

    // first period ends at 33; age 34 falls in the second
    assert_eq!(r.age, 34);
    assert_eq!(r.current_pinnacle.period, 2);
    assert_eq!(r.current_pinnacle, r.pinnacles[1]);
    assert_eq!(r.current_challenge, r.challenges[1]);
}

#[test]
fn reading_with_chaldean() {
    let on = parse_date("2024-05-15").unwrap();
    let r = reading_with(&john(), on, LetterSystem::Chaldean);
    assert_eq!(r.name_number.system, LetterSystem::Chaldean);
    assert_eq!(r.name_number.value, 8);
}

#[test]
fn reading_serialises() {
    let r = reading(&john(), parse_date("2024-05-15").unwrap());
    let v = serde_json::to_value(&r).unwrap();
    assert_eq!(v["person"]["full_name"], "John Smith");
    assert_eq!(v["person"]["birth_date"], "1990-05-15");
    assert_eq!(v["profile"]["life_path"], 3);
}

#[test]
fn bad_birth_date_is_rejected() {
    assert!(matches!(
        Person::parse("A", "1990-13-01"),
        Err(NumenError::InvalidDate(_))
    ));
}

#[test]
fn config_flows_into_helpers() {
    let config = NumenConfig::default();
    let p = john();

    let r = lucky_dates(
        &p,
        parse_date("2024-03-01").unwrap(),
        parse_date("2024-03-31").unwrap(),
        &config,
    )
    .unwrap();
    assert_eq!(r.dates.len(), 13);
    assert_eq!(r.best.len(), 5);

    let next = next_lucky(&p, parse_date("2024-03-01").unwrap(), &config).unwrap();
    assert_eq!(next.date, parse_date("2024-03-03").unwrap());

    // life path 3
    let ranked = rank_addresses_for(&p, &["3", "12", "9"], &config);
    assert_eq!(ranked[0].compatibility, 100);
    assert_eq!(ranked[1].compatibility, 100);
    assert_eq!(ranked[2].address, "9");
}

#[test]
fn adapter_errors_convert() {
    let config = NumenConfig::default();
    let err = vehicle_for(&john(), "", &config).unwrap_err();
    assert!(matches!(err, NumenError::Ops(OpsError::EmptyLicensePlate)));
    let err = rank_phones_for(&john(), &["--"], &config).unwrap_err();
    assert!(matches!(err, NumenError::Ops(OpsError::EmptyPhoneNumber)));
}

#[test]
fn pair_is_symmetric_in_overall() {
    let a = john();
    let b = Person::parse("Mary Jones", "1985-12-25").unwrap();
    let ab = pair(&a, &b, RelationshipKind::General);
    let ba = pair(&b, &a, RelationshipKind::General);
    assert_eq!(ab.overall, ba.overall);
}
