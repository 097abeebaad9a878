use super::*;

#[test]
fn defaults_match_documented_values() {
    let o = TitleOptions::default();
    assert_eq!(o.location(), TitleLocation::Top);
    assert_eq!(o.alignment(), TitleAlignment::Center);
    assert_eq!(o.height(), 0.1);
    assert_eq!(o.padding(), 0.01);
    assert!(o.extra_style().is_empty());
    assert_eq!(o, TitleOptions::default());
}

#[test]
fn equality_is_structural() {
    let style = TextStyle::new().with("fontsize", 14);
    let a = TitleOptions::new(
        TitleLocation::Bottom,
        0.2,
        TitleAlignment::Left,
        0.05,
        style.clone(),
    )
    .unwrap();
    let b = TitleOptions::new(TitleLocation::Bottom, 0.2, TitleAlignment::Left, 0.05, style)
        .unwrap();
    assert_eq!(a, b);
    assert_ne!(a, b.with_alignment(TitleAlignment::Right));
}

#[test]
fn height_and_padding_must_be_fractions() {
    let mk = |h: f64, p: f64| {
        TitleOptions::new(
            TitleLocation::Top,
            h,
            TitleAlignment::Center,
            p,
            TextStyle::default(),
        )
    };
    assert!(mk(2.0, 0.0).unwrap_err().is_invalid_configuration());
    assert!(mk(0.1, 2.0).unwrap_err().is_invalid_configuration());
    assert!(mk(-0.1, 0.0).unwrap_err().is_invalid_configuration());
    assert!(mk(f64::NAN, 0.0).unwrap_err().is_invalid_configuration());
    assert!(mk(0.0, 0.0).is_ok());
    assert!(mk(1.0, 0.0).is_ok());
}

#[test]
fn height_plus_padding_cannot_exceed_one() {
    let err = TitleOptions::default()
        .with_height(0.9)
        .and_then(|o| o.with_padding(0.2))
        .unwrap_err();
    assert!(err.is_invalid_configuration());
    assert!(err.to_string().contains("height + padding"));
}

#[test]
fn unknown_enum_names_are_rejected() {
    assert!(
        "left"
            .parse::<TitleLocation>()
            .unwrap_err()
            .is_invalid_configuration()
    );
    assert!(
        "top"
            .parse::<TitleAlignment>()
            .unwrap_err()
            .is_invalid_configuration()
    );
    assert_eq!("bottom".parse::<TitleLocation>().unwrap(), TitleLocation::Bottom);
    assert_eq!(TitleAlignment::Right.to_string(), "right");
}

#[test]
fn deserialize_validates() {
    let o: TitleOptions =
        serde_json::from_str(r#"{"location":"bottom","alignment":"right","height":0.25}"#)
            .unwrap();
    assert_eq!(o.location(), TitleLocation::Bottom);
    assert_eq!(o.alignment(), TitleAlignment::Right);
    assert_eq!(o.height(), 0.25);
    assert_eq!(o.padding(), 0.01);

    assert!(serde_json::from_str::<TitleOptions>(r#"{"height":0.9,"padding":0.2}"#).is_err());
    assert!(serde_json::from_str::<TitleOptions>(r#"{"location":"left"}"#).is_err());
}

#[test]
fn def_conversion_keeps_error_kind() {
    let def = TitleOptionsDef {
        location: "middle".to_string(),
        ..TitleOptionsDef::default()
    };
    let err = TitleOptions::try_from(def).unwrap_err();
    assert!(err.is_invalid_configuration());
}

#[test]
fn text_kwargs_alias_feeds_extra_style() {
    let o: TitleOptions =
        serde_json::from_str(r#"{"text_kwargs":{"fontsize":20,"color":"red"}}"#).unwrap();
    assert_eq!(o.extra_style().get("fontsize"), Some(&serde_json::json!(20)));
    assert_eq!(o.extra_style().len(), 2);
}
