use pretty_assertions::assert_eq;
use ztml_html::choices::*;
use ztml_html::UnknownChoice;

#[test]
fn choices_round_trip_through_strings() {
    for method in ZReqMethod::ALL {
        assert_eq!(method.as_str().parse::<ZReqMethod>(), Ok(*method));
    }
    assert_eq!(InputType::DatetimeLocal.to_string(), "datetime-local");
    assert_eq!(String::from(Target::SelfFrame), "_self");
}

#[test]
fn unknown_choice_is_reported() {
    let err = "put".parse::<ZReqMethod>().unwrap_err();

    assert_eq!(
        err,
        UnknownChoice {
            choice: "ZReqMethod",
            value: "put".to_string(),
        }
    );
    assert_eq!(err.to_string(), "`put` is not a valid ZReqMethod");
}

#[test]
fn choices_are_case_sensitive() {
    assert!("Get".parse::<ZReqMethod>().is_err());
    assert_eq!(
        "spacingAndGlyphs".parse::<LengthAdjust>(),
        Ok(LengthAdjust::SpacingAndGlyphs)
    );
}
