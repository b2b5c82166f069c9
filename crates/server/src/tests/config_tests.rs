use super::*;

#[test]
fn defaults_serve_the_eight_capitals_after_one_second() {
    let settings = Settings::default();
    assert_eq!(settings.locations.len(), 8);
    assert_eq!(settings.locations[0], "Perth");
    assert_eq!(settings.locations_delay(), Duration::from_millis(1000));
    assert!(!settings.fail_submissions);
}

#[test]
fn parses_comma_separated_locations_in_order() {
    assert_eq!(
        parse_locations(" Perth, Sydney ,,Perth, Hobart "),
        vec!["Perth", "Sydney", "Hobart"]
    );
    assert!(parse_locations(" , ").is_empty());
}

#[test]
fn file_overrides_replace_defaults() {
    let mut settings = Settings::default();
    apply_file_overrides(
        &mut settings,
        r#"
bind_addr = "0.0.0.0:9000"
locations = "Darwin, Alice Springs"
locations_delay_ms = 0
fail_submissions = true
"#,
    );

    assert_eq!(settings.server_bind, "0.0.0.0:9000");
    assert_eq!(settings.locations, vec!["Darwin", "Alice Springs"]);
    assert_eq!(settings.locations_delay_ms, 0);
    assert!(settings.fail_submissions);
}

#[test]
fn malformed_file_and_empty_locations_keep_defaults() {
    let mut settings = Settings::default();
    apply_file_overrides(&mut settings, "this is = = not toml");
    assert_eq!(settings, Settings::default());

    apply_file_overrides(&mut settings, r#"locations = " , ""#);
    assert_eq!(settings.locations, Settings::default().locations);

    // A mistyped value rejects the whole file rather than half-applying it.
    apply_file_overrides(
        &mut settings,
        "bind_addr = \"0.0.0.0:9000\"\nfail_submissions = \"maybe\"",
    );
    assert_eq!(settings, Settings::default());
}

#[test]
fn native_toml_types_are_applied_together() {
    let mut settings = Settings::default();
    apply_file_overrides(
        &mut settings,
        "bind_addr = \"0.0.0.0:9000\"\nlocations_delay_ms = 0\nfail_submissions = true",
    );

    assert_eq!(settings.server_bind, "0.0.0.0:9000");
    assert_eq!(settings.locations_delay(), Duration::ZERO);
    assert!(settings.fail_submissions);
    assert_eq!(settings.locations, Settings::default().locations);
}

#[test]
fn locations_accept_a_toml_array() {
    let mut settings = Settings::default();
    apply_file_overrides(
        &mut settings,
        r#"locations = ["Darwin", "Alice Springs", "Darwin"]"#,
    );
    assert_eq!(settings.locations, vec!["Darwin", "Alice Springs"]);
}
