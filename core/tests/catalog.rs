use addonstore_core::{
    parse_catalog, parse_catalog_value, store_model_from_mapping, AddonMetadata, Channel,
    MajorMinorPatch, ParseError,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn entry(id: &str, channel: &str) -> Value {
    json!({
        "addonId": id,
        "channel": channel,
        "displayName": "Speech Player",
        "description": "d",
        "publisher": "p",
        "addonVersionName": "1.0",
        "addonVersionNumber": {"major": 1, "minor": 0, "patch": 0},
        "license": "GPL",
        "sourceURL": "http://x",
        "URL": "http://y",
        "sha256": "ab12",
        "minNVDAVersion": {"major": 2019, "minor": 1, "patch": 0},
        "lastTestedVersion": {"major": 2023, "minor": 1, "patch": 0}
    })
}

#[test]
fn parses_single_stable_entry() {
    let json = r#"[{"addonId":"NVSpeechPlayer","channel":"stable","displayName":"Speech Player","description":"d","publisher":"p","addonVersionName":"1.0","addonVersionNumber":{"major":1,"minor":0,"patch":0},"license":"GPL","sourceURL":"http://x","URL":"http://y","sha256":"ab12","minNVDAVersion":{"major":2019,"minor":1,"patch":0},"lastTestedVersion":{"major":2023,"minor":1,"patch":0}}]"#;

    let catalog = parse_catalog(json).unwrap();
    assert_eq!(catalog.len(), 1);

    let stable = catalog.channel(Channel::Stable).unwrap();
    assert_eq!(stable.len(), 1);
    let player = stable.get("NVSpeechPlayer").unwrap();
    assert_eq!(player.addon_id(), "NVSpeechPlayer");
    assert!(!player.legacy());
    assert_eq!(player.homepage(), None);
    assert_eq!(player.minimum_api_version(), MajorMinorPatch::new(2019, 1, 0));
    assert_eq!(player.last_tested_api_version(), MajorMinorPatch::new(2023, 1, 0));
}

#[test]
fn bogus_channel_is_unknown() {
    let value = json!([entry("NVSpeechPlayer", "bogus")]);
    let err = parse_catalog_value(&value).unwrap_err();
    assert!(err.is_unknown_channel());
    assert!(matches!(err, ParseError::UnknownChannel(ref c) if c == "bogus"));
}

#[test]
fn entries_are_indexed_under_their_own_channel() {
    let value = json!([
        entry("a", "stable"),
        entry("b", "unstable"),
        entry("c", "external"),
        entry("d", "stable"),
    ]);
    let catalog = parse_catalog_value(&value).unwrap();

    for channel in Channel::STORED {
        let index = catalog.channel(channel).unwrap();
        assert!(index.iter().all(|m| m.channel() == channel));
    }
    assert!(catalog.channel(Channel::All).is_none());
    assert_eq!(catalog.channel(Channel::Stable).unwrap().len(), 2);
    assert_eq!(catalog.len(), 4);
}

#[test]
fn later_entry_wins_case_insensitively() {
    let mut second = entry("foo", "stable");
    second["displayName"] = json!("Second");
    let value = json!([entry("Foo", "stable"), second]);

    let catalog = parse_catalog_value(&value).unwrap();
    assert_eq!(catalog.len(), 1);
    let stored = catalog.get(Channel::Stable, "FOO").unwrap();
    assert_eq!(stored.addon_id(), "foo");
    assert_eq!(stored.display_name(), "Second");
}

#[test]
fn first_malformed_entry_fails_whole_catalog() {
    let mut broken = entry("broken", "stable");
    broken.as_object_mut().unwrap().remove("sha256");
    let value = json!([entry("good", "stable"), broken, entry("after", "stable")]);

    let err = parse_catalog_value(&value).unwrap_err();
    assert!(matches!(err, ParseError::MissingField(ref f) if f == "sha256"));
}

#[test]
fn mapping_reparses_to_equal_model() {
    let mut full = entry("Clock", "external");
    full["homepage"] = json!("https://home");
    full["licenseURL"] = json!("https://license");
    full["legacy"] = json!(true);
    let catalog = parse_catalog_value(&json!([full, entry("plain", "unstable")])).unwrap();

    for model in catalog.iter() {
        let mapping = model.to_mapping().unwrap();
        assert_eq!(mapping["minNVDAVersion"], json!({"major": 2019, "minor": 1, "patch": 0}));
        assert_eq!(&store_model_from_mapping(mapping).unwrap(), model);
    }
}

#[test]
fn min_above_last_tested_is_tolerated() {
    let mut value = entry("odd", "stable");
    value["minNVDAVersion"] = json!({"major": 2024, "minor": 1, "patch": 0});
    let catalog = parse_catalog_value(&json!([value])).unwrap();

    let odd = catalog.get(Channel::All, "odd").unwrap();
    assert!(odd.minimum_api_version() > odd.last_tested_api_version());
}
