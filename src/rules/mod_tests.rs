use std::path::Path;

use super::*;
use crate::config::Config;

fn config_with_disabled(ids: &[&str]) -> Config {
    let mut config = Config::default();
    config.rules.disabled = ids.iter().map(|s| (*s).to_string()).collect();
    config
}

#[test]
fn default_config_enables_every_rule() {
    let rules = RuleSet::from_config(&Config::default()).unwrap();
    let ids: Vec<&str> = rules.infos().iter().map(|info| info.id).collect();

    assert_eq!(
        ids,
        vec![
            "1.3",
            "1.4",
            "8.2",
            "2.1",
            "2.2",
            "2.3",
            "3.1",
            "3.2",
            "4.1",
            "4.2",
            "4.4",
            "5.1",
            "5.4",
            "6.1",
            "WAIVER-PREFIX",
        ]
    );
}

#[test]
fn disabled_rules_are_dropped() {
    let rules = RuleSet::from_config(&config_with_disabled(&["5.4", "1.3"])).unwrap();
    let ids: Vec<&str> = rules.infos().iter().map(|info| info.id).collect();

    assert!(!ids.contains(&"5.4"));
    assert!(!ids.contains(&"1.3"));
    assert_eq!(ids.len(), 13);
}

#[test]
fn unknown_disabled_id_is_tolerated() {
    let rules = RuleSet::from_config(&config_with_disabled(&["9.9"])).unwrap();
    assert_eq!(rules.infos().len(), 15);
}

#[test]
fn only_waiver_format_is_not_waivable() {
    let rules = RuleSet::from_config(&Config::default()).unwrap();

    assert!(!rules.is_waivable("WAIVER-PREFIX"));
    assert!(rules.is_waivable("5.4"));
    assert!(rules.is_waivable("7.7"));
}

#[test]
fn infos_describe_each_rule() {
    let rules = RuleSet::from_config(&Config::default()).unwrap();
    let infos = rules.infos();

    assert_eq!(infos.len(), 15);
    let cast = infos.iter().find(|i| i.id == "5.4").unwrap();
    assert_eq!(cast.severity, Severity::Strong);
    assert!(cast.waivable);
    assert!(!cast.description.is_empty());
}

#[test]
fn evaluate_respects_file_kind() {
    let rules = RuleSet::from_config(&Config::default()).unwrap();

    let as_source = SourceFile::from_text(Path::new("a.cpp"), FileKind::Source, "int a;\n");
    assert!(rules.evaluate(&as_source).is_empty());

    let as_header = SourceFile::from_text(Path::new("a.h"), FileKind::Header, "int a;\n");
    let ids: Vec<String> = rules
        .evaluate(&as_header)
        .into_iter()
        .map(|v| v.rule_id)
        .collect();
    assert_eq!(ids, vec!["4.1".to_string()]);
}

#[test]
fn word_alternation_escapes_tokens() {
    let pattern = word_alternation(&["a.b".to_string(), "c".to_string()], r"\b")
        .unwrap()
        .unwrap();

    assert!(pattern.is_match("x a.b y"));
    assert!(!pattern.is_match("x aXb y"));
    assert!(pattern.is_match("c;"));
    assert!(!pattern.is_match("cc;"));
}

#[test]
fn word_alternation_of_nothing_is_none() {
    assert!(word_alternation(&[], r"\b").unwrap().is_none());
}
