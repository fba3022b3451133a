use super::*;

#[test]
fn severity_orders_blocker_highest() {
    assert!(Severity::Blocker > Severity::Strong);
    assert!(Severity::Strong > Severity::Advisory);
}

#[test]
fn severity_parses_case_insensitively() {
    assert_eq!("blocker".parse::<Severity>().unwrap(), Severity::Blocker);
    assert_eq!(" Strong ".parse::<Severity>().unwrap(), Severity::Strong);
    assert_eq!("ADVISORY".parse::<Severity>().unwrap(), Severity::Advisory);
    assert!("fatal".parse::<Severity>().unwrap_err().contains("fatal"));
}

#[test]
fn severity_display_is_uppercase_and_pads() {
    assert_eq!(Severity::Strong.to_string(), "STRONG");
    assert_eq!(format!("{:<8}|", Severity::Strong), "STRONG  |");
}

#[test]
fn severity_serde_accepts_aliases() {
    #[derive(serde::Deserialize)]
    struct Gate {
        fail_on: Vec<Severity>,
    }

    let gate: Gate = toml::from_str(r#"fail_on = ["BLOCKER", "strong", "Advisory"]"#).unwrap();
    assert_eq!(
        gate.fail_on,
        vec![Severity::Blocker, Severity::Strong, Severity::Advisory]
    );
    assert_eq!(
        serde_json::to_string(&Severity::Blocker).unwrap(),
        "\"BLOCKER\""
    );
}

#[test]
fn default_gate_is_blocker_and_strong() {
    assert_eq!(
        Severity::default_fail_on(),
        vec![Severity::Blocker, Severity::Strong]
    );
}

#[test]
fn violations_sort_by_file_then_line_then_rule() {
    let mut violations = vec![
        Violation::new(Path::new("b.cpp"), 1, "1.3", Severity::Advisory, "m"),
        Violation::new(Path::new("a.cpp"), 10, "8.2", Severity::Advisory, "m"),
        Violation::new(Path::new("a.cpp"), 2, "5.4", Severity::Strong, "m"),
        Violation::new(Path::new("a.cpp"), 2, "5.1", Severity::Blocker, "m"),
    ];
    violations.sort();

    let keys: Vec<(&str, usize, &str)> = violations
        .iter()
        .map(|v| (v.file.to_str().unwrap(), v.line, v.rule_id.as_str()))
        .collect();
    assert_eq!(
        keys,
        vec![
            ("a.cpp", 2, "5.1"),
            ("a.cpp", 2, "5.4"),
            ("a.cpp", 10, "8.2"),
            ("b.cpp", 1, "1.3"),
        ]
    );
}
