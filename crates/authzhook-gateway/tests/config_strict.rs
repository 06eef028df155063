#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use authzhook_core::DefaultPolicy;
use authzhook_gateway::config::{self, RuleScope};

fn code_of(yaml: &str) -> &'static str {
    config::load_from_str(yaml).expect_err("must fail").client_code().as_str()
}

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
gateway:
  listen: "0.0.0.0:8443"
  tlz: { cert_path: "a.crt" } # typo should fail
"#;
    assert_eq!(code_of(bad), "BAD_REQUEST");
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.gateway.listen, "0.0.0.0:443");
    assert_eq!(cfg.gateway.tls.cert_path, "webhook.crt");
    assert_eq!(cfg.gateway.tls.key_path, "webhook.key");
    assert_eq!(cfg.policy.default, DefaultPolicy::Allow);
    assert_eq!(cfg.policy.rules.len(), 4);
    assert_eq!(cfg.policy.rules[3].scope, RuleScope::NonResource);
}

#[test]
fn unsupported_version() {
    assert_eq!(code_of("version: 2\n"), "UNSUPPORTED_VERSION");
}

#[test]
fn version_is_required() {
    assert_eq!(code_of("gateway: { listen: \"0.0.0.0:443\" }\n"), "BAD_REQUEST");
}

#[test]
fn invalid_listen_addr() {
    let bad = r#"
version: 1
gateway:
  listen: ":443"
"#;
    assert_eq!(code_of(bad), "BAD_REQUEST");
}

#[test]
fn empty_tls_path() {
    let bad = r#"
version: 1
gateway:
  tls: { cert_path: "", key_path: "webhook.key" }
"#;
    assert_eq!(code_of(bad), "BAD_REQUEST");
}

#[test]
fn unknown_default_policy() {
    let bad = r#"
version: 1
policy:
  default: maybe
"#;
    assert_eq!(code_of(bad), "BAD_REQUEST");
}

#[test]
fn rule_without_verbs() {
    let bad = r#"
version: 1
policy:
  rules:
    - subject: "bob"
      verbs: []
      effect: allow
"#;
    assert_eq!(code_of(bad), "BAD_REQUEST");
}

#[test]
fn reason_only_with_deny() {
    let bad = r#"
version: 1
policy:
  rules:
    - subject: "bob"
      verbs: ["get"]
      effect: allow
      reason: "why not"
"#;
    assert_eq!(code_of(bad), "BAD_REQUEST");
}

#[test]
fn resources_rejected_on_non_resource_scope() {
    let bad = r#"
version: 1
policy:
  rules:
    - subject: "bob"
      scope: non_resource
      verbs: ["get"]
      resources: ["pods"]
      effect: allow
"#;
    assert_eq!(code_of(bad), "BAD_REQUEST");
}

#[test]
fn empty_subject_rejected() {
    let bad = r#"
version: 1
policy:
  rules:
    - subject: " "
      verbs: ["get"]
      effect: allow
"#;
    assert_eq!(code_of(bad), "BAD_REQUEST");
}

#[test]
fn explicit_empty_rule_table_is_allowed() {
    let cfg = config::load_from_str("version: 1\npolicy:\n  default: no_opinion\n  rules: []\n")
        .expect("must parse");
    assert!(cfg.policy.rules.is_empty());
    assert_eq!(cfg.policy.default, DefaultPolicy::NoOpinion);
}

#[test]
fn missing_explicit_file_is_an_error() {
    let err = config::load_from_file("does/not/exist.yaml").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "INTERNAL");
}

#[test]
fn example_config_matches_builtin_rules() {
    let cfg = config::load_from_file("../../authzhook.example.yaml").expect("must parse");
    let builtin = config::schema::builtin_rules();
    assert_eq!(cfg.policy.rules.len(), builtin.len());
    for (a, b) in cfg.policy.rules.iter().zip(&builtin) {
        assert_eq!(a.subject, b.subject);
        assert_eq!(a.scope, b.scope);
        assert_eq!(a.verbs, b.verbs);
        assert_eq!(a.effect, b.effect);
        assert_eq!(a.reason, b.reason);
    }
}
