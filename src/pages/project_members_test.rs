use super::*;

#[test]
fn parse_invite_normalises_case_and_whitespace() {
    assert_eq!(parse_invite("  Ann@Example.COM ").as_deref(), Some("ann@example.com"));
}

#[test]
fn parse_invite_rejects_malformed_addresses() {
    for raw in ["", "ann", "@example.com", "ann@", "ann@example", "ann@.com", "ann@example."] {
        assert_eq!(parse_invite(raw), None, "{raw:?}");
    }
}
