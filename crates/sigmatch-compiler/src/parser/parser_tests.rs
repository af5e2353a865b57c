use crate::Error;
use crate::nfa::{Nfa, NfaBuilder};
use crate::parser::{DEFAULT_RECURSION_LIMIT, parse_pattern};

fn parse(source: &str) -> Nfa {
    let mut builder = NfaBuilder::new();
    let fragment = parse_pattern(source, &mut builder, DEFAULT_RECURSION_LIMIT).unwrap();
    builder.finish(fragment)
}

fn parse_err(source: &str) -> String {
    let mut builder = NfaBuilder::new();
    match parse_pattern(source, &mut builder, DEFAULT_RECURSION_LIMIT) {
        Err(Error::Parse(diagnostics)) => diagnostics.printer().render(),
        other => panic!("expected a parse error, got {other:?}"),
    }
}

#[test]
fn single_symbol() {
    let nfa = parse("a");
    assert_eq!(nfa.state_count(), 2);
    assert!(nfa.is_match(b"a"));
    assert!(!nfa.is_match(b""));
    assert!(!nfa.is_match(b"aa"));
}

#[test]
fn juxtaposition_concatenates() {
    let nfa = parse("abc");
    assert!(nfa.is_match(b"abc"));
    assert!(!nfa.is_match(b"ab"));
    assert!(!nfa.is_match(b"abcc"));
}

#[test]
fn alternation_takes_accumulated_left_operand() {
    // Reads as ((ab)|c)d.
    let nfa = parse("ab|cd");
    assert!(nfa.is_match(b"abd"));
    assert!(nfa.is_match(b"cd"));
    assert!(!nfa.is_match(b"ab"));
    assert!(!nfa.is_match(b"acd"));
}

#[test]
fn groups_delimit_alternation() {
    let nfa = parse("(ab)|(cd)");
    assert!(nfa.is_match(b"ab"));
    assert!(nfa.is_match(b"cd"));
    assert!(!nfa.is_match(b"abd"));
}

#[test]
fn postfix_binds_to_primary() {
    let nfa = parse("ab*");
    assert!(nfa.is_match(b"a"));
    assert!(nfa.is_match(b"abbb"));
    assert!(!nfa.is_match(b"abab"));

    let nfa = parse("(ab)+");
    assert!(nfa.is_match(b"abab"));
    assert!(!nfa.is_match(b""));

    let nfa = parse("a?b");
    assert!(nfa.is_match(b"b"));
    assert!(nfa.is_match(b"ab"));
    assert!(!nfa.is_match(b"aab"));
}

#[test]
fn whitespace_is_ignored() {
    let nfa = parse(" ( a | b ) * \n c ");
    assert!(nfa.is_match(b"abac"));
    assert!(nfa.is_match(b"c"));
    assert!(!nfa.is_match(b"a c"));
}

#[test]
fn nested_stars_terminate() {
    let nfa = parse("(a*)*");
    assert!(nfa.is_match(b""));
    assert!(nfa.is_match(b"aaaa"));
    assert!(!nfa.is_match(b"b"));
}

#[test]
fn empty_pattern() {
    insta::assert_snapshot!(parse_err(""), @"error at 0..0: pattern is empty");
    insta::assert_snapshot!(parse_err("  "), @"error at 0..2: pattern is empty");
}

#[test]
fn unclosed_group() {
    insta::assert_snapshot!(parse_err("(ab"), @"error at 0..1: group opened here is never closed");
}

#[test]
fn unmatched_close_paren() {
    insta::assert_snapshot!(parse_err("ab)"), @"error at 2..3: unmatched `)`");
}

#[test]
fn empty_group() {
    insta::assert_snapshot!(parse_err("a( )"), @r"
    error at 1..4: empty `()` is not allowed
      help: remove the group or put a symbol inside
    ");
}

#[test]
fn leading_operator() {
    insta::assert_snapshot!(parse_err("*a"), @r"
    error at 0..1: `*` has nothing to repeat
      help: put a symbol or a group before the operator
    ");
    insta::assert_snapshot!(parse_err("|a"), @"error at 0..1: expected a symbol or `(`, found `|`");
}

#[test]
fn dangling_pipe() {
    insta::assert_snapshot!(parse_err("a|"), @"error at 2..2: expected a symbol or `(`, found end of pattern");
}

#[test]
fn stacked_postfix_operators() {
    insta::assert_snapshot!(parse_err("a*+"), @r"
    error at 2..3: `+` cannot follow another postfix operator
      help: wrap the operand in `(...)` to stack operators
    ");
}

#[test]
fn unexpected_character() {
    insta::assert_snapshot!(parse_err("a.b"), @r"
    error at 1..2: unexpected `.`
      help: patterns use ASCII letters, digits, `|`, `*`, `+`, `?` and parentheses
    ");
}

#[test]
fn recursion_limit() {
    let source = format!("{}a{}", "(".repeat(5), ")".repeat(5));

    let mut builder = NfaBuilder::new();
    assert!(parse_pattern(&source, &mut builder, 5).is_ok());

    let mut builder = NfaBuilder::new();
    let err = parse_pattern(&source, &mut builder, 4).unwrap_err();
    assert!(matches!(err, Error::RecursionLimitExceeded));
}

#[test]
fn deep_nesting_within_default_limit() {
    let depth = DEFAULT_RECURSION_LIMIT as usize;
    let source = format!("{}a{}", "(".repeat(depth), ")".repeat(depth));
    let nfa = parse(&source);
    assert!(nfa.is_match(b"a"));
}

#[test]
fn state_limit_is_enforced() {
    let mut builder = NfaBuilder::new().with_max_states(3);
    let err = parse_pattern("ab", &mut builder, DEFAULT_RECURSION_LIMIT).unwrap_err();
    assert!(matches!(
        err,
        Error::ResourceExceeded {
            resource: "NFA states",
            limit: 3,
            actual: 4
        }
    ));
}
