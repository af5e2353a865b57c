use crate::Error;
use crate::nfa::{Fragment, Label, NfaBuilder, NfaStateId};

fn id(raw: u32) -> NfaStateId {
    NfaStateId::from_raw(raw)
}

#[test]
fn atomic_fragment() {
    let mut b = NfaBuilder::new();
    let f = b.atomic(b'a').unwrap();

    assert_eq!(b.state_count(), 2);
    let edges: Vec<_> = b.transitions(f.start).collect();
    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].label, Label::Symbol(b'a'));
    assert_eq!(edges[0].target, f.terminate);
    assert_eq!(b.transition_count(f.terminate), 0);
}

#[test]
fn concat_adds_no_states() {
    let mut b = NfaBuilder::new();
    let x = b.atomic(b'a').unwrap();
    let y = b.atomic(b'b').unwrap();
    let f = b.concat(x, y).unwrap();

    assert_eq!(b.state_count(), 4);
    assert_eq!(f.start, x.start);
    assert_eq!(f.terminate, y.terminate);
    let edge = b.transitions(x.terminate).next().unwrap();
    assert_eq!(edge.label, Label::Epsilon);
    assert_eq!(edge.target, y.start);
}

#[test]
fn alternate_wiring() {
    let mut b = NfaBuilder::new();
    let x = b.atomic(b'a').unwrap();
    let y = b.atomic(b'b').unwrap();
    let f = b.alternate(x, y).unwrap();

    assert_eq!(b.state_count(), 6);
    let targets: Vec<_> = b.transitions(f.start).map(|t| t.target).collect();
    assert_eq!(targets, vec![x.start, y.start]);
    assert_eq!(b.transitions(x.terminate).next().unwrap().target, f.terminate);
    assert_eq!(b.transitions(y.terminate).next().unwrap().target, f.terminate);
}

#[test]
fn optional_reuses_operand_terminate() {
    let mut b = NfaBuilder::new();
    let x = b.atomic(b'a').unwrap();
    let f = b.optional(x).unwrap();

    assert_eq!(b.state_count(), 3);
    assert_eq!(f.terminate, x.terminate);
    let targets: Vec<_> = b.transitions(f.start).map(|t| t.target).collect();
    assert_eq!(targets, vec![x.start, x.terminate]);
}

#[test]
fn kleene_wiring() {
    let mut b = NfaBuilder::new();
    let x = b.atomic(b'a').unwrap();
    let f = b.kleene(x).unwrap();

    assert_eq!(b.state_count(), 4);
    let targets: Vec<_> = b.transitions(f.start).map(|t| t.target).collect();
    assert_eq!(targets, vec![x.start, f.terminate]);
    let back: Vec<_> = b.transitions(x.terminate).map(|t| t.target).collect();
    assert_eq!(back, vec![f.start]);
}

#[test]
fn positive_wiring() {
    let mut b = NfaBuilder::new();
    let x = b.atomic(b'a').unwrap();
    let f = b.positive(x).unwrap();

    assert_eq!(b.state_count(), 4);
    let targets: Vec<_> = b.transitions(f.start).map(|t| t.target).collect();
    assert_eq!(targets, vec![x.start]);
    let out: Vec<_> = b.transitions(x.terminate).map(|t| t.target).collect();
    assert_eq!(out, vec![f.start, f.terminate]);
}

#[test]
fn third_transition_is_rejected() {
    let mut b = NfaBuilder::new();
    let s = b.add_state().unwrap();
    let t = b.add_state().unwrap();
    b.add_epsilon(s, t).unwrap();
    b.add_transition(s, Label::Symbol(b'x'), t).unwrap();

    let err = b.add_epsilon(s, t).unwrap_err();
    assert!(matches!(err, Error::TransitionLimit(0)));
    assert_eq!(b.transition_count(s), 2);
}

#[test]
fn finish_renumbers_breadth_first() {
    let mut b = NfaBuilder::new();
    let x = b.atomic(b'a').unwrap();
    let y = b.atomic(b'b').unwrap();
    let f = b.concat(y, x).unwrap();
    let nfa = b.finish(f);

    assert_eq!(nfa.start(), id(0));
    assert_eq!(nfa.terminate(), id(3));
    assert_eq!(nfa.reachable_states(), vec![id(0), id(1), id(2), id(3)]);
    let first = nfa.transitions(id(0)).next().unwrap();
    assert_eq!(first.label, Label::Symbol(b'b'));
}

#[test]
fn finish_drops_unreachable_states() {
    let mut b = NfaBuilder::new();
    let _orphan = b.atomic(b'z').unwrap();
    let f = b.atomic(b'a').unwrap();
    let nfa = b.finish(f);

    assert_eq!(nfa.state_count(), 2);
    assert!(nfa.is_match(b"a"));
    assert!(!nfa.is_match(b"z"));
}

#[test]
fn finish_keeps_disconnected_terminate() {
    let mut b = NfaBuilder::new();
    let _orphan = b.add_state().unwrap();
    let start = b.add_state().unwrap();
    let terminate = b.add_state().unwrap();
    let nfa = b.finish(Fragment { start, terminate });

    assert_eq!(nfa.state_count(), 2);
    assert_eq!(nfa.start(), id(0));
    assert_eq!(nfa.terminate(), id(1));
    assert!(!nfa.is_match(b""));
}

#[test]
fn finish_start_is_terminate() {
    let mut b = NfaBuilder::new();
    let only = b.add_state().unwrap();
    let nfa = b.finish(Fragment {
        start: only,
        terminate: only,
    });

    assert_eq!(nfa.state_count(), 1);
    assert_eq!(nfa.terminate(), id(0));
    assert!(nfa.is_match(b""));
    assert!(!nfa.is_match(b"a"));
}

#[test]
fn finish_keeps_every_state_reachable() {
    let mut b = NfaBuilder::new();
    let x = b.atomic(b'a').unwrap();
    let y = b.atomic(b'b').unwrap();
    let alt = b.alternate(x, y).unwrap();
    let f = b.kleene(alt).unwrap();
    let nfa = b.finish(f);

    assert_eq!(nfa.reachable_states().len(), nfa.state_count());
    assert!(
        nfa.state_ids()
            .all(|s| nfa.state(s).transition_count() <= 2)
    );
}

#[test]
fn matcher_handles_epsilon_cycles() {
    let mut b = NfaBuilder::new();
    let x = b.atomic(b'a').unwrap();
    let opt = b.optional(x).unwrap();
    let f = b.kleene(opt).unwrap();
    let nfa = b.finish(f);

    assert!(nfa.is_match(b""));
    assert!(nfa.is_match(b"aaa"));
    assert!(!nfa.is_match(b"ab"));
}

#[test]
fn matcher_runs_in_constant_stack() {
    let c = crate::test_utils::compile("a*");
    let long = vec![b'a'; 200_000];

    assert!(c.nfa().is_match(&long));
    assert!(c.automaton().accepts(&long));

    let mut tail = long.clone();
    tail.push(b'b');
    assert!(!c.nfa().is_match(&tail));
}
