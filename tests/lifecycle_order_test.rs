use scope_lifecycle::{
    expected_transcript, run, run_default, Base, Derived, EntityKind, LifecycleEvent,
    ProgramParams, RecordingSink, Transcript,
};
use std::panic::{self, AssertUnwindSafe};

fn text(events: &[LifecycleEvent]) -> Vec<String> {
    events.iter().map(ToString::to_string).collect()
}

#[test]
fn test_derived_ordering_for_arbitrary_values() {
    for (p, q) in [(1, 2), (0, 0), (-5, 9), (i32::MIN, i32::MAX)] {
        let sink = RecordingSink::new();
        let derived = Derived::new(&sink, p, q);
        let constructed = sink.events();
        drop(derived);
        let destructed = sink.events()[constructed.len()..].to_vec();

        assert_eq!(
            constructed,
            vec![
                LifecycleEvent::construct(EntityKind::Base, p),
                LifecycleEvent::construct(EntityKind::Base, q),
                LifecycleEvent::construct(EntityKind::Derived, q),
            ]
        );
        let mut reversed: Vec<_> = constructed.iter().map(|e| e.closing()).collect();
        reversed.reverse();
        assert_eq!(destructed, reversed);
    }
}

#[test]
fn test_derived_with_defaults_scenario() {
    let sink = RecordingSink::new();
    drop(Derived::with_defaults(&sink));

    assert_eq!(
        text(&sink.events()),
        vec![
            "1 A constructor",
            "2 A constructor",
            "2 B constructor",
            "2 B destructor",
            "2 A destructor",
            "1 A destructor",
        ]
    );
}

#[test]
fn test_base_with_default_scenario() {
    let sink = RecordingSink::new();
    drop(Base::with_default(&sink));
    assert_eq!(text(&sink.events()), vec!["0 A constructor", "0 A destructor"]);
}

#[test]
fn test_full_program_scenario() {
    let sink = RecordingSink::new();
    run_default(&sink);

    let transcript = Transcript::from(sink);
    assert_eq!(
        text(transcript.events()),
        vec![
            "1 A constructor",
            "2 A constructor",
            "2 B constructor",
            "0 A constructor",
            "0 A destructor",
            "2 B destructor",
            "2 A destructor",
            "1 A destructor",
        ]
    );
    transcript.verify().unwrap();
}

#[test]
fn test_values_reported_identically_at_both_ends() {
    let params = ProgramParams {
        inherited: 31,
        member: -12,
        base: 7,
    };
    let sink = RecordingSink::new();
    run(&sink, &params);

    // verify() rejects any destruct whose value differs from its construct
    Transcript::from(sink).verify().unwrap();
}

#[test]
fn test_teardown_runs_while_unwinding() {
    let sink = RecordingSink::new();
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        let _derived = Derived::with_defaults(&sink);
        let _base = Base::with_default(&sink);
        panic!("leaving the scope early");
    }));

    assert!(result.is_err());
    assert_eq!(
        sink.into_events(),
        expected_transcript(&ProgramParams::default())
    );
}

#[test]
fn test_text_output_parses_back() {
    let sink = RecordingSink::new();
    run_default(&sink);
    let events = sink.into_events();

    let rendered = text(&events).join("\n");
    let parsed = Transcript::parse(&rendered).unwrap();
    assert_eq!(parsed.events(), events.as_slice());
}
