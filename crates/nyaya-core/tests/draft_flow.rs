// State-machine coverage for the draft interview flow. No backend is
// involved: transitions are pure functions of the appended turns.

use nyaya_core::draft::{
    contains_sentinel, readiness_sentinel, DraftPhase, DraftSession, SENTINEL_PREFIX,
};
use nyaya_core::types::Turn;

#[test]
fn sentinel_names_the_document_type() {
    let s = readiness_sentinel("Will");
    assert!(s.starts_with(SENTINEL_PREFIX));
    assert!(s.contains("generate your Will"));
}

#[test]
fn sentinel_detection_is_containment_not_equality() {
    // Surrounding prose must still trigger the transition.
    let reply = "Great, ✅ All required info has been collected. You can now generate your Will.";
    assert!(contains_sentinel(reply));
    assert!(contains_sentinel(SENTINEL_PREFIX));
    assert!(!contains_sentinel("What is your name?"));
    assert!(!contains_sentinel("All required info has been collected"));
}

#[test]
fn empty_doc_type_is_rejected() {
    assert!(DraftSession::new("").is_err());
    assert!(DraftSession::new("   ").is_err());
}

#[test]
fn begin_starts_the_interview_with_the_first_question() {
    let mut session = DraftSession::new("Rental Agreement").unwrap();
    assert_eq!(session.phase(), DraftPhase::SelectingType);

    session
        .begin("RENTAL AGREEMENT [NAME] [DATE]".into(), "What is your name?".into())
        .unwrap();

    assert_eq!(session.phase(), DraftPhase::Interviewing);
    assert_eq!(session.template(), "RENTAL AGREEMENT [NAME] [DATE]");
    assert_eq!(session.turns(), [Turn::assistant("What is your name?")]);
}

#[test]
fn begin_twice_is_rejected_and_the_template_is_never_regenerated() {
    let mut session = DraftSession::new("Will").unwrap();
    session.begin("WILL [NAME]".into(), "Q1?".into()).unwrap();
    assert!(session.begin("WILL v2".into(), "Q1 again?".into()).is_err());
    assert_eq!(session.template(), "WILL [NAME]");
}

#[test]
fn replies_before_the_interview_starts_are_rejected() {
    let mut session = DraftSession::new("Will").unwrap();
    assert!(session.push_user_reply("my name is X").is_err());
    assert!(session.push_assistant("What is your name?").is_err());
}

#[test]
fn ordinary_replies_keep_interviewing() {
    let mut session = DraftSession::new("Will").unwrap();
    session.begin("WILL".into(), "Q1?".into()).unwrap();
    session.push_user_reply("Asha Verma").unwrap();
    session.push_assistant("What is your address?").unwrap();
    assert_eq!(session.phase(), DraftPhase::Interviewing);
    assert_eq!(session.turns().len(), 3);
}

#[test]
fn sentinel_reply_moves_to_ready_and_freezes_the_turns() {
    let mut session = DraftSession::new("Will").unwrap();
    session.begin("WILL".into(), "Q1?".into()).unwrap();
    session.push_user_reply("Asha Verma").unwrap();
    session
        .push_assistant(readiness_sentinel("Will"))
        .unwrap();

    assert_eq!(session.phase(), DraftPhase::ReadyToFinalize);
    assert!(session.is_ready());
    // Frozen: nothing else may be appended.
    assert!(session.push_user_reply("one more thing").is_err());
    assert!(session.push_assistant("another question?").is_err());
}

#[test]
fn user_text_containing_the_sentinel_does_not_complete_the_interview() {
    let mut session = DraftSession::new("Will").unwrap();
    session.begin("WILL".into(), "Q1?".into()).unwrap();
    session.push_user_reply(readiness_sentinel("Will")).unwrap();
    assert_eq!(session.phase(), DraftPhase::Interviewing);
}

#[test]
fn finalize_requires_the_sentinel() {
    let mut session = DraftSession::new("Will").unwrap();
    session.begin("WILL".into(), "Q1?".into()).unwrap();
    assert!(session.mark_finalized().is_err());

    session.push_user_reply("answer").unwrap();
    session.push_assistant(readiness_sentinel("Will")).unwrap();
    session.mark_finalized().unwrap();
    assert_eq!(session.phase(), DraftPhase::Finalized);
}

#[test]
fn random_demo_is_only_reachable_before_the_interview() {
    let mut fresh = DraftSession::new("Partnership Deed").unwrap();
    fresh.mark_random_demo().unwrap();
    assert_eq!(fresh.phase(), DraftPhase::RandomDemoGenerated);

    let mut started = DraftSession::new("Partnership Deed").unwrap();
    started.begin("DEED".into(), "Q1?".into()).unwrap();
    assert!(started.mark_random_demo().is_err());
}

#[test]
fn resume_rederives_readiness_from_the_turns() {
    let turns = vec![
        Turn::assistant("What is your name?"),
        Turn::user("Asha Verma"),
        Turn::assistant("Great, ✅ All required info has been collected. You can now generate your Will."),
    ];
    let session = DraftSession::resume("Will", turns).unwrap();
    assert!(session.is_ready());

    let incomplete = DraftSession::resume(
        "Will",
        vec![Turn::assistant("What is your name?"), Turn::user("Asha")],
    )
    .unwrap();
    assert_eq!(incomplete.phase(), DraftPhase::Interviewing);

    let empty = DraftSession::resume("Will", Vec::new()).unwrap();
    assert_eq!(empty.phase(), DraftPhase::SelectingType);
}

#[test]
fn conversation_serializes_in_chronological_order() {
    let mut session = DraftSession::new("Will").unwrap();
    session.begin("WILL".into(), "What is your name?".into()).unwrap();
    session.push_user_reply("Asha Verma").unwrap();
    session.push_assistant("What is your address?").unwrap();

    assert_eq!(
        session.conversation(),
        "Assistant: What is your name?\nUser: Asha Verma\nAssistant: What is your address?"
    );
}
