use guide_core::model::{ProfileDraft, QuizId, QuizSession};
use services::{AppServices, QuizLoopService, QuizOutcome, QuizSessionError};

async fn play(loop_svc: &QuizLoopService, quiz_id: QuizId, wrong_answers: usize) -> QuizOutcome {
    let started = loop_svc.start(quiz_id).await.unwrap();
    assert!(started.outcome.is_none());
    let mut session: QuizSession = started.session;

    let mut wrong_left = wrong_answers;
    loop {
        let question = session.current_question().expect("question while answering");
        let correct = question.correct_index().expect("well-formed question");
        let choice = if wrong_left > 0 {
            wrong_left -= 1;
            (correct + 1) % question.options().len()
        } else {
            correct
        };
        let answer = loop_svc.answer(&mut session, choice).await.unwrap();
        if let Some(outcome) = answer.outcome {
            assert!(answer.progress.is_complete);
            return outcome;
        }
    }
}

#[tokio::test]
async fn perfect_runs_unlock_the_chain_and_certificate() {
    let app = AppServices::in_memory();
    let loop_svc = app.quiz_loop();

    assert!(matches!(
        loop_svc.start(QuizId::Quiz2).await.unwrap_err(),
        QuizSessionError::Locked(QuizId::Quiz2)
    ));

    let outcome = play(&loop_svc, QuizId::Quiz1, 0).await;
    assert!(outcome.write.is_persisted());
    assert_eq!((outcome.result.score, outcome.result.total), (10, 10));
    assert!(outcome.result.perfect_pass);
    assert!(outcome.unlocked.quiz2);
    assert!(!outcome.unlocked.quiz3);
    assert!(!outcome.all_passed);

    play(&loop_svc, QuizId::Quiz2, 0).await;
    assert!(app.overview().certificate().await.is_none());

    let outcome = play(&loop_svc, QuizId::Quiz3, 0).await;
    assert!(outcome.all_passed);

    let certificate = app.overview().certificate().await.unwrap();
    assert_eq!(certificate.holder, "Name");

    app.profile()
        .create(ProfileDraft::new("Anna", "Loves the Rhine"))
        .await
        .unwrap();
    let certificate = app.overview().certificate().await.unwrap();
    assert_eq!(certificate.holder, "Anna");
    assert_eq!(certificate.message, "Basel Expert Certificate\nAnna");
}

#[tokio::test]
async fn imperfect_run_records_best_but_keeps_next_locked() {
    let app = AppServices::in_memory();
    let loop_svc = app.quiz_loop();

    let outcome = play(&loop_svc, QuizId::Quiz1, 3).await;
    assert_eq!(outcome.result.score, 7);
    assert!(!outcome.result.perfect_pass);
    assert!(!outcome.unlocked.quiz2);

    play(&loop_svc, QuizId::Quiz1, 5).await;

    let rows = app.overview().quiz_rows().await;
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].id, QuizId::Quiz1);
    assert_eq!(rows[0].best_score, 7);
    assert_eq!(rows[0].total, 10);
    assert!(!rows[0].passed);
    assert!(rows[0].unlocked);
    assert!(!rows[1].unlocked);
    assert!(!rows[2].unlocked);
}

#[tokio::test]
async fn invalid_option_does_not_advance_or_commit() {
    let app = AppServices::in_memory();
    let loop_svc = app.quiz_loop();
    let mut session = loop_svc.start(QuizId::Quiz1).await.unwrap().session;

    let err = loop_svc.answer(&mut session, 7).await.unwrap_err();
    assert!(matches!(err, QuizSessionError::Quiz(_)));
    assert_eq!(session.progress().answered, 0);
    assert_eq!(app.progress().entry(QuizId::Quiz1).await.best_score(), 0);
}

#[tokio::test]
async fn abandoned_attempt_leaves_no_trace() {
    let app = AppServices::in_memory();
    let loop_svc = app.quiz_loop();

    let mut session = loop_svc.start(QuizId::Quiz1).await.unwrap().session;
    let correct = session.current_question().unwrap().correct_index().unwrap();
    loop_svc.answer(&mut session, correct).await.unwrap();
    drop(session);

    let fresh = loop_svc.start(QuizId::Quiz1).await.unwrap().session;
    assert_eq!(fresh.score(), 0);
    assert_eq!(fresh.progress().answered, 0);
    assert_eq!(app.progress().entry(QuizId::Quiz1).await.best_score(), 0);
}
