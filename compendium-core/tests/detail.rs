mod support;

use std::sync::Arc;

use compendium_core::model::Monster;
use compendium_core::{CorpusSource, DetailController, DetailState, LoadOutcome};
use support::{ControlledSource, bestiary, monster};

fn controller() -> DetailController<Monster> {
    DetailController::new(Arc::new(CorpusSource::new(bestiary())))
}

#[tokio::test]
async fn known_id_loads_the_record() {
    let detail = controller();
    assert_eq!(detail.load_segment("3").await, LoadOutcome::Committed);
    assert_eq!(
        detail.state().record().map(|monster| monster.name.as_str()),
        Some("Beast")
    );
}

#[tokio::test]
async fn missing_id_is_not_found() {
    let detail = controller();
    detail.load(99).await;
    assert_eq!(detail.state(), DetailState::NotFound);
}

#[tokio::test]
async fn malformed_segment_is_not_found() {
    let detail = controller();
    for segment in ["abc", "-1", "2.5"] {
        detail.load_segment(segment).await;
        assert_eq!(detail.state(), DetailState::NotFound, "segment {segment}");
    }
}

async fn wait_for_calls(source: &ControlledSource<Monster>, calls: usize) {
    while source.calls() < calls {
        tokio::task::yield_now().await;
    }
}

#[tokio::test]
async fn older_detail_response_never_overwrites_newer_one() {
    let source = Arc::new(ControlledSource::<Monster>::new());
    let reply_ape = source.expect_record(1);
    let reply_zombie = source.expect_record(2);
    let detail = Arc::new(DetailController::new(source.clone()));

    let first = tokio::spawn({
        let detail = detail.clone();
        async move { detail.load(1).await }
    });
    wait_for_calls(&source, 1).await;
    let second = tokio::spawn({
        let detail = detail.clone();
        async move { detail.load(2).await }
    });
    wait_for_calls(&source, 2).await;
    assert_eq!(detail.state(), DetailState::Loading);

    let _ = reply_zombie.send(Ok(monster(2, "Zombie", "Undead", 2.0)));
    assert_eq!(second.await.expect("join zombie"), LoadOutcome::Committed);

    let _ = reply_ape.send(Ok(monster(1, "Ape", "Beast", 2.0)));
    assert_eq!(first.await.expect("join ape"), LoadOutcome::Cancelled);

    assert_eq!(
        detail.state().record().map(|monster| monster.name.as_str()),
        Some("Zombie")
    );
}

#[tokio::test]
async fn malformed_segment_cancels_pending_load() {
    let source = Arc::new(ControlledSource::<Monster>::new());
    let reply = source.expect_record(1);
    let detail = Arc::new(DetailController::new(source.clone()));

    let pending = tokio::spawn({
        let detail = detail.clone();
        async move { detail.load(1).await }
    });
    wait_for_calls(&source, 1).await;

    assert_eq!(detail.load_segment("one").await, LoadOutcome::Committed);
    let _ = reply.send(Ok(monster(1, "Ape", "Beast", 2.0)));
    assert_eq!(pending.await.expect("join"), LoadOutcome::Cancelled);
    assert_eq!(detail.state(), DetailState::NotFound);
}
