use std::sync::Arc;

use futures::future::join_all;

use audit_autofill::autofill::AutoFillEngine;
use audit_autofill::context::ActorContext;
use audit_autofill::mapper::{AutoFilled, InMemoryMapper, Mapper};
use audit_autofill::models::{Employee, EmployeeMapper};
use audit_autofill::types::ActorId;

const CALLS_PER_UNIT: usize = 100;

type EmployeeStore = Arc<AutoFilled<InMemoryMapper<Employee>>>;

async fn unit_of_work(store: EmployeeStore, actor: ActorId) -> Vec<Employee> {
    ActorContext::scope(Some(actor), async move {
        let mut written = Vec::with_capacity(CALLS_PER_UNIT);
        for n in 0..CALLS_PER_UNIT {
            let mut employee = Employee {
                username: format!("user-{}-{}", actor, n),
                ..Default::default()
            };
            store
                .execute(&EmployeeMapper::INSERT, Some(&mut employee))
                .await
                .unwrap();

            // let the other unit of work run between insert and update
            tokio::task::yield_now().await;

            store
                .execute(&EmployeeMapper::UPDATE, Some(&mut employee))
                .await
                .unwrap();
            written.push(employee);

            tokio::task::yield_now().await;
        }
        written
    })
    .await
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_units_of_work_never_see_each_others_actor() {
    let engine = Arc::new(AutoFillEngine::default());
    let store: EmployeeStore = Arc::new(engine.wrap(InMemoryMapper::new("employee")));

    let first = tokio::spawn(unit_of_work(store.clone(), ActorId(1001)));
    let second = tokio::spawn(unit_of_work(store.clone(), ActorId(2002)));

    let (first, second) = (first.await.unwrap(), second.await.unwrap());

    for (written, actor) in [(first, ActorId(1001)), (second, ActorId(2002))] {
        assert_eq!(written.len(), CALLS_PER_UNIT);
        for employee in written {
            assert_eq!(employee.create_user, Some(actor), "{}", employee.username);
            assert_eq!(employee.update_user, Some(actor), "{}", employee.username);

            let stored = store.inner().find_by_id(employee.id.unwrap()).await.unwrap();
            assert_eq!(stored.create_user, Some(actor));
            assert_eq!(stored.update_user, Some(actor));
        }
    }

    assert_eq!(store.inner().count().await, 2 * CALLS_PER_UNIT);
}

#[tokio::test]
async fn interleaved_futures_on_one_task_keep_their_own_actor() {
    let engine = Arc::new(AutoFillEngine::default());
    let store: EmployeeStore = Arc::new(engine.wrap(InMemoryMapper::new("employee")));

    // all units of work polled on the same task and thread
    let units = (1..=4).map(|id| unit_of_work(store.clone(), ActorId(id)));
    let results = join_all(units).await;

    for (index, written) in results.into_iter().enumerate() {
        let actor = ActorId(index as i64 + 1);
        assert!(written.iter().all(|e| e.create_user == Some(actor) && e.update_user == Some(actor)));
    }
}

#[tokio::test]
async fn worker_reuse_does_not_leak_previous_actor() {
    let engine = Arc::new(AutoFillEngine::default());
    let store: EmployeeStore = Arc::new(engine.wrap(InMemoryMapper::new("employee")));

    unit_of_work(store.clone(), ActorId(77)).await;

    // a later write on the same task without a unit of work has no actor
    let mut employee = Employee::default();
    store
        .execute(&EmployeeMapper::INSERT, Some(&mut employee))
        .await
        .unwrap();

    assert_eq!(employee.create_user, None);
    assert_eq!(ActorContext::get(), None);
}

#[tokio::test]
async fn clear_inside_unit_of_work_drops_actor_for_later_calls() {
    let engine = Arc::new(AutoFillEngine::default());
    let store: EmployeeStore = Arc::new(engine.wrap(InMemoryMapper::new("employee")));

    let (before, after) = ActorContext::scope(Some(ActorId(3)), async {
        let mut before = Employee::default();
        store.execute(&EmployeeMapper::INSERT, Some(&mut before)).await.unwrap();

        ActorContext::clear();

        let mut after = before.clone();
        store.execute(&EmployeeMapper::UPDATE, Some(&mut after)).await.unwrap();
        (before, after)
    })
    .await;

    assert_eq!(before.update_user, Some(ActorId(3)));
    assert_eq!(after.create_user, Some(ActorId(3)));
    assert_eq!(after.update_user, None);
}
