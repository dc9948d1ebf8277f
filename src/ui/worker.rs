use crate::catalog::{CatalogApi, CatalogStore};
use crate::ui::app::{UiCommand, UiCommandSender};
use crate::ui::events::AppEvent;
use crate::ui::manage::Mutation;
use std::sync::mpsc::Sender;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

const COMMAND_QUEUE: usize = 16;

/// Run catalog commands on the async runtime and report results as events.
///
/// Commands run one at a time in arrival order. A list fetch that overlapped
/// a mutation could replace the list with a snapshot taken before the
/// mutation landed. The returned sender is the only way in; dropping it stops
/// the worker.
pub fn spawn_command_worker<C: CatalogApi>(
    runtime: &Handle,
    store: CatalogStore<C>,
    events: Sender<AppEvent>,
) -> UiCommandSender {
    let (tx, mut rx) = mpsc::channel::<UiCommand>(COMMAND_QUEUE);

    runtime.spawn(async move {
        while let Some(command) = rx.recv().await {
            let event = execute(&store, command).await;
            // The UI may already be gone during shutdown.
            if events.send(event).is_err() {
                break;
            }
        }
        tracing::debug!("Catalog command worker stopped");
    });

    tx
}

async fn execute<C: CatalogApi>(store: &CatalogStore<C>, command: UiCommand) -> AppEvent {
    match command {
        UiCommand::Initialize => AppEvent::CatalogSynced(store.initialize().await),
        UiCommand::Refresh => AppEvent::CatalogSynced(store.refresh().await),
        UiCommand::Add { draft } => AppEvent::MutationFinished {
            mutation: Mutation::Add,
            outcome: store
                .add(draft)
                .await
                .map(|_| ())
                .map_err(|err| err.user_message()),
        },
        UiCommand::Update { id, draft } => AppEvent::MutationFinished {
            mutation: Mutation::Update(id),
            outcome: store
                .modify(id, draft)
                .await
                .map_err(|err| err.user_message()),
        },
        UiCommand::Delete { id } => AppEvent::MutationFinished {
            mutation: Mutation::Delete(id),
            outcome: store.remove(id).await.map_err(|err| err.user_message()),
        },
    }
}
