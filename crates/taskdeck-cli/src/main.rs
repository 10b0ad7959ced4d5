//! Terminal front-end for the taskdeck store.
//!
//! Wires the two collaborators to the core: the form (create path) and the
//! grid (edit/delete path), plus a renderer task that re-draws the table on
//! every snapshot the store publishes.

use std::sync::Arc;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{Duration, sleep};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use taskdeck_core::{InMemoryTaskStore, TaskDeckError, TaskDraft, TaskId, TaskStore};

mod form;
mod grid;

#[derive(Debug, Parser)]
#[command(name = "taskdeck", version, about = "In-memory task-list manager")]
struct Args {
    /// Run the scripted walkthrough instead of the interactive prompt.
    #[arg(long)]
    demo: bool,

    /// Log filter, e.g. "taskdeck_core=debug" (falls back to RUST_LOG).
    #[arg(long)]
    log: Option<String>,
}

fn init_tracing(filter: Option<&str>) {
    let filter = match filter {
        Some(f) => EnvFilter::new(f),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_tracing(args.log.as_deref());

    let store = Arc::new(InMemoryTaskStore::new());

    // The view side of the data flow: every applied mutation republishes the
    // full collection, and the renderer re-draws it.
    let mut snapshots = store.subscribe();
    let renderer = tokio::spawn(async move {
        while snapshots.changed().await.is_ok() {
            let tasks = snapshots.borrow_and_update().clone();
            println!("{}", grid::render(&tasks));
        }
    });

    if args.demo {
        demo(store.as_ref()).await;
    } else {
        repl(store.as_ref()).await;
    }

    drop(store); // closes the watch channel, the renderer loop ends
    let _ = renderer.await;
}

const HELP: &str = "\
commands:
  add <name> <code> <dd/mm/yyyy|today> [editable]
  list | json
  edit <id> | set <id> <name|code|date> <value> | save <id> | cancel <id>
  rm <id>
  help | quit";

async fn repl(store: &InMemoryTaskStore) {
    println!("{HELP}");
    let mut grid_view = grid::GridView::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Ok(Some(line)) = lines.next_line().await {
        let line = line.trim();
        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
        match command {
            "" => {}
            "help" => println!("{HELP}"),
            "quit" | "exit" => break,
            "add" => handle_add(store, rest).await,
            "list" => print!("{}", grid::render(&store.list().await)),
            "json" => match serde_json::to_string_pretty(&store.list().await) {
                Ok(s) => println!("{s}"),
                Err(e) => warn!("json render failed: {e}"),
            },
            "edit" => handle_edit(store, &mut grid_view, rest).await,
            "set" => handle_set(&mut grid_view, rest),
            "save" => handle_save(store, &mut grid_view, rest).await,
            "cancel" => {
                if let Some(id) = parse_id(rest)
                    && !grid_view.cancel(id)
                {
                    println!("row {id} is not in edit mode");
                }
            }
            "rm" => handle_rm(store, rest).await,
            other => println!("unknown command {other:?} (try `help`)"),
        }
    }
}

async fn handle_add(store: &InMemoryTaskStore, rest: &str) {
    let draft = match form::parse_add(rest) {
        Ok(draft) => draft,
        Err(message) => {
            println!("{message}");
            return;
        }
    };
    if let Err(TaskDeckError::Validation(err)) = store.create(draft).await {
        println!("rejected:\n{}", form::render_errors(&err));
    }
}

async fn handle_edit(store: &InMemoryTaskStore, grid_view: &mut grid::GridView, rest: &str) {
    let Some(id) = parse_id(rest) else { return };
    let Some(task) = store.list().await.into_iter().find(|t| t.id == id) else {
        println!("no task with id {id}");
        return;
    };
    if let Err(message) = grid_view.begin(task) {
        println!("{message}");
    }
}

fn handle_set(grid_view: &mut grid::GridView, rest: &str) {
    let mut tokens = rest.splitn(3, ' ');
    let (Some(id), Some(field), Some(value)) = (tokens.next(), tokens.next(), tokens.next()) else {
        println!("usage: set <id> <name|code|date> <value>");
        return;
    };
    let Some(id) = parse_id(id) else { return };
    if let Err(message) = grid_view.set(id, field, value.trim()) {
        println!("{message}");
    }
}

async fn handle_save(store: &InMemoryTaskStore, grid_view: &mut grid::GridView, rest: &str) {
    let Some(id) = parse_id(rest) else { return };
    let Some(row) = grid_view.save(id) else {
        println!("row {id} is not in edit mode");
        return;
    };
    match store.update(row).await {
        Ok(applied) if !applied.is_applied() => println!("row {id} no longer exists"),
        Ok(_) => {}
        Err(TaskDeckError::Validation(err)) => {
            println!("rejected:\n{}", form::render_errors(&err));
        }
    }
}

async fn handle_rm(store: &InMemoryTaskStore, rest: &str) {
    let Some(id) = parse_id(rest) else { return };
    // The grid contract: delete is only offered on editable rows.
    match store.list().await.into_iter().find(|t| t.id == id) {
        Some(task) if !task.editable => {
            println!("row {id} is not editable");
            return;
        }
        Some(_) => {}
        None => {
            println!("no task with id {id}");
            return;
        }
    }
    if let Ok(applied) = store.delete(id).await
        && !applied.is_applied()
    {
        println!("no task with id {id}");
    }
}

fn parse_id(token: &str) -> Option<TaskId> {
    match token.trim().parse::<u64>() {
        Ok(n) => Some(TaskId::new(n)),
        Err(_) => {
            println!("expected a numeric id, got {token:?}");
            None
        }
    }
}

/// Scripted walkthrough of the store contract, pacing each step so the
/// renderer output lands between them.
async fn demo(store: &InMemoryTaskStore) {
    let step = Duration::from_millis(20);

    println!("--- create two tasks");
    let ayse = form::parse_add("Ayse AB123 01/01/2024 editable").expect("demo draft parses");
    let ayse = store.create(ayse).await.expect("demo create succeeds");
    sleep(step).await;

    let can = form::parse_add("Can CD456 02/02/2024").expect("demo draft parses");
    store.create(can).await.expect("demo create succeeds");
    sleep(step).await;

    println!("--- a name over 12 characters is rejected, nothing changes");
    let too_long = TaskDraft::new("ThisNameIsWayTooLong", "XY999", ayse.assign_date);
    if let Err(TaskDeckError::Validation(err)) = store.create(too_long).await {
        println!("rejected:\n{}", form::render_errors(&err));
    }
    sleep(step).await;

    println!("--- edit the editable row through the grid path");
    let mut grid_view = grid::GridView::new();
    grid_view.begin(ayse.clone()).expect("row 1 is editable");
    grid_view.set(ayse.id, "name", "Zeynep").expect("name patches");
    let row = grid_view.save(ayse.id).expect("row was in edit mode");
    store.update(row).await.expect("demo update succeeds");
    sleep(step).await;

    println!("--- delete row 1, the survivor keeps its id");
    store.delete(ayse.id).await.expect("demo delete succeeds");
    sleep(step).await;
}
