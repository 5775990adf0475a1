//! Terminal front-end for the task list.
//!
//! # Responsibility
//! - Drive the list controller from an interactive prompt: add, toggle,
//!   delete, live search.
//! - Double as a linkage smoke check for `taskpad_core`.

use std::error::Error;
use std::io::{self, BufRead, Write};

use taskpad_core::db::open_db;
use taskpad_core::{core_version, ListController, SqliteKvStore};

const DEFAULT_DB_FILE_NAME: &str = "taskpad.sqlite3";

fn main() {
    if let Err(err) = run() {
        eprintln!("taskpad: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let db_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_DB_FILE_NAME.to_string());

    let store = SqliteKvStore::try_new(open_db(&db_path)?)?;
    let mut controller = ListController::new(store);
    controller.initialize();

    println!(
        "taskpad {} | {} | {} items",
        core_version(),
        db_path,
        controller.full_items().len()
    );
    println!("commands: add <text> | done <id> | rm <id> | search [text] | list | quit");
    print_items(&controller);

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let input = line.trim_end_matches(['\n', '\r']);
        let (command, rest) = match input.split_once(' ') {
            Some((command, rest)) => (command, rest),
            None => (input, ""),
        };

        match command {
            "" => {}
            "quit" | "exit" => break,
            "list" => print_items(&controller),
            "add" => {
                match controller.add(rest) {
                    Some(id) => println!("added #{id}"),
                    None => println!("nothing to add"),
                }
                print_items(&controller);
            }
            "done" => match rest.trim().parse() {
                Ok(id) => {
                    controller.toggle_done(id);
                    print_items(&controller);
                }
                Err(_) => println!("usage: done <id>"),
            },
            "rm" => match rest.trim().parse() {
                Ok(id) => {
                    controller.delete(id);
                    print_items(&controller);
                }
                Err(_) => println!("usage: rm <id>"),
            },
            "search" => {
                controller.set_query(rest);
                print_items(&controller);
            }
            other => println!("unknown command `{other}`; try: add, done, rm, search, list, quit"),
        }
    }

    Ok(())
}

fn print_items<S: taskpad_core::KvStore>(controller: &ListController<S>) {
    let visible = controller.visible_items_newest_first();
    if visible.is_empty() {
        println!("  (no items)");
    }
    for item in &visible {
        let mark = if item.is_done { "x" } else { " " };
        let title = item.title.as_deref().unwrap_or("(untitled)");
        println!("  [{mark}] #{} {title}", item.id);
    }

    let total = controller.full_items().len();
    if visible.len() != total {
        println!(
            "  -- {} of {total} shown (filter: `{}`)",
            visible.len(),
            controller.query().trim()
        );
    }
}
