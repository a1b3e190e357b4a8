//! pagekit - scripted drag and drop session runner
//!
//! ```text
//! pagekit [--options FILE] [--script FILE] [--breakpoint]
//! ```

mod page;
mod script;

use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context};
use pagekit_devtools::{Breakpoint, StdioPrompt};
use pagekit_dnd::{DragConfig, DragController, EventResult};
use pagekit_dom::{Document, DomEvent, NodeId};
use tracing_subscriber::EnvFilter;

use script::Step;

const DEFAULT_OPTIONS: &str = r#"{"droppableIds": ["bin", "tray"]}"#;

#[derive(Debug, Default)]
struct Args {
    options: Option<PathBuf>,
    script: Option<PathBuf>,
    breakpoint: bool,
}

impl Args {
    fn parse(mut args: impl Iterator<Item = String>) -> anyhow::Result<Self> {
        let mut parsed = Args::default();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--options" => parsed.options = Some(args.next().context("--options needs a file")?.into()),
                "--script" => parsed.script = Some(args.next().context("--script needs a file")?.into()),
                "--breakpoint" => parsed.breakpoint = true,
                other => bail!("unknown argument {other:?}"),
            }
        }
        Ok(parsed)
    }
}

fn read(path: &Option<PathBuf>, fallback: &str) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display())),
        None => Ok(fallback.to_string()),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse(std::env::args().skip(1))?;
    let config = DragConfig::from_json(&read(&args.options, DEFAULT_OPTIONS)?).context("loading drag options")?;
    let steps = script::parse(&read(&args.script, script::DEFAULT_SCRIPT)?)?;

    let mut doc = page::build();
    let mut controller = DragController::new();
    let src = doc.get_element_by_id("src").context("demo page has no #src")?;
    controller.make_draggable(&[src], with_logging(config));

    run(&mut doc, &mut controller, &steps);

    if args.breakpoint {
        let stdin = io::stdin();
        let mut prompt = StdioPrompt::new(stdin.lock(), io::stdout());
        let report = Breakpoint::new("after script").run(&mut prompt, |expr| page::inspect(&doc, &controller, expr));
        if let Some(err) = prompt.take_error() {
            return Err(err).context("breakpoint prompt");
        }
        tracing::info!(evaluations = report.evaluations, failures = report.failures, "breakpoint closed");
    }
    Ok(())
}

/// Attach callbacks that log each lifecycle step
fn with_logging(config: DragConfig) -> DragConfig {
    config
        .on_start(|_, session, _, target| {
            tracing::info!(session = session.id.0, ?target, "onStart");
        })
        .on_drop(|_, session, _, _, resolution| {
            tracing::info!(session = session.id.0, droppable = resolution.target_id(), "onDrop");
        })
        .on_abort(|_, session, _, _| {
            tracing::info!(session = session.id.0, "onAbort");
        })
        .on_end(|doc, session, _, _| {
            let left = doc.tree().element(session.drag_object).and_then(|e| e.style.left);
            let top = doc.tree().element(session.drag_object).and_then(|e| e.style.top);
            tracing::info!(session = session.id.0, ?left, ?top, "onEnd");
        })
}

fn run(doc: &mut Document, controller: &mut DragController, steps: &[Step]) {
    let mut pointer = (0.0, 0.0);
    for step in steps {
        let mut event = match step {
            Step::Down { x, y, target } => {
                pointer = (*x, *y);
                let node = doc.get_element_by_id(target).unwrap_or(NodeId::NONE);
                DomEvent::pointer_down(node, *x, *y)
            }
            Step::Move { x, y } => {
                pointer = (*x, *y);
                DomEvent::pointer_move(*x, *y)
            }
            Step::Up { at } => {
                if let Some(at) = at {
                    pointer = *at;
                }
                DomEvent::pointer_up(pointer.0, pointer.1)
            }
            Step::Key(key) => DomEvent::key_press(key.clone()),
            Step::Scroll { x, y } => {
                doc.scroll_to(*x, *y);
                tracing::info!(x, y, "scrolled");
                continue;
            }
        };

        let result = controller.dispatch(doc, &mut event);
        tracing::debug!(kind = ?event.kind, consumed = (result == EventResult::Consumed), "dispatched");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args() {
        let args = Args::parse(["--script", "s.txt", "--breakpoint"].map(String::from).into_iter()).unwrap();
        assert_eq!(args.script, Some(PathBuf::from("s.txt")));
        assert!(args.breakpoint);
        assert!(args.options.is_none());

        assert!(Args::parse(["--options"].map(String::from).into_iter()).is_err());
        assert!(Args::parse(["--fast"].map(String::from).into_iter()).is_err());
    }

    #[test]
    fn test_default_script_drops_on_bin() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let mut doc = page::build();
        let mut controller = DragController::new();
        let src = doc.get_element_by_id("src").unwrap();
        let dropped = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&dropped);
        let config = DragConfig::from_json(DEFAULT_OPTIONS)
            .unwrap()
            .on_drop(move |_, _, _, _, res| *sink.borrow_mut() = res.target_id().map(str::to_string));
        controller.make_draggable(&[src], config);

        run(&mut doc, &mut controller, &script::parse(script::DEFAULT_SCRIPT).unwrap());

        assert_eq!(dropped.borrow().as_deref(), Some("bin"));
        assert!(!controller.is_dragging());
    }

    #[test]
    fn test_zero_sized_tray_is_reachable() {
        let mut doc = page::build();
        let mut controller = DragController::new();
        let src = doc.get_element_by_id("src").unwrap();
        let dropped = std::rc::Rc::new(std::cell::Cell::new(false));
        let sink = dropped.clone();
        let config = DragConfig::from_json(r#"{"droppableIds": ["tray"]}"#)
            .unwrap()
            .on_drop(move |_, _, _, _, _| sink.set(true));
        controller.make_draggable(&[src], config);

        let steps = script::parse("down 30 30\nmove 500 60\nup").unwrap();
        run(&mut doc, &mut controller, &steps);

        assert!(dropped.get());
    }
}
