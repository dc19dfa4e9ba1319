use std::path::Path;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::engine::{EditKey, KeyOutcome, MentionInput, detect_mention};
use crate::io::workspace_io::{self, WorkspaceError};
use crate::model::{ContextTag, EngineConfig, Workspace};

type HandlerResult = Result<(), Box<dyn std::error::Error>>;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> HandlerResult {
    let json = cli.json;
    let workspace = cli.workspace.as_deref().map(Path::new);

    match cli.command {
        None => Err("no subcommand given (try `mn --help`)".into()),
        Some(cmd) => match cmd {
            Commands::Items => cmd_items(workspace, json),
            Commands::Detect(args) => cmd_detect(workspace, args, json),
            Commands::Suggest(args) => cmd_suggest(workspace, args, json),
            Commands::Complete(args) => cmd_complete(workspace, args, json),
            Commands::Resolve(args) => cmd_resolve(workspace, args, json),
        },
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn load(explicit: Option<&Path>) -> Result<Workspace, WorkspaceError> {
    let path = workspace_io::resolve_workspace_path(explicit)?;
    workspace_io::load_workspace(&path)
}

/// Settings for commands that work without any items (`detect`)
fn config_or_default(explicit: Option<&Path>) -> Result<EngineConfig, WorkspaceError> {
    match load(explicit) {
        Ok(ws) => Ok(ws.config),
        Err(WorkspaceError::NotFound) => Ok(EngineConfig::default()),
        Err(e) => Err(e),
    }
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> HandlerResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_items(workspace: Option<&Path>, json: bool) -> HandlerResult {
    let ws = load(workspace)?;
    if json {
        return print_json(&ws.items);
    }
    for item in &ws.items {
        println!("{}", format_item_line(item));
    }
    Ok(())
}

fn cmd_detect(workspace: Option<&Path>, args: DetectArgs, json: bool) -> HandlerResult {
    let config = config_or_default(workspace)?;
    let cursor = args.cursor.unwrap_or(args.text.len());
    let span = detect_mention(&args.text, cursor, config.mentions.trigger);
    if json {
        return print_json(&span.as_ref().map(SpanJson::from));
    }
    match span {
        Some(span) => println!("{}", format_span(&span)),
        None => println!("no mention"),
    }
    Ok(())
}

fn cmd_suggest(workspace: Option<&Path>, args: SuggestArgs, json: bool) -> HandlerResult {
    let ws = load(workspace)?;
    let input = MentionInput::new(ws.config.mentions.clone());
    let ranked = input
        .index(&ws.items)
        .query(args.query.as_deref().unwrap_or(""));
    if json {
        return print_json(&ranked);
    }
    for s in &ranked {
        println!("{}", format_suggestion_line(s));
    }
    Ok(())
}

fn cmd_complete(workspace: Option<&Path>, args: CompleteArgs, json: bool) -> HandlerResult {
    let ws = load(workspace)?;
    let mut input = MentionInput::new(ws.config.mentions.clone());
    input.focus();
    let cursor = args.cursor.unwrap_or(args.text.len());
    input.text_changed(&args.text, cursor, &ws.items);
    if !input.session().is_active() {
        return Err("no suggestions for the text at the cursor".into());
    }
    for _ in 0..args.pick {
        input.handle_key(EditKey::Down, &args.text);
    }
    let committed = match input.handle_key(EditKey::Enter { modified: false }, &args.text) {
        KeyOutcome::Committed(c) => c,
        _ => return Err("nothing was committed".into()),
    };
    if json {
        return print_json(&CompletionJson::from(&committed));
    }
    println!("{}", format_completion(&committed));
    Ok(())
}

fn cmd_resolve(workspace: Option<&Path>, args: ResolveArgs, json: bool) -> HandlerResult {
    let ws = load(workspace)?;
    let mut input = MentionInput::new(ws.config.mentions.clone());
    input.paste(Some(&args.text), &ws.items);
    let tag: Option<ContextTag> = input.tags().iter().next().cloned();
    if json {
        return print_json(&ResolveJson { tag });
    }
    match tag {
        Some(tag) => println!("{}", format_tag_line(&tag)),
        None => println!("no match"),
    }
    Ok(())
}
