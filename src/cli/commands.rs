use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "mn", about = concat!("@ mentions v", env!("CARGO_PKG_VERSION"), " - tag your items from any text input"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Workspace file to use instead of the nearest mentions.toml
    #[arg(short = 'w', long = "workspace", global = true)]
    pub workspace: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List mentionable items in workspace order
    Items,
    /// Show the mention being typed at the cursor
    Detect(DetectArgs),
    /// Show ranked suggestions for a query
    Suggest(SuggestArgs),
    /// Complete the mention at the cursor and print the resulting text and tag
    Complete(CompleteArgs),
    /// Show the tag a paste of this text would add
    Resolve(ResolveArgs),
}

#[derive(Args)]
pub struct DetectArgs {
    /// Input text
    pub text: String,
    /// Cursor byte offset (default: end of text)
    #[arg(long)]
    pub cursor: Option<usize>,
}

#[derive(Args)]
pub struct SuggestArgs {
    /// Query typed after the trigger (default: empty, the first items in order)
    pub query: Option<String>,
}

#[derive(Args)]
pub struct CompleteArgs {
    /// Input text
    pub text: String,
    /// Cursor byte offset (default: end of text)
    #[arg(long)]
    pub cursor: Option<usize>,
    /// Row to commit, counted from the top (wraps like pressing Down)
    #[arg(long, default_value_t = 0)]
    pub pick: usize,
}

#[derive(Args)]
pub struct ResolveArgs {
    /// Pasted text
    pub text: String,
}
