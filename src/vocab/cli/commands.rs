//! # CLI Layer
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Context Setup**: Load configuration, pick the transport, build `VocabApi`
//! 3. **API Dispatch**: Call the appropriate `VocabApi` method on a current-thread runtime
//! 4. **Output Formatting**: Render pages through templates
//! 5. **Error Handling**: Only setup failures become errors; page failures are rendered
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds `AppContext` with API and configuration
//! - `handle_*()`: Per-command handlers that call API and print output

use super::render::{
    render_messages, render_page, render_text_list, Message, DETAIL_EMPTY, LOADING_MESSAGE,
};
use super::setup::{Cli, Commands};
use clap::Parser;
use console::Term;
use directories::ProjectDirs;
use std::future::Future;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tokio::runtime::Runtime;
use tracing_subscriber::EnvFilter;
use vocab::api::{Page, VocabApi};
use vocab::config::VocabConfig;
use vocab::error::{Result, VocabError};
use vocab::query::QueryClient;
use vocab::router::Route;
use vocab::transport::http::HttpTransport;
use vocab::transport::memory::InMemoryTransport;
use vocab::transport::Transport;

const LOG_ENV: &str = "VOCAB_LOG";

struct AppContext {
    api: VocabApi<Box<dyn Transport>>,
    runtime: Runtime,
    use_color: Option<bool>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_dir = resolve_config_dir(&cli)?;
    let use_color = if cli.no_color { Some(false) } else { None };

    // Config must stay editable even when the stored backend settings are broken.
    if let Some(Commands::Config { key, value }) = &cli.command {
        return handle_config(&config_dir, key.as_deref(), value.as_deref(), use_color);
    }

    let ctx = init_context(&cli, &config_dir, use_color)?;

    match cli.command {
        Some(Commands::List) | None => handle_open(&ctx, &Route::NotebookList.path()),
        Some(Commands::Show { notebook }) => handle_show(&ctx, &notebook),
        Some(Commands::Words { notebook }) => handle_words(&ctx, &notebook),
        Some(Commands::Open { path }) => handle_open(&ctx, &path),
        Some(Commands::Config { .. }) => Ok(()),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("vocab=debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn resolve_config_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.config_dir {
        return Ok(dir.clone());
    }
    ProjectDirs::from("com", "vocab", "vocab")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| VocabError::Config("could not determine config directory".into()))
}

fn init_context(cli: &Cli, config_dir: &Path, use_color: Option<bool>) -> Result<AppContext> {
    let config = VocabConfig::load(config_dir)?;

    let transport: Box<dyn Transport> = if cli.mock || config.mock {
        Box::new(InMemoryTransport::with_sample_notebooks().with_latency(config.mock_delay()))
    } else {
        let server_url = cli.server.as_deref().unwrap_or(&config.server_url);
        Box::new(HttpTransport::new(
            server_url,
            &config.base_path,
            config.timeout(),
        )?)
    };
    tracing::debug!(transport = transport.name(), config_dir = %config_dir.display(), "context ready");

    let queries = QueryClient::new().with_stale_after(config.stale_after());
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    Ok(AppContext {
        api: VocabApi::new(transport, queries),
        runtime,
        use_color,
    })
}

/// Runs `work` to completion, showing a transient loading line on an interactive stderr.
fn block_on_with_indicator<F: Future>(ctx: &AppContext, work: F) -> F::Output {
    let term = Term::stderr();
    let interactive = std::io::stderr().is_terminal();
    if interactive {
        let _ = term.write_line(LOADING_MESSAGE);
    }

    let output = ctx.runtime.block_on(work);

    if interactive {
        let _ = term.clear_last_lines(1);
    }
    output
}

fn handle_open(ctx: &AppContext, path: &str) -> Result<()> {
    let page = block_on_with_indicator(ctx, ctx.api.open(path));
    print!("{}", render_page(&page, ctx.use_color));
    Ok(())
}

fn handle_show(ctx: &AppContext, notebook: &str) -> Result<()> {
    let state = block_on_with_indicator(ctx, ctx.api.notebook_detail(notebook));
    let page = Page::Detail {
        notebook_id: notebook.to_string(),
        state,
    };
    print!("{}", render_page(&page, ctx.use_color));
    Ok(())
}

fn handle_words(ctx: &AppContext, notebook: &str) -> Result<()> {
    let words = block_on_with_indicator(ctx, ctx.api.notebook_words(notebook))?;
    let output = render_text_list(&words, DETAIL_EMPTY, ctx.use_color);
    if words.is_empty() {
        eprint!("{}", output);
    } else {
        print!("{}", output);
    }
    Ok(())
}

fn handle_config(
    config_dir: &Path,
    key: Option<&str>,
    value: Option<&str>,
    use_color: Option<bool>,
) -> Result<()> {
    let mut config = VocabConfig::load(config_dir)?;

    match (key, value) {
        (None, _) => {
            let lines: Vec<String> = config
                .list_all()
                .into_iter()
                .map(|(key, value)| format!("{} = {}", key, value))
                .collect();
            print!("{}", render_text_list(&lines, "", use_color));
            let location = format!("({})", config_dir.join("config.json").display());
            print!("{}", render_messages(&[Message::info(location)], use_color));
        }
        (Some(key), None) => {
            println!("{}", config.get(key)?);
        }
        (Some(key), Some(value)) => {
            config.set(key, value)?;
            config.save(config_dir)?;
            let mut messages = vec![Message::success(format!("Set {} = {}", key, value))];
            if key == "server-url" && config.mock {
                messages.push(Message::warning(
                    "mock is enabled, server-url is ignored until `vocab config mock false`",
                ));
            }
            print!("{}", render_messages(&messages, use_color));
        }
    }
    Ok(())
}
