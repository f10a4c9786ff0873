/// Roster - terminal user directory over a remote REST collection
mod app;
mod config;
mod event;
mod ui;

use std::{
    io,
    path::PathBuf,
    sync::{
        mpsc::{self, Receiver, Sender},
        Arc,
    },
    time::Duration,
};

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use roster_client::{ClientConfig, DirectoryClient, NewUser};
use tokio::runtime::Runtime;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use app::{App, Effect, NetEvent};
use config::AppConfig;
use event::{event_source_from_env, EventSource};

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Terminal user directory over a remote REST collection", long_about = None)]
struct Cli {
    /// Base URL of the user collection service
    #[arg(long, env = "ROSTER_ENDPOINT")]
    endpoint: Option<String>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,
}

/// Spawns the network operations and routes their completions back to the
/// UI thread. The tasks are fire-and-forget: no cancellation, no retries.
struct NetDispatcher<'a> {
    runtime: &'a Runtime,
    client: Arc<DirectoryClient>,
    tx: Sender<NetEvent>,
}

impl NetDispatcher<'_> {
    fn load_users(&self) {
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let result = client.list_users().await;
            let _ = tx.send(NetEvent::UsersLoaded(result));
        });
    }

    fn create_user(&self, new_user: NewUser) {
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let result = client.create_user(&new_user).await;
            let _ = tx.send(NetEvent::UserCreated(result));
        });
    }
}

fn main() -> Result<()> {
    // The TUI owns stdout, so logs go to stderr and stay quiet unless
    // RUST_LOG asks for more.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roster=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(endpoint) = cli.endpoint {
        config.remote.base_url = endpoint;
    }

    let client = DirectoryClient::new(
        ClientConfig::new(&config.remote.base_url).with_timeout(config.remote.timeout_secs),
    )?;

    let runtime = Runtime::new()?;
    run(&runtime, client)
}

fn run(runtime: &Runtime, client: DirectoryClient) -> Result<()> {
    let (tx, rx) = mpsc::channel::<NetEvent>();
    let dispatcher = NetDispatcher {
        runtime,
        client: Arc::new(client),
        tx,
    };

    // One-time initial load; its completion is applied on the UI thread
    // like every other state change.
    dispatcher.load_users();

    let mut source = event_source_from_env()?;
    let scripted = source.is_scripted();

    let mut stdout = io::stdout();
    if !scripted {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    let result = run_app(&mut terminal, &mut app, &mut *source, &dispatcher, &rx);

    if !scripted {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    }
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    source: &mut dyn EventSource,
    dispatcher: &NetDispatcher<'_>,
    rx: &Receiver<NetEvent>,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        // Completed network operations mutate state here, on this thread,
        // interleaved with input in arrival order.
        while let Ok(net) = rx.try_recv() {
            app.handle_net(net);
        }

        if let Some(ev) = source.next(Duration::from_millis(150))? {
            match ev {
                Event::Key(key) => {
                    if let Some(effect) = app.handle_key(key) {
                        match effect {
                            Effect::SubmitUser(new_user) => dispatcher.create_user(new_user),
                        }
                    }
                }
                Event::Resize(_, _) => {
                    // redrawn on next loop automatically
                }
                _ => {}
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
