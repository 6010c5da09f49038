use anyhow::Result;
use slug_sync::application::ports::{FieldHostPort, SlugGeneratorPort};
use slug_sync::config::WidgetConfig;
use slug_sync::infrastructure::{DefaultSlugGenerator, InMemoryFieldHost};
use slug_sync::SlugSyncWidget;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "type a title, `> text` to edit the slug, `publish`, `edit`, `show`, or `quit`";

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = WidgetConfig::from_env()?;

    let host = Arc::new(InMemoryFieldHost::new("slug"));
    let host_port: Arc<FieldHostPort> = Arc::clone(&host) as Arc<FieldHostPort>;
    let slugger: Arc<SlugGeneratorPort> = Arc::new(DefaultSlugGenerator);
    let widget = SlugSyncWidget::mount(host_port, slugger, config.clone());

    tracing::info!(field_id = widget.field_id(), "{USAGE}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    loop {
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = &mut shutdown => None,
        };
        let Some(line) = line else { break };

        match line.trim() {
            "quit" => break,
            "publish" => {
                let sys = host.publish();
                tracing::info!(version = sys.version, published_version = ?sys.published_version, "entry published");
            }
            "edit" => {
                let sys = host.edit();
                tracing::info!(version = sys.version, state = %sys.state(), "entry edited");
            }
            "show" => println!("{}", serde_json::to_string_pretty(&widget.view())?),
            typed if typed.starts_with('>') => {
                let text = typed.trim_start_matches('>').trim_start();
                match widget.input(text).await {
                    Ok(slug) => println!("slug: {slug}"),
                    Err(err) => tracing::error!(error = %err, "slug edit rejected"),
                }
            }
            title => host.set_sibling(config.title_field(), config.title_locale(), title),
        }
    }

    widget.unmount();
    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,slug_sync=debug".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::warn!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
