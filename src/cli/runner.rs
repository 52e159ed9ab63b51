//! CLI runner - executes commands

use crate::alert::{Alert, AlertSink};
use crate::catalog::{CatalogLoader, HttpCatalogSource};
use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::ClientConfig;
use crate::error::{Result, ResultExt};
use crate::session::StaticSession;
use crate::view::{HomeScreen, HomeSnapshot, ListPlaceholder, TapCounter, NO_RESULTS_MESSAGE};
use std::fmt::Write as _;
use std::sync::Arc;
use tracing::debug;

/// Prints alerts on stderr
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrAlertSink;

impl AlertSink for StderrAlertSink {
    fn show(&self, alert: &Alert) {
        eprintln!("{}: {}", alert.title, alert.message);
    }
}

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let config = self.load_config()?;
        match &self.cli.command {
            Commands::Page { page } => self.page(&config, *page).await,
            Commands::Browse => self.browse(&config).await,
            Commands::Scroll { steps } => self.scroll(&config, *steps).await,
            Commands::Config => self.print_config(&config),
        }
    }

    /// Load configuration and apply command-line overrides
    pub fn load_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.cli.config {
            Some(path) => ClientConfig::from_file(path)
                .with_context(|| format!("Failed to load {}", path.display()))?,
            None => ClientConfig::default(),
        };

        if let Some(endpoint) = &self.cli.endpoint {
            config.endpoint.clone_from(endpoint);
        }
        if let Some(page_size) = self.cli.page_size {
            config.page_size = page_size;
        }

        config.validate()?;
        debug!(?config, "Effective configuration");
        Ok(config)
    }

    /// Mount a home screen and wait for its catalog
    async fn mount(&self, config: &ClientConfig) -> Result<HomeScreen> {
        let source = HttpCatalogSource::from_config(config)?;
        let loader = CatalogLoader::new(Arc::new(source), Arc::new(StderrAlertSink));
        let session = Arc::new(StaticSession::new(self.cli.user.clone()));

        let mut screen = HomeScreen::mount(loader, session, TapCounter::new(), config.page_size)?;
        let phase = screen.loaded().await?;
        debug!(?phase, "Catalog resolved");
        Ok(screen)
    }

    async fn page(&self, config: &ClientConfig, page: usize) -> Result<()> {
        let mut screen = self.mount(config).await?;
        if !screen.on_go_to_page(page) && page != 1 {
            debug!(page, "Requested page out of range, staying on page 1");
        }
        self.emit(&screen.snapshot())
    }

    async fn browse(&self, config: &ClientConfig) -> Result<()> {
        let mut screen = self.mount(config).await?;
        self.emit(&screen.snapshot())?;
        while screen.on_next() {
            self.emit(&screen.snapshot())?;
        }
        Ok(())
    }

    async fn scroll(&self, config: &ClientConfig, steps: usize) -> Result<()> {
        let mut screen = self.mount(config).await?;
        self.emit(&screen.snapshot())?;
        for step in 1..=steps {
            if !screen.on_scroll(0.0) {
                debug!(step, "End of catalog reached");
                break;
            }
            self.emit(&screen.snapshot())?;
        }
        Ok(())
    }

    fn print_config(&self, config: &ClientConfig) -> Result<()> {
        let rendered = match self.cli.format {
            OutputFormat::Json => serde_json::to_string_pretty(config)?,
            OutputFormat::Pretty => serde_yaml::to_string(config)?,
        };
        println!("{rendered}");
        Ok(())
    }

    fn emit(&self, snapshot: &HomeSnapshot) -> Result<()> {
        match self.cli.format {
            OutputFormat::Json => println!("{}", serde_json::to_string(snapshot)?),
            OutputFormat::Pretty => print!("{}", render_pretty(snapshot)),
        }
        Ok(())
    }
}

/// Render a snapshot the way the home screen lays it out
pub fn render_pretty(snapshot: &HomeSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", snapshot.greeting);
    let _ = writeln!(out);

    match snapshot.placeholder {
        ListPlaceholder::Loading => {
            let _ = writeln!(out, "Loading...");
        }
        ListPlaceholder::NoResults => {
            let _ = writeln!(out, "{NO_RESULTS_MESSAGE}");
        }
        ListPlaceholder::Hidden => {
            for item in &snapshot.visible_items {
                let _ = writeln!(out, "[{}] {}", item.id, item.display_title());
                let _ = writeln!(out, "    ISBN: {}", item.isbn);
                let _ = writeln!(out, "    Page Count: {}", item.page_count_label());
                let _ = writeln!(out, "    Authors: {}", item.authors_label());
            }
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Page {}", snapshot.page_label());
    out
}
