//! Command-line front end: fetch stats, render them to SVG, or serve them.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use stat_radar::api::{
    CycleOutcome, DEFAULT_FETCH_TIMEOUT, ExtractorConfig, HttpStatsFetcher, RadarChartConfig,
    RadarSurface, StatExtractor, StatsFetcher, StatsPipeline, TextSink,
};
use stat_radar::render::SvgRenderer;
use stat_radar::source::{ExtractingFetcher, NotionConfig, NotionSource, collect_stats};
use stat_radar::{RadarError, RadarResult, telemetry};

#[derive(Parser)]
#[command(name = "stat-radar")]
#[command(about = "Draw Notion stat points as a radar chart")]
#[command(version)]
struct Cli {
    /// Title property holding each stat's name
    #[arg(long, global = true, default_value = "Stat Name")]
    title_property: String,

    /// Number, formula, or rollup property holding each stat's points
    #[arg(long, global = true, default_value = "Points")]
    points_property: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Query Notion (NOTION_TOKEN, DATABASE_ID) and print the `{labels, values}` payload
    Fetch,

    /// Render the chart to an SVG file
    Render {
        /// Output path
        #[arg(long, default_value = "radar.svg")]
        out: PathBuf,

        /// Canvas edge length in pixels (the chart is always square)
        #[arg(long, default_value_t = 340)]
        size: u32,

        /// Read the payload from a running stats endpoint instead of Notion
        #[arg(long)]
        from_url: Option<String>,

        /// Timeout for the stats endpoint request, in seconds
        #[arg(long, default_value_t = DEFAULT_FETCH_TIMEOUT.as_secs())]
        timeout_secs: u64,
    },

    /// Serve `GET /api/stats` backed by Notion
    #[cfg(feature = "server")]
    Serve {
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        #[arg(long, default_value_t = 3000)]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = telemetry::init_default_tracing();
    let cli = Cli::parse();
    let extractor_config = ExtractorConfig::default()
        .with_title_property(cli.title_property)
        .with_points_property(cli.points_property);

    let result = match cli.command {
        Commands::Fetch => fetch(extractor_config).await,
        Commands::Render {
            out,
            size,
            from_url,
            timeout_secs,
        } => match from_url {
            Some(url) => {
                match HttpStatsFetcher::new(url, Duration::from_secs(timeout_secs)) {
                    Ok(fetcher) => render(fetcher, size, &out).await,
                    Err(err) => Err(err),
                }
            }
            None => match notion_source(&extractor_config) {
                Ok(source) => {
                    let fetcher =
                        ExtractingFetcher::new(source, StatExtractor::new(extractor_config));
                    render(fetcher, size, &out).await
                }
                Err(err) => Err(err),
            },
        },
        #[cfg(feature = "server")]
        Commands::Serve { host, port } => {
            match stat_radar::server::ServerState::from_env(extractor_config) {
                Ok(state) => stat_radar::server::run_server(state, &host, port).await,
                Err(err) => Err(err),
            }
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn notion_source(extractor_config: &ExtractorConfig) -> RadarResult<NotionSource> {
    let config = NotionConfig::from_env()?;
    NotionSource::new(config, extractor_config.title_property.clone())
}

async fn fetch(extractor_config: ExtractorConfig) -> RadarResult<()> {
    let source = notion_source(&extractor_config)?;
    let payload = collect_stats(&source, &StatExtractor::new(extractor_config)).await?;
    println!("{}", payload.to_json()?);
    Ok(())
}

async fn render<F: StatsFetcher>(fetcher: F, size: u32, out: &Path) -> RadarResult<()> {
    let surface = RadarSurface::new(SvgRenderer::new(), RadarChartConfig::new(size))?;
    let mut pipeline = StatsPipeline::new(fetcher, surface, TextSink::default());

    let outcome = pipeline.run_cycle().await;
    if let Some(message) = pipeline.sink().message() {
        eprintln!("{message}");
    }
    if let CycleOutcome::Failed { reason } = outcome {
        return Err(RadarError::InvalidData(format!("render cycle failed: {reason}")));
    }

    pipeline.surface().renderer().write_to(out)?;
    println!("wrote {}", out.display());
    Ok(())
}
