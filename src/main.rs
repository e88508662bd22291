//! Standalone CLI for the scatter pipeline
//!
//! Loads the dataset from disk, builds the plot, optionally writes it as a
//! Plotly figure or a raw spec, and replays clicks through the same render/inspect path
//! the browser app uses.
//!
//! Run with: cargo run --features cli --bin scatter-cli -- --click 0

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use std::path::PathBuf;

    use clap::Parser;
    use scatter3d_viewer::core::{
        ClickInspector, DetailRequest, DetailView, HeadlessSurface, PlotSpec, PointCloudLoader,
        ViewerConfig, DEFAULT_DATA_URI, DEFAULT_IMAGE_DIR,
    };
    use scatter3d_viewer::session::PlotSession;
    use scatter3d_viewer::transport_native::FileTransport;
    use tracing::{error, info};
    use tracing_subscriber::{fmt, EnvFilter};

    #[derive(Parser, Debug)]
    #[command(name = "scatter-cli")]
    #[command(author, version, about, long_about = None)]
    struct Args {
        /// Coordinate file (path or file:// URI)
        #[arg(long, env = "TSNE_DATA", default_value = DEFAULT_DATA_URI)]
        source: String,

        /// Directory holding one image per label
        #[arg(long, env = "TSNE_IMAGE_DIR", default_value = DEFAULT_IMAGE_DIR)]
        image_dir: String,

        /// Write the plot as a Plotly figure JSON
        #[arg(long)]
        figure: Option<PathBuf>,

        /// Write the plot spec (arrays, axes, style) as JSON
        #[arg(long)]
        spec: Option<PathBuf>,

        /// Point index to click, repeatable
        #[arg(long = "click")]
        clicks: Vec<usize>,
    }

    /// Logs the image each click would open
    struct LogDetailView;

    impl DetailView for LogDetailView {
        fn show_detail(&mut self, request: &DetailRequest) {
            info!(index = request.index, label = %request.label, asset = %request.asset, "Detail");
        }
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,scatter3d_viewer=debug"));
    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();
    let config = ViewerConfig {
        source_uri: args.source,
        image_dir: args.image_dir,
        ..ViewerConfig::default()
    };

    let loader = PointCloudLoader::new(FileTransport);
    let dataset = loader.load(&config.source_uri).await?;

    let spec = PlotSpec::with_style(&dataset, config.style, config.axes.clone());
    info!(
        points = spec.len(),
        bounds = ?spec.bounds(),
        color_range = ?spec.color_range(),
        "Plot ready"
    );

    if let Some(path) = &args.figure {
        let figure = serde_json::to_string_pretty(&spec.to_plotly_figure())?;
        tokio::fs::write(path, figure).await?;
        info!(path = %path.display(), "Figure written");
    }

    if let Some(path) = &args.spec {
        tokio::fs::write(path, serde_json::to_string_pretty(&spec)?).await?;
        info!(path = %path.display(), "Spec written");
    }

    let mut session = PlotSession::new(HeadlessSurface::new("plot"));
    session.install(dataset, &config)?;

    for index in args.clicks {
        session.surface_mut().click(index);
    }

    let inspector = ClickInspector::new(config.image_dir.clone());
    let mut view = LogDetailView;
    for outcome in session.drain_clicks(&inspector) {
        match outcome {
            Ok(request) => view.show_detail(&request),
            Err(e) => {
                error!(error = %e, "Click rejected");
                return Err(e.into());
            }
        }
    }

    session.clear();
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {}
