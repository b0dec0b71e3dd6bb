//! Host-side helper: `cargo run` builds the WASM page, serves `static/` over
//! HTTP, and (with `--tunnel`) exposes it via ngrok.

#[cfg(not(target_arch = "wasm32"))]
mod host {
    use std::process::{Command, Stdio};
    use std::{thread, time::Duration};

    use anyhow::{bail, Context, Result};
    use clap::Parser;
    use tracing::{info, warn};
    use tracing_subscriber::EnvFilter;

    #[derive(Debug, Parser)]
    #[command(about = "Build and serve the WebGL quad page")]
    struct Args {
        /// Port for the local HTTP server.
        #[arg(long, default_value_t = 8000)]
        port: u16,

        /// Serve whatever is already in static/pkg.
        #[arg(long)]
        skip_build: bool,

        /// Start an ngrok tunnel to the local server.
        #[arg(long)]
        tunnel: bool,
    }

    fn build_pkg() -> Result<()> {
        info!("building WASM pkg");
        let status = Command::new("wasm-pack")
            .args(["build", "--release", "--target", "web", "--out-dir", "static/pkg"])
            .status();
        match status {
            Ok(st) if st.success() => Ok(()),
            Ok(st) => bail!("wasm-pack finished with {st}; see https://rustwasm.github.io/wasm-pack/"),
            Err(err) => {
                warn!(%err, "wasm-pack not found in PATH; the page may serve stale artifacts");
                Ok(())
            }
        }
    }

    pub fn run() -> Result<()> {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .init();

        let args = Args::parse();

        if !args.skip_build {
            build_pkg()?;
        }

        info!(port = args.port, "serving static/ at http://127.0.0.1:{}", args.port);
        let _server = Command::new("python3")
            .args(["-m", "http.server", &args.port.to_string(), "--directory", "static"])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .context("failed to start http server")?;

        if args.tunnel {
            match Command::new("ngrok")
                .args(["http", &args.port.to_string()])
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit())
                .spawn()
            {
                Ok(_) => info!("ngrok tunnel starting"),
                Err(err) => warn!(%err, "ngrok not found; install it to expose the page"),
            }
        }

        // Keep process alive
        loop {
            thread::sleep(Duration::from_secs(60));
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    host::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {}
