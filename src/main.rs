use anyhow::Context;
use log::info;
use tokio::{net::TcpListener, signal};

use autosteer::{NodeConfig, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = NodeConfig::from_env().context("loading configuration")?;
    config.validate().context("validating configuration")?;

    let addr = config.addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!("listening at {addr}");

    match &config.session.tuning {
        Some(tuning) => info!("tuning enabled with the {:?} segmenter", tuning.segmenter),
        None => info!("tuning disabled, gains {:?}", config.session.gains),
    }

    tokio::select! {
        ret = server::serve(listener, config.session) => {
            ret?;
        }
        _ = signal::ctrl_c() => {
            info!("received SIGINT, shutting down");
        }
    }

    Ok(())
}
