use anyhow::Context;
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;

mod service;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let addr = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "0.0.0.0:8787".to_string());

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("bind {addr}"))?;
    println!("palette functions listening on {addr}");

    loop {
        let (stream, peer) = listener.accept().await.context("accept connection")?;
        tokio::spawn(async move {
            if let Err(e) = hyper::server::conn::http1::Builder::new()
                .serve_connection(TokioIo::new(stream), service::FunctionServer)
                .await
            {
                eprintln!("error serving {peer}: {e}");
            }
        });
    }
}
