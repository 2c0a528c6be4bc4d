//! Run with
//!
//! ```not_rust
//! RUST_LOG=jwtpeek=debug cargo run --example inspect -- <token>
//! cargo run --example inspect -- --leeway 30 "Bearer <token>"
//! ```

use jwtpeek::{Inspector, MissingExpiry, Outcome, bearer_token};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    format!("{}=info,jwtpeek=debug", env!("CARGO_CRATE_NAME")).into()
                }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut builder = Inspector::builder();
    let mut token = None;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--leeway" => {
                let Some(seconds) = args.next().and_then(|s| s.parse().ok()) else {
                    tracing::error!("--leeway expects a number of seconds");
                    return ExitCode::from(2);
                };
                builder = builder.leeway(seconds);
            }
            "--allow-missing-exp" => {
                builder = builder.missing_expiry(MissingExpiry::NeverExpires);
            }
            _ => token = Some(arg),
        }
    }

    let inspector = match builder.build() {
        Ok(inspector) => inspector,
        Err(e) => {
            tracing::error!("invalid configuration: {e}");
            return ExitCode::from(2);
        }
    };

    // Accept either a bare token or a full Authorization header value
    let token = token.as_deref().map(|t| bearer_token(t).unwrap_or(t));

    if let Ok(decoded) = inspector.decode(token) {
        println!("alg: {}", decoded.header().algorithm().unwrap_or("-"));
        println!("exp: {:?}", decoded.claims().expiration());
        println!("iat: {:?}", decoded.claims().issued_at());
    }

    match inspector.inspect(token) {
        Outcome::Valid => {
            println!("valid");
            ExitCode::SUCCESS
        }
        outcome => {
            let reason = outcome.reason();
            match outcome.into_result(inspector.leeway()) {
                Err(e) => println!("{reason}: {e}"),
                Ok(()) => println!("{reason}"),
            }
            ExitCode::FAILURE
        }
    }
}
