//! Validate a booking form JSON file from the command line
//!
//! ```text
//! RUST_LOG=rentform=debug cargo run --example validate_booking -- booking.json [--partial]
//! ```

use anyhow::{Context, Result, bail};
use rentform::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        bail!("usage: validate_booking <booking.json> [--partial]");
    };
    let partial = args.any(|a| a == "--partial");

    let text = std::fs::read_to_string(&path).with_context(|| format!("reading {}", path))?;
    let value: Value =
        serde_json::from_str(&text).with_context(|| format!("parsing {} as JSON", path))?;

    let result = if partial {
        PartialRentalBooking::parse(&value).and_then(|draft| {
            serde_json::to_value(draft).map_err(|e| ValidationError::InvalidJson {
                message: e.to_string(),
            })
        })
    } else {
        RentalBooking::parse(&value).and_then(|booking| {
            serde_json::to_value(booking).map_err(|e| ValidationError::InvalidJson {
                message: e.to_string(),
            })
        })
    };

    match result {
        Ok(normalized) => {
            println!("✅ valid");
            println!("{}", serde_json::to_string_pretty(&normalized)?);
            Ok(())
        }
        Err(err) => {
            println!("❌ invalid");
            for (field, messages) in err.clone().into_field_map() {
                let field: &str = if field.is_empty() { "(root)" } else { &field };
                for message in messages {
                    println!("  {}: {}", field, message);
                }
            }
            Err(FormError::from(err).into())
        }
    }
}
