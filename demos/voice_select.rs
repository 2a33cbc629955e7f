//! Pick a TTS voice for each line of input.
//!
//! ```text
//! echo "El perro y el gato están en la casa" | RUST_LOG=langscore=debug cargo run --example voice_select
//! ```

use std::io::{self, BufRead};

use langscore::{detect_language, select_voice};

const MIN_CONFIDENCE: u8 = 40;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("langscore=info".parse()?),
        )
        .with_writer(io::stderr)
        .init();

    for line in io::stdin().lock().lines() {
        let line = line?;
        let detections = detect_language(&line);
        let voice = select_voice(&detections, MIN_CONFIDENCE);
        println!("{voice}\t{}", serde_json::to_string(&detections)?);
    }
    Ok(())
}
