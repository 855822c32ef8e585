//! Replays a scripted edit session against a headless decimal field.
//!
//! Run with `RUST_LOG=decimal_field=trace cargo run --example edit_session`
//! to see every filtered keystroke.

use decimal_field::{DecimalField, DecimalFieldConfig, EditEvent};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let mut field = DecimalField::new(DecimalFieldConfig::default());

    let script = [
        EditEvent::DidBegin,
        EditEvent::Changed("-".into()),
        EditEvent::Changed("-0".into()),
        EditEvent::Changed("-00,".into()),
        EditEvent::Changed("-00,5".into()),
        EditEvent::Changed("-00,5.0".into()),
        EditEvent::DidEndOnExit,
    ];

    for event in script {
        let label = format!("{event:?}");
        field.handle(event);
        let shown = if field.text().is_empty() {
            DecimalField::PLACEHOLDER
        } else {
            field.text()
        };
        println!("{label:<28} -> {shown}");
    }

    field.set_allows_negative_numbers(false);
    println!("{:<28} -> {}", "negatives disallowed", field.text());
}
