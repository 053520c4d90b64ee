//! Build a service with no external capabilities and print the degraded
//! insight: template text, Unknown vedic attributes.
//!
//! Run with: cargo run -p astral-runtime --example basic_usage

use astral_config::AstralConfig;
use astral_core::profile::BirthProfile;
use astral_runtime::InsightApp;
use futures_util::StreamExt;

#[tokio::main]
async fn main() {
    let app = InsightApp::from_config(AstralConfig::default()).expect("bare config always builds");

    let profile = BirthProfile::parse("Asha", "1993-02-18", "06:15", "Pune")
        .expect("valid date")
        .with_category("Career");

    let insight = app.service.compose_insight(&profile).await;
    println!("zodiac:    {}", insight.zodiac);
    println!("rasi:      {}", insight.rasi);
    println!("nakshatra: {}", insight.nakshatra);
    println!("insight:   {}", insight.insight);

    // The streaming surface degrades to a single chunk here.
    let mut chunks = app.service.stream_insight(&profile).await;
    while let Some(chunk) = chunks.next().await {
        println!("chunk:     {}", chunk);
    }
}
