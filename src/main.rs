use anyhow::Context;

use settlein::onboarding::{ContentGenerator, RequestParams, ScoreSummary};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [user_name, tribe, interest, rest @ ..] = args.as_slice() else {
        eprintln!("Usage: settlein <name> <tribe> <interest> [score total]");
        std::process::exit(2);
    };

    let generator = ContentGenerator::from_env();
    if !generator.is_online() {
        eprintln!("No OPENAI_API_KEY set; serving offline content\n");
    }

    let params = RequestParams {
        user_name: user_name.clone(),
        tribe: tribe.clone(),
        interest: interest.clone(),
    };

    let content = generator.generate_onboarding_content(&params).await;
    println!(
        "{}",
        serde_json::to_string_pretty(&content).context("serialize onboarding content")?
    );

    if let [score, total] = rest {
        let summary = ScoreSummary {
            user_name: params.user_name.clone(),
            tribe: params.tribe.clone(),
            interest: params.interest.clone(),
            score: score.parse().context("score must be an integer")?,
            total: total.parse().context("total must be an integer")?,
        };
        println!("\n{}", generator.generate_final_banter(&summary).await);
    }

    Ok(())
}
