use memeworthy::banner;
use memeworthy::config::AppConfig;
use memeworthy::models::EvaluationRequest;
use memeworthy::runner::Evaluator;

#[tokio::main]
async fn main() {
    // Print the startup banner
    banner::print_banner();

    // Load .env file if present; the API key may also come from the shell
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("⚠️  Warning: Could not load .env file: {}", e);
        eprintln!("   Make sure OPENAI_API_KEY is set in your environment");
    }

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let mut args = std::env::args().skip(1);
    let Some(text) = args.next() else {
        eprintln!("Usage: memeworthy <post text> [image url]");
        std::process::exit(2);
    };
    let image_url = args.next();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let request = match EvaluationRequest::new(text, image_url) {
        Ok(request) => request,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(2);
        }
    };

    let client = reqwest::Client::new();
    let evaluator = Evaluator::new(client, config);

    match evaluator.evaluate(&request).await {
        Ok(result) => {
            println!(
                "\n✅ Result:\n{}",
                serde_json::to_string_pretty(&result).unwrap_or_default()
            );
        }
        Err(e) => {
            eprintln!("\n❌ Evaluation failed: {}", e);
            std::process::exit(1);
        }
    }
}
