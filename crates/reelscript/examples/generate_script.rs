use clap::Parser;
use reelscript::{
    ScriptSession,
    config::{GenerationConfig, OutputLength, parse_keywords},
    model::Model,
    openai::OpenAiAdapterBuilder,
    options::{Language, Platform, Tone},
    prompt::PromptComposer,
};
use tracing_subscriber::EnvFilter;

/// # One-shot script generation
///
/// Builds a single configuration from the command line, sends it with the
/// language/tone-parameterized system instruction and prints the script plus
/// token usage.
///
/// ```bash
/// export OPENAI_API_KEY=sk-…
/// cargo run -p reelscript --example generate_script -- \
///     "A story about starting a small business with no budget." \
///     --keywords "entrepreneurship, motivation, social media growth" \
///     --tokens 700 --temperature 0.8
/// ```
#[derive(Debug, Parser)]
struct Args {
    /// What the script is about.
    idea: String,
    /// Comma-separated keywords to weave in.
    #[arg(long, default_value = "")]
    keywords: String,
    #[arg(long, default_value = "casual")]
    tone: Tone,
    #[arg(long, default_value = "English")]
    language: Language,
    #[arg(long)]
    platform: Option<Platform>,
    #[arg(long, default_value = "gpt-4o-mini")]
    model: Model,
    #[arg(long, default_value_t = 0.8)]
    temperature: f64,
    /// Token budget for the reply.
    #[arg(long, default_value_t = 700)]
    tokens: u32,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let config = GenerationConfig::builder(args.idea)
        .keywords(parse_keywords(&args.keywords))
        .tone(args.tone)
        .language(args.language)
        .platform(args.platform)
        .model(args.model)
        .temperature(args.temperature)
        .output_length(OutputLength::TokenBudget(args.tokens))
        .build()?;

    let backend = OpenAiAdapterBuilder::new_from_env().build()?;
    let mut session = ScriptSession::new(backend).with_composer(PromptComposer::localized());

    let record = session.generate(config, &[]).await?;

    println!("Generated Script:\n");
    println!("{}", record.script());
    println!("\n--- Debug Info ---");
    println!("Total tokens used: {}", record.total_tokens());

    Ok(())
}
