use clap::Parser;
use reelscript::{
    ScriptSession,
    config::{
        DEFAULT_SPOKEN_SECONDS, DEFAULT_TEMPERATURE, GenerationConfig, OutputLength,
        parse_keywords,
    },
    model::{Model, OpenAiModel},
    openai::{OpenAiAdapter, OpenAiAdapterBuilder},
    options::{Language, Platform, Tone},
    types::SequenceNumber,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

/// # Script studio – interactive terminal harness
///
/// Keeps one [`ScriptSession`] alive for the whole run. Every plain line you
/// type is treated as a script idea and generated with the current form
/// settings; lines starting with `:` change the form.
///
/// ```bash
/// export OPENAI_API_KEY=sk-…
/// RUST_LOG=reelscript=debug cargo run -p reelscript --example script_studio -- --platform TikTok
/// ```
///
/// Commands:
///
/// ```text
/// :tone <tone>            :lang <language>      :platform <platform|none>
/// :model <id>             :temp <0..1>          :keywords a, b, c
/// :seconds <n>            :tokens <n>           :instruction [text]
/// :refs [1,2,…]           :history              :export
/// :options                :quit
/// ```
#[derive(Debug, Parser)]
struct Args {
    #[arg(long, default_value = "gpt-4o-mini")]
    model: Model,
    #[arg(long, default_value = "casual")]
    tone: Tone,
    #[arg(long, default_value = "English")]
    language: Language,
    #[arg(long)]
    platform: Option<Platform>,
    #[arg(long, default_value_t = DEFAULT_TEMPERATURE)]
    temperature: f64,
    /// Spoken duration in seconds (20–180).
    #[arg(long, default_value_t = DEFAULT_SPOKEN_SECONDS, conflicts_with = "tokens")]
    seconds: u32,
    /// Use a token budget instead of a spoken duration.
    #[arg(long)]
    tokens: Option<u32>,
    /// Comma-separated keywords.
    #[arg(long, default_value = "")]
    keywords: String,
}

/// The settings a form-based UI would hold between button presses.
#[derive(Debug)]
struct StudioForm {
    model: Model,
    tone: Tone,
    language: Language,
    platform: Option<Platform>,
    temperature: f64,
    output_length: OutputLength,
    keywords: Vec<String>,
    instruction: Option<String>,
    references: Vec<SequenceNumber>,
}

impl From<Args> for StudioForm {
    fn from(args: Args) -> Self {
        Self {
            model: args.model,
            tone: args.tone,
            language: args.language,
            platform: args.platform,
            temperature: args.temperature,
            output_length: match args.tokens {
                Some(tokens) => OutputLength::TokenBudget(tokens),
                None => OutputLength::SpokenDuration(args.seconds),
            },
            keywords: parse_keywords(&args.keywords),
            instruction: None,
            references: vec![],
        }
    }
}

impl StudioForm {
    fn config(&self, idea: &str) -> reelscript::error::Result<GenerationConfig> {
        let mut builder = GenerationConfig::builder(idea)
            .keywords(&self.keywords)
            .tone(self.tone)
            .language(self.language)
            .platform(self.platform)
            .temperature(self.temperature)
            .output_length(self.output_length)
            .model(self.model.clone());
        if let Some(instruction) = &self.instruction {
            builder = builder.custom_instruction(instruction.clone());
        }
        builder.build()
    }
}

enum Flow {
    Continue,
    Quit,
}

fn apply_command(
    form: &mut StudioForm,
    session: &ScriptSession<OpenAiAdapter>,
    command: &str,
    argument: &str,
) -> anyhow::Result<Flow> {
    match command {
        "tone" => form.tone = argument.parse()?,
        "lang" => form.language = argument.parse()?,
        "platform" if argument.eq_ignore_ascii_case("none") => form.platform = None,
        "platform" => form.platform = Some(argument.parse()?),
        "model" => {
            form.model = argument.parse()?;
            if !session.temperature_is_tunable(&form.model) {
                println!("temperature is fixed at 1.0 for {}", form.model);
            }
        }
        "temp" => form.temperature = argument.parse()?,
        "keywords" => form.keywords = parse_keywords(argument),
        "seconds" => form.output_length = OutputLength::SpokenDuration(argument.parse()?),
        "tokens" => form.output_length = OutputLength::TokenBudget(argument.parse()?),
        "instruction" if argument.is_empty() => form.instruction = None,
        "instruction" => form.instruction = Some(argument.to_owned()),
        "refs" => {
            form.references = argument
                .split(',')
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(|part| part.parse::<u64>().map(SequenceNumber::from))
                .collect::<Result<_, _>>()?;
        }
        "history" => print!("{}", session.render_history()),
        "export" => {
            let records: Vec<_> = session.history().iter().collect();
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        "options" => {
            let models: Vec<_> = OpenAiModel::ALL.iter().map(|m| m.id()).collect();
            println!("models:    {}", models.join(", "));
            println!("tones:     {}", join(Tone::ALL));
            println!("languages: {}", join(Language::ALL));
            println!("platforms: {}, none", join(Platform::ALL));
            for (_, label) in session.history().reference_options() {
                println!("reference: {label}");
            }
        }
        "quit" | "q" => return Ok(Flow::Quit),
        other => println!("unknown command `:{other}`"),
    }
    Ok(Flow::Continue)
}

fn join<T: std::fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut form = StudioForm::from(Args::parse());
    let backend = OpenAiAdapterBuilder::new_from_env().build()?;
    let mut session = ScriptSession::new(backend);

    println!("Describe your script idea (or `:options`, `:quit`).");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(command) = line.strip_prefix(':') {
            let (command, argument) = command.split_once(' ').unwrap_or((command, ""));
            match apply_command(&mut form, &session, command, argument.trim()) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(err) => println!("error: {err}"),
            }
            continue;
        }

        let config = match form.config(line) {
            Ok(config) => config,
            Err(err) => {
                println!("error: {err}");
                continue;
            }
        };

        match session.generate(config, &form.references).await {
            Ok(record) => {
                println!("\n### Script {}\n\n{}\n", record.sequence(), record.script());
                println!("Total tokens used: {}", record.total_tokens());
            }
            Err(err) => println!("generation failed: {err}"),
        }
    }

    Ok(())
}
