use better_translate::{
    BetterTranslate, DetectLanguageArgs, Language, MockMode, MockProvider, SetApiKeyArgs,
    TranslateArgs, TranslationProvider,
};
use clap::{Arg, Command};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let matches = Command::new("better-translate")
        .version("0.1.0")
        .about("Translate text through the extension's provider blocks")
        .arg(
            Arg::new("text")
                .help("Text to translate or detect")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("service")
                .long("service")
                .help("Translation service (Microsoft, DeepL, Google, Youdao)")
                .default_value("Microsoft"),
        )
        .arg(
            Arg::new("from")
                .long("from")
                .help("Source language menu name (e.g. 英语)")
                .default_value("英语"),
        )
        .arg(
            Arg::new("to")
                .long("to")
                .help("Target language menu name (e.g. 简体中文)")
                .default_value("简体中文"),
        )
        .arg(
            Arg::new("api-key")
                .long("api-key")
                .short('k')
                .help("API key for the selected service (DeepL also reads DEEPL_API_KEY)"),
        )
        .arg(
            Arg::new("detect")
                .long("detect")
                .short('d')
                .help("Detect the text's language instead of translating")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("mock")
                .long("mock")
                .short('m')
                .help("Use the mock provider instead of a network service")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("locale")
                .long("locale")
                .help("Label locale for the block descriptor (en, zh-cn)")
                .default_value("en"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Show the resolved block and request details")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let text = matches.get_one::<String>("text").unwrap();
    let service = matches.get_one::<String>("service").unwrap();
    let from = matches.get_one::<String>("from").unwrap();
    let to = matches.get_one::<String>("to").unwrap();
    let locale = matches.get_one::<String>("locale").unwrap();
    let detect = matches.get_flag("detect");
    let use_mock = matches.get_flag("mock");
    let verbose = matches.get_flag("verbose");

    let mut extension = BetterTranslate::with_locale(locale);

    if use_mock {
        let from_language = Language::from_menu_name(from)
            .ok_or_else(|| format!("unknown language menu name: {}", from))?;
        let to_language = Language::from_menu_name(to)
            .ok_or_else(|| format!("unknown language menu name: {}", to))?;

        let mock = MockProvider::new(MockMode::Suffix);
        let result = mock.translate(text, from_language, to_language).await?;
        println!("{}", result);
        return Ok(());
    }

    if detect {
        if verbose {
            println!(
                "🔎 {}",
                extension.format_message("BetterTranslate.detectLanguage")
            );
            println!("📝 \"{}\"", text);
        }

        let result = extension
            .detect_language(&DetectLanguageArgs {
                text: text.to_string(),
            })
            .await;
        println!("{}", result);
        return Ok(());
    }

    let api_key = matches
        .get_one::<String>("api-key")
        .cloned()
        .or_else(|| env::var("DEEPL_API_KEY").ok());
    if let Some(key) = api_key {
        let stored = extension.set_api_key(&SetApiKeyArgs {
            service: service.to_string(),
            key,
        });
        if !stored {
            eprintln!("⚠️  {} is not a known service; key not stored", service);
        }
    }

    if verbose {
        println!("🧩 {}", extension.format_message("BetterTranslate.translate"));
        println!("📝 \"{}\"", text);
        println!("🌍 {} → {} via {}", from, to, service);
        println!();
    }

    let result = extension
        .translate(&TranslateArgs {
            service: service.to_string(),
            text: text.to_string(),
            from: from.to_string(),
            to: to.to_string(),
        })
        .await;

    println!("{}", result);
    Ok(())
}
