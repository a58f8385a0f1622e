use std::path::PathBuf;
use std::time::Instant;

use tts_text::{
    text::{load_config, load_vocab, TextTokenizer, TokenizerConfig},
    TextFrontend,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Usage: tokenize [config.json] [vocab.json]
    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => load_config(&PathBuf::from(path))?,
        None => TokenizerConfig::default(),
    };
    let vocab = args
        .next()
        .map(|path| load_vocab(&PathBuf::from(path)))
        .transpose()?;

    let tokenizer = TextTokenizer::from_config(&config);
    println!(
        "Language: {:?}, Tacotron mode: {}",
        config.language, config.tacotron_mode
    );

    let text = "Hello, world. There are 42 apples; 7 are green - the rest are red. \
                This costs 9999999999 dollars!";

    let start = Instant::now();
    let stream = tokenizer.to_tokens(text)?;
    println!("Tokenized into {} tokens in {:.2?}", stream.len(), start.elapsed());
    println!("{:?}", stream.tokens);

    if let Some(vocab) = vocab {
        println!("Ids: {:?}", stream.to_ids(&vocab));
    }

    Ok(())
}
