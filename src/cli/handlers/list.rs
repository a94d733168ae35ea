use crate::cli::args::ListArgs;
use crate::cli::global::GlobalArgs;
use base_codec::{Codec, CodecRegistry};

const PREVIEW_LEN: usize = 20;

pub fn handle(
    args: ListArgs,
    global: &GlobalArgs,
    registry: &CodecRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut codecs: Vec<(&str, Codec)> = Vec::new();
    for name in registry.names() {
        match registry.build(name) {
            Ok(codec) => codecs.push((name, codec)),
            Err(e) => {
                if !global.quiet {
                    eprintln!("Warning: skipping codec '{}': {}", name, e);
                }
            }
        }
    }

    if args.json {
        let entries: Vec<_> = codecs
            .iter()
            .map(|(name, codec)| {
                let alphabet = codec.alphabet();
                serde_json::json!({
                    "name": name,
                    "kind": codec.kind_name(),
                    "radix": alphabet.radix(),
                    "padding": alphabet.padding(),
                    "chars": alphabet.symbols().iter().collect::<String>(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!("Available formats:\n");
    for (name, codec) in &codecs {
        let alphabet = codec.alphabet();
        let preview: String = alphabet.symbols().iter().take(PREVIEW_LEN).collect();
        let suffix = if alphabet.radix() > PREVIEW_LEN { "..." } else { "" };
        println!(
            "  {:<18} base-{:<3} {:>11}  {}{}",
            name,
            alphabet.radix(),
            codec.kind_name(),
            preview,
            suffix
        );
    }

    Ok(())
}
