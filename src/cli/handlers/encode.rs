use crate::cli::args::EncodeArgs;
use crate::cli::handlers::{read_input, write_output};
use base_codec::{CodecRegistry, TextCodec};

pub fn handle(args: EncodeArgs, registry: &CodecRegistry) -> Result<(), Box<dyn std::error::Error>> {
    let codec = registry.build(&args.format)?;

    let input = read_input(args.file.as_ref())?;
    let data = if args.hex {
        let text = String::from_utf8(input).map_err(|_| "Hex input must be valid UTF-8")?;
        hex::decode(text.trim()).map_err(|e| format!("Invalid hex input: {}", e))?
    } else {
        input
    };

    let mut encoded = codec.encode(&data);
    encoded.push('\n');
    write_output(args.output.as_ref(), encoded.as_bytes())
}
