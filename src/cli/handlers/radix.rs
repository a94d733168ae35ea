use crate::cli::args::RadixAction;
use base_codec::RadixEncoder;

pub fn handle(action: RadixAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        RadixAction::Encode { radix, value } => {
            let encoder = RadixEncoder::new(radix)?;
            let value: i64 = value
                .trim()
                .parse()
                .map_err(|e| format!("Invalid integer '{}': {}", value, e))?;
            println!("{}", encoder.encode(value));
        }
        RadixAction::Decode { radix, value } => {
            let encoder = RadixEncoder::new(radix)?;
            println!("{}", encoder.decode(value.trim())?);
        }
    }
    Ok(())
}
