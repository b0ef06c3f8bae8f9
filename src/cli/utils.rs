use serde_json::{json, Value};

use crate::cli::OutputFormat;
use crate::database::models::Cafe;

/// Output a success message in the appropriate format
pub fn output_success(output_format: &OutputFormat, message: &str) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&json!({ "Success": message }))?);
        }
        OutputFormat::Text => {
            println!("✓ {}", message);
        }
    }
    Ok(())
}

/// Output a collection of cafes as `{"cafes": [...]}` or one line per cafe
pub fn output_cafes(output_format: &OutputFormat, cafes: &[Cafe], empty_message: &str) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&json!({ "cafes": cafes }))?);
        }
        OutputFormat::Text => {
            if cafes.is_empty() {
                println!("{}", empty_message);
            }
            for cafe in cafes {
                println!("{}", cafe_line(cafe));
            }
        }
    }
    Ok(())
}

/// Output a single cafe as `{"cafe": {...}}` or a detail block
pub fn output_cafe(output_format: &OutputFormat, cafe: &Cafe) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&json!({ "cafe": cafe }))?);
        }
        OutputFormat::Text => {
            let value: Value = serde_json::to_value(cafe)?;
            if let Value::Object(fields) = value {
                for (key, val) in fields {
                    let shown = match val {
                        Value::String(s) => s,
                        Value::Null => "-".to_string(),
                        other => other.to_string(),
                    };
                    println!("{:<15} {}", key, shown);
                }
            }
        }
    }
    Ok(())
}

fn cafe_line(cafe: &Cafe) -> String {
    let mut amenities = Vec::new();
    if cafe.has_wifi {
        amenities.push("wifi");
    }
    if cafe.has_sockets {
        amenities.push("sockets");
    }
    if cafe.has_toilet {
        amenities.push("toilet");
    }
    if cafe.can_take_calls {
        amenities.push("calls");
    }

    format!(
        "{:>4}  {}  ({})  seats {}  price {}  [{}]",
        cafe.id,
        cafe.name,
        cafe.location,
        cafe.seats,
        cafe.coffee_price.as_deref().unwrap_or("-"),
        amenities.join(", ")
    )
}
