// Example listing every built-in parameter with its decoded default
//
// Run with: cargo run --example show_defaults

use s1patch_core::{Registry, TypeTag, codec};

fn main() {
    println!("S-1 Parameters with Decoded Defaults\n");
    println!("====================================\n");

    let registry = match Registry::s1() {
        Ok(registry) => registry,
        Err(err) => {
            eprintln!("built-in schema is invalid: {}", err);
            std::process::exit(1);
        }
    };

    for def in registry.iter() {
        let shown = match codec::decode(def, &def.default_raw()) {
            Ok(decoded) => decoded.value.to_string(),
            Err(err) => format!("<{}>", err),
        };
        println!("{:<24} {:<10} {:<40} {}", def.key, def.type_tag(), def.name, shown);
    }

    // The word-packed parameters are the ones worth a closer look
    println!("\nWord-packed Parameters");
    println!("======================");

    for def in registry
        .iter()
        .filter(|d| matches!(d.type_tag(), TypeTag::SplitTc | TypeTag::Chop))
    {
        println!("Parameter: {} ({})", def.key, def.name);
        println!("  Location: {}", def.location);
        println!("  Raw default: {}", def.default);
        if let Ok(decoded) = codec::decode(def, &def.default_raw()) {
            println!("  Decoded: {}", decoded.value);
            println!(
                "  JSON: {}",
                serde_json::to_string(&decoded.value).unwrap_or_default()
            );
        }
        println!();
    }
}
