//! List rules command implementation.

use crate::settings::Settings;

/// Runs the list-rules command.
pub fn run(settings: &Settings) {
    println!("Configuration: {}\n", settings.source);
    println!("Architecture rulesets (classification order):\n");

    for eco in settings.architecture.ordered() {
        if eco.title.is_empty() {
            println!("{} [{}]", eco.name, eco.syntax);
        } else {
            println!("{} - {} [{}]", eco.name, eco.title, eco.syntax);
        }
        println!("  rule: {}", eco.rule);
        println!("  {:<14} May depend on", "Layer");
        println!("  {}", "-".repeat(40));
        for layer in &eco.layers {
            let allows = if layer.allows.is_empty() {
                "-".to_owned()
            } else {
                layer.allows.join(", ")
            };
            println!("  {:<14} {}", layer.name, allows);
        }
        println!("  path rules:");
        for rule in &eco.paths {
            let fragments = if rule.fragments.is_empty() {
                "*".to_owned()
            } else {
                rule.fragments.join(" | ")
            };
            println!(
                "    [{}] {} -> {}",
                rule.extensions.join(", "),
                fragments,
                rule.layer
            );
        }
        println!();
    }

    println!("Phase review documents: {}", settings.review.documents.join(", "));
}
