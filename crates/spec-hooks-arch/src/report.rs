//! Human-readable advisory for layer violations.

use crate::engine::LayerReport;

impl LayerReport {
    /// Formats the advisory written to the side channel.
    ///
    /// Returns `None` when the report has no violations.
    #[must_use]
    pub fn advisory(&self) -> Option<String> {
        if self.is_clean() {
            return None;
        }

        let layer = if self.title.is_empty() {
            self.layer.clone()
        } else {
            format!("{} ({})", self.layer, self.title)
        };
        let allowed = if self.allowed.is_empty() {
            "no other layer".to_owned()
        } else {
            self.allowed.join(", ")
        };

        let mut lines = vec![
            "⚠️ Architecture layer warning: disallowed dependencies detected".to_owned(),
            String::new(),
            format!("File: {}", self.file_path),
            format!("Layer: {layer}"),
            String::new(),
            "Disallowed dependencies:".to_owned(),
        ];
        lines.extend(self.violations.iter().map(|v| {
            format!(
                "- {} ({}) at line {}",
                v.dependency, v.dependency_layer, v.location.line
            )
        }));
        lines.push(String::new());
        lines.push(format!("Architecture rule: {}", self.rule));
        lines.push(format!(
            "Suggestion: remove the disallowed dependencies, move the file to the layer it belongs to, \
             or route the call through a permitted layer ({} may depend on {allowed})",
            self.layer
        ));

        Some(lines.join("\n"))
    }
}
