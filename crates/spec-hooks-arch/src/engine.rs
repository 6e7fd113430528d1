//! Architecture rule engine.
//!
//! Classifies the edited file, extracts its imports and reports every
//! import whose inferred layer is outside the file layer's allow-list.

use serde::Serialize;
use spec_hooks_core::Location;

use crate::config::ArchConfig;
use crate::extractor::extractor_for;
use crate::layer::LayerResolver;

/// An import the edited file's layer may not depend on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Layer of the edited file.
    pub layer: String,
    /// The offending import token, verbatim.
    pub dependency: String,
    /// Layer the import was inferred to belong to.
    pub dependency_layer: String,
    /// Textual architecture rule being violated.
    pub rule: String,
    /// Where the import statement starts.
    pub location: Location,
}

/// Result of checking one classified file.
#[derive(Debug, Clone, Serialize)]
pub struct LayerReport {
    /// Path as given by the host.
    pub file_path: String,
    /// Ecosystem key.
    pub ecosystem: String,
    /// Ruleset title.
    pub title: String,
    /// Layer of the edited file.
    pub layer: String,
    /// Layers the file's layer may depend on.
    pub allowed: Vec<String>,
    /// Textual architecture rule.
    pub rule: String,
    /// Number of import references examined.
    pub imports_checked: usize,
    /// Violations in order of appearance.
    pub violations: Vec<Violation>,
}

impl LayerReport {
    /// Returns true if no violation was found.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Evaluates layer dependency rules against a single edited file.
pub struct ArchRuleEngine {
    config: ArchConfig,
    resolver: LayerResolver,
}

impl ArchRuleEngine {
    /// Create a new engine from config.
    #[must_use]
    pub fn new(config: ArchConfig) -> Self {
        let resolver = LayerResolver::new(&config);
        Self { config, resolver }
    }

    /// Check one file.
    ///
    /// Returns `None` when the path does not classify into any layer; such
    /// files are out of scope and never produce violations.
    #[must_use]
    pub fn check(&self, file_path: &str, content: &str) -> Option<LayerReport> {
        let Some(class) = self.resolver.classify_path(file_path) else {
            tracing::debug!(file = file_path, "no layer matched, skipping");
            return None;
        };
        let eco = self.config.ecosystem(class.ecosystem)?;

        let imports = extractor_for(eco.syntax).extract(content);
        let mut violations = Vec::new();

        for imp in &imports {
            let Some(dep_layer) = self.resolver.infer_import_layer(&eco.name, &imp.token) else {
                continue;
            };

            if !eco.allows(class.layer, dep_layer) {
                violations.push(Violation {
                    layer: class.layer.to_owned(),
                    dependency: imp.token.clone(),
                    dependency_layer: dep_layer.to_owned(),
                    rule: eco.rule.clone(),
                    location: imp.location,
                });
            }
        }

        tracing::debug!(
            file = file_path,
            ecosystem = %eco.name,
            layer = class.layer,
            imports = imports.len(),
            violations = violations.len(),
            "layer check finished"
        );

        Some(LayerReport {
            file_path: file_path.to_owned(),
            ecosystem: eco.name.clone(),
            title: eco.title.clone(),
            layer: class.layer.to_owned(),
            allowed: eco
                .layer(class.layer)
                .map(|l| l.allows.clone())
                .unwrap_or_default(),
            rule: eco.rule.clone(),
            imports_checked: imports.len(),
            violations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> ArchRuleEngine {
        ArchRuleEngine::new(ArchConfig::builtin().unwrap())
    }

    const ORDER_CONTROLLER: &str = "package com.app.controller;\n\
        \n\
        import com.app.domain.Order;\n\
        import com.app.gateway.PaymentGateway;\n\
        import com.app.application.PlaceOrder;\n\
        import java.util.List;\n";

    #[test]
    fn controller_importing_domain_is_reported() {
        let report = engine()
            .check("src/controller/OrderController.java", ORDER_CONTROLLER)
            .expect("classified");
        assert_eq!(report.layer, "Controller");
        assert_eq!(report.imports_checked, 4);

        let domain: Vec<&Violation> = report
            .violations
            .iter()
            .filter(|v| v.dependency_layer == "Domain")
            .collect();
        assert_eq!(domain.len(), 1);
        assert_eq!(domain[0].dependency, "com.app.domain.Order");
        assert_eq!(domain[0].location.line, 3);
        assert_eq!(
            domain[0].rule,
            "Controller → Application → Domain ← Gateway, Mapper(Gateway)"
        );
    }

    #[test]
    fn violations_keep_discovery_order() {
        let report = engine()
            .check("src/controller/OrderController.java", ORDER_CONTROLLER)
            .unwrap();
        let deps: Vec<&str> = report
            .violations
            .iter()
            .map(|v| v.dependency.as_str())
            .collect();
        // Application is allowed, java.util is unclassified.
        assert_eq!(
            deps,
            ["com.app.domain.Order", "com.app.gateway.PaymentGateway"]
        );
    }

    #[test]
    fn unclassified_path_is_skipped() {
        assert!(engine()
            .check("src/test/OrderTest.java", ORDER_CONTROLLER)
            .is_none());
    }

    #[test]
    fn same_layer_imports_are_allowed() {
        let src = "import com.app.domain.Customer;\nimport com.app.entity.Money;\n";
        let report = engine().check("src/domain/Order.java", src).unwrap();
        assert!(report.is_clean());
        assert_eq!(report.imports_checked, 2);
    }

    #[test]
    fn allowed_dependency_is_clean() {
        let src = "import com.app.domain.Order;\n";
        let report = engine().check("src/gateway/OrderGateway.java", src).unwrap();
        assert!(report.is_clean());
        assert_eq!(report.allowed, ["Domain"]);
    }

    #[test]
    fn vue_view_skipping_composables_is_reported() {
        let src = r#"<script setup lang="ts">
import { useUser } from '@/composables/useUser'
import { fetchUser } from '@/api/user'
</script>
"#;
        let report = engine().check("src/views/UserPage.vue", src).unwrap();
        assert_eq!(report.ecosystem, "vue");
        assert_eq!(report.violations.len(), 1);
        assert_eq!(report.violations[0].dependency, "@/api/user");
        assert_eq!(report.violations[0].dependency_layer, "API");
    }

    #[test]
    fn swift_view_importing_network_is_reported() {
        let src = "import SwiftUI\nimport NetworkKit\nimport HomeViewModel\n";
        let report = engine().check("App/Views/Home.swift", src).unwrap();
        assert_eq!(report.violations.len(), 1);
        assert_eq!(report.violations[0].dependency, "NetworkKit");
    }

    #[test]
    fn generic_typescript_controller_reaching_repository() {
        let src = "import { UserService } from '../service/userService'\n\
                   import { UserRepository } from '../repository/userRepository'\n";
        let report = engine().check("src/controller/user.ts", src).unwrap();
        assert_eq!(report.ecosystem, "typescript");
        assert_eq!(report.violations.len(), 1);
        assert_eq!(report.violations[0].dependency_layer, "Repository");
    }

    #[test]
    fn check_is_idempotent() {
        let e = engine();
        let a = e.check("src/controller/OrderController.java", ORDER_CONTROLLER);
        let b = e.check("src/controller/OrderController.java", ORDER_CONTROLLER);
        assert_eq!(a.map(|r| r.violations), b.map(|r| r.violations));
    }
}
