//! Layer resolution: maps file paths and import tokens to architecture layers.

use std::collections::HashMap;

use crate::config::ArchConfig;

/// Ecosystem and layer a file was classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification<'a> {
    /// Ecosystem key (e.g., `"java"`).
    pub ecosystem: &'a str,
    /// Layer name (e.g., `"Controller"`).
    pub layer: &'a str,
}

#[derive(Debug)]
struct PathMatcher {
    ecosystem: String,
    /// Lowercased, without leading dot.
    extensions: Vec<String>,
    /// Lowercased.
    fragments: Vec<String>,
    layer: String,
}

/// Resolves file paths and import tokens to layers by ordered substring match.
///
/// Path rules are flattened in ecosystem priority order, so the first rule
/// that matches a path decides its ecosystem as well as its layer.
#[derive(Debug)]
pub struct LayerResolver {
    paths: Vec<PathMatcher>,
    /// ecosystem -> (lowercased fragments, layer_name), in declared order.
    imports: HashMap<String, Vec<(Vec<String>, String)>>,
}

impl LayerResolver {
    /// Build a resolver from config.
    #[must_use]
    pub fn new(config: &ArchConfig) -> Self {
        let mut paths = Vec::new();
        let mut imports = HashMap::new();

        for eco in config.ordered() {
            for rule in &eco.paths {
                paths.push(PathMatcher {
                    ecosystem: eco.name.clone(),
                    extensions: rule
                        .extensions
                        .iter()
                        .map(|e| e.trim_start_matches('.').to_lowercase())
                        .collect(),
                    fragments: rule.fragments.iter().map(|f| f.to_lowercase()).collect(),
                    layer: rule.layer.clone(),
                });
            }
            let rules = eco
                .imports
                .iter()
                .map(|r| {
                    (
                        r.fragments.iter().map(|f| f.to_lowercase()).collect(),
                        r.layer.clone(),
                    )
                })
                .collect();
            imports.insert(eco.name.clone(), rules);
        }

        Self { paths, imports }
    }

    /// Which ecosystem and layer does this file belong to?
    ///
    /// Returns `None` for files outside the layered structure.
    #[must_use]
    pub fn classify_path(&self, file_path: &str) -> Option<Classification<'_>> {
        let normalized = file_path.replace('\\', "/").to_lowercase();
        let ext = extension_of(&normalized)?;

        self.paths
            .iter()
            .filter(|m| m.extensions.iter().any(|e| e == ext))
            .find(|m| {
                m.fragments.is_empty()
                    || m.fragments.iter().any(|f| normalized.contains(f.as_str()))
            })
            .map(|m| Classification {
                ecosystem: &m.ecosystem,
                layer: &m.layer,
            })
    }

    /// Which layer does this import token appear to belong to?
    #[must_use]
    pub fn infer_import_layer(&self, ecosystem: &str, token: &str) -> Option<&str> {
        let token = token.to_lowercase();
        self.imports
            .get(ecosystem)?
            .iter()
            .find(|(fragments, _)| fragments.iter().any(|f| token.contains(f.as_str())))
            .map(|(_, layer)| layer.as_str())
    }
}

/// Extension of the last path segment, without the dot.
fn extension_of(normalized: &str) -> Option<&str> {
    let name = normalized.rsplit('/').next()?;
    let (stem, ext) = name.rsplit_once('.')?;
    (!stem.is_empty() && !ext.is_empty()).then_some(ext)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> LayerResolver {
        LayerResolver::new(&ArchConfig::builtin().unwrap())
    }

    fn classify(path: &str) -> Option<(String, String)> {
        resolver()
            .classify_path(path)
            .map(|c| (c.ecosystem.to_owned(), c.layer.to_owned()))
    }

    fn pair(eco: &str, layer: &str) -> Option<(String, String)> {
        Some((eco.into(), layer.into()))
    }

    #[test]
    fn classifies_java_layers() {
        assert_eq!(
            classify("src/controller/OrderController.java"),
            pair("java", "Controller")
        );
        assert_eq!(
            classify("src/main/java/com/app/appservice/PlaceOrder.java"),
            pair("java", "Application")
        );
        assert_eq!(classify("src/entity/Order.java"), pair("java", "Domain"));
        assert_eq!(classify("src/infra/PaymentClient.java"), pair("java", "Gateway"));
        assert_eq!(classify("src/dao/OrderDao.java"), pair("java", "Mapper"));
    }

    #[test]
    fn first_matching_rule_wins() {
        // Both /controller/ and /domain/ are present; Controller is declared first.
        assert_eq!(
            classify("src/domain/controller/X.java"),
            pair("java", "Controller")
        );
    }

    #[test]
    fn matching_is_case_insensitive_and_separator_agnostic() {
        assert_eq!(
            classify(r"C:\Project\Src\Controller\OrderController.JAVA"),
            pair("java", "Controller")
        );
    }

    #[test]
    fn classifies_swift_layers() {
        assert_eq!(classify("App/Views/Home.swift"), pair("swift", "View"));
        assert_eq!(
            classify("App/ViewModels/HomeViewModel.swift"),
            pair("swift", "ViewModel")
        );
        assert_eq!(classify("App/api/Client.swift"), pair("swift", "Network"));
    }

    #[test]
    fn vue_files_are_always_views() {
        assert_eq!(classify("anything/Widget.vue"), pair("vue", "View"));
    }

    #[test]
    fn vue_fragments_take_priority_over_generic_typescript() {
        assert_eq!(classify("src/service/user.ts"), pair("vue", "Service"));
        assert_eq!(classify("src/api/user.ts"), pair("vue", "API"));
        assert_eq!(classify("src/utils/request.ts"), pair("vue", "Request"));
        assert_eq!(
            classify("src/composables/useUser.tsx"),
            pair("vue", "Composable")
        );
    }

    #[test]
    fn falls_through_to_generic_typescript() {
        assert_eq!(
            classify("src/controller/user.ts"),
            pair("typescript", "Controller")
        );
        assert_eq!(
            classify("src/repository/user.ts"),
            pair("typescript", "Repository")
        );
        assert_eq!(classify("src/model/user.ts"), pair("typescript", "Model"));
    }

    #[test]
    fn typescript_service_wins_when_prioritized() {
        let mut config = ArchConfig::builtin().unwrap();
        config.priority = vec!["typescript".into(), "vue".into()];
        let r = LayerResolver::new(&config);
        let c = r.classify_path("src/service/user.ts").unwrap();
        assert_eq!((c.ecosystem, c.layer), ("typescript", "Service"));
    }

    #[test]
    fn unrecognized_paths_return_none() {
        assert_eq!(classify("src/test/OrderTest.java"), None);
        assert_eq!(classify("scripts/build.ts"), None);
        assert_eq!(classify("src/controller/readme.md"), None);
        assert_eq!(classify("src/controller/Makefile"), None);
    }

    #[test]
    fn infers_java_import_layers() {
        let r = resolver();
        assert_eq!(
            r.infer_import_layer("java", "com.app.domain.Order"),
            Some("Domain")
        );
        assert_eq!(
            r.infer_import_layer("java", "com.app.gateway.PaymentGateway"),
            Some("Gateway")
        );
        assert_eq!(r.infer_import_layer("java", "java.util.List"), None);
    }

    #[test]
    fn infers_vue_import_layers() {
        let r = resolver();
        assert_eq!(
            r.infer_import_layer("vue", "@/composables/useUser"),
            Some("Composable")
        );
        assert_eq!(r.infer_import_layer("vue", "@/api/user"), Some("API"));
        assert_eq!(r.infer_import_layer("vue", "@/utils/request"), Some("Request"));
        assert_eq!(r.infer_import_layer("vue", "vue"), None);
    }

    #[test]
    fn swift_views_are_never_inferred_from_imports() {
        let r = resolver();
        assert_eq!(r.infer_import_layer("swift", "SwiftUI"), None);
        assert_eq!(r.infer_import_layer("swift", "NetworkKit"), Some("Network"));
    }

    #[test]
    fn unknown_ecosystem_infers_nothing() {
        assert_eq!(resolver().infer_import_layer("kotlin", "a.domain.B"), None);
    }
}
