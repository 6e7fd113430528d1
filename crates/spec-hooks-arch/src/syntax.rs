//! Regex-based import extractors.

use regex::Regex;
use spec_hooks_core::LineIndex;
use std::sync::LazyLock;

use crate::config::ImportSyntax;
use crate::extractor::{ImportExtractor, ImportRef};

static JAVA_IMPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bimport\s+(?:static\s+)?([A-Za-z0-9_.]+(?:\.\*)?)\s*;").expect("valid regex")
});

static SWIFT_IMPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\bimport\s+(?:(?:typealias|struct|class|enum|protocol|let|var|func)\s+)?([A-Za-z0-9_]+)",
    )
    .expect("valid regex")
});

static ES_IMPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"\bimport\s+(?:type\s+)?(?:[\w$]+\s*,\s*)?(?:\{[^}]*\}|[\w$]+|\*\s+as\s+[\w$]+)\s+from\s+['"`]([^'"`]+)['"`]"#,
    )
    .expect("valid regex")
});

/// Collects capture group 1 of every match, in source order.
fn capture_all(re: &Regex, source: &str) -> Vec<ImportRef> {
    let index = LineIndex::new(source);
    re.captures_iter(source)
        .filter_map(|caps| {
            let statement = caps.get(0)?;
            let token = caps.get(1)?;
            Some(ImportRef {
                token: token.as_str().to_owned(),
                location: index.location(statement.start()),
            })
        })
        .collect()
}

/// `import [static] com.example.Foo;` and wildcard imports.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaImports;

impl ImportExtractor for JavaImports {
    fn syntax(&self) -> ImportSyntax {
        ImportSyntax::Java
    }

    fn extract(&self, source: &str) -> Vec<ImportRef> {
        capture_all(&JAVA_IMPORT_RE, source)
    }
}

/// `import Module`, `@testable import Module`, `import class Module.Type`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwiftImports;

impl ImportExtractor for SwiftImports {
    fn syntax(&self) -> ImportSyntax {
        ImportSyntax::Swift
    }

    fn extract(&self, source: &str) -> Vec<ImportRef> {
        capture_all(&SWIFT_IMPORT_RE, source)
    }
}

/// Static ES module imports with a `from` clause.
///
/// Side-effect imports (`import './x'`), re-exports and dynamic `import()`
/// are not reported.
#[derive(Debug, Clone, Copy, Default)]
pub struct EsModuleImports;

impl ImportExtractor for EsModuleImports {
    fn syntax(&self) -> ImportSyntax {
        ImportSyntax::EsModule
    }

    fn extract(&self, source: &str) -> Vec<ImportRef> {
        capture_all(&ES_IMPORT_RE, source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(extractor: &dyn ImportExtractor, src: &str) -> Vec<String> {
        extractor.extract(src).into_iter().map(|i| i.token).collect()
    }

    #[test]
    fn java_imports_in_order() {
        let src = "package com.app.controller;\n\nimport com.app.domain.Order;\nimport com.app.gateway.PaymentGateway;\n";
        let imports = JavaImports.extract(src);
        assert_eq!(imports.len(), 2);
        assert_eq!(imports[0].token, "com.app.domain.Order");
        assert_eq!(imports[0].location.line, 3);
        assert_eq!(imports[1].token, "com.app.gateway.PaymentGateway");
        assert_eq!(imports[1].location.line, 4);
    }

    #[test]
    fn java_static_and_wildcard_imports() {
        let src = "import static com.app.domain.Rules.check;\nimport com.app.domain.*;\n";
        assert_eq!(
            tokens(&JavaImports, src),
            ["com.app.domain.Rules.check", "com.app.domain.*"]
        );
    }

    #[test]
    fn java_duplicates_are_kept() {
        let src = "import a.domain.X;\nimport a.domain.X;\n";
        assert_eq!(tokens(&JavaImports, src).len(), 2);
    }

    #[test]
    fn java_lookalikes_in_comments_are_reported() {
        // Lexical matching does not know about comments.
        let src = "// import com.app.domain.Old;\nclass A {}\n";
        assert_eq!(tokens(&JavaImports, src), ["com.app.domain.Old"]);
    }

    #[test]
    fn swift_imports() {
        let src = "import SwiftUI\n@testable import OrderService\nimport class NetworkKit.Client\n";
        assert_eq!(
            tokens(&SwiftImports, src),
            ["SwiftUI", "OrderService", "NetworkKit"]
        );
    }

    #[test]
    fn es_module_import_forms() {
        let src = r#"
import Vue from 'vue'
import { ref, computed } from "vue"
import * as api from '@/api/user'
import type { User } from '@/services/user'
import Default, { named } from '@/composables/useThing'
import {
  a,
  b,
} from './multi'
import './side-effect.css'
const lazy = () => import('./lazy')
"#;
        assert_eq!(
            tokens(&EsModuleImports, src),
            [
                "vue",
                "vue",
                "@/api/user",
                "@/services/user",
                "@/composables/useThing",
                "./multi"
            ]
        );
    }

    #[test]
    fn empty_source_has_no_imports() {
        assert!(JavaImports.extract("").is_empty());
        assert!(EsModuleImports.extract("").is_empty());
    }
}
