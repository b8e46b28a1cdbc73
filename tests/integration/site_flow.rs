//! Integration tests for merging and site initialization through the public API

use serde_json::json;
use siteconf::merger::{
    build_errorware, build_templating_defaults, derive_prefix_from_request, resolve_prefix,
    TemplateOptions,
};
use siteconf::routing::{RouteMapper, RouteTable};
use siteconf::{Settings, SiteConfig, SiteError, SitePaths};
use std::path::PathBuf;

fn settings(pairs: &[(&str, &str)]) -> Settings {
    pairs.iter().copied().collect()
}

#[test]
fn test_resolve_prefix_properties() {
    let global = settings(&[("prefix", "/api")]);
    assert_eq!(
        resolve_prefix(&settings(&[("prefix", "/blog")]), &global).as_deref(),
        Some("/blog")
    );
    assert_eq!(resolve_prefix(&Settings::new(), &global).as_deref(), Some("/api"));
    assert_eq!(
        resolve_prefix(&settings(&[("prefix", "")]), &global).as_deref(),
        Some("/api")
    );
}

#[test]
fn test_templating_defaults_from_nothing() {
    let defaults = build_templating_defaults(&TemplateOptions::new(), &[]);
    assert!(defaults.raise_error());
    assert_eq!(
        defaults.allow_globals(),
        vec!["c", "h", "session", "request", "params", "g"]
    );
    assert!(defaults.component_root().is_empty());
}

#[test]
fn test_errorware_properties() {
    let production = build_errorware(&settings(&[("debug", "false"), ("email_to", "a@b.com")]));
    let value = serde_json::to_value(&production).unwrap();
    assert_eq!(value["debug"], json!(false));
    assert_eq!(value["error_email"], json!("a@b.com"));
    assert_eq!(value["smtp_server"], json!("localhost"));

    let debug = build_errorware(&settings(&[("debug", "true")]));
    assert_eq!(serde_json::to_value(&debug).unwrap(), json!({"debug": true}));
}

#[test]
fn test_derive_prefix_properties() {
    assert_eq!(derive_prefix_from_request(Some(&Settings::new()), ""), "");
    assert_eq!(derive_prefix_from_request(Some(&Settings::new()), "/app"), "/app");
}

/// Route mapper that records the signals it receives.
#[derive(Default)]
struct RecordingRoutes {
    prefix: Option<String>,
    invalidations: usize,
}

impl RouteMapper for RecordingRoutes {
    fn set_prefix(&mut self, prefix: &str) {
        self.prefix = Some(prefix.to_string());
    }

    fn invalidate(&mut self) {
        self.invalidations += 1;
    }
}

#[test]
fn test_init_app_signals_custom_route_mapper() {
    let mut site = SiteConfig::new(
        TemplateOptions::new(),
        RecordingRoutes::default(),
        SitePaths::new("/srv/shop"),
    );
    site.init_app(settings(&[("prefix", "/api")]), Settings::new(), "shop")
        .unwrap();
    assert_eq!(site.routes().prefix.as_deref(), Some("/api"));
    assert_eq!(site.routes().invalidations, 1);
}

#[test]
fn test_init_app_without_prefix_leaves_routes_alone() {
    let mut site = SiteConfig::new(
        TemplateOptions::new(),
        RecordingRoutes::default(),
        SitePaths::new("/srv/shop"),
    );
    site.init_app(Settings::new(), Settings::new(), "shop").unwrap();
    assert_eq!(site.routes().prefix, None);
    assert_eq!(site.routes().invalidations, 0);
}

#[test]
fn test_merged_config_is_shared_read_only() {
    let options = json!({"allow_globals": ["user"], "output_encoding": "utf-8"})
        .as_object()
        .cloned()
        .unwrap();
    let paths = SitePaths::new("/srv/shop").with_templates(["templates"]);
    let mut site = SiteConfig::new(options, RouteTable::new(), paths);

    assert!(matches!(site.merged(), Err(SiteError::NotInitialized(_))));

    let merged = site
        .init_app(
            settings(&[("debug", "no"), ("from_address", "shop@example.com")]),
            settings(&[("prefix", "/shop")]),
            "shop",
        )
        .unwrap();

    let handle = site.merged().unwrap();
    assert!(std::sync::Arc::ptr_eq(&merged, &handle));

    let handler = std::thread::spawn(move || {
        (
            handle.prefix.clone(),
            handle.errorware.reporting().map(|r| r.from_address.clone()),
        )
    });
    let (prefix, from) = handler.join().unwrap();
    assert_eq!(prefix.as_deref(), Some("/shop"));
    assert_eq!(from.as_deref(), Some("shop@example.com"));

    assert_eq!(
        merged.template_options.get("myghty.output_encoding"),
        Some(&json!("utf-8"))
    );
    assert_eq!(
        merged.templating.component_root(),
        vec![("templates".to_string(), PathBuf::from("/srv/shop/templates"))]
    );
    assert_eq!(merged.templating.allow_globals().last(), Some(&"user"));
}
