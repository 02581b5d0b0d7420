//! End-to-end behavior of style functions, breakpoints, and composition.

use std::sync::Arc;
use std::thread;

use horizon_lattice_system::prelude::*;
use serde_json::{Value, json};

fn setup() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

fn query_breakpoints() -> Breakpoints {
    Breakpoints::from_queries([
        ("xs", "@media xs-query"),
        ("sm", "@media sm-query"),
        ("md", "@media md-query"),
        ("lg", "@media lg-query"),
    ])
    .expect("valid breakpoints")
}

fn keys(css: &CssFragment) -> Vec<String> {
    css.keys().cloned().collect()
}

#[test]
fn composed_resolution_is_idempotent() {
    setup();
    let theme = Theme::new()
        .with_spacing(8.0)
        .with_palette(json!({ "primary": "#000" }));
    let props = Props::new()
        .with_theme(theme)
        .set("m", json!([1, null, 3]))
        .set("color", json!({ "sm": "primary", "lg": "#fff" }))
        .set("width", 0.25);

    let resolver = system::all();
    let first = resolver.apply(&props);
    let second = resolver.apply(&props);
    assert_eq!(first, second);
    assert_eq!(keys(&first), keys(&second));
}

#[test]
fn scalar_width_has_no_media_query() {
    let width = breakpoints(style(StyleOptions::new("width").css_property("width")));
    let props = Props::new()
        .with_theme(Theme::new().with_breakpoints(query_breakpoints()))
        .set("width", 300);
    assert_eq!(Value::Object(width.apply(&props)), json!({ "width": 300 }));
}

#[test]
fn responsive_array_is_ordered_and_skips_holes() {
    setup();
    let width = breakpoints(style(StyleOptions::new("width").css_property("width")));
    let props = Props::new()
        .with_theme(Theme::new().with_breakpoints(query_breakpoints()))
        .set("width", json!([100, 200, null, 400]));

    let css = width.apply(&props);
    assert_eq!(
        Value::Object(css.clone()),
        json!({
            "width": 100,
            "@media sm-query": { "width": 200 },
            "@media lg-query": { "width": 400 }
        })
    );
    assert_eq!(keys(&css), ["width", "@media sm-query", "@media lg-query"]);
}

#[test]
fn composing_independent_properties_keeps_both() {
    let colors = compose([
        style(StyleOptions::new("color").css_property("color")),
        style(StyleOptions::new("color").css_property("backgroundColor")),
    ]);
    let css = colors.apply(&Props::new().set("color", "red"));
    assert_eq!(
        Value::Object(css),
        json!({ "color": "red", "backgroundColor": "red" })
    );
}

#[test]
fn palette_substitution() {
    let color = style(
        StyleOptions::new("color")
            .css_property("color")
            .theme_key("palette"),
    );
    let theme = Arc::new(Theme::new().with_palette(json!({ "primary": "#000" })));

    let css = color.apply(&Props::new().with_theme(Arc::clone(&theme)).set("color", "primary"));
    assert_eq!(Value::Object(css), json!({ "color": "#000" }));

    let css = color.apply(&Props::new().with_theme(theme).set("color", "#fff"));
    assert_eq!(Value::Object(css), json!({ "color": "#fff" }));
}

#[test]
fn unary_spacing_shapes() {
    let multiplier = create_unary_spacing(&Theme::new().with_spacing(8.0));
    assert_eq!(multiplier.resolve(&json!(2)), Some(json!(16)));
    assert_eq!(multiplier.resolve(&json!("2rem")), Some(json!("2rem")));

    let scale = create_unary_spacing(
        &Theme::new().with_spacing(vec![json!("0px"), json!("4px"), json!("8px")]),
    );
    assert_eq!(scale.resolve(&json!(1)), Some(json!("4px")));

    setup();
    let unset = create_unary_spacing(&Theme::new());
    assert_eq!(unset.resolve(&json!(1)), None);
}

#[test]
fn registry_functions_emit_media_blocks_in_ascending_order() {
    let css = system::width().apply(&Props::new().set("width", json!({ "lg": 400, "sm": 200 })));
    assert_eq!(keys(&css), ["@media (min-width:600px)", "@media (min-width:1280px)"]);

    let props = Props::new()
        .with_theme(Theme::new().with_spacing(8.0))
        .set("p", json!({ "lg": 1 }))
        .set("px", json!([0, 2]));
    let css = system::padding().apply(&props);
    assert_eq!(
        keys(&css),
        [
            "paddingLeft",
            "paddingRight",
            "@media (min-width:600px)",
            "@media (min-width:1280px)"
        ]
    );
    assert_eq!(css["@media (min-width:1280px)"], json!({ "padding": 8 }));
}

#[test]
fn unknown_breakpoint_names_are_ignored() {
    setup();
    let css = system::sizing().apply(&Props::new().set("width", json!({ "tablet": 1, "sm": 0.5 })));
    assert_eq!(
        Value::Object(css),
        json!({ "@media (min-width:600px)": { "width": "50%" } })
    );
}

#[test]
fn theme_is_shared_across_threads() {
    let theme = Arc::new(
        Theme::new()
            .with_spacing(4.0)
            .with_palette(json!({ "primary": "#123456" })),
    );
    let resolver = system::all();

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let theme = Arc::clone(&theme);
            let resolver = resolver.clone();
            thread::spawn(move || {
                let props = Props::new().with_theme(theme).set("p", i).set("color", "primary");
                resolver.apply(&props)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let css = handle.join().expect("resolver thread panicked");
        assert_eq!(css["padding"], json!(i * 4));
        assert_eq!(css["color"], json!("#123456"));
    }
}

#[test]
fn sx_and_forwarded_props() {
    let resolver = style_function_sx(system::all());
    let props = Props::new()
        .with_theme(Theme::new().with_spacing(8.0))
        .set("id", "card")
        .set("mt", 1)
        .set("sx", json!({ "mt": 2, "transition": "all 0.2s" }));

    let css = resolver.apply(&props);
    assert_eq!(
        Value::Object(css),
        json!({ "marginTop": 16, "transition": "all 0.2s" })
    );

    let forwarded = resolver.forwarded_props(&props);
    assert_eq!(Value::Object(forwarded), json!({ "id": "card" }));
}

#[test]
fn custom_style_function_joins_composition() {
    let elevation = StyleFunction::new(["elevation"], |props: &Props| {
        let mut css = CssFragment::new();
        if let Some(level) = props.value("elevation").and_then(Value::as_u64) {
            css.insert("zIndex".into(), json!(1000 + level));
        }
        css
    });

    let resolver = compose([system::positions(), breakpoints(elevation)]);
    let props = Props::new()
        .set("zIndex", 1)
        .set("elevation", json!([null, 2]));
    let css = resolver.apply(&props);
    assert_eq!(
        Value::Object(css),
        json!({ "zIndex": 1, "@media (min-width:600px)": { "zIndex": 1002 } })
    );
}
