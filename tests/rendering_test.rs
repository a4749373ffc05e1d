mod common;

use common::{CURRENT_URL, RECENT_URL, authorized_stub, state, track_json};
use nowplaying::{
    api::{WidgetQuery, render_for_query, widget_context},
    management::encode_bytes,
    render::{
        EQUALIZER_BAR_COUNT, Template, extract_gradient_colors, prepare_rendering_data,
        render_link_page, render_widget,
    },
    themes::build_theme,
    types::{ThemeStyle, ThemeType, Track, WidgetConfig},
};
use serde_json::json;

fn track(name: &str, artist: &str) -> Track {
    Track {
        name: name.to_string(),
        artist: artist.to_string(),
        album_image: encode_bytes(b"art"),
        uri: "spotify:track:abc".to_string(),
        id: "abc".to_string(),
    }
}

fn playing_stub() -> std::sync::Arc<common::StubTransport> {
    let stub = authorized_stub();
    stub.respond_json(
        CURRENT_URL,
        &json!({ "item": track_json("Song A", "Artist A", "id-a", &["http://img/first", "http://img/second"]) }),
    );
    stub.respond("http://img/first", 200, b"first".to_vec());
    stub.respond("http://img/second", 200, b"second".to_vec());
    stub
}

#[test]
fn test_gradient_defaults_for_empty_payload() {
    let dark = extract_gradient_colors("", true);
    assert_eq!(dark.primary_color, "#161B22");
    assert_eq!(dark.secondary_color, "#0D1117");
    assert_eq!(dark.text_color, "#FFFFFF");
    assert_eq!(dark.gradient, "linear-gradient(135deg, #161B22, #0D1117)");

    let light = extract_gradient_colors("", false);
    assert_eq!(light.primary_color, "#F6F8FA");
    assert_eq!(light.secondary_color, "#E1E4E8");
    assert_eq!(light.text_color, "#000000");
}

#[test]
fn test_gradient_is_deterministic_and_style_dependent() {
    let payload = encode_bytes(b"some album art");

    let a = extract_gradient_colors(&payload, true);
    let b = extract_gradient_colors(&payload, true);
    assert_eq!(a, b);
    assert!(a.primary_color.starts_with("hsl("));
    assert!(a.primary_color.ends_with(", 70%, 20%)"));
    assert!(a.secondary_color.ends_with(", 70%, 30%)"));

    let light = extract_gradient_colors(&payload, false);
    assert!(light.primary_color.ends_with(", 40%, 80%)"));
    assert!(light.secondary_color.ends_with(", 40%, 70%)"));
    assert_eq!(light.text_color, "#000000");
}

#[test]
fn test_prepare_rendering_data() {
    let config = WidgetConfig::new(ThemeType::Default, ThemeStyle::Dark, None, true, "FF00AA");
    let context = prepare_rendering_data(&track("T", "A"), &config, "logo-payload");

    assert_eq!(context.track_name, "T");
    assert_eq!(context.track_artist, "A");
    assert_eq!(context.track_id, "abc");
    assert_eq!(context.logo, "logo-payload");
    assert!(context.spin);
    assert!(context.show_equalizer);
    assert_eq!(context.bar_count, EQUALIZER_BAR_COUNT);
    assert_eq!(context.eq_color, "FF00AA");
    // only record-style themes derive colours from the art
    assert!(context.dynamic_colors.is_none());
    assert!(context.css.is_none());
}

#[test]
fn test_equalizer_hidden_for_none_in_any_case() {
    for eq in ["none", "NONE", "None"] {
        let config = WidgetConfig::new(ThemeType::Default, ThemeStyle::Light, None, false, eq);
        let context = prepare_rendering_data(&track("T", "A"), &config, "");
        assert!(!context.show_equalizer, "eq_color {}", eq);
    }
}

#[test]
fn test_template_resolution() {
    assert_eq!(Template::from_name("vinyl.html"), Some(Template::Vinyl));
    assert_eq!(Template::from_name("frutiger_aero"), Some(Template::FrutigerAero));
    assert_eq!(Template::from_name("unknown"), None);

    let config = WidgetConfig::new(ThemeType::Ipod, ThemeStyle::Light, None, false, "1ED760");
    let mut context = prepare_rendering_data(&track("T", "A"), &config, "");
    assert_eq!(Template::resolve(&context), Template::Ipod);

    context.template_name = Some("retro".to_string());
    assert_eq!(Template::resolve(&context), Template::Retro);

    context.template_name = Some("missing".to_string());
    assert_eq!(Template::resolve(&context), Template::Ipod);
}

#[test]
fn test_render_widget_escapes_text() {
    let config = WidgetConfig::new(ThemeType::Default, ThemeStyle::Light, None, false, "1ED760");
    let theme = build_theme(config.theme, config.style, None);
    let context = theme.transform_data(prepare_rendering_data(
        &track("<script>&\"", "Tom & Jerry"),
        &config,
        "",
    ));

    let svg = render_widget(&context);

    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
    assert!(svg.contains("&lt;script&gt;&amp;&quot;"));
    assert!(svg.contains("Tom &amp; Jerry"));
    assert!(!svg.contains("<script>"));
    assert!(svg.contains("--background-color: #F6F8FA;"));
    assert_eq!(svg.matches("class=\"bar\"").count(), EQUALIZER_BAR_COUNT);
    assert!(svg.contains("#1ED760"));
}

#[test]
fn test_rainbow_equalizer_uses_spectrum() {
    let config = WidgetConfig::new(ThemeType::Default, ThemeStyle::Dark, None, false, "rainbow");
    let theme = build_theme(config.theme, config.style, None);
    let svg = render_widget(&theme.transform_data(prepare_rendering_data(
        &track("T", "A"),
        &config,
        "",
    )));

    assert!(svg.contains("background: #FF0000;"));
    assert!(svg.contains("background: #FF8000;"));
    assert!(!svg.contains("#rainbow"));
}

#[test]
fn test_render_link_page() {
    let page = render_link_page("4uLU6hMCjMI75M1A2tKUQC");
    assert!(page.contains("https://open.spotify.com/embed/track/4uLU6hMCjMI75M1A2tKUQC"));
    assert!(page.contains("<iframe"));
}

#[test]
fn test_query_precedence_and_spin() {
    let query = WidgetQuery {
        theme: Some("ipod".to_string()),
        theme_type: Some("retro".to_string()),
        style: Some("light".to_string()),
        theme_style: Some("dark".to_string()),
        spin: Some("true".to_string()),
        ..WidgetQuery::default()
    };
    let config = query.into_config("1ED760");

    assert_eq!(config.theme, ThemeType::Retro);
    assert_eq!(config.style, ThemeStyle::Dark);
    assert!(config.spin);
    assert_eq!(config.eq_color, "1ED760");

    let config = WidgetQuery {
        spin: Some("nope".to_string()),
        eq_color: Some("  ".to_string()),
        ..WidgetQuery::default()
    }
    .into_config("ABCDEF");
    assert_eq!(config.theme, ThemeType::Default);
    assert!(!config.spin);
    assert_eq!(config.eq_color, "ABCDEF");
}

#[tokio::test]
async fn test_widget_pipeline_uses_second_image() {
    let stub = playing_stub();
    let state = state(&stub);
    let config = WidgetConfig::new(ThemeType::Default, ThemeStyle::Light, None, false, "1ED760");

    let context = widget_context(&state, &config).await;

    assert_eq!(context.track_name, "Song A");
    assert_eq!(context.track_artist, "Artist A");
    assert_eq!(context.base_64_track_image, encode_bytes(b"second"));
    assert!(context.show_equalizer);
    assert_eq!(context.theme_name.as_deref(), Some("default"));
    assert_eq!(stub.calls("http://img/first"), 0);
}

#[tokio::test]
async fn test_widget_pipeline_hides_equalizer() {
    let stub = playing_stub();
    let state = state(&stub);
    let config = WidgetConfig::new(ThemeType::Default, ThemeStyle::Light, None, false, "none");

    let context = widget_context(&state, &config).await;

    assert!(!context.show_equalizer);
    assert!(!render_widget(&context).contains("class=\"eq\""));
}

#[tokio::test]
async fn test_widget_pipeline_vinyl_dark() {
    let stub = playing_stub();
    let state = state(&stub);
    let config = WidgetConfig::new(ThemeType::Vinyl, ThemeStyle::Dark, None, false, "1ED760");

    let context = widget_context(&state, &config).await;

    let colors = context.dynamic_colors.clone().expect("dynamic colours");
    assert!(colors.primary_color.contains("70%, 20%"));
    assert_eq!(colors.text_color, "#FFFFFF");
    assert!(context.spin);
    assert!(!context.show_equalizer);
    assert!(context.vinyl_svg.is_some());
    assert!(context.vinyl_needle_svg.is_some());

    let svg = render_widget(&context);
    assert!(svg.contains("class=\"disc spin\""));
    assert!(svg.contains(&colors.gradient));
}

#[tokio::test]
async fn test_render_for_query_with_nothing_playing() {
    let stub = authorized_stub();
    stub.respond(CURRENT_URL, 204, "");
    stub.respond_json(RECENT_URL, &json!({ "items": [] }));
    let state = state(&stub);

    let svg = render_for_query(
        &state,
        WidgetQuery {
            theme: Some("windows98".to_string()),
            style: Some("dark".to_string()),
            ..WidgetQuery::default()
        },
    )
    .await;

    assert!(svg.contains("Not Playing"));
    assert!(svg.contains("theme-windows98 light"));
    assert!(svg.contains("CD Player"));
}

#[tokio::test]
async fn test_themes_are_cached_across_requests() {
    let stub = playing_stub();
    let state = state(&stub);
    let config = WidgetConfig::new(ThemeType::Ipod, ThemeStyle::Dark, Some("abc"), false, "1ED760");

    widget_context(&state, &config).await;
    widget_context(&state, &config).await;

    assert_eq!(state.themes.constructed(), 1);
    assert_eq!(stub.calls("http://img/second"), 1);
}
