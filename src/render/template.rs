use crate::{
    types::{RenderContext, ThemeType},
    utils::{data_uri, escape_xml},
};

/// Colours cycled through when `eq_color=rainbow`.
pub const RAINBOW_SPECTRUM: [&str; 21] = [
    "FF0000", "FF4000", "FF8000", "FFBF00", "FFFF00", "BFFF00", "80FF00", "40FF00", "00FF00",
    "00FF40", "00FF80", "00FFBF", "00FFFF", "00BFFF", "0080FF", "0040FF", "0000FF", "4000FF",
    "8000FF", "BF00FF", "FF00FF",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    Widget,
    Vinyl,
    Ipod,
    Retro,
    Windows98,
    FrutigerAero,
    Macintosh,
    WindowsXp,
}

impl Template {
    /// Accepts names with or without an `.html` suffix.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().trim_end_matches(".html") {
            "widget" => Some(Template::Widget),
            "vinyl" => Some(Template::Vinyl),
            "ipod" => Some(Template::Ipod),
            "retro" => Some(Template::Retro),
            "windows98" => Some(Template::Windows98),
            "frutiger_aero" => Some(Template::FrutigerAero),
            "macintosh" => Some(Template::Macintosh),
            "windowsxp" => Some(Template::WindowsXp),
            _ => None,
        }
    }

    pub fn for_theme(theme: ThemeType) -> Self {
        match theme {
            ThemeType::Default => Template::Widget,
            ThemeType::Vinyl => Template::Vinyl,
            ThemeType::Ipod => Template::Ipod,
            ThemeType::Retro => Template::Retro,
            ThemeType::Windows98 => Template::Windows98,
            ThemeType::FrutigerAero => Template::FrutigerAero,
            ThemeType::Macintosh => Template::Macintosh,
            ThemeType::WindowsXp => Template::WindowsXp,
        }
    }

    /// The theme's override wins; otherwise the theme's own template.
    pub fn resolve(context: &RenderContext) -> Self {
        context
            .template_name
            .as_deref()
            .and_then(Template::from_name)
            .unwrap_or_else(|| Template::for_theme(context.theme))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Template::Widget => "widget",
            Template::Vinyl => "vinyl",
            Template::Ipod => "ipod",
            Template::Retro => "retro",
            Template::Windows98 => "windows98",
            Template::FrutigerAero => "frutiger_aero",
            Template::Macintosh => "macintosh",
            Template::WindowsXp => "windowsxp",
        }
    }

    pub fn size(&self) -> (u32, u32) {
        match self {
            Template::Widget => (480, 140),
            Template::Vinyl => (480, 170),
            Template::Ipod => (240, 390),
            Template::Retro => (480, 150),
            Template::Windows98 => (400, 172),
            Template::FrutigerAero => (420, 172),
            Template::Macintosh => (320, 230),
            Template::WindowsXp => (440, 160),
        }
    }

    fn stylesheet(&self) -> &'static str {
        match self {
            Template::Widget => WIDGET_CSS,
            Template::Vinyl => VINYL_CSS,
            Template::Ipod => IPOD_CSS,
            Template::Retro => RETRO_CSS,
            Template::Windows98 => WINDOWS98_CSS,
            Template::FrutigerAero => AERO_CSS,
            Template::Macintosh => MACINTOSH_CSS,
            Template::WindowsXp => WINDOWSXP_CSS,
        }
    }
}

const BASE_CSS: &str = "
.widget { box-sizing: border-box; width: 100%; height: 100%; overflow: hidden; position: relative;
  font-family: var(--text-font); background: var(--background-color); padding: var(--container-padding); }
.title { color: var(--title-color); font-weight: 600; font-size: 18px; white-space: nowrap; overflow: hidden; text-overflow: ellipsis; }
.artist { color: var(--subtitle-color); font-size: 14px; white-space: nowrap; overflow: hidden; text-overflow: ellipsis; }
.album { border-radius: var(--album-border-radius); object-fit: cover; }
.spin { animation: spin var(--spin-duration, 10s) linear infinite; }
@keyframes spin { from { transform: rotate(0deg); } to { transform: rotate(360deg); } }
.eq { display: flex; align-items: flex-end; height: 20px; gap: 2px; margin-top: 8px; }
.eq .bar { width: 4px; height: 4px; border-radius: 1px; animation: bounce 1s ease-in-out infinite alternate; }
@keyframes bounce { from { height: 3px; } to { height: 20px; } }
.logo { position: absolute; right: 10px; top: 10px; width: 20px; height: 20px; }
";

const WIDGET_CSS: &str = "
.backdrop { position: absolute; inset: -20px; background-size: cover; background-position: center; filter: blur(14px); }
.overlay { position: absolute; inset: 0; background: var(--overlay-color); }
.card { position: relative; display: flex; align-items: center; gap: 16px; height: 100%; }
.card .album { width: 100px; height: 100px; flex-shrink: 0; }
.info { min-width: 0; }
";

const VINYL_CSS: &str = "
.overlay { position: absolute; inset: 0; background: var(--overlay-color); }
.card { position: relative; display: flex; align-items: center; gap: 18px; height: 100%; }
.record { position: relative; width: 140px; height: 140px; flex-shrink: 0; }
.record .disc { position: absolute; inset: 0; width: 140px; height: 140px; }
.record .album { position: absolute; left: 42px; top: 42px; width: 56px; height: 56px; }
.needle { position: absolute; left: 110px; top: 0; width: 40px; height: 60px; }
.info { min-width: 0; }
";

const IPOD_CSS: &str = "
.widget { border-radius: 24px; display: flex; flex-direction: column; align-items: center; gap: 18px; }
.screen { width: 100%; background: #ffffff; border: var(--album-border-width) solid var(--album-border-color); border-radius: 8px; padding: 10px; box-sizing: border-box; text-align: center; }
.screen .album { width: 150px; height: 150px; }
.screen .title { font-size: 15px; }
.screen .artist { font-size: 13px; }
.wheel { width: 140px; height: 140px; border-radius: 50%; background: var(--controls-bg); border: 1px solid var(--controls-border); box-shadow: var(--controls-shadow); position: relative; }
.wheel .hub { position: absolute; left: 45px; top: 45px; width: 50px; height: 50px; border-radius: 50%; background: var(--background-color); border: 1px solid var(--controls-border); }
.wheel .label { position: absolute; color: var(--icon-color); font-size: 11px; font-weight: 700; }
";

const RETRO_CSS: &str = "
.widget { border-style: solid; border-width: 3px; border-top-color: var(--border-top-color); border-left-color: var(--border-left-color);
  border-right-color: var(--border-right-color); border-bottom-color: var(--border-bottom-color); display: flex; gap: 14px; align-items: center; }
.album { width: 110px; height: 110px; }
.panel { flex: 1; min-width: 0; background: var(--panel-bg-color); padding: 10px; }
.dots { display: flex; gap: 4px; margin-top: 10px; }
.dots span { width: 6px; height: 6px; background: var(--equalizer-bar-color); }
.dots span.off { background: var(--equalizer-progress-color); }
.buttons { display: flex; gap: 6px; margin-top: 10px; }
.buttons span { border: 1px solid var(--button-border); background: var(--button-bg-color); color: var(--button-color); padding: 1px 8px; font-size: 11px; }
";

const WINDOWS98_CSS: &str = "
.widget { border: 2px solid; border-color: var(--button-highlight) var(--button-dark-shadow) var(--button-dark-shadow) var(--button-highlight); }
.titlebar { background: var(--titlebar-bg); color: #ffffff; font-weight: 700; font-size: 12px; padding: 3px 6px; }
.body { display: flex; gap: 10px; padding: 8px; }
.album { width: 96px; height: 96px; border: 2px inset var(--button-shadow); }
.lcd { flex: 1; min-width: 0; background: #000000; padding: 6px; }
.lcd .title { color: #00ff00; font-size: 14px; }
.lcd .artist { color: #00c000; font-size: 12px; }
.buttons { display: flex; gap: 4px; margin-top: 8px; }
.buttons span { background: var(--button-face); border: 2px outset var(--button-highlight); font-size: 11px; padding: 1px 8px; }
";

const AERO_CSS: &str = "
.widget { border: 1px solid var(--header-border); border-radius: 6px; }
.header { background: var(--header-gradient); color: #ffffff; font-size: 12px; padding: 5px 10px; text-shadow: var(--text-shadow); position: relative; }
.header::after { content: ''; position: absolute; inset: 0 0 50% 0; background: var(--header-shine); }
.content { background: var(--content-gradient); display: flex; gap: 12px; padding: 12px; height: 100%; position: relative; }
.content::before { content: ''; position: absolute; inset: 0 0 60% 0; background: var(--glass-shine); }
.album { width: 100px; height: 100px; border: 2px solid var(--album-border); box-shadow: var(--album-shadow); }
.info { min-width: 0; position: relative; }
.title { text-shadow: var(--text-shadow); }
.buttons { display: flex; gap: 6px; margin-top: 10px; }
.buttons span { width: 24px; height: 24px; border-radius: 50%; background: var(--button-gradient); }
";

const MACINTOSH_CSS: &str = "
.widget { border: 2px solid #000000; }
.menubar { height: 18px; border-bottom: 2px solid #000000; background: repeating-linear-gradient(#000000 0 1px, var(--background-color) 1px 3px); text-align: center; }
.menubar span { background: var(--background-color); padding: 0 8px; font-size: 12px; }
.body { display: flex; gap: 12px; padding: 12px; }
.album { width: 120px; height: 120px; border: 2px solid #000000; filter: grayscale(100%); }
.status { position: absolute; left: 0; right: 0; bottom: 0; background: #000000; padding: 6px 10px; }
";

const WINDOWSXP_CSS: &str = "
.widget { background: linear-gradient(to bottom, var(--gradient-top), var(--gradient-middle) 45%, var(--gradient-bottom-1) 80%, var(--gradient-bottom-2)); display: flex; gap: 14px; padding: 14px; }
.album { width: 110px; height: 110px; box-shadow: var(--control-shadow); }
.info { min-width: 0; color: var(--player-active-white); }
.controls { display: flex; gap: 8px; margin-top: 14px; align-items: center; }
.controls span { width: 22px; height: 22px; border-radius: 50%; background: var(--button-blue); box-shadow: var(--control-shadow); }
.controls span.play { width: 32px; height: 32px; }
.controls span.off { background: var(--player-disable-white); }
";

fn css_variables(context: &RenderContext) -> String {
    let mut vars = String::new();
    if let Some(css) = &context.css {
        for (name, value) in css.variables() {
            vars.push_str(&format!("{}: {}; ", name, value));
        }
    }
    vars
}

fn album(context: &RenderContext) -> String {
    let class = if context.spin { "album spin" } else { "album" };
    format!(
        r#"<img class="{}" src="{}" alt="album art"/>"#,
        class,
        data_uri(&context.base_64_track_image)
    )
}

fn text_block(context: &RenderContext) -> String {
    format!(
        r#"<div class="title">{}</div><div class="artist">{}</div>"#,
        escape_xml(&context.track_name),
        escape_xml(&context.track_artist)
    )
}

fn equalizer(context: &RenderContext) -> String {
    if !context.show_equalizer {
        return String::new();
    }

    let rainbow = context.eq_color.eq_ignore_ascii_case("rainbow");
    let bars: String = (0..context.bar_count)
        .map(|i| {
            let color = if rainbow {
                RAINBOW_SPECTRUM[(i * 2) % RAINBOW_SPECTRUM.len()]
            } else {
                context.eq_color.as_str()
            };
            format!(
                r##"<span class="bar" style="background: #{}; animation-delay: -{}ms;"></span>"##,
                escape_xml(color),
                (i * 173) % 1000
            )
        })
        .collect();

    format!(r#"<div class="eq">{}</div>"#, bars)
}

fn logo(context: &RenderContext) -> String {
    if context.logo.is_empty() {
        return String::new();
    }
    format!(
        r#"<img class="logo" src="{}" alt="logo"/>"#,
        data_uri(&context.logo)
    )
}

fn body(template: Template, context: &RenderContext) -> String {
    match template {
        Template::Widget => format!(
            r#"<div class="backdrop" style="background-image: url('{image}');"></div><div class="overlay"></div><div class="card">{album}<div class="info">{text}{eq}</div></div>{logo}"#,
            image = data_uri(&context.base_64_track_image),
            album = album(context),
            text = text_block(context),
            eq = equalizer(context),
            logo = logo(context),
        ),
        Template::Vinyl => {
            let background = context
                .dynamic_colors
                .as_ref()
                .map(|c| format!(r#" style="background: {}; color: {};""#, c.gradient, c.text_color))
                .unwrap_or_default();
            let disc = context
                .vinyl_svg
                .as_deref()
                .map(|svg| format!(r#"<img class="disc spin" src="{}" alt=""/>"#, data_uri(svg)))
                .unwrap_or_default();
            let needle = context
                .vinyl_needle_svg
                .as_deref()
                .map(|svg| format!(r#"<img class="needle" src="{}" alt=""/>"#, data_uri(svg)))
                .unwrap_or_default();
            format!(
                r#"<div class="overlay"{background}></div><div class="card"><div class="record">{disc}{album}{needle}</div><div class="info">{text}{eq}</div></div>{logo}"#,
                background = background,
                disc = disc,
                album = album(context),
                needle = needle,
                text = text_block(context),
                eq = equalizer(context),
                logo = logo(context),
            )
        }
        Template::Ipod => format!(
            r#"<div class="screen">{album}{text}</div><div class="wheel"><span class="label" style="left: 56px; top: 8px;">MENU</span><span class="label" style="left: 10px; top: 62px;">&#9198;</span><span class="label" style="right: 10px; top: 62px;">&#9197;</span><span class="label" style="left: 62px; bottom: 8px;">&#9199;</span><div class="hub"></div></div>"#,
            album = album(context),
            text = text_block(context),
        ),
        Template::Retro => {
            let dots: String = (0..context.bar_count)
                .map(|i| if i < 6 { "<span></span>" } else { r#"<span class="off"></span>"# })
                .collect();
            format!(
                r#"{album}<div class="panel">{text}<div class="dots">{dots}</div>{eq}<div class="buttons"><span>&#9664;&#9664;</span><span>&#9654;</span><span>&#9654;&#9654;</span></div></div>"#,
                album = album(context),
                text = text_block(context),
                dots = dots,
                eq = equalizer(context),
            )
        }
        Template::Windows98 => format!(
            r#"<div class="titlebar">CD Player</div><div class="body">{album}<div class="lcd">{text}</div></div><div class="body buttons"><span>&#9654;</span><span>&#10074;&#10074;</span><span>&#9632;</span></div>"#,
            album = album(context),
            text = text_block(context),
        ),
        Template::FrutigerAero => format!(
            r#"<div class="header">Now Playing</div><div class="content">{album}<div class="info">{text}<div class="buttons"><span></span><span></span><span></span></div></div></div>"#,
            album = album(context),
            text = text_block(context),
        ),
        Template::Macintosh => format!(
            r#"<div class="menubar"><span>Now Playing</span></div><div class="body">{album}<div class="info"><div class="title">{title}</div></div></div><div class="status"><div class="artist">{artist}</div></div>"#,
            album = album(context),
            title = escape_xml(&context.track_name),
            artist = escape_xml(&context.track_artist),
        ),
        Template::WindowsXp => format!(
            r#"{album}<div class="info">{text}<div class="controls"><span class="off"></span><span class="play"></span><span class="off"></span></div></div>{logo}"#,
            album = album(context),
            text = text_block(context),
            logo = logo(context),
        ),
    }
}

/// Renders a themed context as a standalone SVG document.
pub fn render_widget(context: &RenderContext) -> String {
    let template = Template::resolve(context);
    let (width, height) = template.size();
    let theme_class = context.theme_name.as_deref().unwrap_or(template.name());

    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">
<foreignObject width="{width}" height="{height}">
<div xmlns="http://www.w3.org/1999/xhtml" class="widget theme-{theme} {style}" style="{vars}">
<style>{base}{extra}</style>
{body}
</div>
</foreignObject>
</svg>
"#,
        width = width,
        height = height,
        theme = escape_xml(theme_class),
        style = context.style,
        vars = escape_xml(&css_variables(context)),
        base = BASE_CSS,
        extra = template.stylesheet(),
        body = body(template, context),
    )
}

/// Small HTML page embedding Spotify's own player for the given track.
pub fn render_link_page(track_id: &str) -> String {
    let embed_link = format!(
        "https://open.spotify.com/embed/track/{}",
        escape_xml(track_id)
    );

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"/><title>Now Playing</title>
<style>body {{ margin: 0; background: #121212; display: flex; justify-content: center; align-items: center; height: 100vh; }}</style>
</head>
<body>
<iframe src="{embed_link}" width="300" height="380" frameborder="0" allowtransparency="true" allow="encrypted-media"></iframe>
</body>
</html>
"#,
        embed_link = embed_link
    )
}
