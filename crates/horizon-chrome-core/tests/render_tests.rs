//! Chrome painting through a recording surface.

mod support;

use horizon_chrome_core::render::ELLIPSIS;
use horizon_chrome_core::{
    CaptionButton, ChromeEvent, ChromeGeometry, ChromeMetrics, ChromePalette, ChromeRenderer,
    Color, DisplayList, DrawCommand, IconSource, PaintState, Size, Surface, fit_text,
};

use support::Window;

const LONG_TITLE: &str = "A very very very long window title that exceeds available space";

fn paint_window(window: &Window, title: &str) -> DisplayList {
    let geometry = window.state.geometry(&window.host);
    let paint_state = window
        .state
        .paint_state(window.host.maximized.get(), title, IconSource::Window);
    let mut list = DisplayList::new();
    window.state.renderer().paint(&mut list, &geometry, &paint_state);
    list
}

#[test]
fn test_long_title_truncates_to_longest_prefix() {
    let mut surface = DisplayList::new();
    let slot = 120;

    let fitted = fit_text(LONG_TITLE, slot, |text| surface.measure_text(text).width).unwrap();
    let prefix = fitted.strip_suffix(ELLIPSIS).unwrap();
    assert!(LONG_TITLE.starts_with(prefix));

    let prefix_width = surface.measure_text(prefix).width;
    let ellipsis_width = surface.measure_text(ELLIPSIS).width;
    assert!(prefix_width + ellipsis_width <= slot);

    // One more grapheme would not fit
    let longer = &LONG_TITLE[..prefix.len() + 1];
    assert!(surface.measure_text(longer).width + ellipsis_width > slot);
}

#[test]
fn test_long_title_in_narrow_window() {
    let mut window = Window::focused();
    // Title slot: from the icon region to the minimize button
    let metrics = ChromeMetrics::default();
    let width = 36 + 120 + metrics.left_padding + metrics.caption_button_width * 3 + 1;
    window.host.rect.set(horizon_chrome_core::Rect::new(200, 200, width, 300));
    let geometry = window.state.geometry(&window.host);
    assert_eq!(geometry.title_text.width(), 120);

    let list = paint_window(&window, LONG_TITLE);
    let texts: Vec<_> = list.texts().collect();
    assert_eq!(texts.len(), 1);
    assert!(texts[0].0.ends_with(ELLIPSIS));
    assert!(texts[0].0.len() * DisplayList::DEFAULT_ADVANCE as usize <= 120);
}

#[test]
fn test_title_skipped_when_nothing_fits() {
    let mut window = Window::focused();
    let metrics = ChromeMetrics::default();
    let width = 36 + metrics.left_padding + metrics.caption_button_width * 3 + 1 + 10;
    window.host.rect.set(horizon_chrome_core::Rect::new(0, 0, width, 300));

    let list = paint_window(&window, LONG_TITLE);
    assert_eq!(list.texts().count(), 0);
}

#[test]
fn test_foreground_switches_with_focus() {
    let palette = ChromePalette::default();
    let mut window = Window::created();

    let list = paint_window(&window, "Simple Window");
    assert_eq!(
        list.texts().collect::<Vec<_>>(),
        vec![("Simple Window", palette.foreground_unfocused)]
    );
    let geometry = window.state.geometry(&window.host);
    assert_eq!(list.fill_color(geometry.caption_area), Some(palette.title_bar_unfocused));

    window.send(ChromeEvent::FocusChanged { focused: true });
    let list = paint_window(&window, "Simple Window");
    assert_eq!(
        list.texts().collect::<Vec<_>>(),
        vec![("Simple Window", palette.foreground_focused)]
    );
    assert_eq!(list.fill_color(geometry.caption_area), Some(palette.title_bar_focused));
    assert_ne!(palette.foreground_focused, palette.foreground_unfocused);
}

#[test]
fn test_hovered_close_is_red() {
    let mut window = Window::focused();
    let geometry = window.state.geometry(&window.host);
    window.move_to(geometry.close.hit.center());
    assert_eq!(window.state.hovered, Some(CaptionButton::Close));

    let list = paint_window(&window, "Simple Window");
    assert_eq!(list.fill_color(geometry.close.paint), Some(Color::rgb(0xe8, 0x11, 0x23)));
    assert_eq!(
        list.fill_color(geometry.maximize.paint),
        Some(ChromePalette::default().title_bar_focused)
    );

    let glyph_lines: Vec<_> = list
        .commands()
        .iter()
        .filter_map(|command| match command {
            DrawCommand::Line { from, color, .. } if geometry.close.paint.contains(*from) => Some(*color),
            _ => None,
        })
        .collect();
    assert_eq!(glyph_lines, vec![Color::WHITE, Color::WHITE]);
}

#[test]
fn test_paint_is_read_only() {
    let mut window = Window::focused();
    window.move_to(geometry_center(&window));
    let before = window.state.clone();
    let _ = paint_window(&window, LONG_TITLE);
    assert_eq!(window.state, before);
}

#[test]
fn test_renderer_with_custom_palette() {
    let palette = ChromePalette {
        close_hover: Color::rgb(0x10, 0x20, 0x30),
        ..ChromePalette::default()
    };
    let metrics = ChromeMetrics::default();
    let renderer = ChromeRenderer::new(&metrics, palette);
    let geometry = ChromeGeometry::resolve(Size::new(700, 500), false, &metrics);
    let state = PaintState {
        maximized: false,
        focused: true,
        hovered: Some(CaptionButton::Close),
        pressed: None,
        title: "",
        icon: IconSource::Application,
    };

    let mut list = DisplayList::new();
    renderer.paint(&mut list, &geometry, &state);
    assert_eq!(list.fill_color(geometry.close.paint), Some(Color::rgb(0x10, 0x20, 0x30)));
    assert_eq!(list.texts().count(), 0);
    assert!(list.commands().contains(&DrawCommand::Icon {
        rect: geometry.icon,
        icon: IconSource::Application,
    }));
}

fn geometry_center(window: &Window) -> horizon_chrome_core::Point {
    window.state.geometry(&window.host).minimize.hit.center()
}
