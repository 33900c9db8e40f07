//! The demo screen: one scroll panel and a status line.

use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use scrollpanel::{
    hit_path, initialize, Document, Element, Input, Listeners, Panel, PanelGeometry,
    ScrollPosition, SyncHandle, Terminal, UNSELECTABLE,
};

use crate::error::Result;
use crate::settings::Settings;

const LINES: &[&str] = &[
    "The thumb and the content move together.",
    "Drag the green thumb to scroll the list.",
    "The wheel works anywhere over the content.",
    "Releasing the button anywhere ends a drag.",
    "Text selection is locked while dragging.",
    "Press q or Esc to quit.",
];

fn demo_lines(count: usize) -> impl Iterator<Item = Element> {
    (1..=count).map(|i| Element::text(format!("{i:>4}  {}", LINES[i % LINES.len()])))
}

/// Run the demo until the user quits.
pub fn run(settings: Settings) -> Result<()> {
    let panel = Panel::new("demo")
        .config(settings.panel.clone())
        .children(demo_lines(settings.items));

    let mut term = Terminal::new()?;
    let (width, height) = term.size();
    log::info!("demo started in a {width}x{height} terminal");

    // First paint at the top, then measure what was laid out
    let root = screen(&panel, ScrollPosition::default(), "");
    let layout = term.render(&root, &settings.classes)?;
    let geometry = PanelGeometry::measure(layout, &panel.handles(), panel.panel_config())?;

    let mut listeners = Listeners::new();
    let mut handle = initialize(&geometry, panel.handles(), panel.panel_config(), &mut listeners);

    let result = event_loop(&mut term, &panel, &settings, &mut handle, &listeners);

    handle.dispose(&mut listeners);
    result
}

fn event_loop(
    term: &mut Terminal,
    panel: &Panel,
    settings: &Settings,
    handle: &mut SyncHandle,
    listeners: &Listeners,
) -> Result<()> {
    let mut document = Document::new();

    loop {
        let root = screen(panel, handle.position(), &status(handle, &document));
        term.render(&root, &settings.classes)?;

        let mut dirty = false;
        while !dirty {
            for event in term.poll(None)? {
                match event {
                    CrosstermEvent::Key(key) if is_quit(&key) => return Ok(()),
                    CrosstermEvent::Mouse(mouse) => {
                        let Some(input) = Input::from_crossterm(&mouse) else {
                            continue;
                        };
                        let path = hit_path(term.layout(), &root, mouse.column, mouse.row);
                        let targets = handle.handles().targets(&path);
                        let was_locked = document.has_class(UNSELECTABLE);

                        let moved = handle
                            .dispatch(listeners, &input, &targets, &mut document)
                            .is_some();
                        dirty |= moved || was_locked != document.has_class(UNSELECTABLE);
                    }
                    CrosstermEvent::Resize(width, height) => {
                        log::debug!("resized to {width}x{height}");
                        dirty = true;
                    }
                    _ => {}
                }
            }
        }
    }
}

fn is_quit(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

fn status(handle: &SyncHandle, document: &Document) -> String {
    let ranges = handle.ranges();
    if !ranges.is_scrollable() {
        return "content fits, nothing to scroll".to_string();
    }

    let position = handle.position();
    let lock = if document.is_selectable() {
        ""
    } else {
        "  [selection locked]"
    };
    format!(
        "row {:.0} of {:.0}{lock}",
        position.content_offset, ranges.content_scroll
    )
}

fn screen(panel: &Panel, position: ScrollPosition, status: &str) -> Element {
    Element::col()
        .id("screen")
        .child(panel.build(position))
        .child(Element::text(status.to_string()).id("status"))
}
